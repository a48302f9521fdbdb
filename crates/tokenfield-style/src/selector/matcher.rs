//! Selector matching algorithm.

use super::{Combinator, PseudoClass, Selector, SelectorPart, TypeSelector};
use crate::tree::{Element, ElementTree, NodeId};

/// Tags that render a native placeholder.
const TEXT_CONTROL_TAGS: &[&str] = &["input", "textarea"];

/// Attribute a text control reads its placeholder from.
pub const PLACEHOLDER_ATTRIBUTE: &str = "placeholder";

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a full selector matches `node`, considering combinators.
    ///
    /// The selector is walked from right to left. Descendant and general
    /// sibling combinators backtrack, so `.a .b .c` finds a match even when
    /// the nearest `.b` ancestor has no `.a` above it but a farther one does.
    ///
    /// The pseudo-element, if any, is not checked here; callers select rules
    /// by pseudo-element before matching.
    pub fn matches(selector: &Selector, tree: &ElementTree, node: NodeId) -> bool {
        if selector.parts.is_empty() || selector.combinators.len() + 1 != selector.parts.len() {
            return false;
        }
        Self::matches_from(selector, selector.parts.len() - 1, tree, node)
    }

    fn matches_from(selector: &Selector, index: usize, tree: &ElementTree, node: NodeId) -> bool {
        if !Self::part_matches(&selector.parts[index], tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        let next = index - 1;
        match selector.combinators[next] {
            Combinator::Descendant => tree
                .ancestors(node)
                .into_iter()
                .any(|ancestor| Self::matches_from(selector, next, tree, ancestor)),
            Combinator::Child => tree
                .get(node)
                .and_then(Element::parent)
                .is_some_and(|parent| Self::matches_from(selector, next, tree, parent)),
            Combinator::AdjacentSibling => tree
                .previous_siblings(node)
                .first()
                .is_some_and(|&prev| Self::matches_from(selector, next, tree, prev)),
            Combinator::GeneralSibling => tree
                .previous_siblings(node)
                .into_iter()
                .any(|prev| Self::matches_from(selector, next, tree, prev)),
        }
    }

    /// Check if a compound selector matches a single element.
    pub fn part_matches(part: &SelectorPart, tree: &ElementTree, node: NodeId) -> bool {
        let Some(element) = tree.get(node) else {
            return false;
        };

        if let Some(TypeSelector::Type(name)) = &part.type_selector
            && !name.eq_ignore_ascii_case(&element.tag)
        {
            return false;
        }

        if let Some(id) = &part.id
            && element.id.as_deref() != Some(id.as_str())
        {
            return false;
        }

        // All classes must match
        if !part.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }

        part.pseudo_classes
            .iter()
            .all(|pseudo| Self::pseudo_matches(pseudo, tree, node, element))
    }

    /// Check if a pseudo-class matches the element state.
    fn pseudo_matches(
        pseudo: &PseudoClass,
        tree: &ElementTree,
        node: NodeId,
        element: &Element,
    ) -> bool {
        match pseudo {
            PseudoClass::Hover => element.state.hovered,
            PseudoClass::Focus => element.state.focused,
            PseudoClass::PlaceholderShown => Self::placeholder_shown(element),
            PseudoClass::Empty => element.children().is_empty() && !element.state.has_text,
            PseudoClass::Not(inner) => !Self::part_matches(inner, tree, node),
            PseudoClass::Has(inner) => tree
                .descendants(node)
                .into_iter()
                .any(|descendant| Self::part_matches(inner, tree, descendant)),
        }
    }

    /// A text control shows its placeholder while it has one and holds no text.
    pub fn placeholder_shown(element: &Element) -> bool {
        TEXT_CONTROL_TAGS
            .iter()
            .any(|tag| element.tag.eq_ignore_ascii_case(tag))
            && element.attribute(PLACEHOLDER_ATTRIBUTE).is_some()
            && !element.state.has_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementState;

    struct Fixture {
        tree: ElementTree,
        wrapper: NodeId,
        input: NodeId,
        button: NodeId,
    }

    fn fixture() -> Fixture {
        let mut tree = ElementTree::new();
        let wrapper = tree.insert_root(
            Element::new("div")
                .with_class("input-element-wrapper")
                .with_class("has-input-button"),
        );
        let input = tree
            .append_child(
                wrapper,
                Element::new("input")
                    .with_class("input")
                    .with_attribute("placeholder", "Search"),
            )
            .unwrap();
        let button = tree
            .append_child(wrapper, Element::new("button").with_class("input-button"))
            .unwrap();
        Fixture {
            tree,
            wrapper,
            input,
            button,
        }
    }

    #[test]
    fn type_and_class_matches() {
        let f = fixture();
        assert!(SelectorMatcher::part_matches(&SelectorPart::type_only("input"), &f.tree, f.input));
        assert!(!SelectorMatcher::part_matches(&SelectorPart::type_only("div"), &f.tree, f.input));
        assert!(SelectorMatcher::part_matches(&SelectorPart::universal(), &f.tree, f.input));

        let both = SelectorPart::class_only("input-element-wrapper").with_class("has-input-button");
        assert!(SelectorMatcher::part_matches(&both, &f.tree, f.wrapper));
        let missing = SelectorPart::class_only("input-element-wrapper").with_class("has-input-icon");
        assert!(!SelectorMatcher::part_matches(&missing, &f.tree, f.wrapper));
    }

    #[test]
    fn state_pseudo_classes() {
        let mut f = fixture();
        let hover = SelectorPart::new().with_pseudo(PseudoClass::Hover);
        let focus = SelectorPart::new().with_pseudo(PseudoClass::Focus);
        assert!(!SelectorMatcher::part_matches(&hover, &f.tree, f.input));

        f.tree
            .set_state(
                f.input,
                ElementState {
                    hovered: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(SelectorMatcher::part_matches(&hover, &f.tree, f.input));
        assert!(!SelectorMatcher::part_matches(&focus, &f.tree, f.input));
    }

    #[test]
    fn placeholder_shown_tracks_text() {
        let mut f = fixture();
        let shown = SelectorPart::new().with_pseudo(PseudoClass::PlaceholderShown);
        assert!(SelectorMatcher::part_matches(&shown, &f.tree, f.input));

        f.tree.update_state(f.input, |s| s.has_text = true).unwrap();
        assert!(!SelectorMatcher::part_matches(&shown, &f.tree, f.input));

        // Buttons never show a placeholder.
        assert!(!SelectorMatcher::part_matches(&shown, &f.tree, f.button));
    }

    #[test]
    fn descendant_and_sibling_combinators() {
        let f = fixture();
        let sel = Selector::class("input-element-wrapper").descendant(SelectorPart::class_only("input"));
        assert!(SelectorMatcher::matches(&sel, &f.tree, f.input));
        assert!(!SelectorMatcher::matches(&sel, &f.tree, f.wrapper));

        let sel = Selector::from_part(
            SelectorPart::class_only("input").with_pseudo(PseudoClass::PlaceholderShown),
        )
        .sibling(SelectorPart::class_only("input-button"));
        assert!(SelectorMatcher::matches(&sel, &f.tree, f.button));

        // The sibling must precede the subject.
        let reversed = Selector::class("input-button").sibling(SelectorPart::class_only("input"));
        assert!(!SelectorMatcher::matches(&reversed, &f.tree, f.input));
    }

    #[test]
    fn descendant_backtracks_past_nearer_ancestor() {
        let mut tree = ElementTree::new();
        let outer = tree.insert_root(Element::new("div").with_class("a"));
        let middle = tree.append_child(outer, Element::new("div").with_class("b")).unwrap();
        let inner = tree.append_child(middle, Element::new("div").with_class("b")).unwrap();
        let leaf = tree.append_child(inner, Element::new("span").with_class("c")).unwrap();

        let sel = Selector::class("a")
            .child(SelectorPart::class_only("b"))
            .descendant(SelectorPart::class_only("c"));
        assert!(SelectorMatcher::matches(&sel, &tree, leaf));
    }

    #[test]
    fn has_and_not_pseudo_classes() {
        let mut tree = ElementTree::new();
        let container = tree.insert_root(Element::new("div").with_class("pill-container"));
        let entry = tree.append_child(container, Element::new("div").with_class("input")).unwrap();

        let has_pill = SelectorPart::class_only("pill-container")
            .with_pseudo(PseudoClass::Has(Box::new(SelectorPart::class_only("pill"))));
        let no_pill = SelectorPart::class_only("pill-container").with_pseudo(PseudoClass::Not(
            Box::new(SelectorPart::new().with_pseudo(PseudoClass::Has(Box::new(
                SelectorPart::class_only("pill"),
            )))),
        ));
        let has_empty_entry = SelectorPart::new().with_pseudo(PseudoClass::Has(Box::new(
            SelectorPart::class_only("input").with_pseudo(PseudoClass::Empty),
        )));

        assert!(!SelectorMatcher::part_matches(&has_pill, &tree, container));
        assert!(SelectorMatcher::part_matches(&no_pill, &tree, container));
        assert!(SelectorMatcher::part_matches(&has_empty_entry, &tree, container));

        tree.update_state(entry, |s| s.has_text = true).unwrap();
        assert!(!SelectorMatcher::part_matches(&has_empty_entry, &tree, container));

        tree.append_child(container, Element::new("div").with_class("pill")).unwrap();
        assert!(SelectorMatcher::part_matches(&has_pill, &tree, container));
        assert!(!SelectorMatcher::part_matches(&no_pill, &tree, container));
    }
}

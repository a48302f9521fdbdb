//! Main style resolution engine.

use crate::resolve::cache::{StyleCache, StyleCacheKey};
use crate::resolve::cascade::cascade_rules;
use crate::resolve::inheritance::resolve_properties;
use crate::rules::{StyleRule, StyleSheet};
use crate::selector::{PseudoElement, SelectorMatcher};
use crate::style::{ComputedStyle, StyleProperties};
use crate::targets;
use crate::tree::{ElementTree, NodeId};

/// Default root font size (for rem units).
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// The main style resolution engine.
///
/// The engine manages stylesheets, matches selectors against an
/// [`ElementTree`], cascades properties, and resolves final computed styles.
pub struct StyleEngine {
    /// All registered stylesheets, sorted by priority.
    stylesheets: Vec<StyleSheet>,
    /// Style cache for performance.
    cache: StyleCache,
    /// Root font size (for rem units).
    root_font_size: f32,
}

impl StyleEngine {
    /// Create an empty style engine.
    pub fn new() -> Self {
        Self {
            stylesheets: vec![],
            cache: StyleCache::new(),
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
        }
    }

    /// Get the root font size.
    pub fn root_font_size(&self) -> f32 {
        self.root_font_size
    }

    /// Add a stylesheet.
    ///
    /// Sheets of equal priority keep insertion order, so a later sheet wins
    /// ties against an earlier one.
    pub fn add_stylesheet(&mut self, stylesheet: StyleSheet) {
        tracing::debug!(
            target: targets::ENGINE,
            rules = stylesheet.len(),
            priority = ?stylesheet.priority,
            "adding stylesheet"
        );
        self.stylesheets.push(stylesheet);
        self.stylesheets.sort_by_key(|s| s.priority);
        self.cache.invalidate_all();
    }

    /// Clear all stylesheets.
    pub fn clear_stylesheets(&mut self) {
        self.stylesheets.clear();
        self.cache.invalidate_all();
    }

    /// Compute the style for an element.
    ///
    /// This performs the full style resolution:
    /// 1. Compute the parent's style (for inheritance)
    /// 2. Find all matching rules
    /// 3. Sort by priority, specificity, and source order
    /// 4. Cascade properties
    /// 5. Resolve to computed values
    ///
    /// An unknown node resolves to the default style.
    pub fn compute_style(&mut self, tree: &ElementTree, node: NodeId) -> ComputedStyle {
        let key = StyleCacheKey::new(tree, node, None);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let Some(element) = tree.get(node) else {
            tracing::warn!(target: targets::ENGINE, ?node, "style requested for unknown node");
            return ComputedStyle::default();
        };

        let parent_style = element.parent().map(|parent| self.compute_style(tree, parent));

        let (cascaded, matched) = self.cascade(tree, node, None);
        let computed = resolve_properties(
            &cascaded,
            parent_style.as_ref(),
            self.root_font_size,
            Some(element),
        );

        tracing::trace!(
            target: targets::ENGINE,
            tag = %element.tag,
            matched,
            "computed style"
        );

        self.cache.insert(key, computed.clone());
        computed
    }

    /// Compute the style of a pseudo-element of `node`.
    ///
    /// Returns `None` when no rule targets the pseudo-element, or for
    /// `::placeholder` when the element is not showing its placeholder.
    /// The element's own computed style is the inheritance parent.
    pub fn compute_pseudo(
        &mut self,
        tree: &ElementTree,
        node: NodeId,
        pseudo: PseudoElement,
    ) -> Option<ComputedStyle> {
        let element = tree.get(node)?;
        if pseudo == PseudoElement::Placeholder && !SelectorMatcher::placeholder_shown(element) {
            return None;
        }

        let key = StyleCacheKey::new(tree, node, Some(pseudo));
        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }

        let (cascaded, matched) = self.cascade(tree, node, Some(pseudo));
        if matched == 0 {
            return None;
        }

        let host = self.compute_style(tree, node);
        let computed = resolve_properties(&cascaded, Some(&host), self.root_font_size, Some(element));
        self.cache.insert(key, computed.clone());
        Some(computed)
    }

    /// Collect the rules matching `node` for `pseudo` and cascade them.
    ///
    /// Returns the cascaded properties and the number of matched rules.
    fn cascade(
        &self,
        tree: &ElementTree,
        node: NodeId,
        pseudo: Option<PseudoElement>,
    ) -> (StyleProperties, usize) {
        let mut matched: Vec<(&StyleRule, u32)> = vec![];
        let mut base = 0u32;

        for stylesheet in &self.stylesheets {
            let priority_offset = stylesheet.priority.as_order_offset();
            for rule in &stylesheet.rules {
                if rule.selector.pseudo_element == pseudo
                    && SelectorMatcher::matches(&rule.selector, tree, node)
                {
                    matched.push((rule, priority_offset | (base + rule.order)));
                }
            }
            base += stylesheet.next_order();
        }

        let count = matched.len();
        (cascade_rules(&mut matched), count)
    }

    /// Drop cached styles computed for older generations of `tree`.
    pub fn invalidate(&mut self, tree: &ElementTree) {
        self.cache.retain_generation(tree);
    }

    /// Invalidate all cached styles.
    pub fn invalidate_all(&mut self) {
        self.cache.invalidate_all();
    }

    /// Get the number of loaded stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    /// Get the total number of rules across all stylesheets.
    pub fn rule_count(&self) -> usize {
        self.stylesheets.iter().map(|s| s.len()).sum()
    }

    #[cfg(test)]
    fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StylePriority;
    use crate::selector::{PseudoClass, Selector, SelectorPart};
    use crate::style::Style;
    use crate::theme::ThemeVariables;
    use crate::tree::{Element, ElementState};
    use crate::types::{Color, Content, LengthValue};

    fn single(tag: &str, class: &str) -> (ElementTree, NodeId) {
        let mut tree = ElementTree::new();
        let node = tree.insert_root(Element::new(tag).with_class(class));
        (tree, node)
    }

    #[test]
    fn engine_basic_resolution() {
        let mut engine = StyleEngine::new();

        let mut sheet = StyleSheet::application();
        sheet.add_rule(
            Selector::type_selector("input"),
            Style::new()
                .background_color(Color::BLUE)
                .color(Color::WHITE)
                .build(),
        );
        engine.add_stylesheet(sheet);

        let (tree, node) = single("input", "input-element");
        let computed = engine.compute_style(&tree, node);

        assert_eq!(computed.color, Color::WHITE);
        assert_eq!(computed.background_color, Color::BLUE);
    }

    #[test]
    fn engine_specificity_ordering() {
        let mut engine = StyleEngine::new();
        let mut sheet = StyleSheet::application();

        // Class selector (specificity 0,1,0) - should win despite coming first
        sheet.add_rule(
            Selector::class("input-element"),
            Style::new().color(Color::BLUE).build(),
        );
        sheet.add_rule(
            Selector::type_selector("input"),
            Style::new().color(Color::RED).build(),
        );
        engine.add_stylesheet(sheet);

        let (tree, node) = single("input", "input-element");
        assert_eq!(engine.compute_style(&tree, node).color, Color::BLUE);
    }

    #[test]
    fn later_rule_wins_equal_specificity() {
        let mut engine = StyleEngine::new();
        let mut sheet = StyleSheet::component();
        sheet.add_rule(
            Selector::from_part(SelectorPart::class_only("input-element").with_pseudo(PseudoClass::Hover)),
            Style::new().outline_color(Color::GRAY).build(),
        );
        sheet.add_rule(
            Selector::from_part(SelectorPart::class_only("input-element").with_pseudo(PseudoClass::Focus)),
            Style::new().outline_color(Color::BLUE).build(),
        );
        engine.add_stylesheet(sheet);

        let (mut tree, node) = single("input", "input-element");
        tree.set_state(
            node,
            ElementState {
                hovered: true,
                focused: true,
                has_text: false,
            },
        )
        .unwrap();

        assert_eq!(engine.compute_style(&tree, node).outline_color, Color::BLUE);
    }

    #[test]
    fn application_sheet_beats_component_specificity() {
        let mut engine = StyleEngine::new();

        let mut component = StyleSheet::component();
        component.add_rule(
            Selector::class("input-element").descendant(SelectorPart::class_only("input-icon")),
            Style::new().color(Color::RED).build(),
        );
        engine.add_stylesheet(component);

        let mut app = StyleSheet::new(StylePriority::Application);
        app.add_rule(Selector::type_selector("span"), Style::new().color(Color::GREEN).build());
        engine.add_stylesheet(app);

        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::new("div").with_class("input-element"));
        let icon = tree
            .append_child(root, Element::new("span").with_class("input-icon"))
            .unwrap();

        assert_eq!(engine.compute_style(&tree, icon).color, Color::GREEN);
    }

    #[test]
    fn font_size_flows_to_children() {
        let mut engine = StyleEngine::new();
        let sheet = StyleSheet::from_css(
            ".wrapper { font-size: 20px; } .icon { margin-top: 0.5em; }",
            StylePriority::Component,
            &ThemeVariables::new(),
        )
        .unwrap();
        engine.add_stylesheet(sheet);

        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::new("div").with_class("wrapper"));
        let icon = tree
            .append_child(root, Element::new("span").with_class("icon"))
            .unwrap();

        let computed = engine.compute_style(&tree, icon);
        assert_eq!(computed.font_size, 20.0);
        assert_eq!(computed.margin.top, 10.0);
    }

    #[test]
    fn pseudo_element_styles() {
        let mut engine = StyleEngine::new();
        let mut sheet = StyleSheet::component();
        sheet.add_rule(
            Selector::from_part(SelectorPart::class_only("input").with_pseudo(PseudoClass::Empty))
                .with_pseudo_element(PseudoElement::Before),
            Style::new()
                .content(Content::Attr("data-placeholder".into()))
                .color(Color::GRAY)
                .build(),
        );
        sheet.add_rule(
            Selector::class("input"),
            Style::new().font_size(LengthValue::px(18.0)).build(),
        );
        engine.add_stylesheet(sheet);

        let mut tree = ElementTree::new();
        let node = tree.insert_root(
            Element::new("div")
                .with_class("input")
                .with_attribute("data-placeholder", "Search"),
        );

        let before = engine
            .compute_pseudo(&tree, node, PseudoElement::Before)
            .unwrap();
        assert_eq!(before.content.as_deref(), Some("Search"));
        assert_eq!(before.color, Color::GRAY);
        assert_eq!(before.font_size, 18.0);

        // The element itself is not affected by ::before rules
        assert_eq!(engine.compute_style(&tree, node).color, Color::BLACK);

        tree.update_state(node, |state| state.has_text = true).unwrap();
        assert!(engine.compute_pseudo(&tree, node, PseudoElement::Before).is_none());
    }

    #[test]
    fn placeholder_requires_placeholder_shown() {
        let mut engine = StyleEngine::new();
        let mut sheet = StyleSheet::component();
        sheet.add_rule(
            Selector::type_selector("input").with_pseudo_element(PseudoElement::Placeholder),
            Style::new().color(Color::GRAY).build(),
        );
        engine.add_stylesheet(sheet);

        let mut tree = ElementTree::new();
        let node = tree.insert_root(Element::new("input").with_attribute("placeholder", "Name"));
        assert!(engine.compute_pseudo(&tree, node, PseudoElement::Placeholder).is_some());

        tree.update_state(node, |state| state.has_text = true).unwrap();
        assert!(engine.compute_pseudo(&tree, node, PseudoElement::Placeholder).is_none());
    }

    #[test]
    fn engine_caching() {
        let mut engine = StyleEngine::new();
        let mut sheet = StyleSheet::application();
        sheet.add_rule(
            Selector::type_selector("input"),
            Style::new().color(Color::RED).build(),
        );
        engine.add_stylesheet(sheet);

        let (mut tree, node) = single("input", "input-element");

        let _ = engine.compute_style(&tree, node);
        assert_eq!(engine.cache_size(), 1);
        let _ = engine.compute_style(&tree, node);
        assert_eq!(engine.cache_size(), 1);

        tree.update_state(node, |state| state.hovered = true).unwrap();
        engine.invalidate(&tree);
        assert_eq!(engine.cache_size(), 0);
    }
}

//! Host markup for an input, as an element tree.
//!
//! The tree mirrors what a host renders:
//!
//! ```text
//! div.input-element-wrapper[.has-input-icon][.has-input-button][.has-input-pills][.filter-input]
//! ├── span.input-icon                                (has_icon)
//! ├── input.input-element[placeholder]               (plain surface)
//! │   or div.input-element.pill-container            (pill surface)
//! │      ├── div.pill ...
//! │      └── div.input[data-placeholder]
//! └── button.input-button[.input-close-filter-button] (has_button)
//! ```
//!
//! Interaction and text presence live on the editable node: the native
//! input, or the text entry inside a pill container.

use tokenfield_style::selector::PLACEHOLDER_ATTRIBUTE;
use tokenfield_style::tree::{Element, ElementState, ElementTree, NodeId};

use crate::Result;
use crate::state::WidgetState;

/// Class names the stylesheet keys on.
pub mod classes {
    pub const WRAPPER: &str = "input-element-wrapper";
    pub const HAS_ICON: &str = "has-input-icon";
    pub const HAS_BUTTON: &str = "has-input-button";
    pub const HAS_PILLS: &str = "has-input-pills";
    pub const FILTER: &str = "filter-input";
    pub const SURFACE: &str = "input-element";
    pub const PILL_CONTAINER: &str = "pill-container";
    pub const TEXT_ENTRY: &str = "input";
    pub const PILL: &str = "pill";
    pub const ICON: &str = "input-icon";
    pub const BUTTON: &str = "input-button";
    pub const CLOSE_FILTER_BUTTON: &str = "input-close-filter-button";
}

/// Attribute carrying the placeholder of a pill container's text entry.
pub const DATA_PLACEHOLDER: &str = "data-placeholder";

/// Host-supplied content that is not part of the widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMarkup {
    /// Placeholder text. Native attribute on plain surfaces,
    /// `data-placeholder` on pill text entries.
    pub placeholder: Option<String>,
    /// Whether a filter input renders its clear button.
    pub close_button: bool,
}

impl InputMarkup {
    /// Markup without a placeholder.
    pub fn new() -> Self {
        Self {
            placeholder: None,
            close_button: true,
        }
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Leave out the filter clear button.
    pub fn without_close_button(mut self) -> Self {
        self.close_button = false;
        self
    }
}

impl Default for InputMarkup {
    fn default() -> Self {
        Self::new()
    }
}

/// Nodes of interest in an input's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNodes {
    /// Grid wrapper.
    pub wrapper: NodeId,
    /// Leading icon.
    pub icon: Option<NodeId>,
    /// The `.input-element` surface.
    pub surface: NodeId,
    /// Text entry inside a pill container.
    pub entry: Option<NodeId>,
    /// Pills inside a pill container.
    pub pills: Vec<NodeId>,
    /// Trailing button.
    pub button: Option<NodeId>,
}

impl InputNodes {
    /// The node carrying hover, focus and text.
    pub fn editable(&self) -> NodeId {
        self.entry.unwrap_or(self.surface)
    }
}

/// An input's element tree, kept in step with its widget state.
#[derive(Debug)]
pub struct InputTree {
    tree: ElementTree,
    nodes: InputNodes,
    state: WidgetState,
    markup: InputMarkup,
}

impl InputTree {
    /// Build the tree for `state`.
    pub fn new(state: WidgetState, markup: InputMarkup) -> Result<Self> {
        let mut tree = ElementTree::new();
        let nodes = build(&mut tree, &state, &markup)?;
        Ok(Self {
            tree,
            nodes,
            state,
            markup,
        })
    }

    /// Move to a new widget state.
    ///
    /// Interaction and text changes only touch element state; a different
    /// variant or pill count rebuilds the tree.
    pub fn update(&mut self, state: WidgetState) -> Result<()> {
        if state.variant != self.state.variant || state.pills() != self.state.pills() {
            self.nodes = build(&mut self.tree, &state, &self.markup)?;
        } else {
            self.tree.set_state(self.nodes.editable(), editable_state(&state))?;
        }
        self.state = state;
        Ok(())
    }

    /// The element tree.
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Nodes of interest.
    pub fn nodes(&self) -> &InputNodes {
        &self.nodes
    }

    /// The current widget state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// The host markup.
    pub fn markup(&self) -> &InputMarkup {
        &self.markup
    }
}

fn editable_state(state: &WidgetState) -> ElementState {
    ElementState {
        hovered: state.interaction.hovered,
        focused: state.interaction.focused,
        has_text: !state.content.is_empty(),
    }
}

/// Replace the contents of `tree` with the markup for `state`.
fn build(tree: &mut ElementTree, state: &WidgetState, markup: &InputMarkup) -> Result<InputNodes> {
    let variant = state.variant;

    let mut wrapper = Element::new("div").with_class(classes::WRAPPER);
    for (flag, class) in [
        (variant.has_icon, classes::HAS_ICON),
        (variant.has_button, classes::HAS_BUTTON),
        (variant.has_pills, classes::HAS_PILLS),
        (variant.filter, classes::FILTER),
    ] {
        if flag {
            wrapper = wrapper.with_class(class);
        }
    }
    let wrapper = tree.insert_root(wrapper);

    let icon = if variant.has_icon {
        Some(tree.append_child(wrapper, Element::new("span").with_class(classes::ICON))?)
    } else {
        None
    };

    let editable = editable_state(state);
    let (surface, entry, pills) = if variant.has_pills {
        let surface = tree.append_child(
            wrapper,
            Element::new("div")
                .with_class(classes::SURFACE)
                .with_class(classes::PILL_CONTAINER),
        )?;

        let pills = (0..state.pills())
            .map(|_| {
                let pill = Element::new("div").with_class(classes::PILL).with_state(ElementState {
                    has_text: true,
                    ..Default::default()
                });
                tree.append_child(surface, pill)
            })
            .collect::<tokenfield_style::Result<Vec<_>>>()?;

        let mut text_entry = Element::new("div")
            .with_class(classes::TEXT_ENTRY)
            .with_state(editable);
        if let Some(placeholder) = &markup.placeholder {
            text_entry = text_entry.with_attribute(DATA_PLACEHOLDER, placeholder.as_str());
        }
        let entry = tree.append_child(surface, text_entry)?;

        (surface, Some(entry), pills)
    } else {
        let mut input = Element::new("input")
            .with_class(classes::SURFACE)
            .with_state(editable);
        if let Some(placeholder) = &markup.placeholder {
            input = input.with_attribute(PLACEHOLDER_ATTRIBUTE, placeholder.as_str());
        }
        (tree.append_child(wrapper, input)?, None, vec![])
    };

    let button = if variant.has_button && (!variant.filter || markup.close_button) {
        let mut button = Element::new("button").with_class(classes::BUTTON);
        if variant.filter {
            button = button.with_class(classes::CLOSE_FILTER_BUTTON);
        }
        Some(tree.append_child(wrapper, button)?)
    } else {
        None
    };

    Ok(InputNodes {
        wrapper,
        icon,
        surface,
        entry,
        pills,
        button,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContentState, InputVariant, Interaction};

    #[test]
    fn plain_markup() {
        let state = WidgetState::new(InputVariant::plain().with_icon().with_button());
        let input = InputTree::new(state, InputMarkup::new().with_placeholder("Search")).unwrap();
        let tree = input.tree();
        let nodes = input.nodes();

        let wrapper = tree.get(nodes.wrapper).unwrap();
        assert!(wrapper.has_class(classes::HAS_ICON));
        assert!(wrapper.has_class(classes::HAS_BUTTON));
        assert!(!wrapper.has_class(classes::FILTER));

        let surface = tree.get(nodes.surface).unwrap();
        assert_eq!(surface.tag, "input");
        assert_eq!(surface.attribute(PLACEHOLDER_ATTRIBUTE), Some("Search"));
        assert_eq!(wrapper.children(), &[nodes.icon.unwrap(), nodes.surface, nodes.button.unwrap()]);
        assert_eq!(nodes.editable(), nodes.surface);
    }

    #[test]
    fn pill_markup() {
        let state = WidgetState::new(InputVariant::plain().with_pills()).with_pill_count(2);
        let input = InputTree::new(state, InputMarkup::new().with_placeholder("Add")).unwrap();
        let tree = input.tree();
        let nodes = input.nodes();

        assert_eq!(nodes.pills.len(), 2);
        let entry = tree.get(nodes.entry.unwrap()).unwrap();
        assert_eq!(entry.attribute(DATA_PLACEHOLDER), Some("Add"));
        assert_eq!(tree.get(nodes.surface).unwrap().children().last(), nodes.entry.as_ref());
    }

    #[test]
    fn filter_button_can_be_omitted() {
        let state = WidgetState::new(InputVariant::plain().filter());
        let input = InputTree::new(state, InputMarkup::new().without_close_button()).unwrap();
        assert!(input.nodes().button.is_none());

        let input = InputTree::new(state, InputMarkup::new()).unwrap();
        let button = input.tree().get(input.nodes().button.unwrap()).unwrap();
        assert!(button.has_class(classes::CLOSE_FILTER_BUTTON));
    }

    #[test]
    fn update_keeps_structure_for_interaction() {
        let state = WidgetState::new(InputVariant::plain());
        let mut input = InputTree::new(state, InputMarkup::new()).unwrap();
        let surface = input.nodes().surface;
        let generation = input.tree().generation();

        input
            .update(
                state
                    .with_interaction(Interaction::focused())
                    .with_content(ContentState::NonEmpty),
            )
            .unwrap();

        assert_eq!(input.nodes().surface, surface);
        assert!(input.tree().generation() > generation);
        let element = input.tree().get(surface).unwrap();
        assert!(element.state.focused);
        assert!(element.state.has_text);
    }

    #[test]
    fn update_rebuilds_on_pill_change() {
        let state = WidgetState::new(InputVariant::plain().with_pills());
        let mut input = InputTree::new(state, InputMarkup::new()).unwrap();
        input.update(state.with_pill_count(1)).unwrap();
        assert_eq!(input.nodes().pills.len(), 1);
        assert_eq!(input.tree().len(), 4);
    }
}

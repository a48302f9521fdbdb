//! Container-level hover and focus derived from descendant events.
//!
//! A pill container is hovered or focused whenever its text entry is. The
//! stylesheet expresses this with `:has()`. Hosts that drive their own
//! rendering can instead feed pointer and focus events into
//! [`DescendantInteraction`] and read one container-level [`Interaction`].

use std::collections::HashSet;

use tokenfield_style::tree::NodeId;

use crate::state::Interaction;

/// Pointer or focus change on a descendant of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The pointer entered a descendant.
    PointerEnter(NodeId),
    /// The pointer left a descendant.
    PointerLeave(NodeId),
    /// A descendant gained keyboard focus.
    FocusIn(NodeId),
    /// A descendant lost keyboard focus.
    FocusOut(NodeId),
}

/// Tracks which descendants of a container are hovered or focused.
#[derive(Debug, Default)]
pub struct DescendantInteraction {
    /// Descendants under the pointer. Nested elements may all be hovered.
    hovered: HashSet<NodeId>,
    /// The focused descendant, if any.
    focused: Option<NodeId>,
}

impl DescendantInteraction {
    /// Create a tracker with nothing hovered or focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The container-level interaction.
    pub fn interaction(&self) -> Interaction {
        Interaction {
            hovered: !self.hovered.is_empty(),
            focused: self.focused.is_some(),
        }
    }

    /// The focused descendant.
    #[inline]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Check if a specific descendant is hovered.
    #[inline]
    pub fn is_hovered(&self, node: NodeId) -> bool {
        self.hovered.contains(&node)
    }

    /// Apply an event.
    ///
    /// Returns `true` if the container-level interaction changed.
    pub fn apply(&mut self, event: InteractionEvent) -> bool {
        let before = self.interaction();

        match event {
            InteractionEvent::PointerEnter(node) => {
                self.hovered.insert(node);
            }
            InteractionEvent::PointerLeave(node) => {
                self.hovered.remove(&node);
            }
            InteractionEvent::FocusIn(node) => self.focused = Some(node),
            // A late focus-out from a previous descendant must not clear
            // focus that already moved on
            InteractionEvent::FocusOut(node) => {
                if self.focused == Some(node) {
                    self.focused = None;
                }
            }
        }

        self.interaction() != before
    }

    /// Forget a descendant that left the tree.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let before = self.interaction();
        self.hovered.remove(&node);
        if self.focused == Some(node) {
            self.focused = None;
        }
        self.interaction() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenfield_style::tree::{Element, ElementTree};

    fn nodes() -> (NodeId, NodeId) {
        let mut tree = ElementTree::new();
        let container = tree.insert_root(Element::new("div").with_class("pill-container"));
        let entry = tree
            .append_child(container, Element::new("div").with_class("input"))
            .unwrap();
        let pill = tree
            .append_child(container, Element::new("div").with_class("pill"))
            .unwrap();
        (entry, pill)
    }

    #[test]
    fn hover_and_focus_lift_to_container() {
        let (entry, _) = nodes();
        let mut tracker = DescendantInteraction::new();

        assert!(tracker.apply(InteractionEvent::PointerEnter(entry)));
        assert_eq!(tracker.interaction(), Interaction::hovered());

        assert!(tracker.apply(InteractionEvent::FocusIn(entry)));
        assert!(tracker.interaction().focused);

        assert!(tracker.apply(InteractionEvent::PointerLeave(entry)));
        assert_eq!(tracker.interaction(), Interaction::focused());
    }

    #[test]
    fn stale_focus_out_is_ignored() {
        let (entry, pill) = nodes();
        let mut tracker = DescendantInteraction::new();

        tracker.apply(InteractionEvent::FocusIn(pill));
        tracker.apply(InteractionEvent::FocusIn(entry));
        assert!(!tracker.apply(InteractionEvent::FocusOut(pill)));
        assert_eq!(tracker.focused(), Some(entry));

        assert!(tracker.apply(InteractionEvent::FocusOut(entry)));
        assert_eq!(tracker.interaction(), Interaction::default());
    }

    #[test]
    fn nested_hover_needs_every_leave() {
        let (entry, pill) = nodes();
        let mut tracker = DescendantInteraction::new();

        tracker.apply(InteractionEvent::PointerEnter(pill));
        assert!(!tracker.apply(InteractionEvent::PointerEnter(entry)));
        assert!(!tracker.apply(InteractionEvent::PointerLeave(pill)));
        assert!(tracker.is_hovered(entry));
        assert!(tracker.remove(entry));
    }
}

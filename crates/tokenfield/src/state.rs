//! Widget state the stylesheet reacts to.

use crate::filter::FilterContent;

/// Structural configuration of an input.
///
/// These flags describe the markup the host renders and do not change
/// while the user interacts with the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputVariant {
    /// A leading icon occupies the icon slot.
    pub has_icon: bool,
    /// A trailing action button occupies the button slot.
    pub has_button: bool,
    /// The surface hosts pills alongside free text.
    pub has_pills: bool,
    /// Filter flavor: the trailing button clears the input and only shows
    /// when there is something to clear.
    pub filter: bool,
}

impl InputVariant {
    /// A plain text input.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Add a leading icon.
    pub fn with_icon(mut self) -> Self {
        self.has_icon = true;
        self
    }

    /// Add a trailing button.
    pub fn with_button(mut self) -> Self {
        self.has_button = true;
        self
    }

    /// Host pills.
    pub fn with_pills(mut self) -> Self {
        self.has_pills = true;
        self
    }

    /// Make this a filter input with a clear button.
    pub fn filter(mut self) -> Self {
        self.filter = true;
        self.has_button = true;
        self
    }
}

/// Pointer and keyboard interaction with the editable surface.
///
/// Hover and focus are independent and may hold at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interaction {
    /// The pointer is over the editable surface.
    pub hovered: bool,
    /// The editable surface has keyboard focus.
    pub focused: bool,
}

impl Interaction {
    /// Hovered only.
    pub fn hovered() -> Self {
        Self {
            hovered: true,
            focused: false,
        }
    }

    /// Focused only.
    pub fn focused() -> Self {
        Self {
            hovered: false,
            focused: true,
        }
    }

    /// Collapse to the state that decides the look. Focus wins over hover.
    pub fn state(&self) -> InteractionState {
        if self.focused {
            InteractionState::Focus
        } else if self.hovered {
            InteractionState::Hover
        } else {
            InteractionState::Default
        }
    }
}

/// Effective interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Neither hovered nor focused.
    #[default]
    Default,
    /// Hovered without focus.
    Hover,
    /// Focused, hovered or not.
    Focus,
}

/// Whether the free text is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentState {
    /// No typed text.
    #[default]
    Empty,
    /// Some typed text.
    NonEmpty,
}

impl ContentState {
    /// Content state of `text`.
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::NonEmpty
        }
    }

    /// Whether there is no typed text.
    pub fn is_empty(&self) -> bool {
        *self == Self::Empty
    }
}

/// Everything the stylesheet needs to know about one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WidgetState {
    /// Structural flags.
    pub variant: InputVariant,
    /// Hover and focus of the editable surface.
    pub interaction: Interaction,
    /// Free text emptiness.
    pub content: ContentState,
    /// Pills hosted by the surface. Ignored unless `variant.has_pills`.
    pub pill_count: usize,
}

impl WidgetState {
    /// Resting state of `variant`.
    pub fn new(variant: InputVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Set hover and focus.
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    /// Set the content state.
    pub fn with_content(mut self, content: ContentState) -> Self {
        self.content = content;
        self
    }

    /// Set the number of pills.
    pub fn with_pill_count(mut self, count: usize) -> Self {
        self.pill_count = count;
        self
    }

    /// Pills that actually render.
    pub fn pills(&self) -> usize {
        if self.variant.has_pills {
            self.pill_count
        } else {
            0
        }
    }

    /// Content as seen by the filter state machine.
    pub fn filter_content(&self) -> FilterContent {
        FilterContent::from_parts(self.content.is_empty(), self.pills())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_takes_precedence() {
        let both = Interaction {
            hovered: true,
            focused: true,
        };
        assert_eq!(both.state(), InteractionState::Focus);
        assert_eq!(Interaction::hovered().state(), InteractionState::Hover);
        assert_eq!(Interaction::default().state(), InteractionState::Default);
    }

    #[test]
    fn filter_implies_button() {
        let variant = InputVariant::plain().filter();
        assert!(variant.filter);
        assert!(variant.has_button);
    }

    #[test]
    fn pills_ignored_without_pill_variant() {
        let state = WidgetState::new(InputVariant::plain()).with_pill_count(3);
        assert_eq!(state.pills(), 0);
        assert_eq!(state.filter_content(), FilterContent::Empty);
    }
}

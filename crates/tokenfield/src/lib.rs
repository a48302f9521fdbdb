//! Styles for the input widget family: plain inputs, inputs with a leading
//! icon or trailing button, inputs hosting removable pills, and the filter
//! flavor of each.
//!
//! The widget's look is a pure function of its [`WidgetState`]. The state is
//! rendered to an element tree ([`InputTree`]), matched against the input
//! stylesheet, and resolved to concrete values by [`InputStyleResolver`].
//!
//! # Example
//!
//! ```
//! use tokenfield::prelude::*;
//!
//! let resolver = InputStyleResolver::new(InputTokens::light())?;
//!
//! let variant = InputVariant::plain().filter();
//! let markup = InputMarkup::new().with_placeholder("Filter");
//! let mut input = InputTree::new(WidgetState::new(variant), markup)?;
//!
//! let empty = resolver.resolve(&input);
//! assert_eq!(empty.close_button_visible(), Some(false));
//!
//! input.update(WidgetState::new(variant).with_content(ContentState::NonEmpty))?;
//! let typed = resolver.resolve(&input);
//! assert_eq!(typed.close_button_visible(), Some(true));
//! assert!(typed.is_active());
//! # Ok::<(), tokenfield::Error>(())
//! ```

pub mod filter;
pub mod interaction;
pub mod layout;
pub mod markup;
pub mod resolver;
pub mod state;
pub mod stylesheet;
pub mod tokens;

mod error;

pub use error::{Error, Result};
pub use filter::{FilterContent, FilterEvent, FilterTracker};
pub use interaction::{DescendantInteraction, InteractionEvent};
pub use layout::{GridColumns, GridTemplate, Span, Track};
pub use markup::{InputMarkup, InputNodes, InputTree};
pub use resolver::{ActiveAppearance, InputStyleResolver, ResolvedInput};
pub use state::{ContentState, InputVariant, Interaction, InteractionState, WidgetState};
pub use stylesheet::{active_input, input_stylesheet};
pub use tokens::InputTokens;

/// Target names for log filtering.
pub mod targets {
    /// Filter content state machine.
    pub const FILTER: &str = "tokenfield::filter";
    /// Style resolution of inputs.
    pub const RESOLVER: &str = "tokenfield::resolver";
    /// Token loading.
    pub const TOKENS: &str = "tokenfield::tokens";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::{
        ActiveAppearance, ContentState, FilterContent, FilterEvent, FilterTracker, InputMarkup,
        InputStyleResolver, InputTokens, InputTree, InputVariant, Interaction, InteractionState,
        ResolvedInput, WidgetState,
    };
}

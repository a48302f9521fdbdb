//! CSS-like styling engine for the tokenfield input widgets.
//!
//! This crate provides a small but complete styling system inspired by CSS:
//!
//! - **Element tree**: an arena of elements with classes, attributes and
//!   interaction state that selectors match against
//! - **Selectors**: Type, class, ID, pseudo-class (`:hover`, `:focus`,
//!   `:placeholder-shown`, `:empty`, `:not()`, `:has()`), pseudo-element and
//!   combinator selectors
//! - **Cascading**: Style priority and specificity-based resolution
//! - **CSS Parsing**: Load styles and `:root` custom properties from CSS text
//! - **Transitions**: Property-scoped interpolation between computed styles
//! - **Type-safe DSL**: Build styles programmatically with Rust
//!
//! # Example
//!
//! ```
//! use tokenfield_style::prelude::*;
//!
//! let variables = ThemeVariables::from_pairs([("outline-input-hover", "#888888")]);
//! let sheet = StyleSheet::from_css(
//!     ".input-element:hover { outline-color: var(--outline-input-hover); }",
//!     StylePriority::Component,
//!     &variables,
//! )?;
//!
//! let mut engine = StyleEngine::new();
//! engine.add_stylesheet(sheet);
//!
//! let mut tree = ElementTree::new();
//! let input = tree.insert_root(
//!     Element::new("input")
//!         .with_class("input-element")
//!         .with_state(ElementState { hovered: true, ..Default::default() }),
//! );
//!
//! let computed = engine.compute_style(&tree, input);
//! assert_eq!(computed.outline_color, Color::from_rgb8(0x88, 0x88, 0x88));
//! # Ok::<(), tokenfield_style::Error>(())
//! ```

pub mod parser;
pub mod resolve;
pub mod rules;
pub mod selector;
pub mod style;
pub mod theme;
pub mod transition;
pub mod tree;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Style resolution target.
    pub const ENGINE: &str = "tokenfield_style::engine";
    /// CSS parser target.
    pub const PARSER: &str = "tokenfield_style::parser";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::StyleEngine;
    pub use crate::rules::{StylePriority, StyleRule, StyleSheet};
    pub use crate::selector::{
        Combinator, PseudoClass, PseudoElement, Selector, SelectorMatcher, SelectorPart,
        Specificity,
    };
    pub use crate::style::{ComputedStyle, Style, StyleProperties};
    pub use crate::theme::ThemeVariables;
    pub use crate::tree::{Element, ElementState, ElementTree, NodeId};
    pub use crate::types::{
        AlignItems, BorderStyle, BoxShadow, Color, Content, CornerRadii, Display, EdgeValues,
        GridArea, LengthValue, StyleValue, TextOverflow, TimingFunction, Transition,
        TransitionProperty, Visibility,
    };
}

//! CSS selector types and matching.

mod matcher;
mod specificity;
mod types;

pub use matcher::{PLACEHOLDER_ATTRIBUTE, SelectorMatcher};
pub use specificity::{Specificity, SpecificityWithOrder};
pub use types::*;

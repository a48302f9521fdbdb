//! Single style rule definition.

use crate::selector::{Selector, Specificity, SpecificityWithOrder};
use crate::style::StyleProperties;

/// A style rule mapping a selector to properties.
///
/// Specificity is computed once at construction; `order` records the
/// position in the owning stylesheet for tie-breaking.
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// The selector for matching elements.
    pub selector: Selector,
    /// The style properties to apply.
    pub properties: StyleProperties,
    /// Pre-computed specificity.
    pub specificity: Specificity,
    /// Source order (for tie-breaking when specificity is equal).
    pub order: u32,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(selector: Selector, properties: StyleProperties, order: u32) -> Self {
        let specificity = Specificity::of_selector(&selector);
        Self {
            selector,
            properties,
            specificity,
            order,
        }
    }

    /// Create a rule with a class selector.
    pub fn for_class(class: impl Into<String>, properties: StyleProperties, order: u32) -> Self {
        Self::new(Selector::class(class), properties, order)
    }

    /// Get the specificity with source order for comparison.
    pub fn specificity_with_order(&self) -> SpecificityWithOrder {
        self.specificity.with_order(self.order)
    }
}

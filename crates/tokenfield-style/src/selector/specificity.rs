//! CSS specificity calculation.

use super::{PseudoClass, Selector, SelectorPart, TypeSelector};

/// CSS specificity as (a, b, c) tuple.
///
/// - a: ID selectors
/// - b: Class selectors, pseudo-classes
/// - c: Type selectors, pseudo-elements
///
/// Compared lexicographically: (1,0,0) > (0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (universal selector).
    pub const ZERO: Self = Self(0, 0, 0);

    /// Inline style specificity (always wins over selectors).
    pub const INLINE: Self = Self(u32::MAX, u32::MAX, u32::MAX);

    /// Calculate specificity of a selector.
    pub fn of_selector(selector: &Selector) -> Self {
        let mut spec = Self::ZERO;
        for part in &selector.parts {
            spec.add_part(part);
        }
        if selector.pseudo_element.is_some() {
            spec.2 += 1;
        }
        spec
    }

    /// Calculate specificity of a selector part.
    pub fn of_part(part: &SelectorPart) -> Self {
        let mut spec = Self::ZERO;
        spec.add_part(part);
        spec
    }

    fn add_part(&mut self, part: &SelectorPart) {
        if part.id.is_some() {
            self.0 += 1;
        }

        self.1 += part.classes.len() as u32;

        for pseudo in &part.pseudo_classes {
            match pseudo {
                // :not() and :has() take the specificity of their argument
                PseudoClass::Not(inner) | PseudoClass::Has(inner) => self.add_part(inner),
                _ => self.1 += 1,
            }
        }

        if let Some(TypeSelector::Type(_)) = &part.type_selector {
            self.2 += 1;
        }
    }

    /// Get the ID selector count.
    pub fn ids(&self) -> u32 {
        self.0
    }

    /// Get the class/pseudo-class count.
    pub fn classes(&self) -> u32 {
        self.1
    }

    /// Get the type selector count.
    pub fn types(&self) -> u32 {
        self.2
    }

    /// Combine with source order for complete ordering.
    pub fn with_order(self, order: u32) -> SpecificityWithOrder {
        SpecificityWithOrder {
            specificity: self,
            order,
        }
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// Specificity combined with source order for tie-breaking.
///
/// Orders by specificity first, then by `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecificityWithOrder {
    /// The CSS specificity value.
    pub specificity: Specificity,
    /// Source order for tie-breaking (higher = later).
    pub order: u32,
}

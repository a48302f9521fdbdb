//! Style property value types.
//!
//! This module provides CSS-like value types for styling properties.
//!
//! # Example
//!
//! ```
//! use tokenfield_style::prelude::*;
//!
//! // Create length values with different units
//! let px = LengthValue::px(16.0);
//! let em = LengthValue::em(1.5);
//! let percent = LengthValue::percent(50.0);
//!
//! // Resolve to pixels given context
//! let font_size = 14.0;
//! let parent_size = 200.0;
//! let root_font_size = 16.0;
//!
//! assert_eq!(px.to_px(font_size, parent_size, root_font_size), 16.0);
//! assert_eq!(em.to_px(font_size, parent_size, root_font_size), 21.0); // 1.5 * 14
//! assert_eq!(percent.to_px(font_size, parent_size, root_font_size), 100.0); // 50% of 200
//! ```

use std::fmt;
use std::ops::Add;

/// A style property value that can represent various CSS value types.
///
/// This enum wraps actual values with CSS-like special values for inheritance.
///
/// # Example
///
/// ```
/// use tokenfield_style::prelude::StyleValue;
///
/// // Explicit value
/// let color: StyleValue<String> = StyleValue::Set("red".to_string());
/// assert!(color.is_set());
///
/// // Inherit from parent
/// let inherited: StyleValue<i32> = StyleValue::Inherit;
/// let resolved = inherited.resolve(Some(&42), &0);
/// assert_eq!(resolved, 42);
///
/// // Use initial/default value
/// let initial: StyleValue<i32> = StyleValue::Initial;
/// let resolved = initial.resolve(Some(&42), &0);
/// assert_eq!(resolved, 0); // Uses initial, not inherited
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// Inherit from parent (explicit opt-in).
    Inherit,
    /// Use the initial/default value.
    Initial,
    /// Unset - acts as Inherit for inherited properties, Initial otherwise.
    Unset,
}

impl<T> Default for StyleValue<T> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T: Clone> StyleValue<T> {
    /// Resolve the value given inherited and initial values.
    ///
    /// - `Set(v)` returns the explicit value
    /// - `Inherit` returns the inherited value, or initial if no parent
    /// - `Initial` returns the initial value
    /// - `Unset` acts like `Inherit`
    pub fn resolve(&self, inherited: Option<&T>, initial: &T) -> T {
        match self {
            StyleValue::Set(v) => v.clone(),
            StyleValue::Inherit | StyleValue::Unset => {
                inherited.cloned().unwrap_or_else(|| initial.clone())
            }
            StyleValue::Initial => initial.clone(),
        }
    }

    /// Check if this value is explicitly set.
    ///
    /// `Inherit` counts as explicit during cascading, so a later rule
    /// can request inheritance over an earlier `Set`.
    pub fn is_set(&self) -> bool {
        !matches!(self, StyleValue::Initial)
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}

/// A linear combination of length units, the result of adding lengths
/// with different units (`calc(0.5em + 14px)`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearLength {
    /// Absolute pixel part.
    pub px: f32,
    /// Font-relative part.
    pub em: f32,
    /// Root-font-relative part.
    pub rem: f32,
    /// Percentage part.
    pub percent: f32,
}

impl LinearLength {
    /// Resolve to pixels given the context.
    pub fn to_px(&self, font_size: f32, parent_size: f32, root_font_size: f32) -> f32 {
        self.px
            + self.em * font_size
            + self.rem * root_font_size
            + (self.percent / 100.0) * parent_size
    }
}

impl Add for LinearLength {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            px: self.px + rhs.px,
            em: self.em + rhs.em,
            rem: self.rem + rhs.rem,
            percent: self.percent + rhs.percent,
        }
    }
}

/// CSS-like length values with various units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Relative to current font size.
    Em(f32),
    /// Relative to root font size.
    Rem(f32),
    /// Percentage of containing block.
    Percent(f32),
    /// Sum of mixed units.
    Calc(LinearLength),
    /// Automatic sizing (context-dependent).
    #[default]
    Auto,
    /// Zero length.
    Zero,
}

impl LengthValue {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create an em value.
    pub fn em(value: f32) -> Self {
        Self::Em(value)
    }

    /// Create a rem value.
    pub fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Add up several lengths into one `calc()` value.
    ///
    /// `Auto` contributes nothing to the sum.
    pub fn sum(values: &[LengthValue]) -> Self {
        let total = values
            .iter()
            .fold(LinearLength::default(), |acc, v| acc + v.to_linear());
        Self::Calc(total)
    }

    /// Express this length as a linear combination of units.
    pub fn to_linear(&self) -> LinearLength {
        let mut linear = LinearLength::default();
        match self {
            LengthValue::Px(v) => linear.px = *v,
            LengthValue::Em(v) => linear.em = *v,
            LengthValue::Rem(v) => linear.rem = *v,
            LengthValue::Percent(v) => linear.percent = *v,
            LengthValue::Calc(l) => linear = *l,
            LengthValue::Auto | LengthValue::Zero => {}
        }
        linear
    }

    /// Resolve to pixels given the context.
    ///
    /// # Arguments
    /// * `font_size` - Current element's font size (for em)
    /// * `parent_size` - Parent's size in the relevant dimension (for %)
    /// * `root_font_size` - Root element's font size (for rem)
    pub fn to_px(&self, font_size: f32, parent_size: f32, root_font_size: f32) -> f32 {
        match self {
            LengthValue::Px(v) => *v,
            LengthValue::Em(v) => v * font_size,
            LengthValue::Rem(v) => v * root_font_size,
            LengthValue::Percent(v) => (v / 100.0) * parent_size,
            LengthValue::Calc(l) => l.to_px(font_size, parent_size, root_font_size),
            LengthValue::Auto => 0.0, // Context-dependent
            LengthValue::Zero => 0.0,
        }
    }

    /// Check if this is an auto value.
    pub fn is_auto(&self) -> bool {
        matches!(self, LengthValue::Auto)
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            LengthValue::Zero => true,
            LengthValue::Px(v)
            | LengthValue::Em(v)
            | LengthValue::Rem(v)
            | LengthValue::Percent(v) => *v == 0.0,
            LengthValue::Calc(l) => *l == LinearLength::default(),
            LengthValue::Auto => false,
        }
    }
}

impl fmt::Display for LengthValue {
    /// Format as CSS text, e.g. `0.5em` or `calc(0.5em + 20px)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthValue::Px(v) => write!(f, "{v}px"),
            LengthValue::Em(v) => write!(f, "{v}em"),
            LengthValue::Rem(v) => write!(f, "{v}rem"),
            LengthValue::Percent(v) => write!(f, "{v}%"),
            LengthValue::Auto => f.write_str("auto"),
            LengthValue::Zero => f.write_str("0"),
            LengthValue::Calc(l) => {
                let terms: Vec<String> = [(l.px, "px"), (l.em, "em"), (l.rem, "rem"), (l.percent, "%")]
                    .into_iter()
                    .filter(|(v, _)| *v != 0.0)
                    .map(|(v, unit)| format!("{v}{unit}"))
                    .collect();
                match terms.as_slice() {
                    [] => f.write_str("0"),
                    [single] => f.write_str(single),
                    _ => write!(f, "calc({})", terms.join(" + ")),
                }
            }
        }
    }
}

impl Add for LengthValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::Calc(self.to_linear() + rhs.to_linear())
    }
}

/// Edge values for margin, padding, and border-width.
///
/// # Example
///
/// ```
/// use tokenfield_style::prelude::{EdgeValues, LengthValue};
///
/// // Symmetric edges (vertical, horizontal)
/// let padding = EdgeValues::symmetric(
///     LengthValue::em(0.25), // top/bottom
///     LengthValue::em(0.5),  // left/right
/// );
///
/// // Resolve to pixels
/// let resolved = padding.to_px(16.0, 100.0, 16.0);
/// assert_eq!(resolved.horizontal(), 16.0); // left + right
/// assert_eq!(resolved.vertical(), 8.0);    // top + bottom
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeValues {
    /// Top edge value.
    pub top: LengthValue,
    /// Right edge value.
    pub right: LengthValue,
    /// Bottom edge value.
    pub bottom: LengthValue,
    /// Left edge value.
    pub left: LengthValue,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub fn uniform(value: LengthValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: LengthValue, horizontal: LengthValue) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: LengthValue, right: LengthValue, bottom: LengthValue, left: LengthValue) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create zero edge values.
    pub fn zero() -> Self {
        Self::uniform(LengthValue::Zero)
    }

    /// Resolve all edges to pixels.
    pub fn to_px(&self, font_size: f32, parent_size: f32, root_font_size: f32) -> ResolvedEdges {
        ResolvedEdges {
            top: self.top.to_px(font_size, parent_size, root_font_size),
            right: self.right.to_px(font_size, parent_size, root_font_size),
            bottom: self.bottom.to_px(font_size, parent_size, root_font_size),
            left: self.left.to_px(font_size, parent_size, root_font_size),
        }
    }
}

/// Resolved edge values in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedEdges {
    /// Top edge in pixels.
    pub top: f32,
    /// Right edge in pixels.
    pub right: f32,
    /// Bottom edge in pixels.
    pub bottom: f32,
    /// Left edge in pixels.
    pub left: f32,
}

impl ResolvedEdges {
    /// Get total horizontal space (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Get total vertical space (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Border and outline line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No line.
    #[default]
    None,
    /// Solid line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
}

impl BorderStyle {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }
}

/// How overflowing single-line text is cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOverflow {
    /// Hard clip at the content edge.
    #[default]
    Clip,
    /// Replace the hidden tail with an ellipsis.
    Ellipsis,
}

impl TextOverflow {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clip" => Some(Self::Clip),
            "ellipsis" => Some(Self::Ellipsis),
            _ => None,
        }
    }
}

/// Outer display type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Block box.
    #[default]
    Block,
    /// Inline box.
    Inline,
    /// Inline-level block box.
    InlineBlock,
    /// Flex container.
    Flex,
    /// Grid container.
    Grid,
    /// Not rendered, takes no space.
    None,
}

impl Display {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "block" => Some(Self::Block),
            "inline" => Some(Self::Inline),
            "inline-block" => Some(Self::InlineBlock),
            "flex" => Some(Self::Flex),
            "grid" => Some(Self::Grid),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Visibility of a box.
///
/// Hidden boxes keep their space but are neither painted nor hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Painted and hit-tested.
    #[default]
    Visible,
    /// Not painted, not hit-tested.
    Hidden,
}

impl Visibility {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visible" => Some(Self::Visible),
            "hidden" | "collapse" => Some(Self::Hidden),
            _ => None,
        }
    }
}

/// Cross-axis alignment of grid or flex items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    /// Fill the cross axis.
    #[default]
    Stretch,
    /// Pack at the start edge.
    Start,
    /// Center on the cross axis.
    Center,
    /// Pack at the end edge.
    End,
}

impl AlignItems {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stretch" | "normal" => Some(Self::Stretch),
            "start" | "flex-start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" | "flex-end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Placement of a grid item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridArea {
    /// A named area from the container's template.
    Named(String),
    /// Explicit column lines on a single-row grid.
    ///
    /// Lines are 1-based; negative lines count from the end (`-1` is the
    /// last line).
    Columns {
        /// Starting column line.
        start: i16,
        /// Ending column line (exclusive).
        end: i16,
    },
}

impl GridArea {
    /// Create a named area.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Span from the first to the last column line.
    pub fn full_row() -> Self {
        Self::Columns { start: 1, end: -1 }
    }
}

/// Generated content for `::before` pseudo-elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Literal string.
    Text(String),
    /// `attr(name)`: the value of an attribute of the originating element.
    Attr(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_value_resolve() {
        let set: StyleValue<i32> = StyleValue::Set(42);
        assert_eq!(set.resolve(Some(&100), &0), 42);

        let inherit: StyleValue<i32> = StyleValue::Inherit;
        assert_eq!(inherit.resolve(Some(&100), &0), 100);
        assert_eq!(inherit.resolve(None, &0), 0);

        let initial: StyleValue<i32> = StyleValue::Initial;
        assert_eq!(initial.resolve(Some(&100), &0), 0);
    }

    #[test]
    fn inherit_counts_as_set_for_cascade() {
        assert!(StyleValue::<i32>::Inherit.is_set());
        assert!(!StyleValue::<i32>::Initial.is_set());
    }

    #[test]
    fn length_value_to_px() {
        assert_eq!(LengthValue::Px(10.0).to_px(14.0, 100.0, 16.0), 10.0);
        assert_eq!(LengthValue::Em(1.5).to_px(14.0, 100.0, 16.0), 21.0);
        assert_eq!(LengthValue::Rem(1.0).to_px(14.0, 100.0, 16.0), 16.0);
        assert_eq!(LengthValue::Percent(50.0).to_px(14.0, 100.0, 16.0), 50.0);
    }

    #[test]
    fn mixed_unit_sum() {
        let total = LengthValue::sum(&[
            LengthValue::em(0.5),
            LengthValue::px(14.0),
            LengthValue::em(0.25),
        ]);
        // 0.75em at 16px + 14px
        assert_eq!(total.to_px(16.0, 0.0, 16.0), 26.0);

        let zero = LengthValue::sum(&[LengthValue::Zero, LengthValue::px(0.0)]);
        assert!(zero.is_zero());
    }

    #[test]
    fn edge_values() {
        let uniform = EdgeValues::uniform(LengthValue::Px(10.0));
        let resolved = uniform.to_px(14.0, 100.0, 16.0);
        assert_eq!(resolved.horizontal(), 20.0);
        assert_eq!(resolved.vertical(), 20.0);
    }

    #[test]
    fn length_css_text() {
        assert_eq!(LengthValue::em(0.5).to_string(), "0.5em");
        assert_eq!(LengthValue::px(20.0).to_string(), "20px");
        assert_eq!(LengthValue::Zero.to_string(), "0");
        let sum = LengthValue::sum(&[LengthValue::em(0.5), LengthValue::px(20.0)]);
        assert_eq!(sum.to_string(), "calc(20px + 0.5em)");
    }
}

//! Style properties definition.

use crate::types::{
    AlignItems, BorderStyle, BoxShadow, Color, Content, CornerRadii, Display, EdgeValues,
    GridArea, LengthValue, StyleValue, TextOverflow, Transition, Visibility,
};

/// Complete set of style properties for an element.
///
/// Properties are grouped logically and use `StyleValue<T>` to support
/// inherit/initial/unset semantics. Only properties that are explicitly
/// set will be applied during cascading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    // === Box Model ===
    /// Top margin.
    pub margin_top: StyleValue<LengthValue>,
    /// Right margin.
    pub margin_right: StyleValue<LengthValue>,
    /// Bottom margin.
    pub margin_bottom: StyleValue<LengthValue>,
    /// Left margin.
    pub margin_left: StyleValue<LengthValue>,
    /// Top padding.
    pub padding_top: StyleValue<LengthValue>,
    /// Right padding.
    pub padding_right: StyleValue<LengthValue>,
    /// Bottom padding.
    pub padding_bottom: StyleValue<LengthValue>,
    /// Left padding.
    pub padding_left: StyleValue<LengthValue>,
    /// Border width.
    pub border_width: StyleValue<EdgeValues>,
    /// Border radius (corner rounding).
    pub border_radius: StyleValue<CornerRadii>,
    /// Explicit height.
    pub height: StyleValue<LengthValue>,

    // === Background ===
    /// Background color.
    pub background_color: StyleValue<Color>,

    // === Typography ===
    /// Font families (in priority order).
    pub font_family: StyleValue<Vec<String>>,
    /// Font size.
    pub font_size: StyleValue<LengthValue>,
    /// Text color.
    pub color: StyleValue<Color>,
    /// Line height multiplier.
    pub line_height: StyleValue<f32>,
    /// Overflow marker for single-line text.
    pub text_overflow: StyleValue<TextOverflow>,

    // === Outline ===
    /// Outline thickness.
    pub outline_width: StyleValue<LengthValue>,
    /// Outline line style.
    pub outline_style: StyleValue<BorderStyle>,
    /// Outline color.
    pub outline_color: StyleValue<Color>,
    /// Distance between the border edge and the outline; negative values
    /// draw the outline inside the border box.
    pub outline_offset: StyleValue<LengthValue>,

    // === Effects ===
    /// Box shadows.
    pub box_shadow: StyleValue<Vec<BoxShadow>>,
    /// Property-scoped transitions.
    pub transition: StyleValue<Vec<Transition>>,

    // === Layout ===
    /// Display type.
    pub display: StyleValue<Display>,
    /// Visibility.
    pub visibility: StyleValue<Visibility>,
    /// Stacking order; unset means `auto`.
    pub z_index: StyleValue<i32>,
    /// Placement inside a grid container.
    pub grid_area: StyleValue<GridArea>,
    /// Cross-axis alignment of children.
    pub align_items: StyleValue<AlignItems>,
    /// Flex grow factor.
    pub flex_grow: StyleValue<f32>,
    /// Whether flex children wrap onto new lines.
    pub flex_wrap: StyleValue<bool>,

    // === Generated content ===
    /// Content of `::before`.
    pub content: StyleValue<Content>,

    // === Interaction ===
    /// Whether the element receives pointer events.
    pub pointer_events: StyleValue<bool>,
}

/// Properties that can be inherited from parent to child.
///
/// In this implementation, inheritance is explicit opt-in only.
/// These properties will inherit when set to `StyleValue::Inherit` or `StyleValue::Unset`.
pub const INHERITABLE_PROPERTIES: &[&str] = &[
    "font_family",
    "font_size",
    "color",
    "line_height",
    "visibility",
    "pointer_events",
];

impl StyleProperties {
    /// Create new default style properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a property name is inheritable by default.
    pub fn is_inheritable(name: &str) -> bool {
        INHERITABLE_PROPERTIES.contains(&name)
    }

    /// Set all four margins.
    pub fn set_margin(&mut self, edges: &EdgeValues) {
        self.margin_top = StyleValue::Set(edges.top);
        self.margin_right = StyleValue::Set(edges.right);
        self.margin_bottom = StyleValue::Set(edges.bottom);
        self.margin_left = StyleValue::Set(edges.left);
    }

    /// Set all four paddings.
    pub fn set_padding(&mut self, edges: &EdgeValues) {
        self.padding_top = StyleValue::Set(edges.top);
        self.padding_right = StyleValue::Set(edges.right);
        self.padding_bottom = StyleValue::Set(edges.bottom);
        self.padding_left = StyleValue::Set(edges.left);
    }

    /// Merge another set of properties into this one.
    ///
    /// Only explicitly set values from `other` will be copied.
    pub fn merge(&mut self, other: &StyleProperties) {
        macro_rules! merge_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if other.$prop.is_set() {
                        self.$prop = other.$prop.clone();
                    }
                )+
            };
        }

        merge_if_set!(
            // Box model
            margin_top, margin_right, margin_bottom, margin_left,
            padding_top, padding_right, padding_bottom, padding_left,
            border_width, border_radius, height,
            // Background
            background_color,
            // Typography
            font_family, font_size, color, line_height, text_overflow,
            // Outline
            outline_width, outline_style, outline_color, outline_offset,
            // Effects
            box_shadow, transition,
            // Layout
            display, visibility, z_index, grid_area, align_items, flex_grow, flex_wrap,
            // Generated content
            content,
            // Interaction
            pointer_events,
        );
    }

    /// Number of explicitly set properties.
    pub fn set_count(&self) -> usize {
        let mut count = 0;
        macro_rules! count_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if self.$prop.is_set() {
                        count += 1;
                    }
                )+
            };
        }

        count_set!(
            margin_top, margin_right, margin_bottom, margin_left, padding_top, padding_right,
            padding_bottom, padding_left, border_width, border_radius, height, background_color,
            font_family, font_size, color, line_height, text_overflow, outline_width,
            outline_style, outline_color, outline_offset, box_shadow, transition, display,
            visibility, z_index, grid_area, align_items, flex_grow, flex_wrap, content,
            pointer_events,
        );
        count
    }

    /// Check whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_default() {
        let props = StyleProperties::new();
        assert!(!props.margin_top.is_set());
        assert!(!props.color.is_set());
        assert!(props.is_empty());
    }

    #[test]
    fn properties_merge() {
        let mut base = StyleProperties::new();
        base.color = StyleValue::Set(Color::BLACK);

        let mut overlay = StyleProperties::new();
        overlay.color = StyleValue::Set(Color::RED);
        overlay.z_index = StyleValue::Set(1);

        base.merge(&overlay);

        assert_eq!(base.color.as_set(), Some(&Color::RED));
        assert_eq!(base.z_index.as_set(), Some(&1));
        assert_eq!(base.set_count(), 2);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut overlay = StyleProperties::new();
        overlay.outline_color = StyleValue::Set(Color::BLUE);

        let mut once = StyleProperties::new();
        once.merge(&overlay);
        let mut twice = once.clone();
        twice.merge(&overlay);

        assert_eq!(once, twice);
    }

    #[test]
    fn longhand_padding_keeps_other_sides() {
        let mut base = StyleProperties::new();
        base.set_padding(&EdgeValues::symmetric(LengthValue::em(0.25), LengthValue::em(0.5)));

        let mut icon = StyleProperties::new();
        icon.padding_left = StyleValue::Set(LengthValue::em(2.0));
        base.merge(&icon);

        assert_eq!(base.padding_left.as_set(), Some(&LengthValue::Em(2.0)));
        assert_eq!(base.padding_right.as_set(), Some(&LengthValue::Em(0.5)));
        assert_eq!(base.padding_top.as_set(), Some(&LengthValue::Em(0.25)));
    }

    #[test]
    fn inheritable_properties() {
        assert!(StyleProperties::is_inheritable("color"));
        assert!(StyleProperties::is_inheritable("line_height"));
        assert!(!StyleProperties::is_inheritable("padding_left"));
        assert!(!StyleProperties::is_inheritable("outline_color"));
    }
}

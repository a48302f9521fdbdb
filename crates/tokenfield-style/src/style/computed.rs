//! Computed style with all values resolved.

use crate::types::{
    AlignItems, BorderStyle, BoxShadow, Color, CornerRadii, Display, GridArea, ResolvedEdges,
    TextOverflow, Transition, Visibility,
};

/// Fully resolved style with concrete values.
///
/// This is what renderers consume. All relative units are resolved
/// to pixels, and all special values are resolved to actual values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    // === Box Model (resolved to pixels) ===
    /// Margin in pixels.
    pub margin: ResolvedEdges,
    /// Padding in pixels.
    pub padding: ResolvedEdges,
    /// Border widths in pixels.
    pub border_width: ResolvedEdges,
    /// Border corner radii.
    pub border_radius: CornerRadii,
    /// Explicit height in pixels, if set.
    pub height: Option<f32>,

    // === Background ===
    /// Background color.
    pub background_color: Color,

    // === Typography ===
    /// Font family stack.
    pub font_family: Vec<String>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text foreground color.
    pub color: Color,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Overflow marker for clipped text.
    pub text_overflow: TextOverflow,

    // === Outline ===
    /// Outline thickness in pixels.
    pub outline_width: f32,
    /// Outline line style.
    pub outline_style: BorderStyle,
    /// Outline color.
    pub outline_color: Color,
    /// Outline offset in pixels.
    pub outline_offset: f32,

    // === Effects ===
    /// Box shadows to render.
    pub box_shadow: Vec<BoxShadow>,
    /// Active transitions.
    pub transitions: Vec<Transition>,

    // === Layout ===
    /// Display type.
    pub display: Display,
    /// Visibility.
    pub visibility: Visibility,
    /// Stacking order, `None` for `auto`.
    pub z_index: Option<i32>,
    /// Grid placement, if any.
    pub grid_area: Option<GridArea>,
    /// Cross-axis alignment of children.
    pub align_items: AlignItems,
    /// Flex grow factor.
    pub flex_grow: f32,
    /// Whether flex children wrap.
    pub flex_wrap: bool,

    // === Generated content ===
    /// Resolved `::before` content, if any.
    pub content: Option<String>,

    // === Interaction ===
    /// Whether pointer events are enabled.
    pub pointer_events: bool,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            // Box model - all zero
            margin: ResolvedEdges::default(),
            padding: ResolvedEdges::default(),
            border_width: ResolvedEdges::default(),
            border_radius: CornerRadii::ZERO,
            height: None,

            // Background
            background_color: Color::TRANSPARENT,

            // Typography
            font_family: vec!["sans-serif".to_string()],
            font_size: 14.0,
            color: Color::BLACK,
            line_height: 1.2,
            text_overflow: TextOverflow::Clip,

            // Outline
            outline_width: 0.0,
            outline_style: BorderStyle::None,
            outline_color: Color::TRANSPARENT,
            outline_offset: 0.0,

            // Effects
            box_shadow: vec![],
            transitions: vec![],

            // Layout
            display: Display::Block,
            visibility: Visibility::Visible,
            z_index: None,
            grid_area: None,
            align_items: AlignItems::Stretch,
            flex_grow: 0.0,
            flex_wrap: false,

            content: None,

            // Interaction
            pointer_events: true,
        }
    }
}

impl ComputedStyle {
    /// Line height in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.line_height * self.font_size
    }

    /// Check if the outline should be drawn.
    pub fn has_outline(&self) -> bool {
        self.outline_style != BorderStyle::None
            && self.outline_width > 0.0
            && self.outline_color.a > 0.0
    }

    /// Whether the element is painted at all.
    pub fn is_visible(&self) -> bool {
        self.display != Display::None && self.visibility == Visibility::Visible
    }

    /// Whether the element can be the target of pointer events.
    ///
    /// Hidden elements keep their layout box but never receive events.
    pub fn hit_testable(&self) -> bool {
        self.pointer_events && self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computed_style_default() {
        let style = ComputedStyle::default();
        assert_eq!(style.font_size, 14.0);
        assert!(style.pointer_events);
        assert!(style.is_visible());
        assert!(!style.has_outline());
    }

    #[test]
    fn outline_requires_style_width_and_color() {
        let mut style = ComputedStyle {
            outline_width: 1.0,
            outline_color: Color::BLUE,
            ..Default::default()
        };
        assert!(!style.has_outline());

        style.outline_style = BorderStyle::Solid;
        assert!(style.has_outline());

        style.outline_color = Color::TRANSPARENT;
        assert!(!style.has_outline());
    }

    #[test]
    fn hidden_elements_are_not_hit_testable() {
        let mut style = ComputedStyle::default();
        assert!(style.hit_testable());

        style.visibility = Visibility::Hidden;
        assert!(!style.hit_testable());

        style.visibility = Visibility::Visible;
        style.pointer_events = false;
        assert!(!style.hit_testable());
    }

    #[test]
    fn line_height_scales_with_font() {
        let style = ComputedStyle {
            font_size: 20.0,
            line_height: 1.5,
            ..Default::default()
        };
        assert_eq!(style.line_height_px(), 30.0);
    }
}

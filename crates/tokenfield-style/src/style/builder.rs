//! Type-safe style builder DSL.

use super::StyleProperties;
use crate::types::{
    AlignItems, BorderStyle, BoxShadow, Color, Content, CornerRadii, Display, EdgeValues,
    GridArea, LengthValue, StyleValue, TextOverflow, Transition, Visibility,
};

/// Builder for creating style properties with a fluent API.
///
/// # Example
///
/// ```
/// use tokenfield_style::prelude::*;
///
/// let style = Style::new()
///     .padding(EdgeValues::symmetric(LengthValue::em(0.25), LengthValue::em(0.5)))
///     .background_color(Color::WHITE)
///     .border_radius_all(4.0)
///     .build();
/// assert!(style.padding_left.is_set());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: StyleProperties,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final StyleProperties.
    pub fn build(self) -> StyleProperties {
        self.props
    }

    // === Box Model ===

    /// Set margin on all sides.
    pub fn margin(mut self, value: EdgeValues) -> Self {
        self.props.set_margin(&value);
        self
    }

    /// Set uniform margin on all sides.
    pub fn margin_all(mut self, value: LengthValue) -> Self {
        self.props.set_margin(&EdgeValues::uniform(value));
        self
    }

    /// Set margin top.
    pub fn margin_top(mut self, value: LengthValue) -> Self {
        self.props.margin_top = StyleValue::Set(value);
        self
    }

    /// Set margin bottom.
    pub fn margin_bottom(mut self, value: LengthValue) -> Self {
        self.props.margin_bottom = StyleValue::Set(value);
        self
    }

    /// Set padding on all sides.
    pub fn padding(mut self, value: EdgeValues) -> Self {
        self.props.set_padding(&value);
        self
    }

    /// Set uniform padding on all sides.
    pub fn padding_all(mut self, value: LengthValue) -> Self {
        self.props.set_padding(&EdgeValues::uniform(value));
        self
    }

    /// Set padding left.
    pub fn padding_left(mut self, value: LengthValue) -> Self {
        self.props.padding_left = StyleValue::Set(value);
        self
    }

    /// Set padding right.
    pub fn padding_right(mut self, value: LengthValue) -> Self {
        self.props.padding_right = StyleValue::Set(value);
        self
    }

    /// Set uniform border width on all sides.
    pub fn border_width_all(mut self, value: LengthValue) -> Self {
        self.props.border_width = StyleValue::Set(EdgeValues::uniform(value));
        self
    }

    /// Set border radius.
    pub fn border_radius(mut self, radii: CornerRadii) -> Self {
        self.props.border_radius = StyleValue::Set(radii);
        self
    }

    /// Set uniform border radius on all corners.
    pub fn border_radius_all(mut self, radius: f32) -> Self {
        self.props.border_radius = StyleValue::Set(CornerRadii::uniform(radius));
        self
    }

    /// Set explicit height.
    pub fn height(mut self, value: LengthValue) -> Self {
        self.props.height = StyleValue::Set(value);
        self
    }

    // === Background ===

    /// Set background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.props.background_color = StyleValue::Set(color);
        self
    }

    // === Typography ===

    /// Set font family stack.
    pub fn font_family<S: Into<String>>(mut self, families: impl IntoIterator<Item = S>) -> Self {
        self.props.font_family = StyleValue::Set(families.into_iter().map(Into::into).collect());
        self
    }

    /// Set font size.
    pub fn font_size(mut self, size: LengthValue) -> Self {
        self.props.font_size = StyleValue::Set(size);
        self
    }

    /// Set text color.
    pub fn color(mut self, color: Color) -> Self {
        self.props.color = StyleValue::Set(color);
        self
    }

    /// Set line height multiplier.
    pub fn line_height(mut self, height: f32) -> Self {
        self.props.line_height = StyleValue::Set(height);
        self
    }

    /// Set text overflow.
    pub fn text_overflow(mut self, overflow: TextOverflow) -> Self {
        self.props.text_overflow = StyleValue::Set(overflow);
        self
    }

    // === Outline ===

    /// Set outline width, style and color in one call.
    pub fn outline(mut self, width: LengthValue, style: BorderStyle, color: Color) -> Self {
        self.props.outline_width = StyleValue::Set(width);
        self.props.outline_style = StyleValue::Set(style);
        self.props.outline_color = StyleValue::Set(color);
        self
    }

    /// Set outline color.
    pub fn outline_color(mut self, color: Color) -> Self {
        self.props.outline_color = StyleValue::Set(color);
        self
    }

    /// Set outline offset.
    pub fn outline_offset(mut self, offset: LengthValue) -> Self {
        self.props.outline_offset = StyleValue::Set(offset);
        self
    }

    // === Effects ===

    /// Set box shadows.
    pub fn box_shadow(mut self, shadows: Vec<BoxShadow>) -> Self {
        self.props.box_shadow = StyleValue::Set(shadows);
        self
    }

    /// Set a single box shadow.
    pub fn shadow(mut self, shadow: BoxShadow) -> Self {
        self.props.box_shadow = StyleValue::Set(vec![shadow]);
        self
    }

    /// Set transitions.
    pub fn transition(mut self, transitions: Vec<Transition>) -> Self {
        self.props.transition = StyleValue::Set(transitions);
        self
    }

    // === Layout ===

    /// Set display type.
    pub fn display(mut self, display: Display) -> Self {
        self.props.display = StyleValue::Set(display);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.props.visibility = StyleValue::Set(visibility);
        self
    }

    /// Set stacking order.
    pub fn z_index(mut self, z: i32) -> Self {
        self.props.z_index = StyleValue::Set(z);
        self
    }

    /// Set grid placement.
    pub fn grid_area(mut self, area: GridArea) -> Self {
        self.props.grid_area = StyleValue::Set(area);
        self
    }

    /// Set cross-axis alignment.
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.props.align_items = StyleValue::Set(align);
        self
    }

    /// Set flex grow factor.
    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.props.flex_grow = StyleValue::Set(grow);
        self
    }

    /// Set whether flex children wrap.
    pub fn flex_wrap(mut self, wrap: bool) -> Self {
        self.props.flex_wrap = StyleValue::Set(wrap);
        self
    }

    /// Set generated content.
    pub fn content(mut self, content: Content) -> Self {
        self.props.content = StyleValue::Set(content);
        self
    }

    // === Interaction ===

    /// Set whether the element receives pointer events.
    pub fn pointer_events(mut self, enabled: bool) -> Self {
        self.props.pointer_events = StyleValue::Set(enabled);
        self
    }

    // === Special Values ===

    /// Set color to inherit from parent.
    pub fn inherit_color(mut self) -> Self {
        self.props.color = StyleValue::Inherit;
        self
    }

    /// Set line height to inherit from parent.
    pub fn inherit_line_height(mut self) -> Self {
        self.props.line_height = StyleValue::Inherit;
        self
    }

    /// Set font family to inherit from parent.
    pub fn inherit_font_family(mut self) -> Self {
        self.props.font_family = StyleValue::Inherit;
        self
    }
}

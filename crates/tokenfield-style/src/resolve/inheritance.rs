//! Property inheritance and resolution to computed values.

use crate::style::{ComputedStyle, StyleProperties};
use crate::tree::Element;
use crate::types::{
    AlignItems, BorderStyle, Color, Content, CornerRadii, Display, LengthValue, ResolvedEdges,
    StyleValue, TextOverflow, Visibility,
};

/// Resolve StyleProperties to ComputedStyle, handling inheritance.
///
/// This takes cascaded properties and resolves all values to concrete types:
/// - Relative lengths (em, rem, %) are converted to pixels
/// - Inherit/Initial/Unset are resolved based on parent values
/// - Default values are applied where properties are not set
/// - `attr()` content is read from `element`
///
/// Font size and font family inherit by default; every other inheritable
/// property inherits only on explicit `inherit` or `unset`.
pub fn resolve_properties(
    props: &StyleProperties,
    parent: Option<&ComputedStyle>,
    root_font_size: f32,
    element: Option<&Element>,
) -> ComputedStyle {
    let mut computed = ComputedStyle::default();

    // Get parent font size for em units (default to root)
    let parent_font_size = parent.map(|p| p.font_size).unwrap_or(root_font_size);

    // First resolve font-size (needed for em units in other properties)
    computed.font_size = resolve_font_size(&props.font_size, parent_font_size, root_font_size);

    // Now we can resolve other properties using the computed font size
    let font_size = computed.font_size;
    let length = |value: &StyleValue<LengthValue>| {
        resolve_length(value, font_size, 0.0, root_font_size, 0.0)
    };

    // === Typography ===
    computed.font_family = match &props.font_family {
        StyleValue::Set(families) => families.clone(),
        StyleValue::Initial => parent
            .map(|p| p.font_family.clone())
            .unwrap_or_else(|| ComputedStyle::default().font_family),
        StyleValue::Inherit | StyleValue::Unset => resolve_inheritable(
            &props.font_family,
            parent.map(|p| &p.font_family),
            ComputedStyle::default().font_family,
        ),
    };
    computed.color = resolve_inheritable(&props.color, parent.map(|p| &p.color), Color::BLACK);
    computed.line_height =
        resolve_inheritable(&props.line_height, parent.map(|p| &p.line_height), 1.2);
    computed.text_overflow = resolve_non_inheritable(&props.text_overflow, TextOverflow::Clip);

    // === Box model (not inheritable) ===
    computed.margin = ResolvedEdges {
        top: length(&props.margin_top),
        right: length(&props.margin_right),
        bottom: length(&props.margin_bottom),
        left: length(&props.margin_left),
    };
    computed.padding = ResolvedEdges {
        top: length(&props.padding_top),
        right: length(&props.padding_right),
        bottom: length(&props.padding_bottom),
        left: length(&props.padding_left),
    };
    if let StyleValue::Set(edges) = &props.border_width {
        computed.border_width = edges.to_px(font_size, 0.0, root_font_size);
    }
    computed.border_radius = resolve_non_inheritable(&props.border_radius, CornerRadii::ZERO);
    computed.height = resolve_optional_length(&props.height, font_size, 0.0, root_font_size);

    // === Background ===
    computed.background_color = resolve_non_inheritable(&props.background_color, Color::TRANSPARENT);

    // === Outline ===
    computed.outline_width = length(&props.outline_width);
    computed.outline_style = resolve_non_inheritable(&props.outline_style, BorderStyle::None);
    // Without an explicit color the outline follows the text color
    computed.outline_color = resolve_non_inheritable(&props.outline_color, computed.color);
    computed.outline_offset = length(&props.outline_offset);

    // === Effects ===
    computed.box_shadow = resolve_non_inheritable(&props.box_shadow, vec![]);
    computed.transitions = resolve_non_inheritable(&props.transition, vec![]);

    // === Layout ===
    computed.display = resolve_non_inheritable(&props.display, Display::Block);
    computed.visibility = resolve_inheritable(
        &props.visibility,
        parent.map(|p| &p.visibility),
        Visibility::Visible,
    );
    computed.z_index = props.z_index.as_set().copied();
    computed.grid_area = props.grid_area.as_set().cloned();
    computed.align_items = resolve_non_inheritable(&props.align_items, AlignItems::Stretch);
    computed.flex_grow = resolve_non_inheritable(&props.flex_grow, 0.0);
    computed.flex_wrap = resolve_non_inheritable(&props.flex_wrap, false);

    // === Generated content ===
    computed.content = props.content.as_set().map(|content| match content {
        Content::Text(text) => text.clone(),
        // A missing attribute yields empty content
        Content::Attr(name) => element
            .and_then(|e| e.attribute(name))
            .unwrap_or_default()
            .to_string(),
    });

    // === Interaction ===
    computed.pointer_events = resolve_inheritable(
        &props.pointer_events,
        parent.map(|p| &p.pointer_events),
        true,
    );

    computed
}

/// Resolve an inheritable property.
fn resolve_inheritable<T: Clone>(value: &StyleValue<T>, parent_value: Option<&T>, initial: T) -> T {
    match value {
        StyleValue::Set(v) => v.clone(),
        StyleValue::Inherit | StyleValue::Unset => parent_value.cloned().unwrap_or(initial),
        StyleValue::Initial => initial,
    }
}

/// Resolve a non-inheritable property.
fn resolve_non_inheritable<T: Clone>(value: &StyleValue<T>, initial: T) -> T {
    match value {
        StyleValue::Set(v) => v.clone(),
        StyleValue::Initial | StyleValue::Inherit | StyleValue::Unset => initial,
    }
}

/// Resolve font size specially (inherits by default).
fn resolve_font_size(value: &StyleValue<LengthValue>, parent_size: f32, root_size: f32) -> f32 {
    match value {
        StyleValue::Set(length) => length.to_px(parent_size, parent_size, root_size),
        StyleValue::Inherit | StyleValue::Unset | StyleValue::Initial => parent_size,
    }
}

/// Resolve a length value.
fn resolve_length(
    value: &StyleValue<LengthValue>,
    font_size: f32,
    parent_size: f32,
    root_font_size: f32,
    initial: f32,
) -> f32 {
    match value {
        StyleValue::Set(length) => length.to_px(font_size, parent_size, root_font_size),
        _ => initial,
    }
}

/// Resolve an optional length value.
fn resolve_optional_length(
    value: &StyleValue<LengthValue>,
    font_size: f32,
    parent_size: f32,
    root_font_size: f32,
) -> Option<f32> {
    match value {
        StyleValue::Set(length) if !length.is_auto() => {
            Some(length.to_px(font_size, parent_size, root_font_size))
        }
        _ => None,
    }
}

//! The input widget stylesheet.
//!
//! Rules are written as CSS selectors paired with [`Style`] declarations
//! computed from the [`InputTokens`]. Later rules win ties in specificity,
//! which is how focus beats hover.

use std::time::Duration;

use tokenfield_style::parser::parse_selector_list;
use tokenfield_style::prelude::*;

use crate::Result;
use crate::tokens::InputTokens;

/// Duration of the outline and shadow transitions.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(100);

/// Selectors of the input rules, in source order.
pub mod selectors {
    pub const SURFACE: &str = ".input-element";
    pub const HOVER: &str = ".input-element:hover, .pill-container:has(.input:hover)";
    pub const FOCUS: &str = ".input-element:focus, .pill-container:has(.input:focus)";
    pub const PLACEHOLDER: &str = ".input-element::placeholder";

    pub const WRAPPER: &str = ".input-element-wrapper";
    pub const SURFACE_IN_GRID: &str = ".input-element-wrapper .input-element";
    pub const ICON_COMPENSATION: &str = ".input-element-wrapper.has-input-icon .input-element";
    pub const BUTTON_COMPENSATION: &str = ".input-element-wrapper.has-input-button .input-element";
    pub const ICON: &str = ".input-element-wrapper .input-icon";
    pub const BUTTON: &str = ".input-element-wrapper .input-button";

    pub const PILL_CONTAINER: &str = ".input-element.pill-container";
    pub const TEXT_ENTRY: &str = ".pill-container .input";
    pub const PILL: &str = ".pill-container .pill";
    pub const PILL_PLACEHOLDER: &str = ".pill-container:not(:has(.pill)) .input:empty::before";

    pub const FILTER_COLLAPSED: &str = ".filter-input .input-element:placeholder-shown, \
        .filter-input .pill-container:not(:has(.pill)):has(.input:empty)";
    pub const FILTER_CLOSE_HIDDEN: &str =
        ".filter-input .input-element:placeholder-shown ~ .input-close-filter-button, \
        .filter-input .pill-container:not(:has(.pill)):has(.input:empty) ~ .input-close-filter-button";
    pub const FILTER_ACTIVE: &str = ".filter-input .input-element:not(.pill-container):not(:placeholder-shown), \
        .filter-input .pill-container:has(.pill), \
        .filter-input .pill-container:has(.input:not(:empty))";

    /// Every selector list, in source order.
    pub const ALL: [&str; 17] = [
        SURFACE,
        HOVER,
        FOCUS,
        PLACEHOLDER,
        WRAPPER,
        SURFACE_IN_GRID,
        ICON_COMPENSATION,
        BUTTON_COMPENSATION,
        ICON,
        BUTTON,
        PILL_CONTAINER,
        TEXT_ENTRY,
        PILL,
        PILL_PLACEHOLDER,
        FILTER_COLLAPSED,
        FILTER_CLOSE_HIDDEN,
        FILTER_ACTIVE,
    ];
}

/// The active look: focused, or a filter with something in it.
///
/// Every rule that needs the active look takes its declarations from here.
/// The bundle only sets values, so applying it twice equals applying it once.
pub fn active_input(tokens: &InputTokens) -> Style {
    Style::new()
        .color(tokens.text_input)
        .background_color(tokens.background_input_focus)
        .outline_color(tokens.outline_input_focus)
        .shadow(BoxShadow::new(tokens.box_shadow_input_focus).with_blur(5.0))
}

/// Horizontal padding of the surface when nothing is compensated for.
fn base_inline_padding() -> LengthValue {
    LengthValue::em(0.5)
}

/// Build the component stylesheet for `tokens`.
pub fn input_stylesheet(tokens: &InputTokens) -> Result<StyleSheet> {
    let mut sheet = StyleSheet::component();
    for (selector_list, style) in input_rules(tokens) {
        sheet.add_rule_list(parse_selector_list(selector_list)?, style.build());
    }
    Ok(sheet)
}

fn input_rules(tokens: &InputTokens) -> Vec<(&'static str, Style)> {
    let font_size = LengthValue::px(tokens.base_font_size_px);
    let transition = |property| Transition::new(property, TRANSITION_DURATION, TimingFunction::Linear);

    vec![
        // Base surface
        (
            selectors::SURFACE,
            Style::new()
                .padding(EdgeValues::symmetric(LengthValue::em(0.25), base_inline_padding()))
                .font_size(font_size)
                .font_family(tokens.font_family_input.iter().cloned())
                .line_height(tokens.base_line_height_unitless)
                .border_radius_all(4.0)
                .border_width_all(LengthValue::Zero)
                .color(tokens.text_input)
                .background_color(tokens.background_input)
                .outline(LengthValue::px(1.0), BorderStyle::Solid, tokens.outline_input)
                .outline_offset(LengthValue::px(-1.0))
                .text_overflow(TextOverflow::Ellipsis)
                .transition(vec![
                    transition(TransitionProperty::OutlineColor),
                    transition(TransitionProperty::BoxShadow),
                ]),
        ),
        (
            selectors::HOVER,
            Style::new().outline_color(tokens.outline_input_hover),
        ),
        (selectors::FOCUS, active_input(tokens)),
        (
            selectors::PLACEHOLDER,
            Style::new().color(tokens.text_placeholder),
        ),
        // Grid
        (
            selectors::WRAPPER,
            Style::new()
                .display(Display::Grid)
                .align_items(AlignItems::Start)
                .font_size(font_size),
        ),
        (
            selectors::SURFACE_IN_GRID,
            Style::new().grid_area(GridArea::full_row()),
        ),
        (
            selectors::ICON_COMPENSATION,
            Style::new().padding_left(LengthValue::sum(&[
                base_inline_padding(),
                tokens.input_icon_starting_offset,
                tokens.input_icon_width,
                tokens.input_icon_content_gap,
            ])),
        ),
        (
            selectors::BUTTON_COMPENSATION,
            Style::new().padding_right(LengthValue::sum(&[
                base_inline_padding(),
                tokens.input_button_content_gap,
                tokens.input_button_width,
                tokens.input_button_ending_offset,
            ])),
        ),
        (
            selectors::ICON,
            Style::new()
                .grid_area(GridArea::named(crate::layout::areas::ICON))
                .z_index(1)
                .pointer_events(false)
                .margin_top(LengthValue::em(0.3125))
                .margin_bottom(LengthValue::em(0.3125))
                .color(tokens.text_placeholder),
        ),
        (
            selectors::BUTTON,
            Style::new()
                .grid_area(GridArea::named(crate::layout::areas::BUTTON))
                .margin_top(LengthValue::em(0.125))
                .margin_bottom(LengthValue::em(0.125))
                .color(tokens.text_neutral_icon_button),
        ),
        // Pills
        (
            selectors::PILL_CONTAINER,
            Style::new()
                .display(Display::Flex)
                .flex_wrap(true)
                .align_items(AlignItems::Center),
        ),
        (
            selectors::TEXT_ENTRY,
            Style::new()
                .flex_grow(1.0)
                .padding_all(LengthValue::Zero)
                .inherit_line_height()
                .inherit_color(),
        ),
        (
            selectors::PILL,
            Style::new().height(LengthValue::em(1.25)),
        ),
        (
            selectors::PILL_PLACEHOLDER,
            Style::new()
                .content(Content::Attr(crate::markup::DATA_PLACEHOLDER.to_string()))
                .color(tokens.text_placeholder),
        ),
        // Filter
        (
            selectors::FILTER_COLLAPSED,
            Style::new().padding_right(base_inline_padding()),
        ),
        (
            selectors::FILTER_CLOSE_HIDDEN,
            Style::new()
                .visibility(Visibility::Hidden)
                .pointer_events(false),
        ),
        (selectors::FILTER_ACTIVE, active_input(tokens)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selector_parses() {
        for list in selectors::ALL {
            let parsed = parse_selector_list(list).unwrap();
            assert!(!parsed.is_empty(), "{list}");
        }
    }

    #[test]
    fn selectors_survive_display_round_trip() {
        for list in selectors::ALL {
            let parsed = parse_selector_list(list).unwrap();
            let text = parsed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            assert_eq!(parse_selector_list(&text).unwrap(), parsed, "{text}");
        }
    }

    #[test]
    fn rule_count_matches_selector_lists() {
        let tokens = InputTokens::light();
        let sheet = input_stylesheet(&tokens).unwrap();
        let expected: usize = selectors::ALL
            .iter()
            .map(|list| parse_selector_list(list).unwrap().len())
            .sum();
        assert_eq!(sheet.len(), expected);
        assert_eq!(sheet.priority, StylePriority::Component);
    }

    #[test]
    fn active_bundle_is_idempotent() {
        let tokens = InputTokens::light();
        let once = active_input(&tokens).build();
        let mut twice = once.clone();
        twice.merge(&active_input(&tokens).build());
        assert_eq!(once, twice);
    }

    #[test]
    fn focus_rule_follows_hover_rule() {
        let sheet = input_stylesheet(&InputTokens::light()).unwrap();
        let order_of = |needle: &str| {
            sheet
                .iter()
                .find(|rule| rule.selector.to_string() == needle)
                .map(|rule| rule.order)
                .unwrap()
        };
        assert!(order_of(".input-element:focus") > order_of(".input-element:hover"));
    }
}

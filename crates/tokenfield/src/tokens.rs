//! Design tokens consumed by the input stylesheet.
//!
//! Tokens are injected configuration: the stylesheet reads them but never
//! defines them. They can be built in Rust, or read from a `:root` sheet of
//! CSS custom properties:
//!
//! ```
//! use tokenfield::InputTokens;
//!
//! let tokens = InputTokens::from_css(
//!     ":root { --color-outline-input-focus: #3366CC; --input-icon-width: 1.25em; }",
//! )?;
//! assert_eq!(tokens.outline_input_focus.to_hex(), "#3366CC");
//! # Ok::<(), tokenfield::Error>(())
//! ```

use std::path::Path;

use tokenfield_style::parser::{parse_color_value, parse_length_value};
use tokenfield_style::theme::ThemeVariables;
use tokenfield_style::types::{Color, LengthValue};

use crate::targets;
use crate::{Error, Result};

/// Custom property names (without the leading `--`).
pub mod names {
    pub const TEXT_INPUT: &str = "color-text-input";
    pub const BACKGROUND_INPUT: &str = "color-background-input";
    pub const BACKGROUND_INPUT_FOCUS: &str = "color-background-input-focus";
    pub const OUTLINE_INPUT: &str = "color-outline-input";
    pub const OUTLINE_INPUT_HOVER: &str = "color-outline-input-hover";
    pub const OUTLINE_INPUT_FOCUS: &str = "color-outline-input-focus";
    pub const BOX_SHADOW_INPUT_FOCUS: &str = "color-box-shadow-input-focus";
    pub const TEXT_PLACEHOLDER: &str = "color-text-placeholder";
    pub const TEXT_NEUTRAL_ICON_BUTTON: &str = "color-text-neutral-icon-button";

    pub const INPUT_ICON_STARTING_OFFSET: &str = "input-icon-starting-offset";
    pub const INPUT_ICON_WIDTH: &str = "input-icon-width";
    pub const INPUT_ICON_CONTENT_GAP: &str = "input-icon-content-gap";
    pub const INPUT_BUTTON_CONTENT_GAP: &str = "input-button-content-gap";
    pub const INPUT_BUTTON_WIDTH: &str = "input-button-width";
    pub const INPUT_BUTTON_ENDING_OFFSET: &str = "input-button-ending-offset";

    pub const BASE_FONT_SIZE_PX: &str = "base-font-size-px";
    pub const BASE_LINE_HEIGHT_UNITLESS: &str = "base-line-height-unitless";
    pub const FONT_FAMILY_INPUT: &str = "font-family-input";
}

/// Colors and dimensions of the input widget family.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTokens {
    // Surface colors
    /// Text color of the editable surface (also used by the active look).
    pub text_input: Color,
    /// Resting background.
    pub background_input: Color,
    /// Background of the active look.
    pub background_input_focus: Color,
    /// Resting outline.
    pub outline_input: Color,
    /// Outline while hovered.
    pub outline_input_hover: Color,
    /// Outline of the active look.
    pub outline_input_focus: Color,
    /// Glow color of the active look.
    pub box_shadow_input_focus: Color,

    // Decoration colors
    /// Placeholder text and leading icon.
    pub text_placeholder: Color,
    /// Trailing action button.
    pub text_neutral_icon_button: Color,

    // Grid dimensions
    /// Space before the leading icon.
    pub input_icon_starting_offset: LengthValue,
    /// Width of the leading icon.
    pub input_icon_width: LengthValue,
    /// Space between the icon and the text.
    pub input_icon_content_gap: LengthValue,
    /// Space between the text and the trailing button.
    pub input_button_content_gap: LengthValue,
    /// Width of the trailing button.
    pub input_button_width: LengthValue,
    /// Space after the trailing button.
    pub input_button_ending_offset: LengthValue,

    // Typography
    /// Base font size in pixels.
    pub base_font_size_px: f32,
    /// Unitless line height.
    pub base_line_height_unitless: f32,
    /// Font family fallback list.
    pub font_family_input: Vec<String>,
}

/// Dimensions and typography shared by every color scheme.
mod defaults {
    use tokenfield_style::types::LengthValue;

    pub const INPUT_ICON_STARTING_OFFSET: LengthValue = LengthValue::Em(0.5);
    pub const INPUT_ICON_WIDTH: LengthValue = LengthValue::Em(1.0);
    pub const INPUT_ICON_CONTENT_GAP: LengthValue = LengthValue::Em(0.3125);
    pub const INPUT_BUTTON_CONTENT_GAP: LengthValue = LengthValue::Em(0.25);
    pub const INPUT_BUTTON_WIDTH: LengthValue = LengthValue::Em(1.5);
    pub const INPUT_BUTTON_ENDING_OFFSET: LengthValue = LengthValue::Em(0.125);
    pub const BASE_FONT_SIZE_PX: f32 = 15.0;
    pub const BASE_LINE_HEIGHT_UNITLESS: f32 = 1.214;
    pub const FONT_FAMILY_INPUT: &[&str] = &["Source Sans 3", "sans-serif"];
}

/// The color tokens of one scheme.
struct Palette {
    text_input: Color,
    background_input: Color,
    background_input_focus: Color,
    outline_input: Color,
    outline_input_hover: Color,
    outline_input_focus: Color,
    box_shadow_input_focus: Color,
    text_placeholder: Color,
    text_neutral_icon_button: Color,
}

impl InputTokens {
    /// Light token set.
    pub fn light() -> Self {
        Self::with_palette(Palette {
            text_input: Color::from_hsla(0.0, 0.0, 0.0, 1.0),
            background_input: Color::WHITE,
            background_input_focus: Color::from_hsla(217.0, 0.64, 0.99, 1.0),
            outline_input: Color::from_hsla(0.0, 0.0, 0.0, 0.2),
            outline_input_hover: Color::from_hsla(0.0, 0.0, 0.0, 0.6),
            outline_input_focus: Color::from_hsla(217.0, 0.64, 0.59, 1.0),
            box_shadow_input_focus: Color::from_hsla(217.0, 0.64, 0.59, 0.3),
            text_placeholder: Color::from_hsla(0.0, 0.0, 0.0, 0.5),
            text_neutral_icon_button: Color::from_hsla(0.0, 0.0, 0.0, 0.55),
        })
    }

    /// Dark token set.
    pub fn dark() -> Self {
        Self::with_palette(Palette {
            text_input: Color::from_hsla(0.0, 0.0, 1.0, 0.85),
            background_input: Color::from_hsla(0.0, 0.0, 0.0, 0.2),
            background_input_focus: Color::from_hsla(225.0, 0.6, 0.12, 1.0),
            outline_input: Color::from_hsla(0.0, 0.0, 1.0, 0.2),
            outline_input_hover: Color::from_hsla(0.0, 0.0, 1.0, 0.6),
            outline_input_focus: Color::from_hsla(217.0, 0.64, 0.66, 1.0),
            box_shadow_input_focus: Color::from_hsla(217.0, 0.64, 0.66, 0.3),
            text_placeholder: Color::from_hsla(0.0, 0.0, 1.0, 0.5),
            text_neutral_icon_button: Color::from_hsla(0.0, 0.0, 1.0, 0.55),
        })
    }

    /// Complete a color scheme with the default dimensions and typography.
    fn with_palette(palette: Palette) -> Self {
        let Palette {
            text_input,
            background_input,
            background_input_focus,
            outline_input,
            outline_input_hover,
            outline_input_focus,
            box_shadow_input_focus,
            text_placeholder,
            text_neutral_icon_button,
        } = palette;

        Self {
            text_input,
            background_input,
            background_input_focus,
            outline_input,
            outline_input_hover,
            outline_input_focus,
            box_shadow_input_focus,
            text_placeholder,
            text_neutral_icon_button,
            input_icon_starting_offset: defaults::INPUT_ICON_STARTING_OFFSET,
            input_icon_width: defaults::INPUT_ICON_WIDTH,
            input_icon_content_gap: defaults::INPUT_ICON_CONTENT_GAP,
            input_button_content_gap: defaults::INPUT_BUTTON_CONTENT_GAP,
            input_button_width: defaults::INPUT_BUTTON_WIDTH,
            input_button_ending_offset: defaults::INPUT_BUTTON_ENDING_OFFSET,
            base_font_size_px: defaults::BASE_FONT_SIZE_PX,
            base_line_height_unitless: defaults::BASE_LINE_HEIGHT_UNITLESS,
            font_family_input: defaults::FONT_FAMILY_INPUT
                .iter()
                .map(|family| family.to_string())
                .collect(),
        }
    }

    /// Build tokens from custom properties, starting from the light set.
    ///
    /// Tokens missing from `variables` keep their light value and are
    /// reported at `warn`. Tokens present but malformed are errors.
    pub fn from_variables(variables: &ThemeVariables) -> Result<Self> {
        let mut tokens = Self::light();
        let applied = tokens.apply_variables(variables)?;
        for &name in Self::NAMES.iter().filter(|name| !variables.contains(name)) {
            tracing::warn!(target: targets::TOKENS, token = name, "token missing, using default");
        }
        tracing::debug!(target: targets::TOKENS, applied, "tokens loaded");
        Ok(tokens)
    }

    /// Parse a `:root { --name: value; }` sheet into tokens.
    pub fn from_css(css: &str) -> Result<Self> {
        Self::from_variables(&ThemeVariables::from_css(css)?)
    }

    /// Load a `:root` token sheet from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_variables(&ThemeVariables::from_file(path)?)
    }

    /// Override the tokens named in `variables`, leaving the rest untouched.
    pub fn with_variables(mut self, variables: &ThemeVariables) -> Result<Self> {
        self.apply_variables(variables)?;
        Ok(self)
    }

    /// Express the tokens as custom properties, for `var()` substitution in
    /// override stylesheets.
    pub fn to_variables(&self) -> ThemeVariables {
        let mut variables = ThemeVariables::new();
        for (name, color) in self.colors() {
            variables.set(name, color.to_hex());
        }
        for (name, length) in self.lengths() {
            variables.set(name, length.to_string());
        }
        variables.set(names::BASE_FONT_SIZE_PX, format!("{}px", self.base_font_size_px));
        variables.set(
            names::BASE_LINE_HEIGHT_UNITLESS,
            self.base_line_height_unitless.to_string(),
        );
        variables.set(names::FONT_FAMILY_INPUT, format_font_family(&self.font_family_input));
        variables
    }

    /// Every token name.
    pub const NAMES: [&'static str; 18] = [
        names::TEXT_INPUT,
        names::BACKGROUND_INPUT,
        names::BACKGROUND_INPUT_FOCUS,
        names::OUTLINE_INPUT,
        names::OUTLINE_INPUT_HOVER,
        names::OUTLINE_INPUT_FOCUS,
        names::BOX_SHADOW_INPUT_FOCUS,
        names::TEXT_PLACEHOLDER,
        names::TEXT_NEUTRAL_ICON_BUTTON,
        names::INPUT_ICON_STARTING_OFFSET,
        names::INPUT_ICON_WIDTH,
        names::INPUT_ICON_CONTENT_GAP,
        names::INPUT_BUTTON_CONTENT_GAP,
        names::INPUT_BUTTON_WIDTH,
        names::INPUT_BUTTON_ENDING_OFFSET,
        names::BASE_FONT_SIZE_PX,
        names::BASE_LINE_HEIGHT_UNITLESS,
        names::FONT_FAMILY_INPUT,
    ];

    fn colors(&self) -> [(&'static str, Color); 9] {
        [
            (names::TEXT_INPUT, self.text_input),
            (names::BACKGROUND_INPUT, self.background_input),
            (names::BACKGROUND_INPUT_FOCUS, self.background_input_focus),
            (names::OUTLINE_INPUT, self.outline_input),
            (names::OUTLINE_INPUT_HOVER, self.outline_input_hover),
            (names::OUTLINE_INPUT_FOCUS, self.outline_input_focus),
            (names::BOX_SHADOW_INPUT_FOCUS, self.box_shadow_input_focus),
            (names::TEXT_PLACEHOLDER, self.text_placeholder),
            (names::TEXT_NEUTRAL_ICON_BUTTON, self.text_neutral_icon_button),
        ]
    }

    fn colors_mut(&mut self) -> [(&'static str, &mut Color); 9] {
        [
            (names::TEXT_INPUT, &mut self.text_input),
            (names::BACKGROUND_INPUT, &mut self.background_input),
            (names::BACKGROUND_INPUT_FOCUS, &mut self.background_input_focus),
            (names::OUTLINE_INPUT, &mut self.outline_input),
            (names::OUTLINE_INPUT_HOVER, &mut self.outline_input_hover),
            (names::OUTLINE_INPUT_FOCUS, &mut self.outline_input_focus),
            (names::BOX_SHADOW_INPUT_FOCUS, &mut self.box_shadow_input_focus),
            (names::TEXT_PLACEHOLDER, &mut self.text_placeholder),
            (names::TEXT_NEUTRAL_ICON_BUTTON, &mut self.text_neutral_icon_button),
        ]
    }

    fn lengths(&self) -> [(&'static str, LengthValue); 6] {
        [
            (names::INPUT_ICON_STARTING_OFFSET, self.input_icon_starting_offset),
            (names::INPUT_ICON_WIDTH, self.input_icon_width),
            (names::INPUT_ICON_CONTENT_GAP, self.input_icon_content_gap),
            (names::INPUT_BUTTON_CONTENT_GAP, self.input_button_content_gap),
            (names::INPUT_BUTTON_WIDTH, self.input_button_width),
            (names::INPUT_BUTTON_ENDING_OFFSET, self.input_button_ending_offset),
        ]
    }

    fn lengths_mut(&mut self) -> [(&'static str, &mut LengthValue); 6] {
        [
            (names::INPUT_ICON_STARTING_OFFSET, &mut self.input_icon_starting_offset),
            (names::INPUT_ICON_WIDTH, &mut self.input_icon_width),
            (names::INPUT_ICON_CONTENT_GAP, &mut self.input_icon_content_gap),
            (names::INPUT_BUTTON_CONTENT_GAP, &mut self.input_button_content_gap),
            (names::INPUT_BUTTON_WIDTH, &mut self.input_button_width),
            (names::INPUT_BUTTON_ENDING_OFFSET, &mut self.input_button_ending_offset),
        ]
    }

    /// Apply every token present in `variables`. Returns how many applied.
    fn apply_variables(&mut self, variables: &ThemeVariables) -> Result<usize> {
        let mut applied = 0;

        for (name, slot) in self.colors_mut() {
            if let Some(value) = variables.get(name) {
                *slot = parse_color_value(value)
                    .map_err(|e| Error::invalid_token(name, value, e.to_string()))?;
                applied += 1;
            }
        }

        for (name, slot) in self.lengths_mut() {
            if let Some(value) = variables.get(name) {
                *slot = parse_dimension(name, value)?;
                applied += 1;
            }
        }

        if let Some(value) = variables.get(names::BASE_FONT_SIZE_PX) {
            self.base_font_size_px =
                parse_positive(names::BASE_FONT_SIZE_PX, value.trim().trim_end_matches("px"))?;
            applied += 1;
        }

        if let Some(value) = variables.get(names::BASE_LINE_HEIGHT_UNITLESS) {
            self.base_line_height_unitless = parse_positive(names::BASE_LINE_HEIGHT_UNITLESS, value)?;
            applied += 1;
        }

        if let Some(value) = variables.get(names::FONT_FAMILY_INPUT) {
            let families = parse_font_family(value);
            if families.is_empty() {
                return Err(Error::invalid_token(
                    names::FONT_FAMILY_INPUT,
                    value,
                    "expected at least one font family",
                ));
            }
            self.font_family_input = families;
            applied += 1;
        }

        Ok(applied)
    }
}

impl Default for InputTokens {
    fn default() -> Self {
        Self::light()
    }
}

/// Grid dimensions must stay non-negative for the layout to be valid.
fn parse_dimension(name: &str, value: &str) -> Result<LengthValue> {
    let length =
        parse_length_value(value).map_err(|e| Error::invalid_token(name, value, e.to_string()))?;
    let linear = length.to_linear();
    if [linear.px, linear.em, linear.rem, linear.percent]
        .iter()
        .any(|v| *v < 0.0)
    {
        return Err(Error::invalid_token(name, value, "dimension must not be negative"));
    }
    Ok(length)
}

fn parse_positive(name: &str, value: &str) -> Result<f32> {
    match value.trim().parse::<f32>() {
        Ok(number) if number > 0.0 && number.is_finite() => Ok(number),
        Ok(_) => Err(Error::invalid_token(name, value, "must be a positive number")),
        Err(e) => Err(Error::invalid_token(name, value, e.to_string())),
    }
}

fn parse_font_family(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_font_family(families: &[String]) -> String {
    families
        .iter()
        .map(|family| {
            if family.contains(' ') {
                format!("\"{family}\"")
            } else {
                family.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_round_trip() {
        let tokens = InputTokens::dark();
        let restored = InputTokens::from_variables(&tokens.to_variables()).unwrap();

        assert_eq!(restored.input_icon_width, tokens.input_icon_width);
        assert_eq!(restored.base_font_size_px, tokens.base_font_size_px);
        assert_eq!(restored.font_family_input, tokens.font_family_input);
        assert_eq!(restored.outline_input_focus.to_hex(), tokens.outline_input_focus.to_hex());
    }

    #[test]
    fn schemes_share_dimensions() {
        let (light, dark) = (InputTokens::light(), InputTokens::dark());
        assert_eq!(light.lengths(), dark.lengths());
        assert_eq!(light.base_font_size_px, dark.base_font_size_px);
        assert_eq!(light.base_line_height_unitless, dark.base_line_height_unitless);
        assert_eq!(light.font_family_input, dark.font_family_input);
        assert_ne!(light.colors(), dark.colors());
        assert_eq!(light.input_button_width, LengthValue::em(1.5));
    }

    #[test]
    fn short_hex_tokens() {
        let tokens = InputTokens::from_css(
            ":root { --color-text-input: #fff; --color-outline-input: #0000; }",
        )
        .unwrap();
        assert_eq!(tokens.text_input, Color::WHITE);
        assert_eq!(tokens.outline_input, Color::from_rgba8(0, 0, 0, 0));
    }

    #[test]
    fn partial_sheet_keeps_defaults() {
        let tokens = InputTokens::from_css(
            ":root { --input-button-width: 2em; --base-font-size-px: 16px; }",
        )
        .unwrap();

        assert_eq!(tokens.input_button_width, LengthValue::em(2.0));
        assert_eq!(tokens.base_font_size_px, 16.0);
        assert_eq!(tokens.input_icon_width, InputTokens::light().input_icon_width);
    }

    #[test]
    fn with_variables_layers_on_dark() {
        let overrides = ThemeVariables::from_pairs([(names::TEXT_PLACEHOLDER, "#808080")]);
        let tokens = InputTokens::dark().with_variables(&overrides).unwrap();
        assert_eq!(tokens.text_placeholder, Color::from_rgb8(0x80, 0x80, 0x80));
        assert_eq!(tokens.outline_input, InputTokens::dark().outline_input);
    }

    #[test]
    fn malformed_token_is_an_error() {
        let err = InputTokens::from_css(":root { --color-outline-input: notacolor; }").unwrap_err();
        assert!(matches!(err, Error::InvalidToken { ref name, .. } if name == names::OUTLINE_INPUT));

        let err = InputTokens::from_css(":root { --input-icon-width: -1em; }").unwrap_err();
        assert!(matches!(err, Error::InvalidToken { .. }));

        let err = InputTokens::from_css(":root { --base-line-height-unitless: 0; }").unwrap_err();
        assert!(matches!(err, Error::InvalidToken { .. }));
    }

    #[test]
    fn font_family_lists() {
        assert_eq!(
            parse_font_family("\"Source Sans 3\", 'Noto Sans', sans-serif"),
            vec!["Source Sans 3", "Noto Sans", "sans-serif"]
        );
        assert_eq!(
            format_font_family(&["Source Sans 3".into(), "sans-serif".into()]),
            "\"Source Sans 3\", sans-serif"
        );
    }

    #[test]
    fn token_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.css");
        std::fs::write(&path, InputTokens::light().to_variables().to_css()).unwrap();

        let tokens = InputTokens::from_file(&path).unwrap();
        assert_eq!(tokens.input_icon_content_gap, LengthValue::em(0.3125));
    }
}

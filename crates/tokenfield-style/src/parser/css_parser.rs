//! CSS syntax parser using the `cssparser` crate.
//!
//! This module contains the core parsing logic for CSS stylesheets. The parser
//! tokenizes CSS input and constructs [`StyleRule`] objects containing selectors
//! and their associated style properties.

use std::time::Duration;

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::rules::StyleRule;
use crate::selector::{Combinator, PseudoClass, PseudoElement, Selector, SelectorPart, TypeSelector};
use crate::style::StyleProperties;
use crate::targets;
use crate::types::{
    AlignItems, BorderStyle, BoxShadow, Color, Content, CornerRadii, Display, EdgeValues,
    GridArea, LengthValue, LinearLength, StyleValue, TextOverflow, TimingFunction, Transition,
    TransitionProperty, Visibility,
};
use crate::{Error, Result};

type ParseResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// Parse a CSS stylesheet string into a list of style rules.
///
/// A rule with a selector list (`a, b { ... }`) yields one [`StyleRule`] per
/// selector, all sharing the same source order.
///
/// # Error Recovery
///
/// Parse errors in individual rules do not cause the entire parse to fail.
/// Instead, the parser:
/// 1. Logs the error via `tracing::warn!`
/// 2. Skips to the next rule (after the closing `}`)
/// 3. Continues parsing subsequent rules
///
/// Invalid declarations are dropped the same way without affecting the
/// rest of their block.
///
/// # Example
///
/// ```
/// use tokenfield_style::parser::parse_css;
///
/// let css = ".input { color: red; } .input-icon, .input-button { z-index: 1; }";
/// let rules = parse_css(css).unwrap();
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[1].order, rules[2].order);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser) {
            Ok((selectors, properties)) => {
                for selector in selectors {
                    rules.push(StyleRule::new(selector, properties.clone(), order));
                }
                order += 1;
            }
            Err(e) => {
                tracing::warn!(target: targets::PARSER, "CSS parse error: {}", e);
                skip_to_next_rule(&mut parser);
            }
        }
    }

    Ok(rules)
}

/// Parse a comma separated selector list on its own.
pub fn parse_selector_list(text: &str) -> Result<Vec<Selector>> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|p| p.parse_comma_separated(|p| parse_selector(p)))
        .map_err(|_| Error::invalid_selector(text, "Unsupported selector syntax"))
}

/// Parse a standalone CSS color.
pub fn parse_color_value(text: &str) -> Result<Color> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|p| parse_color(p))
        .map_err(|_| Error::invalid_value("color", format!("'{}' is not a color", text.trim())))
}

/// Parse a standalone CSS length.
pub fn parse_length_value(text: &str) -> Result<LengthValue> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|p| parse_length(p))
        .map_err(|_| Error::invalid_value("length", format!("'{}' is not a length", text.trim())))
}

/// Parse a single CSS rule: selector-list { declarations }
fn parse_rule(parser: &mut Parser<'_, '_>) -> Result<(Vec<Selector>, StyleProperties)> {
    let location = parser.current_source_location();
    let start = parser.position();

    let selectors = parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        p.parse_comma_separated(|p| parse_selector(p))
    });
    let selectors = match selectors {
        Ok(selectors) => selectors,
        Err(_) => {
            return Err(Error::invalid_selector(
                parser.slice_from(start).trim(),
                format!("unsupported syntax at line {}", location.line + 1),
            ));
        }
    };

    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => {
            return Err(Error::parse(
                "Expected '{' after selector",
                location.line + 1,
                location.column,
            ));
        }
    }

    let properties = parser
        .parse_nested_block(|block| Ok::<_, CssParseError<'_, ()>>(parse_declarations(block)))
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(
                format!("Failed to parse declaration block: {:?}", e.kind),
                e.location.line + 1,
                e.location.column,
            )
        })?;

    Ok((selectors, properties))
}

/// Parse one complex selector, e.g. `.wrapper.has-input-icon .input:focus`.
///
/// Whitespace is significant here: it separates compound selectors with
/// the descendant combinator.
fn parse_selector<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Selector> {
    let mut parts = vec![];
    let mut combinators = vec![];
    let mut current = SelectorPart::new();
    let mut pending: Option<Combinator> = None;
    let mut pseudo_element = None;

    parser.skip_whitespace();

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        let explicit = match token {
            Token::Delim('>') => Some(Combinator::Child),
            Token::Delim('+') => Some(Combinator::AdjacentSibling),
            Token::Delim('~') => Some(Combinator::GeneralSibling),
            _ => None,
        };
        if let Some(combinator) = explicit {
            if current.is_empty() || matches!(pending, Some(c) if c != Combinator::Descendant) {
                return Err(parser.new_custom_error(()));
            }
            pending = Some(combinator);
            continue;
        }

        if let Token::WhiteSpace(_) = token {
            if !current.is_empty() && pending.is_none() {
                pending = Some(Combinator::Descendant);
            }
            continue;
        }

        // Nothing may follow a pseudo-element
        if pseudo_element.is_some() {
            return Err(parser.new_custom_error(()));
        }

        if let Some(combinator) = pending.take() {
            parts.push(std::mem::take(&mut current));
            combinators.push(combinator);
        }

        if let Some(pseudo) = parse_simple_selector(parser, token, &mut current)? {
            pseudo_element = Some(pseudo);
        }
    }

    if current.is_empty() || matches!(pending, Some(c) if c != Combinator::Descendant) {
        return Err(parser.new_custom_error(()));
    }
    parts.push(current);

    Ok(Selector {
        parts,
        combinators,
        pseudo_element,
    })
}

/// Apply one simple selector token to `part`.
///
/// Returns the pseudo-element when the token introduced one.
fn parse_simple_selector<'i>(
    parser: &mut Parser<'i, '_>,
    token: Token<'i>,
    part: &mut SelectorPart,
) -> ParseResult<'i, Option<PseudoElement>> {
    match token {
        Token::Ident(name) if part.is_empty() => {
            part.type_selector = Some(TypeSelector::Type(name.to_ascii_lowercase()));
        }
        Token::Delim('*') if part.is_empty() => {
            part.type_selector = Some(TypeSelector::Universal);
        }
        Token::Delim('.') => {
            let class = match parser.next_including_whitespace()?.clone() {
                Token::Ident(class) => class,
                _ => return Err(parser.new_custom_error(())),
            };
            part.classes.push(class.to_string());
        }
        Token::IDHash(id) if part.id.is_none() => {
            part.id = Some(id.to_string());
        }
        Token::Colon => match parser.next_including_whitespace()?.clone() {
            Token::Colon => {
                let name = match parser.next_including_whitespace()?.clone() {
                    Token::Ident(name) => name,
                    _ => return Err(parser.new_custom_error(())),
                };
                return PseudoElement::from_css(&name)
                    .map(Some)
                    .ok_or_else(|| parser.new_custom_error(()));
            }
            Token::Ident(name) => {
                let pseudo =
                    PseudoClass::from_css(&name).ok_or_else(|| parser.new_custom_error(()))?;
                part.pseudo_classes.push(pseudo);
            }
            Token::Function(name) => {
                let inner = parser.parse_nested_block(|p| parse_compound_selector(p))?;
                let pseudo = match name.to_ascii_lowercase().as_str() {
                    "not" => PseudoClass::Not(Box::new(inner)),
                    "has" => PseudoClass::Has(Box::new(inner)),
                    _ => return Err(parser.new_custom_error(())),
                };
                part.pseudo_classes.push(pseudo);
            }
            _ => return Err(parser.new_custom_error(())),
        },
        _ => return Err(parser.new_custom_error(())),
    }
    Ok(None)
}

/// Parse a compound selector (for `:not()` and `:has()` arguments).
fn parse_compound_selector<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, SelectorPart> {
    let mut part = SelectorPart::new();

    parser.skip_whitespace();

    while let Ok(token) = parser.next_including_whitespace() {
        let token = token.clone();
        if let Token::WhiteSpace(_) = token {
            break;
        }
        if parse_simple_selector(parser, token, &mut part)?.is_some() {
            return Err(parser.new_custom_error(()));
        }
    }

    parser.expect_exhausted()?;
    if part.is_empty() {
        return Err(parser.new_custom_error(()));
    }
    Ok(part)
}

/// Parse CSS declarations.
///
/// Each declaration is parsed in isolation: one that fails leaves no trace
/// in the returned properties.
fn parse_declarations(parser: &mut Parser<'_, '_>) -> StyleProperties {
    let mut props = StyleProperties::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();
        let mut declared = props.clone();
        let result = parser.parse_until_after(Delimiter::Semicolon, |p| {
            let name = p.expect_ident()?.to_ascii_lowercase();
            p.expect_colon()?;
            parse_property_value(p, &name, &mut declared)?;
            p.expect_exhausted()?;
            Ok::<_, CssParseError<'_, ()>>(())
        });

        match result {
            Ok(()) => props = declared,
            Err(e) => {
                tracing::warn!(
                    target: targets::PARSER,
                    line = location.line + 1,
                    column = location.column,
                    "dropping invalid declaration: {:?}",
                    e.kind
                );
            }
        }
    }

    props
}

/// CSS-wide keywords.
#[derive(Clone, Copy)]
enum Keyword {
    Inherit,
    Initial,
    Unset,
}

impl Keyword {
    fn from_css(ident: &str) -> Option<Self> {
        match ident.to_ascii_lowercase().as_str() {
            "inherit" => Some(Self::Inherit),
            "initial" => Some(Self::Initial),
            "unset" => Some(Self::Unset),
            _ => None,
        }
    }

    fn value<T>(self) -> StyleValue<T> {
        match self {
            Keyword::Inherit => StyleValue::Inherit,
            Keyword::Initial => StyleValue::Initial,
            Keyword::Unset => StyleValue::Unset,
        }
    }
}

/// Apply a CSS-wide keyword to the named property.
///
/// `initial` leaves the property undeclared, which resolves to the initial
/// value unless a lower-precedence rule sets it. Returns `false` for
/// unknown property names.
fn apply_keyword(name: &str, props: &mut StyleProperties, keyword: Keyword) -> bool {
    macro_rules! apply {
        ($($field:ident),+) => {{
            $( props.$field = keyword.value(); )+
        }};
    }

    match name {
        "margin" => apply!(margin_top, margin_right, margin_bottom, margin_left),
        "margin-top" => apply!(margin_top),
        "margin-right" => apply!(margin_right),
        "margin-bottom" => apply!(margin_bottom),
        "margin-left" => apply!(margin_left),
        "padding" => apply!(padding_top, padding_right, padding_bottom, padding_left),
        "padding-top" => apply!(padding_top),
        "padding-right" => apply!(padding_right),
        "padding-bottom" => apply!(padding_bottom),
        "padding-left" => apply!(padding_left),
        "border-width" => apply!(border_width),
        "border-radius" => apply!(border_radius),
        "height" => apply!(height),
        "background" | "background-color" => apply!(background_color),
        "font-family" => apply!(font_family),
        "font-size" => apply!(font_size),
        "color" => apply!(color),
        "line-height" => apply!(line_height),
        "text-overflow" => apply!(text_overflow),
        "outline" => apply!(outline_width, outline_style, outline_color),
        "outline-width" => apply!(outline_width),
        "outline-style" => apply!(outline_style),
        "outline-color" => apply!(outline_color),
        "outline-offset" => apply!(outline_offset),
        "box-shadow" => apply!(box_shadow),
        "transition" => apply!(transition),
        "display" => apply!(display),
        "visibility" => apply!(visibility),
        "z-index" => apply!(z_index),
        "grid-area" => apply!(grid_area),
        "align-items" => apply!(align_items),
        "flex-grow" => apply!(flex_grow),
        "flex-wrap" => apply!(flex_wrap),
        "content" => apply!(content),
        "pointer-events" => apply!(pointer_events),
        _ => return false,
    }
    true
}

/// Parse a single property value.
fn parse_property_value<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    props: &mut StyleProperties,
) -> ParseResult<'i, ()> {
    // Check for CSS-wide keywords first
    let state = parser.state();
    if let Ok(Token::Ident(ident)) = parser.next()
        && let Some(keyword) = Keyword::from_css(ident)
    {
        if parser.is_exhausted() && apply_keyword(name, props, keyword) {
            return Ok(());
        }
        return Err(parser.new_custom_error(()));
    }
    parser.reset(&state);

    match name {
        // === Box Model ===
        "margin" => props.set_margin(&parse_edge_values(parser)?),
        "margin-top" => props.margin_top = StyleValue::Set(parse_length(parser)?),
        "margin-right" => props.margin_right = StyleValue::Set(parse_length(parser)?),
        "margin-bottom" => props.margin_bottom = StyleValue::Set(parse_length(parser)?),
        "margin-left" => props.margin_left = StyleValue::Set(parse_length(parser)?),

        "padding" => props.set_padding(&parse_edge_values(parser)?),
        "padding-top" => props.padding_top = StyleValue::Set(parse_length(parser)?),
        "padding-right" => props.padding_right = StyleValue::Set(parse_length(parser)?),
        "padding-bottom" => props.padding_bottom = StyleValue::Set(parse_length(parser)?),
        "padding-left" => props.padding_left = StyleValue::Set(parse_length(parser)?),

        "border-width" => props.border_width = StyleValue::Set(parse_edge_values(parser)?),
        "border-radius" => props.border_radius = StyleValue::Set(parse_border_radius(parser)?),
        "height" => props.height = StyleValue::Set(parse_length(parser)?),

        // === Background ===
        "background" | "background-color" => {
            props.background_color = StyleValue::Set(parse_color(parser)?);
        }

        // === Typography ===
        "color" => props.color = StyleValue::Set(parse_color(parser)?),
        "font-size" => props.font_size = StyleValue::Set(parse_length(parser)?),
        "font-family" => props.font_family = StyleValue::Set(parse_font_family(parser)?),
        "line-height" => props.line_height = StyleValue::Set(parse_line_height(parser)?),
        "text-overflow" => {
            props.text_overflow = StyleValue::Set(parse_ident_value(parser, TextOverflow::from_css)?);
        }

        // === Outline ===
        "outline" => parse_outline(parser, props)?,
        "outline-width" => props.outline_width = StyleValue::Set(parse_length(parser)?),
        "outline-style" => {
            props.outline_style = StyleValue::Set(parse_ident_value(parser, BorderStyle::from_css)?);
        }
        "outline-color" => props.outline_color = StyleValue::Set(parse_color(parser)?),
        "outline-offset" => props.outline_offset = StyleValue::Set(parse_length(parser)?),

        // === Effects ===
        "box-shadow" => props.box_shadow = StyleValue::Set(parse_box_shadows(parser)?),
        "transition" => props.transition = StyleValue::Set(parse_transitions(parser)?),

        // === Layout ===
        "display" => props.display = StyleValue::Set(parse_ident_value(parser, Display::from_css)?),
        "visibility" => {
            props.visibility = StyleValue::Set(parse_ident_value(parser, Visibility::from_css)?);
        }
        "z-index" => props.z_index = parse_z_index(parser)?,
        "grid-area" => props.grid_area = StyleValue::Set(parse_grid_area(parser)?),
        "align-items" => {
            props.align_items = StyleValue::Set(parse_ident_value(parser, AlignItems::from_css)?);
        }
        "flex-grow" => props.flex_grow = StyleValue::Set(parse_non_negative_number(parser)?),
        "flex-wrap" => {
            props.flex_wrap = StyleValue::Set(parse_ident_value(parser, |s| match s {
                "wrap" | "wrap-reverse" => Some(true),
                "nowrap" => Some(false),
                _ => None,
            })?);
        }

        // === Generated content ===
        "content" => props.content = parse_content(parser)?,

        // === Interaction ===
        "pointer-events" => {
            props.pointer_events = StyleValue::Set(parse_ident_value(parser, |s| match s {
                "auto" | "all" => Some(true),
                "none" => Some(false),
                _ => None,
            })?);
        }

        _ => {
            tracing::debug!(target: targets::PARSER, "Unknown CSS property: {}", name);
            // Consume the value so the declaration is skipped quietly
            while parser.next().is_ok() {}
        }
    }

    Ok(())
}

/// Parse a keyword through `from_css`.
fn parse_ident_value<'i, T>(
    parser: &mut Parser<'i, '_>,
    from_css: impl Fn(&str) -> Option<T>,
) -> ParseResult<'i, T> {
    let ident = parser.expect_ident()?.to_ascii_lowercase();
    from_css(&ident).ok_or_else(|| parser.new_custom_error(()))
}

fn parse_non_negative_number<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    let value = parser.expect_number()?;
    if value < 0.0 {
        return Err(parser.new_custom_error(()));
    }
    Ok(value)
}

/// Parse a length value, including `calc()` sums.
fn parse_length<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, LengthValue> {
    let token = parser.next()?.clone();

    // CSS `0` is a zero length regardless of unit
    match token {
        Token::Number { value, .. } if value == 0.0 => Ok(LengthValue::Zero),
        Token::Dimension { value, unit, .. } => match unit.to_ascii_lowercase().as_str() {
            "px" => Ok(LengthValue::Px(value)),
            "em" => Ok(LengthValue::Em(value)),
            "rem" => Ok(LengthValue::Rem(value)),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Percentage { unit_value, .. } => Ok(LengthValue::Percent(unit_value * 100.0)),
        Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(LengthValue::Auto),
        Token::Function(name) if name.eq_ignore_ascii_case("calc") => {
            parser.parse_nested_block(|p| parse_calc_sum(p))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse the body of `calc()`: lengths joined by `+` and `-`.
fn parse_calc_sum<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, LengthValue> {
    let mut total = parse_length(parser)?.to_linear();

    while !parser.is_exhausted() {
        let sign = match parser.next()? {
            Token::Delim('+') => 1.0,
            Token::Delim('-') => -1.0,
            _ => return Err(parser.new_custom_error(())),
        };
        let term = parse_length(parser)?.to_linear();
        total = total
            + LinearLength {
                px: sign * term.px,
                em: sign * term.em,
                rem: sign * term.rem,
                percent: sign * term.percent,
            };
    }

    Ok(LengthValue::Calc(total))
}

/// Parse edge values (1-4 values for margin/padding shorthand).
fn parse_edge_values<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, EdgeValues> {
    let mut values = vec![];

    while values.len() < 4 && !parser.is_exhausted() {
        values.push(parse_length(parser)?);
    }

    match values[..] {
        [all] => Ok(EdgeValues::uniform(all)),
        [vertical, horizontal] => Ok(EdgeValues::symmetric(vertical, horizontal)),
        [top, horizontal, bottom] => Ok(EdgeValues::new(top, horizontal, bottom, horizontal)),
        [top, right, bottom, left] => Ok(EdgeValues::new(top, right, bottom, left)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse border-radius (1-4 pixel values).
fn parse_border_radius<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, CornerRadii> {
    let mut values = vec![];

    while values.len() < 4 && !parser.is_exhausted() {
        match parse_length(parser)? {
            LengthValue::Px(v) => values.push(v),
            LengthValue::Zero => values.push(0.0),
            _ => return Err(parser.new_custom_error(())),
        }
    }

    match values[..] {
        [all] => Ok(CornerRadii::uniform(all)),
        [a, b] => Ok(CornerRadii {
            top_left: a,
            top_right: b,
            bottom_right: a,
            bottom_left: b,
        }),
        [a, b, c] => Ok(CornerRadii {
            top_left: a,
            top_right: b,
            bottom_right: c,
            bottom_left: b,
        }),
        [a, b, c, d] => Ok(CornerRadii {
            top_left: a,
            top_right: b,
            bottom_right: c,
            bottom_left: d,
        }),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a color value: hex, named, `rgb()`/`rgba()` or `hsl()`/`hsla()`.
fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Color> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(&hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => match name.to_ascii_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "gray" | "grey" => Ok(Color::GRAY),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Function(name) => match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => parser.parse_nested_block(|p| parse_color_function(p, ColorSpace::Rgb)),
            "hsl" | "hsla" => parser.parse_nested_block(|p| parse_color_function(p, ColorSpace::Hsl)),
            _ => Err(parser.new_custom_error(())),
        },
        _ => Err(parser.new_custom_error(())),
    }
}

#[derive(Clone, Copy)]
enum ColorSpace {
    Rgb,
    Hsl,
}

/// Parse the arguments of a color function in either the legacy comma
/// syntax (`hsl(0, 0%, 0%, 0.2)`) or the space syntax (`hsl(0deg 0% 0% / 20%)`).
fn parse_color_function<'i>(parser: &mut Parser<'i, '_>, space: ColorSpace) -> ParseResult<'i, Color> {
    let first = match space {
        ColorSpace::Rgb => parse_rgb_component(parser)?,
        ColorSpace::Hsl => parse_hue(parser)?,
    };
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();

    let second = parse_channel(parser, space)?;
    if legacy {
        parser.expect_comma()?;
    }
    let third = parse_channel(parser, space)?;

    let alpha = if parser.is_exhausted() {
        1.0
    } else {
        if legacy {
            parser.expect_comma()?;
        } else {
            parser.expect_delim('/')?;
        }
        parse_alpha_component(parser)?
    };

    Ok(match space {
        ColorSpace::Rgb => Color::from_rgba(first, second, third, alpha),
        ColorSpace::Hsl => Color::from_hsla(first, second, third, alpha),
    })
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>, space: ColorSpace) -> ParseResult<'i, f32> {
    match space {
        ColorSpace::Rgb => parse_rgb_component(parser),
        ColorSpace::Hsl => parse_percentage_component(parser),
    }
}

fn parse_rgb_component<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match parser.next()? {
        Token::Number { value, .. } => Ok((*value / 255.0).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("deg") => Ok(value),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("turn") => Ok(value * 360.0),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_percentage_component<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(*unit_value),
        Token::Number { value, .. } => Ok(*value / 100.0),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse font-family: a comma separated list of quoted or bare names.
fn parse_font_family<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<String>> {
    parser.parse_comma_separated(|p| {
        let first = p.next()?.clone();
        match first {
            Token::QuotedString(name) => Ok(name.to_string()),
            Token::Ident(name) => {
                // Unquoted names may span several identifiers
                let mut words = vec![name.to_string()];
                while let Ok(word) = p.try_parse(|p| p.expect_ident().map(|w| w.to_string())) {
                    words.push(word);
                }
                Ok(words.join(" "))
            }
            _ => Err(p.new_custom_error(())),
        }
    })
}

/// Parse line-height as a multiplier of the font size.
fn parse_line_height<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, f32> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } if value >= 0.0 => Ok(value),
        Token::Percentage { unit_value, .. } if unit_value >= 0.0 => Ok(unit_value),
        Token::Ident(name) if name.eq_ignore_ascii_case("normal") => Ok(1.2),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse the `outline` shorthand: width, style and color in any order.
///
/// Omitted components reset to their initial values.
fn parse_outline<'i>(parser: &mut Parser<'i, '_>, props: &mut StyleProperties) -> ParseResult<'i, ()> {
    let mut width = None;
    let mut style = None;
    let mut color = None;

    while !parser.is_exhausted() {
        if width.is_none()
            && let Ok(length) = parser.try_parse(|p| parse_length(p))
        {
            width = Some(length);
            continue;
        }
        if style.is_none()
            && let Ok(s) = parser.try_parse(|p| parse_ident_value(p, BorderStyle::from_css))
        {
            style = Some(s);
            continue;
        }
        if color.is_none()
            && let Ok(c) = parser.try_parse(|p| parse_color(p))
        {
            color = Some(c);
            continue;
        }
        return Err(parser.new_custom_error(()));
    }

    props.outline_width = StyleValue::Set(width.unwrap_or(LengthValue::Px(3.0)));
    props.outline_style = StyleValue::Set(style.unwrap_or(BorderStyle::None));
    props.outline_color = color.map_or(StyleValue::Initial, StyleValue::Set);
    Ok(())
}

/// Parse a box-shadow list, or `none`.
fn parse_box_shadows<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<BoxShadow>> {
    if parser
        .try_parse(|p| p.expect_ident_matching("none"))
        .is_ok()
    {
        return Ok(vec![]);
    }
    parser.parse_comma_separated(|p| parse_box_shadow(p))
}

/// Parse a single box-shadow value.
fn parse_box_shadow<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, BoxShadow> {
    let mut lengths = vec![];
    let mut color = None;
    let mut inset = false;

    while !parser.is_exhausted() {
        if let Ok(length) = parser.try_parse(|p| parse_length(p)) {
            match length {
                LengthValue::Px(v) => lengths.push(v),
                LengthValue::Zero => lengths.push(0.0),
                _ => return Err(parser.new_custom_error(())),
            }
            continue;
        }

        if color.is_none()
            && let Ok(c) = parser.try_parse(|p| parse_color(p))
        {
            color = Some(c);
            continue;
        }

        if !inset && parser.try_parse(|p| p.expect_ident_matching("inset")).is_ok() {
            inset = true;
            continue;
        }

        return Err(parser.new_custom_error(()));
    }

    if !(2..=4).contains(&lengths.len()) {
        return Err(parser.new_custom_error(()));
    }

    Ok(BoxShadow {
        color: color.unwrap_or(Color::BLACK),
        offset_x: lengths[0],
        offset_y: lengths[1],
        blur_radius: lengths.get(2).copied().unwrap_or(0.0),
        spread_radius: lengths.get(3).copied().unwrap_or(0.0),
        inset,
    })
}

/// Parse a transition list, or `none`.
fn parse_transitions<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<Transition>> {
    if parser
        .try_parse(|p| p.expect_ident_matching("none"))
        .is_ok()
    {
        return Ok(vec![]);
    }
    parser.parse_comma_separated(|p| parse_transition(p))
}

/// Parse `<property> <duration> <timing-function>` in any order.
fn parse_transition<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, Transition> {
    let mut property = None;
    let mut duration = None;
    let mut timing = None;

    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Dimension { value, unit, .. } if value >= 0.0 => {
                let micros = match unit.to_ascii_lowercase().as_str() {
                    "s" => f64::from(value) * 1_000_000.0,
                    "ms" => f64::from(value) * 1_000.0,
                    _ => return Err(parser.new_custom_error(())),
                };
                if duration.is_some() {
                    tracing::debug!(target: targets::PARSER, "ignoring transition delay");
                    continue;
                }
                duration = Some(Duration::from_micros(micros.round() as u64));
            }
            Token::Ident(name) => {
                if timing.is_none()
                    && let Some(t) = TimingFunction::from_css(&name)
                {
                    timing = Some(t);
                } else if property.is_none()
                    && let Some(p) = TransitionProperty::from_css(&name)
                {
                    property = Some(p);
                } else {
                    return Err(parser.new_custom_error(()));
                }
            }
            _ => return Err(parser.new_custom_error(())),
        }
    }

    Ok(Transition::new(
        property.unwrap_or(TransitionProperty::All),
        duration.unwrap_or(Duration::ZERO),
        timing.unwrap_or_default(),
    ))
}

fn parse_z_index<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, StyleValue<i32>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number {
            int_value: Some(z), ..
        } => Ok(StyleValue::Set(z)),
        // `auto` is the initial value
        Token::Ident(name) if name.eq_ignore_ascii_case("auto") => Ok(StyleValue::Initial),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse grid-area: a named area, or `row-start / column-start / row-end / column-end`.
fn parse_grid_area<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, GridArea> {
    if let Ok(name) = parser.try_parse(|p| p.expect_ident().map(|n| n.to_string())) {
        return Ok(GridArea::Named(name));
    }

    let mut lines = vec![];
    loop {
        let line = parser.expect_integer()?;
        lines.push(i16::try_from(line).map_err(|_| parser.new_custom_error(()))?);
        if parser.is_exhausted() {
            break;
        }
        parser.expect_delim('/')?;
    }

    match lines[..] {
        [_, start, _, end] => Ok(GridArea::Columns { start, end }),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse generated content: a string, `attr(name)`, or `none`/`normal`.
fn parse_content<'i>(parser: &mut Parser<'i, '_>) -> ParseResult<'i, StyleValue<Content>> {
    let token = parser.next()?.clone();
    match token {
        Token::QuotedString(text) => Ok(StyleValue::Set(Content::Text(text.to_string()))),
        Token::Function(name) if name.eq_ignore_ascii_case("attr") => {
            let attribute = parser.parse_nested_block(|p| {
                let name = p.expect_ident()?.to_string();
                Ok::<_, CssParseError<'_, ()>>(name)
            })?;
            Ok(StyleValue::Set(Content::Attr(attribute)))
        }
        Token::Ident(name) if name.eq_ignore_ascii_case("none") || name.eq_ignore_ascii_case("normal") => {
            Ok(StyleValue::Initial)
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                // Skip block contents
                let _ = parser.parse_nested_block(|p| {
                    while p.next().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Err(_) => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_rule(css: &str) -> StyleRule {
        let mut rules = parse_css(css).unwrap();
        assert_eq!(rules.len(), 1, "expected one rule from {css}");
        rules.remove(0)
    }

    #[test]
    fn parse_simple_rule() {
        let rule = single_rule(".input { color: red; }");
        assert_eq!(rule.selector.to_string(), ".input");
        assert_eq!(rule.properties.color.as_set(), Some(&Color::RED));
    }

    #[test]
    fn whitespace_is_a_descendant_combinator() {
        let rule = single_rule(".input-element-wrapper.has-input-icon .input { padding-left: 1em; }");
        assert_eq!(rule.selector.parts.len(), 2);
        assert_eq!(rule.selector.combinators, vec![Combinator::Descendant]);
        assert_eq!(rule.selector.parts[0].classes.len(), 2);
    }

    #[test]
    fn parse_explicit_combinators() {
        let rule = single_rule(".a > .b ~ .c{z-index:1}");
        assert_eq!(
            rule.selector.combinators,
            vec![Combinator::Child, Combinator::GeneralSibling]
        );

        let rule = single_rule(".input:placeholder-shown~.input-close-filter-button { visibility: hidden; }");
        assert_eq!(rule.selector.combinators, vec![Combinator::GeneralSibling]);
    }

    #[test]
    fn parse_functional_pseudo_classes() {
        let rule = single_rule(".pill-container:not(:has(.pill)):has(.input:empty) { padding: 0; }");
        let subject = rule.selector.subject().unwrap();
        assert_eq!(subject.pseudo_classes.len(), 2);
        assert_eq!(subject.to_string(), ".pill-container:not(:has(.pill)):has(.input:empty)");
    }

    #[test]
    fn parse_pseudo_elements() {
        let rule = single_rule(".input::placeholder { color: #999; }");
        assert_eq!(rule.selector.pseudo_element, Some(PseudoElement::Placeholder));

        let rule = single_rule(".pill-container .input:empty::before { content: attr(data-placeholder); }");
        assert_eq!(rule.selector.pseudo_element, Some(PseudoElement::Before));
        assert_eq!(
            rule.properties.content,
            StyleValue::Set(Content::Attr("data-placeholder".into()))
        );
    }

    #[test]
    fn selector_list_shares_order() {
        let rules = parse_css(".a, .b .c { z-index: 1; } .d { z-index: 2; }").unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].order, 0);
        assert_eq!(rules[1].order, 0);
        assert_eq!(rules[2].order, 1);
    }

    #[test]
    fn invalid_rule_is_skipped() {
        let rules = parse_css(".a:checked { color: red; } .b { color: blue; }").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector.to_string(), ".b");
    }

    #[test]
    fn invalid_declaration_is_dropped() {
        let rule = single_rule(".a { color: nonsense; z-index: 1; outline: 1px solid wat; }");
        assert!(!rule.properties.color.is_set());
        assert!(!rule.properties.outline_width.is_set());
        assert_eq!(rule.properties.z_index.as_set(), Some(&1));
    }

    #[test]
    fn parse_padding_shorthand_and_longhand() {
        let rule = single_rule(".a { padding: 0.25em 0.5em; padding-left: calc(0.5em + 14px + 6px); }");
        let props = &rule.properties;
        assert_eq!(props.padding_top.as_set(), Some(&LengthValue::Em(0.25)));
        assert_eq!(props.padding_right.as_set(), Some(&LengthValue::Em(0.5)));
        let Some(LengthValue::Calc(left)) = props.padding_left.as_set() else {
            panic!("padding-left should be a calc value");
        };
        assert_eq!(left.em, 0.5);
        assert_eq!(left.px, 20.0);
    }

    #[test]
    fn parse_calc_subtraction() {
        let length = parse_length_value("calc(1em - 4px)").unwrap();
        assert_eq!(length.to_px(16.0, 0.0, 16.0), 12.0);
    }

    #[test]
    fn parse_color_formats() {
        assert_eq!(parse_color_value("#ff0000").unwrap(), Color::RED);
        assert_eq!(parse_color_value("red").unwrap(), Color::RED);
        assert_eq!(parse_color_value("rgb(255, 0, 0)").unwrap(), Color::RED);
        assert_eq!(parse_color_value("rgb(255 0 0)").unwrap(), Color::RED);

        let legacy = parse_color_value("hsla(0, 0%, 0%, 0.2)").unwrap();
        let modern = parse_color_value("hsl(0deg 0% 0% / 20%)").unwrap();
        assert_eq!(legacy, modern);
        assert!((modern.a - 0.2).abs() < 1e-6);

        assert!(parse_color_value("hsl(0 0% 0% , 1)").is_err());
        assert!(parse_color_value("chartreuse").is_err());
    }

    #[test]
    fn parse_outline_shorthand() {
        let rule = single_rule(".a { outline: 1px solid hsl(0deg 0% 0% / 20%); outline-offset: -1px; }");
        let props = &rule.properties;
        assert_eq!(props.outline_width.as_set(), Some(&LengthValue::Px(1.0)));
        assert_eq!(props.outline_style.as_set(), Some(&BorderStyle::Solid));
        assert!(props.outline_color.as_set().is_some());
        assert_eq!(props.outline_offset.as_set(), Some(&LengthValue::Px(-1.0)));
    }

    #[test]
    fn parse_transition_list() {
        let rule = single_rule(".a { transition: outline-color 0.1s linear, box-shadow 100ms linear; }");
        let transitions = rule.properties.transition.as_set().unwrap();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].property, TransitionProperty::OutlineColor);
        assert_eq!(transitions[0].timing, TimingFunction::Linear);
        assert_eq!(transitions[0].duration, Duration::from_millis(100));
        assert_eq!(transitions[1].property, TransitionProperty::BoxShadow);
        assert_eq!(transitions[1].duration, Duration::from_millis(100));
    }

    #[test]
    fn parse_box_shadow_values() {
        let rule = single_rule(".a { box-shadow: 0 0 5px hsl(0deg 0% 0% / 40%); }");
        let shadows = rule.properties.box_shadow.as_set().unwrap();
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].blur_radius, 5.0);

        let rule = single_rule(".a { box-shadow: none; }");
        assert_eq!(rule.properties.box_shadow, StyleValue::Set(vec![]));
    }

    #[test]
    fn parse_grid_area_forms() {
        let rule = single_rule(".a { grid-area: input-icon; }");
        assert_eq!(rule.properties.grid_area, StyleValue::Set(GridArea::named("input-icon")));

        let rule = single_rule(".a { grid-area: 1 / 1 / 2 / -1; }");
        assert_eq!(rule.properties.grid_area, StyleValue::Set(GridArea::full_row()));
    }

    #[test]
    fn parse_keywords() {
        let rule = single_rule(".a { line-height: inherit; color: inherit; z-index: auto; }");
        assert_eq!(rule.properties.line_height, StyleValue::Inherit);
        assert_eq!(rule.properties.color, StyleValue::Inherit);
        assert!(!rule.properties.z_index.is_set());
    }

    #[test]
    fn parse_layout_keywords() {
        let rule = single_rule(
            ".a { display: flex; flex-wrap: wrap; align-items: center; flex-grow: 1; pointer-events: none; visibility: hidden; text-overflow: ellipsis; }",
        );
        let props = &rule.properties;
        assert_eq!(props.display.as_set(), Some(&Display::Flex));
        assert_eq!(props.flex_wrap.as_set(), Some(&true));
        assert_eq!(props.align_items.as_set(), Some(&AlignItems::Center));
        assert_eq!(props.flex_grow.as_set(), Some(&1.0));
        assert_eq!(props.pointer_events.as_set(), Some(&false));
        assert_eq!(props.visibility.as_set(), Some(&Visibility::Hidden));
        assert_eq!(props.text_overflow.as_set(), Some(&TextOverflow::Ellipsis));
    }

    #[test]
    fn parse_font_family_list() {
        let rule = single_rule(r#".a { font-family: "Source Sans 3", Helvetica Neue, sans-serif; }"#);
        assert_eq!(
            rule.properties.font_family.as_set().unwrap(),
            &vec![
                "Source Sans 3".to_string(),
                "Helvetica Neue".to_string(),
                "sans-serif".to_string()
            ]
        );
    }

    #[test]
    fn short_hex_colors() {
        let rule = single_rule(".a { color: #fff; background-color: #0f08; height: 1.25em; }");
        assert_eq!(rule.properties.color.as_set(), Some(&Color::WHITE));
        assert_eq!(
            rule.properties.background_color.as_set(),
            Some(&Color::from_rgba8(0, 255, 0, 0x88))
        );
        assert_eq!(rule.properties.height.as_set(), Some(&LengthValue::Em(1.25)));
    }

    #[test]
    fn selector_list_helper() {
        let selectors = parse_selector_list(".a:hover, .b").unwrap();
        assert_eq!(selectors.len(), 2);
        assert!(parse_selector_list(".a >").is_err());
    }
}

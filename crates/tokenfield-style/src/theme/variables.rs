//! CSS variables (custom properties) support.

use std::collections::BTreeMap;
use std::path::Path;

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::{Error, Result};

/// Nesting limit for variables whose values reference other variables.
const MAX_SUBSTITUTION_DEPTH: usize = 16;

/// CSS custom properties (variables).
///
/// Names are stored without the leading `--`. Values are kept as raw CSS
/// text and expanded into stylesheets with [`ThemeVariables::substitute`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeVariables {
    variables: BTreeMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create variables from name/value pairs.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut vars = Self::new();
        for (name, value) in pairs {
            vars.set(name, value);
        }
        vars
    }

    /// Parse custom property declarations from `:root { --name: value; }` blocks.
    ///
    /// Declarations that are not custom properties are ignored, as are
    /// blocks with any other selector.
    pub fn from_css(css: &str) -> Result<Self> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut vars = Self::new();

        loop {
            parser.skip_whitespace();
            if parser.is_exhausted() {
                break;
            }

            let location = parser.current_source_location();
            let prelude_start = parser.position();
            parser
                .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
                    while p.next().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(())
                })
                .map_err(|_| Error::parse("Malformed variable block", location.line + 1, location.column))?;
            let prelude = parser.slice_from(prelude_start).trim().to_string();

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

            if prelude != ":root" {
                tracing::debug!(
                    target: crate::targets::PARSER,
                    selector = %prelude,
                    "skipping non-root block in variable file"
                );
                let _ = parser.parse_nested_block(|p| {
                    while p.next().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                continue;
            }

            let declared = parser
                .parse_nested_block(parse_custom_properties)
                .map_err(|_: CssParseError<'_, ()>| {
                    Error::parse("Malformed :root block", location.line + 1, location.column)
                })?;
            for (name, value) in declared {
                vars.set(name, value);
            }
        }

        Ok(vars)
    }

    /// Load variables from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_css(&content)
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        // Remove leading "--" if present
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of these variables.
    pub fn merge(&mut self, other: &ThemeVariables) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Render as a single `:root` block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("    --{name}: {value};\n"));
        }
        css.push('}');
        css
    }

    /// Expand every `var(--name)` and `var(--name, fallback)` in `css`.
    ///
    /// Variable values may themselves reference other variables. A reference
    /// with no definition and no fallback is an error.
    pub fn substitute(&self, css: &str) -> Result<String> {
        self.substitute_nested(css, css, 0)
    }

    fn substitute_nested(&self, source: &str, text: &str, depth: usize) -> Result<String> {
        if depth > MAX_SUBSTITUTION_DEPTH {
            return Err(Error::invalid_value("var()", "variable references nest too deeply"));
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = find_var_call(rest) {
            out.push_str(&rest[..start]);
            let args_start = start + "var(".len();
            let Some(args_len) = closing_paren(&rest[args_start..]) else {
                let (line, column) = line_column(source, text, rest, start);
                return Err(Error::parse("Unterminated var()", line, column));
            };
            let args = &rest[args_start..args_start + args_len];
            let (name, fallback) = match args.split_once(',') {
                Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
                None => (args.trim(), None),
            };

            let value = match (self.get(name), fallback) {
                (Some(value), _) => value,
                (None, Some(fallback)) => fallback,
                (None, None) => {
                    return Err(Error::undefined_variable(
                        name.strip_prefix("--").unwrap_or(name),
                    ));
                }
            };
            out.push_str(&self.substitute_nested(source, value, depth + 1)?);
            rest = &rest[args_start + args_len + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn parse_custom_properties<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<(String, String)>, CssParseError<'i, ()>> {
    let mut declared = vec![];

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let name = parser.expect_ident()?.to_string();
        parser.expect_colon()?;
        let start = parser.position();
        parser.parse_until_before(Delimiter::Semicolon, |p| {
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(())
        })?;
        let value = parser.slice_from(start).trim().to_string();
        let _ = parser.try_parse(|p| p.expect_semicolon());

        if name.starts_with("--") {
            declared.push((name, value));
        }
    }

    Ok(declared)
}

/// Byte offset of the next `var(` that starts an identifier.
fn find_var_call(text: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find("var(") {
        let index = offset + found;
        let preceded_by_ident = text[..index]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !preceded_by_ident {
            return Some(index);
        }
        offset = index + "var(".len();
    }
    None
}

/// Length up to the `)` that closes an already opened parenthesis.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(index),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// 1-based line and column of `rest[offset]`, when `text` is `source` itself.
fn line_column(source: &str, text: &str, rest: &str, offset: usize) -> (u32, u32) {
    if !std::ptr::eq(source, text) {
        return (0, 0);
    }
    let absolute = source.len() - rest.len() + offset;
    let before = &source[..absolute];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line as u32, column as u32)
}

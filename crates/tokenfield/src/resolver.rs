//! Resolve the styles of an input from its widget state.

use std::time::Duration;

use parking_lot::Mutex;
use tokenfield_style::prelude::*;
use tokenfield_style::resolve::{DEFAULT_ROOT_FONT_SIZE, resolve_properties};
use tokenfield_style::transition;

use crate::layout::{GridColumns, GridTemplate, Span};
use crate::markup::{InputMarkup, InputTree};
use crate::state::{InputVariant, WidgetState};
use crate::stylesheet::{active_input, input_stylesheet};
use crate::targets;
use crate::tokens::InputTokens;
use crate::Result;

/// The values that make up the active look.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAppearance {
    /// Text color.
    pub color: Color,
    /// Background color.
    pub background_color: Color,
    /// Outline color.
    pub outline_color: Color,
    /// Box shadows.
    pub box_shadow: Vec<BoxShadow>,
}

impl ActiveAppearance {
    /// The look-defining values of a computed style.
    pub fn of(style: &ComputedStyle) -> Self {
        Self {
            color: style.color,
            background_color: style.background_color,
            outline_color: style.outline_color,
            box_shadow: style.box_shadow.clone(),
        }
    }

    /// The active look for `tokens`, resolved from the shared bundle.
    pub fn from_tokens(tokens: &InputTokens) -> Self {
        let props = active_input(tokens).build();
        Self::of(&resolve_properties(&props, None, DEFAULT_ROOT_FONT_SIZE, None))
    }
}

/// Computed styles of every part of an input.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    /// Structural flags the styles were resolved for.
    pub variant: InputVariant,
    /// Grid wrapper.
    pub wrapper: ComputedStyle,
    /// The `.input-element` surface.
    pub surface: ComputedStyle,
    /// Placeholder text style, when a placeholder is showing. For pill
    /// containers this is the text entry's `::before` content.
    pub placeholder: Option<ComputedStyle>,
    /// Leading icon.
    pub icon: Option<ComputedStyle>,
    /// Trailing button.
    pub button: Option<ComputedStyle>,
    /// Text entry of a pill container.
    pub text_entry: Option<ComputedStyle>,
    /// Pills, in order.
    pub pills: Vec<ComputedStyle>,
    /// Column template.
    pub grid: GridTemplate,
    root_font_size: f32,
    active: ActiveAppearance,
}

impl ResolvedInput {
    /// The surface's look-defining values.
    pub fn appearance(&self) -> ActiveAppearance {
        ActiveAppearance::of(&self.surface)
    }

    /// Whether the surface shows the active look.
    pub fn is_active(&self) -> bool {
        self.appearance() == self.active
    }

    /// Whether the filter clear button shows and takes pointer input.
    ///
    /// `None` unless this is a filter input whose markup has the button.
    pub fn close_button_visible(&self) -> Option<bool> {
        if !self.variant.filter {
            return None;
        }
        self.button.as_ref().map(ComputedStyle::hit_testable)
    }

    /// Generated placeholder text of a pill container.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_ref()?.content.as_deref()
    }

    /// Resolve the grid for a wrapper `width` pixels wide.
    pub fn columns(&self, width: f32) -> GridColumns {
        self.grid
            .resolve(width, self.wrapper.font_size, self.root_font_size)
    }

    /// Where the icon sits, for a wrapper `width` pixels wide.
    pub fn icon_span(&self, width: f32) -> Option<Span> {
        self.columns(width).place(self.icon.as_ref()?)
    }

    /// Where the button sits, for a wrapper `width` pixels wide.
    pub fn button_span(&self, width: f32) -> Option<Span> {
        self.columns(width).place(self.button.as_ref()?)
    }

    /// The surface style `elapsed` into the transition from `previous`.
    pub fn surface_at(&self, previous: &ResolvedInput, elapsed: Duration) -> ComputedStyle {
        transition::interpolate(&previous.surface, &self.surface, elapsed)
    }
}

/// Host-added stylesheet, kept so it can be rebuilt for new tokens.
#[derive(Debug, Clone)]
enum Override {
    /// CSS text, re-substituted against the current tokens.
    Css(String),
    /// A prebuilt sheet.
    Sheet(StyleSheet),
}

struct Inner {
    engine: StyleEngine,
    tokens: InputTokens,
    overrides: Vec<Override>,
}

/// Shared style resolver for input widgets.
///
/// Holds the component stylesheet for the current tokens plus any host
/// overrides. Safe to share between threads; resolution takes a lock.
pub struct InputStyleResolver {
    inner: Mutex<Inner>,
}

impl InputStyleResolver {
    /// Create a resolver for `tokens`.
    pub fn new(tokens: InputTokens) -> Result<Self> {
        let sheets = build_sheets(&tokens, &[])?;
        let mut engine = StyleEngine::new();
        for sheet in sheets {
            engine.add_stylesheet(sheet);
        }
        Ok(Self {
            inner: Mutex::new(Inner {
                engine,
                tokens,
                overrides: vec![],
            }),
        })
    }

    /// The current tokens.
    pub fn tokens(&self) -> InputTokens {
        self.inner.lock().tokens.clone()
    }

    /// Switch tokens, rebuilding every stylesheet.
    ///
    /// On error the previous tokens stay in effect.
    pub fn set_tokens(&self, tokens: InputTokens) -> Result<()> {
        let mut inner = self.inner.lock();
        let sheets = build_sheets(&tokens, &inner.overrides)?;

        inner.engine.clear_stylesheets();
        for sheet in sheets {
            inner.engine.add_stylesheet(sheet);
        }
        inner.tokens = tokens;
        tracing::debug!(target: targets::RESOLVER, "tokens replaced");
        Ok(())
    }

    /// Add host override rules as CSS text.
    ///
    /// `var(--name)` resolves against the token custom properties, so
    /// overrides follow later token changes. Overrides have application
    /// priority and beat every component rule.
    pub fn add_css(&self, css: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        let sheet = StyleSheet::from_css(css, StylePriority::Application, &inner.tokens.to_variables())?;
        inner.engine.add_stylesheet(sheet);
        inner.overrides.push(Override::Css(css.to_string()));
        Ok(())
    }

    /// Add a prebuilt stylesheet.
    pub fn add_stylesheet(&self, sheet: StyleSheet) {
        let mut inner = self.inner.lock();
        inner.engine.add_stylesheet(sheet.clone());
        inner.overrides.push(Override::Sheet(sheet));
    }

    /// Resolve every part of `input`.
    pub fn resolve(&self, input: &InputTree) -> ResolvedInput {
        let mut inner = self.inner.lock();
        let Inner { engine, tokens, .. } = &mut *inner;

        let tree = input.tree();
        let nodes = input.nodes();
        let variant = input.state().variant;

        let wrapper = engine.compute_style(tree, nodes.wrapper);
        let surface = engine.compute_style(tree, nodes.surface);
        let placeholder = match nodes.entry {
            Some(entry) => engine.compute_pseudo(tree, entry, PseudoElement::Before),
            None => engine.compute_pseudo(tree, nodes.surface, PseudoElement::Placeholder),
        };
        let icon = nodes.icon.map(|node| engine.compute_style(tree, node));
        let button = nodes.button.map(|node| engine.compute_style(tree, node));
        let text_entry = nodes.entry.map(|node| engine.compute_style(tree, node));
        let pills = nodes
            .pills
            .iter()
            .map(|&node| engine.compute_style(tree, node))
            .collect();

        // Older generations of this tree can never be hit again
        engine.invalidate(tree);

        let resolved = ResolvedInput {
            variant,
            wrapper,
            surface,
            placeholder,
            icon,
            button,
            text_entry,
            pills,
            grid: GridTemplate::input(tokens, &variant),
            root_font_size: engine.root_font_size(),
            active: ActiveAppearance::from_tokens(tokens),
        };

        tracing::debug!(
            target: targets::RESOLVER,
            ?variant,
            active = resolved.is_active(),
            close_button = ?resolved.close_button_visible(),
            "resolved input"
        );
        resolved
    }

    /// Build the markup for `state` and resolve it.
    pub fn resolve_state(&self, state: WidgetState, markup: InputMarkup) -> Result<ResolvedInput> {
        let input = InputTree::new(state, markup)?;
        Ok(self.resolve(&input))
    }
}

impl std::fmt::Debug for InputStyleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("InputStyleResolver")
            .field("tokens", &inner.tokens)
            .field("stylesheets", &inner.engine.stylesheet_count())
            .field("rules", &inner.engine.rule_count())
            .field("overrides", &inner.overrides.len())
            .finish()
    }
}

/// Component sheet first, then overrides in the order they were added.
fn build_sheets(tokens: &InputTokens, overrides: &[Override]) -> Result<Vec<StyleSheet>> {
    let variables = tokens.to_variables();
    let mut sheets = vec![input_stylesheet(tokens)?];
    for entry in overrides {
        sheets.push(match entry {
            Override::Css(css) => StyleSheet::from_css(css, StylePriority::Application, &variables)?,
            Override::Sheet(sheet) => sheet.clone(),
        });
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContentState, Interaction};

    fn resolver() -> InputStyleResolver {
        InputStyleResolver::new(InputTokens::light()).unwrap()
    }

    #[test]
    fn resting_plain_input() {
        let resolved = resolver()
            .resolve_state(WidgetState::new(InputVariant::plain()), InputMarkup::new())
            .unwrap();
        let tokens = InputTokens::light();

        assert_eq!(resolved.surface.color, tokens.text_input);
        assert_eq!(resolved.surface.background_color, tokens.background_input);
        assert_eq!(resolved.surface.outline_color, tokens.outline_input);
        assert_eq!(resolved.surface.outline_width, 1.0);
        assert_eq!(resolved.surface.outline_offset, -1.0);
        assert_eq!(resolved.surface.border_radius, CornerRadii::uniform(4.0));
        assert_eq!(resolved.surface.text_overflow, TextOverflow::Ellipsis);
        assert!(!resolved.is_active());
        assert_eq!(resolved.close_button_visible(), None);
    }

    #[test]
    fn active_appearance_comes_from_bundle() {
        let tokens = InputTokens::light();
        let active = ActiveAppearance::from_tokens(&tokens);
        assert_eq!(active.outline_color, tokens.outline_input_focus);
        assert_eq!(active.box_shadow.len(), 1);
        assert_eq!(active.box_shadow[0].blur_radius, 5.0);
        assert_eq!(active.box_shadow[0].spread_radius, 0.0);
    }

    #[test]
    fn css_overrides_follow_tokens() {
        let resolver = resolver();
        resolver
            .add_css(".input-element { background-color: var(--color-outline-input-focus); }")
            .unwrap();

        let state = WidgetState::new(InputVariant::plain());
        let light = resolver.resolve_state(state, InputMarkup::new()).unwrap();
        assert_eq!(
            light.surface.background_color.to_hex(),
            InputTokens::light().outline_input_focus.to_hex()
        );

        resolver.set_tokens(InputTokens::dark()).unwrap();
        let dark = resolver.resolve_state(state, InputMarkup::new()).unwrap();
        assert_eq!(
            dark.surface.background_color.to_hex(),
            InputTokens::dark().outline_input_focus.to_hex()
        );
    }

    #[test]
    fn bad_override_leaves_resolver_untouched() {
        let resolver = resolver();
        assert!(resolver.add_css(".x { color: var(--not-a-token); }").is_err());
        assert_eq!(resolver.inner.lock().overrides.len(), 0);
    }

    #[test]
    fn transition_runs_from_previous_resolution() {
        let resolver = resolver();
        let mut input = InputTree::new(WidgetState::new(InputVariant::plain()), InputMarkup::new()).unwrap();
        let resting = resolver.resolve(&input);

        input
            .update(
                WidgetState::new(InputVariant::plain())
                    .with_interaction(Interaction::focused())
                    .with_content(ContentState::NonEmpty),
            )
            .unwrap();
        let focused = resolver.resolve(&input);

        let start = focused.surface_at(&resting, Duration::ZERO);
        assert_eq!(start.outline_color, resting.surface.outline_color);
        // Background is not a transitioned property
        assert_eq!(start.background_color, focused.surface.background_color);

        let end = focused.surface_at(&resting, Duration::from_millis(100));
        assert_eq!(ActiveAppearance::of(&end), focused.appearance());
    }
}

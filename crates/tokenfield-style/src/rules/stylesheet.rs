//! Stylesheet collection and management.

use crate::rules::StyleRule;
use crate::selector::Selector;
use crate::style::StyleProperties;
use crate::theme::ThemeVariables;
use crate::Result;

/// Priority level for style sources.
///
/// Higher priority styles override lower priority ones regardless of
/// selector specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StylePriority {
    /// Built-in component rules (lowest priority).
    Component = 0,
    /// Application overrides.
    Application = 1,
    /// Inline styles (highest priority).
    Inline = 2,
}

impl StylePriority {
    /// Get a numeric value for ordering calculations.
    pub fn as_order_offset(&self) -> u32 {
        (*self as u32) << 24
    }
}

/// A stylesheet containing multiple rules.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// The rules in this stylesheet.
    pub rules: Vec<StyleRule>,
    /// Priority level.
    pub priority: StylePriority,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new(priority: StylePriority) -> Self {
        Self {
            rules: vec![],
            priority,
        }
    }

    /// Create a component stylesheet (lowest priority).
    pub fn component() -> Self {
        Self::new(StylePriority::Component)
    }

    /// Create an application stylesheet.
    pub fn application() -> Self {
        Self::new(StylePriority::Application)
    }

    /// Parse a stylesheet from CSS text.
    ///
    /// `var(--name)` references are expanded from `variables` before parsing.
    pub fn from_css(css: &str, priority: StylePriority, variables: &ThemeVariables) -> Result<Self> {
        let css = variables.substitute(css)?;
        let rules = crate::parser::parse_css(&css)?;
        Ok(Self {
            rules,
            priority,
        })
    }

    /// Add a rule to the stylesheet.
    ///
    /// The rule is ordered after every rule already in the sheet.
    pub fn add_rule(&mut self, selector: Selector, properties: StyleProperties) {
        let order = self.next_order();
        self.rules.push(StyleRule::new(selector, properties, order));
    }

    /// Add the same properties under several selectors, like a CSS
    /// selector list. All resulting rules share one source position.
    pub fn add_rule_list(&mut self, selectors: Vec<Selector>, properties: StyleProperties) {
        let order = self.next_order();
        for selector in selectors {
            self.rules.push(StyleRule::new(selector, properties.clone(), order));
        }
    }

    pub(crate) fn next_order(&self) -> u32 {
        self.rules.last().map_or(0, |rule| rule.order + 1)
    }

    /// Append every rule of `other`, keeping them after this sheet's rules.
    pub fn extend(&mut self, other: StyleSheet) {
        let base = self.next_order();
        for mut rule in other.rules {
            rule.order += base;
            self.rules.push(rule);
        }
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::application()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectorPart;
    use crate::Error;

    #[test]
    fn stylesheet_creation() {
        let mut sheet = StyleSheet::component();
        assert!(sheet.is_empty());

        sheet.add_rule(Selector::class("input"), StyleProperties::default());

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.rules[0].order, 0);
    }

    #[test]
    fn stylesheet_priority() {
        assert!(StylePriority::Inline > StylePriority::Application);
        assert!(StylePriority::Application > StylePriority::Component);
    }

    #[test]
    fn rule_list_shares_order() {
        let mut sheet = StyleSheet::component();
        sheet.add_rule(Selector::class("a"), StyleProperties::default());
        sheet.add_rule_list(
            vec![
                Selector::class("b"),
                Selector::class("c").descendant(SelectorPart::class_only("d")),
            ],
            StyleProperties::default(),
        );
        sheet.add_rule(Selector::class("e"), StyleProperties::default());

        let orders: Vec<u32> = sheet.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 1, 1, 2]);
    }

    #[test]
    fn extend_keeps_appended_rules_later() {
        let mut first = StyleSheet::component();
        first.add_rule(Selector::class("a"), StyleProperties::default());
        let mut second = StyleSheet::component();
        second.add_rule(Selector::class("b"), StyleProperties::default());

        first.extend(second);
        assert_eq!(first.rules[1].order, 1);
    }

    #[test]
    fn from_css_expands_variables() {
        let vars = ThemeVariables::from_pairs([("color-text-input", "#112233")]);
        let sheet = StyleSheet::from_css(
            ".input { color: var(--color-text-input); }",
            StylePriority::Application,
            &vars,
        )
        .unwrap();
        assert_eq!(sheet.len(), 1);
        assert!(sheet.rules[0].properties.color.is_set());
    }

    #[test]
    fn from_css_rejects_undefined_variable() {
        let result = StyleSheet::from_css(
            ".input { color: var(--nope); }",
            StylePriority::Application,
            &ThemeVariables::new(),
        );
        assert!(matches!(result, Err(Error::UndefinedVariable { .. })));
    }
}

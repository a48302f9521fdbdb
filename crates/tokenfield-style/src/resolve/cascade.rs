//! Property cascading logic.

use crate::rules::StyleRule;
use crate::selector::SpecificityWithOrder;
use crate::style::StyleProperties;

/// Cascade source properties onto target.
///
/// Only explicitly set values from `source` will be copied to `target`.
/// This is the core of CSS cascading - later rules override earlier ones.
pub fn cascade_properties(target: &mut StyleProperties, source: &StyleProperties) {
    target.merge(source);
}

/// Cascade matched rules in precedence order.
///
/// `matched` pairs each rule with its priority-adjusted source order. Rules
/// are applied from lowest to highest precedence, so the winner of every
/// property is the last rule that sets it.
pub fn cascade_rules(matched: &mut [(&StyleRule, u32)]) -> StyleProperties {
    matched.sort_by_key(|(rule, order)| precedence(rule, *order));

    let mut cascaded = StyleProperties::default();
    for (rule, _) in matched.iter() {
        cascade_properties(&mut cascaded, &rule.properties);
    }
    cascaded
}

/// Priority dominates specificity: the sheet priority lives in the high
/// bits of `order`, and is compared before specificity.
fn precedence(rule: &StyleRule, order: u32) -> (u32, SpecificityWithOrder) {
    (order >> 24, rule.specificity.with_order(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StylePriority;
    use crate::selector::{Selector, SelectorPart};
    use crate::style::Style;
    use crate::types::{Color, StyleValue};

    #[test]
    fn cascade_overwrites_set_values() {
        let mut target = StyleProperties::default();
        target.color = StyleValue::Set(Color::BLACK);
        target.z_index = StyleValue::Set(1);

        let mut source = StyleProperties::default();
        source.color = StyleValue::Set(Color::RED);

        cascade_properties(&mut target, &source);

        assert_eq!(target.color.as_set(), Some(&Color::RED));
        // z-index is not set in source
        assert_eq!(target.z_index.as_set(), Some(&1));
    }

    #[test]
    fn specificity_beats_source_order() {
        let specific = StyleRule::new(
            Selector::class("wrapper").descendant(SelectorPart::class_only("input")),
            Style::new().color(Color::RED).build(),
            0,
        );
        let general = StyleRule::for_class("input", Style::new().color(Color::BLUE).build(), 1);

        let mut matched = vec![(&specific, 0), (&general, 1)];
        let cascaded = cascade_rules(&mut matched);
        assert_eq!(cascaded.color.as_set(), Some(&Color::RED));
    }

    #[test]
    fn priority_beats_specificity() {
        let specific = StyleRule::new(
            Selector::class("wrapper").descendant(SelectorPart::class_only("input")),
            Style::new().color(Color::RED).build(),
            0,
        );
        let override_rule = StyleRule::for_class("input", Style::new().color(Color::BLUE).build(), 0);

        let app = StylePriority::Application.as_order_offset();
        let mut matched = vec![(&override_rule, app), (&specific, 0)];
        let cascaded = cascade_rules(&mut matched);
        assert_eq!(cascaded.color.as_set(), Some(&Color::BLUE));
    }
}

//! Property-scoped transitions between computed styles.
//!
//! Only the properties named by the target style's `transition` list
//! animate. Everything else snaps to the target value immediately, so layout
//! properties such as padding never tween.

use std::time::Duration;

use crate::style::ComputedStyle;
use crate::types::{BoxShadow, Transition, TransitionProperty};

/// Interpolate from `from` toward `to` after `elapsed`.
///
/// The transitions declared on `to` govern the change, matching how a style
/// engine starts a transition when the new style takes effect.
pub fn interpolate(from: &ComputedStyle, to: &ComputedStyle, elapsed: Duration) -> ComputedStyle {
    let mut style = to.clone();

    if let Some(t) = progress(to, TransitionProperty::OutlineColor, elapsed) {
        style.outline_color = from.outline_color.lerp(to.outline_color, t);
    }
    if let Some(t) = progress(to, TransitionProperty::BoxShadow, elapsed) {
        style.box_shadow = lerp_shadows(&from.box_shadow, &to.box_shadow, t);
    }
    if let Some(t) = progress(to, TransitionProperty::BackgroundColor, elapsed) {
        style.background_color = from.background_color.lerp(to.background_color, t);
    }
    if let Some(t) = progress(to, TransitionProperty::Color, elapsed) {
        style.color = from.color.lerp(to.color, t);
    }

    style
}

/// Whether every transition declared on `to` has completed after `elapsed`.
pub fn is_finished(to: &ComputedStyle, elapsed: Duration) -> bool {
    to.transitions.iter().all(|t| elapsed >= t.duration)
}

/// Eased progress of the transition governing `property`.
///
/// `None` when nothing animates the property or its transition is over,
/// in which case the target value stands as is.
fn progress(to: &ComputedStyle, property: TransitionProperty, elapsed: Duration) -> Option<f32> {
    to.transitions
        .iter()
        .rev()
        .find(|t: &&Transition| t.property.covers(property))
        .filter(|t| elapsed < t.duration)
        .map(|t| t.progress(elapsed))
}

/// Shadow lists tween pairwise; a missing partner is a transparent copy of
/// the present shadow, so a shadow fades in or out instead of popping.
fn lerp_shadows(from: &[BoxShadow], to: &[BoxShadow], t: f32) -> Vec<BoxShadow> {
    let len = from.len().max(to.len());
    (0..len)
        .filter_map(|i| match (from.get(i), to.get(i)) {
            (Some(a), Some(b)) => Some(a.lerp(b, t)),
            (Some(a), None) => Some(a.lerp(&a.transparent_of(), t)),
            (None, Some(b)) => Some(b.transparent_of().lerp(b, t)),
            (None, None) => None,
        })
        .collect()
}

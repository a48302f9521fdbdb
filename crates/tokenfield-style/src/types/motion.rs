//! Transition declarations.

use std::time::Duration;

/// Properties a transition can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// Every animatable property.
    All,
    /// `outline-color`.
    OutlineColor,
    /// `box-shadow`.
    BoxShadow,
    /// `background-color`.
    BackgroundColor,
    /// `color`.
    Color,
}

impl TransitionProperty {
    /// Parse from CSS property name.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "outline-color" => Some(Self::OutlineColor),
            "box-shadow" => Some(Self::BoxShadow),
            "background-color" | "background" => Some(Self::BackgroundColor),
            "color" => Some(Self::Color),
            _ => None,
        }
    }

    /// Whether a declaration for `self` covers `other`.
    pub fn covers(&self, other: TransitionProperty) -> bool {
        *self == TransitionProperty::All || *self == other
    }
}

/// Easing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    /// Constant rate.
    Linear,
    /// Smooth start and end (the CSS initial value).
    #[default]
    Ease,
    /// Starts slow, accelerates.
    EaseIn,
    /// Starts fast, decelerates.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl TimingFunction {
    /// Parse from CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    /// Map linear progress (0.0-1.0) to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            TimingFunction::Ease | TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// One entry of a `transition` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Animated property.
    pub property: TransitionProperty,
    /// How long the change takes.
    pub duration: Duration,
    /// Easing curve.
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a transition entry.
    pub fn new(property: TransitionProperty, duration: Duration, timing: TimingFunction) -> Self {
        Self {
            property,
            duration,
            timing,
        }
    }

    /// Eased progress after `elapsed`, in 0.0-1.0.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.timing.apply(t)
    }
}

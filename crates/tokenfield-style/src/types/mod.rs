//! Style property value types.

mod color;
mod motion;
mod value;

pub use color::{BoxShadow, Color, CornerRadii};
pub use motion::{TimingFunction, Transition, TransitionProperty};
pub use value::*;

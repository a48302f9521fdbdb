//! Style properties and computed styles.

mod properties;
mod computed;
mod builder;

pub use properties::StyleProperties;
pub use computed::ComputedStyle;
pub use builder::Style;

//! Style resolution engine.

mod cache;
mod cascade;
mod engine;
mod inheritance;

pub use cache::{StyleCache, StyleCacheKey};
pub use cascade::{cascade_properties, cascade_rules};
pub use engine::{DEFAULT_ROOT_FONT_SIZE, StyleEngine};
pub use inheritance::resolve_properties;

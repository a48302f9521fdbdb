//! Theme variables (CSS custom properties).

mod variables;

pub use variables::ThemeVariables;

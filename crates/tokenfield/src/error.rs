//! Error types for the input widget styles.

/// Result type alias for input widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the input widget styles.
///
/// Host markup mistakes are never errors; they fall back to base styling.
/// Only configuration the host hands over explicitly (tokens, override
/// stylesheets) can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Style engine failure (CSS parsing, file access, variables).
    #[error(transparent)]
    Style(#[from] tokenfield_style::Error),

    /// A design token was present but could not be understood.
    #[error("Invalid token '--{name}' = '{value}': {message}")]
    InvalidToken {
        name: String,
        value: String,
        message: String,
    },
}

impl Error {
    /// Create an invalid token error.
    pub fn invalid_token(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidToken {
            name: name.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

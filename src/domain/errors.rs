//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Wordmask error type
///
/// Anonymization itself is total over any text input, so errors only come
/// from loading word lists and from configuration.
///
/// The type is `Clone` so that a failed one-time dictionary load can be
/// stored and reported identically to every caller of the cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The backing word-list resource could not be opened or read
    #[error("Word list unavailable: {source_name}: {reason}")]
    SourceUnavailable {
        /// Path or name of the word-list resource
        source_name: String,
        /// Underlying failure
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl MaskError {
    /// Creates a [`MaskError::SourceUnavailable`] from any displayable cause
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        MaskError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the error came from a word-list resource
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, MaskError::SourceUnavailable { .. })
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MaskError {
    fn from(err: toml::de::Error) -> Self {
        MaskError::Configuration(format!("TOML parse error: {err}"))
    }
}

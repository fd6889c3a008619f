//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Country code not present in the dictionary
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Province selected while the country has no province level
    #[error("Province selection is not applicable to country: {0}")]
    ProvinceNotApplicable(String),

    /// Dictionary JSON is malformed or breaks a dictionary invariant
    #[error("Dictionary format error: {0}")]
    DictionaryFormat(String),

    /// Generator input listing or knowledge table could not be parsed
    #[error("Listing format error at line {line}: {message}")]
    ListingFormat { line: usize, message: String },

    /// File system error
    #[error("I/O error: {0}")]
    Io(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CountryNotFound(_)
            | Self::ProvinceNotApplicable(_)
            | Self::ListingFormat { .. }
            | Self::ValidationError(_) => true,
            Self::DictionaryFormat(_) | Self::Io(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

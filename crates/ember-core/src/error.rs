//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}

impl EmberError {
    /// Check that `value` lies in `[min, max]`, naming the offending field otherwise.
    pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
        if value.is_finite() && value >= min && value <= max {
            Ok(())
        } else {
            Err(EmberError::ValueOutOfRange {
                field: field.to_string(),
                min,
                max,
                value,
            })
        }
    }
}

use thiserror::Error;

use crate::domain::model::Radix;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The input has no valid leading digit sequence for the chosen base.
    #[error("Invalid {radix} number")]
    InvalidNumber { radix: Radix },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidRadixValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl ConvertError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InvalidNumber { .. } | ConvertError::ConfigError { .. } => {
                self.to_string()
            }
            ConvertError::InvalidRadixValue { field, value, .. } => {
                format!("'{}' is not a usable {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InvalidNumber { radix } => {
                format!("Enter a {} number using digits {}", radix, radix.digit_set())
            }
            ConvertError::InvalidRadixValue { .. } => {
                "Choose one of: binary (2), octal (8), decimal (10), hex (16)".to_string()
            }
            ConvertError::ConfigError { .. } => {
                "Check the command-line flags and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

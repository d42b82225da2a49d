//! Intake dialogue configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::intake::DEFAULT_MAX_MESSAGE_LENGTH;

/// Settings for the webchat intake flow
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Practice name used when a request does not name one
    #[serde(default = "default_practice_name")]
    pub default_practice_name: String,

    /// Longest accepted caller message, in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

impl IntakeConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_practice_name.trim().is_empty() {
            return Err(ValidationError::EmptyPracticeName);
        }
        if self.max_message_length == 0 {
            return Err(ValidationError::InvalidMessageLength);
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            default_practice_name: default_practice_name(),
            max_message_length: default_max_message_length(),
        }
    }
}

fn default_practice_name() -> String {
    "Example Dental Clinic".to_string()
}

fn default_max_message_length() -> usize {
    DEFAULT_MAX_MESSAGE_LENGTH
}

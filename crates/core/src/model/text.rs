use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sanitize::contains_injection;

pub const MIN_INPUT_CHARS: usize = 3;
pub const MAX_INPUT_CHARS: usize = 500;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("Please enter at least {min} characters.")]
    TooShort { min: usize },

    #[error("Please keep it to {max} characters or fewer.")]
    TooLong { max: usize },

    #[error("Input contains disallowed content.")]
    Disallowed,
}

/// Free text accepted by the wizard: trimmed, 3..=500 characters, and free of
/// script-injection patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InputText(String);

impl InputText {
    /// Validate raw text for the problem statement or an answer.
    ///
    /// # Errors
    ///
    /// Returns `InputError::TooShort` / `InputError::TooLong` when the trimmed
    /// length (in characters) is out of range, and `InputError::Disallowed`
    /// when an injection pattern is present.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, InputError> {
        let trimmed = raw.as_ref().trim();
        let len = trimmed.chars().count();
        if len < MIN_INPUT_CHARS {
            return Err(InputError::TooShort {
                min: MIN_INPUT_CHARS,
            });
        }
        if len > MAX_INPUT_CHARS {
            return Err(InputError::TooLong {
                max: MAX_INPUT_CHARS,
            });
        }
        if contains_injection(trimmed) {
            return Err(InputError::Disallowed);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InputText {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<InputText> for String {
    fn from(value: InputText) -> Self {
        value.0
    }
}

impl std::fmt::Display for InputText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

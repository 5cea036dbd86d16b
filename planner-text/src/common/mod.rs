//! Contains functionality shared by readers and writers.

#[cfg(test)]
#[path = "../../tests/unit/common/format_error_test.rs"]
mod format_error_test;

use serde::Serialize;
use std::fmt;

/// A format error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;

        if let Some(details) = &self.details {
            write!(f, " details: '{details}'")?;
        }

        Ok(())
    }
}

impl std::error::Error for FormatError {}

/// Specifies why a token is not a valid non-negative integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// A token is not an integer at all.
    Malformed,
    /// A token is an integer below zero.
    Negative,
}

/// Parses a non-negative integer token distinguishing negative values from garbage.
pub(crate) fn parse_number(token: &str) -> Result<usize, NumberError> {
    token.parse::<usize>().map_err(|_| match token.parse::<i128>() {
        Ok(value) if value < 0 => NumberError::Negative,
        _ => NumberError::Malformed,
    })
}

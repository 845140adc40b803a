use thiserror::Error;

use super::constants::*;

/// Why a set of three-way options was rejected before any matching happened.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("{}", THIRD_OPTIONS_MISSING_MESSAGE)]
    ThirdOptionsMissing,
    #[error("{}", EMPTY_LABEL_MESSAGE)]
    EmptyLabel,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TernaryError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
    #[error("{}", .message)]
    NoMatch { message: String },
}

impl TernaryError {
    /// Builds a `NoMatch` error, falling back to the default text when `message` is empty.
    pub fn no_match(message: &str) -> Self {
        let message = if message.is_empty() {
            NO_MATCH_MESSAGE
        } else {
            message
        };
        TernaryError::NoMatch {
            message: message.to_string(),
        }
    }
}

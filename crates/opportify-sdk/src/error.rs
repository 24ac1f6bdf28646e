// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for SDK operations
//!
//! Local validation problems are reported as [`SdkError::InvalidArgument`]
//! before any request is sent. Failures from the Insights API are passed
//! through untouched as [`SdkError::Api`].

use insights_api::ApiError;
use thiserror::Error;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors returned by the facades
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SdkError {
    /// Caller supplied parameters failed validation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Settings could not be loaded or do not form a usable client
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The Insights API call failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SdkError {
    /// Create an invalid argument error
    pub fn invalid_argument<T: ToString>(message: T) -> Self {
        Self::InvalidArgument {
            message: message.to_string(),
        }
    }

    /// Create a configuration error
    pub fn configuration<T: ToString>(message: T) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Whether the error was raised by local validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The underlying API error, if the failure came from the service
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for SdkError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error)
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream error bodies
//!
//! The service reports failures in two shapes depending on the endpoint:
//! a flat `{"errorCode": ..., "errorMessage": ...}` object and a nested
//! `{"error": {"code": ..., "message": ...}}` envelope.

use serde::{Deserialize, Serialize};

/// Error details inside the nested envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human readable description
    #[serde(default)]
    pub message: Option<String>,
    /// Machine readable code, e.g. `INVALID_EMAIL`
    #[serde(default)]
    pub code: Option<String>,
}

/// Error body returned with non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpstreamError {
    /// `{"error": {"code": ..., "message": ...}}`
    Nested {
        /// Inner error details
        error: ErrorDetail,
    },
    /// `{"errorCode": ..., "errorMessage": ...}`
    #[serde(rename_all = "camelCase")]
    Flat {
        /// Machine readable code
        error_code: String,
        /// Human readable description
        #[serde(default)]
        error_message: Option<String>,
    },
}

impl UpstreamError {
    /// Parse an error body, returning `None` when it matches neither shape
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Machine readable error code
    pub fn code(&self) -> Option<&str> {
        match self {
            UpstreamError::Nested { error } => error.code.as_deref(),
            UpstreamError::Flat { error_code, .. } => Some(error_code),
        }
    }

    /// Human readable error message
    pub fn message(&self) -> Option<&str> {
        match self {
            UpstreamError::Nested { error } => error.message.as_deref(),
            UpstreamError::Flat { error_message, .. } => error_message.as_deref(),
        }
    }
}

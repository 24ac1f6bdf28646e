// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint operations and HTTP transport for the Opportify Insights API
//!
//! This crate turns typed models from [`insights_models`] into HTTP requests,
//! sends them through a [`Transport`], and turns the responses back into
//! typed models or an [`ApiError`].
//!
//! # Core Abstractions
//!
//! - **`Transport` Trait**: the seam between request building and the network;
//!   [`HttpTransport`] is the `reqwest` implementation, tests substitute their own
//! - **`Configuration`**: base URL, API key and debug flag shared by every operation
//! - **Operation clients**: [`EmailInsightsApi`] and [`IpInsightsApi`], one method per endpoint
//!
//! # Error Model
//!
//! Any non-success HTTP status becomes [`ApiError::Status`], carrying the status
//! code and the upstream body verbatim. Nothing is retried.

use thiserror::Error;

pub mod configuration;
mod dispatch;
pub mod email;
pub mod http;
pub mod ip;
pub mod request;

pub use configuration::{API_KEY_HEADER, Configuration};
pub use email::EmailInsightsApi;
pub use http::HttpTransport;
pub use ip::IpInsightsApi;
pub use request::{ApiRequest, ApiResponse, Part, RequestBody};
pub use reqwest::{Method, StatusCode, header::HeaderMap};

/// Result type alias for Insights API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Sends a fully built request and returns the raw response
///
/// Implementations must not interpret the status code; mapping non-success
/// responses to [`ApiError::Status`] happens in the operation layer.
pub trait Transport: Send + Sync {
    /// Send the request and wait for the complete response body
    ///
    /// The request is consumed, so any file handle held by a multipart body is
    /// closed by the time this future resolves, whether it succeeds or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the body could not be read
    fn send(&self, request: ApiRequest) -> impl Future<Output = ApiResult<ApiResponse>> + Send;
}

/// Errors raised by the operation layer
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// The request never produced a response
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// The service answered with a non-success status
    #[error("[{status}] {method} {url} failed: {body}")]
    Status {
        status: u16,
        method: String,
        url: String,
        body: String,
        error_code: Option<String>,
        error_message: Option<String>,
    },

    /// A success response whose body did not match the expected model
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Invalid base URL, API key or request parameters
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// HTTP status code, when the service produced a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream error code such as `INVALID_TOKEN`, when the body carried one
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ApiError::Status { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Http {
            message: error.to_string(),
        }
    }
}

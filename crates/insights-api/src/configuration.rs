// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Connection settings shared by every operation

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::{ApiError, ApiResult};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-opportify-token";

/// Base URL, credentials and debug flag for the operation clients
#[derive(Debug, Clone)]
pub struct Configuration {
    base_url: Url,
    api_key: HeaderValue,
    debug: bool,
}

impl Configuration {
    /// Create a configuration for the given base URL
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the API key is blank or not a valid
    /// header value, or if the base URL cannot be parsed or cannot carry a path
    pub fn new(base_url: &str, api_key: &str) -> ApiResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ApiError::Configuration {
                message: "API key cannot be empty".to_string(),
            });
        }

        let base_url = Url::parse(base_url).map_err(|e| ApiError::Configuration {
            message: format!("invalid base URL {base_url:?}: {e}"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration {
                message: format!("base URL {base_url} cannot carry a path"),
            });
        }

        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| ApiError::Configuration {
            message: "API key contains characters not allowed in a header".to_string(),
        })?;
        api_key.set_sensitive(true);

        Ok(Self {
            base_url,
            api_key,
            debug: false,
        })
    }

    /// Enable or disable request/response debug logging
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether debug logging is enabled
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Build an endpoint URL by appending percent-encoded path segments
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the base URL cannot carry a path
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Configuration {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Headers sent with every request
    pub fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            self.api_key.clone(),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

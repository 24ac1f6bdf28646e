// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client settings and base URL composition
//!
//! A facade is described by an API key plus the three parts of its base URL
//! (host, path prefix and version) and a debug toggle. [`ClientSettings::load`]
//! reads these from an optional `opportify.{toml,json,yaml}` file and
//! `OPPORTIFY_`-prefixed environment variables.

use std::{fmt, path::Path};

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::{SdkError, SdkResult};

/// Production API host
pub const DEFAULT_HOST: &str = "https://api.opportify.ai";
/// Path prefix in front of the version segment
pub const DEFAULT_PREFIX: &str = "insights";
/// API version segment
pub const DEFAULT_VERSION: &str = "v1";

const ENV_PREFIX: &str = "OPPORTIFY";
const CONFIG_FILE: &str = "opportify";

/// Settings a facade builds its client from
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Value of the `x-opportify-token` header
    pub api_key: String,
    /// Scheme and authority, e.g. `https://api.opportify.ai`
    pub host: String,
    /// Path prefix; may be empty
    pub prefix: String,
    /// Version segment; may be empty
    pub version: String,
    /// Log request and response bodies
    pub debug_mode: bool,
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("prefix", &self.prefix)
            .field("version", &self.version)
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

impl ClientSettings {
    /// Settings for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            version: DEFAULT_VERSION.to_string(),
            debug_mode: false,
        }
    }

    /// Base URL the operations are resolved against
    pub fn base_url(&self) -> String {
        compose_base_url(&self.host, &self.prefix, &self.version)
    }

    /// Load settings from `opportify.*` in the working directory and the
    /// environment
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. Defaults (production host, `insights`, `v1`, debug off)
    /// 2. `opportify.toml` / `opportify.json` / `opportify.yaml`, if present
    /// 3. `OPPORTIFY_API_KEY`, `OPPORTIFY_HOST`, `OPPORTIFY_PREFIX`,
    ///    `OPPORTIFY_VERSION`, `OPPORTIFY_DEBUG_MODE`
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Configuration`] if a source cannot be read or no API
    /// key was provided
    pub fn load() -> SdkResult<Self> {
        Self::load_from(None, None)
    }

    /// Like [`ClientSettings::load`], with an optional settings file replacing
    /// the `opportify.*` lookup and an optional API key overriding every source
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Configuration`] if `file` is missing or invalid, a
    /// source cannot be read, or no API key was provided
    pub fn load_from(file: Option<&Path>, api_key: Option<&str>) -> SdkResult<Self> {
        let file = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };
        Self::load_with(file, Environment::with_prefix(ENV_PREFIX), api_key)
    }

    fn load_with<F>(file: F, environment: Environment, api_key: Option<&str>) -> SdkResult<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let mut builder = defaults()?.add_source(file).add_source(environment);
        if let Some(api_key) = api_key {
            builder = builder.set_override("api_key", api_key)?;
        }
        let settings: Self = builder.build()?.try_deserialize()?;

        if settings.api_key.trim().is_empty() {
            return Err(SdkError::configuration(format!(
                "API key is required; set {ENV_PREFIX}_API_KEY or api_key in {CONFIG_FILE}.toml"
            )));
        }

        Ok(settings)
    }
}

fn defaults() -> SdkResult<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("api_key", "")?
        .set_default("host", DEFAULT_HOST)?
        .set_default("prefix", DEFAULT_PREFIX)?
        .set_default("version", DEFAULT_VERSION)?
        .set_default("debug_mode", false)?)
}

/// Join host, prefix and version into a base URL
///
/// Trailing slashes are stripped from `host`, surrounding slashes from `prefix`
/// and `version`, and empty segments are skipped. Slashes inside a segment are
/// kept.
///
/// ```rust
/// use opportify_sdk::compose_base_url;
///
/// assert_eq!(
///     compose_base_url("https://api.opportify.ai/", "/insights/", "v1"),
///     "https://api.opportify.ai/insights/v1"
/// );
/// assert_eq!(compose_base_url("https://api.opportify.ai", "", ""), "https://api.opportify.ai");
/// ```
pub fn compose_base_url(host: &str, prefix: &str, version: &str) -> String {
    let host = host.trim_end_matches('/');
    let path = [prefix, version]
        .iter()
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if path.is_empty() {
        host.to_string()
    } else {
        format!("{host}/{path}")
    }
}

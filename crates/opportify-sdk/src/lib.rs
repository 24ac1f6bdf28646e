// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client SDK for Opportify Email Insights and IP Insights
//!
//! The facades, [`EmailInsights`] and [`IpInsights`], take loosely typed JSON
//! parameters, normalize them (flag aliases, boolean coercion, defaults), and
//! return plain [`serde_json::Value`] structures. Typed models live in
//! [`insights_models`] and the HTTP layer in [`insights_api`].
//!
//! # Core Abstractions
//!
//! - **`ClientSettings`**: API key, host, path prefix, version and debug flag,
//!   loadable from `opportify.toml` and `OPPORTIFY_*` environment variables
//! - **`TransportFactory`**: produces the transport each rebuilt client sends
//!   through; [`HttpTransportFactory`] is the default
//! - **`ClientState`**: setters mark a facade dirty and the next call rebuilds
//!   its client once
//!
//! # Errors
//!
//! Parameter problems surface as [`SdkError::InvalidArgument`] before anything
//! is sent. API failures are returned as [`SdkError::Api`] without being
//! reworded or retried.

pub mod batch;
mod client;
pub mod email;
pub mod error;
pub mod export;
pub mod identifier;
pub mod ip;
pub mod params;
pub mod settings;

pub use batch::BatchContentType;
pub use client::{ClientState, HttpTransportFactory, TransportFactory};
pub use email::EmailInsights;
pub use error::{SdkError, SdkResult};
pub use export::normalize_export_request;
pub use identifier::Identifier;
pub use insights_api::ApiError;
pub use ip::IpInsights;
pub use params::{Params, resolve_boolean};
pub use settings::{
    ClientSettings, DEFAULT_HOST, DEFAULT_PREFIX, DEFAULT_VERSION, compose_base_url,
};

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Lazily rebuilt operation client shared by both facades
//!
//! Setters only touch [`ClientSettings`] and mark the client dirty. The
//! operation client is rebuilt at most once, right before the next API call,
//! however many settings changed in between.

use insights_api::{ApiError, Configuration, HttpTransport, Transport};
use tracing::debug;

use crate::{ClientSettings, SdkError, SdkResult};

/// Builds the transport for a freshly configured operation client
pub trait TransportFactory: Send + Sync {
    /// Transport type handed to the operation client
    type Transport: Transport;

    /// Create a transport for `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed
    fn build(&self, settings: &ClientSettings) -> insights_api::ApiResult<Self::Transport>;
}

/// Default factory producing a `reqwest` backed [`HttpTransport`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransportFactory;

impl TransportFactory for HttpTransportFactory {
    type Transport = HttpTransport;

    fn build(&self, settings: &ClientSettings) -> insights_api::ApiResult<HttpTransport> {
        HttpTransport::new(settings.debug_mode)
    }
}

/// Whether the operation client reflects the current settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// The client matches the settings
    Clean,
    /// Settings changed, or no client exists yet
    Dirty,
}

/// Settings plus the operation client built from them
pub(crate) struct InsightsClient<F: TransportFactory, A> {
    settings: ClientSettings,
    factory: F,
    api: Option<A>,
    assemble: fn(Configuration, F::Transport) -> A,
}

impl<F: TransportFactory, A> InsightsClient<F, A> {
    pub(crate) fn new(
        settings: ClientSettings,
        factory: F,
        assemble: fn(Configuration, F::Transport) -> A,
    ) -> Self {
        Self {
            settings,
            factory,
            api: None,
            assemble,
        }
    }

    pub(crate) fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub(crate) fn state(&self) -> ClientState {
        if self.api.is_some() {
            ClientState::Clean
        } else {
            ClientState::Dirty
        }
    }

    pub(crate) fn set_host(&mut self, host: String) {
        if self.settings.host != host {
            self.settings.host = host;
            self.api = None;
        }
    }

    pub(crate) fn set_prefix(&mut self, prefix: String) {
        if self.settings.prefix != prefix {
            self.settings.prefix = prefix;
            self.api = None;
        }
    }

    pub(crate) fn set_version(&mut self, version: String) {
        if self.settings.version != version {
            self.settings.version = version;
            self.api = None;
        }
    }

    pub(crate) fn set_debug_mode(&mut self, debug_mode: bool) {
        if self.settings.debug_mode != debug_mode {
            self.settings.debug_mode = debug_mode;
            self.api = None;
        }
    }

    /// The operation client, rebuilt first if settings changed
    pub(crate) fn api(&mut self) -> SdkResult<&A> {
        let api = match self.api.take() {
            Some(api) => api,
            None => self.rebuild()?,
        };
        Ok(self.api.insert(api))
    }

    fn rebuild(&self) -> SdkResult<A> {
        let base_url = self.settings.base_url();
        debug!(
            base_url = %base_url,
            debug_mode = self.settings.debug_mode,
            "Building Insights API client"
        );

        let configuration = Configuration::new(&base_url, &self.settings.api_key)
            .map_err(into_configuration_error)?
            .with_debug(self.settings.debug_mode);
        let transport = self
            .factory
            .build(&self.settings)
            .map_err(into_configuration_error)?;

        Ok((self.assemble)(configuration, transport))
    }
}

fn into_configuration_error(error: ApiError) -> SdkError {
    match error {
        ApiError::Configuration { message } => SdkError::Configuration { message },
        other => SdkError::configuration(other),
    }
}

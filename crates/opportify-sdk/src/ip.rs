// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! IP Insights facade

use std::path::Path;

use insights_api::{Configuration, IpInsightsApi, RequestBody, Transport};
use insights_models::{AnalyzeIpRequest, BatchAnalyzeIpsRequest};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    BatchContentType, ClientSettings, ClientState, HttpTransportFactory, Params, SdkError,
    SdkResult, TransportFactory,
    batch::{self, FlagAlias},
    client::InsightsClient,
    export::{batch_job_id, export_ids, export_job_id, normalize_export_request},
};

const BATCH_FLAGS: &[FlagAlias] = &[("enable_ai", "enableAi")];

/// Normalize parameters for a single IP analysis
///
/// `ip` is required; `enable_ai` defaults to `true`.
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] if `ip` is missing or `enable_ai`
/// does not coerce to a boolean
pub fn normalize_request(params: &Value) -> SdkResult<AnalyzeIpRequest> {
    let params = Params::new(params)?;
    let ip = params
        .string("ip")?
        .ok_or_else(|| SdkError::invalid_argument("The ip parameter is required."))?;

    Ok(AnalyzeIpRequest {
        ip,
        enable_ai: params.flag_or("enable_ai", "enableAi", true)?,
    })
}

/// Normalize parameters for a JSON batch submission
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] if `ips` is not a list of strings or
/// `enable_ai` does not coerce to a boolean
pub fn normalize_batch_request(params: &Value) -> SdkResult<BatchAnalyzeIpsRequest> {
    let params = Params::new(params)?;

    Ok(BatchAnalyzeIpsRequest {
        ips: params.string_list("ips")?,
        name: params.string("name")?,
        enable_ai: params.flag("enable_ai", "enableAi")?,
    })
}

/// Client for the IP Insights endpoints
pub struct IpInsights<F: TransportFactory = HttpTransportFactory> {
    client: InsightsClient<F, IpInsightsApi<F::Transport>>,
}

impl IpInsights {
    /// Client for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_settings(ClientSettings::new(api_key))
    }

    /// Client for the given settings
    pub fn from_settings(settings: ClientSettings) -> Self {
        Self::with_factory(settings, HttpTransportFactory)
    }
}

impl<F: TransportFactory> IpInsights<F> {
    /// Client whose transports are produced by `factory`
    pub fn with_factory(settings: ClientSettings, factory: F) -> Self {
        Self {
            client: InsightsClient::new(settings, factory, build_api::<F::Transport>),
        }
    }

    /// Change the host; takes effect on the next call
    pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.client.set_host(host.into());
        self
    }

    /// Change the path prefix; takes effect on the next call
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.client.set_prefix(prefix.into());
        self
    }

    /// Change the version segment; takes effect on the next call
    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.client.set_version(version.into());
        self
    }

    /// Toggle request and response body logging; takes effect on the next call
    pub fn set_debug_mode(&mut self, debug_mode: bool) -> &mut Self {
        self.client.set_debug_mode(debug_mode);
        self
    }

    /// Current settings
    pub fn settings(&self) -> &ClientSettings {
        self.client.settings()
    }

    /// Base URL the next call will use
    pub fn final_url(&self) -> String {
        self.client.settings().base_url()
    }

    /// Whether the next call rebuilds the operation client
    pub fn state(&self) -> ClientState {
        self.client.state()
    }

    /// Analyze a single IPv4 or IPv6 address
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for bad parameters and
    /// [`SdkError::Api`] when the call fails
    pub async fn analyze(&mut self, params: &Value) -> SdkResult<Value> {
        let request = normalize_request(params)?;
        debug!(enable_ai = request.enable_ai, "Analyzing IP address");

        Ok(self.client.api()?.analyze_ip_as::<Value>(&request).await?)
    }

    /// Submit a batch of IP addresses
    ///
    /// Parameters per content type match [`crate::EmailInsights::batch_analyze`],
    /// with `ips` in place of `emails` and `enable_ai` as the only flag.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for bad parameters and
    /// [`SdkError::Api`] when the call fails
    pub async fn batch_analyze(
        &mut self,
        params: &Value,
        content_type: BatchContentType,
    ) -> SdkResult<Value> {
        let job: Value = match content_type {
            BatchContentType::Json => {
                let request = normalize_batch_request(params)?;
                info!(count = request.ips.len(), "Submitting IP batch");
                self.client
                    .api()?
                    .batch_analyze_ips_as(RequestBody::json(&request)?)
                    .await?
            }
            BatchContentType::Multipart => {
                let body = batch::multipart_body(&Params::new(params)?, BATCH_FLAGS).await?;
                info!(content_type = %content_type, "Submitting IP batch");
                self.client.api()?.batch_analyze_ips_as(body).await?
            }
            BatchContentType::TextPlain => {
                let body = batch::text_body(&Params::new(params)?)?;
                info!(content_type = %content_type, "Submitting IP batch");
                self.client.api()?.batch_analyze_ips_as(body).await?
            }
        };

        info!(
            job_id = job.get("jobId").and_then(serde_json::Value::as_str),
            status = job.get("status").and_then(serde_json::Value::as_str),
            "IP batch accepted"
        );
        Ok(job)
    }

    /// Submit the file at `path` as a batch
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if the file cannot be used and
    /// [`SdkError::Api`] when the call fails
    pub async fn batch_analyze_file(
        &mut self,
        path: impl AsRef<Path>,
        options: &Value,
    ) -> SdkResult<Value> {
        let (content_type, params) =
            batch::file_params(path.as_ref(), &Params::new(options)?).await?;
        self.batch_analyze(&Value::Object(params), content_type)
            .await
    }

    /// Status of a batch job
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for a blank job id and
    /// [`SdkError::Api`] when the call fails
    pub async fn get_batch_status(&mut self, job_id: &str) -> SdkResult<Value> {
        let job_id = batch_job_id(job_id)?;
        Ok(self
            .client
            .api()?
            .get_ip_batch_status_as::<Value>(job_id.as_str())
            .await?)
    }

    /// Request an export of a finished batch job
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for a blank job id or malformed
    /// options and [`SdkError::Api`] when the call fails
    pub async fn create_batch_export(&mut self, job_id: &str, payload: &Value) -> SdkResult<Value> {
        let job_id = export_job_id(job_id)?;
        let export = normalize_export_request(payload)?;
        let export = (!export.is_empty()).then_some(export);
        debug!(job_id = %job_id, has_options = export.is_some(), "Creating IP batch export");

        Ok(self
            .client
            .api()?
            .create_ip_batch_export_as::<Value>(job_id.as_str(), export.as_ref())
            .await?)
    }

    /// Status of an export
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] if either id is blank and
    /// [`SdkError::Api`] when the call fails
    pub async fn get_batch_export_status(
        &mut self,
        job_id: &str,
        export_id: &str,
    ) -> SdkResult<Value> {
        let (job_id, export_id) = export_ids(job_id, export_id)?;
        Ok(self
            .client
            .api()?
            .get_ip_batch_export_status_as::<Value>(job_id.as_str(), export_id.as_str())
            .await?)
    }
}

impl<F: TransportFactory> std::fmt::Debug for IpInsights<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpInsights")
            .field("settings", self.client.settings())
            .field("state", &self.client.state())
            .finish_non_exhaustive()
    }
}

fn build_api<T: Transport>(configuration: Configuration, transport: T) -> IpInsightsApi<T> {
    IpInsightsApi::new(configuration, transport)
}

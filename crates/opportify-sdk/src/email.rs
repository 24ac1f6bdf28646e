// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Email Insights facade
//!
//! [`EmailInsights`] accepts loosely typed parameters, validates and
//! normalizes them, and returns plain JSON structures.
//!
//! ```rust,no_run
//! use opportify_sdk::EmailInsights;
//! use serde_json::json;
//!
//! # async fn run() -> opportify_sdk::SdkResult<()> {
//! let mut email_insights = EmailInsights::new("YOUR-API-KEY-HERE");
//! let result = email_insights
//!     .analyze(&json!({"email": "test@gmail.com", "enableAutoCorrection": true}))
//!     .await?;
//! println!("{}", result["emailProvider"]);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use insights_api::{Configuration, EmailInsightsApi, RequestBody, Transport};
use insights_models::{AnalyzeEmailRequest, BatchAnalyzeEmailsRequest};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    BatchContentType, ClientSettings, ClientState, HttpTransportFactory, Params, SdkError,
    SdkResult, TransportFactory,
    batch::{self, FlagAlias},
    client::InsightsClient,
    export::{batch_job_id, export_ids, export_job_id, normalize_export_request},
};

const BATCH_FLAGS: &[FlagAlias] = &[
    ("enable_ai", "enableAi"),
    ("enable_auto_correction", "enableAutoCorrection"),
];

/// Normalize parameters for a single email analysis
///
/// `email` is required. `enable_ai`, `enable_auto_correction` and
/// `enable_domain_enrichment` (or their `camelCase` forms) default to `true`.
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] if `email` is missing or a flag does
/// not coerce to a boolean
pub fn normalize_request(params: &Value) -> SdkResult<AnalyzeEmailRequest> {
    let params = Params::new(params)?;
    let email = params
        .string("email")?
        .ok_or_else(|| SdkError::invalid_argument("The email parameter is required."))?;

    Ok(AnalyzeEmailRequest {
        email,
        enable_ai: params.flag_or("enable_ai", "enableAi", true)?,
        enable_auto_correction: params.flag_or(
            "enable_auto_correction",
            "enableAutoCorrection",
            true,
        )?,
        enable_domain_enrichment: params.flag_or(
            "enable_domain_enrichment",
            "enableDomainEnrichment",
            true,
        )?,
    })
}

/// Normalize parameters for a JSON batch submission
///
/// `emails` is required. `name` and the flags are carried only when supplied.
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] if `emails` is not a list of strings
/// or a flag does not coerce to a boolean
pub fn normalize_batch_request(params: &Value) -> SdkResult<BatchAnalyzeEmailsRequest> {
    let params = Params::new(params)?;

    Ok(BatchAnalyzeEmailsRequest {
        emails: params.string_list("emails")?,
        name: params.string("name")?,
        enable_ai: params.flag("enable_ai", "enableAi")?,
        enable_auto_correction: params.flag("enable_auto_correction", "enableAutoCorrection")?,
    })
}

/// Client for the Email Insights endpoints
pub struct EmailInsights<F: TransportFactory = HttpTransportFactory> {
    client: InsightsClient<F, EmailInsightsApi<F::Transport>>,
}

impl EmailInsights {
    /// Client for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_settings(ClientSettings::new(api_key))
    }

    /// Client for the given settings
    pub fn from_settings(settings: ClientSettings) -> Self {
        Self::with_factory(settings, HttpTransportFactory)
    }
}

impl<F: TransportFactory> EmailInsights<F> {
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

    /// Analyze a single email address
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for bad parameters and
    /// [`SdkError::Api`] when the call fails
    pub async fn analyze(&mut self, params: &Value) -> SdkResult<Value> {
        let request = normalize_request(params)?;
        debug!(
            enable_ai = request.enable_ai,
            enable_auto_correction = request.enable_auto_correction,
            enable_domain_enrichment = request.enable_domain_enrichment,
            "Analyzing email"
        );

        Ok(self.client.api()?.analyze_email_as::<Value>(&request).await?)
    }

    /// Submit a batch of email addresses
    ///
    /// - [`BatchContentType::Json`]: `emails` list plus optional `name`,
    ///   `enable_ai`, `enable_auto_correction`
    /// - [`BatchContentType::Multipart`]: `file` path plus the same optional fields
    /// - [`BatchContentType::TextPlain`]: `text`, one address per line
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
                info!(count = request.emails.len(), "Submitting email batch");
                self.client
                    .api()?
                    .batch_analyze_emails_as(RequestBody::json(&request)?)
                    .await?
            }
            BatchContentType::Multipart => {
                let body = batch::multipart_body(&Params::new(params)?, BATCH_FLAGS).await?;
                info!(content_type = %content_type, "Submitting email batch");
                self.client.api()?.batch_analyze_emails_as(body).await?
            }
            BatchContentType::TextPlain => {
                let body = batch::text_body(&Params::new(params)?)?;
                info!(content_type = %content_type, "Submitting email batch");
                self.client.api()?.batch_analyze_emails_as(body).await?
            }
        };

        info!(
            job_id = job.get("jobId").and_then(serde_json::Value::as_str),
            status = job.get("status").and_then(serde_json::Value::as_str),
            "Email batch accepted"
        );
        Ok(job)
    }

    /// Submit the file at `path` as a batch
    ///
    /// `.csv` files are uploaded as multipart; any other file is read and sent
    /// as plain text. `options` may carry `name` and the batch flags.
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
            .get_email_batch_status_as::<Value>(job_id.as_str())
            .await?)
    }

    /// Request an export of a finished batch job
    ///
    /// `payload` may carry `exportType`, `filters` and `columns`; when it
    /// normalizes to nothing, no request body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidArgument`] for a blank job id or malformed
    /// options and [`SdkError::Api`] when the call fails
    pub async fn create_batch_export(&mut self, job_id: &str, payload: &Value) -> SdkResult<Value> {
        let job_id = export_job_id(job_id)?;
        let export = normalize_export_request(payload)?;
        let export = (!export.is_empty()).then_some(export);
        debug!(job_id = %job_id, has_options = export.is_some(), "Creating email batch export");

        Ok(self
            .client
            .api()?
            .create_email_batch_export_as::<Value>(job_id.as_str(), export.as_ref())
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
            .get_email_batch_export_status_as::<Value>(job_id.as_str(), export_id.as_str())
            .await?)
    }
}

impl<F: TransportFactory> std::fmt::Debug for EmailInsights<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailInsights")
            .field("settings", self.client.settings())
            .field("state", &self.client.state())
            .finish_non_exhaustive()
    }
}

fn build_api<T: Transport>(configuration: Configuration, transport: T) -> EmailInsightsApi<T> {
    EmailInsightsApi::new(configuration, transport)
}

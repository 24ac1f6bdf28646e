// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Email Insights endpoints
//!
//! Each endpoint has a typed method and an `_as` variant generic over the
//! response type. Decoding into `serde_json::Value` keeps the upstream body
//! untouched.

use insights_models::{
    AnalyzeEmailRequest, AnalyzeEmailResponse, BatchAnalyzeEmailsRequest, BatchJob, ExportJob,
    ExportRequest,
};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    ApiResult, Configuration, RequestBody, Transport,
    dispatch::{BatchEndpoints, build_request, execute},
};

const ENDPOINTS: BatchEndpoints = BatchEndpoints { kind: "email" };

/// Operation client for the `/email` endpoints
#[derive(Debug)]
pub struct EmailInsightsApi<T> {
    configuration: Configuration,
    transport: T,
}

impl<T: Transport> EmailInsightsApi<T> {
    /// Create a client sending through `transport`
    pub fn new(configuration: Configuration, transport: T) -> Self {
        Self {
            configuration,
            transport,
        }
    }

    /// Configuration the client was built with
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// `POST /email/analyze`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success responses, `ApiError::Http`
    /// for transport failures
    pub async fn analyze_email(
        &self,
        request: &AnalyzeEmailRequest,
    ) -> ApiResult<AnalyzeEmailResponse> {
        self.analyze_email_as(request).await
    }

    /// `POST /email/analyze`, decoding the response into `R`
    pub async fn analyze_email_as<R: DeserializeOwned>(
        &self,
        request: &AnalyzeEmailRequest,
    ) -> ApiResult<R> {
        let request = build_request(
            &self.configuration,
            Method::POST,
            &["email", "analyze"],
            RequestBody::json(request)?,
        )?;
        execute(&self.transport, &self.configuration, request).await
    }

    /// `POST /email/batch` with any body kind (JSON, multipart or plain text)
    pub async fn batch_analyze_emails(&self, body: RequestBody) -> ApiResult<BatchJob> {
        self.batch_analyze_emails_as(body).await
    }

    /// `POST /email/batch`, decoding the response into `R`
    pub async fn batch_analyze_emails_as<R: DeserializeOwned>(
        &self,
        body: RequestBody,
    ) -> ApiResult<R> {
        ENDPOINTS
            .submit(&self.transport, &self.configuration, body)
            .await
    }

    /// `POST /email/batch` with a JSON body
    pub async fn batch_analyze_emails_json(
        &self,
        request: &BatchAnalyzeEmailsRequest,
    ) -> ApiResult<BatchJob> {
        self.batch_analyze_emails(RequestBody::json(request)?).await
    }

    /// `GET /email/batch/{jobId}`
    pub async fn get_email_batch_status(&self, job_id: &str) -> ApiResult<BatchJob> {
        self.get_email_batch_status_as(job_id).await
    }

    /// `GET /email/batch/{jobId}`, decoding the response into `R`
    pub async fn get_email_batch_status_as<R: DeserializeOwned>(
        &self,
        job_id: &str,
    ) -> ApiResult<R> {
        ENDPOINTS
            .status(&self.transport, &self.configuration, job_id)
            .await
    }

    /// `POST /email/batch/{jobId}/export`; `None` sends no body
    pub async fn create_email_batch_export(
        &self,
        job_id: &str,
        export: Option<&ExportRequest>,
    ) -> ApiResult<ExportJob> {
        self.create_email_batch_export_as(job_id, export).await
    }

    /// `POST /email/batch/{jobId}/export`, decoding the response into `R`
    pub async fn create_email_batch_export_as<R: DeserializeOwned>(
        &self,
        job_id: &str,
        export: Option<&ExportRequest>,
    ) -> ApiResult<R> {
        ENDPOINTS
            .create_export(&self.transport, &self.configuration, job_id, export)
            .await
    }

    /// `GET /email/batch/{jobId}/export/{exportId}`
    pub async fn get_email_batch_export_status(
        &self,
        job_id: &str,
        export_id: &str,
    ) -> ApiResult<ExportJob> {
        self.get_email_batch_export_status_as(job_id, export_id)
            .await
    }

    /// `GET /email/batch/{jobId}/export/{exportId}`, decoding the response into `R`
    pub async fn get_email_batch_export_status_as<R: DeserializeOwned>(
        &self,
        job_id: &str,
        export_id: &str,
    ) -> ApiResult<R> {
        ENDPOINTS
            .export_status(&self.transport, &self.configuration, job_id, export_id)
            .await
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! IP Insights endpoints

use insights_models::{
    AnalyzeIpRequest, AnalyzeIpResponse, BatchAnalyzeIpsRequest, BatchJob, ExportJob,
    ExportRequest,
};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    ApiResult, Configuration, RequestBody, Transport,
    dispatch::{BatchEndpoints, build_request, execute},
};

const ENDPOINTS: BatchEndpoints = BatchEndpoints { kind: "ip" };

/// Operation client for the `/ip` endpoints
#[derive(Debug)]
pub struct IpInsightsApi<T> {
    configuration: Configuration,
    transport: T,
}

impl<T: Transport> IpInsightsApi<T> {
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

    /// `POST /ip/analyze`
    pub async fn analyze_ip(&self, request: &AnalyzeIpRequest) -> ApiResult<AnalyzeIpResponse> {
        self.analyze_ip_as(request).await
    }

    /// `POST /ip/analyze`, decoding the response into `R`
    pub async fn analyze_ip_as<R: DeserializeOwned>(
        &self,
        request: &AnalyzeIpRequest,
    ) -> ApiResult<R> {
        let request = build_request(
            &self.configuration,
            Method::POST,
            &["ip", "analyze"],
            RequestBody::json(request)?,
        )?;
        execute(&self.transport, &self.configuration, request).await
    }

    /// `POST /ip/batch` with any body kind
    pub async fn batch_analyze_ips(&self, body: RequestBody) -> ApiResult<BatchJob> {
        self.batch_analyze_ips_as(body).await
    }

    /// `POST /ip/batch`, decoding the response into `R`
    pub async fn batch_analyze_ips_as<R: DeserializeOwned>(
        &self,
        body: RequestBody,
    ) -> ApiResult<R> {
        ENDPOINTS
            .submit(&self.transport, &self.configuration, body)
            .await
    }

    /// `POST /ip/batch` with a JSON body
    pub async fn batch_analyze_ips_json(
        &self,
        request: &BatchAnalyzeIpsRequest,
    ) -> ApiResult<BatchJob> {
        self.batch_analyze_ips(RequestBody::json(request)?).await
    }

    /// `GET /ip/batch/{jobId}`
    pub async fn get_ip_batch_status(&self, job_id: &str) -> ApiResult<BatchJob> {
        self.get_ip_batch_status_as(job_id).await
    }

    /// `GET /ip/batch/{jobId}`, decoding the response into `R`
    pub async fn get_ip_batch_status_as<R: DeserializeOwned>(&self, job_id: &str) -> ApiResult<R> {
        ENDPOINTS
            .status(&self.transport, &self.configuration, job_id)
            .await
    }

    /// `POST /ip/batch/{jobId}/export`; `None` sends no body
    pub async fn create_ip_batch_export(
        &self,
        job_id: &str,
        export: Option<&ExportRequest>,
    ) -> ApiResult<ExportJob> {
        self.create_ip_batch_export_as(job_id, export).await
    }

    /// `POST /ip/batch/{jobId}/export`, decoding the response into `R`
    pub async fn create_ip_batch_export_as<R: DeserializeOwned>(
        &self,
        job_id: &str,
        export: Option<&ExportRequest>,
    ) -> ApiResult<R> {
        ENDPOINTS
            .create_export(&self.transport, &self.configuration, job_id, export)
            .await
    }

    /// `GET /ip/batch/{jobId}/export/{exportId}`
    pub async fn get_ip_batch_export_status(
        &self,
        job_id: &str,
        export_id: &str,
    ) -> ApiResult<ExportJob> {
        self.get_ip_batch_export_status_as(job_id, export_id).await
    }

    /// `GET /ip/batch/{jobId}/export/{exportId}`, decoding the response into `R`
    pub async fn get_ip_batch_export_status_as<R: DeserializeOwned>(
        &self,
        job_id: &str,
        export_id: &str,
    ) -> ApiResult<R> {
        ENDPOINTS
            .export_status(&self.transport, &self.configuration, job_id, export_id)
            .await
    }
}

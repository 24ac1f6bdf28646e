// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request building and response handling shared by the operation clients

use insights_models::{ExportRequest, UpstreamError};
use reqwest::{
    Method,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::{ApiError, ApiRequest, ApiResult, Configuration, RequestBody, Transport};

/// Build a request for `segments` below the configured base URL
pub(crate) fn build_request(
    configuration: &Configuration,
    method: Method,
    segments: &[&str],
    body: RequestBody,
) -> ApiResult<ApiRequest> {
    let url = configuration.endpoint(segments)?;
    let mut headers = configuration.default_headers();
    if let RequestBody::Text(_) = body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    }

    Ok(ApiRequest {
        method,
        url,
        headers,
        body,
    })
}

/// Send a request and decode a success body into `R`
///
/// With `R = serde_json::Value` the body is returned exactly as received.
pub(crate) async fn execute<T, R>(
    transport: &T,
    configuration: &Configuration,
    request: ApiRequest,
) -> ApiResult<R>
where
    T: Transport,
    R: DeserializeOwned,
{
    let method = request.method.to_string();
    let url = request.url.to_string();

    debug!(
        method,
        url,
        content_type = request.body.content_type(),
        "sending Insights API request"
    );
    if configuration.debug()
        && let RequestBody::Json(body) = &request.body
    {
        trace!(method, url, %body, "request body");
    }

    let response = transport.send(request).await?;

    if configuration.debug() {
        trace!(
            method,
            url,
            status = response.status.as_u16(),
            body = %response.body,
            "response body"
        );
    }

    if !response.status.is_success() {
        let upstream = UpstreamError::parse(&response.body);
        warn!(
            method,
            url,
            status = response.status.as_u16(),
            error_code = upstream.as_ref().and_then(UpstreamError::code),
            "Insights API returned an error"
        );
        return Err(ApiError::Status {
            status: response.status.as_u16(),
            method,
            url,
            error_code: upstream.as_ref().and_then(|e| e.code().map(str::to_string)),
            error_message: upstream
                .as_ref()
                .and_then(|e| e.message().map(str::to_string)),
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidResponse {
        message: format!("failed to decode response from {method} {url}: {e}"),
    })
}

/// Batch and export endpoints are identical for every insight kind apart
/// from the leading path segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BatchEndpoints {
    pub(crate) kind: &'static str,
}

impl BatchEndpoints {
    pub(crate) async fn submit<T: Transport, R: DeserializeOwned>(
        self,
        transport: &T,
        configuration: &Configuration,
        body: RequestBody,
    ) -> ApiResult<R> {
        let request = build_request(configuration, Method::POST, &[self.kind, "batch"], body)?;
        execute(transport, configuration, request).await
    }

    pub(crate) async fn status<T: Transport, R: DeserializeOwned>(
        self,
        transport: &T,
        configuration: &Configuration,
        job_id: &str,
    ) -> ApiResult<R> {
        let request = build_request(
            configuration,
            Method::GET,
            &[self.kind, "batch", job_id],
            RequestBody::Empty,
        )?;
        execute(transport, configuration, request).await
    }

    pub(crate) async fn create_export<T: Transport, R: DeserializeOwned>(
        self,
        transport: &T,
        configuration: &Configuration,
        job_id: &str,
        export: Option<&ExportRequest>,
    ) -> ApiResult<R> {
        let body = match export {
            Some(export) => RequestBody::json(export)?,
            None => RequestBody::Empty,
        };
        let request = build_request(
            configuration,
            Method::POST,
            &[self.kind, "batch", job_id, "export"],
            body,
        )?;
        execute(transport, configuration, request).await
    }

    pub(crate) async fn export_status<T: Transport, R: DeserializeOwned>(
        self,
        transport: &T,
        configuration: &Configuration,
        job_id: &str,
        export_id: &str,
    ) -> ApiResult<R> {
        let request = build_request(
            configuration,
            Method::GET,
            &[self.kind, "batch", job_id, "export", export_id],
            RequestBody::Empty,
        )?;
        execute(transport, configuration, request).await
    }
}

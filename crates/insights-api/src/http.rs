// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `reqwest` implementation of [`Transport`]

use reqwest::{
    Body, Client,
    multipart::{Form, Part as FormPart},
};
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use crate::{ApiRequest, ApiResponse, ApiResult, Part, RequestBody, Transport};

const USER_AGENT: &str = concat!("opportify-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Sends requests over HTTP with a shared `reqwest` client
///
/// No timeout or retry policy is configured; both are left to `reqwest` defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport; `verbose` turns on reqwest's verbose connection logging
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(verbose: bool) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connection_verbose(verbose)
            .build()?;

        info!(verbose, "created Insights API HTTP transport");

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let builder = self.client.request(method, url).headers(headers);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.body(text),
            RequestBody::Multipart(parts) => builder.multipart(into_form(parts)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "received Insights API response");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

fn into_form(parts: Vec<Part>) -> ApiResult<Form> {
    parts.into_iter().try_fold(Form::new(), |form, part| {
        Ok(match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File {
                name,
                file_name,
                mime,
                length,
                file,
            } => {
                let stream = Body::wrap_stream(ReaderStream::new(file));
                let part = FormPart::stream_with_length(stream, length)
                    .file_name(file_name)
                    .mime_str(&mime)?;
                form.part(name, part)
            }
        })
    })
}

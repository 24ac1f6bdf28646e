// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transport-neutral request and response types

use std::path::Path;

use reqwest::{Method, StatusCode, header::HeaderMap};
use serde::Serialize;
use tokio::fs::File;
use url::Url;

use crate::{ApiError, ApiResult};

/// A fully built request, ready to hand to a [`Transport`](crate::Transport)
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute endpoint URL
    pub url: Url,
    /// Headers, including the API key
    pub headers: HeaderMap,
    /// Request payload
    pub body: RequestBody,
}

/// Request payload
#[derive(Debug)]
pub enum RequestBody {
    /// No body
    Empty,
    /// `application/json`
    Json(serde_json::Value),
    /// `text/plain`, sent verbatim
    Text(String),
    /// `multipart/form-data`
    Multipart(Vec<Part>),
}

impl RequestBody {
    /// Serialize a model into a JSON body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the model cannot be encoded
    pub fn json<T: Serialize>(model: &T) -> ApiResult<Self> {
        serde_json::to_value(model)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Configuration {
                message: format!("failed to encode request body: {e}"),
            })
    }

    /// Media type announced for this body, `None` for an empty body
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Text(_) => Some("text/plain"),
            RequestBody::Multipart(_) => Some("multipart/form-data"),
        }
    }
}

/// One part of a multipart body
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Part {
    /// A plain form field
    Text { name: String, value: String },
    /// An uploaded file, streamed from an open handle
    File {
        name: String,
        file_name: String,
        mime: String,
        length: u64,
        file: File,
    },
}

impl Part {
    /// Create a text part
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Part::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Open `path` and wrap it as a file part
    ///
    /// The handle stays open inside the part and is closed when the part is
    /// dropped, which happens once the request carrying it has been sent or
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the path is not a regular file or
    /// cannot be opened
    pub async fn file(name: impl Into<String>, path: &Path) -> ApiResult<Self> {
        let unreadable = |e: std::io::Error| ApiError::Configuration {
            message: format!("unable to open {}: {e}", path.display()),
        };

        let file = File::open(path).await.map_err(unreadable)?;
        let metadata = file.metadata().await.map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(ApiError::Configuration {
                message: format!("{} is not a regular file", path.display()),
            });
        }

        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        let mime = mime_for(path).to_string();

        Ok(Part::File {
            name: name.into(),
            file_name,
            mime,
            length: metadata.len(),
            file,
        })
    }

    /// Form field name
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Raw response returned by a [`Transport`](crate::Transport)
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl ApiResponse {
    /// Build a response with no headers, mostly useful for test transports
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn body_content_types() {
        assert_eq!(RequestBody::Empty.content_type(), None);
        assert_eq!(
            RequestBody::Json(serde_json::json!({})).content_type(),
            Some("application/json")
        );
        assert_eq!(
            RequestBody::Text(String::new()).content_type(),
            Some("text/plain")
        );
        assert_eq!(
            RequestBody::Multipart(vec![]).content_type(),
            Some("multipart/form-data")
        );
    }

    #[tokio::test]
    async fn file_part_reads_metadata() {
        let mut file = tempfile::Builder::new().suffix(".CSV").tempfile().unwrap();
        write!(file, "a@b.com\nc@d.com").unwrap();

        let part = Part::file("file", file.path()).await.unwrap();
        assert_eq!(part.name(), "file");
        match part {
            Part::File { mime, length, .. } => {
                assert_eq!(mime, "text/csv");
                assert_eq!(length, 15);
            }
            Part::Text { .. } => unreachable!("expected a file part"),
        }
    }

    #[tokio::test]
    async fn file_part_rejects_missing_and_directories() {
        let missing = Part::file("file", Path::new("/non/existent/file.csv")).await;
        assert!(matches!(missing, Err(ApiError::Configuration { .. })));

        let dir = tempfile::tempdir().unwrap();
        let directory = Part::file("file", dir.path()).await;
        assert!(matches!(directory, Err(ApiError::Configuration { .. })));
    }
}

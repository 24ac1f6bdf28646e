// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! In-memory transport doubles for facade tests
//!
//! [`RecordingFactory`] counts how often a facade rebuilds its client and
//! hands out transports that record every request and answer from a queue of
//! canned replies. A queued failure drops the request unsent and returns a
//! transport error, the way a refused connection would.

use std::{
    collections::VecDeque,
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use insights_api::{
    ApiError, ApiRequest, ApiResponse, ApiResult, Part, RequestBody, StatusCode, Transport,
};
use opportify_sdk::{ClientSettings, TransportFactory};
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// A multipart part as it reached the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        content: String,
    },
}

impl RecordedPart {
    pub fn name(&self) -> &str {
        match self {
            RecordedPart::Text { name, .. } | RecordedPart::File { name, .. } => name,
        }
    }
}

/// A request body as it reached the transport
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBody {
    Empty,
    Json(Value),
    Text(String),
    Multipart(Vec<RecordedPart>),
}

/// A request as it reached the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: RecordedBody,
}

#[derive(Debug)]
enum Reply {
    Response(ApiResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct Shared {
    builds: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

/// Factory handing out recording transports that share one log
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    shared: Arc<Shared>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request
    pub fn respond(&self, status: u16, body: &Value) -> &Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.shared
            .replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(ApiResponse::new(status, body.to_string())));
        self
    }

    /// Queue a transport failure for the next request
    pub fn fail(&self, message: &str) -> &Self {
        self.shared
            .replies
            .lock()
            .unwrap()
            .push_back(Reply::Failure(message.to_string()));
        self
    }

    /// Number of transports built so far
    pub fn builds(&self) -> usize {
        self.shared.builds.load(Ordering::SeqCst)
    }

    /// Every request sent so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// The only request sent so far
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl TransportFactory for RecordingFactory {
    type Transport = RecordingTransport;

    fn build(&self, _settings: &ClientSettings) -> ApiResult<RecordingTransport> {
        self.shared.builds.fetch_add(1, Ordering::SeqCst);
        Ok(RecordingTransport {
            shared: Arc::clone(&self.shared),
        })
    }
}

#[derive(Debug)]
pub struct RecordingTransport {
    shared: Arc<Shared>,
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let response = match self.shared.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(response)) => Some(response),
            Some(Reply::Failure(message)) => {
                drop(request);
                return Err(ApiError::Http { message });
            }
            None => None,
        };

        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let api_key = header("x-opportify-token");
        let content_type = header("content-type")
            .or_else(|| request.body.content_type().map(str::to_string));

        let body = match request.body {
            RequestBody::Empty => RecordedBody::Empty,
            RequestBody::Json(value) => RecordedBody::Json(value),
            RequestBody::Text(text) => RecordedBody::Text(text),
            RequestBody::Multipart(parts) => {
                let mut recorded = Vec::with_capacity(parts.len());
                for part in parts {
                    recorded.push(record_part(part).await);
                }
                RecordedBody::Multipart(recorded)
            }
        };

        self.shared.requests.lock().unwrap().push(RecordedRequest {
            method: request.method.to_string(),
            url: request.url.to_string(),
            api_key,
            content_type,
            body,
        });

        Ok(response.unwrap_or_else(|| {
            ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "no canned response")
        }))
    }
}

async fn record_part(part: Part) -> RecordedPart {
    match part {
        Part::Text { name, value } => RecordedPart::Text { name, value },
        Part::File {
            name,
            file_name,
            mime,
            mut file,
            ..
        } => {
            let mut content = String::new();
            file.read_to_string(&mut content).await.unwrap();
            RecordedPart::File {
                name,
                file_name,
                mime,
                content,
            }
        }
    }
}

/// Open descriptors of this process that point at `path`
#[cfg(target_os = "linux")]
pub fn open_handles(path: &Path) -> usize {
    let target = std::fs::canonicalize(path).unwrap();
    std::fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(Result::ok)
        .filter_map(|entry| std::fs::read_link(entry.path()).ok())
        .filter(|link| *link == target)
        .count()
}

/// Settings pointing at a host that is never contacted
pub fn test_settings() -> ClientSettings {
    ClientSettings::new("test-api-key")
}

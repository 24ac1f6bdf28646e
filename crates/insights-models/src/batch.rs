// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Batch submission and batch job models

use serde::{Deserialize, Serialize};

use crate::AdditionalFields;

/// JSON body of `POST /email/batch`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalyzeEmailsRequest {
    /// Addresses to analyze
    pub emails: Vec<String>,
    /// Human readable job name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub enable_ai: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub enable_auto_correction: Option<bool>,
}

/// JSON body of `POST /ip/batch`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalyzeIpsRequest {
    /// Addresses to analyze
    pub ips: Vec<String>,
    /// Human readable job name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub enable_ai: Option<bool>,
}

/// A server side batch job, as returned on submission and when polling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJob {
    /// Opaque job identifier
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub name: Option<String>,
    /// `QUEUED`, `PROCESSING`, `COMPLETED`, `ERROR`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub status_description: Option<String>,
    /// Completion percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<serde_json::Number>,
    /// Result files, available once the job completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_urls: Option<Vec<String>>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub additional: AdditionalFields,
}

impl BatchJob {
    /// Whether the job reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "COMPLETED" | "ERROR")
    }
}

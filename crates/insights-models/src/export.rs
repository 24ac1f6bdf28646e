// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Export request and export job models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AdditionalFields;

/// Body of `POST /{kind}/batch/{jobId}/export`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Output format, lower case (`csv`, `json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<String>,
    /// Field filters applied to the batch results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, serde_json::Value>>,
    /// Dotted column paths to project, e.g. `riskReport.score`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl ExportRequest {
    /// True when no option is set and the request body can be omitted
    pub fn is_empty(&self) -> bool {
        self.export_type.is_none() && self.filters.is_none() && self.columns.is_none()
    }
}

/// An export derived from a batch job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJob {
    /// Opaque export identifier
    pub export_id: String,
    /// Batch job the export belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// `QUEUED`, `PROCESSING`, `COMPLETED`, `FAILED`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub status_description: Option<String>,
    /// Signed download link once the export completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// When the download link stops working
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub additional: AdditionalFields,
}

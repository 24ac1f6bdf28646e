// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Normalization of export options

use insights_models::ExportRequest;
use serde_json::Value;

use crate::{Identifier, Params, SdkError, SdkResult};

/// Turn loosely typed export options into an [`ExportRequest`]
///
/// - `export_type` / `exportType`: trimmed and lowercased, dropped when empty
/// - `filters`: must be an object
/// - `columns`: must be an array of strings
///
/// # Errors
///
/// Returns [`SdkError::InvalidArgument`] when an option has the wrong shape
pub fn normalize_export_request(payload: &Value) -> SdkResult<ExportRequest> {
    let params = Params::new(payload)?;

    let export_type = match params.first(&["export_type", "exportType"]) {
        None => None,
        Some((_, Value::String(export_type))) => {
            Some(export_type.trim().to_ascii_lowercase()).filter(|value| !value.is_empty())
        }
        Some((key, _)) => {
            return Err(SdkError::invalid_argument(format!(
                "{key} must be provided as a string."
            )));
        }
    };

    let filters = match params.get("filters") {
        None => None,
        Some(Value::Object(filters)) => Some(
            filters
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        Some(_) => {
            return Err(SdkError::invalid_argument(
                "Filters must be provided as an object.",
            ));
        }
    };

    let columns = match params.get("columns") {
        None => None,
        Some(Value::Array(columns)) => Some(
            columns
                .iter()
                .map(|column| column.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(columns_error)?,
        ),
        Some(_) => return Err(columns_error()),
    };

    Ok(ExportRequest {
        export_type,
        filters,
        columns,
    })
}

fn columns_error() -> SdkError {
    SdkError::invalid_argument("Columns must be provided as an array of strings.")
}

/// Validate the job id an export is created for
pub(crate) fn export_job_id(job_id: &str) -> SdkResult<Identifier> {
    Identifier::new(job_id)
        .map_err(|_| SdkError::invalid_argument("Job ID cannot be empty when creating an export."))
}

/// Validate the job and export ids of an export status lookup
pub(crate) fn export_ids(job_id: &str, export_id: &str) -> SdkResult<(Identifier, Identifier)> {
    match (Identifier::new(job_id), Identifier::new(export_id)) {
        (Ok(job_id), Ok(export_id)) => Ok((job_id, export_id)),
        _ => Err(SdkError::invalid_argument(
            "Job ID and export ID are required to fetch export status.",
        )),
    }
}

/// Validate the job id of a batch status lookup
pub(crate) fn batch_job_id(job_id: &str) -> SdkResult<Identifier> {
    Identifier::new(job_id)
        .map_err(|_| SdkError::invalid_argument("Job ID is required to fetch batch status."))
}

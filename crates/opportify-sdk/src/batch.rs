// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Batch submission content types and body builders

use std::{fmt, path::Path, str::FromStr};

use insights_api::{Part, RequestBody};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Params, SdkError, SdkResult};

const FILE_REQUIRED: &str = "File parameter is required and must be a valid file path";
const TEXT_REQUIRED: &str = "Text parameter is required for text/plain content type";

/// How a batch submission is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchContentType {
    /// `application/json` with a list of identifiers
    #[default]
    Json,
    /// `multipart/form-data` with an uploaded file
    Multipart,
    /// `text/plain`, one identifier per line
    TextPlain,
}

impl BatchContentType {
    /// Media type string
    pub fn as_str(self) -> &'static str {
        match self {
            BatchContentType::Json => "application/json",
            BatchContentType::Multipart => "multipart/form-data",
            BatchContentType::TextPlain => "text/plain",
        }
    }

    /// Content type used to submit the file at `path`
    ///
    /// `.csv` files (any case) are uploaded as multipart. Anything else is read
    /// and sent as plain text.
    pub fn for_file(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

        if is_csv {
            BatchContentType::Multipart
        } else {
            BatchContentType::TextPlain
        }
    }
}

impl fmt::Display for BatchContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchContentType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "application/json" | "json" => Ok(BatchContentType::Json),
            "multipart/form-data" | "multipart" => Ok(BatchContentType::Multipart),
            "text/plain" | "text-plain" | "text" => Ok(BatchContentType::TextPlain),
            _ => Err(SdkError::invalid_argument(format!(
                "Unsupported content type: {s}"
            ))),
        }
    }
}

/// Flag given as `snake_case` or `camelCase`; the snake name is the form field
pub(crate) type FlagAlias = (&'static str, &'static str);

/// Build a multipart body from `file` plus the optional `name` and flags
///
/// Flags and `name` become parts only when the caller supplied them. Every
/// parameter is validated before the file is opened.
pub(crate) async fn multipart_body(
    params: &Params<'_>,
    flags: &[FlagAlias],
) -> SdkResult<RequestBody> {
    let file = match params.get("file") {
        Some(Value::String(file)) if !file.trim().is_empty() => file,
        _ => return Err(SdkError::invalid_argument(FILE_REQUIRED)),
    };

    let mut fields = Vec::new();
    for &(snake, camel) in flags {
        if let Some(flag) = params.flag(snake, camel)? {
            fields.push(Part::text(snake, flag.to_string()));
        }
    }
    if let Some(name) = params.string("name")? {
        fields.push(Part::text("name", name));
    }

    let upload = Part::file("file", Path::new(file))
        .await
        .map_err(|_| SdkError::invalid_argument(FILE_REQUIRED))?;
    debug!(file = %file, fields = fields.len(), "Prepared multipart batch upload");

    let mut parts = Vec::with_capacity(fields.len() + 1);
    parts.push(upload);
    parts.extend(fields);
    Ok(RequestBody::Multipart(parts))
}

/// Build a plain text body from the `text` parameter
pub(crate) fn text_body(params: &Params<'_>) -> SdkResult<RequestBody> {
    match params.get("text") {
        Some(Value::String(text)) => Ok(RequestBody::Text(text.clone())),
        _ => Err(SdkError::invalid_argument(TEXT_REQUIRED)),
    }
}

/// Parameters for submitting the file at `path`, merged over `options`
///
/// CSV files are referenced by path for a multipart upload; other files are
/// read here so their content can be sent as plain text.
pub(crate) async fn file_params(
    path: &Path,
    options: &Params<'_>,
) -> SdkResult<(BatchContentType, Map<String, Value>)> {
    let content_type = BatchContentType::for_file(path);
    let mut params = options.to_map();

    match content_type {
        BatchContentType::TextPlain => {
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|_| SdkError::invalid_argument("Unable to read file content"))?;
            params.insert("text".to_string(), Value::String(text));
        }
        _ => {
            let path = path
                .to_str()
                .ok_or_else(|| SdkError::invalid_argument(FILE_REQUIRED))?;
            params.insert("file".to_string(), Value::String(path.to_string()));
        }
    }

    Ok((content_type, params))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    const EMAIL_FLAGS: &[FlagAlias] = &[
        ("enable_ai", "enableAi"),
        ("enable_auto_correction", "enableAutoCorrection"),
    ];

    fn invalid_message(error: SdkError) -> String {
        match error {
            SdkError::InvalidArgument { message } => message,
            other => panic!("Expected InvalidArgument, got: {other:?}"),
        }
    }

    #[test]
    fn content_type_parsing() {
        assert_eq!(
            "application/json".parse::<BatchContentType>().unwrap(),
            BatchContentType::Json
        );
        assert_eq!(
            " Multipart/Form-Data ".parse::<BatchContentType>().unwrap(),
            BatchContentType::Multipart
        );
        assert_eq!(
            "text/plain".parse::<BatchContentType>().unwrap(),
            BatchContentType::TextPlain
        );

        let error = "application/xml".parse::<BatchContentType>().unwrap_err();
        assert_eq!(invalid_message(error), "Unsupported content type: application/xml");
    }

    #[test]
    fn file_extension_selects_content_type() {
        assert_eq!(
            BatchContentType::for_file(Path::new("emails.csv")),
            BatchContentType::Multipart
        );
        assert_eq!(
            BatchContentType::for_file(Path::new("EMAILS.CSV")),
            BatchContentType::Multipart
        );
        assert_eq!(
            BatchContentType::for_file(Path::new("emails.txt")),
            BatchContentType::TextPlain
        );
        assert_eq!(
            BatchContentType::for_file(Path::new("emails")),
            BatchContentType::TextPlain
        );
    }

    #[test]
    fn text_body_requires_string() {
        let value = json!({"text": "a@example.com\nb@example.com"});
        let body = text_body(&Params::new(&value).unwrap()).unwrap();
        assert!(matches!(body, RequestBody::Text(text) if text.ends_with("b@example.com")));

        let value = json!({"text": ["a@example.com"]});
        let error = text_body(&Params::new(&value).unwrap()).unwrap_err();
        assert_eq!(invalid_message(error), TEXT_REQUIRED);
    }

    #[tokio::test]
    async fn multipart_requires_existing_file() {
        for value in [
            json!({}),
            json!({"file": ""}),
            json!({"file": 7}),
            json!({"file": "/nonexistent/emails.csv"}),
        ] {
            let error = multipart_body(&Params::new(&value).unwrap(), EMAIL_FLAGS)
                .await
                .unwrap_err();
            assert_eq!(invalid_message(error), FILE_REQUIRED);
        }
    }

    #[tokio::test]
    async fn multipart_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let value = json!({"file": dir.path().to_str().unwrap()});

        let error = multipart_body(&Params::new(&value).unwrap(), EMAIL_FLAGS)
            .await
            .unwrap_err();
        assert_eq!(invalid_message(error), FILE_REQUIRED);
    }

    #[tokio::test]
    async fn multipart_parts_follow_supplied_options() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "a@example.com").unwrap();
        let path = file.path().to_str().unwrap();

        let value = json!({"file": path, "enableAi": "yes", "name": "Weekly"});
        let RequestBody::Multipart(parts) =
            multipart_body(&Params::new(&value).unwrap(), EMAIL_FLAGS)
                .await
                .unwrap()
        else {
            panic!("Expected multipart body");
        };

        let names: Vec<_> = parts.iter().map(Part::name).collect();
        assert_eq!(names, ["file", "enable_ai", "name"]);
        assert!(matches!(&parts[1], Part::Text { value, .. } if value == "true"));
    }

    #[tokio::test]
    async fn invalid_flag_fails_before_upload() {
        let value = json!({"file": "/nonexistent/emails.csv", "enable_ai": "maybe"});
        let error = multipart_body(&Params::new(&value).unwrap(), EMAIL_FLAGS)
            .await
            .unwrap_err();

        assert!(invalid_message(error).contains("enable_ai"));
    }

    #[tokio::test]
    async fn text_files_are_read_into_params() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "a@example.com\nb@example.com").unwrap();

        let options = json!({"name": "From text", "text": "ignored"});
        let (content_type, params) = file_params(file.path(), &Params::new(&options).unwrap())
            .await
            .unwrap();

        assert_eq!(content_type, BatchContentType::TextPlain);
        assert_eq!(params["text"], "a@example.com\nb@example.com");
        assert_eq!(params["name"], "From text");
    }

    #[tokio::test]
    async fn csv_files_are_referenced_by_path() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let (content_type, params) = file_params(file.path(), &Params::new(&Value::Null).unwrap())
            .await
            .unwrap();

        assert_eq!(content_type, BatchContentType::Multipart);
        assert_eq!(params["file"], file.path().to_str().unwrap());
    }

    #[tokio::test]
    async fn unreadable_text_file() {
        let error = file_params(
            Path::new("/nonexistent/emails.txt"),
            &Params::new(&Value::Null).unwrap(),
        )
        .await
        .unwrap_err();

        assert_eq!(invalid_message(error), "Unable to read file content");
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command line definition and translation into facade parameters

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use opportify_sdk::BatchContentType;
use serde_json::{Map, Value, json};

/// Query Opportify Email Insights and IP Insights
#[derive(Debug, Parser)]
#[command(name = "opportify", version)]
pub struct Cli {
    /// Settings file (defaults to ./opportify.toml, .json or .yaml when present)
    #[arg(long, global = true, env = "OPPORTIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// API key; overrides OPPORTIFY_API_KEY and the settings file
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API host, e.g. https://api.opportify.ai
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Path prefix in front of the version segment
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// API version segment
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Log request and response bodies
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Which product to call
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Email Insights
    Email {
        #[command(subcommand)]
        action: Action,
    },
    /// IP Insights
    Ip {
        #[command(subcommand)]
        action: Action,
    },
}

/// Operation to run
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Analyze a single email address or IP address
    Analyze {
        /// Address to analyze
        target: String,
        #[command(flatten)]
        flags: AnalyzeFlags,
    },
    /// Submit a batch given on the command line
    Batch {
        /// Addresses to analyze
        #[arg(required = true)]
        items: Vec<String>,
        /// Send the addresses as a JSON list or as plain text lines
        #[arg(long, value_enum, default_value_t = InlineEncoding::Json)]
        encoding: InlineEncoding,
        #[command(flatten)]
        options: BatchOptions,
    },
    /// Submit a batch from a file (.csv is uploaded, anything else sent as text)
    BatchFile {
        /// File with one address per line
        path: PathBuf,
        #[command(flatten)]
        options: BatchOptions,
    },
    /// Show the status of a batch job
    Status {
        /// Batch job id
        job_id: String,
    },
    /// Request an export of a finished batch job
    Export {
        /// Batch job id
        job_id: String,
        /// Output format, e.g. csv or json
        #[arg(long)]
        export_type: Option<String>,
        /// Column to include (repeatable), e.g. riskReport.score
        #[arg(long = "column")]
        columns: Vec<String>,
        /// Filter as key=value (repeatable)
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Show the status of an export
    ExportStatus {
        /// Batch job id
        job_id: String,
        /// Export id
        export_id: String,
    },
}

/// Feature switches for a single analysis
#[derive(Debug, Args)]
pub struct AnalyzeFlags {
    /// Disable AI-based analysis
    #[arg(long)]
    pub no_ai: bool,
    /// Disable email auto correction
    #[arg(long)]
    pub no_auto_correction: bool,
    /// Disable domain enrichment
    #[arg(long)]
    pub no_domain_enrichment: bool,
}

/// Options shared by batch submissions
#[derive(Debug, Args)]
pub struct BatchOptions {
    /// Batch job name
    #[arg(long)]
    pub name: Option<String>,
    /// Enable or disable AI-based analysis
    #[arg(long)]
    pub enable_ai: Option<bool>,
    /// Enable or disable email auto correction
    #[arg(long)]
    pub enable_auto_correction: Option<bool>,
}

/// Encoding for batches given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InlineEncoding {
    /// `application/json`
    Json,
    /// `text/plain`, one address per line
    Text,
}

impl InlineEncoding {
    /// Batch content type used for this encoding
    pub fn content_type(self) -> BatchContentType {
        match self {
            InlineEncoding::Json => BatchContentType::Json,
            InlineEncoding::Text => BatchContentType::TextPlain,
        }
    }
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

/// Parameters for `analyze`; `key` is `email` or `ip`
pub fn analyze_params(key: &str, target: &str, flags: &AnalyzeFlags) -> Value {
    let mut params = Map::new();
    params.insert(key.to_string(), json!(target));
    if flags.no_ai {
        params.insert("enable_ai".to_string(), json!(false));
    }
    if flags.no_auto_correction {
        params.insert("enable_auto_correction".to_string(), json!(false));
    }
    if flags.no_domain_enrichment {
        params.insert("enable_domain_enrichment".to_string(), json!(false));
    }
    Value::Object(params)
}

/// Batch options as facade parameters
pub fn batch_options(options: &BatchOptions) -> Map<String, Value> {
    let mut params = Map::new();
    if let Some(name) = &options.name {
        params.insert("name".to_string(), json!(name));
    }
    if let Some(enable_ai) = options.enable_ai {
        params.insert("enable_ai".to_string(), json!(enable_ai));
    }
    if let Some(enable_auto_correction) = options.enable_auto_correction {
        params.insert(
            "enable_auto_correction".to_string(),
            json!(enable_auto_correction),
        );
    }
    params
}

/// Parameters for an inline batch; `key` is `emails` or `ips`
pub fn batch_params(
    key: &str,
    items: &[String],
    encoding: InlineEncoding,
    options: &BatchOptions,
) -> Value {
    let mut params = batch_options(options);
    match encoding {
        InlineEncoding::Json => params.insert(key.to_string(), json!(items)),
        InlineEncoding::Text => params.insert("text".to_string(), json!(items.join("\n"))),
    };
    Value::Object(params)
}

/// Export options as facade parameters
pub fn export_params(
    export_type: Option<&str>,
    columns: &[String],
    filters: &[(String, String)],
) -> Value {
    let mut params = Map::new();
    if let Some(export_type) = export_type {
        params.insert("exportType".to_string(), json!(export_type));
    }
    if !columns.is_empty() {
        params.insert("columns".to_string(), json!(columns));
    }
    if !filters.is_empty() {
        let filters: Map<String, Value> = filters
            .iter()
            .map(|(key, value)| (key.clone(), json!(value)))
            .collect();
        params.insert("filters".to_string(), Value::Object(filters));
    }
    Value::Object(params)
}

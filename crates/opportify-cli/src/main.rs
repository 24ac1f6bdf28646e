// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `opportify` command line client
//!
//! Settings come from `opportify.toml` (or the file named by `--config` /
//! `OPPORTIFY_CONFIG`) and `OPPORTIFY_*` environment variables, overridden by
//! command line flags. Results are printed as pretty
//! JSON on stdout; logs go to stderr and are filtered with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use opportify_sdk::{ClientSettings, EmailInsights, IpInsights, SdkResult};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Action, Cli, Command, analyze_params, batch_options, batch_params, export_params};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = settings(&cli)?;
    debug!(?settings, "Loaded settings");

    let result = match cli.command {
        Command::Email { action } => {
            let mut email_insights = EmailInsights::from_settings(settings);
            run_email(&mut email_insights, action).await
        }
        Command::Ip { action } => {
            let mut ip_insights = IpInsights::from_settings(settings);
            run_ip(&mut ip_insights, action).await
        }
    }
    .context("Opportify request failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn settings(cli: &Cli) -> Result<ClientSettings> {
    let mut settings = ClientSettings::load_from(cli.config.as_deref(), cli.api_key.as_deref())
        .context("Failed to load Opportify settings")?;

    if let Some(host) = &cli.host {
        settings.host.clone_from(host);
    }
    if let Some(prefix) = &cli.prefix {
        settings.prefix.clone_from(prefix);
    }
    if let Some(version) = &cli.api_version {
        settings.version.clone_from(version);
    }
    settings.debug_mode |= cli.debug;

    Ok(settings)
}

async fn run_email(email_insights: &mut EmailInsights, action: Action) -> SdkResult<Value> {
    info!(base_url = %email_insights.final_url(), "Calling Email Insights");
    match action {
        Action::Analyze { target, flags } => {
            email_insights
                .analyze(&analyze_params("email", &target, &flags))
                .await
        }
        Action::Batch {
            items,
            encoding,
            options,
        } => {
            email_insights
                .batch_analyze(
                    &batch_params("emails", &items, encoding, &options),
                    encoding.content_type(),
                )
                .await
        }
        Action::BatchFile { path, options } => {
            email_insights
                .batch_analyze_file(&path, &Value::Object(batch_options(&options)))
                .await
        }
        Action::Status { job_id } => email_insights.get_batch_status(&job_id).await,
        Action::Export {
            job_id,
            export_type,
            columns,
            filters,
        } => {
            email_insights
                .create_batch_export(
                    &job_id,
                    &export_params(export_type.as_deref(), &columns, &filters),
                )
                .await
        }
        Action::ExportStatus { job_id, export_id } => {
            email_insights
                .get_batch_export_status(&job_id, &export_id)
                .await
        }
    }
}

async fn run_ip(ip_insights: &mut IpInsights, action: Action) -> SdkResult<Value> {
    info!(base_url = %ip_insights.final_url(), "Calling IP Insights");
    match action {
        Action::Analyze { target, flags } => {
            ip_insights
                .analyze(&analyze_params("ip", &target, &flags))
                .await
        }
        Action::Batch {
            items,
            encoding,
            options,
        } => {
            ip_insights
                .batch_analyze(
                    &batch_params("ips", &items, encoding, &options),
                    encoding.content_type(),
                )
                .await
        }
        Action::BatchFile { path, options } => {
            ip_insights
                .batch_analyze_file(&path, &Value::Object(batch_options(&options)))
                .await
        }
        Action::Status { job_id } => ip_insights.get_batch_status(&job_id).await,
        Action::Export {
            job_id,
            export_type,
            columns,
            filters,
        } => {
            ip_insights
                .create_batch_export(
                    &job_id,
                    &export_params(export_type.as_deref(), &columns, &filters),
                )
                .await
        }
        Action::ExportStatus { job_id, export_id } => {
            ip_insights.get_batch_export_status(&job_id, &export_id).await
        }
    }
}

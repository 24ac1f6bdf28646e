// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Email analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AdditionalFields;

/// Body of `POST /email/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmailRequest {
    /// Address to analyze
    pub email: String,
    /// Whether AI-assisted risk scoring is enabled
    pub enable_ai: bool,
    /// Whether typo correction is attempted before analysis
    pub enable_auto_correction: bool,
    /// Whether the domain is enriched with WHOIS, DNS and TLS data
    pub enable_domain_enrichment: bool,
}

impl AnalyzeEmailRequest {
    /// Create a request with every feature flag enabled
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            enable_ai: true,
            enable_auto_correction: true,
            enable_domain_enrichment: true,
        }
    }
}

/// Result of a single email analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmailResponse {
    /// Analyzed (possibly corrected) address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Mailbox provider, e.g. `Google`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_provider: Option<String>,
    /// `free`, `private`, `disposable`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub is_format_valid: Option<bool>,
    /// Suggested correction, empty when none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_correction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub is_reachable: Option<bool>,
    /// `yes`, `no` or `unknown`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deliverable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub is_mailbox_full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub is_catch_all: Option<bool>,
    /// Mail DNS records of the domain
    #[serde(rename = "emailDNS", skip_serializing_if = "Option::is_none")]
    pub email_dns: Option<EmailDns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub risk_report: Option<EmailRiskReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub address_signals: Option<AddressSignals>,
    /// Domain enrichment, present when enrichment was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainEnrichment>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub additional: AdditionalFields,
}

/// Mail related DNS findings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDns {
    /// MX records as `"<priority> <host>"`
    #[serde(default)]
    pub mx: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub spf_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub dkim_configured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub dmarc_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub mx_relay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub mx_relay_category: Option<String>,
}

/// Risk score and the signals that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRiskReport {
    /// Score between 200 (lowest risk) and 1000 (highest risk)
    pub score: i64,
    /// `lowest`, `low`, `medium`, `high`, `highest`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Signal codes such as `free-provider`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_analysis: Vec<String>,
}

/// Signals derived from the local part of the address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct AddressSignals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_detected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_role_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_no_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_reply_pattern: Option<String>,
}

/// Domain level enrichment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DomainEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_block_listed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mta_sts_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bimi_status: Option<String>,
    #[serde(rename = "hasVMC", skip_serializing_if = "Option::is_none")]
    pub has_vmc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_record_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_record_reverse_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_valid: Option<bool>,
}

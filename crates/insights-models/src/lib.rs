// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request and response models for the Opportify Insights API
//!
//! Every type here mirrors the upstream JSON wire format: field names are
//! camelCase on the wire, optional fields are omitted when absent, and
//! top-level responses keep any field this crate does not know about in an
//! `additional` map so that nothing the service returns is lost when a
//! response is converted back into plain JSON.
//!
//! # Modules
//!
//! - [`email`]: single email analysis
//! - [`ip`]: single IP analysis
//! - [`batch`]: batch submission and batch job status
//! - [`export`]: export requests and export job status
//! - [`error`]: upstream error bodies

pub mod batch;
pub mod email;
pub mod error;
pub mod export;
pub mod ip;

pub use batch::{BatchAnalyzeEmailsRequest, BatchAnalyzeIpsRequest, BatchJob};
pub use email::{
    AddressSignals, AnalyzeEmailRequest, AnalyzeEmailResponse, DomainEnrichment, EmailDns,
    EmailRiskReport,
};
pub use error::{ErrorDetail, UpstreamError};
pub use export::{ExportJob, ExportRequest};
pub use ip::{
    AnalyzeIpRequest, AnalyzeIpResponse, Asn, BlockListed, Contact, Geo, IpRiskReport,
    Organization, TrustedProvider, Whois,
};

/// Extra fields carried through from upstream responses
pub type AdditionalFields = serde_json::Map<String, serde_json::Value>;

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! IP analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AdditionalFields;

/// Body of `POST /ip/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIpRequest {
    /// IPv4 or IPv6 address to analyze
    pub ip: String,
    /// Whether AI-assisted risk scoring is enabled
    pub enable_ai: bool,
}

impl AnalyzeIpRequest {
    /// Create a request with AI scoring enabled
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            enable_ai: true,
        }
    }
}

/// Result of a single IP analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub ip_address: Option<String>,
    /// Numeric form of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_number: Option<serde_json::Number>,
    /// `IPv4` or `IPv6`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub ip_cidr: Option<String>,
    /// `wired`, `mobile`, `hosting`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    /// Reverse DNS host name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_reverse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub whois: Option<Whois>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub trusted_provider: Option<TrustedProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub blocklisted: Option<BlockListed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub risk_report: Option<IpRiskReport>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub additional: AdditionalFields,
}

/// Geolocation of an address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Geo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_extension: Option<String>,
    /// Comma separated language tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_int_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Registration data of the network that owns an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Whois {
    /// Regional internet registry, e.g. `ARIN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<Asn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
}

/// Autonomous system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Asn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_number: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_system_number: Option<String>,
}

/// Organization owning the network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A registry contact handle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Whether the address belongs to a well-known provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TrustedProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_known_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

/// Blocklist presence of an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockListed {
    /// Listed by at least one source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_block_listed: Option<bool>,
    /// Number of blocklists checked that list the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<i64>,
    /// Abuse reports still considered active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_reports: Option<i64>,
    /// Most recent detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_detected: Option<DateTime<Utc>>,
}

/// Risk score for an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpRiskReport {
    /// Score between 200 (lowest risk) and 1000 (highest risk)
    pub score: i64,
    /// `lowest`, `low`, `medium`, `high`, `highest`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_response() -> serde_json::Value {
        json!({
            "ipAddress": "123.45.67.89",
            "ipAddressNumber": 123_456_789,
            "ipType": "IPv4",
            "ipCidr": "123.0.0.0/10",
            "connectionType": "wired",
            "hostReverse": "example.host.provider.net",
            "geo": {
                "continent": "NA",
                "countryCode": "US",
                "countryName": "United States",
                "latitude": 37.7749,
                "longitude": -122.4194,
                "timezone": "America/Los_Angeles"
            },
            "whois": {
                "rir": "ARIN",
                "asn": {"asName": "EXAMPLE-AS"},
                "organization": {"orgId": "ORG-EX1-US", "orgName": "Example Corp."},
                "abuseContact": {"contactId": "EX123-US", "name": "Abuse Contact Example"}
            },
            "trustedProvider": {"isKnownProvider": true},
            "blocklisted": {"isBlockListed": false, "sources": 0, "activeReports": 0},
            "riskReport": {"score": 321, "level": "low"}
        })
    }

    #[test]
    fn analyze_ip_response_parses_nested_sections() {
        let response: AnalyzeIpResponse = serde_json::from_value(sample_response()).unwrap();

        assert_eq!(response.ip_address.as_deref(), Some("123.45.67.89"));
        let geo = response.geo.as_ref().unwrap();
        assert_eq!(geo.country_code.as_deref(), Some("US"));
        assert_eq!(geo.latitude, Some(37.7749));

        let whois = response.whois.as_ref().unwrap();
        assert_eq!(
            whois.asn.as_ref().unwrap().as_name.as_deref(),
            Some("EXAMPLE-AS")
        );
        assert_eq!(
            whois.organization.as_ref().unwrap().org_name.as_deref(),
            Some("Example Corp.")
        );

        let blocklisted = response.blocklisted.as_ref().unwrap();
        assert_eq!(blocklisted.is_block_listed, Some(false));
        assert!(blocklisted.last_detected.is_none());
        assert_eq!(response.risk_report.as_ref().unwrap().score, 321);
    }

    #[test]
    fn analyze_ip_response_serializes_with_upstream_names() {
        let response: AnalyzeIpResponse = serde_json::from_value(sample_response()).unwrap();
        let back = serde_json::to_value(&response).unwrap();

        assert_eq!(back["ipAddressNumber"], 123_456_789);
        assert_eq!(back["geo"]["countryName"], "United States");
        assert_eq!(back["whois"]["abuseContact"]["contactId"], "EX123-US");
        assert_eq!(back["trustedProvider"]["isKnownProvider"], true);
        assert!(back["blocklisted"].get("lastDetected").is_none());
    }

    #[test]
    fn request_defaults_enable_ai() {
        let value = serde_json::to_value(AnalyzeIpRequest::new("1.1.1.1")).unwrap();
        assert_eq!(value, json!({"ip": "1.1.1.1", "enableAi": true}));
    }
}

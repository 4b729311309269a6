//! Check result types.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::dns::MxRecord;
use crate::extract::{DkimKeyType, DmarcTags, SpfPolicy};
use crate::provider::ProviderMatch;

/// Outcome of one protocol check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    /// The check needs input that was not supplied
    Skipped,
}

/// Result of one checker: a status, the protocol payload, and the issues
/// that led to the status (empty when none).
///
/// The payload is flattened on the wire, so a serialized SPF result reads
/// `{"status": "WARN", "record": ..., "multiple": ..., "issues": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult<T> {
    pub status: CheckStatus,
    #[serde(flatten)]
    pub details: T,
    pub issues: Vec<String>,
}

impl<T> CheckResult<T> {
    pub fn new(status: CheckStatus, details: T, issues: Vec<String>) -> Self {
        Self {
            status,
            details,
            issues,
        }
    }

    /// `FAIL` with a single issue.
    pub fn failed(details: T, issue: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, details, vec![issue.into()])
    }

    /// `PASS` when no issue was raised, `WARN` otherwise.
    pub fn pass_unless(details: T, issues: Vec<String>) -> Self {
        let status = if issues.is_empty() {
            CheckStatus::Pass
        } else {
            CheckStatus::Warn
        };
        Self::new(status, details, issues)
    }
}

/// MX payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MxDetails {
    /// Sorted ascending by priority; ties keep resolver order
    pub records: Vec<MxRecord>,
    pub provider: ProviderMatch,
    /// The domain publishes a null MX (RFC 7505) and accepts no mail
    pub null_mx: bool,
}

/// SPF payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpfDetails {
    pub record: Option<String>,
    pub multiple: bool,
    pub lookup_count: usize,
    pub policy: SpfPolicy,
}

impl Default for SpfDetails {
    fn default() -> Self {
        Self {
            record: None,
            multiple: false,
            lookup_count: 0,
            policy: SpfPolicy::Unknown,
        }
    }
}

/// A DKIM key found on a probed selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DkimSelector {
    pub selector: String,
    /// Queried name, `{selector}._domainkey.{domain}`
    pub host: String,
    pub key_type: DkimKeyType,
    pub key_size: String,
}

/// DKIM payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DkimDetails {
    /// Matches in probe order
    pub selectors: Vec<DkimSelector>,
}

/// DMARC payload. Tags hold their defaults when no record was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DmarcDetails {
    pub record: Option<String>,
    #[serde(flatten)]
    pub tags: DmarcTags,
}

/// PTR / FC-rDNS payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PtrDetails {
    /// IP as supplied by the caller
    pub ip: Option<String>,
    /// First PTR hostname
    pub hostname: Option<String>,
    /// The PTR hostname resolves back to `ip`
    pub fc_rdns: bool,
}

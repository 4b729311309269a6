//! DMARC record extraction.

use serde::Serialize;

use super::tags::parse_tags;
use crate::config::{DMARC_DEFAULT_PCT, DMARC_PREFIX};

/// Requested handling of mail failing DMARC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DmarcPolicy {
    /// Monitoring only
    #[default]
    None,
    Quarantine,
    Reject,
}

impl DmarcPolicy {
    /// Parses a policy value; unknown values are `None`.
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Some(DmarcPolicy::None),
            "quarantine" => Some(DmarcPolicy::Quarantine),
            "reject" => Some(DmarcPolicy::Reject),
            _ => None,
        }
    }
}

/// Identifier alignment mode (`adkim` / `aspf`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Alignment {
    /// Organizational domains must match
    #[default]
    #[serde(rename = "r")]
    Relaxed,
    /// Exact domain match
    #[serde(rename = "s")]
    Strict,
}

impl Alignment {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "r" | "R" => Some(Alignment::Relaxed),
            "s" | "S" => Some(Alignment::Strict),
            _ => None,
        }
    }
}

/// Tags extracted from a DMARC record, with RFC 7489 defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmarcTags {
    pub policy: DmarcPolicy,
    pub subdomain_policy: Option<DmarcPolicy>,
    /// Share of failing mail the policy applies to, 0-100
    pub pct: u8,
    /// Aggregate report URIs
    pub rua: Option<String>,
    /// Forensic report URIs
    pub ruf: Option<String>,
    pub adkim: Alignment,
    pub aspf: Alignment,
}

impl Default for DmarcTags {
    fn default() -> Self {
        Self {
            policy: DmarcPolicy::None,
            subdomain_policy: None,
            pct: DMARC_DEFAULT_PCT,
            rua: None,
            ruf: None,
            adkim: Alignment::Relaxed,
            aspf: Alignment::Relaxed,
        }
    }
}

/// Extracts the DMARC record from the TXT records at `_dmarc.<domain>`.
///
/// DMARC records start with "v=DMARC1", matched case-insensitively.
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn find_dmarc_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| {
            txt.trim()
                .get(..DMARC_PREFIX.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DMARC_PREFIX))
        })
        .map(|s| s.trim().to_string())
}

/// Parses a DMARC record's tags.
///
/// Missing or invalid values fall back to the defaults: `p=none`, `pct=100`,
/// relaxed alignment. An out-of-range `pct` is clamped to 100.
pub fn parse_dmarc(record: &str) -> DmarcTags {
    let tags = parse_tags(record);
    let defaults = DmarcTags::default();

    DmarcTags {
        policy: tags
            .get("p")
            .and_then(DmarcPolicy::parse)
            .unwrap_or(defaults.policy),
        subdomain_policy: tags.get("sp").and_then(DmarcPolicy::parse),
        pct: tags
            .get("pct")
            .and_then(|pct| pct.parse::<u32>().ok())
            .map(|pct| pct.min(100) as u8)
            .unwrap_or(defaults.pct),
        rua: tags.get_non_empty("rua").map(str::to_string),
        ruf: tags.get_non_empty("ruf").map(str::to_string),
        adkim: tags
            .get("adkim")
            .and_then(Alignment::parse)
            .unwrap_or(defaults.adkim),
        aspf: tags
            .get("aspf")
            .and_then(Alignment::parse)
            .unwrap_or(defaults.aspf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dmarc_record_skips_other_txt() {
        let records = vec![
            "some-verification=xyz".to_string(),
            " v=DMARC1; p=reject ".to_string(),
        ];
        assert_eq!(find_dmarc_record(&records).as_deref(), Some("v=DMARC1; p=reject"));
        assert!(find_dmarc_record(&["v=spf1 -all".to_string()]).is_none());
    }

    #[test]
    fn test_parse_dmarc_full_record() {
        let tags = parse_dmarc(
            "v=DMARC1; p=reject; sp=quarantine; pct=50; rua=mailto:agg@example.com; \
             ruf=mailto:forensic@example.com; adkim=s; aspf=s",
        );
        assert_eq!(tags.policy, DmarcPolicy::Reject);
        assert_eq!(tags.subdomain_policy, Some(DmarcPolicy::Quarantine));
        assert_eq!(tags.pct, 50);
        assert_eq!(tags.rua.as_deref(), Some("mailto:agg@example.com"));
        assert_eq!(tags.ruf.as_deref(), Some("mailto:forensic@example.com"));
        assert_eq!(tags.adkim, Alignment::Strict);
        assert_eq!(tags.aspf, Alignment::Strict);
    }

    #[test]
    fn test_parse_dmarc_defaults() {
        let tags = parse_dmarc("v=DMARC1");
        assert_eq!(tags, DmarcTags::default());
        assert_eq!(tags.policy, DmarcPolicy::None);
        assert_eq!(tags.pct, 100);
    }

    #[test]
    fn test_parse_dmarc_invalid_values_fall_back() {
        let tags = parse_dmarc("v=DMARC1; p=block; pct=abc; adkim=x; sp=maybe");
        assert_eq!(tags.policy, DmarcPolicy::None);
        assert_eq!(tags.pct, 100);
        assert_eq!(tags.adkim, Alignment::Relaxed);
        assert_eq!(tags.subdomain_policy, None);
    }

    #[test]
    fn test_parse_dmarc_pct_clamped() {
        assert_eq!(parse_dmarc("v=DMARC1; p=none; pct=250").pct, 100);
        assert_eq!(parse_dmarc("v=DMARC1; p=none; pct=0").pct, 0);
    }

    #[test]
    fn test_parse_dmarc_policy_case_insensitive() {
        assert_eq!(parse_dmarc("v=DMARC1; p=Quarantine").policy, DmarcPolicy::Quarantine);
    }

    #[test]
    fn test_find_dmarc_record_version_is_case_insensitive() {
        let records = vec![
            "google-site-verification=abc".to_string(),
            "v=dmarc1; p=quarantine".to_string(),
        ];
        assert_eq!(
            find_dmarc_record(&records).as_deref(),
            Some("v=dmarc1; p=quarantine")
        );
        assert_eq!(
            parse_dmarc("v=dmarc1; p=quarantine").policy,
            DmarcPolicy::Quarantine
        );
    }
}

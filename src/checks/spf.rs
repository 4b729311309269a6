//! SPF check.

use super::types::{CheckResult, CheckStatus, SpfDetails};
use crate::config::{
    ISSUE_MULTIPLE_SPF, ISSUE_NO_SPF, ISSUE_SPF_NEUTRAL, ISSUE_SPF_PASS, SPF_LOOKUP_LIMIT,
};
use crate::dns::{join_txt_segments, DnsCapability};
use crate::extract::{all_policy, count_lookups, find_spf_record, SpfFinding, SpfPolicy};

/// Finds and grades the domain's SPF record.
///
/// `FAIL` when no TXT record starts with `v=spf1` (a resolution error adds
/// its message as a second issue).
pub async fn check_spf(dns: &dyn DnsCapability, domain: &str) -> CheckResult<SpfDetails> {
    let txt_records = match dns.resolve_txt(domain).await {
        Ok(records) => join_txt_segments(records),
        Err(e) => {
            return CheckResult::new(
                CheckStatus::Fail,
                SpfDetails::default(),
                vec![ISSUE_NO_SPF.to_string(), e.message],
            )
        }
    };

    match find_spf_record(&txt_records) {
        Some(finding) => {
            log::debug!("{domain}: SPF record {:?}", finding.record);
            assess_spf(spf_details(finding))
        }
        None => CheckResult::failed(SpfDetails::default(), ISSUE_NO_SPF),
    }
}

/// Derives the SPF payload from the honored record.
pub fn spf_details(finding: SpfFinding) -> SpfDetails {
    SpfDetails {
        lookup_count: count_lookups(&finding.record),
        policy: all_policy(&finding.record),
        multiple: finding.multiple,
        record: Some(finding.record),
    }
}

/// `WARN` for multiple records, too many lookups, or a permissive policy;
/// each condition adds its own issue.
pub fn assess_spf(details: SpfDetails) -> CheckResult<SpfDetails> {
    let mut issues = Vec::new();
    if details.multiple {
        issues.push(ISSUE_MULTIPLE_SPF.to_string());
    }
    if details.lookup_count > SPF_LOOKUP_LIMIT {
        issues.push(format!(
            "SPF record needs {} DNS lookups (limit is {})",
            details.lookup_count, SPF_LOOKUP_LIMIT
        ));
    }
    match details.policy {
        SpfPolicy::Neutral => issues.push(ISSUE_SPF_NEUTRAL.to_string()),
        SpfPolicy::Pass => issues.push(ISSUE_SPF_PASS.to_string()),
        _ => {}
    }
    CheckResult::pass_unless(details, issues)
}

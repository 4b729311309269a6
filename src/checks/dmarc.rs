//! DMARC check.

use super::types::{CheckResult, DmarcDetails};
use crate::config::{ISSUE_DMARC_NONE, ISSUE_DMARC_NO_RUA, ISSUE_NO_DMARC};
use crate::dns::{join_txt_segments, DnsCapability};
use crate::extract::{find_dmarc_record, parse_dmarc, DmarcPolicy};

/// Reads and grades the DMARC record at `_dmarc.<domain>`.
pub async fn check_dmarc(dns: &dyn DnsCapability, domain: &str) -> CheckResult<DmarcDetails> {
    let name = format!("_dmarc.{domain}");
    let record = match dns.resolve_txt(&name).await {
        Ok(records) => find_dmarc_record(&join_txt_segments(records)),
        Err(e) => {
            log::debug!("{name}: {e}");
            None
        }
    };

    match record {
        Some(record) => {
            let tags = parse_dmarc(&record);
            assess_dmarc(DmarcDetails {
                record: Some(record),
                tags,
            })
        }
        None => CheckResult::failed(DmarcDetails::default(), ISSUE_NO_DMARC),
    }
}

/// `WARN` for a monitoring-only policy and for a missing `rua`, one issue each.
pub fn assess_dmarc(details: DmarcDetails) -> CheckResult<DmarcDetails> {
    let mut issues = Vec::new();
    if details.tags.policy == DmarcPolicy::None {
        issues.push(ISSUE_DMARC_NONE.to_string());
    }
    if details.tags.rua.is_none() {
        issues.push(ISSUE_DMARC_NO_RUA.to_string());
    }
    CheckResult::pass_unless(details, issues)
}

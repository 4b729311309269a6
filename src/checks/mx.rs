//! MX check.

use super::types::{CheckResult, MxDetails};
use crate::config::{ISSUE_NO_MX, ISSUE_NULL_MX};
use crate::dns::DnsCapability;
use crate::provider::ProviderDetector;

/// Looks up the domain's mail exchangers and the provider behind them.
///
/// Records are sorted by priority with a stable sort, so equal priorities keep
/// the resolver's order. A resolution error is a `FAIL` carrying the error text.
pub async fn check_mx(
    dns: &dyn DnsCapability,
    detector: &ProviderDetector,
    domain: &str,
) -> CheckResult<MxDetails> {
    let mut records = match dns.resolve_mx(domain).await {
        Ok(records) => records,
        Err(e) => return CheckResult::failed(MxDetails::default(), e.message),
    };
    records.sort_by_key(|record| record.priority);
    log::debug!("{domain}: {} MX record(s)", records.len());

    // A null MX has the root as its exchange and names no host
    let before = records.len();
    records.retain(|record| !record.exchange.trim_end_matches('.').is_empty());
    let null_mx = records.len() != before;

    let provider = detector.detect(records.iter().map(|record| record.exchange.as_str()));
    assess_mx(MxDetails {
        records,
        provider,
        null_mx,
    })
}

/// `WARN` for a null MX or an empty (but successful) answer, `PASS` otherwise.
///
/// Exchanges spread over several providers are not flagged: split delivery
/// (gateway plus mailbox host, or a backup MX elsewhere) is common and sound.
pub fn assess_mx(details: MxDetails) -> CheckResult<MxDetails> {
    let mut issues = Vec::new();
    if details.null_mx {
        issues.push(ISSUE_NULL_MX.to_string());
    } else if details.records.is_empty() {
        issues.push(ISSUE_NO_MX.to_string());
    }
    CheckResult::pass_unless(details, issues)
}

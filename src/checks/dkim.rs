//! DKIM selector discovery.
//!
//! DKIM keys live at `{selector}._domainkey.{domain}` and nothing in DNS lists
//! the selectors a domain uses, so the check probes a fixed list of common
//! labels. Probes run concurrently and a missing selector is never an error.

use futures::future::join_all;

use super::types::{CheckResult, DkimDetails, DkimSelector};
use crate::config::ISSUE_NO_DKIM;
use crate::dns::{join_txt_segments, DnsCapability};
use crate::error_handling::ProbeMiss;
use crate::extract::parse_dkim_key;

/// Name queried for `selector`.
pub fn selector_host(selector: &str, domain: &str) -> String {
    format!("{selector}._domainkey.{domain}")
}

/// Probes one selector.
///
/// The first TXT record carrying a `p=` tag is taken as the key record.
pub async fn probe_selector(
    dns: &dyn DnsCapability,
    domain: &str,
    selector: &str,
) -> Result<DkimSelector, ProbeMiss> {
    let host = selector_host(selector, domain);
    let records = dns
        .resolve_txt(&host)
        .await
        .map_err(|_| ProbeMiss::NotPublished)?;

    let key = join_txt_segments(records)
        .iter()
        .find_map(|record| parse_dkim_key(record))
        .ok_or(ProbeMiss::NoPublicKey)?;

    Ok(DkimSelector {
        selector: selector.to_string(),
        host,
        key_type: key.key_type,
        key_size: key.key_size,
    })
}

/// Probes every selector concurrently and keeps the hits in probe order.
pub async fn check_dkim(
    dns: &dyn DnsCapability,
    selectors: &[String],
    domain: &str,
) -> CheckResult<DkimDetails> {
    let probes = selectors
        .iter()
        .map(|selector| probe_selector(dns, domain, selector));

    // join_all yields results in input order regardless of completion order
    let found = join_all(probes)
        .await
        .into_iter()
        .zip(selectors)
        .filter_map(|(outcome, selector)| match outcome {
            Ok(found) => Some(found),
            Err(miss) => {
                log::debug!("{domain}: DKIM selector '{selector}' skipped ({miss})");
                None
            }
        })
        .collect();

    assess_dkim(DkimDetails { selectors: found })
}

/// `PASS` if any selector matched, `WARN` otherwise.
pub fn assess_dkim(details: DkimDetails) -> CheckResult<DkimDetails> {
    let mut issues = Vec::new();
    if details.selectors.is_empty() {
        issues.push(ISSUE_NO_DKIM.to_string());
    }
    CheckResult::pass_unless(details, issues)
}

//! PTR / forward-confirmed reverse DNS check.

use std::net::IpAddr;

use super::types::{CheckResult, CheckStatus, PtrDetails};
use crate::config::ISSUE_NO_PTR;
use crate::dns::DnsCapability;

/// Checks that `ip` has a PTR hostname which resolves back to `ip`.
///
/// Without an IP the check is `SKIPPED`: the sending IP is caller context
/// that cannot be derived from the domain. Any resolution error at either
/// hop is a `FAIL` carrying the resolver's message.
pub async fn check_ptr(dns: &dyn DnsCapability, ip: Option<&str>) -> CheckResult<PtrDetails> {
    let Some(raw_ip) = ip.map(str::trim) else {
        return CheckResult::new(CheckStatus::Skipped, PtrDetails::default(), Vec::new());
    };

    let mut details = PtrDetails {
        ip: Some(raw_ip.to_string()),
        ..Default::default()
    };

    let addr: IpAddr = match raw_ip.parse() {
        Ok(addr) => addr,
        Err(e) => {
            return CheckResult::failed(details, format!("Invalid IP address '{raw_ip}': {e}"))
        }
    };

    let hostname = match dns.reverse(addr).await {
        Ok(hostnames) => match hostnames.into_iter().next() {
            Some(hostname) => hostname,
            None => return CheckResult::failed(details, format!("{ISSUE_NO_PTR} for {addr}")),
        },
        Err(e) => return CheckResult::failed(details, e.message),
    };
    details.hostname = Some(hostname.clone());

    let forward = match dns.resolve_ip(&hostname).await {
        Ok(addrs) => addrs,
        Err(e) => return CheckResult::failed(details, e.message),
    };
    details.fc_rdns = forward.contains(&addr);
    log::debug!("{addr} -> {hostname} -> {forward:?}");

    assess_ptr(details)
}

/// `PASS` iff the reverse name is forward-confirmed, `FAIL` otherwise.
pub fn assess_ptr(details: PtrDetails) -> CheckResult<PtrDetails> {
    if details.fc_rdns {
        return CheckResult::new(CheckStatus::Pass, details, Vec::new());
    }
    let issue = format!(
        "PTR hostname {} does not resolve back to {}",
        details.hostname.as_deref().unwrap_or("(none)"),
        details.ip.as_deref().unwrap_or("(none)")
    );
    CheckResult::failed(details, issue)
}

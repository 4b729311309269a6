//! `DnsCapability` backed by the system resolver.
//!
//! This module wraps `trust-dns-resolver` and converts its answers into the
//! capability's typed records. Resolver errors are flattened into
//! `ResolutionError` with the resolver's own message.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::TokioAsyncResolver;

use super::records::{DnsCapability, MxRecord};
use crate::error_handling::ResolutionError;

/// Production DNS capability.
///
/// Cheap to clone; all clones share one resolver (and its cache).
#[derive(Clone)]
pub struct SystemResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Splits a lookup outcome into an answer, NODATA, or a failure.
///
/// trust-dns reports "the name exists but has no records of this type" as
/// `NoRecordsFound` with `NOERROR`. That is an empty answer (`Ok(None)`), not a
/// resolution failure; NXDOMAIN, SERVFAIL and transport errors stay errors.
fn answer<L>(
    kind: &str,
    name: &str,
    result: Result<L, ResolveError>,
) -> Result<Option<L>, ResolutionError> {
    match result {
        Ok(lookup) => Ok(Some(lookup)),
        Err(e) if is_nodata(&e) => {
            log::debug!("{name} has no {kind} records (NODATA)");
            Ok(None)
        }
        Err(e) => Err(resolution_error(kind, name, e)),
    }
}

fn is_nodata(e: &ResolveError) -> bool {
    matches!(
        e.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError,
            ..
        }
    )
}

/// Converts a resolver error, logging real failures louder than missing names.
fn resolution_error(kind: &str, name: &str, e: ResolveError) -> ResolutionError {
    match e.kind() {
        // NXDOMAIN is expected for most DKIM probes
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            log::debug!("No {kind} records for {name}: {e}");
            ResolutionError::new(format!("{kind} lookup for {name} failed: {response_code:?}"))
        }
        _ => {
            let error_msg = e.to_string();
            if error_msg.contains("timeout") || error_msg.contains("timed out") {
                log::warn!("{kind} lookup timed out for {name}: {e}");
            } else {
                log::warn!("Failed to lookup {kind} records for {name}: {e}");
            }
            ResolutionError::new(error_msg)
        }
    }
}

/// Strips the trailing root label dot from a presentation-format name.
fn trim_root(name: String) -> String {
    match name.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

#[async_trait]
impl DnsCapability for SystemResolver {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxRecord>, ResolutionError> {
        let Some(lookup) = answer("MX", name, self.resolver.mx_lookup(name).await)? else {
            return Ok(Vec::new());
        };
        // A null MX ("0 .") comes out with an empty exchange
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(trim_root(mx.exchange().to_utf8()), mx.preference()))
            .collect())
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<Vec<String>>, ResolutionError> {
        let Some(lookup) = answer("TXT", name, self.resolver.txt_lookup(name).await)? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .map(|txt| {
                // TXT records can be split across multiple byte slices
                txt.txt_data()
                    .iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect()
            })
            .collect())
    }

    async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolutionError> {
        let shown = ip.to_string();
        let Some(lookup) = answer("PTR", &shown, self.resolver.reverse_lookup(ip).await)? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .map(|name| trim_root(name.to_utf8()))
            .collect())
    }

    async fn resolve_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolutionError> {
        let Some(lookup) = answer("A/AAAA", host, self.resolver.lookup_ip(host).await)? else {
            return Ok(Vec::new());
        };
        Ok(lookup.iter().collect())
    }
}

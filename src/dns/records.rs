//! The DNS capability consumed by the checkers.
//!
//! Checkers never talk to a resolver directly: they receive a `DnsCapability`
//! and only see typed records or a `ResolutionError`.

use std::net::IpAddr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error_handling::ResolutionError;

/// A mail exchanger as returned by an MX query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    /// Exchange hostname, without the trailing root dot
    pub exchange: String,
    /// MX preference (lower = higher priority)
    pub priority: u16,
}

impl MxRecord {
    pub fn new(exchange: impl Into<String>, priority: u16) -> Self {
        Self {
            exchange: exchange.into(),
            priority,
        }
    }
}

/// Resolves the record kinds the analysis needs.
///
/// Every operation fails with `ResolutionError` on NXDOMAIN, an empty answer
/// the resolver reports as an error, a timeout, or a transport failure.
/// Implementations must not retry on behalf of the caller.
#[async_trait]
pub trait DnsCapability: Send + Sync {
    /// MX records for `name`, in resolver order.
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxRecord>, ResolutionError>;

    /// TXT records for `name`. Each record is the list of its character-string
    /// segments, to be concatenated by the caller.
    async fn resolve_txt(&self, name: &str) -> Result<Vec<Vec<String>>, ResolutionError>;

    /// PTR hostnames for `ip`.
    async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolutionError>;

    /// Address records (A and AAAA) for `host`.
    async fn resolve_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolutionError>;
}

/// Joins the character-string segments of each TXT record.
///
/// Long TXT values (DKIM keys in particular) are split into 255-byte segments
/// on the wire and only make sense once concatenated.
pub fn join_txt_segments(records: Vec<Vec<String>>) -> Vec<String> {
    records.into_iter().map(|segments| segments.concat()).collect()
}

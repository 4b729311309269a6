//! In-memory `DnsCapability`.
//!
//! Answers come from tables filled in advance: either records captured from a
//! real zone (`CapturedRecords`, loaded by the CLI's `--records`) or tables
//! built in code. Analysis then runs without touching the network.
//! Any name without an entry fails like NXDOMAIN.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::records::{DnsCapability, MxRecord};
use crate::error_handling::{InitializationError, ResolutionError};

type Answer<T> = Result<T, String>;

/// DNS answers captured from real zones, keyed by queried name.
///
/// ```json
/// {
///   "mx": {"example.com": [{"exchange": "aspmx.l.google.com", "priority": 1}]},
///   "txt": {"example.com": [["v=spf1 include:_spf.google.com -all"]]},
///   "ptr": {"198.51.100.25": ["mail.example.com"]},
///   "addrs": {"mail.example.com": ["198.51.100.25"]}
/// }
/// ```
///
/// Each TXT record is a list of its character-string segments. Every section
/// is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CapturedRecords {
    pub mx: HashMap<String, Vec<MxRecord>>,
    pub txt: HashMap<String, Vec<Vec<String>>>,
    /// Keyed by IP address in text form
    pub ptr: HashMap<String, Vec<String>>,
    pub addrs: HashMap<String, Vec<IpAddr>>,
}

/// Static DNS tables keyed by lower-cased name.
#[derive(Debug, Default)]
pub struct StaticDns {
    mx: HashMap<String, Answer<Vec<MxRecord>>>,
    txt: HashMap<String, Answer<Vec<Vec<String>>>>,
    ptr: HashMap<IpAddr, Answer<Vec<String>>>,
    addrs: HashMap<String, Answer<Vec<IpAddr>>>,
    queries: AtomicUsize,
    /// Latency added to every answer
    delay: Option<Duration>,
}

fn key(name: &str) -> String {
    name.trim_end_matches('.').to_lowercase()
}

fn lookup<K, T>(table: &HashMap<K, Answer<T>>, k: &K, shown: &str) -> Result<T, ResolutionError>
where
    K: std::hash::Hash + Eq,
    T: Clone,
{
    match table.get(k) {
        Some(Ok(answer)) => Ok(answer.clone()),
        Some(Err(message)) => Err(ResolutionError::new(message.clone())),
        None => Err(ResolutionError::new(format!("NXDOMAIN: {shown}"))),
    }
}

impl StaticDns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tables from captured records.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::RecordsError` if a PTR key is not an IP address.
    pub fn from_captured(records: CapturedRecords) -> Result<Self, InitializationError> {
        let mut dns = Self::new();
        for (name, answer) in records.mx {
            dns.mx.insert(key(&name), Ok(answer));
        }
        for (name, answer) in records.txt {
            dns.txt.insert(key(&name), Ok(answer));
        }
        for (ip, answer) in records.ptr {
            let addr: IpAddr = ip.trim().parse().map_err(|e| {
                InitializationError::RecordsError(format!("Invalid PTR address '{ip}': {e}"))
            })?;
            dns.ptr.insert(addr, Ok(answer));
        }
        for (name, answer) in records.addrs {
            dns.addrs.insert(key(&name), Ok(answer));
        }
        Ok(dns)
    }

    /// MX answer for `name`, given as `(exchange, priority)` in resolver order.
    pub fn with_mx(mut self, name: &str, records: &[(&str, u16)]) -> Self {
        let records = records
            .iter()
            .map(|(exchange, priority)| MxRecord::new(*exchange, *priority))
            .collect();
        self.mx.insert(key(name), Ok(records));
        self
    }

    /// TXT answer for `name`; each value is a single-segment record.
    pub fn with_txt(self, name: &str, values: &[&str]) -> Self {
        let records = values.iter().map(|v| vec![v.to_string()]).collect();
        self.with_txt_segments(name, records)
    }

    /// TXT answer for `name` with explicit character-string segments.
    pub fn with_txt_segments(mut self, name: &str, records: Vec<Vec<String>>) -> Self {
        self.txt.insert(key(name), Ok(records));
        self
    }

    /// PTR answer for `ip`.
    pub fn with_ptr(mut self, ip: IpAddr, hostnames: &[&str]) -> Self {
        let hostnames = hostnames.iter().map(|h| h.to_string()).collect();
        self.ptr.insert(ip, Ok(hostnames));
        self
    }

    /// Address answer for `host`.
    pub fn with_addrs(mut self, host: &str, addrs: &[IpAddr]) -> Self {
        self.addrs.insert(key(host), Ok(addrs.to_vec()));
        self
    }

    /// Makes MX queries for `name` fail with `message`.
    pub fn fail_mx(mut self, name: &str, message: &str) -> Self {
        self.mx.insert(key(name), Err(message.to_string()));
        self
    }

    /// Makes TXT queries for `name` fail with `message`.
    pub fn fail_txt(mut self, name: &str, message: &str) -> Self {
        self.txt.insert(key(name), Err(message.to_string()));
        self
    }

    /// Makes PTR queries for `ip` fail with `message`.
    pub fn fail_ptr(mut self, ip: IpAddr, message: &str) -> Self {
        self.ptr.insert(ip, Err(message.to_string()));
        self
    }

    /// Delays every answer by `delay`, like a slow nameserver.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of queries answered (successfully or not) so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn answer(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DnsCapability for StaticDns {
    async fn resolve_mx(&self, name: &str) -> Result<Vec<MxRecord>, ResolutionError> {
        self.answer().await;
        lookup(&self.mx, &key(name), name)
    }

    async fn resolve_txt(&self, name: &str) -> Result<Vec<Vec<String>>, ResolutionError> {
        self.answer().await;
        lookup(&self.txt, &key(name), name)
    }

    async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolutionError> {
        self.answer().await;
        lookup(&self.ptr, &ip, &ip.to_string())
    }

    async fn resolve_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolutionError> {
        self.answer().await;
        lookup(&self.addrs, &key(host), host)
    }
}

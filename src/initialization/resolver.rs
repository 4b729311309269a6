//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::SystemResolver;

/// Builds the resolver options used for every analysis.
///
/// `ndots = 0` keeps the resolver from appending search domains, so a query
/// for `_dmarc.example.com` is never retried as `_dmarc.example.com.corp.lan`.
pub fn resolver_opts() -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;
    opts
}

/// Initializes the DNS capability used by the analyzer.
///
/// Creates a resolver using the default upstream configuration (Google DNS)
/// with short timeouts so a slow nameserver turns into a `FAIL` quickly
/// instead of hanging the request. The engine adds no timeout of its own.
///
/// # Returns
///
/// A `SystemResolver` sharing one `TokioAsyncResolver` and its cache.
pub fn init_resolver() -> SystemResolver {
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), resolver_opts());
    SystemResolver::new(Arc::new(resolver))
}

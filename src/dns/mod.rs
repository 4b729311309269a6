//! DNS resolution capability.
//!
//! This module provides the `DnsCapability` trait the checkers consume and
//! two implementations:
//! - `SystemResolver`: async lookups through `trust-dns-resolver`
//! - `StaticDns`: answers from in-memory tables, e.g. captured records for
//!   offline analysis
//!
//! Record kinds: MX, TXT (segmented), PTR, and A/AAAA.

mod fixture;
mod records;
mod resolution;

// Re-export public API
pub use fixture::{CapturedRecords, StaticDns};
pub use records::{join_txt_segments, DnsCapability, MxRecord};
pub use resolution::SystemResolver;

#[cfg(test)]
mod tests;

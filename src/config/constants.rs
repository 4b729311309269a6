//! Configuration constants.
//!
//! This module defines the operational parameters and the policy constants
//! (issue texts, score deductions, thresholds) used by the checkers and the scorer.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides a buffer while failing fast.
/// The engine imposes no timeout of its own; this is the only latency bound.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts per DNS query made by the resolver itself (the engine never re-queries)
pub const DNS_ATTEMPTS: usize = 2;

/// Default port for the HTTP adapter
pub const DEFAULT_PORT: u16 = 8080;

// DKIM discovery
/// Selector labels probed at `{selector}._domainkey.{domain}`, in probe order.
///
/// DKIM has no well-known location, so discovery is limited to labels used by
/// the major providers and common self-hosted defaults.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &[
    "google",
    "selector1",
    "selector2",
    "default",
    "s1",
    "s2",
    "k1",
    "dkim",
    "mail",
];

// SPF policy
/// Literal prefix identifying an SPF TXT record
pub const SPF_PREFIX: &str = "v=spf1";
/// RFC 7208 ceiling on DNS-querying mechanisms per evaluation
pub const SPF_LOOKUP_LIMIT: usize = 10;
/// Mechanisms that cost a DNS lookup when evaluated
pub const SPF_LOOKUP_MECHANISMS: &[&str] = &["include", "a", "mx", "ptr", "exists"];

// DMARC policy
/// Literal prefix identifying a DMARC TXT record
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// Policy percentage applied when `pct` is absent or unparsable
pub const DMARC_DEFAULT_PCT: u8 = 100;

// Issue texts
pub const ISSUE_NO_MX: &str = "No MX records published";
pub const ISSUE_NULL_MX: &str = "Domain publishes a null MX and accepts no mail";
pub const ISSUE_NO_SPF: &str = "No SPF record found";
pub const ISSUE_MULTIPLE_SPF: &str =
    "Multiple SPF records found; receivers only honor the first";
pub const ISSUE_SPF_NEUTRAL: &str = "SPF policy is neutral (?all) and does not reject spoofed mail";
pub const ISSUE_SPF_PASS: &str =
    "SPF policy allows any sender (+all or no all mechanism)";
pub const ISSUE_NO_DKIM: &str = "No DKIM found on common selectors.";
pub const ISSUE_NO_DMARC: &str = "No DMARC record found";
pub const ISSUE_DMARC_NONE: &str = "DMARC policy is 'none' (monitoring only)";
pub const ISSUE_DMARC_NO_RUA: &str = "DMARC has no aggregate report address (rua)";
pub const ISSUE_NO_PTR: &str = "No PTR record found";

// Reputation scoring
pub const SCORE_START: i32 = 100;
pub const DEDUCTION_SPF_PERMISSIVE: i32 = 20;
pub const DEDUCTION_NO_DKIM: i32 = 30;
pub const DEDUCTION_WEAK_DKIM: i32 = 10;
pub const DEDUCTION_DMARC_NONE: i32 = 20;
/// Lowest score rated `Good`
pub const LEVEL_GOOD_MIN: i32 = 80;
/// Lowest score rated `Medium`
pub const LEVEL_MEDIUM_MIN: i32 = 50;

pub const NOTE_SPF_PERMISSIVE: &str = "SPF does not end in -all or ~all";
pub const NOTE_NO_DKIM: &str = "No DKIM key found on common selectors";
pub const NOTE_WEAK_DKIM: &str = "DKIM uses a 1024-bit key";
pub const NOTE_DMARC_NONE: &str = "DMARC policy is none";

/// Provider name reported when no MX exchange matches the provider table
pub const UNKNOWN_PROVIDER: &str = "Custom / Self-hosted";

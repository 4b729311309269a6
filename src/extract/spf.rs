//! SPF record extraction.
//!
//! SPF is tokenized on whitespace rather than parsed against the RFC 7208
//! grammar: the analysis only needs the record itself, its multiplicity, the
//! number of DNS-querying mechanisms, and the `all` qualifier.

use serde::Serialize;

use crate::config::{SPF_LOOKUP_MECHANISMS, SPF_PREFIX};

/// Policy expressed by the `all` mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpfPolicy {
    /// `-all`
    Fail,
    /// `~all`
    SoftFail,
    /// `?all`
    Neutral,
    /// `+all`, bare `all`, or no `all` at all
    Pass,
    /// No SPF record to derive a policy from
    Unknown,
}

impl SpfPolicy {
    /// Whether the policy tells receivers to distrust unlisted senders.
    pub fn is_restrictive(self) -> bool {
        matches!(self, SpfPolicy::Fail | SpfPolicy::SoftFail)
    }
}

/// The SPF record selected from a TXT answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfFinding {
    /// First SPF record in resolver order
    pub record: String,
    /// More than one SPF record was published
    pub multiple: bool,
}

/// Picks the SPF record out of a domain's TXT records.
///
/// SPF records start with "v=spf1". Only the first one is honored by
/// receivers, so any further match is reported through `multiple`.
///
/// # Returns
///
/// `None` if no TXT record is an SPF record.
pub fn find_spf_record(txt_records: &[String]) -> Option<SpfFinding> {
    let mut matches = txt_records
        .iter()
        .map(|txt| txt.trim())
        .filter(|txt| txt.starts_with(SPF_PREFIX));
    let record = matches.next()?.to_string();
    Some(SpfFinding {
        record,
        multiple: matches.next().is_some(),
    })
}

/// Splits a term into its qualifier and the rest (`~all` -> `('~', "all")`).
fn split_qualifier(term: &str) -> (Option<char>, &str) {
    match term.chars().next() {
        Some(q @ ('+' | '-' | '~' | '?')) => (Some(q), &term[1..]),
        _ => (None, term),
    }
}

/// Counts mechanisms that trigger a further DNS lookup.
///
/// `include:` and `exists:` need their domain argument; `a`, `mx` and `ptr`
/// match as whole mechanism names, optionally followed by `:domain` or
/// `/cidr`. The count does not depend on the order of terms.
pub fn count_lookups(record: &str) -> usize {
    record
        .split_whitespace()
        .skip(1)
        .filter(|term| {
            let (_, mechanism) = split_qualifier(term);
            let mechanism = mechanism.to_ascii_lowercase();
            let (name, separator) = match mechanism.find([':', '/']) {
                Some(idx) => (&mechanism[..idx], mechanism[idx..].chars().next()),
                None => (mechanism.as_str(), None),
            };
            if !SPF_LOOKUP_MECHANISMS.contains(&name) {
                return false;
            }
            match name {
                "include" | "exists" => separator == Some(':'),
                _ => true,
            }
        })
        .count()
}

/// Derives the policy from the rightmost `all` mechanism.
///
/// Evaluation stops at the first `all`, but a record carrying several is
/// already broken; the rightmost one is reported so that a trailing `+all`
/// is never masked by an earlier `-all`.
pub fn all_policy(record: &str) -> SpfPolicy {
    record
        .split_whitespace()
        .filter_map(|term| {
            let (qualifier, mechanism) = split_qualifier(term);
            if !mechanism.eq_ignore_ascii_case("all") {
                return None;
            }
            Some(match qualifier {
                Some('-') => SpfPolicy::Fail,
                Some('~') => SpfPolicy::SoftFail,
                Some('?') => SpfPolicy::Neutral,
                _ => SpfPolicy::Pass,
            })
        })
        .last()
        .unwrap_or(SpfPolicy::Pass)
}

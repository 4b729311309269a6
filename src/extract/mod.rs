//! Record extractors.
//!
//! Pure functions turning raw TXT values into typed findings:
//! - SPF: the honored record, a multiplicity flag, lookup count and `all` policy
//! - DKIM: key type and a bucketed size estimate
//! - DMARC: the policy tags with defaults applied
//!
//! DKIM and DMARC share the `tag=value` parser in `tags`.

mod dkim;
mod dmarc;
mod spf;
mod tags;

// Re-export public API
pub use dkim::{
    estimate_key_bits, key_size_label, parse_dkim_key, DkimKey, DkimKeyType, KEY_SIZE_1024,
    KEY_SIZE_2048,
};
pub use dmarc::{find_dmarc_record, parse_dmarc, Alignment, DmarcPolicy, DmarcTags};
pub use spf::{all_policy, count_lookups, find_spf_record, SpfFinding, SpfPolicy};
pub use tags::{parse_tags, TagList};

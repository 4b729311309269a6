//! Protocol checkers.
//!
//! One checker per protocol (MX, SPF, DKIM, DMARC, PTR). Each issues its own
//! DNS queries, applies the extractors and policy rules, and returns a
//! `CheckResult`. Resolution errors never escape a checker: they become a
//! `FAIL` (or, for DKIM probes, a silent miss).
//!
//! Every checker is split into an async gathering step (`check_*`) and a pure
//! grading step (`assess_*`) so the status depends only on the payload.

mod dkim;
mod dmarc;
mod mx;
mod ptr;
mod spf;
mod types;

// Re-export public API
pub use dkim::{assess_dkim, check_dkim, probe_selector, selector_host};
pub use dmarc::{assess_dmarc, check_dmarc};
pub use mx::{assess_mx, check_mx};
pub use ptr::{assess_ptr, check_ptr};
pub use spf::{assess_spf, check_spf, spf_details};
pub use types::{
    CheckResult, CheckStatus, DkimDetails, DkimSelector, DmarcDetails, MxDetails, PtrDetails,
    SpfDetails,
};

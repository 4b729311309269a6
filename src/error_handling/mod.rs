//! Error handling.
//!
//! Errors are split by how far they may travel:
//! - **Client errors** (`AnalysisError`): bad input, returned to the caller
//! - **Resolution errors** (`ResolutionError`): DNS failures, folded into a checker's `FAIL` result
//! - **Probe misses** (`ProbeMiss`): absent DKIM selectors, silently dropped
//! - **Initialization errors** (`InitializationError`): startup failures in the binary

mod types;

// Re-export public API
pub use types::{AnalysisError, InitializationError, ProbeMiss, ResolutionError};

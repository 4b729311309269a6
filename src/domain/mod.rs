//! Domain normalization.
//!
//! This module turns user-supplied input into the bare hostname every
//! checker queries. It is the only validation gate before any DNS call.
//!
//! Key functions:
//! - `normalize_domain()` - Strips scheme, trailing slashes and root dot; lower-cases

use crate::error_handling::AnalysisError;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Normalizes a user-supplied domain.
///
/// Trims surrounding whitespace, removes a leading `http://` or `https://`
/// (any case), removes trailing `/` characters and a trailing root dot, and
/// lower-cases the result.
///
/// # Arguments
///
/// * `input` - Raw domain as typed by the user (e.g. `"HTTPS://Example.COM/"`)
///
/// # Returns
///
/// The normalized hostname (e.g. `"example.com"`).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if nothing is left after normalization,
/// or if the remainder still contains a path separator or whitespace.
pub fn normalize_domain(input: &str) -> Result<String, AnalysisError> {
    let lowered = input.trim().to_lowercase();

    let without_scheme = SCHEMES
        .iter()
        .find_map(|scheme| lowered.strip_prefix(scheme))
        .unwrap_or(&lowered);

    let trimmed = without_scheme.trim_end_matches('/');
    let host = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if host.is_empty() {
        return Err(AnalysisError::InvalidInput("domain is empty".to_string()));
    }
    if host.contains('/') || host.chars().any(char::is_whitespace) {
        return Err(AnalysisError::InvalidInput(format!(
            "'{}' is not a hostname",
            input.trim()
        )));
    }

    Ok(host.to_string())
}

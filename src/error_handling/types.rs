//! Error type definitions.
//!
//! This module defines the error types used throughout the analysis engine.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding or running the HTTP adapter.
    #[error("HTTP server initialization error: {0}")]
    ServerError(String),

    /// A configured CORS origin is not a valid header value.
    #[error("Invalid allowed origin '{0}'")]
    InvalidOriginError(String),

    /// A captured records file could not be read or parsed.
    #[error("Captured records error: {0}")]
    RecordsError(String),
}

/// Errors returned by the `analyze` operation.
///
/// Resolution failures never surface here: each checker folds them into its
/// own `FAIL` result. The only failure of the aggregate operation is bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The supplied domain is empty or cannot be used as a DNS name.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A DNS lookup failed (NXDOMAIN, no records, timeout, transport failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolutionError {
    /// Human-readable description, copied into checker issues verbatim.
    pub message: String,
}

impl ResolutionError {
    /// Creates a resolution error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a DKIM selector probe produced no key.
///
/// A miss is not an error: the selector is simply excluded from the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeMiss {
    /// The `{selector}._domainkey` name did not resolve.
    NotPublished,
    /// TXT records exist but none carries a `p=` tag.
    NoPublicKey,
}

impl std::fmt::Display for ProbeMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProbeMiss {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMiss::NotPublished => "selector not published",
            ProbeMiss::NoPublicKey => "no p= tag in selector record",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resolution_error_display_is_message() {
        let err = ResolutionError::new("no record found for Query { name: example.com. }");
        assert_eq!(
            err.to_string(),
            "no record found for Query { name: example.com. }"
        );
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::InvalidInput("domain is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: domain is empty");
    }

    #[test]
    fn test_probe_miss_as_str() {
        for miss in ProbeMiss::iter() {
            assert!(!miss.as_str().is_empty());
            assert_eq!(miss.to_string(), miss.as_str());
        }
    }
}

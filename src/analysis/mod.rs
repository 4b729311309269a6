//! Analysis orchestration.
//!
//! `Analyzer::analyze` is the single operation exposed to callers: normalize
//! the domain, run the five checkers concurrently, score the result, and
//! return an `AnalysisReport`.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::checks::{
    check_dkim, check_dmarc, check_mx, check_ptr, check_spf, CheckResult, DkimDetails,
    DmarcDetails, MxDetails, PtrDetails, SpfDetails,
};
use crate::config::DEFAULT_DKIM_SELECTORS;
use crate::dns::DnsCapability;
use crate::domain::normalize_domain;
use crate::error_handling::AnalysisError;
use crate::provider::{ProviderDetector, ProviderPattern};
use crate::reputation::{score, Reputation};

/// Email-authentication posture of one domain.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Normalized domain that was queried
    pub domain: String,
    pub mx: CheckResult<MxDetails>,
    pub spf: CheckResult<SpfDetails>,
    pub dkim: CheckResult<DkimDetails>,
    pub dmarc: CheckResult<DmarcDetails>,
    pub ptr: CheckResult<PtrDetails>,
    pub reputation: Reputation,
}

/// Runs analyses against a DNS capability.
///
/// The provider table and DKIM selector list are fixed at construction and
/// shared read-only by every analysis. Cheap to clone.
#[derive(Clone)]
pub struct Analyzer {
    dns: Arc<dyn DnsCapability>,
    detector: ProviderDetector,
    selectors: Arc<[String]>,
}

impl Analyzer {
    /// Creates an analyzer with the built-in provider table and selector list.
    pub fn new(dns: Arc<dyn DnsCapability>) -> Self {
        Self {
            dns,
            detector: ProviderDetector::default(),
            selectors: DEFAULT_DKIM_SELECTORS
                .iter()
                .map(|selector| selector.to_string())
                .collect(),
        }
    }

    /// Replaces the DKIM selectors to probe. An empty list keeps the current one.
    pub fn with_selectors(mut self, selectors: Vec<String>) -> Self {
        if !selectors.is_empty() {
            self.selectors = selectors.into();
        }
        self
    }

    /// Replaces the provider table.
    pub fn with_providers(mut self, table: &'static [ProviderPattern]) -> Self {
        self.detector = ProviderDetector::new(table);
        self
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Analyzes `domain`, checking FC-rDNS for `ip` when one is given.
    ///
    /// The five checkers run concurrently and all of them run to completion:
    /// a failing check never cancels or short-circuits the others.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `domain` normalizes to nothing.
    /// No DNS query is made in that case.
    pub async fn analyze(
        &self,
        domain: &str,
        ip: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let domain = normalize_domain(domain)?;
        let started = Instant::now();
        let dns = self.dns.as_ref();

        let (mx, spf, dkim, dmarc, ptr) = tokio::join!(
            check_mx(dns, &self.detector, &domain),
            check_spf(dns, &domain),
            check_dkim(dns, &self.selectors, &domain),
            check_dmarc(dns, &domain),
            check_ptr(dns, ip),
        );

        let reputation = score(&spf.details, &dkim.details, &dmarc.details);
        log::info!(
            "{domain}: mx={} spf={} dkim={} dmarc={} ptr={} score={} ({:?}) in {:.2}s",
            mx.status,
            spf.status,
            dkim.status,
            dmarc.status,
            ptr.status,
            reputation.score,
            reputation.level,
            started.elapsed().as_secs_f64()
        );

        Ok(AnalysisReport {
            domain,
            mx,
            spf,
            dkim,
            dmarc,
            ptr,
            reputation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::dns::StaticDns;
    use crate::reputation::ReputationLevel;

    #[tokio::test]
    async fn test_analyze_invalid_input_makes_no_queries() {
        let dns = Arc::new(StaticDns::new());
        let analyzer = Analyzer::new(dns.clone());
        let err = analyzer.analyze("  https:// ", None).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert_eq!(dns.queries(), 0);
    }

    #[tokio::test]
    async fn test_analyze_normalizes_before_querying() {
        let dns = Arc::new(
            StaticDns::new()
                .with_mx("example.com", &[("aspmx.l.google.com", 1)])
                .with_txt("example.com", &["v=spf1 include:_spf.google.com -all"]),
        );
        let report = Analyzer::new(dns)
            .analyze("HTTPS://Example.COM/", None)
            .await
            .unwrap();
        assert_eq!(report.domain, "example.com");
        assert_eq!(report.mx.status, CheckStatus::Pass);
        assert_eq!(report.spf.status, CheckStatus::Pass);
    }

    #[tokio::test]
    async fn test_analyze_failures_do_not_abort_siblings() {
        let dns = Arc::new(
            StaticDns::new()
                .fail_mx("example.com", "request timed out")
                .fail_txt("example.com", "request timed out")
                .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject; rua=mailto:d@example.com"]),
        );
        let report = Analyzer::new(dns).analyze("example.com", None).await.unwrap();
        assert_eq!(report.mx.status, CheckStatus::Fail);
        assert_eq!(report.spf.status, CheckStatus::Fail);
        assert_eq!(report.dmarc.status, CheckStatus::Pass);
        assert_eq!(report.ptr.status, CheckStatus::Skipped);
        // SPF -20, DKIM -30
        assert_eq!(report.reputation.score, 50);
        assert_eq!(report.reputation.level, ReputationLevel::Medium);
    }

    #[tokio::test]
    async fn test_with_selectors_empty_keeps_defaults() {
        let analyzer = Analyzer::new(Arc::new(StaticDns::new())).with_selectors(Vec::new());
        assert_eq!(analyzer.selectors().len(), DEFAULT_DKIM_SELECTORS.len());
        let analyzer = analyzer.with_selectors(vec!["custom".to_string()]);
        assert_eq!(analyzer.selectors(), ["custom".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_runs_checkers_concurrently() {
        let delay = std::time::Duration::from_millis(500);
        let dns = Arc::new(
            StaticDns::new()
                .with_mx("example.com", &[("aspmx.l.google.com", 1)])
                .with_txt("example.com", &["v=spf1 -all"])
                .with_delay(delay),
        );
        let started = tokio::time::Instant::now();
        Analyzer::new(dns.clone())
            .analyze("example.com", None)
            .await
            .unwrap();
        let elapsed = started.elapsed();

        // MX, SPF, DMARC and every DKIM probe overlap
        assert_eq!(dns.queries(), 3 + DEFAULT_DKIM_SELECTORS.len());
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "analysis took {elapsed:?}");
    }
}

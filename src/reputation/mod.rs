//! Spoofing-risk reputation score.
//!
//! A pure heuristic over the SPF, DKIM and DMARC payloads. The score starts at
//! `SCORE_START` and loses a fixed amount per weakness; deductions are
//! independent of each other. The score is not clamped.

use serde::Serialize;

use crate::checks::{DkimDetails, DmarcDetails, SpfDetails};
use crate::config::{
    DEDUCTION_DMARC_NONE, DEDUCTION_NO_DKIM, DEDUCTION_SPF_PERMISSIVE, DEDUCTION_WEAK_DKIM,
    LEVEL_GOOD_MIN, LEVEL_MEDIUM_MIN, NOTE_DMARC_NONE, NOTE_NO_DKIM, NOTE_SPF_PERMISSIVE,
    NOTE_WEAK_DKIM, SCORE_START,
};
use crate::extract::{DmarcPolicy, KEY_SIZE_1024};

/// Qualitative risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReputationLevel {
    Good,
    Medium,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl ReputationLevel {
    /// Maps a score to its level: `>= 80` Good, `>= 50` Medium, else High Risk.
    pub fn from_score(score: i32) -> Self {
        if score >= LEVEL_GOOD_MIN {
            ReputationLevel::Good
        } else if score >= LEVEL_MEDIUM_MIN {
            ReputationLevel::Medium
        } else {
            ReputationLevel::HighRisk
        }
    }
}

/// Score, level, and one note per deduction applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reputation {
    pub score: i32,
    pub level: ReputationLevel,
    pub notes: Vec<String>,
}

/// Scores a domain from its SPF, DKIM and DMARC payloads.
///
/// Deductions, in evaluation order:
/// - SPF policy neither `fail` nor `softfail` (includes no record)
/// - no DKIM selector found, or else any selector with a 1024-bit key
/// - DMARC policy `none` (includes no record)
pub fn score(spf: &SpfDetails, dkim: &DkimDetails, dmarc: &DmarcDetails) -> Reputation {
    let mut score = SCORE_START;
    let mut notes = Vec::new();

    if !spf.policy.is_restrictive() {
        score -= DEDUCTION_SPF_PERMISSIVE;
        notes.push(NOTE_SPF_PERMISSIVE.to_string());
    }

    if dkim.selectors.is_empty() {
        score -= DEDUCTION_NO_DKIM;
        notes.push(NOTE_NO_DKIM.to_string());
    } else if dkim
        .selectors
        .iter()
        .any(|selector| selector.key_size == KEY_SIZE_1024)
    {
        score -= DEDUCTION_WEAK_DKIM;
        notes.push(NOTE_WEAK_DKIM.to_string());
    }

    if dmarc.tags.policy == DmarcPolicy::None {
        score -= DEDUCTION_DMARC_NONE;
        notes.push(NOTE_DMARC_NONE.to_string());
    }

    Reputation {
        score,
        level: ReputationLevel::from_score(score),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::DkimSelector;
    use crate::extract::{DkimKeyType, DmarcTags, SpfPolicy, KEY_SIZE_2048};

    fn spf(policy: SpfPolicy) -> SpfDetails {
        SpfDetails {
            record: Some("v=spf1".to_string()),
            policy,
            ..Default::default()
        }
    }

    fn dkim(sizes: &[&str]) -> DkimDetails {
        DkimDetails {
            selectors: sizes
                .iter()
                .enumerate()
                .map(|(i, size)| DkimSelector {
                    selector: format!("s{i}"),
                    host: format!("s{i}._domainkey.example.com"),
                    key_type: DkimKeyType::Rsa,
                    key_size: size.to_string(),
                })
                .collect(),
        }
    }

    fn dmarc(policy: DmarcPolicy) -> DmarcDetails {
        DmarcDetails {
            record: Some("v=DMARC1".to_string()),
            tags: DmarcTags {
                policy,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_score_fully_protected_domain() {
        let rep = score(
            &spf(SpfPolicy::Fail),
            &dkim(&[KEY_SIZE_2048]),
            &dmarc(DmarcPolicy::Reject),
        );
        assert_eq!(rep.score, 100);
        assert_eq!(rep.level, ReputationLevel::Good);
        assert!(rep.notes.is_empty());
    }

    #[test]
    fn test_score_unprotected_domain() {
        let rep = score(&spf(SpfPolicy::Pass), &dkim(&[]), &dmarc(DmarcPolicy::None));
        assert_eq!(rep.score, 30);
        assert_eq!(rep.level, ReputationLevel::HighRisk);
        assert_eq!(rep.notes, vec![NOTE_SPF_PERMISSIVE, NOTE_NO_DKIM, NOTE_DMARC_NONE]);
    }

    #[test]
    fn test_score_weak_dkim_deduction_only_when_keys_exist() {
        let rep = score(
            &spf(SpfPolicy::SoftFail),
            &dkim(&[KEY_SIZE_2048, KEY_SIZE_1024]),
            &dmarc(DmarcPolicy::Quarantine),
        );
        assert_eq!(rep.score, 90);
        assert_eq!(rep.level, ReputationLevel::Good);
        assert_eq!(rep.notes, vec![NOTE_WEAK_DKIM]);
    }

    #[test]
    fn test_score_missing_records_count_as_weak() {
        let rep = score(&SpfDetails::default(), &DkimDetails::default(), &DmarcDetails::default());
        assert_eq!(rep.score, 30);
    }

    #[test]
    fn test_score_neutral_spf_deducted() {
        let rep = score(
            &spf(SpfPolicy::Neutral),
            &dkim(&[KEY_SIZE_2048]),
            &dmarc(DmarcPolicy::Reject),
        );
        assert_eq!(rep.score, 80);
        assert_eq!(rep.level, ReputationLevel::Good);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(ReputationLevel::from_score(100), ReputationLevel::Good);
        assert_eq!(ReputationLevel::from_score(80), ReputationLevel::Good);
        assert_eq!(ReputationLevel::from_score(79), ReputationLevel::Medium);
        assert_eq!(ReputationLevel::from_score(50), ReputationLevel::Medium);
        assert_eq!(ReputationLevel::from_score(49), ReputationLevel::HighRisk);
        assert_eq!(ReputationLevel::from_score(-10), ReputationLevel::HighRisk);
    }

    #[test]
    fn test_level_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&ReputationLevel::HighRisk).unwrap(),
            "\"High Risk\""
        );
    }
}

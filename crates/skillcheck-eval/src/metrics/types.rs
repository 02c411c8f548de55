//! Outcome and summary types for activation checks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::tasks::ActivationCase;

/// Verdict for a single case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// At least one expected skill detected, nothing else
    Pass,
    /// At least one expected skill detected, plus unexpected ones
    PassWithExtra { extra: BTreeSet<String> },
    /// Skills detected, none of them expected
    Partial,
    /// No skills detected
    Fail,
}

impl ActivationOutcome {
    /// Whether the case counts toward `passed` rather than `failed`
    pub fn is_passing(&self) -> bool {
        !matches!(self, ActivationOutcome::Fail)
    }

    /// Whether the case raises a warning
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ActivationOutcome::PassWithExtra { .. } | ActivationOutcome::Partial
        )
    }

    /// Short uppercase label
    pub fn label(&self) -> &'static str {
        match self {
            ActivationOutcome::Pass | ActivationOutcome::PassWithExtra { .. } => "PASS",
            ActivationOutcome::Partial => "PARTIAL",
            ActivationOutcome::Fail => "FAIL",
        }
    }
}

/// Classify detected skills against the expected set.
///
/// One expected skill is enough for a pass, even when others are missing.
pub fn classify(expected: &BTreeSet<String>, detected: &BTreeSet<String>) -> ActivationOutcome {
    if detected.is_empty() {
        return ActivationOutcome::Fail;
    }

    if detected.is_disjoint(expected) {
        return ActivationOutcome::Partial;
    }

    let extra: BTreeSet<String> = detected.difference(expected).cloned().collect();
    if extra.is_empty() {
        ActivationOutcome::Pass
    } else {
        ActivationOutcome::PassWithExtra { extra }
    }
}

/// Result of running one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    /// The case that was run
    pub case: ActivationCase,

    /// Skills parsed from the hook output
    pub detected_skills: BTreeSet<String>,

    /// Verdict
    pub outcome: ActivationOutcome,
}

impl CaseResult {
    /// Classify detected skills for a case
    pub fn new(case: ActivationCase, detected_skills: BTreeSet<String>) -> Self {
        let outcome = classify(&case.expected_skills, &detected_skills);
        Self {
            case,
            detected_skills,
            outcome,
        }
    }
}

/// Aggregate result of an activation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationSummary {
    /// Number of cases run
    pub total: usize,

    /// Cases with at least one skill detected
    pub passed: usize,

    /// Cases with no skill detected
    pub failed: usize,

    /// Cases with unexpected or extra skills; overlaps `passed`
    pub warnings: usize,

    /// Cases with only unexpected skills; a subset of `warnings`
    pub partial: usize,

    /// Per-case results in run order
    pub results: Vec<CaseResult>,

    /// Wall time of the run in seconds
    pub execution_time_secs: f64,

    /// When the run finished
    pub timestamp: DateTime<Utc>,
}

impl ActivationSummary {
    /// Passed cases as a percentage of all cases
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    /// Success rate with one decimal place
    pub fn success_rate_display(&self) -> String {
        format!("{:.1}%", self.success_rate())
    }

    /// Whether no case failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Cases that failed, in run order
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.outcome == ActivationOutcome::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_empty_is_fail() {
        assert_eq!(classify(&set(&["a", "b"]), &set(&[])), ActivationOutcome::Fail);
    }

    #[test]
    fn test_classify_expected_subset_is_pass() {
        assert_eq!(classify(&set(&["a", "b"]), &set(&["a"])), ActivationOutcome::Pass);
        assert_eq!(
            classify(&set(&["a", "b"]), &set(&["a", "b"])),
            ActivationOutcome::Pass
        );
    }

    #[test]
    fn test_classify_extra_is_pass_with_warning() {
        let outcome = classify(&set(&["a", "b"]), &set(&["a", "c"]));
        assert_eq!(
            outcome,
            ActivationOutcome::PassWithExtra {
                extra: set(&["c"])
            }
        );
        assert!(outcome.is_passing());
        assert!(outcome.is_warning());
    }

    #[test]
    fn test_classify_disjoint_is_partial() {
        let outcome = classify(&set(&["a", "b"]), &set(&["c"]));
        assert_eq!(outcome, ActivationOutcome::Partial);
        assert!(outcome.is_warning());
        assert_eq!(outcome.label(), "PARTIAL");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ActivationOutcome::PassWithExtra { extra: set(&["c"]) })
            .unwrap();
        assert_eq!(json, serde_json::json!({"verdict": "pass_with_extra", "extra": ["c"]}));
        assert_eq!(
            serde_json::to_value(ActivationOutcome::Fail).unwrap(),
            serde_json::json!({"verdict": "fail"})
        );
    }

    #[test]
    fn test_success_rate_with_no_cases() {
        let summary = ActivationSummary {
            total: 0,
            passed: 0,
            failed: 0,
            warnings: 0,
            partial: 0,
            results: Vec::new(),
            execution_time_secs: 0.0,
            timestamp: Utc::now(),
        };
        assert_eq!(summary.success_rate_display(), "0.0%");
        assert_eq!(summary.exit_code(), 0);
    }
}

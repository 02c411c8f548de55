//! Metrics collector for an activation run
//!
//! Counters only ever go up, and every recorded case lands in exactly one of
//! `passed` or `failed`.

use std::time::Instant;

use chrono::Utc;

use super::types::{ActivationOutcome, ActivationSummary, CaseResult};

/// Collector for gathering per-case results during a run
pub struct MetricsCollector {
    passed: usize,
    failed: usize,
    warnings: usize,
    partial: usize,
    results: Vec<CaseResult>,
    start_time: Instant,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            warnings: 0,
            partial: 0,
            results: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Record the result of one case
    pub fn record(&mut self, result: CaseResult) {
        if result.outcome.is_passing() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }

        if result.outcome.is_warning() {
            self.warnings += 1;
        }

        if result.outcome == ActivationOutcome::Partial {
            self.partial += 1;
        }

        self.results.push(result);
    }

    pub fn passed_count(&self) -> usize {
        self.passed
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Get all collected results
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    /// Finish the run and build the summary
    pub fn finish(self) -> ActivationSummary {
        ActivationSummary {
            total: self.results.len(),
            passed: self.passed,
            failed: self.failed,
            warnings: self.warnings,
            partial: self.partial,
            results: self.results,
            execution_time_secs: self.start_time.elapsed().as_secs_f64(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::ActivationCase;
    use std::collections::BTreeSet;

    fn result(detected: &[&str]) -> CaseResult {
        let case = ActivationCase::new("D", "prompt", ["a", "b"], "desc");
        let detected: BTreeSet<String> = detected.iter().map(|s| s.to_string()).collect();
        CaseResult::new(case, detected)
    }

    #[test]
    fn test_collector_counts() {
        let mut collector = MetricsCollector::new();
        collector.record(result(&[]));
        collector.record(result(&["a"]));
        collector.record(result(&["a", "c"]));
        collector.record(result(&["c"]));

        assert_eq!(collector.passed_count(), 3);
        assert_eq!(collector.failed_count(), 1);
        assert_eq!(collector.warning_count(), 2);

        let summary = collector.finish();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.passed + summary.failed, summary.total);
        assert_eq!(summary.success_rate_display(), "75.0%");
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.failures().count(), 1);
    }

    #[test]
    fn test_collector_all_passing() {
        let mut collector = MetricsCollector::default();
        collector.record(result(&["b"]));

        let summary = collector.finish();
        assert!(summary.is_success());
        assert_eq!(summary.success_rate_display(), "100.0%");
    }
}

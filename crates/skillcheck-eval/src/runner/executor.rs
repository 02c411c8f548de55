//! Activation executor
//!
//! Runs every case of a catalog through a [`SkillMatcher`], one after the
//! other, and folds the verdicts into an [`ActivationSummary`]. Each matcher
//! call is awaited before the next case starts; a single call per case is
//! authoritative and nothing is retried.

use tracing::{debug, info};

use super::output::parse_activated_skills;
use super::SkillMatcher;
use crate::metrics::{ActivationSummary, CaseResult, MetricsCollector};
use crate::tasks::{ActivationCase, Catalog};

/// Callback for progress updates during a run
pub type ProgressCallback = Box<dyn Fn(&ActivationProgress<'_>) + Send + Sync>;

/// Progress update emitted after each case
#[derive(Debug, Clone, Copy)]
pub struct ActivationProgress<'a> {
    /// Index of the finished case (0-based)
    pub current: usize,
    /// Total number of cases
    pub total: usize,
    /// The finished case's result
    pub result: &'a CaseResult,
}

/// Executor for activation catalogs
pub struct ActivationExecutor<M> {
    matcher: M,
    progress_callback: Option<ProgressCallback>,
}

impl<M: SkillMatcher> ActivationExecutor<M> {
    /// Create a new executor around a matcher
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            progress_callback: None,
        }
    }

    /// Set progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Get the underlying matcher
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Run a single case
    pub async fn run_case(&self, case: &ActivationCase) -> CaseResult {
        let output = self.matcher.classify(&case.prompt).await;
        let detected = parse_activated_skills(&output);
        debug!(
            prompt = %case.prompt,
            detected = detected.len(),
            "Parsed activation output"
        );
        CaseResult::new(case.clone(), detected)
    }

    /// Run all cases of a catalog in order
    pub async fn run(&self, catalog: &Catalog) -> ActivationSummary {
        let total = catalog.len();
        let mut collector = MetricsCollector::new();

        info!("Running {} activation case(s)", total);

        for (index, case) in catalog.iter().enumerate() {
            let result = self.run_case(case).await;
            debug!(
                domain = %case.domain,
                description = %case.description,
                verdict = result.outcome.label(),
                "Case finished"
            );

            if let Some(callback) = &self.progress_callback {
                callback(&ActivationProgress {
                    current: index,
                    total,
                    result: &result,
                });
            }

            collector.record(result);
        }

        let summary = collector.finish();
        info!(
            passed = summary.passed,
            failed = summary.failed,
            warnings = summary.warnings,
            "Activation run finished ({})",
            summary.success_rate_display()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ActivationOutcome;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Replies with canned output per prompt, empty otherwise
    struct CannedMatcher {
        replies: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedMatcher {
        fn new(replies: &[(&str, &str)]) -> Self {
            Self {
                replies: replies
                    .iter()
                    .map(|(p, o)| (p.to_string(), o.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SkillMatcher for CannedMatcher {
        async fn classify(&self, prompt: &str) -> String {
            self.calls.lock().unwrap().push(prompt.to_string());
            self.replies.get(prompt).cloned().unwrap_or_default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ActivationCase::new("D", "p-pass", ["a", "b"], "pass"),
            ActivationCase::new("D", "p-extra", ["a", "b"], "extra"),
            ActivationCase::new("D", "p-partial", ["a", "b"], "partial"),
            ActivationCase::new("D", "p-fail", ["a", "b"], "fail"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_classifies_and_counts() {
        let matcher = CannedMatcher::new(&[
            ("p-pass", "→ a\n"),
            ("p-extra", "→ a\n→ c\n"),
            ("p-partial", "→ c\n"),
        ]);
        let executor = ActivationExecutor::new(matcher);

        let summary = executor.run(&catalog()).await;

        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.passed + summary.failed, summary.total);
        assert_eq!(summary.exit_code(), 1);

        let outcomes: Vec<_> = summary.results.iter().map(|r| &r.outcome).collect();
        assert_eq!(outcomes[0], &ActivationOutcome::Pass);
        assert!(matches!(outcomes[1], ActivationOutcome::PassWithExtra { .. }));
        assert_eq!(outcomes[2], &ActivationOutcome::Partial);
        assert_eq!(outcomes[3], &ActivationOutcome::Fail);
    }

    #[tokio::test]
    async fn test_run_is_sequential_and_in_order() {
        let executor = ActivationExecutor::new(CannedMatcher::new(&[]));
        executor.run(&catalog()).await;

        let calls = executor.matcher().calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["p-pass", "p-extra", "p-partial", "p-fail"]);
    }

    #[tokio::test]
    async fn test_progress_callback_sees_every_case() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut executor = ActivationExecutor::new(CannedMatcher::new(&[("p-pass", "→ b\n")]));
        executor.set_progress_callback(Box::new(move |progress: &ActivationProgress<'_>| {
            sink.lock().unwrap().push((
                progress.current,
                progress.total,
                progress.result.outcome.label(),
            ));
        }));

        executor.run(&catalog()).await;

        let seen = seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![(0, 4, "PASS"), (1, 4, "FAIL"), (2, 4, "FAIL"), (3, 4, "FAIL")]
        );
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let executor = ActivationExecutor::new(CannedMatcher::new(&[]));
        let summary = executor.run(&Catalog::default()).await;
        assert_eq!(summary.total, 0);
        assert!(summary.is_success());
    }
}

//! End-to-end activation runs against stub and real matchers

use async_trait::async_trait;
use skillcheck_eval::{
    ActivationExecutor, ActivationOutcome, CaseLoader, Catalog, ReportFormat, SkillMatcher,
    generate_report,
};

const SENTRY_PROMPT: &str = "I need to add Sentry error tracking to my service";

/// Prints a marker for every skill whose name appears in the prompt
struct KeywordMatcher {
    rules: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl SkillMatcher for KeywordMatcher {
    async fn classify(&self, prompt: &str) -> String {
        let mut output = String::from("🎯 SKILL ACTIVATION CHECK\n");
        for (keyword, skill) in &self.rules {
            if prompt.to_lowercase().contains(keyword) {
                output.push_str(&format!("  → {}\n", skill));
            }
        }
        output
    }
}

fn keyword_matcher() -> KeywordMatcher {
    KeywordMatcher {
        rules: vec![
            ("sentry", "error-tracking"),
            ("kubernetes", "kubernetes-specialist"),
            ("terraform", "terraform-engineer"),
        ],
    }
}

#[tokio::test]
async fn sentry_prompt_passes() {
    let catalog = Catalog::builtin().unwrap();
    let sentry = catalog
        .iter()
        .find(|c| c.prompt == SENTRY_PROMPT)
        .cloned()
        .unwrap();

    let executor = ActivationExecutor::new(keyword_matcher());
    let result = executor.run_case(&sentry).await;

    assert_eq!(result.outcome, ActivationOutcome::Pass);
    assert!(result.detected_skills.contains("error-tracking"));
}

#[tokio::test]
async fn builtin_catalog_counts_are_consistent() {
    let catalog = Catalog::builtin().unwrap();
    let executor = ActivationExecutor::new(keyword_matcher());

    let summary = executor.run(&catalog).await;

    assert_eq!(summary.total, catalog.len());
    assert_eq!(summary.passed + summary.failed, summary.total);
    assert_eq!(summary.results.len(), summary.total);
    assert!(summary.passed >= 1);
    assert!(summary.failed >= 1);
    assert_eq!(summary.exit_code(), 1);
    assert!(
        summary
            .failures()
            .all(|r| r.detected_skills.is_empty())
    );

    let table = generate_report(&summary, ReportFormat::Table).unwrap();
    assert!(table.contains(&format!("Total Tests:     {}", catalog.len())));
}

#[tokio::test]
async fn silent_matcher_fails_every_case() {
    struct Silent;

    #[async_trait]
    impl SkillMatcher for Silent {
        async fn classify(&self, _prompt: &str) -> String {
            String::new()
        }
    }

    let catalog = Catalog::builtin().unwrap().filter_domain("cloud");
    let summary = ActivationExecutor::new(Silent).run(&catalog).await;

    assert_eq!(summary.failed, catalog.len());
    assert_eq!(summary.success_rate_display(), "0.0%");
}

#[tokio::test]
async fn loaded_catalog_runs() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("cases.yaml");
    std::fs::write(
        &path,
        "- domain: Infra\n  prompt: Write a Terraform module\n  expected_skills: [terraform-engineer]\n  description: Terraform module\n",
    )
    .unwrap();

    let catalog = CaseLoader::new(&path).load().unwrap();
    let summary = ActivationExecutor::new(keyword_matcher()).run(&catalog).await;

    assert!(summary.is_success());
    assert_eq!(summary.success_rate_display(), "100.0%");
}

#[cfg(unix)]
mod real_hook {
    use super::*;
    use skillcheck_eval::{ActivationConfig, HookMatcher};
    use tempfile::TempDir;

    const HOOK: &str = r#"input=$(cat)
echo "🎯 SKILL ACTIVATION CHECK"
case "$input" in
  *Sentry*) echo "  → error-tracking" ;;
esac
case "$input" in
  *'"permission_mode":"acceptEdits"'*) ;;
  *) echo "  → bad-input" ;;
esac
"#;

    #[tokio::test]
    async fn hook_script_drives_verdicts() {
        let temp = TempDir::new().unwrap();
        let hook = temp.path().join("skill-activation-prompt.sh");
        std::fs::write(&hook, HOOK).unwrap();

        let config = ActivationConfig::new(temp.path())
            .with_hook_path(&hook)
            .with_interpreter("sh")
            .with_timeout(30);
        let executor = ActivationExecutor::new(HookMatcher::new(config));

        let catalog = Catalog::from_yaml(&format!(
            "- domain: Error Tracking\n  prompt: {SENTRY_PROMPT}\n  expected_skills: [error-tracking, backend-dev-guidelines]\n  description: Sentry integration\n\
             - domain: Frontend\n  prompt: Build a React table\n  expected_skills: [frontend-dev-guidelines]\n  description: Components\n"
        ))
        .unwrap();

        let summary = executor.run(&catalog).await;

        assert_eq!(summary.results[0].outcome, ActivationOutcome::Pass);
        assert_eq!(summary.results[1].outcome, ActivationOutcome::Fail);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code(), 1);
    }
}

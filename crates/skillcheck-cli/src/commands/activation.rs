//! Activation check command

use anyhow::{Context, Result, bail};
use skillcheck_eval::report::{ReportFormat, generate_report};
use skillcheck_eval::runner::{ActivationConfig, ActivationExecutor, ActivationProgress, HookMatcher};
use skillcheck_eval::tasks::{CaseLoader, Catalog, join_skills};
use skillcheck_eval::{ActivationOutcome, ActivationSummary, CaseResult};

use crate::args::{ActivationArgs, resolve_project_dir};
use crate::console::CliConsole;

/// How a result line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Pass,
    Warn,
    Fail,
}

/// Run the activation catalog and return the process exit status
pub async fn run(args: &ActivationArgs) -> Result<i32> {
    let console = CliConsole::new(args.verbose);
    let format = ReportFormat::from_str(&args.format).unwrap_or_default();

    let project_dir = resolve_project_dir(args.project_dir.as_deref())
        .context("Failed to determine the project directory")?;

    let mut config = ActivationConfig::new(&project_dir);
    if let Some(hook) = &args.hook {
        config = config.with_hook_path(hook);
    }
    if let Some(interpreter) = &args.interpreter {
        config = config.with_interpreter(interpreter);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(secs);
    }

    let catalog = load_catalog(args)?;

    let hook_path = config.effective_hook_path();
    if !hook_path.exists() {
        tracing::warn!("Activation hook not found at {:?}", hook_path);
        console.error(&format!(
            "Activation hook not found: {} (every case will fail)",
            hook_path.display()
        ));
    }

    let mut executor = ActivationExecutor::new(HookMatcher::new(config));

    if format == ReportFormat::Table {
        console.print_header("🧪 COMPREHENSIVE SKILL ACTIVATION TESTING");
        executor.set_progress_callback(Box::new(move |progress: &ActivationProgress<'_>| {
            console.line("");
            for (style, line) in case_lines(progress.result) {
                match style {
                    LineStyle::Plain => console.line(&line),
                    LineStyle::Pass => console.success(&line),
                    LineStyle::Warn => console.warn(&line),
                    LineStyle::Fail => console.failure(&line),
                }
            }
            console.info(&format!("[{}/{}]", progress.current + 1, progress.total));
        }));
    }

    let summary = executor.run(&catalog).await;

    let report = generate_report(&summary, format)?;
    if format == ReportFormat::Table {
        console.line("\n");
    }
    console.line(&report);

    if format == ReportFormat::Table {
        print_verdict(&console, &summary);
    }

    Ok(summary.exit_code())
}

/// Load the configured catalog and apply the domain filter
fn load_catalog(args: &ActivationArgs) -> Result<Catalog> {
    let catalog = match &args.catalog {
        Some(path) => CaseLoader::new(path).load()?,
        None => Catalog::builtin()?,
    };

    let catalog = match &args.domain {
        Some(domain) => {
            let filtered = catalog.filter_domain(domain);
            if filtered.is_empty() {
                bail!("No activation cases match domain '{}'", domain);
            }
            filtered
        }
        None => catalog,
    };

    if catalog.is_empty() {
        bail!("The activation catalog is empty");
    }

    Ok(catalog)
}

/// Lines printed for a finished case
pub fn case_lines(result: &CaseResult) -> Vec<(LineStyle, String)> {
    let case = &result.case;
    let mut lines = vec![
        (
            LineStyle::Plain,
            format!("📝 Testing: {} - {}", case.domain, case.description),
        ),
        (LineStyle::Plain, format!("   Prompt: \"{}\"", case.prompt)),
        (
            LineStyle::Plain,
            format!("   Expected skills: {}", case.expected_display()),
        ),
        (
            LineStyle::Plain,
            format!(
                "   Detected skills: {}",
                join_skills(&result.detected_skills)
            ),
        ),
    ];

    match &result.outcome {
        ActivationOutcome::Pass => {
            lines.push((
                LineStyle::Pass,
                "   ✅ PASS - Detected expected skill(s)".to_string(),
            ));
        }
        ActivationOutcome::PassWithExtra { extra } => {
            lines.push((
                LineStyle::Pass,
                "   ✅ PASS - Detected expected skill(s)".to_string(),
            ));
            lines.push((
                LineStyle::Warn,
                format!("   ⚠️  Additional skills detected: {}", join_skills(extra)),
            ));
        }
        ActivationOutcome::Partial => {
            lines.push((
                LineStyle::Warn,
                format!(
                    "   ⚠️  PARTIAL - Detected different skills: {}",
                    join_skills(&result.detected_skills)
                ),
            ));
        }
        ActivationOutcome::Fail => {
            lines.push((
                LineStyle::Fail,
                "   ❌ FAIL - No skills detected".to_string(),
            ));
        }
    }

    lines
}

fn print_verdict(console: &CliConsole, summary: &ActivationSummary) {
    if summary.is_success() {
        console.success("✅ All tests passed! Skill activation system is working correctly.");
    } else {
        console.warn("⚠️  Some tests failed. Review the skill-rules.json patterns.");
    }
}

//! Banner injection command

use anyhow::{Context, Result};
use skillcheck_core::skills::{
    BannerInjector, InjectOutcome, InjectionEntry, InjectionSummary, InjectorConfig,
};

use crate::args::BannerArgs;
use crate::console::CliConsole;

const SUMMARY_RULE_WIDTH: usize = 39;

/// Add activation banners to every skill document.
///
/// Per-document failures are reported and counted; only a skills directory
/// that cannot be listed is returned as an error.
pub async fn run(args: &BannerArgs) -> Result<InjectionSummary> {
    let console = CliConsole::new(args.verbose);
    let skills_dir = args
        .skills_dir()
        .context("Failed to determine the project directory")?;

    let config = InjectorConfig::new(&skills_dir).with_dry_run(args.dry_run);
    let injector = BannerInjector::new(config);

    console.line("Adding activation banners to all skills...\n");
    if args.dry_run {
        console.warn("Dry run: no files will be written\n");
    }

    let summary = injector
        .run()
        .await
        .with_context(|| format!("Failed to read skills directory {}", skills_dir.display()))?;

    console.line(&format!("Found {} skill files\n", summary.found()));

    for entry in &summary.entries {
        print_entry(&console, entry, args.dry_run);
    }

    console.line("");
    console.print_rule(SUMMARY_RULE_WIDTH);
    for line in summary_lines(&summary) {
        console.line(&line);
    }
    console.print_rule(SUMMARY_RULE_WIDTH);

    Ok(summary)
}

fn print_entry(console: &CliConsole, entry: &InjectionEntry, dry_run: bool) {
    match &entry.result {
        Ok(InjectOutcome::Injected { name }) => {
            console.line(&format!("Processing: {}", entry.path.display()));
            let verb = if dry_run { "Would add" } else { "Added" };
            console.success(&format!("  ✓ {} activation banner for: {}", verb, name));
        }
        Ok(InjectOutcome::Skipped) => {
            console.info(&format!(
                "{}: banner already exists, skipping",
                entry.path.display()
            ));
        }
        Err(e) => {
            console.error(&format!("Error processing {}: {}", entry.path.display(), e));
        }
    }
}

/// Counter lines of the closing summary
pub fn summary_lines(summary: &InjectionSummary) -> Vec<String> {
    vec![
        "✅ Summary:".to_string(),
        format!("   Processed: {}", summary.processed()),
        format!("   Skipped:   {}", summary.skipped()),
        format!("   Errors:    {}", summary.errors()),
    ]
}

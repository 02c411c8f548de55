//! Skill activation regression harness
//!
//! This crate checks that the prompt-to-skill activation hook picks the
//! expected skills for a catalog of representative prompts.
//!
//! # Features
//!
//! - **Builtin Catalog**: 49 prompts across engineering domains, each with the
//!   skills that should activate for it
//! - **Hook Matcher**: Runs the activation hook with the JSON prompt record on
//!   stdin and parses the `→ skill-id` lines it prints
//! - **Classification**: Pass, pass with extra skills, partial and fail verdicts
//!   with aggregate counters
//! - **Report Generation**: Terminal table and JSON output
//!
//! # Example
//!
//! ```rust,ignore
//! use skillcheck_eval::{ActivationConfig, ActivationExecutor, Catalog, HookMatcher};
//!
//! let config = ActivationConfig::new("/path/to/project");
//! let executor = ActivationExecutor::new(HookMatcher::new(config));
//! let summary = executor.run(&Catalog::builtin()?).await;
//! std::process::exit(summary.exit_code());
//! ```

pub mod metrics;
pub mod report;
pub mod runner;
pub mod tasks;

// Re-exports for convenience
pub use metrics::{ActivationOutcome, ActivationSummary, CaseResult, MetricsCollector, classify};
pub use report::{ReportFormat, generate_report};
pub use runner::{
    ActivationConfig, ActivationExecutor, ActivationProgress, HookMatcher, SkillMatcher,
    parse_activated_skills,
};
pub use tasks::{ActivationCase, CaseLoader, Catalog};

//! Metrics for activation runs
//!
//! - Per-case classification ([`classify`], [`ActivationOutcome`])
//! - Aggregate counters ([`MetricsCollector`], [`ActivationSummary`])

mod collector;
mod types;

pub use collector::MetricsCollector;
pub use types::{ActivationOutcome, ActivationSummary, CaseResult, classify};

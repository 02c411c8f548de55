//! Report generation for activation runs
//!
//! Generates reports as a terminal table or JSON.

mod json;
mod table;

pub use json::JsonReporter;
pub use table::{RULE_WIDTH, TableReporter};

use crate::metrics::ActivationSummary;
use anyhow::Result;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

impl ReportFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Some(ReportFormat::Table),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(summary: &ActivationSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(TableReporter::generate(summary)),
        ReportFormat::Json => JsonReporter::generate(summary),
    }
}

//! Terminal table report

use crate::metrics::ActivationSummary;

/// Width of the horizontal rules, in characters
pub const RULE_WIDTH: usize = 80;

const RULE_CHAR: char = '━';

/// Plain-text report for terminal output
pub struct TableReporter;

impl TableReporter {
    /// A full-width horizontal rule
    pub fn rule() -> String {
        RULE_CHAR.to_string().repeat(RULE_WIDTH)
    }

    /// Generate the aggregate block printed after a run
    pub fn generate(summary: &ActivationSummary) -> String {
        let rule = Self::rule();
        let mut output = String::new();

        output.push_str(&format!("{}\n", rule));
        output.push_str("📊 TEST RESULTS\n");
        output.push_str(&format!("{}\n", rule));
        output.push_str(&format!("   Total Tests:     {}\n", summary.total));
        output.push_str(&format!("   ✅ Passed:        {}\n", summary.passed));
        output.push_str(&format!("   ❌ Failed:        {}\n", summary.failed));
        output.push_str(&format!("   ⚠️  Warnings:      {}\n", summary.warnings));
        output.push_str(&format!(
            "   Success Rate:    {}\n",
            summary.success_rate_display()
        ));
        output.push_str(&format!("{}\n", rule));

        output
    }
}

//! CLI console utilities

use colored::*;

/// Width of the separator rules, in characters
const RULE_WIDTH: usize = 80;

/// CLI console for formatted output
#[derive(Debug, Clone, Copy)]
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a plain line
    pub fn line(&self, message: &str) {
        println!("{}", message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{}", message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{}", message.yellow());
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        println!("{}", message.red());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header framed by rules
    pub fn print_header(&self, title: &str) {
        self.print_rule(RULE_WIDTH);
        println!("{}", title.bold());
        self.print_rule(RULE_WIDTH);
    }

    /// Print a horizontal rule
    pub fn print_rule(&self, width: usize) {
        println!("{}", "━".repeat(width));
    }
}

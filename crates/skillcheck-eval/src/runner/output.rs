//! Parsing of activation hook output
//!
//! The hook prints free-form text. Only lines that start (after trimming) with
//! the `→` marker carry information; the first lowercase-hyphen token after the
//! marker is the activated skill:
//!
//! ```text
//! 🎯 SKILL ACTIVATION CHECK
//! 📚 RECOMMENDED SKILLS:
//!   → error-tracking
//!   → backend-dev-guidelines
//! ```

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Glyph that opens an activation line
pub const ACTIVATION_MARKER: char = '→';

static SKILL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"→\s*([a-z-]+)").expect("valid skill id pattern"));

/// Extract the set of activated skills from raw hook output
pub fn parse_activated_skills(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter(|line| line.trim().starts_with(ACTIVATION_MARKER))
        .filter_map(|line| SKILL_ID.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

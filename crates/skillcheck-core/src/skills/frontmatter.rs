//! Frontmatter block location and field lookup
//!
//! A skill document may open with a metadata block:
//!
//! ```markdown
//! ---
//! name: error-tracking
//! description: Sentry integration patterns
//! ---
//!
//! Body text.
//! ```
//!
//! Only the block boundaries and the `name` field matter here; the rest of the
//! frontmatter is left untouched.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Line that opens and closes the frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// `name: value` line inside the frontmatter block
static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^name:\s*(.+?)\s*$").expect("valid name field pattern"));

/// Byte offsets of a frontmatter block within a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSpan {
    /// Text between the two delimiter lines
    pub fields: Range<usize>,
    /// Offset just past the closing `---`
    pub end: usize,
}

/// Result of scanning a document for its frontmatter block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterScan {
    /// Block found
    Block(FrontmatterSpan),
    /// Document does not open with a delimiter line
    Absent,
    /// Opening delimiter without a closing one
    Unterminated,
}

impl FrontmatterScan {
    /// Get the span if a complete block was found
    pub fn span(&self) -> Option<&FrontmatterSpan> {
        match self {
            FrontmatterScan::Block(span) => Some(span),
            _ => None,
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == FRONTMATTER_DELIMITER
}

/// Locate the leading frontmatter block
pub fn scan(content: &str) -> FrontmatterScan {
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return FrontmatterScan::Absent;
    };
    if !is_delimiter(first) {
        return FrontmatterScan::Absent;
    }

    let fields_start = first.len();
    let mut offset = fields_start;
    for line in lines {
        if is_delimiter(line) {
            return FrontmatterScan::Block(FrontmatterSpan {
                fields: fields_start..offset,
                end: offset + FRONTMATTER_DELIMITER.len(),
            });
        }
        offset += line.len();
    }

    FrontmatterScan::Unterminated
}

/// Get the `name` field from the frontmatter block, if present
pub fn name_field(content: &str) -> Option<String> {
    let span = scan(content);
    let span = span.span()?;

    content[span.fields.clone()]
        .lines()
        .find_map(|line| NAME_FIELD.captures(line.trim_end_matches('\r')))
        .map(|caps| {
            caps[1]
                .trim_matches('"')
                .trim_matches('\'')
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
}

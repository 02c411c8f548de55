//! Activation banner rendering

/// Number of separator glyphs in a banner rule
pub const BANNER_WIDTH: usize = 80;

/// Separator glyph
pub const BANNER_CHAR: char = '━';

/// Text that marks a document as already carrying a banner
pub const BANNER_SENTINEL: &str = "🎯 SKILL ACTIVATED:";

/// Render the banner block for a skill.
///
/// The result depends only on `name`:
///
/// ```text
///
/// ━━━━…━━━━
/// 🎯 SKILL ACTIVATED: <name>
/// ━━━━…━━━━
/// ```
pub fn render_banner(name: &str) -> String {
    let rule = BANNER_CHAR.to_string().repeat(BANNER_WIDTH);
    format!("\n{rule}\n{BANNER_SENTINEL} {name}\n{rule}\n")
}

/// Check whether a document already carries an activation banner
pub fn has_banner(content: &str) -> bool {
    content.contains(BANNER_SENTINEL)
}

/// Splice the banner into `content` at byte offset `at`
pub fn insert_banner(content: &str, at: usize, name: &str) -> String {
    let (before, after) = content.split_at(at);
    let banner = render_banner(name);

    let mut out = String::with_capacity(content.len() + banner.len());
    out.push_str(before);
    out.push_str(&banner);
    out.push_str(after);
    out
}

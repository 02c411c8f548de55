//! Skill document discovery
//!
//! Skills follow the `skill-name/SKILL.md` layout: one subdirectory per skill
//! directly under the skills root. Nested directories are not searched.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{SkillError, SkillResult};

/// File name of a skill document inside its directory
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Find every `<root>/<dir>/SKILL.md`, sorted by path.
///
/// Subdirectories without a skill document are skipped.
pub async fn find_skill_documents(root: &Path) -> SkillResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(root)
        .await
        .map_err(|e| SkillError::io(root, e))?;

    let mut found = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SkillError::io(root, e))?
    {
        let path = entry.path();
        // Follows symlinks, so linked skill directories are included
        if !fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            continue;
        }

        let skill_md = path.join(SKILL_FILE_NAME);
        if fs::metadata(&skill_md).await.is_ok_and(|m| m.is_file()) {
            found.push(skill_md);
        } else {
            debug!("No {} in {:?}, skipping", SKILL_FILE_NAME, path);
        }
    }

    found.sort();
    Ok(found)
}

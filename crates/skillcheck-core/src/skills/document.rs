//! A skill document loaded for banner injection

use std::path::{Path, PathBuf};

use super::banner::{has_banner, insert_banner};
use super::frontmatter::{self, FrontmatterScan};
use crate::error::{SkillError, SkillResult};

/// A `SKILL.md` file and its current content
#[derive(Debug, Clone)]
pub struct SkillDocument {
    path: PathBuf,
    content: String,
}

impl SkillDocument {
    /// Wrap already-read content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk
    pub async fn load(path: impl AsRef<Path>) -> SkillResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SkillError::io(path, e))?;
        Ok(Self::new(path, content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the banner is already present
    pub fn has_banner(&self) -> bool {
        has_banner(&self.content)
    }

    /// Resolve the skill's display name.
    ///
    /// The frontmatter `name` field wins. Otherwise the parent directory name
    /// is used, unless that directory is `skills_root` itself.
    pub fn name(&self, skills_root: &Path) -> Option<String> {
        frontmatter::name_field(&self.content).or_else(|| self.dir_name(skills_root))
    }

    fn dir_name(&self, skills_root: &Path) -> Option<String> {
        let parent = self.path.parent()?;
        if parent.as_os_str().is_empty() || parent == skills_root {
            return None;
        }
        parent
            .file_name()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Produce the content with the banner inserted after the frontmatter.
    ///
    /// Returns the resolved name together with the new content.
    pub fn with_banner(&self, skills_root: &Path) -> SkillResult<(String, String)> {
        let name = self
            .name(skills_root)
            .ok_or_else(|| SkillError::name_unresolved(&self.path))?;

        let end = match frontmatter::scan(&self.content) {
            FrontmatterScan::Block(span) => span.end,
            FrontmatterScan::Absent => return Err(SkillError::missing_frontmatter(&self.path)),
            FrontmatterScan::Unterminated => {
                return Err(SkillError::missing_frontmatter_end(&self.path));
            }
        };

        let updated = insert_banner(&self.content, end, &name);
        Ok((name, updated))
    }
}

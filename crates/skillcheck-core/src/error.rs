//! Error types for skillcheck

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for skillcheck operations
pub type SkillResult<T> = Result<T, SkillError>;

/// Main error type for skill document and hook operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    /// Reading or writing a file failed
    #[error("IO error at {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The document does not open with a `---` frontmatter line
    #[error("No frontmatter block in {}", path.display())]
    MissingFrontmatter { path: PathBuf },

    /// The frontmatter block is opened but never closed
    #[error("Could not find end of frontmatter in {}", path.display())]
    MissingFrontmatterEnd { path: PathBuf },

    /// Neither a `name` field nor a usable directory name was found
    #[error("Could not extract skill name for {}", path.display())]
    NameUnresolved { path: PathBuf },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Hook invocation errors
    #[error("Hook error: {0}")]
    Hook(String),
}

impl SkillError {
    /// Create a new IO error for a path
    pub fn io(path: impl AsRef<Path>, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Create a missing-frontmatter error
    pub fn missing_frontmatter(path: impl AsRef<Path>) -> Self {
        Self::MissingFrontmatter {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a missing-frontmatter-end error
    pub fn missing_frontmatter_end(path: impl AsRef<Path>) -> Self {
        Self::MissingFrontmatterEnd {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a name-unresolved error
    pub fn name_unresolved(path: impl AsRef<Path>) -> Self {
        Self::NameUnresolved {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new hook error
    pub fn hook(message: impl Into<String>) -> Self {
        Self::Hook(message.into())
    }

    /// Path of the document this error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::MissingFrontmatter { path }
            | Self::MissingFrontmatterEnd { path }
            | Self::NameUnresolved { path } => Some(path),
            Self::Json(_) | Self::Hook(_) => None,
        }
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

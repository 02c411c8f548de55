//! Activation banner injector
//!
//! Walks the skills directory and makes sure every `SKILL.md` announces its
//! own activation. Documents that already carry a banner are left alone, so
//! running the injector repeatedly is a no-op after the first pass.
//!
//! Failures are isolated per document: an unreadable file or an unresolvable
//! name is recorded in the summary and the batch moves on.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::discovery::find_skill_documents;
use super::document::SkillDocument;
use crate::error::{SkillError, SkillResult};

/// Configuration for a banner injection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectorConfig {
    /// Directory holding one subdirectory per skill
    pub skills_dir: PathBuf,

    /// Compute outcomes without writing files
    #[serde(default)]
    pub dry_run: bool,
}

impl InjectorConfig {
    /// Create a config for the given skills directory
    pub fn new(skills_dir: impl Into<PathBuf>) -> Self {
        Self {
            skills_dir: skills_dir.into(),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Banner written (or would be, in dry-run mode)
    Injected { name: String },
    /// Banner already present
    Skipped,
}

/// Per-document record of an injection run
#[derive(Debug, Clone)]
pub struct InjectionEntry {
    pub path: PathBuf,
    pub result: Result<InjectOutcome, SkillError>,
}

/// Aggregate result of an injection run
#[derive(Debug, Clone, Default)]
pub struct InjectionSummary {
    pub entries: Vec<InjectionEntry>,
}

impl InjectionSummary {
    /// Number of skill documents found
    pub fn found(&self) -> usize {
        self.entries.len()
    }

    /// Documents that received a banner
    pub fn processed(&self) -> usize {
        self.count(|r| matches!(r, Ok(InjectOutcome::Injected { .. })))
    }

    /// Documents that already had one
    pub fn skipped(&self) -> usize {
        self.count(|r| matches!(r, Ok(InjectOutcome::Skipped)))
    }

    /// Documents that could not be handled
    pub fn errors(&self) -> usize {
        self.count(Result::is_err)
    }

    fn count(&self, pred: impl Fn(&Result<InjectOutcome, SkillError>) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.result)).count()
    }
}

/// Banner injector over a skills directory
pub struct BannerInjector {
    config: InjectorConfig,
}

impl BannerInjector {
    /// Create a new injector
    pub fn new(config: InjectorConfig) -> Self {
        Self { config }
    }

    /// The skills root this injector works on
    pub fn skills_dir(&self) -> &Path {
        &self.config.skills_dir
    }

    /// Ensure a single document carries exactly one banner
    pub async fn inject(&self, path: &Path) -> SkillResult<InjectOutcome> {
        let document = SkillDocument::load(path).await?;

        if document.has_banner() {
            debug!("Banner already exists in {:?}, skipping", path);
            return Ok(InjectOutcome::Skipped);
        }

        let (name, updated) = document.with_banner(self.skills_dir())?;

        if self.config.dry_run {
            info!("Would add activation banner for {} ({:?})", name, path);
        } else {
            tokio::fs::write(path, updated)
                .await
                .map_err(|e| SkillError::io(path, e))?;
            info!("Added activation banner for {} ({:?})", name, path);
        }

        Ok(InjectOutcome::Injected { name })
    }

    /// Process every skill document under the skills root.
    ///
    /// Only a failure to list the root itself is returned as an error.
    pub async fn run(&self) -> SkillResult<InjectionSummary> {
        let paths = find_skill_documents(self.skills_dir()).await?;
        info!(
            "Found {} skill file(s) in {:?}",
            paths.len(),
            self.skills_dir()
        );

        let mut summary = InjectionSummary::default();
        for path in paths {
            let result = self.inject(&path).await;
            if let Err(e) = &result {
                warn!("Failed to process {:?}: {}", path, e);
            }
            summary.entries.push(InjectionEntry { path, result });
        }

        Ok(summary)
    }
}

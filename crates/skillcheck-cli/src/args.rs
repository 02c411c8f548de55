//! CLI argument definitions using clap
//!
//! Two standalone tools share this crate:
//! - add-skill-banners           # Insert activation banners into SKILL.md files
//! - test-skill-activation       # Check the activation hook against a catalog

use clap::Parser;
use std::path::{Path, PathBuf};

/// Skills directory relative to the project root
pub const DEFAULT_SKILLS_DIR: &str = ".claude/skills";

/// Resolve the project root: explicit value, else the current directory
pub fn resolve_project_dir(project_dir: Option<&Path>) -> std::io::Result<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "add-skill-banners")]
#[command(about = "Add an activation banner after the frontmatter of every skill document")]
#[command(version)]
pub struct BannerArgs {
    /// Project root; the skills directory defaults to <project>/.claude/skills
    #[arg(long, env = "CLAUDE_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Skills directory to process
    #[arg(long)]
    pub skills_dir: Option<PathBuf>,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

impl BannerArgs {
    /// Skills directory that will be scanned
    pub fn skills_dir(&self) -> std::io::Result<PathBuf> {
        match &self.skills_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(resolve_project_dir(self.project_dir.as_deref())?.join(DEFAULT_SKILLS_DIR)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "test-skill-activation")]
#[command(about = "Run the skill activation hook over a catalog of prompts and score the result")]
#[command(
    long_about = r#"Run the skill activation hook over a catalog of prompts and score the result

Every prompt is sent to the hook as a JSON record on stdin. Lines of the hook
output that start with "→ <skill-id>" are taken as activated skills.

EXIT STATUS:
  0  no case failed (warnings allowed)
  1  at least one case detected no skill, or the run could not start"#
)]
#[command(version)]
pub struct ActivationArgs {
    /// Project root, exported to the hook as CLAUDE_PROJECT_DIR
    #[arg(long, env = "CLAUDE_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Activation hook; relative paths resolve against the project root
    #[arg(long)]
    pub hook: Option<PathBuf>,

    /// Program used to run the hook (e.g. bash)
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Catalog file (.yaml, .yml or .json) to use instead of the builtin one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only run cases whose domain contains this text (case-insensitive)
    #[arg(long)]
    pub domain: Option<String>,

    /// Per-invocation timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Report format: table or json
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_args_defaults() {
        let args = BannerArgs::try_parse_from(["add-skill-banners", "--project-dir", "/repo"])
            .unwrap();
        assert!(!args.dry_run);
        assert_eq!(
            args.skills_dir().unwrap(),
            PathBuf::from("/repo/.claude/skills")
        );
    }

    #[test]
    fn test_banner_args_explicit_skills_dir() {
        let args = BannerArgs::try_parse_from([
            "add-skill-banners",
            "--skills-dir",
            "/elsewhere/skills",
            "--dry-run",
        ])
        .unwrap();
        assert!(args.dry_run);
        assert_eq!(args.skills_dir().unwrap(), PathBuf::from("/elsewhere/skills"));
    }

    #[test]
    fn test_activation_args() {
        let args = ActivationArgs::try_parse_from([
            "test-skill-activation",
            "--project-dir",
            "/repo",
            "--domain",
            "cloud",
            "--timeout",
            "15",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.project_dir, Some(PathBuf::from("/repo")));
        assert_eq!(args.domain.as_deref(), Some("cloud"));
        assert_eq!(args.timeout, Some(15));
        assert_eq!(args.format, "json");
        assert!(args.verbose);
        assert!(args.hook.is_none());
    }

    #[test]
    fn test_activation_args_reject_bad_timeout() {
        assert!(
            ActivationArgs::try_parse_from(["test-skill-activation", "--timeout", "soon"])
                .is_err()
        );
    }

    #[test]
    fn test_resolve_project_dir_explicit() {
        assert_eq!(
            resolve_project_dir(Some(Path::new("/repo"))).unwrap(),
            PathBuf::from("/repo")
        );
    }
}

//! Hook input types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::SkillResult;

/// Permission mode reported to the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    Default,
    #[default]
    AcceptEdits,
    BypassPermissions,
    Plan,
}

impl PermissionMode {
    /// Parse a permission mode, accepting common spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "acceptedits" | "accept-edits" | "accept_edits" => Some(Self::AcceptEdits),
            "bypasspermissions" | "bypass-permissions" | "bypass_permissions" | "bypass" => {
                Some(Self::BypassPermissions)
            }
            "plan" => Some(Self::Plan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AcceptEdits => "acceptEdits",
            Self::BypassPermissions => "bypassPermissions",
            Self::Plan => "plan",
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record written to the hook's standard input for a user prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookInput {
    pub session_id: String,
    pub prompt: String,
    pub cwd: PathBuf,
    pub permission_mode: PermissionMode,
    pub transcript_path: PathBuf,
}

impl HookInput {
    /// Create a new hook input for a prompt
    pub fn new(session_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            prompt: prompt.into(),
            cwd: PathBuf::from("."),
            permission_mode: PermissionMode::default(),
            transcript_path: PathBuf::from(DEFAULT_TRANSCRIPT_PATH),
        }
    }

    /// Set the current working directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Set the permission mode
    pub fn with_permission_mode(mut self, mode: PermissionMode) -> Self {
        self.permission_mode = mode;
        self
    }

    /// Set the transcript path
    pub fn with_transcript_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.transcript_path = path.into();
        self
    }

    /// Serialize to the single-line JSON record written to the hook
    pub fn to_json(&self) -> SkillResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Placeholder transcript location; the hook never reads it during checks
pub const DEFAULT_TRANSCRIPT_PATH: &str = "/tmp/test";

impl fmt::Display for HookInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session: {}, Mode: {}, Prompt: {:?}",
            self.session_id, self.permission_mode, self.prompt
        )
    }
}

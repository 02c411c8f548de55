//! Activation run configuration

use serde::{Deserialize, Serialize};
use skillcheck_core::hooks::{
    CommandHook, DEFAULT_TRANSCRIPT_PATH, HookInput, PROJECT_DIR_ENV, PermissionMode,
};
use std::path::{Path, PathBuf};

/// Hook script location relative to the project root
pub const DEFAULT_HOOK_PATH: &str = ".claude/hooks/skill-activation-prompt.sh";

/// Configuration for activation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Project root, exported to the hook as `CLAUDE_PROJECT_DIR`
    pub project_dir: PathBuf,

    /// Hook executable; defaults to [`DEFAULT_HOOK_PATH`] under the project
    #[serde(default)]
    pub hook_path: Option<PathBuf>,

    /// Program used to run the hook (e.g. `bash`); the hook is executed
    /// directly when unset
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Working directory reported to the hook; the process cwd when unset
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    #[serde(default = "default_session_id")]
    pub session_id: String,

    #[serde(default)]
    pub permission_mode: PermissionMode,

    #[serde(default = "default_transcript_path")]
    pub transcript_path: PathBuf,

    /// Per-invocation timeout; none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_session_id() -> String {
    "test-session".to_string()
}

fn default_transcript_path() -> PathBuf {
    PathBuf::from(DEFAULT_TRANSCRIPT_PATH)
}

impl ActivationConfig {
    /// Create a config for the given project root
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            hook_path: None,
            interpreter: None,
            cwd: None,
            session_id: default_session_id(),
            permission_mode: PermissionMode::default(),
            transcript_path: default_transcript_path(),
            timeout_secs: None,
        }
    }

    /// Set the hook executable
    pub fn with_hook_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.hook_path = Some(path.into());
        self
    }

    /// Run the hook through an interpreter
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    /// Set the working directory reported to the hook
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the per-invocation timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the session identifier sent to the hook
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Get the hook path that will actually be run
    pub fn effective_hook_path(&self) -> PathBuf {
        match &self.hook_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.project_dir.join(path),
            None => self.project_dir.join(DEFAULT_HOOK_PATH),
        }
    }

    /// Build the command used for every invocation
    pub fn command_hook(&self) -> CommandHook {
        let hook_path = self.effective_hook_path();
        let mut hook = match &self.interpreter {
            Some(interpreter) => {
                CommandHook::new(interpreter).with_arg(hook_path.to_string_lossy())
            }
            None => CommandHook::new(hook_path),
        };

        hook = hook.with_env(PROJECT_DIR_ENV, self.project_dir.to_string_lossy());
        if let Some(secs) = self.timeout_secs {
            hook = hook.with_timeout(secs);
        }
        hook
    }

    /// Build the stdin record for a prompt
    pub fn hook_input(&self, prompt: &str, cwd: &Path) -> HookInput {
        HookInput::new(&self.session_id, prompt)
            .with_cwd(self.cwd.as_deref().unwrap_or(cwd))
            .with_permission_mode(self.permission_mode)
            .with_transcript_path(&self.transcript_path)
    }
}

//! Hook execution
//!
//! Spawns a [`CommandHook`], writes the serialized [`HookInput`] to its
//! standard input and captures what it prints. Nothing here is treated as a
//! hard failure: a crashed or missing hook still produces a result whose
//! captured stdout (possibly empty) callers can inspect.

use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::command_hook::CommandHook;
use super::hook_input::HookInput;
use crate::error::{SkillError, SkillResult};

/// Hook execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookExecutionResult {
    /// Hook exited with status zero
    Success { stdout: String },

    /// Hook exited with a non-zero status
    Failed {
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    /// Hook could not be run at all
    Error(String),

    /// Hook execution timed out
    Timeout,
}

impl HookExecutionResult {
    /// Check if the hook exited cleanly
    pub fn is_success(&self) -> bool {
        matches!(self, HookExecutionResult::Success { .. })
    }

    /// Captured standard output, empty when nothing was captured
    pub fn stdout(&self) -> &str {
        match self {
            HookExecutionResult::Success { stdout } | HookExecutionResult::Failed { stdout, .. } => {
                stdout
            }
            HookExecutionResult::Error(_) | HookExecutionResult::Timeout => "",
        }
    }

    /// Consume the result, keeping only the captured standard output
    pub fn into_stdout(self) -> String {
        match self {
            HookExecutionResult::Success { stdout } | HookExecutionResult::Failed { stdout, .. } => {
                stdout
            }
            HookExecutionResult::Error(_) | HookExecutionResult::Timeout => String::new(),
        }
    }

    /// Get a diagnostic message, if any
    pub fn message(&self) -> Option<String> {
        match self {
            HookExecutionResult::Success { .. } => None,
            HookExecutionResult::Failed {
                stderr, exit_code, ..
            } => Some(if stderr.trim().is_empty() {
                format!("Command failed with exit code: {:?}", exit_code)
            } else {
                stderr.trim().to_string()
            }),
            HookExecutionResult::Error(msg) => Some(msg.clone()),
            HookExecutionResult::Timeout => Some("Hook execution timed out".to_string()),
        }
    }
}

/// Hook executor
#[derive(Debug, Default, Clone, Copy)]
pub struct HookExecutor;

impl HookExecutor {
    /// Create a new hook executor
    pub fn new() -> Self {
        Self
    }

    /// Run a hook once with the given input
    pub async fn execute(&self, hook: &CommandHook, input: &HookInput) -> HookExecutionResult {
        let result = match hook.timeout() {
            Some(limit) => match timeout(limit, self.run_command(hook, input)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Command hook timed out after {:?}: {}", limit, hook);
                    HookExecutionResult::Timeout
                }
            },
            None => self.run_command(hook, input).await,
        };

        match &result {
            HookExecutionResult::Success { .. } => debug!("Hook succeeded: {}", hook),
            other => debug!(
                "Hook did not succeed: {}: {}",
                hook,
                other.message().unwrap_or_default()
            ),
        }

        result
    }

    /// Start the hook process with piped standard streams
    fn spawn(&self, hook: &CommandHook) -> SkillResult<Child> {
        let mut cmd = Command::new(&hook.program);
        cmd.args(&hook.args)
            .envs(&hook.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out hook is dropped mid-wait; make sure it dies with us
            .kill_on_drop(true);

        if let Some(dir) = &hook.working_dir {
            cmd.current_dir(dir);
        }

        cmd.spawn().map_err(|e| {
            SkillError::hook(format!(
                "Failed to spawn {}: {}",
                hook.program.display(),
                e
            ))
        })
    }

    /// Run the actual command
    async fn run_command(&self, hook: &CommandHook, input: &HookInput) -> HookExecutionResult {
        let input_json = match input.to_json() {
            Ok(json) => json,
            Err(e) => return HookExecutionResult::Error(e.to_string()),
        };

        let mut child = match self.spawn(hook) {
            Ok(child) => child,
            Err(e) => return HookExecutionResult::Error(e.to_string()),
        };

        // Feed stdin while the child runs so a chatty hook cannot fill its
        // stdout pipe and stall before reading its input
        let stdin_handle = child.stdin.take();
        let write_input = async move {
            match stdin_handle {
                Some(mut stdin) => {
                    let written = stdin.write_all(input_json.as_bytes()).await;
                    drop(stdin);
                    written
                }
                None => Ok(()),
            }
        };

        let (written, output) = tokio::join!(write_input, child.wait_with_output());

        if let Err(e) = written {
            // The hook may legitimately exit without reading its input
            debug!("Could not write hook input: {}", e);
        }

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                if output.status.success() {
                    HookExecutionResult::Success { stdout }
                } else {
                    HookExecutionResult::Failed {
                        stdout,
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                        exit_code: output.status.code(),
                    }
                }
            }
            Err(e) => HookExecutionResult::Error(format!("Failed to wait for command: {}", e)),
        }
    }
}

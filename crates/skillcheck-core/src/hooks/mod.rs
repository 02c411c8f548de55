//! Skill-activation hook invocation
//!
//! The activation hook is an external executable: it reads a JSON record
//! describing the user prompt on standard input and prints the skills it
//! thinks apply. This module only knows how to run it.
//!
//! ```rust,ignore
//! use skillcheck_core::hooks::{CommandHook, HookExecutor, HookInput};
//!
//! let hook = CommandHook::new(".claude/hooks/skill-activation-prompt.sh")
//!     .with_env(PROJECT_DIR_ENV, "/path/to/project");
//! let input = HookInput::new("test-session", "Add Sentry to my service");
//! let result = HookExecutor::new().execute(&hook, &input).await;
//! println!("{}", result.stdout());
//! ```

pub mod command_hook;
pub mod executor;
pub mod hook_input;

/// Environment variable that tells the hook where the project lives
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

pub use command_hook::CommandHook;
pub use executor::{HookExecutionResult, HookExecutor};
pub use hook_input::{DEFAULT_TRANSCRIPT_PATH, HookInput, PermissionMode};

//! Skill matcher abstraction
//!
//! The harness only needs one capability from the activation system: given a
//! prompt, return whatever text it prints. [`HookMatcher`] provides it by
//! running the real hook; tests substitute their own implementation.

use async_trait::async_trait;
use skillcheck_core::hooks::{CommandHook, HookExecutionResult, HookExecutor};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::ActivationConfig;

/// Something that turns a prompt into activation output
#[async_trait]
pub trait SkillMatcher: Send + Sync {
    /// Raw output for a prompt; empty when nothing could be captured
    async fn classify(&self, prompt: &str) -> String;
}

/// Matcher backed by the external activation hook
pub struct HookMatcher {
    config: ActivationConfig,
    hook: CommandHook,
    cwd: PathBuf,
    executor: HookExecutor,
}

impl HookMatcher {
    /// Create a matcher from an activation config
    pub fn new(config: ActivationConfig) -> Self {
        let hook = config.command_hook();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            config,
            hook,
            cwd,
            executor: HookExecutor::new(),
        }
    }

    /// The command run for every prompt
    pub fn hook(&self) -> &CommandHook {
        &self.hook
    }

    /// Run the hook and keep the full execution result
    pub async fn invoke(&self, prompt: &str) -> HookExecutionResult {
        let input = self.config.hook_input(prompt, &self.cwd);
        debug!("Invoking activation hook: {}", input);
        self.executor.execute(&self.hook, &input).await
    }
}

#[async_trait]
impl SkillMatcher for HookMatcher {
    async fn classify(&self, prompt: &str) -> String {
        let result = self.invoke(prompt).await;
        if let Some(message) = result.message() {
            // Whatever was printed before the failure is still used
            warn!("Activation hook did not exit cleanly: {}", message);
        }
        result.into_stdout()
    }
}

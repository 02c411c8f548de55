//! Activation runner components
//!
//! This module drives the activation hook over a catalog of cases.

mod config;
mod executor;
mod matcher;
mod output;

pub use config::{ActivationConfig, DEFAULT_HOOK_PATH};
pub use executor::{ActivationExecutor, ActivationProgress, ProgressCallback};
pub use matcher::{HookMatcher, SkillMatcher};
pub use output::{ACTIVATION_MARKER, parse_activated_skills};

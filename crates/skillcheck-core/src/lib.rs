//! Core library for skillcheck
//!
//! Two independent concerns live here:
//!
//! - [`skills`]: reading `SKILL.md` documents, deriving their display name and
//!   injecting the activation banner after the frontmatter block.
//! - [`hooks`]: invoking the external skill-activation hook with a JSON record
//!   on standard input and collecting what it prints.

pub mod error;
pub mod hooks;
pub mod skills;

pub use error::{SkillError, SkillResult};

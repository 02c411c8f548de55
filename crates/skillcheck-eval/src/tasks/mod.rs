//! Activation cases and catalogs
//!
//! This module provides the case type, the builtin catalog and file loading.

mod case;
mod catalog;
mod loader;

pub use case::{ActivationCase, join_skills};
pub use catalog::Catalog;
pub use loader::CaseLoader;

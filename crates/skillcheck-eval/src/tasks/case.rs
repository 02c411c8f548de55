//! Activation case definition

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A prompt and the skills the activation hook should pick for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCase {
    /// Category label, informational only
    pub domain: String,

    /// Text sent to the hook as the user prompt
    pub prompt: String,

    /// Skills that count as a correct activation (at least one)
    pub expected_skills: BTreeSet<String>,

    /// Short human label
    pub description: String,
}

impl ActivationCase {
    /// Create a new activation case
    pub fn new<I, S>(
        domain: impl Into<String>,
        prompt: impl Into<String>,
        expected_skills: I,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into(),
            prompt: prompt.into(),
            expected_skills: expected_skills.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    /// Check the case invariants
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            bail!("Case '{}' has an empty prompt", self.description);
        }
        if self.expected_skills.is_empty() {
            bail!(
                "Case '{}' ({}) has no expected skills",
                self.description,
                self.domain
            );
        }
        Ok(())
    }

    /// Expected skills joined for display
    pub fn expected_display(&self) -> String {
        join_skills(&self.expected_skills)
    }
}

/// Join a skill set with `", "`, or `"none"` when empty
pub fn join_skills(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

//! Ordered, validated collections of activation cases

use anyhow::{Context, Result};

use super::ActivationCase;

/// Builtin cases, one per prompt the skill rules are expected to handle
const BUILTIN_CATALOG: &str = include_str!("../../catalog/builtin.yaml");

/// An ordered list of activation cases.
///
/// Every case has been validated, so each one carries at least one expected
/// skill. The list is not modified once built; filters return a new catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cases: Vec<ActivationCase>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid cases
    pub fn new(cases: Vec<ActivationCase>) -> Result<Self> {
        for (index, case) in cases.iter().enumerate() {
            case.validate()
                .with_context(|| format!("Invalid activation case #{}", index + 1))?;
        }
        Ok(Self { cases })
    }

    /// The builtin catalog
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG).context("Failed to parse builtin catalog")
    }

    /// Parse a catalog from a YAML list of cases
    pub fn from_yaml(content: &str) -> Result<Self> {
        let cases: Vec<ActivationCase> = serde_yaml::from_str(content)?;
        Self::new(cases)
    }

    /// Parse a catalog from a JSON array of cases
    pub fn from_json(content: &str) -> Result<Self> {
        let cases: Vec<ActivationCase> = serde_json::from_str(content)?;
        Self::new(cases)
    }

    /// Keep only cases whose domain contains `needle`, ignoring case
    pub fn filter_domain(&self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        Self {
            cases: self
                .cases
                .iter()
                .filter(|c| c.domain.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        }
    }

    pub fn cases(&self) -> &[ActivationCase] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivationCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ActivationCase;
    type IntoIter = std::slice::Iter<'a, ActivationCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 49);
        assert!(catalog.iter().all(|c| !c.expected_skills.is_empty()));

        let first = &catalog.cases()[0];
        assert_eq!(first.domain, "Backend Development");
        assert_eq!(first.description, "API endpoint creation");
    }

    #[test]
    fn test_builtin_contains_sentry_case() {
        let catalog = Catalog::builtin().unwrap();
        let sentry = catalog
            .iter()
            .find(|c| c.prompt == "I need to add Sentry error tracking to my service")
            .unwrap();
        assert!(sentry.expected_skills.contains("error-tracking"));
        assert!(sentry.expected_skills.contains("backend-dev-guidelines"));
        assert_eq!(sentry.expected_skills.len(), 2);
    }

    #[test]
    fn test_builtin_secure_production_has_three_skills() {
        let catalog = Catalog::builtin().unwrap();
        let case = catalog
            .iter()
            .find(|c| c.description == "Secure production deployment")
            .unwrap();
        assert_eq!(case.expected_skills.len(), 3);
    }

    #[test]
    fn test_new_rejects_empty_expected() {
        let cases = vec![
            ActivationCase::new("A", "ok", ["a"], "fine"),
            ActivationCase::new("B", "bad", Vec::<String>::new(), "broken"),
        ];
        let err = Catalog::new(cases).unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_filter_domain() {
        let catalog = Catalog::builtin().unwrap();
        let cloud = catalog.filter_domain("cloud");
        // "Cloud Engineering" (4), "Cloud Migration" (1), "Compliance & Cloud" (1)
        assert_eq!(cloud.len(), 6);
        assert!(catalog.filter_domain("no such domain").is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"domain":"D","prompt":"p","expected_skills":["x"],"description":"d"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}

//! The ordered set of department policies a run evaluates.

use tracing::info;

use crate::config::{ENABLED_POLICIES_VAR, WatchConfig};
use crate::error::{ConfigError, RuleError};
use crate::policy::departments::DEFAULT_TABLES;
use crate::policy::engine::{Policy, SectionExclusion};
use crate::policy::rules::{RuleSet, RuleTable};

/// Static, ordered, named collection of policies.
///
/// Order only affects iteration and display; each policy evaluates
/// independently.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    policies: Vec<Policy>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of all shipped department tables.
    pub fn default_policies(threshold: u32) -> Result<Self, RuleError> {
        Self::from_tables(DEFAULT_TABLES, threshold)
    }

    /// Shipped departments with the configured threshold, narrowed to the
    /// enabled subset if one is configured.
    pub fn from_config(config: &WatchConfig) -> crate::error::Result<Self> {
        let mut registry = Self::default_policies(config.relevance_threshold)?;
        if let Some(enabled) = &config.enabled_policies {
            if let Some(unknown) = enabled.iter().find(|n| registry.get(n).is_none()) {
                return Err(ConfigError::InvalidValue {
                    key: ENABLED_POLICIES_VAR.to_string(),
                    message: format!("no policy named {unknown:?}"),
                }
                .into());
            }
            registry.retain_named(enabled);
        }
        Ok(registry)
    }

    /// Compile the given tables, in order, with a shared threshold and the
    /// announcements exclusion.
    pub fn from_tables(tables: &[RuleTable], threshold: u32) -> Result<Self, RuleError> {
        let mut registry = Self::new();
        for table in tables {
            let rules = RuleSet::compile(table, threshold)?;
            registry.register(Policy::with_exclusion(rules, SectionExclusion::announcements()))?;
        }
        info!(
            policies = registry.len(),
            threshold, "Policy registry built"
        );
        Ok(registry)
    }

    /// Append a policy. Names must be unique.
    pub fn register(&mut self, policy: Policy) -> Result<(), RuleError> {
        if self.get(policy.name()).is_some() {
            return Err(RuleError::DuplicatePolicy {
                name: policy.name().to_string(),
            });
        }
        self.policies.push(policy);
        Ok(())
    }

    /// Keep only the named policies, preserving registry order.
    pub fn retain_named<S: AsRef<str>>(&mut self, names: &[S]) {
        self.policies
            .retain(|p| names.iter().any(|n| n.as_ref() == p.name()));
    }

    /// Active policies in iteration order.
    pub fn list_active_policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn get(&self, name: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.policies.iter().map(Policy::name).collect()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::departments::ISG;
    use crate::policy::rules::DEFAULT_RELEVANCE_THRESHOLD;

    #[test]
    fn default_registry_order() {
        let registry = PolicyRegistry::default_policies(DEFAULT_RELEVANCE_THRESHOLD).unwrap();
        assert_eq!(registry.names(), vec!["isg", "ik", "muhasebe", "lojistik"]);
        assert_eq!(registry.list_active_policies().len(), 4);
    }

    #[test]
    fn threshold_flows_into_every_policy() {
        let registry = PolicyRegistry::default_policies(25).unwrap();
        assert!(
            registry
                .list_active_policies()
                .iter()
                .all(|p| p.rules().threshold() == 25)
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = PolicyRegistry::from_tables(&[ISG, ISG], DEFAULT_RELEVANCE_THRESHOLD).unwrap_err();
        assert!(matches!(err, RuleError::DuplicatePolicy { name } if name == "isg"));
    }

    #[test]
    fn added_department_needs_only_a_table() {
        const QUALITY: RuleTable = RuleTable {
            name: "kalite",
            high: &[r"\bstandardizasyon\b", r"\bTSE\b"],
            mid: &[r"\btebliğ\b"],
        };
        let registry =
            PolicyRegistry::from_tables(&[ISG, QUALITY], DEFAULT_RELEVANCE_THRESHOLD).unwrap();
        assert_eq!(registry.names(), vec!["isg", "kalite"]);
        assert!(registry.get("kalite").is_some());
    }

    #[test]
    fn retain_named_keeps_registry_order() {
        let mut registry = PolicyRegistry::default_policies(DEFAULT_RELEVANCE_THRESHOLD).unwrap();
        registry.retain_named(&["lojistik", "isg"]);
        assert_eq!(registry.names(), vec!["isg", "lojistik"]);
    }

    #[test]
    fn from_config_applies_threshold_and_subset() {
        let config = WatchConfig {
            relevance_threshold: 3,
            enabled_policies: Some(vec!["muhasebe".into()]),
            ..WatchConfig::default()
        };
        let registry = PolicyRegistry::from_config(&config).unwrap();
        assert_eq!(registry.names(), vec!["muhasebe"]);
        assert_eq!(registry.list_active_policies()[0].rules().threshold(), 3);
    }

    #[test]
    fn from_config_rejects_unknown_policy() {
        let config = WatchConfig {
            enabled_policies: Some(vec!["hukuk".into()]),
            ..WatchConfig::default()
        };
        let err = PolicyRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }

    #[test]
    fn unknown_name_from_env_is_rejected_by_registry() {
        let config = WatchConfig::from_lookup(
            |key| (key == ENABLED_POLICIES_VAR).then(|| "isg,hukuk".to_string()),
            &["isg", "ik", "muhasebe", "lojistik"],
        )
        .unwrap();
        let err = PolicyRegistry::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue { ref key, ref message })
                if key == ENABLED_POLICIES_VAR && message.contains("hukuk")
        ));
    }

    #[test]
    fn empty_registry() {
        let registry = PolicyRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("isg").is_none());
    }
}

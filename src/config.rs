//! Configuration types.
//!
//! Everything is read once at startup and passed explicitly into pipeline
//! assembly. Policy evaluation never reads configuration on its own.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::policy::DEFAULT_RELEVANCE_THRESHOLD;
use crate::policy::departments::DEFAULT_TABLES;

/// Env var overriding the relevance threshold.
pub const THRESHOLD_VAR: &str = "GAZETTE_RELEVANCE_THRESHOLD";

/// Env var restricting the run to a subset of departments.
pub const ENABLED_POLICIES_VAR: &str = "GAZETTE_ENABLED_POLICIES";

/// Run configuration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Minimum score for an item to be relevant.
    pub relevance_threshold: u32,
    /// Department name → recipient addresses.
    pub recipients: BTreeMap<String, Vec<String>>,
    /// Departments to run; `None` runs all of them.
    pub enabled_policies: Option<Vec<String>>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            recipients: BTreeMap::new(),
            enabled_policies: None,
        }
    }
}

impl WatchConfig {
    /// Build config from environment variables for the shipped departments.
    pub fn from_env() -> Result<Self, ConfigError> {
        let departments: Vec<&str> = DEFAULT_TABLES.iter().map(|t| t.name).collect();
        Self::from_lookup(|key| std::env::var(key).ok(), &departments)
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Recipients are read from `<DEPARTMENT>_RECIPIENTS` for each name in
    /// `departments`. Enabled names are not checked here; the registry
    /// rejects names it has no policy for.
    pub fn from_lookup<F>(lookup: F, departments: &[&str]) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relevance_threshold = match lookup(THRESHOLD_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: THRESHOLD_VAR.to_string(),
                    message: format!("{raw:?} is not a non-negative integer: {e}"),
                })?,
            None => DEFAULT_RELEVANCE_THRESHOLD,
        };

        let recipients = departments
            .iter()
            .map(|dept| {
                let raw = lookup(&recipients_var(dept)).unwrap_or_default();
                (dept.to_string(), split_list(&raw))
            })
            .collect();

        let enabled_policies = match lookup(ENABLED_POLICIES_VAR) {
            Some(raw) => {
                let names = split_list(&raw);
                if names.is_empty() {
                    return Err(ConfigError::MissingRequired {
                        key: ENABLED_POLICIES_VAR.to_string(),
                        hint: "Unset it to run every department".into(),
                    });
                }
                Some(names)
            }
            None => None,
        };

        Ok(Self {
            relevance_threshold,
            recipients,
            enabled_policies,
        })
    }

    /// Recipients for a department; empty when none are configured.
    pub fn recipients_for(&self, department: &str) -> &[String] {
        self.recipients
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// `isg` → `ISG_RECIPIENTS`.
pub fn recipients_var(department: &str) -> String {
    format!("{}_RECIPIENTS", department.to_uppercase())
}

/// Comma-separated list, trimmed, empties dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

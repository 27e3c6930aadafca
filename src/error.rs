//! Error types for gazette-watch.
//!
//! Evaluating an item never fails. Errors only come from compiling rule
//! tables, reading configuration, and loading items.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Item source error: {0}")]
    Source(#[from] SourceError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Rule table compilation errors.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule set {rule_set} has invalid pattern {pattern}: {reason}")]
    InvalidPattern {
        rule_set: String,
        pattern: String,
        reason: String,
    },

    #[error("Rule set {name} has no patterns")]
    EmptyRuleSet { name: String },

    #[error("Policy {name} registered twice")]
    DuplicatePolicy { name: String },
}

/// Errors from the input boundary (loading raw items).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid item payload: {reason}")]
    Invalid { reason: String },
}

/// Result type alias for gazette-watch.
pub type Result<T> = std::result::Result<T, Error>;

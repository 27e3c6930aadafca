//! Department relevance policies.
//!
//! Department behavior is data: a [`RuleTable`] per department compiled into
//! a [`RuleSet`], evaluated by one generic [`Policy::evaluate`]. No
//! per-department code paths exist.

pub mod departments;
pub mod engine;
pub mod registry;
pub mod rules;
pub mod text;

pub use engine::{Decision, Policy, SectionExclusion};
pub use registry::PolicyRegistry;
pub use rules::{DEFAULT_RELEVANCE_THRESHOLD, RuleSet, RuleTable, ScoreTrace, Tier};

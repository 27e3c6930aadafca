//! Gazette Watch: department relevance scoring for official gazette items.

pub mod config;
pub mod error;
pub mod gazette;
pub mod pipeline;
pub mod policy;

//! Output boundary toward the notification collaborator.
//!
//! The core only decides who should hear about what. Building and sending
//! the actual email is the collaborator's job.

use serde::Serialize;
use tracing::warn;

use crate::config::WatchConfig;
use crate::gazette::GazetteItem;
use crate::pipeline::runner::PolicyRun;

/// Relevant items for one department, with its recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub department: String,
    pub recipients: Vec<String>,
    pub items: Vec<GazetteItem>,
}

impl Dispatch {
    /// Has hits but nobody to send them to.
    pub fn undeliverable(&self) -> bool {
        self.recipients.is_empty()
    }
}

/// One dispatch per department with at least one hit, in run order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchPlan {
    pub dispatches: Vec<Dispatch>,
}

impl DispatchPlan {
    pub fn build(runs: &[PolicyRun], config: &WatchConfig) -> Self {
        let dispatches = runs
            .iter()
            .filter_map(|run| {
                let items: Vec<GazetteItem> = run.hits().map(|e| e.item.clone()).collect();
                if items.is_empty() {
                    return None;
                }
                let recipients = config.recipients_for(&run.policy).to_vec();
                if recipients.is_empty() {
                    warn!(
                        department = %run.policy,
                        hits = items.len(),
                        "No recipients configured for department with hits"
                    );
                }
                Some(Dispatch {
                    department: run.policy.clone(),
                    recipients,
                    items,
                })
            })
            .collect();
        Self { dispatches }
    }

    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    /// Dispatches that can actually be delivered.
    pub fn deliverable(&self) -> impl Iterator<Item = &Dispatch> {
        self.dispatches.iter().filter(|d| !d.undeliverable())
    }
}

//! Run summary: what was evaluated, what fired, and where items landed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::gazette::GazetteItem;
use crate::pipeline::runner::PolicyRun;

/// Label for items without a section or subsection.
pub const EMPTY_LABEL: &str = "(empty)";

/// Hit and total counts for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyTally {
    pub policy: String,
    pub hits: usize,
    pub total: usize,
}

/// A label with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub key: String,
    pub count: usize,
}

/// Which departments found an item relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    /// `title|url`, for joining rows across runs.
    pub identity: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    /// Sorted by name.
    pub matched_policies: Vec<String>,
    pub match_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub item_count: usize,
    pub policies: Vec<PolicyTally>,
    /// Most frequent first; ties by reason text.
    pub reasons: Vec<Count>,
    pub sections: Vec<Count>,
    pub subsections: Vec<Count>,
    /// Most matched items first; ties keep input order.
    pub matrix: Vec<MatrixRow>,
}

impl RunSummary {
    /// `runs` must come from evaluating exactly `items`.
    pub fn from_runs(items: &[GazetteItem], runs: &[PolicyRun]) -> Self {
        let policies = runs
            .iter()
            .map(|run| PolicyTally {
                policy: run.policy.clone(),
                hits: run.hit_count(),
                total: run.evaluations.len(),
            })
            .collect();

        let reasons = most_common(
            runs.iter()
                .flat_map(|run| &run.evaluations)
                .flat_map(|e| e.decision.reasons.iter().map(String::as_str)),
        );

        let sections = most_common(
            items
                .iter()
                .map(|i| i.section.as_deref().unwrap_or(EMPTY_LABEL)),
        );
        let subsections = most_common(
            items
                .iter()
                .map(|i| i.subsection.as_deref().unwrap_or(EMPTY_LABEL)),
        );

        let mut matched: Vec<Vec<String>> = vec![Vec::new(); items.len()];
        for run in runs {
            for (idx, evaluation) in run.evaluations.iter().enumerate() {
                if !evaluation.decision.is_relevant {
                    continue;
                }
                if let Some(slot) = matched.get_mut(idx) {
                    slot.push(run.policy.clone());
                }
            }
        }

        let mut matrix: Vec<MatrixRow> = items
            .iter()
            .zip(matched)
            .map(|(item, mut policies)| {
                policies.sort();
                MatrixRow {
                    identity: item.identity(),
                    title: item.title.clone(),
                    url: item.url.clone(),
                    section: item.section.clone(),
                    subsection: item.subsection.clone(),
                    match_count: policies.len(),
                    matched_policies: policies,
                }
            })
            .collect();
        matrix.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        Self {
            item_count: items.len(),
            policies,
            reasons,
            sections,
            subsections,
            matrix,
        }
    }

    pub fn total_hits(&self) -> usize {
        self.policies.iter().map(|p| p.hits).sum()
    }
}

fn most_common<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<Count> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut out: Vec<Count> = counts
        .into_iter()
        .map(|(key, count)| Count {
            key: key.to_string(),
            count,
        })
        .collect();
    // stable: equal counts stay in key order
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

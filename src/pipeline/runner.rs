//! Evaluates every active policy over every item.
//!
//! Sequential and deterministic: the same items in the same order always
//! produce the same runs in the same order.

use serde::Serialize;
use tracing::info;

use crate::gazette::GazetteItem;
use crate::policy::{Decision, Policy, PolicyRegistry};

/// One item's decision under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub item: GazetteItem,
    pub decision: Decision,
}

/// All evaluations for one department, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyRun {
    pub policy: String,
    pub evaluations: Vec<Evaluation>,
}

impl PolicyRun {
    /// Evaluate `items` under a single policy.
    pub fn evaluate(policy: &Policy, items: &[GazetteItem]) -> Self {
        let evaluations = items
            .iter()
            .map(|item| Evaluation {
                item: item.clone(),
                decision: policy.evaluate(item),
            })
            .collect();
        Self {
            policy: policy.name().to_string(),
            evaluations,
        }
    }

    /// Relevant evaluations only.
    pub fn hits(&self) -> impl Iterator<Item = &Evaluation> {
        self.evaluations.iter().filter(|e| e.decision.is_relevant)
    }

    pub fn hit_count(&self) -> usize {
        self.hits().count()
    }

    /// Copy of this run with non-relevant evaluations dropped.
    pub fn only_hits(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            evaluations: self.hits().cloned().collect(),
        }
    }
}

/// Run every registered policy over `items`, in registry order.
pub fn run_policies(registry: &PolicyRegistry, items: &[GazetteItem]) -> Vec<PolicyRun> {
    registry
        .list_active_policies()
        .iter()
        .map(|policy| {
            let run = PolicyRun::evaluate(policy, items);
            info!(
                policy = %run.policy,
                hits = run.hit_count(),
                total = run.evaluations.len(),
                "Policy evaluated"
            );
            run
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_RELEVANCE_THRESHOLD;

    fn registry() -> PolicyRegistry {
        PolicyRegistry::default_policies(DEFAULT_RELEVANCE_THRESHOLD).unwrap()
    }

    fn items() -> Vec<GazetteItem> {
        vec![
            GazetteItem::new("İş Sağlığı ve Güvenliği Hizmetleri Yönetmeliği", "https://x/1")
                .with_section("YÜRÜTME VE İDARE BÖLÜMÜ")
                .with_subsection("YÖNETMELİKLER"),
            GazetteItem::new("Gümrük Genel Tebliği (Seri No: 12)", "https://x/2")
                .with_section("YÜRÜTME VE İDARE BÖLÜMÜ")
                .with_subsection("TEBLİĞLER"),
            GazetteItem::new("Vergi Borcu İhalesi", "https://x/3").with_section("İLAN BÖLÜMÜ"),
        ]
    }

    #[test]
    fn one_run_per_policy_in_registry_order() {
        let runs = run_policies(&registry(), &items());
        let names: Vec<&str> = runs.iter().map(|r| r.policy.as_str()).collect();
        assert_eq!(names, vec!["isg", "ik", "muhasebe", "lojistik"]);
        assert!(runs.iter().all(|r| r.evaluations.len() == 3));
    }

    #[test]
    fn evaluations_keep_item_order() {
        let runs = run_policies(&registry(), &items());
        let urls: Vec<&str> = runs[0]
            .evaluations
            .iter()
            .map(|e| e.item.url.as_str())
            .collect();
        assert_eq!(urls, vec!["https://x/1", "https://x/2", "https://x/3"]);
    }

    #[test]
    fn hits_per_department() {
        let runs = run_policies(&registry(), &items());
        let hits: Vec<usize> = runs.iter().map(PolicyRun::hit_count).collect();
        // isg: item 1; ik: none; muhasebe: item 3 is an announcement; lojistik: item 2
        assert_eq!(hits, vec![1, 0, 0, 1]);
    }

    #[test]
    fn empty_input_produces_no_decisions() {
        let runs = run_policies(&registry(), &[]);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.evaluations.is_empty()));
    }

    #[test]
    fn only_hits_filters_evaluations() {
        let runs = run_policies(&registry(), &items());
        let lojistik = runs[3].only_hits();
        assert_eq!(lojistik.evaluations.len(), 1);
        assert_eq!(lojistik.evaluations[0].item.url, "https://x/2");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let registry = registry();
        let first = run_policies(&registry, &items());
        let second = run_policies(&registry, &items());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.evaluations, b.evaluations);
        }
    }
}

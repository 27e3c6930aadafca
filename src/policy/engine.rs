//! Per-department evaluation of a single item.
//!
//! 1. Section exclusion: announcement-section items are never relevant
//! 2. Haystack: section, subsection, title
//! 3. Scoring with the department's rule set
//! 4. Threshold

use serde::Serialize;
use tracing::debug;

use crate::gazette::GazetteItem;
use crate::policy::rules::RuleSet;
use crate::policy::text::normalize;

/// Prefix of the single reason on an excluded decision.
pub const SECTION_EXCLUDED_PREFIX: &str = "section_excluded";

/// Classification of one item under one department's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub is_relevant: bool,
    pub score: u32,
    /// Rules that fired, high tier first. Exactly one `section_excluded`
    /// entry when the exclusion rule applied.
    pub reasons: Vec<String>,
}

impl Decision {
    fn excluded(label: &str) -> Self {
        Self {
            is_relevant: false,
            score: 0,
            reasons: vec![format!("{SECTION_EXCLUDED_PREFIX}: {label}")],
        }
    }

    /// Whether this decision came from the section exclusion rule.
    pub fn is_section_excluded(&self) -> bool {
        self.reasons
            .first()
            .is_some_and(|r| r.starts_with(SECTION_EXCLUDED_PREFIX))
    }
}

/// Hard rule that drops items from the gazette's announcements section.
///
/// The check is containment, not equality: any section whose normalized text
/// contains a marker is excluded.
#[derive(Debug, Clone)]
pub struct SectionExclusion {
    markers: Vec<String>,
    label: String,
}

impl SectionExclusion {
    pub fn new<S: AsRef<str>>(markers: &[S], label: impl Into<String>) -> Self {
        Self {
            markers: markers
                .iter()
                .map(|m| normalize(m.as_ref()))
                .filter(|m| !m.is_empty())
                .collect(),
            label: label.into(),
        }
    }

    /// The announcements section ("İLAN BÖLÜMÜ"), plus its English
    /// rendering for translated feeds.
    pub fn announcements() -> Self {
        Self::new(&["İLAN", "ANNOUNCEMENTS"], "İLAN BÖLÜMÜ")
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, section: Option<&str>) -> bool {
        let Some(section) = section else {
            return false;
        };
        let normalized = normalize(section);
        self.markers.iter().any(|m| normalized.contains(m.as_str()))
    }
}

impl Default for SectionExclusion {
    fn default() -> Self {
        Self::announcements()
    }
}

/// One department's policy: a name, a rule set and the shared exclusion.
///
/// Stateless; `evaluate` is a pure function of the item.
#[derive(Debug, Clone)]
pub struct Policy {
    name: String,
    rules: RuleSet,
    exclusion: SectionExclusion,
}

impl Policy {
    /// Policy named after its rule set, with the default exclusion.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_exclusion(rules, SectionExclusion::default())
    }

    pub fn with_exclusion(rules: RuleSet, exclusion: SectionExclusion) -> Self {
        Self {
            name: rules.name().to_string(),
            rules,
            exclusion,
        }
    }

    /// Department identifier; also the recipient mapping key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a single item for this department.
    pub fn evaluate(&self, item: &GazetteItem) -> Decision {
        if self.exclusion.matches(item.section.as_deref()) {
            debug!(
                policy = %self.name,
                title = %item.title,
                "Item excluded by section"
            );
            return Decision::excluded(self.exclusion.label());
        }

        let trace = self.rules.score(&item.haystack());
        let is_relevant = trace.score >= self.rules.threshold();

        if is_relevant {
            debug!(
                policy = %self.name,
                title = %item.title,
                score = trace.score,
                "Item relevant"
            );
        }

        Decision {
            is_relevant,
            score: trace.score,
            reasons: trace.reasons,
        }
    }
}

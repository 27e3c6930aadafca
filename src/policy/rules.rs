//! Weighted pattern tables and the shared matcher.
//!
//! A rule set is two ordered tiers of case-insensitive regexes. Each pattern
//! that matches adds its tier weight once, no matter how often it occurs,
//! and leaves a `high:<pattern>` or `mid:<pattern>` reason behind. High-tier
//! reasons always precede mid-tier ones.

use regex::Regex;
use serde::Serialize;

use crate::error::RuleError;
use crate::policy::text::fold_dotted_i;

/// Points for a matched high-signal pattern.
pub const HIGH_SIGNAL_WEIGHT: u32 = 10;

/// Points for a matched mid-signal pattern.
pub const MID_SIGNAL_WEIGHT: u32 = 3;

/// Minimum score for an item to be relevant.
pub const DEFAULT_RELEVANCE_THRESHOLD: u32 = 10;

/// Signal tier of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Mid,
}

impl Tier {
    /// Prefix used in decision reasons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Self::High => HIGH_SIGNAL_WEIGHT,
            Self::Mid => MID_SIGNAL_WEIGHT,
        }
    }
}

/// A department vocabulary as plain data.
///
/// Adding a department means adding one of these; nothing in the matcher
/// or the policy changes.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub name: &'static str,
    pub high: &'static [&'static str],
    pub mid: &'static [&'static str],
}

/// A single compiled pattern.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Pattern source as written in the table; echoed in reasons.
    pub pattern: String,
    pub regex: Regex,
    pub tier: Tier,
}

impl PatternRule {
    fn compile(rule_set: &str, pattern: &str, tier: Tier) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!("(?i){}", fold_dotted_i(pattern))).map_err(|e| {
            RuleError::InvalidPattern {
                rule_set: rule_set.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            tier,
        })
    }

    /// Reason string recorded when this rule fires.
    pub fn reason(&self) -> String {
        format!("{}:{}", self.tier.label(), self.pattern)
    }
}

/// Output of the matcher: cumulative score plus the rules that fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTrace {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Compiled, immutable rule set for one department.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    /// High-tier rules first, then mid-tier, each in table order.
    rules: Vec<PatternRule>,
    threshold: u32,
}

impl RuleSet {
    /// Compile a static table with the given relevance threshold.
    pub fn compile(table: &RuleTable, threshold: u32) -> Result<Self, RuleError> {
        Self::from_patterns(table.name, table.high, table.mid, threshold)
    }

    /// Compile an ad-hoc rule set.
    pub fn from_patterns<S: AsRef<str>>(
        name: &str,
        high: &[S],
        mid: &[S],
        threshold: u32,
    ) -> Result<Self, RuleError> {
        if high.is_empty() && mid.is_empty() {
            return Err(RuleError::EmptyRuleSet {
                name: name.to_string(),
            });
        }

        let rules = high
            .iter()
            .map(|p| (p.as_ref(), Tier::High))
            .chain(mid.iter().map(|p| (p.as_ref(), Tier::Mid)))
            .map(|(pattern, tier)| PatternRule::compile(name, pattern, tier))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            rules,
            threshold,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Run every rule over `text` in declaration order.
    pub fn score(&self, text: &str) -> ScoreTrace {
        let folded = fold_dotted_i(text);
        let mut trace = ScoreTrace::default();
        for rule in &self.rules {
            if rule.regex.is_match(&folded) {
                trace.score += rule.tier.weight();
                trace.reasons.push(rule.reason());
            }
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleSet {
        RuleSet::from_patterns(
            "sample",
            &[r"\bgümrük\b", r"\bithalat\b|\bihracat\b"],
            &[r"\byönetmelik\b", r"\btebliğ\b"],
            DEFAULT_RELEVANCE_THRESHOLD,
        )
        .unwrap()
    }

    #[test]
    fn scores_each_matching_tier() {
        let trace = sample().score("Gümrük Yönetmeliği Hakkında Tebliğ");
        assert_eq!(trace.score, 13);
        assert_eq!(
            trace.reasons,
            vec![r"high:\bgümrük\b".to_string(), r"mid:\btebliğ\b".to_string()]
        );
    }

    #[test]
    fn repeated_occurrences_count_once() {
        let trace = sample().score("gümrük gümrük GÜMRÜK");
        assert_eq!(trace.score, HIGH_SIGNAL_WEIGHT);
        assert_eq!(trace.reasons.len(), 1);
    }

    #[test]
    fn alternation_counts_once_even_if_both_sides_match() {
        let trace = sample().score("İthalat ve İhracat Rejimi");
        assert_eq!(trace.score, HIGH_SIGNAL_WEIGHT);
        assert_eq!(trace.reasons, vec![r"high:\bithalat\b|\bihracat\b".to_string()]);
    }

    #[test]
    fn high_reasons_precede_mid_regardless_of_text_order() {
        let trace = sample().score("Tebliğ: gümrük");
        assert!(trace.reasons[0].starts_with("high:"));
        assert!(trace.reasons[1].starts_with("mid:"));
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "gümrükleme" is not the word "gümrük"
        let trace = sample().score("Gümrükleme işlemleri");
        assert_eq!(trace.score, 0);
        assert!(trace.reasons.is_empty());
    }

    #[test]
    fn dotted_capital_i_matches_lowercase_pattern() {
        let trace = sample().score("İTHALAT REJİMİ");
        assert_eq!(trace.score, HIGH_SIGNAL_WEIGHT);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(sample().score(""), ScoreTrace::default());
    }

    #[test]
    fn tiers_are_ordered_in_compiled_rules() {
        let set = sample();
        let tiers: Vec<Tier> = set.rules().iter().map(|r| r.tier).collect();
        assert_eq!(tiers, vec![Tier::High, Tier::High, Tier::Mid, Tier::Mid]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = RuleSet::from_patterns("broken", &[r"(unclosed"], &[], 10).unwrap_err();
        match err {
            RuleError::InvalidPattern { rule_set, pattern, .. } => {
                assert_eq!(rule_set, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn empty_rule_set_is_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            RuleSet::from_patterns("empty", &none, &none, 10),
            Err(RuleError::EmptyRuleSet { .. })
        ));
    }

    #[test]
    fn tier_labels_and_weights() {
        assert_eq!(Tier::High.label(), "high");
        assert_eq!(Tier::Mid.label(), "mid");
        assert_eq!(Tier::High.weight(), 10);
        assert_eq!(Tier::Mid.weight(), 3);
    }
}

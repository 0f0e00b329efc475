//! Risk analysis over a whole contract or a single clause.
//!
//! The analyzer holds only read-only configuration; every call builds its own
//! findings list and returns it, so one instance can be shared across threads.

use lexguard_core::{ContractType, OverallRiskLevel, RiskLevel, context_window, title_case, truncate_chars};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assessment::{ClauseRisk, ClauseRiskItem, RiskAssessment, RiskFinding};
use crate::catalog::{RiskPattern, catalog};
use crate::scoring;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Characters of context kept on each side of a hit.
    pub excerpt_radius: usize,
    /// Maximum characters in an emitted excerpt.
    pub excerpt_limit: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            excerpt_radius: 100,
            excerpt_limit: 500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    config: RiskConfig,
}

impl RiskAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Scan `text` against the catalog and aggregate the hits.
    ///
    /// Each category contributes at most one finding, taken from the first of
    /// its matchers that hits. `contract_type` is recorded but does not change
    /// the scoring.
    pub fn analyze(&self, text: &str, contract_type: &ContractType) -> RiskAssessment {
        let findings: Vec<RiskFinding> = catalog()
            .iter()
            .filter_map(|pattern| self.match_category(pattern, text))
            .collect();

        let overall_score = scoring::overall_score(&findings);
        let statistics = scoring::statistics(&findings);
        let summary = scoring::summarize(&statistics, overall_score);
        let risk_level = OverallRiskLevel::from_score(overall_score);

        info!(
            contract_type = %contract_type,
            findings = findings.len(),
            overall_score,
            risk_level = %risk_level,
            "risk analysis complete"
        );

        RiskAssessment {
            contract_type: contract_type.clone(),
            findings,
            overall_score,
            risk_level,
            summary,
            statistics,
        }
    }

    /// Check one clause in isolation, reporting every category it hits.
    pub fn clause_risk(&self, clause: &str) -> ClauseRisk {
        let risks: Vec<ClauseRiskItem> = catalog()
            .iter()
            .filter(|pattern| pattern.matchers.iter().any(|m| m.is_match(clause)))
            .map(|pattern| ClauseRiskItem {
                category: pattern.id.to_string(),
                label: title_case(pattern.id),
                level: pattern.level,
                recommendation: pattern.recommendation.to_string(),
            })
            .collect();

        let risk_level = risks
            .iter()
            .map(|r| r.level)
            .max()
            .unwrap_or(RiskLevel::Low);

        ClauseRisk {
            has_risks: !risks.is_empty(),
            risk_level,
            risks,
        }
    }

    fn match_category(&self, pattern: &RiskPattern, text: &str) -> Option<RiskFinding> {
        let (start, end) = pattern.first_match(text)?;
        let radius = self.config.excerpt_radius;
        let window = context_window(text, start, end, radius, radius).trim();
        let excerpt = truncate_chars(window, self.config.excerpt_limit);

        debug!(category = pattern.id, level = %pattern.level, start, "risk pattern matched");

        Some(RiskFinding {
            category: pattern.id.to_string(),
            label: title_case(pattern.id),
            level: pattern.level,
            description: pattern.description.to_string(),
            clause_excerpt: excerpt.to_string(),
            recommendation: pattern.recommendation.to_string(),
            score: pattern.level.score(),
        })
    }
}

/// Analyze `text` with the default configuration.
pub fn analyze(text: &str, contract_type: &ContractType) -> RiskAssessment {
    RiskAnalyzer::new().analyze(text, contract_type)
}

/// Check a single clause with the default configuration.
pub fn get_clause_risk(clause: &str) -> ClauseRisk {
    RiskAnalyzer::new().clause_risk(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general() -> ContractType {
        ContractType::General
    }

    #[test]
    fn empty_text_gives_floor() {
        let a = analyze("", &general());
        assert!(a.findings.is_empty());
        assert_eq!(a.overall_score, 15);
        assert_eq!(a.risk_level, OverallRiskLevel::Low);
        assert_eq!(a.statistics.total_risks, 0);
        assert_eq!(a.summary.risk_score, 15);
    }

    #[test]
    fn one_finding_per_category_even_when_repeated() {
        let text = "The Supplier shall be liable for any loss. ".repeat(5);
        let a = analyze(&text, &general());
        let hits: Vec<_> = a
            .findings
            .iter()
            .filter(|f| f.category == "unlimited_liability")
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].level, RiskLevel::Critical);
        assert_eq!(hits[0].label, "Unlimited Liability");
        assert_eq!(hits[0].score, 1.0);
    }

    #[test]
    fn findings_follow_catalog_order() {
        // non_compete appears first in the text but later in the catalog.
        let text = "Employee shall not compete with the Company. \
                    The Company may terminate at any time.";
        let a = analyze(text, &general());
        let ids: Vec<&str> = a.findings.iter().map(|f| f.category.as_str()).collect();
        assert_eq!(ids, vec!["one_sided_termination", "non_compete"]);
    }

    #[test]
    fn excerpt_is_windowed_around_the_hit() {
        let prefix = "x".repeat(300);
        let suffix = "y".repeat(300);
        let text = format!("{prefix} unlimited liability {suffix}");
        let a = analyze(&text, &general());
        let excerpt = &a.findings[0].clause_excerpt;
        // 100 before, the hit, 100 after.
        assert_eq!(excerpt.chars().count(), 100 + "unlimited liability".len() + 100);
        assert!(excerpt.starts_with('x'));
        assert!(excerpt.ends_with('y'));
    }

    #[test]
    fn excerpt_respects_configured_limit() {
        let analyzer = RiskAnalyzer::with_config(RiskConfig {
            excerpt_radius: 100,
            excerpt_limit: 30,
        });
        let text = format!("{} payment in advance {}", "a".repeat(200), "b".repeat(200));
        assert_eq!(analyzer.config().excerpt_limit, 30);
        let a = analyzer.analyze(&text, &general());
        assert_eq!(a.findings[0].clause_excerpt.chars().count(), 30);
    }

    #[test]
    fn default_config_values() {
        let analyzer = RiskAnalyzer::new();
        assert_eq!(analyzer.config(), &RiskConfig::default());
        assert_eq!(analyzer.config().excerpt_radius, 100);
        assert_eq!(analyzer.config().excerpt_limit, 500);
    }

    #[test]
    fn contract_type_is_echoed_but_not_scored() {
        let text = "Fees are due as payment in advance.";
        let vendor = analyze(text, &ContractType::Vendor);
        let lease = analyze(text, &ContractType::Lease);
        assert_eq!(vendor.contract_type, ContractType::Vendor);
        assert_eq!(vendor.overall_score, lease.overall_score);
        assert_eq!(vendor.findings, lease.findings);
    }

    #[test]
    fn two_high_findings_ask_for_renegotiation() {
        let text = "Licensor may terminate without cause. \
                    Licensee shall indemnify and hold harmless the Licensor.";
        let a = analyze(text, &general());
        assert_eq!(a.statistics.high_risks, 2);
        assert_eq!(a.overall_score, 77);
        assert_eq!(a.risk_level, OverallRiskLevel::High);
        assert_eq!(a.summary.recommended_action, "Negotiate key terms before signing.");
    }

    #[test]
    fn clause_risk_reports_every_matching_category() {
        let clause = "The agreement will automatically renew and a penalty of 10% applies.";
        let r = get_clause_risk(clause);
        assert!(r.has_risks);
        let ids: Vec<&str> = r.risks.iter().map(|x| x.category.as_str()).collect();
        assert_eq!(ids, vec!["automatic_renewal", "penalty_clauses"]);
        assert_eq!(r.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn clause_risk_uses_severity_order_not_string_order() {
        // "medium" > "high" as strings; the worst level here is high.
        let clause = "Vendor may terminate at any time and a penalty amount is payable.";
        let r = get_clause_risk(clause);
        assert_eq!(r.risks.len(), 2);
        assert_eq!(r.risk_level, RiskLevel::High);
    }

    #[test]
    fn clause_without_risks() {
        let r = get_clause_risk("The parties will meet quarterly.");
        assert!(!r.has_risks);
        assert_eq!(r.risk_level, RiskLevel::Low);
        assert!(r.risks.is_empty());
    }
}

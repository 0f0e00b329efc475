//! Aggregation of findings into an overall score, summary, and counts.

use lexguard_core::RiskLevel;

use crate::assessment::{RiskFinding, RiskStatistics, Summary};

/// Score reported when no risk pattern matched at all.
pub const BASELINE_SCORE: u32 = 15;

const BREADTH_STEP: f64 = 0.05;
const MAX_BREADTH_MULTIPLIER: f64 = 1.5;

/// Weighted mean of finding scores (weights by level) scaled to 0–100, then
/// amplified by `min(1.5, 1 + 0.05 * n)` and capped at 100.
///
/// Rounding is half-to-even.
pub fn overall_score(findings: &[RiskFinding]) -> u32 {
    if findings.is_empty() {
        return BASELINE_SCORE;
    }

    let total_weight: u32 = findings.iter().map(|f| f.level.weight()).sum();
    let weighted: f64 = findings
        .iter()
        .map(|f| f.score * f64::from(f.level.weight()))
        .sum();

    let raw = weighted / f64::from(total_weight.max(1)) * 100.0;
    let multiplier = (1.0 + findings.len() as f64 * BREADTH_STEP).min(MAX_BREADTH_MULTIPLIER);
    let score = (raw * multiplier).round_ties_even();

    score.clamp(0.0, 100.0) as u32
}

pub fn statistics(findings: &[RiskFinding]) -> RiskStatistics {
    let count = |level: RiskLevel| findings.iter().filter(|f| f.level == level).count();
    RiskStatistics {
        total_risks: findings.len(),
        critical_risks: count(RiskLevel::Critical),
        high_risks: count(RiskLevel::High),
        medium_risks: count(RiskLevel::Medium),
        low_risks: count(RiskLevel::Low),
    }
}

pub fn summarize(stats: &RiskStatistics, overall_score: u32) -> Summary {
    let (assessment, action) = if stats.critical_risks > 0 {
        (
            "Critical risk clauses require immediate attention.",
            "Do not sign without addressing critical issues.",
        )
    } else if stats.high_risks >= 2 {
        (
            "Multiple high-risk clauses should be renegotiated.",
            "Negotiate key terms before signing.",
        )
    } else {
        (
            "Contract appears reasonably balanced.",
            "Review carefully before signing.",
        )
    };

    Summary {
        assessment: assessment.to_string(),
        recommended_action: action.to_string(),
        risk_score: overall_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(level: RiskLevel) -> RiskFinding {
        RiskFinding {
            category: format!("{level}_thing"),
            label: String::new(),
            level,
            description: String::new(),
            clause_excerpt: String::new(),
            recommendation: String::new(),
            score: level.score(),
        }
    }

    #[test]
    fn empty_findings_give_baseline() {
        assert_eq!(overall_score(&[]), 15);
    }

    #[test]
    fn single_finding_scores() {
        assert_eq!(overall_score(&[finding(RiskLevel::Low)]), 21);
        assert_eq!(overall_score(&[finding(RiskLevel::Medium)]), 42);
        assert_eq!(overall_score(&[finding(RiskLevel::High)]), 73);
        // 100 * 1.05 is capped.
        assert_eq!(overall_score(&[finding(RiskLevel::Critical)]), 100);
    }

    #[test]
    fn mixed_findings_use_weighted_mean_and_breadth() {
        // (0.4*2 + 0.7*3) / 5 * 100 = 58, * 1.10 = 63.8
        let f = [finding(RiskLevel::Medium), finding(RiskLevel::High)];
        assert_eq!(overall_score(&f), 64);

        // 40 * 1.10 = 44
        let f = [finding(RiskLevel::Medium), finding(RiskLevel::Medium)];
        assert_eq!(overall_score(&f), 44);
    }

    #[test]
    fn breadth_multiplier_caps_at_one_and_a_half() {
        // Ten low findings: raw 20, multiplier min(1.5, 1.5) = 1.5.
        let ten: Vec<_> = (0..10).map(|_| finding(RiskLevel::Low)).collect();
        assert_eq!(overall_score(&ten), 30);
        // Twelve would be 1.6 uncapped.
        let twelve: Vec<_> = (0..12).map(|_| finding(RiskLevel::Low)).collect();
        assert_eq!(overall_score(&twelve), 30);
    }

    #[test]
    fn statistics_count_by_level() {
        let f = [
            finding(RiskLevel::High),
            finding(RiskLevel::Medium),
            finding(RiskLevel::High),
        ];
        let s = statistics(&f);
        assert_eq!(s.total_risks, 3);
        assert_eq!(s.high_risks, 2);
        assert_eq!(s.medium_risks, 1);
        assert_eq!(s.critical_risks, 0);
        assert_eq!(s.count(RiskLevel::High), 2);
    }

    #[test]
    fn summary_decision_table() {
        let critical = statistics(&[finding(RiskLevel::Critical)]);
        let s = summarize(&critical, 100);
        assert_eq!(s.recommended_action, "Do not sign without addressing critical issues.");
        assert_eq!(s.risk_score, 100);

        let two_high = statistics(&[finding(RiskLevel::High), finding(RiskLevel::High)]);
        assert_eq!(
            summarize(&two_high, 77).assessment,
            "Multiple high-risk clauses should be renegotiated."
        );

        let one_high = statistics(&[finding(RiskLevel::High)]);
        assert_eq!(
            summarize(&one_high, 73).assessment,
            "Contract appears reasonably balanced."
        );

        let none = statistics(&[]);
        assert_eq!(
            summarize(&none, 15).recommended_action,
            "Review carefully before signing."
        );
    }
}

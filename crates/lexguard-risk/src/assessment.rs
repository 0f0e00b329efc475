//! Result records produced by the risk analyzer.

use lexguard_core::{ContractType, OverallRiskLevel, RiskLevel};
use serde::{Deserialize, Serialize};

/// One matched risk category. At most one per category per analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    /// Catalog id, e.g. `unlimited_liability`.
    pub category: String,
    /// Display form of the id, e.g. `Unlimited Liability`.
    pub label: String,
    pub level: RiskLevel,
    pub description: String,
    /// Text surrounding the first hit, trimmed and length-capped.
    pub clause_excerpt: String,
    pub recommendation: String,
    /// Fixed per-level score in `[0, 1]`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub assessment: String,
    pub recommended_action: String,
    pub risk_score: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskStatistics {
    pub total_risks: usize,
    pub critical_risks: usize,
    pub high_risks: usize,
    pub medium_risks: usize,
    pub low_risks: usize,
}

impl RiskStatistics {
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical_risks,
            RiskLevel::High => self.high_risks,
            RiskLevel::Medium => self.medium_risks,
            RiskLevel::Low => self.low_risks,
        }
    }
}

/// Full result of one [`RiskAnalyzer::analyze`](crate::RiskAnalyzer::analyze) call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub contract_type: ContractType,
    /// Findings in catalog order.
    pub findings: Vec<RiskFinding>,
    /// 0–100; 15 when nothing matched.
    pub overall_score: u32,
    pub risk_level: OverallRiskLevel,
    pub summary: Summary,
    pub statistics: RiskStatistics,
}

/// One category hit inside a single clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRiskItem {
    pub category: String,
    pub label: String,
    pub level: RiskLevel,
    pub recommendation: String,
}

/// Risk profile of a single clause checked in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRisk {
    pub has_risks: bool,
    /// Most severe level among `risks`; `low` when there are none.
    pub risk_level: RiskLevel,
    pub risks: Vec<ClauseRiskItem>,
}

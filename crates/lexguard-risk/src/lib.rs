//! Risk scoring engine: matches contract text against a fixed catalog of risk
//! categories and aggregates the hits into a 0–100 score.

mod analyzer;
mod assessment;
pub mod catalog;
pub mod scoring;

pub use analyzer::{RiskAnalyzer, RiskConfig, analyze, get_clause_risk};
pub use assessment::{ClauseRisk, ClauseRiskItem, RiskAssessment, RiskFinding, RiskStatistics, Summary};

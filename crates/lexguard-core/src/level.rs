//! Severity scales.
//!
//! Two distinct scales are in play and must not be mixed:
//!
//! - [`RiskLevel`]: four-valued severity of a single matched risk category.
//! - [`OverallRiskLevel`]: three-valued bucket derived from the aggregate
//!   0–100 score of a whole assessment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of one matched risk category.
///
/// Variants are declared in ascending severity so the derived `Ord` gives
/// `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL: [RiskLevel; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Fixed per-finding score in `[0, 1]`.
    pub fn score(&self) -> f64 {
        match self {
            Self::Low => 0.20,
            Self::Medium => 0.40,
            Self::High => 0.70,
            Self::Critical => 1.00,
        }
    }

    /// Integer weight used when aggregating findings into an overall score.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse bucket for an aggregate 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRiskLevel {
    Low,
    Medium,
    High,
}

impl OverallRiskLevel {
    /// Threshold an overall score: `>= 70` high, `>= 40` medium, else low.
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for OverallRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

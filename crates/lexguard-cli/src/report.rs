//! The merged view handed to display and JSON output.

use lexguard_core::ContractType;
use lexguard_extract::{Extraction, Extractor, Party};
use lexguard_risk::{RiskAnalyzer, RiskAssessment};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub contract_type: ContractType,
    pub assessment: RiskAssessment,
    pub extraction: Extraction,
    pub parties: Vec<Party>,
}

impl Report {
    /// Run both engines over the same text. They share no state.
    pub fn build(
        text: &str,
        contract_type: ContractType,
        extractor: &Extractor,
        analyzer: &RiskAnalyzer,
    ) -> Self {
        Self {
            assessment: analyzer.analyze(text, &contract_type),
            extraction: extractor.analyze(text),
            parties: extractor.identify_parties(text),
            contract_type,
        }
    }
}

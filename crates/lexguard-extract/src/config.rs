use std::str::FromStr;

use lexguard_core::AnalysisError;
use serde::{Deserialize, Serialize};

/// How text is split into sentence-like units for clause segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmenter {
    /// Split on runs of `.`, `!`, `?`.
    #[default]
    Punctuation,
    /// Unicode (UAX #29) sentence boundaries.
    Unicode,
}

impl FromStr for Segmenter {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "punctuation" => Ok(Self::Punctuation),
            "unicode" => Ok(Self::Unicode),
            other => Err(AnalysisError::InvalidConfig(format!(
                "unknown segmenter '{other}' (expected 'punctuation' or 'unicode')"
            ))),
        }
    }
}

/// Tunables for the extraction engine. All lengths are in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Window size when feeding text to an entity recognizer.
    pub ner_chunk_chars: usize,
    /// Leading portion of the text searched for party names.
    pub party_scan_chars: usize,
    /// Context kept on each side of a date or amount.
    pub context_chars: usize,
    /// Sentences shorter than this are dropped before clause analysis.
    pub min_clause_chars: usize,
    /// Header text longer than this is cut when used as a section label.
    pub section_label_chars: usize,
    pub segmenter: Segmenter,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ner_chunk_chars: 100_000,
            party_scan_chars: 5_000,
            context_chars: 50,
            min_clause_chars: 10,
            section_label_chars: 100,
            segmenter: Segmenter::Punctuation,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.ner_chunk_chars == 0 {
            return Err(AnalysisError::InvalidConfig(
                "ner_chunk_chars must be greater than zero".to_string(),
            ));
        }
        if self.section_label_chars == 0 {
            return Err(AnalysisError::InvalidConfig(
                "section_label_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

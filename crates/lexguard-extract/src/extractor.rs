//! Whole-document extraction.

use lexguard_core::AnalysisError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clauses::{ClauseSegment, extract_clauses};
use crate::config::ExtractionConfig;
use crate::dates::{DateMention, extract_dates};
use crate::entities::{EntityMap, EntityRecognizer, extract_entities};
use crate::keywords::{TermFrequency, key_terms};
use crate::money::{MonetaryMention, extract_amounts};
use crate::parties::{Party, identify_parties};
use crate::stats::{DocumentStatistics, LanguageDetection, compute_statistics, detect_language};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub entities: EntityMap,
    pub clauses: Vec<ClauseSegment>,
    pub key_terms: Vec<TermFrequency>,
    pub dates: Vec<DateMention>,
    pub monetary_values: Vec<MonetaryMention>,
    pub statistics: DocumentStatistics,
    pub language_detection: LanguageDetection,
}

/// Runs every extractor over a document. Holds read-only state, so one
/// instance can serve concurrent callers.
#[derive(Default)]
pub struct Extractor {
    config: ExtractionConfig,
    recognizer: Option<Box<dyn EntityRecognizer>>,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            recognizer: None,
        })
    }

    /// Attach an entity recognizer. Without one, only PAN, GSTIN and CIN
    /// identifiers are reported.
    pub fn with_recognizer(mut self, recognizer: impl EntityRecognizer + 'static) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> Extraction {
        let config = &self.config;

        let extraction = Extraction {
            entities: extract_entities(text, self.recognizer.as_deref(), config.ner_chunk_chars),
            clauses: extract_clauses(text, config),
            key_terms: key_terms(text),
            dates: extract_dates(text, config.context_chars),
            monetary_values: extract_amounts(text, config.context_chars),
            statistics: compute_statistics(text),
            language_detection: detect_language(text),
        };

        debug!(
            chars = extraction.statistics.character_count,
            clauses = extraction.clauses.len(),
            dates = extraction.dates.len(),
            amounts = extraction.monetary_values.len(),
            "extraction complete"
        );

        extraction
    }

    pub fn identify_parties(&self, text: &str) -> Vec<Party> {
        let parties = identify_parties(text, self.config.party_scan_chars);
        debug!(parties = parties.len(), "party scan complete");
        parties
    }
}

/// Extract with default settings and no entity recognizer.
pub fn analyze(text: &str) -> Extraction {
    Extractor::new().analyze(text)
}

//! Named entities: a pluggable recognizer plus Indian registration numbers.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use lexguard_core::AnalysisError;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Entity label to distinct entity texts.
pub type EntityMap = BTreeMap<String, BTreeSet<String>>;

/// Identifier shapes, always present in the output even when empty.
static IDENTIFIER_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("PAN", r"[A-Z]{5}\d{4}[A-Z]"),
        ("GSTIN", r"\d{2}[A-Z]{5}\d{4}[A-Z]\d[Z][A-Z\d]"),
        ("CIN", r"[LU]\d{5}[A-Z]{2}\d{4}[A-Z]{3}\d{6}"),
    ]
    .into_iter()
    .filter_map(|(label, p)| Regex::new(p).ok().map(|re| (label, re)))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    pub label: String,
    pub text: String,
}

/// A named-entity recognizer run over bounded chunks of a document.
///
/// Implementations may fail per chunk; the caller logs and skips the chunk.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, chunk: &str) -> Result<Vec<RecognizedEntity>, AnalysisError>;
}

/// Capitalised names ending in a company suffix (`ORG`) and honorific-led
/// names (`PERSON`).
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedRecognizer;

static ORG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b[A-Z][A-Za-z&]*(?:\s+[A-Z][A-Za-z&]*)*\s+(?:Pvt\.?\s*Ltd\.?|Private Limited|Limited|LLP|Inc\.?|LLC|Corporation|Corp\.?)",
    )
    .ok()
});

static PERSON_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Shri|Smt)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*").ok()
});

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, chunk: &str) -> Result<Vec<RecognizedEntity>, AnalysisError> {
        let mut found = Vec::new();
        for (label, re) in [("ORG", &*ORG_PATTERN), ("PERSON", &*PERSON_PATTERN)] {
            let re = re
                .as_ref()
                .ok_or_else(|| AnalysisError::Recognizer(format!("{label} pattern unavailable")))?;
            found.extend(re.find_iter(chunk).map(|m| RecognizedEntity {
                label: label.to_string(),
                text: m.as_str().to_string(),
            }));
        }
        Ok(found)
    }
}

/// Split into pieces of at most `chunk_chars` characters.
fn chunks(text: &str, chunk_chars: usize) -> Vec<&str> {
    let chunk_chars = chunk_chars.max(1);
    let mut bounds: Vec<usize> = text
        .char_indices()
        .step_by(chunk_chars)
        .map(|(i, _)| i)
        .collect();
    bounds.push(text.len());
    bounds.windows(2).map(|w| &text[w[0]..w[1]]).collect()
}

/// Entities from the optional recognizer plus PAN, GSTIN and CIN matches.
pub fn extract_entities(
    text: &str,
    recognizer: Option<&dyn EntityRecognizer>,
    chunk_chars: usize,
) -> EntityMap {
    let mut entities = EntityMap::new();

    if let Some(recognizer) = recognizer {
        let per_chunk: Vec<Vec<RecognizedEntity>> = chunks(text, chunk_chars)
            .par_iter()
            .enumerate()
            .filter_map(|(i, chunk)| match recognizer.recognize(chunk) {
                Ok(found) => Some(found),
                Err(e) => {
                    warn!(chunk = i, error = %e, "entity recognition failed, skipping chunk");
                    None
                }
            })
            .collect();

        for entity in per_chunk.into_iter().flatten() {
            let trimmed = entity.text.trim();
            if trimmed.is_empty() || entity.text.chars().count() <= 1 {
                continue;
            }
            entities
                .entry(entity.label)
                .or_default()
                .insert(trimmed.to_string());
        }
    }

    for (label, re) in IDENTIFIER_PATTERNS.iter() {
        let found = entities.entry(label.to_string()).or_default();
        found.extend(re.find_iter(text).map(|m| m.as_str().to_string()));
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl EntityRecognizer for Failing {
        fn recognize(&self, _chunk: &str) -> Result<Vec<RecognizedEntity>, AnalysisError> {
            Err(AnalysisError::Recognizer("model not loaded".into()))
        }
    }

    struct Fixed(Vec<(&'static str, &'static str)>);

    impl EntityRecognizer for Fixed {
        fn recognize(&self, _chunk: &str) -> Result<Vec<RecognizedEntity>, AnalysisError> {
            Ok(self
                .0
                .iter()
                .map(|(label, text)| RecognizedEntity {
                    label: label.to_string(),
                    text: text.to_string(),
                })
                .collect())
        }
    }

    #[test]
    fn identifier_keys_always_present() {
        let entities = extract_entities("nothing here", None, 100_000);
        assert_eq!(entities.len(), 3);
        assert!(entities["PAN"].is_empty());
        assert!(entities["GSTIN"].is_empty());
        assert!(entities["CIN"].is_empty());
    }

    #[test]
    fn indian_identifiers() {
        let text = "GSTIN: 27AABCU9603R1ZM, CIN U72200MH2009PTC123456, PAN ABCDE1234F. \
                    PAN again ABCDE1234F.";
        let entities = extract_entities(text, None, 100_000);
        assert!(entities["GSTIN"].contains("27AABCU9603R1ZM"));
        assert!(entities["CIN"].contains("U72200MH2009PTC123456"));
        assert!(entities["PAN"].contains("ABCDE1234F"));
        // The PAN embedded in the GSTIN is reported too.
        assert!(entities["PAN"].contains("AABCU9603R"));
        assert_eq!(entities["PAN"].len(), 2);
    }

    #[test]
    fn failing_recognizer_still_yields_identifiers() {
        let entities = extract_entities("PAN ABCDE1234F", Some(&Failing), 4);
        assert_eq!(entities.len(), 3);
        assert!(entities["PAN"].contains("ABCDE1234F"));
    }

    #[test]
    fn recognizer_output_is_trimmed_filtered_and_deduplicated() {
        let recognizer = Fixed(vec![
            ("ORG", " Acme Ltd "),
            ("ORG", "Acme Ltd"),
            ("ORG", "X"),
            ("ORG", "   "),
            ("GPE", "Pune"),
        ]);
        let entities = extract_entities("some text", Some(&recognizer), 100_000);
        assert_eq!(entities["ORG"].len(), 1);
        assert!(entities["ORG"].contains("Acme Ltd"));
        assert!(entities["GPE"].contains("Pune"));
    }

    #[test]
    fn rule_based_recognizer() {
        let text = "Agreement between Sunrise Traders Pvt. Ltd. and Dr. Anita Rao of Pune.";
        let entities = extract_entities(text, Some(&RuleBasedRecognizer), 100_000);
        assert_eq!(entities["ORG"].len(), 1);
        assert!(entities["ORG"].contains("Sunrise Traders Pvt. Ltd."));
        assert!(entities["PERSON"].contains("Dr. Anita Rao"));
    }

    #[test]
    fn chunking_by_characters() {
        let pieces = chunks("अनुबंध abc", 4);
        assert_eq!(pieces.concat(), "अनुबंध abc");
        assert!(pieces.iter().all(|p| p.chars().count() <= 4));
        assert_eq!(pieces.len(), 3);
        assert!(chunks("", 10).is_empty());
    }
}

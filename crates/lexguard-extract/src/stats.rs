//! Document statistics and the English/Hindi character-mix heuristic.

use serde::{Deserialize, Serialize};

use crate::clauses::split_on_punctuation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    /// Blank-line separated blocks, approximated as `"\n\n"` count + 1.
    pub paragraph_count: usize,
}

pub fn compute_statistics(text: &str) -> DocumentStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = split_on_punctuation(text)
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .count();
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();

    DocumentStatistics {
        character_count: text.chars().count(),
        word_count: words.len(),
        sentence_count,
        avg_word_length: letters as f64 / words.len().max(1) as f64,
        avg_sentence_length: words.len() as f64 / sentence_count.max(1) as f64,
        paragraph_count: text.matches("\n\n").count() + 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryLanguage {
    English,
    Hindi,
    #[serde(rename = "Mixed (English-Hindi)")]
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetection {
    pub primary: PrimaryLanguage,
    /// Rounded to two decimals, ties to even.
    pub english_ratio: f64,
    /// Rounded to two decimals, ties to even.
    pub hindi_ratio: f64,
    pub is_multilingual: bool,
}

const PRIMARY_THRESHOLD: f64 = 0.3;
const MULTILINGUAL_THRESHOLD: f64 = 0.1;

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Ratio of Devanagari to Latin letters. Not a language model: only the
/// character classes are counted.
pub fn detect_language(text: &str) -> LanguageDetection {
    let hindi = text.chars().filter(|&c| is_devanagari(c)).count();
    let english = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let total = (hindi + english).max(1) as f64;

    let hindi_ratio = hindi as f64 / total;
    let english_ratio = english as f64 / total;

    let primary = if hindi_ratio > PRIMARY_THRESHOLD {
        if hindi_ratio > english_ratio {
            PrimaryLanguage::Hindi
        } else {
            PrimaryLanguage::Mixed
        }
    } else {
        PrimaryLanguage::English
    };

    LanguageDetection {
        primary,
        english_ratio: round2(english_ratio),
        hindi_ratio: round2(hindi_ratio),
        is_multilingual: hindi_ratio > MULTILINGUAL_THRESHOLD
            && english_ratio > MULTILINGUAL_THRESHOLD,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

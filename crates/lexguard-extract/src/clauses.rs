//! Clause segmentation: sentences, section headers, category, importance.

use std::sync::LazyLock;

use lexguard_core::truncate_chars;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{ExtractionConfig, Segmenter};
use crate::keywords::{self, HIGH_IMPORTANCE, MEDIUM_IMPORTANCE};

/// Section label used before any header has been seen.
pub const DEFAULT_SECTION: &str = "General";

/// Headers are only recognised on units shorter than this.
const MAX_HEADER_CHARS: usize = 100;

pub(crate) static SENTENCE_BREAK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[.!?]+").ok());

static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:ARTICLE|SECTION|CLAUSE|PART|SCHEDULE)\s+[IVXLCDM\d]+",
        r"^\d+\.\s+[A-Z]",
        r"^[A-Z][A-Z\s]+$",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSegment {
    /// 1-based position among emitted clauses.
    pub id: usize,
    pub text: String,
    /// Most recent header seen, or [`DEFAULT_SECTION`].
    pub section: String,
    /// Legal keyword category, or `general`.
    #[serde(rename = "type")]
    pub clause_type: String,
    pub importance: Importance,
    pub word_count: usize,
}

/// Split on runs of sentence punctuation. Pieces are returned untrimmed.
pub fn split_on_punctuation(text: &str) -> Vec<&str> {
    match SENTENCE_BREAK.as_ref() {
        Some(re) => re.split(text).collect(),
        None => vec![text],
    }
}

pub fn split_sentences(text: &str, segmenter: Segmenter) -> Vec<&str> {
    match segmenter {
        Segmenter::Punctuation => split_on_punctuation(text),
        Segmenter::Unicode => text.unicode_sentences().collect(),
    }
}

/// Whether a trimmed unit reads as a section header: an
/// ARTICLE/SECTION/CLAUSE/PART/SCHEDULE prefix, a numbered heading, or a
/// short all-caps line.
pub fn is_section_header(unit: &str) -> bool {
    let unit = unit.trim();
    if unit.chars().count() >= MAX_HEADER_CHARS {
        return false;
    }
    HEADER_PATTERNS.iter().any(|re| re.is_match(unit))
}

/// `high` for two or more high-severity indicators, `medium` for one of
/// those or two medium indicators, otherwise `low`.
pub fn importance(text: &str) -> Importance {
    let lower = text.to_lowercase();
    let high = HIGH_IMPORTANCE.iter().filter(|kw| lower.contains(*kw)).count();
    let medium = MEDIUM_IMPORTANCE.iter().filter(|kw| lower.contains(*kw)).count();

    if high >= 2 {
        Importance::High
    } else if high >= 1 || medium >= 2 {
        Importance::Medium
    } else {
        Importance::Low
    }
}

pub fn extract_clauses(text: &str, config: &ExtractionConfig) -> Vec<ClauseSegment> {
    let mut clauses = Vec::new();
    let mut section = DEFAULT_SECTION.to_string();

    for unit in split_sentences(text, config.segmenter) {
        let unit = unit.trim();
        if unit.chars().count() < config.min_clause_chars {
            continue;
        }

        if is_section_header(unit) {
            section = truncate_chars(unit, config.section_label_chars).to_string();
            continue;
        }

        clauses.push(ClauseSegment {
            id: clauses.len() + 1,
            text: unit.to_string(),
            section: section.clone(),
            clause_type: keywords::categorize(unit).to_string(),
            importance: importance(unit),
            word_count: unit.split_whitespace().count(),
        });
    }

    clauses
}

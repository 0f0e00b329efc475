//! Extraction engine: entities, clauses, key terms, dates, monetary amounts,
//! document statistics, language mix, and contracting parties.
//!
//! Everything here is a pure function of the input text and the
//! [`ExtractionConfig`]; nothing fails except an optional entity recognizer,
//! whose failures are logged and skipped.

pub mod clauses;
pub mod config;
pub mod dates;
pub mod entities;
mod extractor;
pub mod keywords;
pub mod money;
pub mod parties;
pub mod stats;

pub use clauses::{ClauseSegment, Importance};
pub use config::{ExtractionConfig, Segmenter};
pub use dates::{DateMention, DateType};
pub use entities::{EntityMap, EntityRecognizer, RecognizedEntity, RuleBasedRecognizer};
pub use extractor::{Extraction, Extractor, analyze};
pub use keywords::TermFrequency;
pub use money::{Currency, MonetaryMention};
pub use parties::{Party, PartyType};
pub use stats::{DocumentStatistics, LanguageDetection, PrimaryLanguage};

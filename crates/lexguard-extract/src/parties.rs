//! Contracting parties named near the top of a document.

use std::collections::HashSet;
use std::sync::LazyLock;

use lexguard_core::context_window;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters of context kept before and after a party introduction.
const CONTEXT_BEFORE: usize = 20;
const CONTEXT_AFTER: usize = 100;

const INDIVIDUAL_MARKERS: &[&str] = &["mr.", "mrs.", "ms.", "dr.", "individual"];

/// Introduction shapes, tried in order. Group 1 is the name. Matching is
/// case-sensitive: names must start with a capital.
static PARTY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:between|by and between)\s+([A-Z][A-Za-z\s,]+?)(?:\s*\(|,?\s*(?:hereinafter|a company|an individual|having))",
        r"(?:Party|PARTY)\s*(?:A|1|ONE|of the First Part)[:\s]+([A-Za-z\s]+)",
        r"(?:Party|PARTY)\s*(?:B|2|TWO|of the Second Part)[:\s]+([A-Za-z\s]+)",
        r#""([^"]+)"\s*(?:hereinafter|herein after)"#,
        r"([A-Z][A-Za-z\s]+(?:LLP|Pvt\.?\s*Ltd\.?|Private Limited|Limited|Inc\.?|LLC|Corporation|Corp\.?))",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    Organization,
    Individual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(rename = "type")]
    pub party_type: PartyType,
    /// Untrimmed text around the whole introduction.
    pub context: String,
}

fn party_type(name: &str) -> PartyType {
    let lower = name.to_lowercase();
    if INDIVIDUAL_MARKERS.iter().any(|m| lower.contains(m)) {
        PartyType::Individual
    } else {
        PartyType::Organization
    }
}

/// Parties introduced within the first `scan_chars` characters, one per
/// case-insensitive name, in pattern order.
pub fn identify_parties(text: &str, scan_chars: usize) -> Vec<Party> {
    let scan_end = text
        .char_indices()
        .nth(scan_chars)
        .map_or(text.len(), |(i, _)| i);
    let head = &text[..scan_end];

    let mut seen = HashSet::new();
    let mut parties = Vec::new();

    for re in PARTY_PATTERNS.iter() {
        for caps in re.captures_iter(head) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str().trim();
            let len = name.chars().count();
            if len <= 2 || len >= 100 {
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                continue;
            }

            parties.push(Party {
                name: name.to_string(),
                party_type: party_type(name),
                context: context_window(text, whole.start(), whole.end(), CONTEXT_BEFORE, CONTEXT_AFTER)
                    .to_string(),
            });
        }
    }

    parties
}

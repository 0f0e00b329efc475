//! Legal keyword tables and term-frequency counting.
//!
//! All matching here is plain substring search on lower-cased text, so
//! `"may"` also counts inside `"mayor"`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Keyword categories in classification order. The first category with any
/// keyword present names the clause.
pub const LEGAL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "obligations",
        &["shall", "must", "obligated", "required to", "duty to", "responsible for"],
    ),
    (
        "rights",
        &["may", "entitled to", "right to", "option to", "permitted to"],
    ),
    (
        "prohibitions",
        &["shall not", "must not", "prohibited", "forbidden", "restricted"],
    ),
    (
        "conditions",
        &["provided that", "subject to", "conditional upon", "in the event"],
    ),
    (
        "termination",
        &["terminate", "termination", "expiry", "expire", "end of term"],
    ),
    (
        "indemnity",
        &["indemnify", "indemnification", "hold harmless", "indemnity"],
    ),
    (
        "liability",
        &["liability", "liable", "damages", "compensation", "remedy"],
    ),
    (
        "confidentiality",
        &["confidential", "non-disclosure", "proprietary", "trade secret"],
    ),
    (
        "dispute",
        &["dispute", "arbitration", "jurisdiction", "governing law", "legal proceedings"],
    ),
    (
        "payment",
        &["payment", "consideration", "fee", "remuneration", "compensation"],
    ),
];

pub const GENERAL_CATEGORY: &str = "general";

pub const HIGH_IMPORTANCE: &[&str] = &[
    "indemnify",
    "liability",
    "terminate",
    "breach",
    "penalty",
    "damages",
    "forfeit",
    "confidential",
    "non-compete",
    "exclusive",
    "irrevocable",
    "perpetual",
    "unlimited",
];

pub const MEDIUM_IMPORTANCE: &[&str] = &[
    "shall",
    "must",
    "agree",
    "obligated",
    "required",
    "payment",
    "deliver",
    "warranty",
    "guarantee",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

/// First keyword category present in `text`, or `general`.
pub fn categorize(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    LEGAL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(GENERAL_CATEGORY)
}

/// Non-overlapping occurrence counts of every distinct keyword, non-zero
/// only, highest count first. Equal counts are ordered by term.
pub fn key_terms(text: &str) -> Vec<TermFrequency> {
    let lower = text.to_lowercase();
    let terms: BTreeSet<&str> = LEGAL_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .collect();

    let mut counts: Vec<TermFrequency> = terms
        .into_iter()
        .filter_map(|term| {
            let count = lower.matches(term).count();
            (count > 0).then(|| TermFrequency {
                term: term.to_string(),
                count,
            })
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_category_wins() {
        // "shall not" is a prohibition, but "shall" is an obligation and
        // obligations are checked first.
        assert_eq!(categorize("The Vendor shall not disclose anything."), "obligations");
        assert_eq!(categorize("Either party may end this."), "rights");
        assert_eq!(categorize("Arbitration will be held in Pune."), "dispute");
        assert_eq!(categorize("The weather was pleasant."), "general");
    }

    #[test]
    fn key_terms_are_counted_and_sorted() {
        let text = "The Vendor shall pay. The Buyer shall accept. Payment is due. \
                    Liability is limited; liability excludes fraud.";
        let terms = key_terms(text);
        assert_eq!(terms[0].term, "liability");
        assert_eq!(terms[0].count, 2);
        assert_eq!(terms[1].term, "shall");
        assert_eq!(terms[1].count, 2);
        assert!(terms.iter().any(|t| t.term == "payment" && t.count == 1));
        assert!(terms.iter().all(|t| t.count > 0));
    }

    #[test]
    fn duplicated_keyword_counted_once() {
        // "compensation" sits in two categories.
        let terms = key_terms("Compensation is fixed.");
        let n = terms.iter().filter(|t| t.term == "compensation").count();
        assert_eq!(n, 1);
    }

    #[test]
    fn substring_counting_is_not_word_aware() {
        let terms = key_terms("The mayor may attend.");
        let may = terms.iter().find(|t| t.term == "may").unwrap();
        assert_eq!(may.count, 2);
    }

    #[test]
    fn empty_text_has_no_terms() {
        assert!(key_terms("").is_empty());
    }
}

//! Date mentions and their contractual role.

use std::collections::HashSet;
use std::sync::LazyLock;

use lexguard_core::context_window;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

/// Date shapes, tried in this order. Deduplication keeps the first value
/// seen, so earlier shapes win over later ones for the same literal.
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{1,2}[-/]\d{1,2}[-/]\d{2,4}".to_string(),
        r"\d{4}[-/]\d{1,2}[-/]\d{1,2}".to_string(),
        format!(r"(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{4}}"),
        format!(r"\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}}"),
        r"\d{1,2}(?:st|nd|rd|th)?\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{4}"
            .to_string(),
    ]
    .iter()
    .filter_map(|p| Regex::new(&format!("(?i){p}")).ok())
    .collect()
});

/// Context keyword groups, checked in priority order.
const DATE_ROLES: &[(DateType, &[&str])] = &[
    (DateType::EffectiveDate, &["effective", "commencement", "start"]),
    (DateType::ExpiryDate, &["expiry", "end", "termination", "expire"]),
    (DateType::ExecutionDate, &["execution", "signed", "signature"]),
    (DateType::PaymentDate, &["payment", "due", "payable"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    EffectiveDate,
    ExpiryDate,
    ExecutionDate,
    PaymentDate,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMention {
    /// The literal matched text.
    pub value: String,
    #[serde(rename = "type")]
    pub date_type: DateType,
    pub context: String,
}

/// Role of a date judged from the text around it.
pub fn classify(context: &str) -> DateType {
    let lower = context.to_lowercase();
    DATE_ROLES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(role, _)| *role)
        .unwrap_or(DateType::General)
}

/// All date mentions, one per distinct literal, in pattern-table order.
pub fn extract_dates(text: &str, context_chars: usize) -> Vec<DateMention> {
    let mut seen = HashSet::new();
    let mut dates = Vec::new();

    for re in DATE_PATTERNS.iter() {
        for m in re.find_iter(text) {
            if !seen.insert(m.as_str()) {
                continue;
            }
            let context = context_window(text, m.start(), m.end(), context_chars, context_chars);
            dates.push(DateMention {
                value: m.as_str().to_string(),
                date_type: classify(context),
                context: context.trim().to_string(),
            });
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shapes_compile() {
        assert_eq!(DATE_PATTERNS.len(), 5);
    }

    #[test]
    fn recognises_each_shape() {
        let text = "Dated 05/11/2023, filed 2023-11-05, signed March 3, 2024, \
                    effective 7 April 2024 and renewed on 21st Sept. 2025.";
        let values: Vec<String> = extract_dates(text, 50).into_iter().map(|d| d.value).collect();
        assert!(values.contains(&"05/11/2023".to_string()));
        assert!(values.contains(&"2023-11-05".to_string()));
        assert!(values.contains(&"March 3, 2024".to_string()));
        assert!(values.contains(&"7 April 2024".to_string()));
        assert!(values.contains(&"21st Sept. 2025".to_string()));
    }

    #[test]
    fn duplicate_literals_are_reported_once() {
        let text = "Signed on 15th January 2024. Payment is due on 15th January 2024.";
        let dates = extract_dates(text, 50);
        let hits: Vec<_> = dates.iter().filter(|d| d.value == "15th January 2024").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date_type, DateType::ExecutionDate);
    }

    #[test]
    fn pattern_order_decides_which_duplicate_survives() {
        // "1 March 2024" comes first in the document, but the month-first
        // shape runs earlier in the table, so "March 1, 2024" is reported first.
        let text = "Payment of the first instalment: 1 March 2024. Commencement: March 1, 2024.";
        let dates = extract_dates(text, 10);
        assert_eq!(dates[0].value, "March 1, 2024");
        assert_eq!(dates[1].value, "1 March 2024");
    }

    #[test]
    fn role_priority() {
        assert_eq!(classify("effective upon termination"), DateType::EffectiveDate);
        assert_eq!(classify("this agreement will expire"), DateType::ExpiryDate);
        assert_eq!(classify("signed by both parties"), DateType::ExecutionDate);
        assert_eq!(classify("rent is payable"), DateType::PaymentDate);
        assert_eq!(classify("on a Tuesday"), DateType::General);
    }

    #[test]
    fn context_is_a_trimmed_window() {
        let text = "   effective 01/02/2024   ";
        let dates = extract_dates(text, 50);
        assert_eq!(dates[0].context, "effective 01/02/2024");
        assert_eq!(dates[0].date_type, DateType::EffectiveDate);
    }
}

//! Monetary amounts in rupees and dollars, including Indian scale words.

use std::sync::LazyLock;

use lexguard_core::context_window;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryMention {
    /// The literal matched text.
    pub original: String,
    /// Parsed value with any scale word applied.
    pub amount: f64,
    pub currency: Currency,
    pub context: String,
}

/// Group 1 is the number; group 2, where present, is a scale word.
static AMOUNT_PATTERNS: LazyLock<Vec<(Regex, Currency)>> = LazyLock::new(|| {
    [
        (
            r"(?i)(?:Rs\.?|INR|₹)\s*([\d,]+(?:\.\d{2})?)\s*(?:(lakhs?|crores?|thousands?))?",
            Currency::Inr,
        ),
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*(?:(million|thousand|billion))?",
            Currency::Usd,
        ),
        (
            r"(?i)([\d,]+(?:\.\d{2})?)\s*(?:rupees|indian rupees)",
            Currency::Inr,
        ),
    ]
    .into_iter()
    .filter_map(|(p, currency)| Regex::new(p).ok().map(|re| (re, currency)))
    .collect()
});

static DECIMAL_DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d$").ok());

/// Numeric value of a Unicode decimal digit such as `५`. Decimal digits
/// occupy contiguous runs of ten starting at zero, so the value is the
/// distance back to the run start, modulo ten.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let re = DECIMAL_DIGIT.as_ref()?;
    let is_digit = |c: char| re.is_match(c.encode_utf8(&mut [0; 4]));
    if !is_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut cp = u32::from(c);
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(offset % 10)
}

/// Drop grouping commas and rewrite non-ASCII decimal digits as ASCII.
fn normalize_number(literal: &str) -> String {
    literal
        .chars()
        .filter(|&c| c != ',')
        .map(|c| match decimal_digit_value(c) {
            Some(d) if !c.is_ascii_digit() => char::from_digit(d, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Multiplier for a scale word; unknown words scale by one.
pub fn scale_multiplier(word: &str) -> f64 {
    match word.to_lowercase().as_str() {
        "thousand" | "thousands" => 1e3,
        "lakh" | "lakhs" => 1e5,
        "crore" | "crores" => 1e7,
        "million" => 1e6,
        "billion" => 1e9,
        _ => 1.0,
    }
}

/// Every amount match across all patterns. Overlapping patterns may report
/// the same amount twice; numbers that fail to parse are skipped.
pub fn extract_amounts(text: &str, context_chars: usize) -> Vec<MonetaryMention> {
    let mut values = Vec::new();

    for (re, currency) in AMOUNT_PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let digits = normalize_number(number.as_str());
            let Ok(mut amount) = digits.parse::<f64>() else {
                debug!(literal = whole.as_str(), "skipping unparseable amount");
                continue;
            };

            if let Some(scale) = caps.get(2) {
                amount *= scale_multiplier(scale.as_str());
            }

            let context = context_window(text, whole.start(), whole.end(), context_chars, context_chars);
            values.push(MonetaryMention {
                original: whole.as_str().to_string(),
                amount,
                currency: *currency,
                context: context.trim().to_string(),
            });
        }
    }

    values
}

//! Fixed catalog of contract risk categories.
//!
//! Categories are checked in declaration order. Each category owns an ordered
//! list of matchers; the first matcher that hits decides the category and the
//! rest are not tried. All matchers are case-insensitive and run against the
//! original text so match offsets can be used to slice it directly.

use std::sync::LazyLock;

use lexguard_core::RiskLevel;
use regex::Regex;

/// One regex in a category's matcher list.
pub struct Matcher {
    pub source: &'static str,
    pub regex: Option<Regex>,
    /// Reject a hit when this word appears between the trailing whitespace
    /// after the match and the end of that line.
    pub not_followed_on_line_by: Option<&'static str>,
}

impl Matcher {
    fn new(source: &'static str) -> Self {
        Self {
            source,
            regex: compile(source),
            not_followed_on_line_by: None,
        }
    }

    /// Matches `source`, then at least one whitespace character, provided the
    /// rest of the line from some point in that whitespace run lacks `word`.
    fn unless_followed_on_line_by(source: &'static str, word: &'static str) -> Self {
        Self {
            source,
            regex: compile(source),
            not_followed_on_line_by: Some(word),
        }
    }

    /// Byte span of the leftmost hit, if any.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        let re = self.regex.as_ref()?;
        let Some(word) = self.not_followed_on_line_by else {
            return re.find(text).map(|m| (m.start(), m.end()));
        };

        for m in re.find_iter(text) {
            let tail = &text[m.end()..];
            // Candidate ends after each whitespace char, longest run first.
            let mut ends: Vec<usize> = tail
                .char_indices()
                .take_while(|(_, c)| c.is_whitespace())
                .map(|(i, c)| m.end() + i + c.len_utf8())
                .collect();
            ends.reverse();

            for end in ends {
                let line = text[end..].split('\n').next().unwrap_or("");
                if !line.to_lowercase().contains(word) {
                    return Some((m.start(), end));
                }
            }
        }
        None
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

/// A risk category: its matchers plus the advice attached to a hit.
pub struct RiskPattern {
    pub id: &'static str,
    pub matchers: Vec<Matcher>,
    pub level: RiskLevel,
    pub description: &'static str,
    pub recommendation: &'static str,
}

impl RiskPattern {
    /// Span of the first matcher (in list order) that hits.
    pub fn first_match(&self, text: &str) -> Option<(usize, usize)> {
        self.matchers.iter().find_map(|m| m.find(text))
    }
}

fn compile(source: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){source}")).ok()
}

static CATALOG: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    vec![
        RiskPattern {
            id: "unlimited_liability",
            matchers: vec![
                Matcher::new(r"unlimited\s+liability"),
                Matcher::new(r"liable\s+for\s+(?:any|all)"),
            ],
            level: RiskLevel::Critical,
            description: "Unlimited liability clauses expose your business to significant risk.",
            recommendation: "Negotiate a liability cap, typically 1-2x the contract value.",
        },
        RiskPattern {
            id: "one_sided_termination",
            matchers: vec![
                Matcher::new(r"may\s+terminate\s+(?:at\s+)?(?:any\s+time|without\s+cause)"),
                Matcher::new(r"sole\s+discretion\s+to\s+terminate"),
            ],
            level: RiskLevel::High,
            description: "One party has disproportionate termination rights.",
            recommendation: "Ensure mutual termination rights with adequate notice period.",
        },
        RiskPattern {
            id: "automatic_renewal",
            matchers: vec![
                Matcher::new(r"automatic(?:ally)?\s+renew"),
                Matcher::new(r"auto[\s-]?renew"),
            ],
            level: RiskLevel::Medium,
            description: "Contract auto-renews which may lock you into unfavorable terms.",
            recommendation: "Add a clause requiring written notice before renewal.",
        },
        RiskPattern {
            id: "broad_indemnification",
            matchers: vec![
                Matcher::new(r"indemnify\s+(?:and\s+)?hold\s+harmless"),
                Matcher::new(r"indemnify\s+against\s+(?:any|all)"),
            ],
            level: RiskLevel::High,
            description: "Broad indemnification may require covering unlimited claims.",
            recommendation: "Limit indemnification to direct damages caused by your breach.",
        },
        RiskPattern {
            id: "ip_assignment",
            matchers: vec![
                Matcher::new(r"assign\s+(?:all\s+)?(?:intellectual\s+property|ip)"),
                Matcher::new(r"work[\s-]?for[\s-]?hire"),
            ],
            level: RiskLevel::High,
            description: "You may be giving away intellectual property rights.",
            recommendation: "Exclude pre-existing IP. Consider licensing instead.",
        },
        RiskPattern {
            id: "non_compete",
            matchers: vec![
                Matcher::new(r"non[\s-]?compete"),
                Matcher::new(r"shall\s+not\s+compete"),
            ],
            level: RiskLevel::Medium,
            description: "Non-compete clauses may restrict future business opportunities.",
            recommendation: "Limit scope, geography, and duration.",
        },
        RiskPattern {
            id: "penalty_clauses",
            matchers: vec![
                Matcher::new(r"penalty\s+(?:of|amount)"),
                Matcher::new(r"liquidated\s+damages"),
            ],
            level: RiskLevel::Medium,
            description: "Contract contains penalty provisions.",
            recommendation: "Ensure penalties are proportionate. Add cure periods.",
        },
        RiskPattern {
            id: "warranty_disclaimer",
            matchers: vec![
                Matcher::new(r"as[\s-]?is"),
                Matcher::new(r"disclaim\s+(?:all\s+)?warrant"),
            ],
            level: RiskLevel::High,
            description: "Seller disclaims warranties, leaving no recourse for defects.",
            recommendation: "Request fitness for purpose warranty.",
        },
        RiskPattern {
            id: "unfavorable_payment",
            matchers: vec![
                Matcher::new(r"payment\s+(?:within|by)\s+(?:7|five|5)\s+days"),
                Matcher::new(r"payment\s+in\s+advance"),
            ],
            level: RiskLevel::Medium,
            description: "Payment terms may strain cash flow.",
            recommendation: "Negotiate 30-45 day payment terms.",
        },
        RiskPattern {
            id: "foreign_jurisdiction",
            matchers: vec![
                Matcher::unless_followed_on_line_by(r"jurisdiction\s+of", "india"),
                Matcher::unless_followed_on_line_by(
                    r"governed\s+by\s+(?:the\s+)?laws?\s+of",
                    "india",
                ),
            ],
            level: RiskLevel::High,
            description: "Dispute resolution outside India increases legal complexity.",
            recommendation: "Negotiate for Indian jurisdiction.",
        },
    ]
});

/// The risk catalog in checking order.
pub fn catalog() -> &'static [RiskPattern] {
    &CATALOG
}

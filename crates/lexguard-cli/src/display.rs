//! Vertical card display for analysis reports.
//!
//! Renders a merged [`Report`] as grouped, human-readable sections. Empty
//! sections are skipped; long lists are cut at [`MAX_LIST_ITEMS`].

use std::io::{self, Write};

use lexguard_core::truncate_chars;
use lexguard_extract::Party;
use lexguard_risk::ClauseRisk;

use crate::report::Report;

const MAX_LIST_ITEMS: usize = 10;
const MAX_EXCERPT_CHARS: usize = 160;

// ── Public API ──

/// Print a full report as a vertical card grouped by section.
pub fn print_report_card(out: &mut impl Write, report: &Report) -> io::Result<()> {
    let a = &report.assessment;
    let e = &report.extraction;

    writeln!(out, "=== Contract Analysis ({}) ===", report.contract_type)?;
    writeln!(out, "{}", a.summary.assessment)?;
    writeln!(out)?;

    writeln!(out, "Risk")?;
    row(out, "overall_score", a.overall_score)?;
    row(out, "risk_level", a.risk_level)?;
    row(out, "recommended_action", &a.summary.recommended_action)?;
    for level in lexguard_core::RiskLevel::ALL {
        let n = a.statistics.count(level);
        if n > 0 {
            row(out, &format!("{level}_risks"), n)?;
        }
    }
    writeln!(out)?;

    if !a.findings.is_empty() {
        writeln!(out, "Findings ({}):", a.findings.len())?;
        for f in &a.findings {
            writeln!(out, "  {:<26} {}", f.label, f.level)?;
            writeln!(out, "    {}", f.description)?;
            writeln!(out, "    excerpt: {}", excerpt(&f.clause_excerpt))?;
            writeln!(out, "    fix: {}", f.recommendation)?;
        }
        writeln!(out)?;
    }

    print_parties(out, &report.parties)?;

    writeln!(out, "Document Statistics")?;
    row(out, "characters", e.statistics.character_count)?;
    row(out, "words", e.statistics.word_count)?;
    row(out, "sentences", e.statistics.sentence_count)?;
    row(out, "paragraphs", e.statistics.paragraph_count)?;
    row(out, "avg_word_length", format!("{:.2}", e.statistics.avg_word_length))?;
    row(out, "avg_sentence_length", format!("{:.2}", e.statistics.avg_sentence_length))?;
    row(
        out,
        "language",
        format!(
            "{} (en {:.2}, hi {:.2})",
            json_label(&e.language_detection.primary),
            e.language_detection.english_ratio,
            e.language_detection.hindi_ratio
        ),
    )?;
    writeln!(out)?;

    if !e.dates.is_empty() {
        writeln!(out, "Dates ({}):", e.dates.len())?;
        let items = e.dates.iter().map(|d| format!("{:<26} {}", d.value, json_label(&d.date_type)));
        list(out, e.dates.len(), items)?;
    }

    if !e.monetary_values.is_empty() {
        writeln!(out, "Monetary Values ({}):", e.monetary_values.len())?;
        let items = e
            .monetary_values
            .iter()
            .map(|m| format!("{:<26} {} {:.2}", m.original.trim(), json_label(&m.currency), m.amount));
        list(out, e.monetary_values.len(), items)?;
    }

    let entities: Vec<_> = e.entities.iter().filter(|(_, v)| !v.is_empty()).collect();
    if !entities.is_empty() {
        writeln!(out, "Entities")?;
        for (label, values) in entities {
            let shown: Vec<&str> = values.iter().take(MAX_LIST_ITEMS).map(String::as_str).collect();
            row(out, label, shown.join(", "))?;
        }
        writeln!(out)?;
    }

    if !e.key_terms.is_empty() {
        writeln!(out, "Key Terms")?;
        let terms: Vec<String> = e
            .key_terms
            .iter()
            .take(MAX_LIST_ITEMS)
            .map(|t| format!("{} ({})", t.term, t.count))
            .collect();
        writeln!(out, "  {}", terms.join(", "))?;
        writeln!(out)?;
    }

    let important: Vec<_> = e
        .clauses
        .iter()
        .filter(|c| c.importance == lexguard_extract::Importance::High)
        .collect();
    if !important.is_empty() {
        writeln!(out, "High-Importance Clauses ({}):", important.len())?;
        let items = important
            .iter()
            .map(|c| format!("#{:<4} [{}] {}", c.id, c.clause_type, excerpt(&c.text)));
        list(out, important.len(), items)?;
    }

    Ok(())
}

/// Print the risk profile of a single clause.
pub fn print_clause_card(out: &mut impl Write, clause: &ClauseRisk) -> io::Result<()> {
    writeln!(out, "=== Clause Risk ===")?;
    row(out, "has_risks", if clause.has_risks { "yes" } else { "no" })?;
    row(out, "risk_level", clause.risk_level)?;
    for r in &clause.risks {
        writeln!(out, "  {:<26} {}", r.label, r.level)?;
        writeln!(out, "    fix: {}", r.recommendation)?;
    }
    Ok(())
}

pub fn print_parties(out: &mut impl Write, parties: &[Party]) -> io::Result<()> {
    if parties.is_empty() {
        return Ok(());
    }
    writeln!(out, "Parties ({}):", parties.len())?;
    let items = parties
        .iter()
        .map(|p| format!("{:<26} {}", excerpt(&p.name), json_label(&p.party_type)));
    list(out, parties.len(), items)
}

// ── Helpers ──

fn row(out: &mut impl Write, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {:<26} {}", key, value)
}

fn list(out: &mut impl Write, len: usize, items: impl Iterator<Item = String>) -> io::Result<()> {
    for item in items.take(MAX_LIST_ITEMS) {
        writeln!(out, "    {item}")?;
    }
    if len > MAX_LIST_ITEMS {
        writeln!(out, "    ... and {} more", len - MAX_LIST_ITEMS)?;
    }
    writeln!(out)
}

/// Single-line, length-capped rendering of free text.
fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > MAX_EXCERPT_CHARS {
        format!("{}...", truncate_chars(&flat, MAX_EXCERPT_CHARS - 3))
    } else {
        flat
    }
}

/// The serialized form of a unit enum, e.g. `effective_date` or `INR`.
fn json_label(value: &impl serde::Serialize) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

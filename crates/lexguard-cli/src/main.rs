mod display;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lexguard_core::ContractType;
use lexguard_extract::{ExtractionConfig, Extractor, RuleBasedRecognizer, Segmenter};
use lexguard_risk::RiskAnalyzer;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "lexguard", version, about = "Rule-based contract risk and extraction")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    #[default]
    Card,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and extract a plain-text contract.
    Analyze {
        path: PathBuf,
        /// general, employment, vendor, service, lease, nda, partnership, or any label
        #[arg(long, env = "LEXGUARD_CONTRACT_TYPE", default_value = "general")]
        contract_type: String,
        #[arg(long, env = "LEXGUARD_FORMAT", value_enum, default_value_t = Format::Card)]
        format: Format,
        /// punctuation|unicode
        #[arg(long, env = "LEXGUARD_SEGMENTER", default_value = "punctuation")]
        segmenter: Segmenter,
        /// Add ORG and PERSON entities from the rule-based recognizer.
        #[arg(long)]
        with_ner: bool,
    },
    /// Check one clause against the risk catalog.
    Clause {
        text: String,
        #[arg(long, env = "LEXGUARD_FORMAT", value_enum, default_value_t = Format::Card)]
        format: Format,
    },
    /// List the parties introduced near the top of a contract.
    Parties {
        path: PathBuf,
        #[arg(long, env = "LEXGUARD_FORMAT", value_enum, default_value_t = Format::Card)]
        format: Format,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    tracing::debug!("lexguard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Analyze {
            path,
            contract_type,
            format,
            segmenter,
            with_ner,
        } => cmd_analyze(&path, ContractType::from(contract_type.as_str()), format, segmenter, with_ner),
        Commands::Clause { text, format } => cmd_clause(&text, format),
        Commands::Parties { path, format } => cmd_parties(&path, format),
    }
}

fn cmd_analyze(
    path: &Path,
    contract_type: ContractType,
    format: Format,
    segmenter: Segmenter,
    with_ner: bool,
) -> Result<()> {
    let text = read_text(path)?;

    let config = ExtractionConfig {
        segmenter,
        ..Default::default()
    };
    let mut extractor = Extractor::with_config(config).context("invalid extraction settings")?;
    if with_ner {
        extractor = extractor.with_recognizer(RuleBasedRecognizer);
    }

    let analyzer = RiskAnalyzer::new();
    tracing::debug!(
        segmenter = ?extractor.config().segmenter,
        context_chars = extractor.config().context_chars,
        excerpt_limit = analyzer.config().excerpt_limit,
        with_ner,
        "analyzing {}",
        path.display()
    );

    let report = Report::build(&text, contract_type, &extractor, &analyzer);
    let mut out = io::stdout().lock();
    match format {
        Format::Json => print_json(&mut out, &report),
        Format::Card => display::print_report_card(&mut out, &report).context("writing report"),
    }
}

fn cmd_clause(text: &str, format: Format) -> Result<()> {
    let clause = RiskAnalyzer::new().clause_risk(text);
    let mut out = io::stdout().lock();
    match format {
        Format::Json => print_json(&mut out, &clause),
        Format::Card => display::print_clause_card(&mut out, &clause).context("writing clause risk"),
    }
}

fn cmd_parties(path: &Path, format: Format) -> Result<()> {
    let text = read_text(path)?;
    let parties = Extractor::new().identify_parties(&text);
    let mut out = io::stdout().lock();
    match format {
        Format::Json => print_json(&mut out, &parties),
        Format::Card if parties.is_empty() => {
            writeln!(out, "No parties found").context("writing parties")
        }
        Format::Card => display::print_parties(&mut out, &parties).context("writing parties"),
    }
}

/// Read a contract file. Invalid UTF-8 is replaced rather than rejected.
fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("serializing JSON")?;
    writeln!(out).context("writing JSON")?;
    Ok(())
}

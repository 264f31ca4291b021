//! diekert CLI -- analyze transaction traces and generate random ones.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use diekert_core::{Analysis, AnalysisOptions, Transactions};
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "diekert",
    about = "Dependency graphs, Diekert graphs and Foata normal forms"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a word over a transaction file
    Analyze(AnalyzeArgs),
    /// Generate random transaction sets and words
    Generate(GenerateArgs),
    /// Print the JSON Schema of the `analyze --json` report to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// File with one `(id) result := expression` line per transaction
    #[arg(long)]
    pub transactions: PathBuf,
    /// Word of transaction identifiers, e.g. `baadcb`
    #[arg(long)]
    pub word: String,
    /// Alphabet of the independency graph (defaults to every identifier)
    #[arg(long)]
    pub alphabet: Option<String>,
    /// Write dependency.dot, independency.dot and diekert.dot here
    #[arg(long)]
    pub dot_dir: Option<PathBuf>,
    /// Only give graph nodes to transactions with a dependent partner
    #[arg(long)]
    pub no_isolated: bool,
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
    /// Also print the transactions, Diekert edges and Foata steps
    #[arg(long)]
    pub verbose: bool,
}

impl AnalyzeArgs {
    #[must_use]
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            alphabet: self.alphabet.as_ref().map(|letters| {
                letters
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != ',')
                    .collect()
            }),
            include_isolated: !self.no_isolated,
        }
    }
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of samples to generate
    #[arg(long)]
    pub n_sample: u64,
    /// Number of transactions per sample (at most 26)
    #[arg(long)]
    pub n_transaction: u64,
    /// Number of variables (at most 26)
    #[arg(long)]
    pub n_variable: u64,
    /// Number of reads per transaction
    #[arg(long)]
    pub n_read: u64,
    /// Length of each word
    #[arg(long)]
    pub word_length: u64,
    /// Output directory for generated samples
    #[arg(long)]
    pub output_dir: PathBuf,
}

/// Machine-readable result of `analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Report {
    pub word: String,
    /// Ordered pairs of the dependency relation, both orientations listed.
    pub dependency: Vec<(char, char)>,
    /// Ordered pairs of the independency relation.
    pub independency: Vec<(char, char)>,
    /// Arcs of the Diekert graph between word positions.
    pub diekert: Vec<(usize, usize)>,
    /// Foata normal form, e.g. `(bdc)(a)(a)(b)`.
    pub foata: String,
    /// Symbols of each Foata step.
    pub steps: Vec<String>,
}

impl From<&Analysis> for Report {
    fn from(analysis: &Analysis) -> Self {
        let mut diekert: Vec<_> = analysis.diekert.edges().collect();
        diekert.sort_unstable();
        Self {
            word: analysis.word.clone(),
            dependency: analysis.dependency.relation(),
            independency: analysis.independency.relation(),
            diekert,
            foata: analysis.foata.to_string(),
            steps: analysis
                .foata
                .steps()
                .iter()
                .map(|step| step.symbols.clone())
                .collect(),
        }
    }
}

/// Human-readable result of `analyze`.
///
/// In verbose mode the transactions come first, one input line each.
#[must_use]
pub fn render_text(transactions: &Transactions, analysis: &Analysis, verbose: bool) -> String {
    let mut output = String::new();
    if verbose {
        let _ = writeln!(output, "Transactions:");
        for transaction in transactions.values() {
            let _ = writeln!(output, "  {transaction}");
        }
    }
    let _ = writeln!(output, "D = {}", analysis.dependency);
    let _ = writeln!(output, "I = {}", analysis.independency);
    let _ = writeln!(output, "FNF([{}]) = {}", analysis.word, analysis.foata);
    if verbose {
        let mut edges: Vec<_> = analysis.diekert.edges().collect();
        edges.sort_unstable();
        let _ = writeln!(output, "Diekert graph:");
        for (from, to) in edges {
            let from_label = analysis.diekert.label(from).unwrap_or('?');
            let to_label = analysis.diekert.label(to).unwrap_or('?');
            let _ = writeln!(output, "  {from}:{from_label} -> {to}:{to_label}");
        }
        for (level, step) in analysis.foata.steps().iter().enumerate() {
            let _ = writeln!(
                output,
                "  step {}: {} at {:?}",
                level + 1,
                step.symbols,
                step.positions
            );
        }
    }
    output
}

/// DOT files written by `analyze --dot-dir`.
#[must_use]
pub fn dot_files(analysis: &Analysis) -> [(&'static str, String); 3] {
    [
        ("dependency.dot", analysis.dependency.export().to_dot()),
        ("independency.dot", analysis.independency.export().to_dot()),
        ("diekert.dot", analysis.diekert.export().to_dot()),
    ]
}

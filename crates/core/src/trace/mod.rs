//! Trace analysis: from transactions and a word to the Foata normal form.
//!
//! ```text
//! transactions -> dependency graph -> independency graph
//!                        |
//!               word ----+-> precedence graph -> Diekert graph -> Foata form
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use self::dependency::{add_dependency_edges, independency_graph};
use self::diekert::diekert_graph;
use self::error::Error;
use self::foata::{foata_normal_form, FoataForm};
use crate::graph::dependency::DependencyGraph;
use crate::graph::diekert::DiekertGraph;
use crate::graph::error::LookupError;
use crate::transaction::Transactions;

pub mod dependency;
pub mod diekert;
pub mod error;
pub mod foata;

/// Knobs of [`analyze`].
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Alphabet of the independency graph. Defaults to every transaction
    /// identifier.
    pub alphabet: Option<Vec<char>>,
    /// Give every transaction a dependency-graph node up front, so that
    /// transactions dependent only on themselves still appear in both graphs.
    /// When unset, only transactions with at least one dependent partner get
    /// a node, and an alphabet naming any other transaction is rejected by
    /// the independency graph builder.
    pub include_isolated: bool,
}

/// Every artifact derived from one transaction set and one word.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub word: String,
    pub dependency: DependencyGraph,
    pub independency: DependencyGraph,
    pub diekert: DiekertGraph,
    pub foata: FoataForm,
}

/// Analyze `word` as a trace over `transactions`.
///
/// # Errors
///
/// Returns [`Error::Lookup`] if `word` uses a symbol that is not a
/// transaction identifier, or if the independency alphabet names a symbol the
/// dependency graph lacks. Returns [`Error::InconsistentGraph`] if a derived
/// graph is cyclic, which a well-formed word cannot cause.
pub fn analyze(
    transactions: &Transactions,
    word: &str,
    options: &AnalysisOptions,
) -> Result<Analysis, Error> {
    tracing::debug!(
        transactions = transactions.len(),
        word_length = word.chars().count(),
        include_isolated = options.include_isolated,
        "analyzing trace"
    );

    if let Some(symbol) = word.chars().find(|c| !transactions.contains_key(c)) {
        tracing::debug!(%symbol, "word uses an unknown transaction");
        return Err(LookupError::UnknownSymbol(symbol).into());
    }

    let mut dependency = DependencyGraph::new();
    if options.include_isolated {
        for &id in transactions.keys() {
            dependency.add_node(id);
        }
    }
    add_dependency_edges(&mut dependency, transactions);

    let independency = match &options.alphabet {
        Some(alphabet) => independency_graph(&dependency, alphabet.iter().copied())?,
        None => independency_graph(&dependency, transactions.keys().copied())?,
    };

    let diekert = diekert_graph(word, &dependency)?;
    let foata = foata_normal_form(&diekert)?;

    tracing::debug!(%foata, "trace analyzed");
    Ok(Analysis {
        word: word.into(),
        dependency,
        independency,
        diekert,
        foata,
    })
}

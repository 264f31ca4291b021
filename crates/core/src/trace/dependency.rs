//! Dependency and independency graphs over a transaction alphabet.

use crate::graph::dependency::DependencyGraph;
use crate::graph::error::LookupError;
use crate::transaction::{Transaction, Transactions};

/// Builds the dependency graph of `transactions`.
///
/// Every ordered pair of identifiers is visited in identifier order; a
/// dependent pair of distinct transactions contributes one undirected edge,
/// and its endpoints become nodes the first time they appear. Transactions
/// that depend on nothing but themselves therefore have no node.
#[must_use]
pub fn dependency_graph(transactions: &Transactions) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    add_dependency_edges(&mut graph, transactions);
    graph
}

/// Adds the dependency edges of `transactions` to `graph`.
///
/// Nodes already in `graph` keep their indices; pre-seeding a node for every
/// identifier is how callers keep isolated transactions in the graph.
pub fn add_dependency_edges(graph: &mut DependencyGraph, transactions: &Transactions) {
    for (&first, first_tx) in transactions {
        for (&second, second_tx) in transactions {
            if first == second
                || graph.contains_edge(first, second)
                || !Transaction::are_dependent(first_tx, second_tx)
            {
                continue;
            }
            graph.add_edge_with_nodes(first, second);
        }
    }
    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "dependency graph built"
    );
}

/// Builds the complement of `dependency` restricted to `alphabet`.
///
/// The new graph starts with the nodes of `dependency`, in the same order.
/// For every ordered pair of `alphabet`, an edge is added iff the two symbols
/// are not dependent. A symbol is always dependent on itself, so the result
/// has no self-loops.
///
/// # Errors
///
/// Returns [`LookupError::UnknownSymbol`] for an alphabet symbol that is not a
/// node of `dependency` and is independent of some other alphabet symbol.
pub fn independency_graph<I>(
    dependency: &DependencyGraph,
    alphabet: I,
) -> Result<DependencyGraph, LookupError>
where
    I: IntoIterator<Item = char>,
    I::IntoIter: Clone,
{
    let mut graph = DependencyGraph::new();
    for symbol in dependency.symbols() {
        graph.add_node(symbol);
    }

    let alphabet = alphabet.into_iter();
    for from in alphabet.clone() {
        for to in alphabet.clone() {
            if dependency.are_dependent(from, to) || graph.contains_edge(from, to) {
                continue;
            }
            graph.add_edge(from, to)?;
        }
    }
    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "independency graph built"
    );
    Ok(graph)
}

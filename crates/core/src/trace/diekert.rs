//! Diekert graph of a word.
//!
//! # Algorithm
//!
//! 1. **Precedence graph**: one node per word position, and an arc `i -> j`
//!    for every `i < j` whose symbols are dependent. This is already
//!    transitively closed with respect to conflicts, and heavily redundant.
//! 2. **Transitive reduction**: for every source position, compute the length
//!    of the longest path to each reachable position by relaxing arcs in
//!    topological order. An arc `s -> v` survives iff that length is exactly
//!    one, i.e. no longer path from `s` to `v` exists.
//!
//! ```text
//! word  b a a d c b      (a-b dependent, c and d independent of all)
//!
//! precedence: 0->1 0->2 0->5 1->2 1->5 2->5
//! reduced:    0->1 1->2 2->5
//! ```
//!
//! Each source costs O(V+E), so the reduction is O(V*(V+E)).

use alloc::vec::Vec;

use crate::graph::dependency::DependencyGraph;
use crate::graph::diekert::DiekertGraph;
use crate::trace::error::Error;

/// Builds the unreduced precedence graph of `word`.
///
/// # Errors
///
/// Never fails for a graph built from `word` itself; the error type is the
/// one shared with [`reduce_transitively`].
pub fn precedence_graph(word: &str, dependency: &DependencyGraph) -> Result<DiekertGraph, Error> {
    let symbols: Vec<char> = word.chars().collect();
    let mut graph = DiekertGraph::from_word(word);
    for (i, &earlier) in symbols.iter().enumerate() {
        for (j, &later) in symbols.iter().enumerate().skip(i + 1) {
            if dependency.are_dependent(earlier, later) {
                graph.add_edge(i, j)?;
            }
        }
    }
    tracing::debug!(
        positions = graph.len(),
        edges = graph.edge_count(),
        "precedence graph built"
    );
    Ok(graph)
}

/// Longest path length, in arcs, from `source` to every position.
///
/// `order` must be a topological order of `graph` and `start` the index of
/// `source` within it. Unreachable positions are `None`; `source` is
/// `Some(0)`.
#[must_use]
pub fn longest_paths_from(
    graph: &DiekertGraph,
    order: &[usize],
    start: usize,
) -> Vec<Option<usize>> {
    let mut length: Vec<Option<usize>> = alloc::vec![None; graph.len()];
    let Some(&source) = order.get(start) else {
        return length;
    };
    length[source] = Some(0);

    for &position in &order[start..] {
        let Some(current) = length[position] else {
            continue;
        };
        for &next in graph.successors(position) {
            let candidate = current + 1;
            if length[next].is_none_or(|known| candidate > known) {
                length[next] = Some(candidate);
            }
        }
    }
    length
}

/// Keeps only the cover arcs of `graph`.
///
/// The result has the same nodes as `graph`, and `u` reaches `v` in the
/// result iff it does in `graph`.
///
/// # Errors
///
/// Returns [`Error::InconsistentGraph`] if `graph` has a cycle.
pub fn reduce_transitively(graph: &DiekertGraph) -> Result<DiekertGraph, Error> {
    let order = graph.topological_sort().ok_or_else(|| Error::InconsistentGraph {
        positions: graph.unordered_positions(),
    })?;

    let mut rank = alloc::vec![0; graph.len()];
    for (i, &position) in order.iter().enumerate() {
        rank[position] = i;
    }

    let mut reduced = DiekertGraph::from_word(&graph.word());
    for source in 0..graph.len() {
        let lengths = longest_paths_from(graph, &order, rank[source]);
        for (target, length) in lengths.into_iter().enumerate() {
            if length == Some(1) {
                reduced.add_edge(source, target)?;
            }
        }
        tracing::trace!(
            source,
            covers = reduced.successors(source).len(),
            "reduced arcs of position"
        );
    }

    tracing::debug!(
        removed = graph.edge_count() - reduced.edge_count(),
        kept = reduced.edge_count(),
        "transitive reduction done"
    );
    Ok(reduced)
}

/// Builds the Diekert graph of `word` under `dependency`.
///
/// # Errors
///
/// Propagates the errors of [`precedence_graph`] and [`reduce_transitively`].
pub fn diekert_graph(word: &str, dependency: &DependencyGraph) -> Result<DiekertGraph, Error> {
    let precedence = precedence_graph(word, dependency)?;
    reduce_transitively(&precedence)
}

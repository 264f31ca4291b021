use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::graph::arena::Graph;
use crate::graph::error::LookupError;

/// Directed graph whose nodes are the positions of a word.
///
/// Node `i` is labelled with the `i`-th symbol of the word, so a repeated
/// symbol yields several nodes with the same label. Arcs are added by index.
/// The builders in [`crate::trace::diekert`] only ever add `i -> j` with
/// `i < j`, but the graph itself does not enforce it; the ordering queries
/// below therefore still detect cycles.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiekertGraph {
    graph: Graph<char>,
}

impl DiekertGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One node per character of `word`, in order, with no arcs.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut graph = Self::new();
        for symbol in word.chars() {
            graph.add_node(symbol);
        }
        graph
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph<char> {
        &self.graph
    }

    pub fn add_node(&mut self, symbol: char) -> usize {
        self.graph.add_node(symbol)
    }

    /// Inserts the arc `from -> to`. Returns `Ok(false)` if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownPosition`] if either position is out of
    /// range.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, LookupError> {
        self.graph.add_arc(from, to)
    }

    #[must_use]
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.graph.has_arc(from, to)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.arc_count()
    }

    #[must_use]
    pub fn label(&self, position: usize) -> Option<char> {
        self.graph.label(position).copied()
    }

    #[must_use]
    pub fn successors(&self, position: usize) -> &[usize] {
        self.graph.neighbors(position)
    }

    /// Arcs grouped by source position.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph.arcs()
    }

    /// The word spelled by the node labels.
    #[must_use]
    pub fn word(&self) -> String {
        self.graph.nodes().map(|(_, &symbol)| symbol).collect()
    }

    /// Kahn's algorithm with a FIFO ready queue seeded in position order.
    ///
    /// Returns the processed positions and the residual in-degrees; a
    /// position with a non-zero residual lies on or behind a cycle.
    fn kahn(&self) -> (Vec<usize>, Vec<usize>) {
        let mut in_degree = self.graph.in_degrees();
        let mut ready: VecDeque<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(position, _)| position)
            .collect();

        let mut order = Vec::with_capacity(self.len());
        while let Some(position) = ready.pop_front() {
            order.push(position);
            for &next in self.successors(position) {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push_back(next);
                }
            }
        }
        (order, in_degree)
    }

    /// Returns a topological ordering of the positions, or `None` if the
    /// graph has a cycle.
    /// Time complexity: O(V+E).
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<usize>> {
        let (order, _) = self.kahn();
        (order.len() == self.len()).then_some(order)
    }

    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.topological_sort().is_some()
    }

    /// Positions that Kahn's algorithm cannot release, in ascending order.
    ///
    /// These are the positions on a cycle plus everything reachable only
    /// through one. Empty iff the graph is acyclic.
    #[must_use]
    pub fn unordered_positions(&self) -> Vec<usize> {
        let (_, in_degree) = self.kahn();
        in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree > 0)
            .map(|(position, _)| position)
            .collect()
    }

    /// All positions reachable from `source` by a non-empty path.
    #[must_use]
    pub fn reachable(&self, source: usize) -> HashSet<usize> {
        let mut reachable = HashSet::new();
        let mut stack: Vec<usize> = self.successors(source).to_vec();
        while let Some(position) = stack.pop() {
            if reachable.insert(position) {
                stack.extend_from_slice(self.successors(position));
            }
        }
        reachable
    }
}

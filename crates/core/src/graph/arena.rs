use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::graph::error::LookupError;

/// A labelled node and the indices of the nodes it points to, in insertion order.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<L> {
    pub label: L,
    pub neighbors: Vec<usize>,
}

/// Arena of labelled nodes addressed by stable indices.
///
/// Arcs are kept twice: as the ordered neighbor list of the source node, and
/// in a hash set so that membership tests are O(1). Nodes are never removed,
/// so an index handed out by [`add_node`](Self::add_node) stays valid for the
/// lifetime of the graph.
///
/// This is only storage. The undirected and positional insertion policies
/// live in [`DependencyGraph`](crate::graph::dependency::DependencyGraph) and
/// [`DiekertGraph`](crate::graph::diekert::DiekertGraph).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<L> {
    nodes: Vec<Node<L>>,
    arcs: HashSet<(usize, usize)>,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            arcs: HashSet::new(),
        }
    }
}

impl<L> Graph<L> {
    /// Appends a node and returns its index.
    pub fn add_node(&mut self, label: L) -> usize {
        self.nodes.push(Node {
            label,
            neighbors: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Inserts the arc `from -> to`.
    ///
    /// Returns `Ok(false)` if the arc was already present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownPosition`] if either endpoint is not a
    /// node of this graph.
    pub fn add_arc(&mut self, from: usize, to: usize) -> Result<bool, LookupError> {
        for index in [from, to] {
            if index >= self.nodes.len() {
                return Err(LookupError::UnknownPosition(index));
            }
        }
        if !self.arcs.insert((from, to)) {
            return Ok(false);
        }
        self.nodes[from].neighbors.push(to);
        Ok(true)
    }

    #[must_use]
    pub fn has_arc(&self, from: usize, to: usize) -> bool {
        self.arcs.contains(&(from, to))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node<L>> {
        self.nodes.get(index)
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&L> {
        self.nodes.get(index).map(|node| &node.label)
    }

    /// Outgoing neighbors of `index`; empty for an unknown index.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map_or(&[], |node| node.neighbors.as_slice())
    }

    /// Iterates `(index, label)` in node order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &L)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (i, &node.label))
    }

    /// Iterates arcs grouped by source node, each group in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(from, node)| node.neighbors.iter().map(move |&to| (from, to)))
    }

    /// Number of arcs entering each node.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = alloc::vec![0; self.nodes.len()];
        for node in &self.nodes {
            for &to in &node.neighbors {
                in_degree[to] += 1;
            }
        }
        in_degree
    }
}

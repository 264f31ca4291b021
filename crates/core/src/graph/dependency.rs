use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use hashbrown::HashMap;

use crate::graph::arena::Graph;
use crate::graph::error::LookupError;

/// Undirected graph over transaction symbols.
///
/// Nodes are added on demand and receive the next free index; `indexes`
/// resolves a symbol to that index. An edge `a - b` is stored as the two arcs
/// `a -> b` and `b -> a`, so it is the same edge whichever endpoint is named
/// first. Self-loops are never stored: the relation it describes is
/// reflexive, which [`are_dependent`](Self::are_dependent) accounts for.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    graph: Graph<char>,
    indexes: HashMap<char, usize>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying arena, e.g. for export.
    #[must_use]
    pub const fn graph(&self) -> &Graph<char> {
        &self.graph
    }

    #[must_use]
    pub fn contains_node(&self, symbol: char) -> bool {
        self.indexes.contains_key(&symbol)
    }

    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.indexes.get(&symbol).copied()
    }

    /// Adds `symbol` if absent and returns its index.
    pub fn add_node(&mut self, symbol: char) -> usize {
        if let Some(&index) = self.indexes.get(&symbol) {
            return index;
        }
        let index = self.graph.add_node(symbol);
        self.indexes.insert(symbol, index);
        index
    }

    /// Returns `true` if the edge `first - second` is stored.
    ///
    /// Symbols that are not nodes have no edges.
    #[must_use]
    pub fn contains_edge(&self, first: char, second: char) -> bool {
        match (self.index_of(first), self.index_of(second)) {
            (Some(a), Some(b)) => self.graph.has_arc(a, b),
            _ => false,
        }
    }

    /// Dependency test backed by this graph: a symbol always depends on
    /// itself, distinct symbols depend on each other iff they share an edge.
    #[must_use]
    pub fn are_dependent(&self, first: char, second: char) -> bool {
        first == second || self.contains_edge(first, second)
    }

    /// Inserts the undirected edge `first - second` between existing nodes.
    ///
    /// Returns `Ok(false)` if the edge was already present or `first` equals
    /// `second`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownSymbol`] if either symbol is not a node.
    pub fn add_edge(&mut self, first: char, second: char) -> Result<bool, LookupError> {
        let a = self
            .index_of(first)
            .ok_or(LookupError::UnknownSymbol(first))?;
        let b = self
            .index_of(second)
            .ok_or(LookupError::UnknownSymbol(second))?;
        if a == b {
            return Ok(false);
        }
        let inserted = self.graph.add_arc(a, b)?;
        self.graph.add_arc(b, a)?;
        Ok(inserted)
    }

    /// Inserts the edge `first - second`, adding missing endpoints first.
    ///
    /// Returns `false` if the edge was already present or `first` equals
    /// `second`.
    pub fn add_edge_with_nodes(&mut self, first: char, second: char) -> bool {
        let a = self.add_node(first);
        let b = self.add_node(second);
        if a == b || self.graph.has_arc(a, b) {
            return false;
        }
        // both indices come from `add_node`, so neither insertion can fail
        let _ = self.graph.add_arc(a, b);
        let _ = self.graph.add_arc(b, a);
        true
    }

    /// Symbols in node-index order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.graph.nodes().map(|(_, &symbol)| symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.arcs().filter(|(a, b)| a < b).count()
    }

    /// Each undirected edge once, lower node index first, in node order.
    #[must_use]
    pub fn edges(&self) -> Vec<(char, char)> {
        self.graph
            .arcs()
            .filter(|(a, b)| a < b)
            .filter_map(|(a, b)| Some((*self.graph.label(a)?, *self.graph.label(b)?)))
            .collect()
    }

    /// The symmetric relation as sorted ordered pairs: both `(a, b)` and
    /// `(b, a)` for every edge.
    #[must_use]
    pub fn relation(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> = self
            .graph
            .arcs()
            .filter_map(|(a, b)| Some((*self.graph.label(a)?, *self.graph.label(b)?)))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Formats `pairs` as `{(a,b), (a,c)}`.
pub fn format_relation(f: &mut Formatter<'_>, pairs: &[(char, char)]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (a, b)) in pairs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({a},{b})")?;
    }
    write!(f, "}}")
}

impl Display for DependencyGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_relation(f, &self.relation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let mut graph = DependencyGraph::new();
        graph.add_node('a');
        graph.add_node('b');

        assert_eq!(graph.add_edge('b', 'a'), Ok(true));
        assert_eq!(graph.add_edge('a', 'b'), Ok(false));

        assert!(graph.contains_edge('a', 'b'));
        assert!(graph.contains_edge('b', 'a'));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![('a', 'b')]);
    }

    #[test]
    fn test_add_edge_requires_nodes() {
        let mut graph = DependencyGraph::new();
        graph.add_node('a');
        assert_eq!(
            graph.add_edge('a', 'z'),
            Err(LookupError::UnknownSymbol('z'))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_lazy_nodes_get_next_index() {
        let mut graph = DependencyGraph::new();
        assert!(graph.add_edge_with_nodes('c', 'a'));
        assert!(!graph.add_edge_with_nodes('a', 'c'));
        assert!(graph.add_edge_with_nodes('a', 'b'));

        assert_eq!(graph.index_of('c'), Some(0));
        assert_eq!(graph.index_of('a'), Some(1));
        assert_eq!(graph.index_of('b'), Some(2));
        assert_eq!(graph.symbols().collect::<Vec<_>>(), vec!['c', 'a', 'b']);
        assert_eq!(graph.graph().neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_reflexive_without_self_loops() {
        let mut graph = DependencyGraph::new();
        graph.add_edge_with_nodes('a', 'b');

        assert!(graph.are_dependent('a', 'a'));
        assert!(graph.are_dependent('q', 'q'));
        assert!(!graph.add_edge_with_nodes('a', 'a'));
        assert_eq!(graph.add_edge('b', 'b'), Ok(false));
        assert!(!graph.contains_edge('a', 'a'));
        assert!(!graph.are_dependent('a', 'q'));
    }

    #[test]
    fn test_display_relation() {
        let mut graph = DependencyGraph::new();
        graph.add_edge_with_nodes('b', 'a');
        graph.add_edge_with_nodes('a', 'c');

        assert_eq!(
            format!("{graph}"),
            "{(a,b), (a,c), (b,a), (c,a)}"
        );
        assert_eq!(format!("{}", DependencyGraph::new()), "{}");
    }
}

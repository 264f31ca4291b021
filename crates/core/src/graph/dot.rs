//! Graphviz export.
//!
//! Every graph is exported as an ordered node list `(index, label)` and an
//! ordered edge list `(from, to)`, then rendered as a `digraph` with one edge
//! statement per edge and one label statement per node:
//!
//! ```text
//! digraph g{
//! 0 -> 1
//! 0[label=b]
//! 1[label=a]
//! }
//! ```
//!
//! Undirected graphs list each edge once and switch arrowheads off.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Write};

use crate::graph::arena::Graph;
use crate::graph::dependency::DependencyGraph;
use crate::graph::diekert::DiekertGraph;

#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Directed,
    /// Arcs are stored in both directions; only `from <= to` is exported.
    Undirected,
}

/// Node and edge lists of a graph, ready to be rendered.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export<L> {
    pub direction: Direction,
    pub nodes: Vec<(usize, L)>,
    pub edges: Vec<(usize, usize)>,
}

impl<L: Clone> Export<L> {
    #[must_use]
    pub fn from_graph(graph: &Graph<L>, direction: Direction) -> Self {
        let nodes = graph
            .nodes()
            .map(|(index, label)| (index, label.clone()))
            .collect();
        let edges = graph
            .arcs()
            .filter(|(from, to)| direction == Direction::Directed || from <= to)
            .collect();
        Self {
            direction,
            nodes,
            edges,
        }
    }
}

impl<L: Display> Export<L> {
    /// Renders the DOT description.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph g{\n");
        if self.direction == Direction::Undirected {
            output.push_str("edge [dir=none]\n");
        }
        for (from, to) in &self.edges {
            let _ = writeln!(output, "{from} -> {to}");
        }
        for (index, label) in &self.nodes {
            let _ = writeln!(output, "{index}[label={label}]");
        }
        output.push_str("}\n");
        output
    }
}

/// Shorthand for `Export::from_graph(graph, direction).to_dot()`.
#[must_use]
pub fn to_dot<L: Clone + Display>(graph: &Graph<L>, direction: Direction) -> String {
    Export::from_graph(graph, direction).to_dot()
}

impl DependencyGraph {
    #[must_use]
    pub fn export(&self) -> Export<char> {
        Export::from_graph(self.graph(), Direction::Undirected)
    }
}

impl DiekertGraph {
    #[must_use]
    pub fn export(&self) -> Export<char> {
        Export::from_graph(self.graph(), Direction::Directed)
    }
}

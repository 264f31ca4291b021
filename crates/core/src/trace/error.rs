use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};

use derive_more::From;

use crate::graph::error::LookupError;

/// Error returned when a trace artifact cannot be built.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error {
    /// A symbol or position is not a node of the graph it was looked up in.
    Lookup(LookupError),
    /// The graph that should be acyclic is not. `positions` are the word
    /// positions that could not be placed in a topological order.
    InconsistentGraph { positions: Vec<usize> },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Lookup(err) => write!(f, "lookup failed: {err}"),
            Self::InconsistentGraph { positions } => {
                write!(f, "graph is not acyclic; unordered positions {positions:?}")
            }
        }
    }
}

use core::fmt::{Display, Formatter, Result};

/// A graph operation referenced a node that does not exist.
///
/// This is a precondition violation by the caller, e.g. asking for an
/// independency graph over an alphabet that contains symbols the dependency
/// graph never saw.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No node carries this symbol.
    UnknownSymbol(char),
    /// No node has this index.
    UnknownPosition(usize),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnknownSymbol(symbol) => write!(f, "unknown symbol '{symbol}'"),
            Self::UnknownPosition(index) => write!(f, "unknown node index {index}"),
        }
    }
}

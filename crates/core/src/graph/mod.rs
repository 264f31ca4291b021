//! Graph storage and the two graph shapes used by trace analysis.
//!
//! Both shapes compose the same index-addressed [`Graph`] arena:
//!
//! - [`DependencyGraph`] is undirected and keyed by symbol. Every edge is
//!   stored in the neighbor lists of both endpoints.
//! - [`DiekertGraph`] is directed and keyed by word position, so one symbol
//!   may label several nodes.
//!
//! [`dot`] renders either shape for visualization.

pub mod arena;
pub mod dependency;
pub mod diekert;
pub mod dot;
pub mod error;

pub use arena::{Graph, Node};
pub use dependency::DependencyGraph;
pub use diekert::DiekertGraph;
pub use error::LookupError;

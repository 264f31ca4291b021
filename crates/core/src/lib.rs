//! Trace-theoretic analysis of transaction words.
//!
//! `diekert_core` takes a set of transactions, each writing one resource and
//! reading some others, and a word over their identifiers. It derives:
//!
//! 1. **Dependency graph** -- which transactions cannot be swapped, because
//!    their read/write footprints overlap.
//! 2. **Independency graph** -- the complement of the dependency graph over
//!    a chosen alphabet.
//! 3. **Diekert graph** -- the word's positions ordered by the dependency
//!    relation, transitively reduced to its cover arcs.
//! 4. **Foata normal form** -- the word split into maximal steps of
//!    pairwise-independent transactions, e.g. `(bdc)(a)(a)(b)`.
//!
//! # Entry point
//!
//! [`analyze()`] runs the whole pipeline and returns an
//! [`Analysis`](trace::Analysis) holding every artifact. The individual
//! builders live in [`trace::dependency`], [`trace::diekert`] and
//! [`trace::foata`].
//!
//! ```rust,ignore
//! use diekert_core::{analyze, AnalysisOptions};
//!
//! let analysis = analyze(&transactions, "baadcb", &AnalysisOptions::default())?;
//! println!("FNF = {}", analysis.foata);
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on transactions,
//!   graphs, the Foata form and errors.
//!
//! This crate is `no_std` compatible (requires `alloc`). Parsing of the
//! transaction file lives in the separate `diekert_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod graph;
pub mod trace;
pub mod transaction;

pub use trace::{analyze, Analysis, AnalysisOptions};
pub use transaction::{Transaction, Transactions};

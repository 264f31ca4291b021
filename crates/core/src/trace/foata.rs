//! Foata normal form of a trace.
//!
//! The level of a position is the number of positions on the longest chain of
//! the Diekert graph that ends in it. Levels are computed by one relaxation
//! pass over a topological order, so every predecessor of a position is final
//! before the position is read. Grouping positions by level gives the Foata
//! steps: each step holds pairwise-independent positions, and step `k + 1`
//! only holds positions with a predecessor in step `k`.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::graph::diekert::DiekertGraph;
use crate::trace::error::Error;

/// Positions of one Foata level and the symbols they carry.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Ascending word positions.
    pub positions: Vec<usize>,
    /// `symbols[i]` labels `positions[i]`.
    pub symbols: String,
}

/// The Foata normal form, displayed as `(ab)(c)(d)`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoataForm {
    pub steps: Vec<Step>,
}

impl FoataForm {
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The word obtained by concatenating the steps.
    #[must_use]
    pub fn linearization(&self) -> String {
        self.steps
            .iter()
            .flat_map(|step| step.symbols.chars())
            .collect()
    }

    /// Positions in step order; a permutation of the word's positions.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.steps
            .iter()
            .flat_map(|step| step.positions.iter().copied())
            .collect()
    }
}

impl Display for FoataForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for step in &self.steps {
            write!(f, "({})", step.symbols)?;
        }
        Ok(())
    }
}

/// Level of every position, starting at 1 for positions without
/// predecessors.
///
/// # Errors
///
/// Returns [`Error::InconsistentGraph`] if `diekert` has a cycle.
pub fn foata_levels(diekert: &DiekertGraph) -> Result<Vec<usize>, Error> {
    let order = diekert
        .topological_sort()
        .ok_or_else(|| Error::InconsistentGraph {
            positions: diekert.unordered_positions(),
        })?;

    let mut levels = alloc::vec![1; diekert.len()];
    for position in order {
        let next_level = levels[position] + 1;
        for &next in diekert.successors(position) {
            if next_level > levels[next] {
                levels[next] = next_level;
            }
        }
    }
    Ok(levels)
}

/// Groups the positions of `diekert` by level.
///
/// # Errors
///
/// Returns [`Error::InconsistentGraph`] if `diekert` has a cycle.
pub fn foata_normal_form(diekert: &DiekertGraph) -> Result<FoataForm, Error> {
    let levels = foata_levels(diekert)?;
    let depth = levels.iter().copied().max().unwrap_or(0);

    let mut steps: Vec<Step> = (0..depth)
        .map(|_| Step {
            positions: Vec::new(),
            symbols: String::new(),
        })
        .collect();
    for (position, &level) in levels.iter().enumerate() {
        let step = &mut steps[level - 1];
        step.positions.push(position);
        if let Some(symbol) = diekert.label(position) {
            step.symbols.push(symbol);
        }
    }

    tracing::debug!(
        positions = diekert.len(),
        steps = steps.len(),
        "foata normal form computed"
    );
    Ok(FoataForm { steps })
}

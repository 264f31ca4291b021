use alloc::collections::{BTreeMap, BTreeSet};
use core::fmt::{Display, Formatter, Result};

/// A transaction that assigns one resource from a set of read resources.
///
/// `(a) x := x + y` has identifier `a`, result `x` and dependencies `{x, y}`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub id: char,
    /// The resource written.
    pub result: char,
    /// The resources read; order-irrelevant, duplicates collapsed.
    pub dependencies: BTreeSet<char>,
}

/// Transactions keyed by identifier, iterated in identifier order.
pub type Transactions = BTreeMap<char, Transaction>;

impl Transaction {
    pub fn new<I>(id: char, result: char, dependencies: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            id,
            result,
            dependencies: dependencies.into_iter().collect(),
        }
    }

    /// `{result} ∪ dependencies`.
    #[must_use]
    pub fn footprint(&self) -> BTreeSet<char> {
        let mut footprint = self.dependencies.clone();
        footprint.insert(self.result);
        footprint
    }

    /// Two transactions are dependent iff their footprints intersect.
    ///
    /// Reflexive and symmetric.
    #[must_use]
    pub fn are_dependent(first: &Self, second: &Self) -> bool {
        first.result == second.result
            || second.dependencies.contains(&first.result)
            || first.dependencies.contains(&second.result)
            || !first.dependencies.is_disjoint(&second.dependencies)
    }

    #[must_use]
    pub fn is_dependent_on(&self, other: &Self) -> bool {
        Self::are_dependent(self, other)
    }
}

/// Canonical input line; dependencies are separated by spaces so the line
/// parses back to the same transaction.
impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}) {} := ", self.id, self.result)?;
        for (i, dependency) in self.dependencies.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{dependency}")?;
        }
        Ok(())
    }
}

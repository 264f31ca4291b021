/// DSL macro for building test transaction sets.
///
/// Produces `diekert_core::Transactions`.
///
/// # Syntax
///
/// ```ignore
/// transactions! {
///     (a) x := x y;
///     (b) y := z;
///     (c) z := ;          // reads nothing
/// }
/// ```
#[macro_export]
macro_rules! transactions {
    ($( ($id:ident) $result:ident := $($dep:ident)* );* $(;)?) => {{
        let mut transactions = diekert_core::Transactions::new();
        $(
            let id = $crate::common::symbol(stringify!($id));
            let result = $crate::common::symbol(stringify!($result));
            let dependencies: Vec<char> = vec![$($crate::common::symbol(stringify!($dep))),*];
            transactions.insert(id, diekert_core::Transaction::new(id, result, dependencies));
        )*
        transactions
    }};
}

/// First character of a stringified identifier.
pub fn symbol(ident: &str) -> char {
    ident.chars().next().expect("identifier is never empty")
}

use diekert_core::graph::DiekertGraph;
use diekert_core::trace::foata::FoataForm;

/// Asserts that the steps of `foata` list every position of `diekert` once
/// and never place a position before one of its predecessors.
#[allow(dead_code)]
pub fn assert_linear_extension(diekert: &DiekertGraph, foata: &FoataForm) {
    let positions = foata.positions();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..diekert.len()).collect::<Vec<_>>());

    let mut rank = vec![0; diekert.len()];
    for (i, &position) in positions.iter().enumerate() {
        rank[position] = i;
    }
    for (from, to) in diekert.edges() {
        assert!(
            rank[from] < rank[to],
            "position {from} must precede {to} in {foata}"
        );
    }
}

//! Trace invariants checked over randomly generated samples.

use diekert_core::graph::DiekertGraph;
use diekert_core::trace::diekert::precedence_graph;
use diekert_core::{analyze, AnalysisOptions, Transaction};
use diekert_testgen::generator::{generate_mult_samples, generate_single_sample};

const ROUNDS: usize = 50;

fn options() -> AnalysisOptions {
    AnalysisOptions {
        include_isolated: true,
        ..AnalysisOptions::default()
    }
}

fn assert_linear_extension(diekert: &DiekertGraph, order: &[usize]) {
    let mut rank = vec![usize::MAX; diekert.len()];
    for (i, &position) in order.iter().enumerate() {
        assert_eq!(rank[position], usize::MAX, "position {position} listed twice");
        rank[position] = i;
    }
    assert!(rank.iter().all(|&r| r != usize::MAX));
    for (from, to) in diekert.edges() {
        assert!(rank[from] < rank[to]);
    }
}

#[test]
fn dependency_and_independency_partition_the_pairs() {
    for _ in 0..ROUNDS {
        let (transactions, word) = generate_single_sample(6, 4, 2, 12);
        let analysis = analyze(&transactions, &word, &options()).unwrap();

        for first in transactions.values() {
            for second in transactions.values() {
                if first.id == second.id {
                    continue;
                }
                let dependent = Transaction::are_dependent(first, second);
                assert_eq!(analysis.dependency.contains_edge(first.id, second.id), dependent);
                assert_eq!(
                    analysis.independency.contains_edge(first.id, second.id),
                    !dependent
                );
            }
        }
    }
}

#[test]
fn diekert_graph_is_the_reduced_precedence_graph() {
    for _ in 0..ROUNDS {
        let (transactions, word) = generate_single_sample(5, 3, 1, 16);
        let analysis = analyze(&transactions, &word, &options()).unwrap();
        let precedence = precedence_graph(&word, &analysis.dependency).unwrap();

        assert!(analysis.diekert.is_acyclic());
        for (from, to) in analysis.diekert.edges() {
            assert!(precedence.contains_edge(from, to));
        }
        for position in 0..precedence.len() {
            assert_eq!(
                precedence.reachable(position),
                analysis.diekert.reachable(position)
            );
        }
        // no kept arc is implied by a longer path
        for (from, to) in analysis.diekert.edges() {
            let bypassed = analysis
                .diekert
                .successors(from)
                .iter()
                .filter(|&&middle| middle != to)
                .any(|&middle| analysis.diekert.reachable(middle).contains(&to));
            assert!(!bypassed, "{word}: arc {from} -> {to} is redundant");
        }
    }
}

#[test]
fn foata_form_is_a_maximal_linear_extension() {
    for _ in 0..ROUNDS {
        let (transactions, word) = generate_single_sample(6, 5, 2, 14);
        let analysis = analyze(&transactions, &word, &options()).unwrap();
        let foata = &analysis.foata;

        assert_linear_extension(&analysis.diekert, &foata.positions());
        assert_eq!(foata.linearization().chars().count(), word.chars().count());

        let mut expected: Vec<char> = word.chars().collect();
        let mut actual: Vec<char> = foata.linearization().chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(expected, actual);

        for step in foata.steps() {
            let symbols: Vec<char> = step.symbols.chars().collect();
            for (i, &a) in symbols.iter().enumerate() {
                for &b in &symbols[i + 1..] {
                    assert!(analysis.dependency.contains_node(a));
                    assert!(!analysis.dependency.are_dependent(a, b));
                }
            }
        }
    }
}

#[test]
fn generated_input_parses_back() {
    for sample in generate_mult_samples(8, 7, 4, 3, 10) {
        let parsed = diekert_parser::parse_transactions(&sample.to_input()).unwrap();
        assert_eq!(parsed, sample.get_transactions());
        assert!(analyze(&parsed, sample.get_word(), &options()).is_ok());
    }
}

use chrono::{DateTime, Duration, Local};
use diekert_core::{Transaction, Transactions};
use rand::distr::{Distribution, Uniform};
use rand::RngExt;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Identifiers and variables are single ASCII letters.
pub const MAX_SYMBOLS: u64 = 26;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct GenParams {
    pub id: u64,
    pub n_transaction: u64,
    pub n_variable: u64,
    pub n_read: u64,
    pub word_length: u64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Sample {
    params: GenParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    transactions: Vec<Transaction>,
    word: String,
}

impl Sample {
    #[must_use]
    pub fn new(
        params: GenParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        transactions: &Transactions,
        word: String,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            transactions: transactions.values().cloned().collect(),
            word,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub fn get_transactions(&self) -> Transactions {
        self.transactions
            .iter()
            .map(|transaction| (transaction.id, transaction.clone()))
            .collect()
    }

    #[must_use]
    pub fn get_word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn get_params(&self) -> &GenParams {
        &self.params
    }

    #[must_use]
    pub fn get_cloned_params(&self) -> GenParams {
        self.params.clone()
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }

    /// The transactions in the line format read by `diekert_parser`.
    #[must_use]
    pub fn to_input(&self) -> String {
        self.transactions
            .iter()
            .map(|transaction| format!("{transaction}\n"))
            .collect()
    }
}

/// Transaction identifiers `a`, `b`, ...
fn identifiers(n: u64) -> Vec<char> {
    ('a'..='z').take(symbol_count(n)).collect()
}

/// Variables `z`, `y`, ... so they stand apart from identifiers when printed.
fn variables(n: u64) -> Vec<char> {
    ('a'..='z').rev().take(symbol_count(n)).collect()
}

fn symbol_count(n: u64) -> usize {
    usize::try_from(n.min(MAX_SYMBOLS)).unwrap_or(usize::MAX)
}

/// Generate `n_transaction` transactions over `n_variable` variables and a
/// word of `word_length` identifiers drawn uniformly.
///
/// Each transaction writes one variable and reads `n_read` variables drawn
/// with replacement, so duplicates collapse and a transaction may read fewer.
/// Counts above [`MAX_SYMBOLS`] are clamped.
///
/// # Panics
///
/// Panics if `n_variable` or `n_transaction` is zero (cannot create a
/// uniform distribution over an empty range).
#[must_use]
pub fn generate_single_sample(
    n_transaction: u64,
    n_variable: u64,
    n_read: u64,
    word_length: u64,
) -> (Transactions, String) {
    let ids = identifiers(n_transaction);
    let vars = variables(n_variable);
    let mut random_generator = rand::rng();
    let variable_range = Uniform::new(0, vars.len()).unwrap();
    let id_range = Uniform::new(0, ids.len()).unwrap();

    let transactions: Transactions = ids
        .iter()
        .map(|&id| {
            let result = vars[variable_range.sample(&mut random_generator)];
            let reads: Vec<char> = (0..n_read)
                .map(|_| vars[variable_range.sample(&mut random_generator)])
                .collect();
            (id, Transaction::new(id, result, reads))
        })
        .collect();

    let word = (0..word_length)
        .map(|_| {
            // skewed toward early identifiers so words repeat symbols
            let index = id_range.sample(&mut random_generator);
            if random_generator.random::<bool>() {
                ids[index]
            } else {
                ids[index.min(id_range.sample(&mut random_generator))]
            }
        })
        .collect();

    (transactions, word)
}

#[must_use]
pub fn generate_mult_samples(
    n_sample: u64,
    n_transaction: u64,
    n_variable: u64,
    n_read: u64,
    word_length: u64,
) -> Vec<Sample> {
    (0..n_sample)
        .into_par_iter()
        .map(|i_sample| {
            let start_time = Local::now();
            let (transactions, word) =
                generate_single_sample(n_transaction, n_variable, n_read, word_length);
            let end_time = Local::now();
            Sample::new(
                GenParams::builder()
                    .id(i_sample)
                    .n_transaction(n_transaction)
                    .n_variable(n_variable)
                    .n_read(n_read)
                    .word_length(word_length)
                    .build(),
                "generated".to_string(),
                start_time,
                end_time,
                &transactions,
                word,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let (transactions, word) = generate_single_sample(4, 3, 2, 10);
        assert_eq!(transactions.len(), 4);
        assert_eq!(word.chars().count(), 10);
        assert!(word.chars().all(|c| transactions.contains_key(&c)));
        for transaction in transactions.values() {
            assert!(transaction.dependencies.len() <= 2);
            assert!(('x'..='z').contains(&transaction.result));
        }
    }

    #[test]
    fn test_counts_are_clamped() {
        let (transactions, _) = generate_single_sample(40, 40, 1, 0);
        assert_eq!(transactions.len(), 26);
    }

    #[test]
    fn test_mult_samples_have_ids() {
        let samples = generate_mult_samples(3, 2, 2, 1, 5);
        let mut ids: Vec<u64> = samples.iter().map(Sample::get_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(samples.iter().all(|s| s.get_word().len() == 5));
        assert!(samples.iter().all(|s| s.get_params().n_read == 1));
    }
}

use rayon::prelude::*;

use crate::checker::{evaluate_pair, Evaluation};
use crate::error::ColourError;
use crate::types::ColourPairInput;

/// A pair that failed validation, with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPair {
    pub index: usize,
    pub error: ColourError,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Successful evaluations, in input order.
    pub results: Vec<Evaluation>,
    pub invalid: Vec<InvalidPair>,
}

/// Evaluate many colour pairs in parallel.
///
/// Uses Rayon's `par_iter()`; every evaluation is a pure function so pairs
/// share nothing. Invalid pairs are collected instead of aborting the batch.
pub fn evaluate_all(pairs: &[ColourPairInput]) -> BatchOutcome {
    let evaluated: Vec<_> = pairs.par_iter().map(evaluate_pair).collect();

    let mut outcome = BatchOutcome::default();
    for (index, result) in evaluated.into_iter().enumerate() {
        match result {
            Ok(evaluation) => outcome.results.push(evaluation),
            Err(error) => {
                tracing::debug!("pair {index} rejected: {error}");
                outcome.invalid.push(InvalidPair { index, error });
            }
        }
    }

    tracing::debug!(
        "batch evaluated {} pairs ({} invalid)",
        pairs.len(),
        outcome.invalid.len()
    );
    outcome
}

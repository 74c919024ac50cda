//! Hybrid selection strategies
//!
//! Combines entropy with other metrics (`expected_remaining`, minimax) for improved performance.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use rayon::prelude::*;

/// Select best guess with `entropy+expected_size+minimax` tiebreakers
///
/// For medium candidate counts (21-100), this provides better performance than pure entropy.
/// Primary: entropy, Secondary: `expected_remaining`, Tertiary: minimax
///
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_with_expected_tiebreaker<'a>(
    guess_pool: &'a [&'a Word],
    candidates: &[&Word],
) -> Option<&'a Word> {
    // Compute all metrics (parallelized)
    let metrics: Vec<_> = guess_pool
        .par_iter()
        .map(|&guess| {
            let m = calculate_metrics(guess, candidates);
            (guess, m)
        })
        .collect();

    // Select by: entropy (primary), expected_remaining (secondary), max_partition (tertiary)
    metrics
        .into_iter()
        .max_by(|(_, m1), (_, m2)| {
            m1.entropy
                .total_cmp(&m2.entropy)
                .then(m2.expected_remaining.total_cmp(&m1.expected_remaining))
                .then(m2.max_partition.cmp(&m1.max_partition))
        })
        .map(|(word, _)| word)
}

/// Select best guess with hybrid scoring
///
/// For medium candidate counts (9-20), use formula: score = (entropy × 100) - (`max_partition` × 10)
/// This balances average-case (entropy) with worst-case (minimax) at ~5:1 ratio.
///
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_with_hybrid_scoring<'a>(
    guess_pool: &'a [&'a Word],
    candidates: &[&Word],
) -> Option<&'a Word> {
    // Compute all metrics (parallelized)
    let metrics: Vec<_> = guess_pool
        .par_iter()
        .map(|&guess| {
            let m = calculate_metrics(guess, candidates);
            (guess, m)
        })
        .collect();

    // Find best hybrid score
    metrics
        .into_iter()
        .max_by(|(_, m1), (_, m2)| {
            // Hybrid score: entropy (×100) minus worst-case penalty (×10)
            let score1 = (m1.entropy * 100.0) as i32
                - i32::try_from(m1.max_partition * 10).unwrap_or(i32::MAX);
            let score2 = (m2.entropy * 100.0) as i32
                - i32::try_from(m2.max_partition * 10).unwrap_or(i32::MAX);
            // Higher score is better
            score1
                .cmp(&score2)
                .then(m2.expected_remaining.total_cmp(&m1.expected_remaining))
        })
        .map(|(word, _)| word)
}

//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the word with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::minimax::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let result = select_best_guess(&guess_refs, &candidate_refs);
/// assert!(result.is_some());
/// let (best, max_remaining) = result.unwrap();
/// // CRANE should be better than AAAAA for these candidates
/// assert!(max_remaining <= 2);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (guess, max_remaining)
        })
        .min_by_key(|(_, max)| *max)
}

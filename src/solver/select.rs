//! Best-next-guess selection
//!
//! Scans the full guess pool in order and keeps the lowest distribution
//! score, using the best score so far to prune the rest.

use super::SolverError;
use super::score::{Score, distribution_score};
use crate::core::{Comparator, Word};
use log::trace;
use rustc_hash::FxHashSet;

/// Select the guess from `guess_pool` that best splits `remaining`
///
/// Returns the chosen guess and its score. Guesses are not restricted to
/// `remaining`. On a tied score the later guess replaces the incumbent only
/// if it could itself be the answer and the incumbent could not, so the
/// result depends on pool order.
///
/// # Errors
/// - `SolverError::InvalidInput` if `guess_pool` is empty
/// - `SolverError::NoConsistentCandidates` if `remaining` is empty
///
/// # Examples
/// ```
/// use wordle_tree::core::{Comparator, Word};
/// use wordle_tree::solver::select_best_guess;
///
/// let pool: Vec<Word> = ["goody", "catch"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let remaining = vec![Word::new("catch").unwrap()];
///
/// let (best, score) = select_best_guess(&mut Comparator::unbounded(), &remaining, &pool).unwrap();
/// assert_eq!(best.text(), "catch");
/// assert_eq!(score, 1);
/// ```
pub fn select_best_guess<'a>(
    comparator: &mut Comparator,
    remaining: &[Word],
    guess_pool: &'a [Word],
) -> Result<(&'a Word, usize), SolverError> {
    if guess_pool.is_empty() {
        return Err(SolverError::InvalidInput("guess pool is empty"));
    }
    if remaining.is_empty() {
        return Err(SolverError::NoConsistentCandidates);
    }

    let possible: FxHashSet<&Word> = remaining.iter().collect();
    let mut best: Option<(&'a Word, usize)> = None;

    for guess in guess_pool {
        let bound = best.map(|(_, lowest)| lowest);
        let score = match distribution_score(comparator, guess, remaining, bound) {
            Score::Complete(score) => score,
            Score::Pruned(partial) => {
                trace!("{guess}: pruned at {partial}");
                continue;
            }
        };
        trace!("{guess}: {score}");

        let improves = best.is_none_or(|(incumbent, lowest)| {
            score < lowest
                || (score == lowest && possible.contains(guess) && !possible.contains(incumbent))
        });
        if improves {
            best = Some((guess, score));
        }
    }

    best.ok_or(SolverError::InvalidInput("guess pool is empty"))
}

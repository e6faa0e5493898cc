//! Distribution score for a candidate guess
//!
//! Lower is better: a guess that splits the remaining answers into many
//! small feedback buckets scores lower than one that lumps them together.

use crate::core::{Comparator, Feedback, Word};
use rustc_hash::FxHashMap;

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Every remaining answer was processed
    Complete(usize),
    /// Scoring stopped once the running total exceeded the bound.
    /// The value only proves the guess is worse than the bound.
    Pruned(usize),
}

impl Score {
    /// The final score, if scoring ran to completion
    #[must_use]
    pub const fn complete(self) -> Option<usize> {
        match self {
            Self::Complete(total) => Some(total),
            Self::Pruned(_) => None,
        }
    }
}

/// Score `guess` against `remaining`, stopping early once over `bound`
///
/// For each answer in order, adds the number of answers seen so far
/// (including this one) sharing its feedback. The complete total equals the
/// sum of squared bucket sizes plus their sum, halved, so it does not depend
/// on iteration order.
///
/// # Examples
/// ```
/// use wordle_tree::core::{Comparator, Word};
/// use wordle_tree::solver::{Score, distribution_score};
///
/// let words: Vec<Word> = ["batch", "catch", "hatch"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let mut comparator = Comparator::unbounded();
///
/// // BATCH: {batch}, {catch, hatch} -> 1 + 1 + 2
/// let score = distribution_score(&mut comparator, &words[0], &words, None);
/// assert_eq!(score, Score::Complete(4));
/// ```
pub fn distribution_score(
    comparator: &mut Comparator,
    guess: &Word,
    remaining: &[Word],
    bound: Option<usize>,
) -> Score {
    let mut buckets: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut total = 0;

    for answer in remaining {
        let bucket = buckets.entry(comparator.compare(guess, answer)).or_insert(0);
        *bucket += 1;
        total += *bucket;

        if bound.is_some_and(|bound| total > bound) {
            return Score::Pruned(total);
        }
    }

    Score::Complete(total)
}

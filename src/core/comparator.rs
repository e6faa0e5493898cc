//! Feedback calculation and memoization
//!
//! `compare` is the pure Wordle rule. `Comparator` wraps it with a cache,
//! since guess selection evaluates the same (guess, answer) pairs many times
//! over a session.

use super::{Feedback, Mark, WORD_LENGTH, Word};
use lru::LruCache;
use rustc_hash::FxHashMap;
use std::num::NonZeroUsize;

type PairKey = ([u8; WORD_LENGTH], [u8; WORD_LENGTH]);

/// Calculate the feedback when `guess` is played and `answer` is hidden
///
/// Duplicate letters follow Wordle's rule: a guess letter is marked
/// misplaced only while the answer still has an unmatched occurrence of it,
/// consumed left to right.
///
/// # Algorithm
/// 1. First pass: count the answer's letters at every non-exact position
/// 2. Second pass, left to right: exact, else misplaced if the count for
///    that letter is positive (and decrement it), else absent
///
/// # Examples
/// ```
/// use wordle_tree::core::{Word, compare};
///
/// let guess = Word::new("spoon").unwrap();
/// let answer = Word::new("noops").unwrap();
/// assert_eq!(compare(&guess, &answer).to_string(), "SSYSS");
/// ```
#[must_use]
pub fn compare(guess: &Word, answer: &Word) -> Feedback {
    let guess = guess.chars();
    let answer = answer.chars();

    // Indexed by lowercase ascii letter
    let mut unmatched = [0u8; 26];
    for (&g, &a) in guess.iter().zip(answer) {
        if g != a {
            unmatched[usize::from(a - b'a')] += 1;
        }
    }

    let mut marks = [Mark::Absent; WORD_LENGTH];
    for ((mark, &g), &a) in marks.iter_mut().zip(guess).zip(answer) {
        if g == a {
            *mark = Mark::Exact;
        } else {
            let count = &mut unmatched[usize::from(g - b'a')];
            if *count > 0 {
                *mark = Mark::Misplaced;
                *count -= 1;
            }
        }
    }

    Feedback::new(marks)
}

enum FeedbackCache {
    Unbounded(FxHashMap<PairKey, Feedback>),
    Bounded(LruCache<PairKey, Feedback>),
}

/// Memoizing wrapper around [`compare`]
///
/// Entries are never invalidated: words are immutable and `compare` is
/// deterministic. The bounded variant evicts least-recently-used pairs.
pub struct Comparator {
    cache: FeedbackCache,
    hits: u64,
    misses: u64,
}

impl Comparator {
    /// Cache that grows without limit
    #[must_use]
    pub fn unbounded() -> Self {
        Self::with_cache(FeedbackCache::Unbounded(FxHashMap::default()))
    }

    /// Cache holding at most `capacity` pairs
    #[must_use]
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self::with_cache(FeedbackCache::Bounded(LruCache::new(capacity)))
    }

    /// Bounded when a capacity is given, unbounded otherwise
    #[must_use]
    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        capacity.map_or_else(Self::unbounded, Self::bounded)
    }

    const fn with_cache(cache: FeedbackCache) -> Self {
        Self {
            cache,
            hits: 0,
            misses: 0,
        }
    }

    /// Cached [`compare`]
    pub fn compare(&mut self, guess: &Word, answer: &Word) -> Feedback {
        let key = (*guess.chars(), *answer.chars());

        let cached = match &mut self.cache {
            FeedbackCache::Unbounded(map) => map.get(&key).copied(),
            FeedbackCache::Bounded(lru) => lru.get(&key).copied(),
        };
        if let Some(feedback) = cached {
            self.hits += 1;
            return feedback;
        }

        self.misses += 1;
        let feedback = compare(guess, answer);
        match &mut self.cache {
            FeedbackCache::Unbounded(map) => {
                map.insert(key, feedback);
            }
            FeedbackCache::Bounded(lru) => {
                lru.put(key, feedback);
            }
        }
        feedback
    }

    /// Number of cached pairs
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.cache {
            FeedbackCache::Unbounded(map) => map.len(),
            FeedbackCache::Bounded(lru) => lru.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached pairs, if bounded
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        match &self.cache {
            FeedbackCache::Unbounded(_) => None,
            FeedbackCache::Bounded(lru) => Some(lru.cap()),
        }
    }

    /// (hits, misses) since construction
    #[must_use]
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::unbounded()
    }
}

//! Memoized decision tree of best guesses
//!
//! Each node holds the guess to play when play reaches it, and one child per
//! feedback observed there. Children are created lazily and a node's guess is
//! computed once, then reused by every later game along the same path.

use super::select::select_best_guess;
use super::{SolverConfig, SolverError};
use crate::core::{Comparator, Feedback, Word};
use log::{debug, warn};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct TreeNode {
    /// `None` until computed (only for non-root nodes)
    guess: Option<Word>,
    children: FxHashMap<Feedback, TreeNode>,
}

impl TreeNode {
    fn resolved(guess: Word) -> Self {
        Self {
            guess: Some(guess),
            children: FxHashMap::default(),
        }
    }

    fn count(&self) -> usize {
        1 + self.children.values().map(Self::count).sum::<usize>()
    }

    /// Walk `path` from `self`, creating missing children
    fn descend_mut<'a>(&'a mut self, path: &[Feedback]) -> &'a mut Self {
        path.iter()
            .fold(self, |node, feedback| node.children.entry(*feedback).or_default())
    }

    fn descend(&self, path: &[Feedback]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, feedback| node.children.get(feedback))
    }
}

/// Session state: the memoized tree plus the cursor for the game in progress
///
/// The remaining answers at the cursor are always exactly the answers whose
/// comparison with each guess on the path matches the feedback recorded.
pub struct DecisionTree {
    root: TreeNode,
    path: Vec<Feedback>,
    answers: Vec<Word>,
    remaining: Vec<Word>,
    comparator: Comparator,
}

impl DecisionTree {
    /// Create a tree whose root suggests `start_word`
    ///
    /// `answers` is both the set of possible answers and, in its given order,
    /// the pool every later guess is chosen from.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        start_word: Word,
        comparator: Comparator,
    ) -> Result<Self, SolverError> {
        if answers.is_empty() {
            return Err(SolverError::InvalidInput("answer list is empty"));
        }

        Ok(Self {
            root: TreeNode::resolved(start_word),
            path: Vec::new(),
            remaining: answers.clone(),
            answers,
            comparator,
        })
    }

    /// Create a tree from session configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the start word is malformed, or
    /// `SolverError::InvalidInput` if `answers` is empty.
    pub fn from_config(answers: Vec<Word>, config: &SolverConfig) -> Result<Self, SolverError> {
        let start_word = Word::new(config.start_word.as_str())?;
        Self::new(
            answers,
            start_word,
            Comparator::with_capacity(config.cache_capacity),
        )
    }

    /// Return the cursor to the root and restore every answer
    pub fn reset(&mut self) {
        self.path.clear();
        self.remaining.clone_from(&self.answers);
    }

    /// The guess suggested at the cursor
    ///
    /// `None` only after feedback ruled out every answer.
    #[must_use]
    pub fn next_guess(&self) -> Option<&Word> {
        self.root
            .descend(&self.path)
            .and_then(|node| node.guess.as_ref())
    }

    /// Record that `guess` was played and produced `feedback`, then move on
    ///
    /// If `guess` differs from the node's suggestion it replaces it, and any
    /// subtree recorded under the old guess is dropped.
    ///
    /// # Errors
    /// Returns `SolverError::NoConsistentCandidates` if no answer is
    /// consistent with the feedback. The cursor still moves; call
    /// [`reset`](Self::reset) to start over.
    pub fn advance(&mut self, guess: Word, feedback: Feedback) -> Result<(), SolverError> {
        let node = self.root.descend_mut(&self.path);
        if node.guess.as_ref() != Some(&guess) {
            if let Some(previous) = &node.guess {
                debug!("{guess} overrides {previous} at depth {}", self.path.len());
            }
            node.children.clear();
            node.guess = Some(guess.clone());
        }

        let comparator = &mut self.comparator;
        self.remaining
            .retain(|answer| comparator.compare(&guess, answer) == feedback);

        self.path.push(feedback);
        let node = self.root.descend_mut(&self.path);
        if node.guess.is_some() {
            return Ok(());
        }

        match select_best_guess(&mut self.comparator, &self.remaining, &self.answers) {
            Ok((best, score)) => {
                debug!(
                    "depth {}: {} remaining, best guess {best} (score {score})",
                    self.path.len(),
                    self.remaining.len()
                );
                node.guess = Some(best.clone());
                Ok(())
            }
            Err(err) => {
                warn!("{guess} {feedback} is inconsistent with every known answer");
                Err(err)
            }
        }
    }

    /// [`advance`](Self::advance) with the guess suggested at the cursor
    ///
    /// # Errors
    /// Returns `SolverError::NoConsistentCandidates` if there is no
    /// suggestion or the feedback rules out every answer.
    pub fn observe(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let guess = self
            .next_guess()
            .cloned()
            .ok_or(SolverError::NoConsistentCandidates)?;
        self.advance(guess, feedback)
    }

    /// Answers still consistent with the feedback on the current path
    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.remaining
    }

    /// Every answer, in pool order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of guesses recorded on the current path
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Number of nodes created so far, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    #[must_use]
    pub const fn comparator(&self) -> &Comparator {
        &self.comparator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare;
    use std::num::NonZeroUsize;

    const ANSWERS: [&str; 7] = ["goody", "raise", "plate", "point", "batch", "catch", "hatch"];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn feedback(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    fn latch_tree() -> DecisionTree {
        DecisionTree::new(
            words(&ANSWERS),
            Word::new("latch").unwrap(),
            Comparator::unbounded(),
        )
        .unwrap()
    }

    /// Play one game with true feedback, returning the winning attempt
    fn play(tree: &mut DecisionTree, answer: &Word) -> usize {
        tree.reset();
        for attempt in 1..=20 {
            let guess = tree.next_guess().unwrap().clone();
            let observed = compare(&guess, answer);
            if observed.is_win() {
                return attempt;
            }
            tree.advance(guess, observed).unwrap();
        }
        panic!("{answer} not solved in 20 attempts");
    }

    #[test]
    fn decision_tree_scenario() {
        let mut tree = latch_tree();
        assert_eq!(tree.next_guess().unwrap().text(), "latch");

        tree.observe(feedback("NYYYY")).unwrap();
        assert_eq!(texts(tree.remaining()), ["batch", "catch", "hatch"]);
        assert_eq!(tree.next_guess().unwrap().text(), "batch");

        tree.observe(feedback("NYYYY")).unwrap();
        assert_eq!(texts(tree.remaining()), ["catch", "hatch"]);
        assert_eq!(tree.next_guess().unwrap().text(), "catch");

        tree.observe(feedback("YYYYY")).unwrap();
        assert_eq!(texts(tree.remaining()), ["catch"]);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn reset_restores_root_and_answers() {
        let mut tree = latch_tree();
        tree.observe(feedback("NYYYY")).unwrap();

        tree.reset();

        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.remaining(), tree.answers());
        assert_eq!(tree.next_guess().unwrap().text(), "latch");
    }

    #[test]
    fn advance_narrows_to_consistent_subset() {
        let mut tree = DecisionTree::new(
            words(&ANSWERS),
            Word::new("raise").unwrap(),
            Comparator::unbounded(),
        )
        .unwrap();
        let answer = Word::new("hatch").unwrap();

        while let Some(guess) = tree.next_guess().cloned() {
            let observed = compare(&guess, &answer);
            let before = tree.remaining().to_vec();
            tree.advance(guess.clone(), observed).unwrap();

            let expected: Vec<Word> = before
                .iter()
                .filter(|a| compare(&guess, a) == observed)
                .cloned()
                .collect();
            assert_eq!(tree.remaining(), expected.as_slice());
            assert!(tree.remaining().iter().all(|w| before.contains(w)));

            if observed.is_win() {
                break;
            }
        }
        assert_eq!(texts(tree.remaining()), ["hatch"]);
    }

    #[test]
    fn replayed_path_is_memoized() {
        let mut tree = latch_tree();
        let answer = Word::new("catch").unwrap();

        let first = play(&mut tree, &answer);
        let nodes = tree.node_count();
        let (_, misses) = tree.comparator().stats();

        let second = play(&mut tree, &answer);

        assert_eq!(first, second);
        assert_eq!(tree.node_count(), nodes);
        // No new comparisons needed to be computed
        assert_eq!(tree.comparator().stats().1, misses);
    }

    #[test]
    fn every_answer_is_solved_within_pool_size() {
        let mut tree = latch_tree();
        let answers = words(&ANSWERS);

        for answer in &answers {
            let attempts = play(&mut tree, answer);
            // One start guess plus at most one per candidate
            assert!(attempts <= answers.len() + 1, "{answer}: {attempts}");
        }
    }

    #[test]
    fn bounded_cache_gives_same_tree() {
        let answers = words(&ANSWERS);
        let mut unbounded = latch_tree();
        let mut bounded = DecisionTree::new(
            answers.clone(),
            Word::new("latch").unwrap(),
            Comparator::bounded(NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();

        for answer in &answers {
            assert_eq!(play(&mut unbounded, answer), play(&mut bounded, answer));
        }
        assert!(bounded.comparator().len() <= 4);
    }

    #[test]
    fn override_replaces_suggestion_and_subtree() {
        let mut tree = latch_tree();
        tree.observe(feedback("NYYYY")).unwrap();
        tree.reset();
        let nodes = tree.node_count();
        assert_eq!(nodes, 2);

        let raise = Word::new("raise").unwrap();
        let answer = Word::new("plate").unwrap();
        tree.advance(raise.clone(), compare(&raise, &answer)).unwrap();

        let expected: Vec<Word> = tree
            .answers()
            .iter()
            .filter(|a| compare(&raise, a) == compare(&raise, &answer))
            .cloned()
            .collect();
        assert_eq!(tree.remaining(), expected.as_slice());

        tree.reset();
        assert_eq!(tree.next_guess(), Some(&raise));
        // Old LATCH subtree dropped, new RAISE child kept
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn inconsistent_feedback_reports_no_candidates() {
        let mut tree = latch_tree();

        // No answer shares LATCH's exact letters
        let result = tree.observe(Feedback::ALL_EXACT);

        assert_eq!(result, Err(SolverError::NoConsistentCandidates));
        assert!(tree.remaining().is_empty());
        assert_eq!(tree.next_guess(), None);
        assert_eq!(tree.observe(feedback("NNNNN")), Err(SolverError::NoConsistentCandidates));

        tree.reset();
        assert_eq!(tree.next_guess().unwrap().text(), "latch");
        assert_eq!(tree.remaining().len(), ANSWERS.len());
    }

    #[test]
    fn empty_answer_list_is_invalid_input() {
        let result = DecisionTree::new(Vec::new(), Word::new("raise").unwrap(), Comparator::unbounded());
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn from_config_validates_start_word() {
        let mut config = SolverConfig::new("toolong");
        assert!(matches!(
            DecisionTree::from_config(words(&ANSWERS), &config),
            Err(SolverError::InvalidWord(_))
        ));

        config.start_word = "RAISE".to_string();
        config.cache_capacity = NonZeroUsize::new(100);
        let tree = DecisionTree::from_config(words(&ANSWERS), &config).unwrap();
        assert_eq!(tree.next_guess().unwrap().text(), "raise");
        assert_eq!(tree.comparator().capacity(), NonZeroUsize::new(100));
    }
}

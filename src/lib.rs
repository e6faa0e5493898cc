//! Wordle Tree
//!
//! A Wordle solver that picks the guess minimizing the expected number of
//! remaining answers, memoizing each choice in a decision tree keyed by the
//! feedback seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::core::{Comparator, Feedback, Word};
//! use wordle_tree::solver::DecisionTree;
//!
//! let answers: Vec<Word> = ["goody", "raise", "plate", "point", "batch", "catch", "hatch"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let start = Word::new("latch").unwrap();
//! let mut tree = DecisionTree::new(answers, start, Comparator::unbounded()).unwrap();
//!
//! tree.observe(Feedback::parse("NYYYY").unwrap()).unwrap();
//! assert_eq!(tree.next_guess().unwrap().text(), "batch");
//! ```

// Core domain types
pub mod core;

// Scoring and the decision tree
pub mod solver;

// Word lists
pub mod wordlists;

// Game loop, interactive prompt and batch evaluation
pub mod commands;

// Terminal output formatting
pub mod output;

//! Guess scoring and the memoized decision tree
//!
//! `distribution_score` ranks one guess, `select_best_guess` scans a pool
//! with it, and `DecisionTree` caches the selection per feedback path.

mod config;
mod error;
mod score;
mod select;
mod tree;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_START_WORD, SolverConfig};
pub use error::SolverError;
pub use score::{Score, distribution_score};
pub use select::select_best_guess;
pub use tree::DecisionTree;

//! Solver error type

use crate::core::WordError;
use std::fmt;

/// Errors surfaced by guess selection and tree traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The solver was asked to operate on zero candidates
    InvalidInput(&'static str),
    /// A configured word is malformed
    InvalidWord(WordError),
    /// Feedback so far is inconsistent with every known answer
    NoConsistentCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::InvalidWord(err) => write!(f, "Invalid word: {err}"),
            Self::NoConsistentCandidates => {
                write!(f, "No consistent candidates remain for the feedback given")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

//! Core domain types for Wordle
//!
//! Words, feedback codes and the comparator that relates them.

mod comparator;
mod feedback;
mod word;

pub use comparator::{Comparator, compare};
pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LENGTH, Word, WordError};

//! Per-letter feedback codes
//!
//! A `Feedback` is the sequence of marks produced by comparing a guess to an
//! answer. At the input boundary each mark is written as one symbol:
//! - `Y` = exact match (green)
//! - `S` = present, wrong position (yellow)
//! - `N` = absent (gray)

use super::WORD_LENGTH;
use std::fmt;

/// Comparison result for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere among the answer's unmatched positions
    Misplaced,
    /// Letter not available in the answer
    Absent,
}

impl Mark {
    /// Boundary symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'Y',
            Self::Misplaced => 'S',
            Self::Absent => 'N',
        }
    }

    /// Parse a single symbol, case-insensitively
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'Y' | 'y' | '🟩' => Some(Self::Exact),
            'S' | 's' | '🟨' => Some(Self::Misplaced),
            'N' | 'n' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (expected Y, S or N)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All exact (the winning pattern)
    pub const ALL_EXACT: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The individual marks, left to right
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }

    /// Parse a pattern such as `"nyyyy"` or `"🟨🟩🟩🟩🟩"`
    ///
    /// # Errors
    /// Returns `FeedbackError` on wrong length or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("nyyyy").unwrap();
    /// assert_eq!(feedback.marks()[0], Mark::Absent);
    /// assert_eq!(feedback.to_string(), "NYYYY");
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(s.chars()) {
            *mark = Mark::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

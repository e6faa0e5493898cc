//! Word list loading
//!
//! Lists are validated up front: one malformed line rejects the whole file.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    /// 1-based line number of the offending entry
    InvalidWord { line: usize, source: WordError },
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::InvalidWord { line, source } => write!(f, "Line {line}: {source}"),
            Self::Empty => write!(f, "Word list contains no words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read, any non-blank line is
/// not a valid word, or the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_tree::wordlists::loader::load_from_file;
///
/// let words = load_from_file("answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

/// Parse newline-separated words
///
/// Blank lines are skipped, case is normalized and later duplicates are
/// dropped, so the first occurrence fixes each word's position.
///
/// # Errors
///
/// Returns `WordListError::InvalidWord` for the first malformed line, or
/// `WordListError::Empty` if nothing remains.
///
/// # Examples
/// ```
/// use wordle_tree::wordlists::loader::parse_words;
///
/// let words = parse_words("raise\nPoint\n\nraise\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "point");
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            line: idx + 1,
            source,
        })?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_keeps_order() {
        let words = parse_words("goody\nraise\nplate\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["goody", "raise", "plate"]);
    }

    #[test]
    fn parse_words_trims_and_normalizes() {
        let words = parse_words("  Batch \r\nCATCH\n\n\nhatch").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["batch", "catch", "hatch"]);
    }

    #[test]
    fn parse_words_drops_duplicates() {
        let words = parse_words("catch\nbatch\nCatch\ncatch\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["catch", "batch"]);
    }

    #[test]
    fn parse_words_fails_fast() {
        let err = parse_words("raise\ntoolong\nbad!!\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidWord {
                line: 2,
                source: WordError::InvalidLength(7)
            }
        ));
        assert_eq!(err.to_string(), "Line 2: Word must be exactly 5 letters, got 7");
    }

    #[test]
    fn parse_words_rejects_empty() {
        assert!(matches!(parse_words(""), Err(WordListError::Empty)));
        assert!(matches!(parse_words("\n  \n"), Err(WordListError::Empty)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }
}

//! Word lists for Wordle solving

pub mod loader;

pub use loader::{WordListError, load_from_file, parse_words};

//! Solver configuration

use std::num::NonZeroUsize;

/// Guess suggested at the root of every tree unless overridden
pub const DEFAULT_START_WORD: &str = "raise";

/// Attempts allowed per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Configuration shared by every game in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub start_word: String,
    pub max_attempts: usize,
    /// `None` keeps every comparison; `Some(n)` caps the cache at `n` pairs
    pub cache_capacity: Option<NonZeroUsize>,
}

impl SolverConfig {
    #[must_use]
    pub fn new(start_word: impl Into<String>) -> Self {
        Self {
            start_word: start_word.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cache_capacity: None,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_START_WORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.start_word, "raise");
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.cache_capacity, None);
    }
}

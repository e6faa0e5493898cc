//! Single-game loop
//!
//! Drives a `DecisionTree` for one game, pulling feedback for each suggested
//! guess from a `FeedbackSource`.

use crate::core::{Feedback, Word, compare};
use crate::solver::{DecisionTree, SolverError};
use log::debug;
use std::fmt;
use std::io;

/// What the player reports for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `guess` was played (the suggestion or an override) and scored `feedback`
    Played { guess: Word, feedback: Feedback },
    /// Stop the game without a result
    Quit,
}

/// Supplies feedback for each suggested guess
pub trait FeedbackSource {
    /// Respond to the suggestion for `attempt` (1-based)
    ///
    /// # Errors
    /// Returns an I/O error if the response cannot be read.
    fn respond(&mut self, attempt: usize, suggestion: &Word) -> io::Result<Response>;
}

/// Scores every suggestion against a known answer
pub struct AnswerOracle {
    answer: Word,
}

impl AnswerOracle {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }
}

impl FeedbackSource for AnswerOracle {
    fn respond(&mut self, attempt: usize, suggestion: &Word) -> io::Result<Response> {
        let feedback = compare(suggestion, &self.answer);
        debug!("Guess {attempt}: {suggestion}; Pattern: {feedback}");
        Ok(Response::Played {
            guess: suggestion.clone(),
            feedback,
        })
    }
}

/// One played attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Answers consistent with all feedback up to and including this turn
    pub remaining: usize,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { attempts: usize },
    /// Attempt budget exhausted
    Failed,
    /// The feedback ruled out every answer
    NoCandidates,
    Quit,
}

/// Result of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub turns: Vec<Turn>,
}

/// Error type for the game loop
#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    Solver(SolverError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read feedback: {err}"),
            Self::Solver(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Solver(err) => Some(err),
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Play one game from the root of `tree`
///
/// The tree is reset first, so its memoized guesses carry over between
/// games while the remaining answers start from the full list.
///
/// # Errors
/// Returns `GameError::Io` if the source fails. Feedback inconsistent with
/// every answer ends the game with `Outcome::NoCandidates` instead.
pub fn play_game<F: FeedbackSource>(
    tree: &mut DecisionTree,
    source: &mut F,
    max_attempts: usize,
) -> Result<GameResult, GameError> {
    tree.reset();
    let mut turns = Vec::new();

    for attempt in 1..=max_attempts {
        let Some(suggestion) = tree.next_guess().cloned() else {
            return Ok(GameResult {
                outcome: Outcome::NoCandidates,
                turns,
            });
        };

        let (guess, feedback) = match source.respond(attempt, &suggestion)? {
            Response::Played { guess, feedback } => (guess, feedback),
            Response::Quit => {
                return Ok(GameResult {
                    outcome: Outcome::Quit,
                    turns,
                });
            }
        };

        if feedback.is_win() {
            turns.push(Turn {
                remaining: 1,
                guess,
                feedback,
            });
            return Ok(GameResult {
                outcome: Outcome::Solved { attempts: attempt },
                turns,
            });
        }

        let advanced = tree.advance(guess.clone(), feedback);
        turns.push(Turn {
            guess,
            feedback,
            remaining: tree.remaining().len(),
        });
        match advanced {
            Ok(()) => {}
            Err(SolverError::NoConsistentCandidates) => {
                return Ok(GameResult {
                    outcome: Outcome::NoCandidates,
                    turns,
                });
            }
            Err(err) => return Err(GameError::Solver(err)),
        }
    }

    Ok(GameResult {
        outcome: Outcome::Failed,
        turns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Comparator;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn tree() -> DecisionTree {
        DecisionTree::new(
            words(&["goody", "raise", "plate", "point", "batch", "catch", "hatch"]),
            Word::new("latch").unwrap(),
            Comparator::unbounded(),
        )
        .unwrap()
    }

    /// Replays a fixed script of responses
    struct Scripted(Vec<Response>);

    impl FeedbackSource for Scripted {
        fn respond(&mut self, _attempt: usize, _suggestion: &Word) -> io::Result<Response> {
            Ok(if self.0.is_empty() {
                Response::Quit
            } else {
                self.0.remove(0)
            })
        }
    }

    #[test]
    fn oracle_game_solves_hatch() {
        let mut tree = tree();
        let mut oracle = AnswerOracle::new(Word::new("hatch").unwrap());

        let result = play_game(&mut tree, &mut oracle, 6).unwrap();

        // LATCH -> BATCH -> CATCH -> HATCH
        assert_eq!(result.outcome, Outcome::Solved { attempts: 4 });
        let guesses: Vec<&str> = result.turns.iter().map(|t| t.guess.text()).collect();
        assert_eq!(guesses, ["latch", "batch", "catch", "hatch"]);
        let remaining: Vec<usize> = result.turns.iter().map(|t| t.remaining).collect();
        assert_eq!(remaining, [3, 2, 1, 1]);
    }

    #[test]
    fn attempt_budget_exhausted() {
        let mut tree = tree();
        let mut oracle = AnswerOracle::new(Word::new("hatch").unwrap());

        let result = play_game(&mut tree, &mut oracle, 2).unwrap();

        assert_eq!(result.outcome, Outcome::Failed);
        assert_eq!(result.turns.len(), 2);
    }

    #[test]
    fn games_share_the_tree() {
        let mut tree = tree();
        let answer = Word::new("catch").unwrap();

        let first = play_game(&mut tree, &mut AnswerOracle::new(answer.clone()), 6).unwrap();
        let nodes = tree.node_count();
        let second = play_game(&mut tree, &mut AnswerOracle::new(answer), 6).unwrap();

        assert_eq!(first, second);
        assert_eq!(tree.node_count(), nodes);
    }

    #[test]
    fn quit_ends_without_result() {
        let mut tree = tree();
        let mut source = Scripted(vec![]);

        let result = play_game(&mut tree, &mut source, 6).unwrap();

        assert_eq!(result.outcome, Outcome::Quit);
        assert!(result.turns.is_empty());
    }

    #[test]
    fn inconsistent_feedback_reported() {
        let mut tree = tree();
        let mut source = Scripted(vec![Response::Played {
            guess: Word::new("latch").unwrap(),
            feedback: Feedback::parse("YYYYN").unwrap(),
        }]);

        let result = play_game(&mut tree, &mut source, 6).unwrap();

        assert_eq!(result.outcome, Outcome::NoCandidates);
        assert_eq!(result.turns[0].remaining, 0);
    }

    #[test]
    fn override_guess_is_recorded() {
        let mut tree = tree();
        let raise = Word::new("raise").unwrap();
        let mut source = Scripted(vec![
            Response::Played {
                guess: raise.clone(),
                feedback: Feedback::parse("NYNNN").unwrap(),
            },
            Response::Quit,
        ]);

        let result = play_game(&mut tree, &mut source, 6).unwrap();

        assert_eq!(result.outcome, Outcome::Quit);
        assert_eq!(result.turns[0].guess, raise);
        // BATCH, CATCH and HATCH share RAISE's A
        assert_eq!(result.turns[0].remaining, 3);
    }
}

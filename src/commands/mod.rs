//! Game loop collaborators around the decision tree

pub mod batch;
pub mod interactive;
pub mod play;

pub use batch::{BatchSummary, run_batch};
pub use interactive::Prompt;
pub use play::{
    AnswerOracle, FeedbackSource, GameError, GameResult, Outcome, Response, Turn, play_game,
};

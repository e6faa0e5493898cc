//! Batch evaluation over many answers
//!
//! Plays one game per answer against a shared tree and tallies the attempts.

use super::play::{AnswerOracle, GameError, Outcome, play_game};
use crate::core::Word;
use crate::solver::DecisionTree;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Aggregate results of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub games: usize,
    /// attempts-to-solve -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub failed: Vec<Word>,
    pub duration: Duration,
}

impl BatchSummary {
    /// Record the outcome of the game for `answer`
    pub fn record(&mut self, answer: &Word, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Solved { attempts } => {
                *self.distribution.entry(attempts).or_insert(0) += 1;
            }
            Outcome::Failed | Outcome::NoCandidates | Outcome::Quit => {
                self.failed.push(answer.clone());
            }
        }
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Total attempts over solved games
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum()
    }

    /// Mean attempts over solved games, if any were solved
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        let solved = self.solved();
        (solved > 0).then(|| self.total_attempts() as f64 / solved as f64)
    }

    #[must_use]
    pub fn max_attempts(&self) -> Option<usize> {
        self.distribution.keys().next_back().copied()
    }
}

/// Play every answer in `targets` against `tree`
///
/// # Errors
/// Returns `GameError` if a game fails with a solver error.
pub fn run_batch(
    tree: &mut DecisionTree,
    targets: &[Word],
    max_attempts: usize,
    show_progress: bool,
) -> Result<BatchSummary, GameError> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut summary = BatchSummary::default();

    for (idx, answer) in targets.iter().enumerate() {
        let mut oracle = AnswerOracle::new(answer.clone());
        let result = play_game(tree, &mut oracle, max_attempts)?;
        summary.record(answer, result.outcome);

        if idx % 100 == 0 {
            info!(
                "{}/{} games, {} tree nodes, {} cached comparisons",
                idx + 1,
                targets.len(),
                tree.node_count(),
                tree.comparator().len()
            );
            if let Some(avg) = summary.average() {
                pb.set_message(format!("Avg: {avg:.2}"));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    summary.duration = start.elapsed();

    Ok(summary)
}

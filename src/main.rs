//! Wordle Tree - CLI
//!
//! Interactive or batch Wordle solving over a word list.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use wordle_tree::{
    commands::{AnswerOracle, Prompt, play_game, run_batch},
    core::Word,
    output::{print_batch_summary, print_game_result},
    solver::{DEFAULT_MAX_ATTEMPTS, DEFAULT_START_WORD, DecisionTree, SolverConfig},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Wordle solver with a memoized decision tree of best guesses",
    version,
    author
)]
struct Cli {
    /// Word list, one word per line (answers and guess pool)
    #[arg(long)]
    word_file: PathBuf,

    /// Answer to solve, or 'all' for every word in the list (interactive if omitted)
    #[arg(long)]
    word: Option<String>,

    /// First guess of every game
    #[arg(short, long, default_value = DEFAULT_START_WORD)]
    start_word: String,

    /// Attempts allowed per game
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Cap the comparison cache at this many entries (unbounded if omitted)
    #[arg(long)]
    cache_capacity: Option<NonZeroUsize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_from_file(&cli.word_file)
        .with_context(|| format!("loading {}", cli.word_file.display()))?;

    let config = SolverConfig {
        start_word: cli.start_word,
        max_attempts: cli.max_attempts,
        cache_capacity: cli.cache_capacity,
    };
    let mut tree =
        DecisionTree::from_config(words, &config).context("building decision tree")?;

    match cli.word.as_deref() {
        None => run_interactive(&mut tree, &config),
        Some("all") => {
            let targets = tree.answers().to_vec();
            run_batch_command(&mut tree, &targets, &config)
        }
        Some(word) => {
            let answer = Word::new(word).context("invalid --word")?;
            if !tree.answers().contains(&answer) {
                bail!("Requested word ({answer}) is not in the answer list");
            }
            run_single_command(&mut tree, answer, &config)
        }
    }
}

fn run_interactive(tree: &mut DecisionTree, config: &SolverConfig) -> Result<()> {
    let mut prompt = Prompt::stdio();
    prompt.print_legend()?;

    let result = play_game(tree, &mut prompt, config.max_attempts)?;
    print_game_result(&result, None);
    Ok(())
}

fn run_single_command(tree: &mut DecisionTree, answer: Word, config: &SolverConfig) -> Result<()> {
    let mut oracle = AnswerOracle::new(answer.clone());
    let result = play_game(tree, &mut oracle, config.max_attempts)?;
    print_game_result(&result, Some(&answer));
    Ok(())
}

fn run_batch_command(
    tree: &mut DecisionTree,
    targets: &[Word],
    config: &SolverConfig,
) -> Result<()> {
    println!(
        "🎯 Testing {} words with start word {}...",
        targets.len(),
        config.start_word.to_uppercase().bright_yellow()
    );

    let summary = run_batch(tree, targets, config.max_attempts, true)?;
    print_batch_summary(&summary, config.max_attempts);

    println!(
        "\n   Tree nodes:       {}\n   Cached pairs:     {}",
        tree.node_count(),
        tree.comparator().len()
    );
    Ok(())
}

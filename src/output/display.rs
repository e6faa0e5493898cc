//! Display functions for game and batch results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{BatchSummary, GameResult, Outcome};
use crate::core::Word;
use colored::Colorize;

/// Print the transcript of one game
pub fn print_game_result(result: &GameResult, answer: Option<&Word>) {
    if let Some(answer) = answer {
        println!("\n{}", "─".repeat(60).cyan());
        println!("Answer: {}", answer.text().to_uppercase().bright_yellow().bold());
        println!("{}", "─".repeat(60).cyan());
    }

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "Guess {}: {} {}  ({} remaining)",
            i + 1,
            turn.guess.text().to_uppercase(),
            feedback_to_emoji(turn.feedback),
            turn.remaining
        );
    }

    match result.outcome {
        Outcome::Solved { attempts } => println!(
            "{}",
            format!("✅ Correct on {attempts}").green().bold()
        ),
        Outcome::Failed => println!("{}", "❌ Failed!".red().bold()),
        Outcome::NoCandidates => println!(
            "{}",
            "❌ No answers match that feedback".red().bold()
        ),
        Outcome::Quit => println!("\n👋 Thanks for playing!"),
    }
}

/// Print the aggregate results of a batch run
pub fn print_batch_summary(summary: &BatchSummary, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", summary.games);
    println!("   Solved:           {}", summary.solved());
    if !summary.failed.is_empty() {
        println!(
            "   Failed:           {}",
            summary.failed.len().to_string().red()
        );
    }
    if let Some(avg) = summary.average() {
        println!(
            "   Average guesses:  {}",
            format!("{avg:.2}").bright_yellow().bold()
        );
    }
    println!(
        "   Time taken:       {:.2}s",
        summary.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=max_attempts {
        let count = summary.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = if summary.games > 0 {
            count as f64 / summary.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !summary.failed.is_empty() {
        let failed: Vec<&str> = summary.failed.iter().map(Word::text).collect();
        println!("\n   {} {}", "Unsolved:".red(), failed.join(", "));
    }
}

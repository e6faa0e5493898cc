//! Interactive play: the user reports the colour pattern for each guess

use super::play::{FeedbackSource, Response};
use crate::core::{Feedback, Word};
use std::io::{self, BufRead, Write};

/// Prompts on `output` and reads responses from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the feedback symbol legend
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn print_legend(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "For each guess enter 5 characters representing the colour pattern\n"
        )?;
        writeln!(self.output, "Y = match in right position (green)")?;
        writeln!(self.output, "S = match in wrong position (yellow)")?;
        writeln!(self.output, "N = no match (grey)\n")?;
        writeln!(self.output, "Type 'quit' to stop.\n")
    }

    /// Read one trimmed line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_guess(&mut self, suggestion: &Word) -> io::Result<Option<Word>> {
        loop {
            let Some(line) = self.read_line("Guess played (enter to accept): ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(suggestion.clone()));
            }
            if is_quit(&line) {
                return Ok(None);
            }
            match Word::new(line) {
                Ok(word) => return Ok(Some(word)),
                Err(err) => writeln!(self.output, "❌ {err}")?,
            }
        }
    }

    fn read_feedback(&mut self) -> io::Result<Option<Feedback>> {
        loop {
            let Some(line) = self.read_line("Input colour pattern: ")? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            if line.eq_ignore_ascii_case("win") {
                return Ok(Some(Feedback::ALL_EXACT));
            }
            match Feedback::parse(&line) {
                Ok(feedback) => return Ok(Some(feedback)),
                Err(err) => writeln!(self.output, "❌ {err}")?,
            }
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit")
}

impl<R: BufRead, W: Write> FeedbackSource for Prompt<R, W> {
    fn respond(&mut self, attempt: usize, suggestion: &Word) -> io::Result<Response> {
        writeln!(
            self.output,
            "\nGuess {attempt}: {}\n",
            suggestion.text().to_uppercase()
        )?;

        let Some(guess) = self.read_guess(suggestion)? else {
            return Ok(Response::Quit);
        };
        let Some(feedback) = self.read_feedback()? else {
            return Ok(Response::Quit);
        };

        Ok(Response::Played { guess, feedback })
    }
}

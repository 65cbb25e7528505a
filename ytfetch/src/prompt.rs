//! Interactive questions asked on the terminal.

use eyre::{OptionExt, Result};
use inquire::{Confirm, Text};
use std::io::{BufRead, IsTerminal, Write};

/// Source of answers for the interactive flow.
pub trait Prompt {
    /// Ask for a line of free text.
    fn text(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question; anything but `y`/`yes` means no.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Prompts rendered with inquire on the controlling terminal.
///
/// When stdin is not a terminal (piped input), answers are read line by line instead.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn text(&mut self, message: &str) -> Result<String> {
        if !std::io::stdin().is_terminal() {
            return Lines::new(std::io::stdin().lock()).text(message);
        }

        Ok(Text::new(message).prompt()?)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            return Lines::new(std::io::stdin().lock()).confirm(message);
        }

        Ok(Confirm::new(message)
            .with_default(false)
            .with_placeholder("y/n")
            .with_parser(&parse_answer)
            .prompt()?)
    }
}

/// Plain prompts that print the question and read one line per answer.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_answer(&mut self, message: &str) -> Result<String> {
        print!("{message} ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;

        (read > 0)
            .then(|| line.trim_end_matches(['\r', '\n']).to_string())
            .ok_or_eyre("input ended before an answer was given")
    }
}

impl<R: BufRead> Prompt for Lines<R> {
    fn text(&mut self, message: &str) -> Result<String> {
        self.read_answer(message)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(is_yes(&self.read_answer(message)?))
    }
}

/// `y` or `yes`, ignoring case and surrounding whitespace.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn parse_answer(answer: &str) -> std::result::Result<bool, ()> {
    Ok(is_yes(answer))
}

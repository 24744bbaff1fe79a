//! Simple interactive CLI mode
//!
//! Line-based solver without the TUI. Guesses are typed as `WORD LIKENESS`;
//! anything starting with `:` is a command.

use crate::dictionary::Dictionary;
use crate::output::{print_candidates, print_guess_error, print_guesses, print_suggestions};
use crate::solver::{Session, suggestions};
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufRead, Write};

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Guess(String),
    Remove(usize),
    Reset,
    List,
    Complete(String),
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

impl ReplCommand {
    /// Parse a trimmed input line
    ///
    /// `:rm N` takes a 1-based position and yields a 0-based index.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::Nothing;
        }

        let Some(command) = line.strip_prefix(':') else {
            return match line.to_ascii_lowercase().as_str() {
                "quit" | "q" | "exit" => Self::Quit,
                _ => Self::Guess(line.to_string()),
            };
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        match (name.as_str(), argument) {
            ("rm" | "remove", Some(n)) => match n.parse::<usize>() {
                Ok(position) if position >= 1 => Self::Remove(position - 1),
                _ => Self::Invalid(format!("'{n}' is not a guess number")),
            },
            ("rm" | "remove", None) => Self::Invalid("Usage: :rm N".to_string()),
            ("complete" | "c", prefix) => Self::Complete(prefix.unwrap_or_default().to_string()),
            ("reset" | "new", _) => Self::Reset,
            ("list" | "ls", _) => Self::List,
            ("help" | "h" | "?", _) => Self::Help,
            ("quit" | "q", _) => Self::Quit,
            _ => Self::Invalid(format!("Unknown command ':{name}'")),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(dictionary: &Dictionary) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Fallout Hacking Solver - Interactive Mode         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        let command = ReplCommand::parse(&line);
        debug!("repl command: {command:?}");

        match command {
            ReplCommand::Nothing => {}
            ReplCommand::Quit => {
                println!("\nGood luck with the terminal!\n");
                return Ok(());
            }
            ReplCommand::Help => print_help(),
            ReplCommand::Invalid(message) => println!("{message}"),
            ReplCommand::List => {
                print_guesses(session.guesses());
                print_candidates(&session.candidates(dictionary), session.guesses());
            }
            ReplCommand::Complete(prefix) => {
                print_suggestions(&suggestions(dictionary, session.guesses(), &prefix));
            }
            ReplCommand::Reset => {
                session = Session::reset();
                println!("Cleared all guesses.");
            }
            ReplCommand::Remove(index) => {
                if index < session.guesses().len() {
                    session = session.remove(index);
                    print_guesses(session.guesses());
                    print_candidates(&session.candidates(dictionary), session.guesses());
                } else {
                    println!("There is no guess number {}.", index + 1);
                }
            }
            ReplCommand::Guess(text) => {
                session = session.submit(&text);
                if let Some(error) = session.error() {
                    print_guess_error(error);
                } else {
                    print_candidates(&session.candidates(dictionary), session.guesses());
                }
            }
        }
    }
}

fn print_help() {
    println!("Enter guesses as WORD LIKENESS, for example: ARCHITECTS 3\n");
    println!("Commands:");
    println!("  :complete PREFIX   list possible words starting with PREFIX");
    println!("  :list              show guesses and possible words");
    println!("  :rm N              remove guess number N");
    println!("  :reset             clear all guesses");
    println!("  :help              show this message");
    println!("  quit               exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_lines() {
        assert_eq!(
            ReplCommand::parse("ARCHITECTS 3"),
            ReplCommand::Guess("ARCHITECTS 3".to_string())
        );
        // Malformed guesses still go to the session, which reports them
        assert_eq!(
            ReplCommand::parse("  word  "),
            ReplCommand::Guess("word".to_string())
        );
    }

    #[test]
    fn parse_blank_line() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Nothing);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Nothing);
    }

    #[test]
    fn parse_quit_forms() {
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("Q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn parse_remove_is_one_based() {
        assert_eq!(ReplCommand::parse(":rm 1"), ReplCommand::Remove(0));
        assert_eq!(ReplCommand::parse(":remove 3"), ReplCommand::Remove(2));
        assert!(matches!(ReplCommand::parse(":rm 0"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse(":rm x"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse(":rm"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn remove_word_is_still_a_guess() {
        assert_eq!(
            ReplCommand::parse("REMOVE 2"),
            ReplCommand::Guess("REMOVE 2".to_string())
        );
    }

    #[test]
    fn parse_other_commands() {
        assert_eq!(ReplCommand::parse(":reset"), ReplCommand::Reset);
        assert_eq!(ReplCommand::parse(":LIST"), ReplCommand::List);
        assert_eq!(ReplCommand::parse(":help"), ReplCommand::Help);
        assert_eq!(
            ReplCommand::parse(":complete arch"),
            ReplCommand::Complete("arch".to_string())
        );
        assert_eq!(ReplCommand::parse(":c"), ReplCommand::Complete(String::new()));
        assert!(matches!(ReplCommand::parse(":bogus"), ReplCommand::Invalid(_)));
    }
}

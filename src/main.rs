//! Fallout Hacking Solver - CLI
//!
//! Terminal password solver with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hacking_solver::{
    commands::{filter_words, run_simple},
    core::likeness,
    dictionary::{Dictionary, loader::load_dictionary},
    output::{print_candidates, print_likeness},
};
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(
    name = "hacking_solver",
    about = "Fallout terminal hacking solver: filters words by reported likeness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Filter words from guesses given as arguments
    Filter {
        /// Guesses in the form "WORD LIKENESS", e.g. "ARCHITECTS 3"
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Print the likeness of two words
    Likeness {
        /// First word
        a: String,
        /// Second word
        b: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary based on the -d flag
fn load_words(path: Option<&str>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => {
            load_dictionary(path).with_context(|| format!("failed to load word list {path}"))?
        }
        None => Dictionary::embedded(),
    };

    info!(
        "dictionary has {} words across lengths {:?}",
        dictionary.len(),
        dictionary.lengths()
    );
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Likeness { a, b } => {
            print_likeness(&a, &b, likeness(&a, &b));
            Ok(())
        }
        Commands::Filter { guesses } => {
            let dictionary = load_words(cli.dictionary.as_deref())?;
            run_filter_command(&dictionary, &guesses)
        }
        Commands::Simple => {
            let dictionary = load_words(cli.dictionary.as_deref())?;
            run_simple(&dictionary)
        }
        Commands::Play => {
            let dictionary = load_words(cli.dictionary.as_deref())?;
            run_play_command(&dictionary)
        }
    }
}

fn run_filter_command(dictionary: &Dictionary, guesses: &[String]) -> Result<()> {
    let result = filter_words(dictionary, guesses)?;
    print_candidates(&result.candidates, result.session.guesses());
    Ok(())
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use hacking_solver::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}

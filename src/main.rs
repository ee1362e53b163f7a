//! Wordle - CLI
//!
//! Play Wordle in the terminal, as a full-screen TUI or in plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    game::{Dictionary, Session},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen TUI mode (default)
    Play,

    /// Plain text mode without TUI
    Simple,
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word list from file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'"))?,
    };

    Ok(Dictionary::new(words)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary),
        Commands::Simple => {
            run_simple(Session::new(dictionary)).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn run_play_command(dictionary: Dictionary) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(Session::new(dictionary));
    run_tui(app)
}

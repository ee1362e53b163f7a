//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameState, MAX_GUESSES, Session};
use crate::output::{colored_guess_row, keyboard_summary, share_grid};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Terminal Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - Green:  correct letter, correct position");
    println!("  - Yellow: correct letter, wrong position");
    println!("  - Gray:   letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        let attempt = session.attempts() + 1;
        let input = get_user_input(&format!("Guess {attempt}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let outcome = match session.submit(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        // Board so far, then the keyboard
        println!();
        for row in session.history() {
            println!("    {}", colored_guess_row(&row.word, row.feedback));
        }
        println!("\n{}\n", keyboard_summary(session.key_states()));

        match outcome.state {
            GameState::InProgress => {}
            GameState::Won => {
                print_win(&session);
                if !ask_play_again(&mut session)? {
                    return Ok(());
                }
            }
            GameState::Lost => {
                let target = outcome
                    .revealed
                    .map_or_else(String::new, |w| w.text().to_string());

                println!("{}", "═".repeat(62).bright_cyan());
                println!("{}", "  Out of guesses!".bright_red().bold());
                println!("  The word was {}", target.bright_white().bold());
                println!("{}\n", "═".repeat(62).bright_cyan());

                if !ask_play_again(&mut session)? {
                    return Ok(());
                }
            }
        }
    }
}

fn print_win(session: &Session) {
    let attempts = session.attempts();

    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  Y O U   W I N !  ✨ 🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let performance = match attempts {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("😅 Phew!", "Down to the wire!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Guessed in {}/{MAX_GUESSES}",
        attempts.to_string().bright_cyan().bold()
    );

    println!("\n{}", share_grid(session.history()));
    println!("\n{}\n", "═".repeat(62).bright_cyan());
}

fn ask_play_again(session: &mut Session) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            session.reset();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

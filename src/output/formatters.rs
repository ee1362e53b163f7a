//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use crate::game::{GuessRow, KEY_ROWS, KeyStates, KeyStatus};
use colored::Colorize;

/// Format a scored guess as a colored board row
#[must_use]
pub fn colored_guess_row(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback)
        .map(|(ch, score)| {
            let cell = format!(" {ch} ");
            match score {
                LetterScore::Exact => cell.black().on_green().to_string(),
                LetterScore::Present => cell.black().on_yellow().to_string(),
                LetterScore::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Format the virtual keyboard as three colored rows
///
/// Absent letters are dimmed, unknown letters are plain.
#[must_use]
pub fn keyboard_summary(keys: &KeyStates) -> String {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys_line: String = row
                .chars()
                .map(|ch| {
                    let key = format!("{ch} ");
                    match keys.status(ch as u8) {
                        KeyStatus::Exact => key.black().on_green().to_string(),
                        KeyStatus::Present => key.black().on_yellow().to_string(),
                        KeyStatus::Absent => key.bright_black().to_string(),
                        KeyStatus::Unknown => key,
                    }
                })
                .collect();
            format!("{}{keys_line}", " ".repeat(i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the round history as a share-style emoji grid
#[must_use]
pub fn share_grid(history: &[GuessRow]) -> String {
    history
        .iter()
        .map(|row| row.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn guess_row_keeps_letter_order() {
        let guess = word("crane");
        let target = word("slate");
        let row = colored_guess_row(&guess, Feedback::score(&guess, &target));

        let letters: Vec<usize> = "CRANE"
            .chars()
            .map(|ch| row.find(ch).expect("letter missing from row"))
            .collect();
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn keyboard_summary_has_three_rows() {
        let summary = keyboard_summary(&KeyStates::new());
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('Q'));
        assert!(lines[1].contains('A'));
        assert!(lines[2].contains('Z'));
    }

    #[test]
    fn share_grid_one_line_per_guess() {
        let target = word("slate");
        let rows: Vec<GuessRow> = ["crane", "slate"]
            .iter()
            .map(|g| {
                let w = word(g);
                let feedback = Feedback::score(&w, &target);
                GuessRow { word: w, feedback }
            })
            .collect();

        let grid = share_grid(&rows);
        assert_eq!(grid.lines().count(), 2);
        assert_eq!(grid.lines().last().unwrap(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_history() {
        assert_eq!(share_grid(&[]), "");
    }
}

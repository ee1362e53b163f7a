//! TUI application state and logic

use crate::game::{GameState, MAX_GUESSES, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the hidden word in {MAX_GUESSES} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a 5-letter word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Append a letter to the in-progress guess (max 5)
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the in-progress guess to the session
    pub fn submit_current(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();

                match outcome.state {
                    GameState::InProgress => {}
                    GameState::Won => {
                        let attempts = self.session.attempts();
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };

                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            &format!("You won in {attempts}/{MAX_GUESSES}."),
                            MessageStyle::Success,
                        );
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                        self.input_mode = InputMode::RoundOver;
                    }
                    GameState::Lost => {
                        if let Some(target) = outcome.revealed {
                            self.add_message(
                                &format!("Out of guesses! The word was {target}."),
                                MessageStyle::Error,
                            );
                        }
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                        self.input_mode = InputMode::RoundOver;
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Start a fresh round
    pub fn new_game(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Round is over, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Dictionary;

    fn app_with_target(target: &str) -> App {
        let words = ["crane", "slate", "audio", "speed", "erase", "alley"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect();
        let dictionary = Dictionary::new(words).unwrap();
        App::new(Session::with_target(
            dictionary,
            Word::new(target).unwrap(),
        ))
    }

    #[test]
    fn push_letter_caps_at_five() {
        let mut app = app_with_target("crane");
        for c in "slates".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "SLATE");
    }

    #[test]
    fn push_letter_ignores_non_alphabetic() {
        let mut app = app_with_target("crane");
        app.push_letter('s');
        app.push_letter('1');
        app.push_letter('!');
        assert_eq!(app.input_buffer, "S");
    }

    #[test]
    fn winning_submit_enters_round_over() {
        let mut app = app_with_target("crane");
        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn rejected_submit_keeps_buffer() {
        let mut app = app_with_target("crane");
        for c in "zzzzz".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        // Not a word: message added, buffer intact for editing
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.input_buffer, "ZZZZZ");
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn new_game_clears_round() {
        let mut app = app_with_target("crane");
        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_current();
        assert_eq!(app.input_mode, InputMode::RoundOver);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempts(), 0);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app_with_target("crane");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}

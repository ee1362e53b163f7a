//! Game session state machine
//!
//! A `Session` owns one round of the game: the hidden target, the accepted
//! guess history, the keyboard knowledge, and the win/loss state. Submission
//! is atomic - a rejected guess leaves the session exactly as it was.

use super::{Dictionary, KeyStates};
use crate::core::{Feedback, Word};
use std::fmt;

/// Maximum guesses per round
pub const MAX_GUESSES: usize = 6;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Why a submitted guess was rejected
///
/// All variants are recoverable; none consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    NotInDictionary(String),
    DuplicateGuess(String),
    SessionTerminal,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly 5 letters, got {len}")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not a valid word"),
            Self::DuplicateGuess(word) => write!(f, "'{word}' has already been guessed"),
            Self::SessionTerminal => write!(f, "The round is over; start a new game to keep playing"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One accepted guess and its feedback, in board order
#[derive(Debug, Clone)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of a successfully accepted guess
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Per-position classification of the accepted guess
    pub feedback: Feedback,
    /// State after the guess was applied
    pub state: GameState,
    /// The target word, populated once the round ends
    pub revealed: Option<Word>,
}

/// One round of the game
///
/// Created from a [`Dictionary`]; accepts guesses until won or lost;
/// [`Session::reset`] starts a fresh round with a new target over the same
/// dictionary.
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Dictionary,
    target: Word,
    history: Vec<GuessRow>,
    keys: KeyStates,
    state: GameState,
}

impl Session {
    /// Start a round with a uniformly random target
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let target = dictionary.pick().clone();
        Self::with_target(dictionary, target)
    }

    /// Start a round with a fixed target
    ///
    /// Deterministic seam for tests; `target` should be a dictionary word.
    #[must_use]
    pub fn with_target(dictionary: Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            history: Vec::with_capacity(MAX_GUESSES),
            keys: KeyStates::new(),
            state: GameState::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Input is trimmed and uppercased before validation. On success the
    /// guess is scored, folded into the keyboard, appended to the history,
    /// and the round state resolved; all of it happens together or not at
    /// all.
    ///
    /// # Errors
    /// - `InvalidLength` if the normalized input is not 5 characters
    /// - `NotInDictionary` if it is not a playable word
    /// - `DuplicateGuess` if it was already guessed this round
    /// - `SessionTerminal` if the round is already won or lost
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Dictionary, GameState, Session};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let dictionary = Dictionary::new(words).unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let mut session = Session::with_target(dictionary, target);
    ///
    /// let outcome = session.submit("crane").unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, GuessError> {
        let normalized = raw.trim().to_uppercase();

        if normalized.chars().count() != 5 {
            return Err(GuessError::InvalidLength(normalized.chars().count()));
        }

        // Non-alphabetic input of the right length cannot be a word
        let guess = Word::new(normalized.as_str())
            .map_err(|_| GuessError::NotInDictionary(normalized.clone()))?;

        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInDictionary(normalized));
        }

        if self.history.iter().any(|row| row.word == guess) {
            return Err(GuessError::DuplicateGuess(normalized));
        }

        if self.state != GameState::InProgress {
            return Err(GuessError::SessionTerminal);
        }

        // Accepted - apply everything together
        let feedback = Feedback::score(&guess, &self.target);
        self.keys.record(&guess, feedback);

        self.state = if guess == self.target {
            GameState::Won
        } else if self.history.len() + 1 == MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        self.history.push(GuessRow {
            word: guess,
            feedback,
        });

        let revealed = (self.state != GameState::InProgress).then(|| self.target.clone());

        Ok(SubmitOutcome {
            feedback,
            state: self.state,
            revealed,
        })
    }

    /// Start a fresh round over the same dictionary
    ///
    /// Clears the history and keyboard and draws a new random target, which
    /// may coincide with the previous one.
    pub fn reset(&mut self) {
        self.target = self.dictionary.pick().clone();
        self.history.clear();
        self.keys.reset();
        self.state = GameState::InProgress;
    }

    /// Current round state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Accepted guesses so far, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRow] {
        &self.history
    }

    /// Number of attempts used
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Keyboard knowledge accumulated this round
    #[inline]
    #[must_use]
    pub const fn key_states(&self) -> &KeyStates {
        &self.keys
    }

    /// The dictionary this session plays over
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The target word, once the round has ended
    ///
    /// Returns `None` while the round is in progress - the target stays
    /// hidden until the player wins or loses.
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        (self.state != GameState::InProgress).then_some(&self.target)
    }
}

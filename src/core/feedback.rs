//! Guess feedback calculation and representation
//!
//! Feedback classifies every position of a guess against the target:
//! - Absent (letter not in the remaining target letters)
//! - Present (letter in the word, wrong position)
//! - Exact (letter in the correct position)

use super::Word;

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Absent,
    Present,
    Exact,
}

/// Feedback for a full guess row
///
/// An ordered sequence of five classifications, one per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; 5]);

impl Feedback {
    /// All exact (winning guess)
    pub const WIN: Self = Self([LetterScore::Exact; 5]);

    /// Score `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and consume those letters from
    ///    the target's letter pool
    /// 2. Second pass, left to right: mark present-but-misplaced letters from
    ///    the remaining pool, consuming one instance per match; everything
    ///    else is absent
    ///
    /// A letter appearing twice in the guess but once in the target is
    /// therefore marked at most once.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(feedback.scores()[2], LetterScore::Exact);
    /// assert_eq!(feedback.scores()[4], LetterScore::Exact);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterScore::Absent; 5];
        let mut target_available = target.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = LetterScore::Exact;

                // Consume from the pool
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, limited by remaining counts
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == LetterScore::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the per-position classifications
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.0
    }

    /// Check if this is a winning row (all exact)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Count the number of exact matches
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Exact)
            .count()
    }

    /// Convert feedback to emoji string
    ///
    /// Returns a share-style row like "🟩🟨⬜🟩🟨".
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&word, &word);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|score| match score {
                LetterScore::Exact => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

impl IntoIterator for Feedback {
    type Item = LetterScore;
    type IntoIter = std::array::IntoIter<LetterScore, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Present};

    #[test]
    fn feedback_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.scores(), &[Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_all_exact() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::score(&word, &word);

        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
        assert_eq!(feedback.count_exact(), 5);
    }

    #[test]
    fn feedback_self_match_is_win() {
        for word in ["crane", "slate", "audio", "llama", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::score(&w, &w).is_win());
        }
    }

    #[test]
    fn feedback_duplicate_letters_consumed_once() {
        // Target SPEED, guess ERASE:
        // E(present) R(absent) A(absent) S(present) E(present)
        // SPEED has two E's, so both guess E's are present; the single S
        // matches; R and A are absent
        let guess = Word::new("erase").unwrap();
        let target = Word::new("speed").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.scores(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_exact_consumes_before_present() {
        // Target ALLEY, guess LLAMA:
        // L(present) L(exact) A(present) M(absent) A(absent)
        // The L at position 1 is exact and consumes one of ALLEY's two L's;
        // the L at position 0 takes the other. ALLEY has one A, claimed by
        // the guess A at position 2, so the final A is absent.
        let guess = Word::new("llama").unwrap();
        let target = Word::new("alley").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.scores(),
            &[Present, Exact, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_mixed() {
        // Target FLOOR, guess ROBOT:
        // R(present) O(present) B(absent) O(exact) T(absent)
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.scores(),
            &[Present, Present, Absent, Exact, Absent]
        );
        assert_eq!(feedback.count_exact(), 1);
    }

    #[test]
    fn feedback_guess_repeats_single_target_letter() {
        // Target CRANE has one E; guess EERIE offers three.
        // The final E is exact and consumes it, so the two leading E's are
        // absent: E(absent) E(absent) R(present) I(absent) E(exact)
        let guess = Word::new("eerie").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(
            feedback.scores(),
            &[Absent, Absent, Present, Absent, Exact]
        );
    }

    #[test]
    fn feedback_classic_example() {
        // CRANE vs SLATE: A and E exact, R absent (SLATE has no R)
        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.scores(), &[Absent, Absent, Exact, Absent, Exact]);
    }

    #[test]
    fn feedback_to_emoji() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}

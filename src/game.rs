//! Core hangman rules: the secret word, letter classification, and the
//! one-way status state machine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Number of incorrect guesses allowed before a session is lost.
pub const MAX_WRONG: usize = 6;

/// Current status of a hangman session.
///
/// Transitions are one-way: `Playing → Won` and `Playing → Lost` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Guesses are still being accepted.
    Playing,
    /// Every letter of the word has been revealed.
    Won,
    /// The wrong-guess budget is exhausted.
    Lost,
}

/// A validated guess: exactly one lowercase ASCII letter.
///
/// Raw caller input only becomes a [`Letter`] through [`Letter::parse`],
/// so the engine never sees an unnormalized guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub struct Letter(char);

/// Reasons a raw guess fails normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LetterError {
    /// Input is empty after trimming surrounding whitespace.
    #[display("guess is empty")]
    Empty,
    /// Input is more than one character after trimming.
    #[display("guess must be a single character")]
    NotSingle,
    /// The character is not one of the 26 ASCII letters.
    #[display("guess must be a letter a-z")]
    NotLetter,
}

impl Letter {
    /// Normalizes raw input into a letter.
    ///
    /// Trims surrounding whitespace, requires exactly one character, and
    /// lowercases it; the result must be in `a..=z`.
    pub fn parse(raw: &str) -> Result<Self, LetterError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(LetterError::Empty);
        };
        if chars.next().is_some() {
            return Err(LetterError::NotSingle);
        }
        let lowered = first.to_ascii_lowercase();
        if !lowered.is_ascii_lowercase() {
            return Err(LetterError::NotLetter);
        }
        Ok(Letter(lowered))
    }

    /// Returns the normalized character.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Result of applying one guess - explicit classification of what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word and was newly revealed.
    Correct,
    /// The letter does not occur in the word; one life spent.
    Wrong,
    /// The letter was guessed before; nothing changed.
    Repeat,
    /// The session already reached a terminal status; nothing changed.
    Finished,
}

/// One hangman round: the secret word plus everything guessed against it.
///
/// The guessed and wrong sets are [`BTreeSet`]s, so the ascending order the
/// public view promises is structural rather than sorted at projection time.
/// The two sets stay disjoint: a letter is classified into exactly one of
/// them, and repeats never reclassify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: String,
    guessed: BTreeSet<char>,
    wrong: BTreeSet<char>,
    status: GameStatus,
}

// ─────────────────────────────────────────────────────────────
//  Construction and accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Starts a round over the given secret word.
    ///
    /// The word must be non-empty lowercase ASCII; the word source
    /// guarantees this for every word it supplies.
    #[instrument(skip(word))]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        debug_assert!(!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()));
        Self {
            word,
            guessed: BTreeSet::new(),
            wrong: BTreeSet::new(),
            status: GameStatus::Playing,
        }
    }

    /// Returns the secret word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Letters confirmed present in the word, ascending.
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Letters confirmed absent from the word, ascending.
    pub fn wrong(&self) -> &BTreeSet<char> {
        &self.wrong
    }

    /// Wrong guesses still available before the session is lost.
    pub fn remaining(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong.len())
    }

    /// Returns true once the session reached `Won` or `Lost`.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// The word with unguessed letters replaced by `_`.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess transition
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Applies one guess and recomputes the status.
    ///
    /// Terminal sessions and repeated letters are no-ops that leave every
    /// field untouched; otherwise the letter lands in exactly one of the
    /// guessed/wrong sets and the status is recomputed once.
    #[instrument(skip(self), fields(letter = %letter, status = %self.status))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            debug!("session already finished, ignoring guess");
            return GuessOutcome::Finished;
        }

        let c = letter.as_char();
        if self.guessed.contains(&c) || self.wrong.contains(&c) {
            debug!("repeated guess, no change");
            return GuessOutcome::Repeat;
        }

        let outcome = if self.word.contains(c) {
            self.guessed.insert(c);
            GuessOutcome::Correct
        } else {
            self.wrong.insert(c);
            GuessOutcome::Wrong
        };

        self.update_status();
        outcome
    }

    /// Recomputes the status after a mutating guess.
    ///
    /// Win is checked before loss.
    fn update_status(&mut self) {
        if self.is_over() {
            return;
        }
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            self.status = GameStatus::Won;
        } else if self.wrong.len() >= MAX_WRONG {
            self.status = GameStatus::Lost;
        }
    }
}

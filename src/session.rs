//! Session store: owns every live game and serializes guess application.

use crate::game::{Game, GameStatus, Letter, LetterError, MAX_WRONG};
use crate::ids::IdGenerator;
use crate::words::WordSource;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A single hangman game bound to its identifier.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    id: SessionId,
    /// The game state.
    game: Game,
}

impl GameSession {
    fn new(id: SessionId, word: String) -> Self {
        Self {
            id,
            game: Game::new(word),
        }
    }

    /// Projects the session into its caller-facing view.
    pub fn view(&self) -> GameView {
        let game = &self.game;
        GameView {
            id: self.id.clone(),
            masked_word: game.masked_word(),
            wrong_letters: game.wrong().iter().copied().collect(),
            guessed_letters: game.guessed().iter().copied().collect(),
            remaining: game.remaining(),
            max_wrong: MAX_WRONG,
            status: game.status(),
            answer: (game.status() == GameStatus::Lost).then(|| game.word().to_string()),
        }
    }
}

/// The subset of session state safe to return to a caller.
///
/// `answer` is populated only once the session is lost; until then the
/// secret word never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Session ID.
    pub id: SessionId,
    /// The word with unguessed letters replaced by `_`.
    pub masked_word: String,
    /// Letters confirmed absent, ascending.
    pub wrong_letters: Vec<char>,
    /// Letters confirmed present, ascending.
    pub guessed_letters: Vec<char>,
    /// Wrong guesses still available.
    pub remaining: usize,
    /// The wrong-guess budget.
    pub max_wrong: usize,
    /// Current status.
    pub status: GameStatus,
    /// The secret word, revealed once the session is lost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Caller-facing failures of session operations.
///
/// Both variants are recoverable conditions for the transport layer to
/// translate; neither is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No live session has the requested id.
    #[display("Game not found")]
    NotFound,
    /// The submitted guess failed letter normalization.
    #[display("Invalid letter")]
    InvalidLetter(LetterError),
}

impl From<LetterError> for SessionError {
    fn from(err: LetterError) -> Self {
        Self::InvalidLetter(err)
    }
}

/// Owns all live sessions behind one lock.
///
/// Cloning is cheap; every clone shares the same session map, word source,
/// and id generator.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
    words: Arc<dyn WordSource>,
    ids: Arc<dyn IdGenerator>,
}

impl SessionStore {
    /// Creates a store over the given word source and id generator.
    #[instrument(skip_all)]
    pub fn new(words: Arc<dyn WordSource>, ids: Arc<dyn IdGenerator>) -> Self {
        info!("Creating session store");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            words,
            ids,
        }
    }

    /// Creates a new session around a randomly drawn word.
    ///
    /// Infallible: the word source always yields a word, and the id is
    /// re-drawn while the lock is held until it misses every live session.
    #[instrument(skip(self))]
    pub fn create_session(&self) -> GameView {
        let word = self.words.pick();
        let mut sessions = self.sessions.lock().unwrap();

        let id = loop {
            let candidate = self.ids.generate();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
            warn!(session_id = %candidate, "id collides with a live session, redrawing");
        };

        let session = GameSession::new(id.clone(), word);
        let view = session.view();
        sessions.insert(id.clone(), session);

        info!(session_id = %id, word_len = view.masked_word.len(), "created session");
        view
    }

    /// Returns the public view of a session. No side effects.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Result<GameView, SessionError> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).ok_or_else(|| {
            debug!("session not found");
            SessionError::NotFound
        })?;
        Ok(session.view())
    }

    /// Applies one guess to the identified session.
    ///
    /// The lookup, letter normalization, classification, status recompute,
    /// and view snapshot all happen under a single lock acquisition, so
    /// concurrent guesses against one session serialize and the wrong-guess
    /// bound can never be overshot. The not-found check precedes letter
    /// validation.
    #[instrument(skip(self))]
    pub fn apply_guess(&self, id: &str, raw: &str) -> Result<GameView, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!("session not found");
            SessionError::NotFound
        })?;

        let letter = Letter::parse(raw).map_err(|err| {
            warn!(error = %err, "rejecting malformed guess");
            SessionError::from(err)
        })?;

        let outcome = session.game.guess(letter);
        debug!(
            outcome = ?outcome,
            status = %session.game.status(),
            remaining = session.game.remaining(),
            "guess applied"
        );
        Ok(session.view())
    }
}

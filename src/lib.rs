//! Hangman game server library - REST API over an in-memory session store
//!
//! This library provides a classic hangman (word-guessing) game as an HTTP
//! service with sessions held in memory.
//!
//! # Architecture
//!
//! - **Game**: pure guessing rules and the one-way status state machine
//! - **Session**: thread-safe store that owns every live game
//! - **Server**: axum routes translating store results to HTTP responses
//! - **Words**: word list loading with a built-in fallback
//!
//! # Example
//!
//! ```
//! use hangman_server::{Game, GameStatus, Letter};
//!
//! let mut game = Game::new("cat");
//! game.guess(Letter::parse("a").unwrap());
//!
//! assert_eq!(game.masked_word(), "_a_");
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod ids;
mod server;
mod session;
mod words;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Game engine
pub use game::{Game, GameStatus, GuessOutcome, Letter, LetterError, MAX_WRONG};

// Crate-level exports - Id generation
pub use ids::{IdGenerator, UuidIds};

// Crate-level exports - HTTP surface
pub use server::router;

// Crate-level exports - Session management
pub use session::{GameSession, GameView, SessionError, SessionId, SessionStore};

// Crate-level exports - Word sources
pub use words::{WordList, WordSource};

//! Command-line interface for the hangman server.

use clap::Parser;
use std::path::PathBuf;

/// Hangman - word-guessing game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "hangman_server")]
#[command(about = "Hangman game server with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to. Falls back to the PORT environment variable, then 8000.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the word list file. Falls back to the WORDS_PATH environment
    /// variable, then "words.txt".
    #[arg(short, long)]
    pub words: Option<PathBuf>,
}

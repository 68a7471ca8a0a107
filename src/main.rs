//! Hangman game server binary.

use anyhow::Result;
use clap::Parser;
use hangman_server::{Cli, SessionStore, UuidIds, WordList, router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let port = cli
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(8000);
    let words_path = cli
        .words
        .or_else(|| std::env::var("WORDS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("words.txt"));

    info!("Starting hangman server");
    info!(port, host = %cli.host, "Server will listen on http://{}:{}", cli.host, port);

    let words = WordList::load(&words_path);
    info!(
        words = words.len(),
        path = %words_path.display(),
        "Word list ready"
    );

    let store = SessionStore::new(Arc::new(words), Arc::new(UuidIds));
    let app = router(store);

    let listener = TcpListener::bind((cli.host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", cli.host, port);

    axum::serve(listener, app).await?;

    Ok(())
}

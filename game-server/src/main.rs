use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_core::{
    DictionaryValidator, GuessValidator, LengthOnlyValidator, WordList, WordSource,
};
use game_server::{
    config::{Config, ValidationMode},
    create_routes,
    dictionary::DictionaryLookup,
    game_manager::GameManager,
};

fn build_game_manager(config: &Config) -> anyhow::Result<GameManager> {
    let word_source: Box<dyn WordSource> = match &config.words_file {
        Some(path) => {
            info!("Loading secret words from {}", path);
            let list = WordList::from_file(path)
                .with_context(|| format!("Failed to load words from '{}'", path))?;
            info!("Loaded {} secret words", list.len());
            Box::new(list)
        }
        None => {
            info!("Using the built-in secret word list");
            Box::new(WordList::default())
        }
    };

    let validator: Arc<dyn GuessValidator> = match config.validation_mode {
        ValidationMode::Dictionary => {
            info!(
                "Checking guesses against {} ({} attempts)",
                config.dictionary_url, config.lookup_attempts
            );
            let lookup = DictionaryLookup::new(&config.dictionary_url, config.lookup_timeout())
                .context("Failed to build dictionary HTTP client")?;
            Arc::new(DictionaryValidator::with_retry(lookup, config.retry_policy()))
        }
        ValidationMode::LengthOnly => {
            info!("Dictionary checks disabled, accepting any five letter guess");
            Arc::new(LengthOnlyValidator)
        }
    };

    Ok(GameManager::new(word_source, validator))
}

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal};

        match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => info!("Received SIGINT, shutting down gracefully..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully..."),
                }
                return;
            }
            _ => tracing::warn!("Failed to install signal handlers, falling back to Ctrl+C"),
        }
    }

    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        return;
    }
    info!("Received Ctrl+C, shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Wordle round server...");

    let config = Config::from_env().context("Invalid configuration")?;
    let game_manager = Arc::new(build_game_manager(&config)?);
    let routes = create_routes(game_manager, config.rate_limit());

    let host: std::net::IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST '{}'", config.host))?;

    let (addr, server) =
        warp::serve(routes).try_bind_with_graceful_shutdown((host, config.port), shutdown_signal())
            .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
    Ok(())
}

//! Unscramble - console word-unscramble puzzle.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unscramble_engine::api::{console::HELP, run_console};
use unscramble_engine::infrastructure::{
    announcer::ConsoleAnnouncer,
    settings::{LookupSettings, OutputFormat, PuzzleSettings},
};
use unscramble_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the puzzle.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Unscramble");

    let settings = PuzzleSettings::from_env();
    let lookup = LookupSettings::from_env();
    let format = OutputFormat::from_env();
    tracing::info!(
        backend = %lookup.backend,
        topic = ?settings.initial_topic.as_ref().map(|t| t.as_str()),
        max_words_per_topic = settings.max_words_per_topic,
        max_attempts = settings.max_attempts,
        "Configuration loaded"
    );

    let app = App::from_settings(settings, &lookup).with_announcer(Arc::new(ConsoleAnnouncer));
    let (handle, runtime) = app.spawn_puzzle();

    if format == OutputFormat::Text {
        println!("{}", HELP);
    }
    run_console(handle, format).await?;

    // The console dropped the last command sender; the runtime winds down.
    runtime.await?;
    tracing::info!("Goodbye");
    Ok(())
}

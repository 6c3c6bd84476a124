//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ThemeChoice, mode_for};
use noughts::{AppConfig, GameSession, Preferences, SqliteStore, TuiView};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(db_path) = cli.db_path {
        config.set_db_path(db_path);
    }

    match cli.command.unwrap_or(Command::Play {
        bot: false,
        seed: None,
    }) {
        Command::Play { bot, seed } => run_play(&config, bot, seed),
        Command::Stats { json } => run_stats(&config, json),
        Command::Theme { choice } => run_theme(&config, choice),
    }
}

/// Logs to a file so output does not fight the terminal UI.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file '{}'", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_preferences(config: &AppConfig) -> Result<Preferences<SqliteStore>> {
    let store = SqliteStore::open(config.db_path().clone())
        .with_context(|| format!("Failed to open preference store '{}'", config.db_path()))?;
    Ok(Preferences::new(store, config.profile().clone()))
}

/// Run the terminal game
#[instrument(skip(config))]
fn run_play(config: &AppConfig, bot: bool, seed: Option<u64>) -> Result<()> {
    init_file_tracing(config)?;
    info!(db_path = %config.db_path(), profile = %config.profile(), "Starting noughts");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let preferences = open_preferences(config)?;
    let session = GameSession::start(preferences, TuiView::new(), rng, mode_for(bot))?;
    noughts::tui::run(session)
}

/// Print the persisted tally
#[instrument(skip(config))]
fn run_stats(config: &AppConfig, json: bool) -> Result<()> {
    init_stderr_tracing();

    let tally = open_preferences(config)?.load_tally()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", noughts::stats_message(&tally));
        println!("Win rate: {:.1}%", tally.win_rate());
    }
    Ok(())
}

/// Print or change the persisted theme
#[instrument(skip(config))]
fn run_theme(config: &AppConfig, choice: Option<ThemeChoice>) -> Result<()> {
    init_stderr_tracing();

    let mut preferences = open_preferences(config)?;
    let current = preferences.load_theme()?;
    let theme = match choice {
        Some(choice) => {
            let theme = choice.apply(current);
            preferences.save_theme(theme)?;
            info!(from = %current, to = %theme, "Theme saved");
            theme
        }
        None => current,
    };
    println!("{}", theme);
    Ok(())
}

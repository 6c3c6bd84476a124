//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use noughts_engine::{GameMode, Theme};

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a random bot and persisted statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the preference database path
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Play X against the random bot instead of a second human
        #[arg(short, long)]
        bot: bool,

        /// Seed for the bot's random moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the win/loss/draw tally
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show or change the theme
    Theme {
        /// New theme; prints the current one when omitted
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

/// Theme argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Switch to the other theme.
    Toggle,
}

impl ThemeChoice {
    /// Resolves the choice against the current theme.
    pub fn apply(self, current: Theme) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Toggle => current.toggle(),
        }
    }
}

/// Mode selected by the `--bot` flag.
pub fn mode_for(bot: bool) -> GameMode {
    if bot {
        GameMode::HumanVsBot
    } else {
        GameMode::HumanVsHuman
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["noughts"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_play_with_bot_and_seed() {
        let cli = Cli::try_parse_from(["noughts", "play", "--bot", "--seed", "9"]).expect("parses");
        match cli.command {
            Some(Command::Play { bot, seed }) => {
                assert!(bot);
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_db_path_after_subcommand() {
        let cli = Cli::try_parse_from(["noughts", "stats", "--json", "--db-path", "x.db"])
            .expect("parses");
        assert_eq!(cli.db_path.as_deref(), Some("x.db"));
        assert!(matches!(cli.command, Some(Command::Stats { json: true })));
    }

    #[test]
    fn test_theme_choice() {
        let cli = Cli::try_parse_from(["noughts", "theme", "toggle"]).expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Theme { choice: Some(ThemeChoice::Toggle) })
        ));
        assert_eq!(ThemeChoice::Toggle.apply(Theme::Dark), Theme::Light);
        assert_eq!(ThemeChoice::Dark.apply(Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_mode_for_flag() {
        assert_eq!(mode_for(true), GameMode::HumanVsBot);
        assert_eq!(mode_for(false), GameMode::HumanVsHuman);
    }
}

//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::PlayerSpec;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against scripted bots
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with minimax bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Cross player: human, easy, normal, hard or impossible
        #[arg(long, default_value = "human")]
        cross: PlayerSpec,

        /// Nought player: human, easy, normal, hard or impossible
        #[arg(long, default_value = "impossible")]
        nought: PlayerSpec,

        /// Path to a TOML config file (defaults to ./noughts.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the bots' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write logs while the terminal UI is active
        #[arg(long, default_value = "noughts.log")]
        log_file: PathBuf,
    },

    /// Play bot-vs-bot matches without a UI and report the tally
    Simulate {
        /// Cross bot difficulty
        #[arg(long, default_value = "impossible")]
        cross: PlayerSpec,

        /// Nought bot difficulty
        #[arg(long, default_value = "impossible")]
        nought: PlayerSpec,

        /// Number of matches to play
        #[arg(short = 'n', long, default_value = "100")]
        matches: u32,

        /// Path to a TOML config file (defaults to ./noughts.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the bots' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Difficulty;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["noughts", "play"]).unwrap();
        match cli.command {
            Command::Play { cross, nought, .. } => {
                assert_eq!(cross, PlayerSpec::Human);
                assert_eq!(nought, PlayerSpec::Bot(Difficulty::Impossible));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::try_parse_from([
            "noughts", "simulate", "--cross", "easy", "--nought", "Hard", "-n", "5", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Simulate {
                cross,
                nought,
                matches,
                json,
                ..
            } => {
                assert_eq!(cross, PlayerSpec::Bot(Difficulty::Easy));
                assert_eq!(nought, PlayerSpec::Bot(Difficulty::Hard));
                assert_eq!(matches, 5);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_spec_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--cross", "wizard"]).is_err());
    }
}

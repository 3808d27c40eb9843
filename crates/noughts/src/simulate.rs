//! Headless bot-vs-bot matches.

use crate::config::AppConfig;
use anyhow::{Result, bail};
use derive_getters::Getters;
use noughts_core::{Engine, MatchController, PlayerSpec, Sign, Verdict};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of a batch of simulated matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Summary {
    /// Matches played.
    matches: u32,
    /// Matches won by Cross.
    cross_wins: u32,
    /// Matches won by Nought.
    nought_wins: u32,
    /// Matches ending level.
    ties: u32,
    /// Rounds played across all matches.
    rounds: u64,
    /// Rounds won by Cross across all matches.
    cross_rounds_won: u64,
    /// Rounds won by Nought across all matches.
    nought_rounds_won: u64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matches:      {}", self.matches)?;
        writeln!(f, "Cross wins:   {}", self.cross_wins)?;
        writeln!(f, "Nought wins:  {}", self.nought_wins)?;
        writeln!(f, "Ties:         {}", self.ties)?;
        write!(
            f,
            "Rounds:       {} (X {} / O {} / drawn {})",
            self.rounds,
            self.cross_rounds_won,
            self.nought_rounds_won,
            self.rounds - self.cross_rounds_won - self.nought_rounds_won
        )
    }
}

/// Plays `matches` matches between two bots with no pacing delays.
///
/// The same controller is reused through `play_again`, so a seed makes the
/// whole batch reproducible.
///
/// # Errors
///
/// Fails if either side is human.
#[instrument(skip(config))]
pub fn simulate(
    config: &AppConfig,
    cross: PlayerSpec,
    nought: PlayerSpec,
    matches: u32,
    seed: Option<u64>,
) -> Result<Summary> {
    if !cross.is_bot() || !nought.is_bot() {
        bail!("Simulation needs two bots, got {} vs {}", cross, nought);
    }

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = Engine::new(rng).with_tuning(*config.engine());
    let mut controller = MatchController::start(*config.match_config(), cross, nought, engine);

    let mut summary = Summary::default();
    for index in 0..matches {
        if index > 0 {
            controller.play_again();
        }
        controller.settle();
        controller.drain_events();

        let Some(verdict) = controller.verdict() else {
            bail!("Match {} stopped before concluding", index + 1);
        };
        summary.matches += 1;
        match verdict {
            Verdict::Winner(Sign::Cross) => summary.cross_wins += 1,
            Verdict::Winner(Sign::Nought) => summary.nought_wins += 1,
            Verdict::Tie => summary.ties += 1,
        }
        summary.rounds += u64::from(controller.round());
        summary.cross_rounds_won += u64::from(*controller.player(Sign::Cross).score());
        summary.nought_rounds_won += u64::from(*controller.player(Sign::Nought).score());
        debug!(match_number = index + 1, %verdict, rounds = controller.round(), "Match finished");
    }

    info!(
        cross_wins = summary.cross_wins,
        nought_wins = summary.nought_wins,
        ties = summary.ties,
        "Simulation complete"
    );
    Ok(summary)
}

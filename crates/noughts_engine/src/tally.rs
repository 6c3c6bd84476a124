//! Outcomes and the running win/loss/draw tally.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Mark;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Win(Mark),
    /// Nobody completed a line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "Player {} wins!", mark),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Cumulative results for one profile.
///
/// Wins and losses are counted from X's side in every mode: a win for X is
/// a win, a win for O is a loss, even when both sides are human.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new,
)]
pub struct OutcomeTally {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl OutcomeTally {
    /// Increments exactly one counter for `outcome`. Counters stop at `u32::MAX`.
    #[instrument(skip(self), fields(wins = self.wins, losses = self.losses, draws = self.draws))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.wins = self.wins.saturating_add(1),
            Outcome::Win(Mark::O) => self.losses = self.losses.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
        }
        debug!(?outcome, tally = ?self, "Outcome recorded");
    }

    /// Number of finished games.
    pub fn total(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.draws)
    }

    /// Share of games won, as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            f64::from(self.wins) / self.total() as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_for_x_counts_as_win() {
        let mut tally = OutcomeTally::default();
        tally.record(Outcome::Win(Mark::X));
        assert_eq!(tally, OutcomeTally::new(1, 0, 0));
    }

    #[test]
    fn test_win_for_o_counts_as_loss() {
        let mut tally = OutcomeTally::default();
        tally.record(Outcome::Win(Mark::O));
        assert_eq!(tally, OutcomeTally::new(0, 1, 0));
    }

    #[test]
    fn test_draw_counts_as_draw() {
        let mut tally = OutcomeTally::new(3, 2, 1);
        tally.record(Outcome::Draw);
        assert_eq!(tally, OutcomeTally::new(3, 2, 2));
        assert_eq!(tally.total(), 7);
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(OutcomeTally::default().win_rate(), 0.0);
        assert_eq!(OutcomeTally::new(1, 2, 1).win_rate(), 25.0);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let mut tally = OutcomeTally::new(u32::MAX, 0, u32::MAX);
        tally.record(Outcome::Win(Mark::X));
        tally.record(Outcome::Draw);
        assert_eq!(tally, OutcomeTally::new(u32::MAX, 0, u32::MAX));
    }

    #[test]
    fn test_total_and_win_rate_with_large_counters() {
        let tally = OutcomeTally::new(3_000_000_000, 3_000_000_000, 0);
        assert_eq!(tally.total(), 6_000_000_000);
        assert_eq!(tally.win_rate(), 50.0);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win(Mark::X).to_string(), "Player X wins!");
        assert_eq!(Outcome::Win(Mark::O).to_string(), "Player O wins!");
        assert_eq!(Outcome::Draw.to_string(), "Draw!");
    }
}

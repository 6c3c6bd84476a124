//! Presentation boundary: what the session asks a view to show.

use noughts_engine::{Board, GameState, Mark, OutcomeTally, Theme};

/// Title of the statistics dialog.
pub const STATS_TITLE: &str = "Statistics";

/// Title of the dialog shown when a game ends.
pub const GAME_OVER_TITLE: &str = "Game over";

/// A view the session drives.
///
/// Implementations only display; they never change game state.
pub trait Renderer {
    /// Shows the board and a one-line status.
    fn render_board(&mut self, board: &Board, status: &str);

    /// Shows a transient message, such as a game result or the statistics.
    fn show_message(&mut self, title: &str, message: &str);

    /// Re-skins the view.
    fn apply_theme(&mut self, theme: Theme);
}

/// Status line for the mark to move.
pub fn turn_message(mark: Mark) -> String {
    format!("Player {}'s turn", mark)
}

/// Status line for a game state.
pub fn status_message(state: &GameState) -> String {
    turn_message(state.current_turn())
}

/// Body of the statistics dialog.
pub fn stats_message(tally: &OutcomeTally) -> String {
    format!(
        "Wins: {}\nLosses: {}\nDraws: {}",
        tally.wins(),
        tally.losses(),
        tally.draws()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::GameMode;

    #[test]
    fn test_turn_messages() {
        assert_eq!(turn_message(Mark::X), "Player X's turn");
        assert_eq!(turn_message(Mark::O), "Player O's turn");
        assert_eq!(
            status_message(&GameState::new(GameMode::HumanVsBot)),
            "Player X's turn"
        );
    }

    #[test]
    fn test_stats_message_lists_counters() {
        let tally = OutcomeTally::new(4, 2, 1);
        assert_eq!(stats_message(&tally), "Wins: 4\nLosses: 2\nDraws: 1");
    }
}

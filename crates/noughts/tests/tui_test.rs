//! Tests for key handling against a live session and the terminal view.

use crossterm::event::KeyCode;
use noughts::tui::{Command, Flow, command_for, handle_command};
use noughts::{GAME_OVER_TITLE, GameSession, MemoryStore, Preferences, STATS_TITLE, TuiView};
use noughts_engine::{Cell, GameMode, Mark, Position, Theme};
use rand::SeedableRng;
use rand::rngs::StdRng;

type Session = GameSession<MemoryStore, TuiView, StdRng>;

fn session(mode: GameMode) -> Session {
    let prefs = Preferences::new(MemoryStore::new(), "TicTacToePrefs".to_string());
    GameSession::start(prefs, TuiView::new(), StdRng::seed_from_u64(3), mode)
        .expect("session starts")
}

fn press(session: &mut Session, cursor: &mut Position, key: KeyCode) -> Flow {
    let command = command_for(key).expect("bound key");
    handle_command(session, cursor, command).expect("command handled")
}

#[test]
fn test_cursor_then_enter_places_mark() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    press(&mut session, &mut cursor, KeyCode::Up);
    press(&mut session, &mut cursor, KeyCode::Left);
    assert_eq!(cursor, Position::TopLeft);

    press(&mut session, &mut cursor, KeyCode::Enter);
    assert_eq!(session.state().board().get(Position::TopLeft), Cell::Occupied(Mark::X));
    assert_eq!(session.renderer().status(), "Player O's turn");
}

#[test]
fn test_digit_places_and_moves_cursor() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    press(&mut session, &mut cursor, KeyCode::Char('9'));
    assert_eq!(cursor, Position::BottomRight);
    assert_eq!(
        session.state().board().get(Position::BottomRight),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_game_over_popup_blocks_until_dismissed() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    for key in ['1', '5', '2', '9', '3'] {
        press(&mut session, &mut cursor, KeyCode::Char(key));
    }

    let popup = session.renderer().popup().expect("game over dialog").clone();
    assert_eq!(popup.title, GAME_OVER_TITLE);
    assert_eq!(popup.message, "Player X wins!");
    // The finished board stays visible behind the dialog.
    assert_eq!(
        session.renderer().board().get(Position::TopRight),
        Cell::Occupied(Mark::X)
    );
    assert_eq!(session.state().move_count(), 0);

    // Any key closes the dialog without acting.
    press(&mut session, &mut cursor, KeyCode::Char('5'));
    assert!(session.renderer().popup().is_none());
    assert_eq!(session.state().move_count(), 0);

    press(&mut session, &mut cursor, KeyCode::Char('5'));
    assert_eq!(session.state().move_count(), 1);
}

#[test]
fn test_stats_key_opens_dialog() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    press(&mut session, &mut cursor, KeyCode::Char('s'));
    let popup = session.renderer().popup().expect("stats dialog");
    assert_eq!(popup.title, STATS_TITLE);
    assert_eq!(popup.message, "Wins: 0\nLosses: 0\nDraws: 0");

    press(&mut session, &mut cursor, KeyCode::Esc);
    assert!(session.renderer().popup().is_none());
}

#[test]
fn test_mode_and_theme_keys() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    press(&mut session, &mut cursor, KeyCode::Char('b'));
    assert_eq!(session.mode(), GameMode::HumanVsBot);

    press(&mut session, &mut cursor, KeyCode::Char('t'));
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(session.renderer().theme(), Theme::Dark);

    press(&mut session, &mut cursor, KeyCode::Enter);
    assert_eq!(session.state().move_count(), 2);
}

#[test]
fn test_quit_works_even_with_dialog_open() {
    let mut session = session(GameMode::HumanVsHuman);
    let mut cursor = Position::Center;

    press(&mut session, &mut cursor, KeyCode::Char('s'));
    assert_eq!(press(&mut session, &mut cursor, KeyCode::Char('q')), Flow::Quit);
}

#[test]
fn test_unbound_keys_are_ignored() {
    assert_eq!(command_for(KeyCode::Char('z')), None);
    assert_eq!(command_for(KeyCode::Char('0')), None);
    assert_eq!(command_for(KeyCode::Esc), Some(Command::Dismiss));
}

//! Terminal UI: the board, the bot switch, the theme toggle and the stats dialog.

mod input;
mod ui;
mod view;

pub use input::{Command, command_for, move_cursor};
pub use view::{Popup, TuiView};

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_engine::Position;
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::session::GameSession;
use crate::store::KeyValueStore;

/// Whether the event loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading keys.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Takes over the terminal and plays until the user quits.
///
/// The terminal is restored even when setup or the game loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or a preference cannot be saved.
#[instrument(skip(session))]
pub fn run<S, G>(session: GameSession<S, TuiView, G>) -> anyhow::Result<()>
where
    S: KeyValueStore,
    G: Rng,
{
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = restoring(restore_terminal, || {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        event_loop(&mut terminal, session)
    });

    info!("Terminal UI closed");
    res
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` wins over an error from `restore`.
fn restoring<T>(
    restore: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let res = body();
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }

    let value = res?;
    restored?;
    Ok(value)
}

fn event_loop<B, S, G>(
    terminal: &mut Terminal<B>,
    mut session: GameSession<S, TuiView, G>,
) -> anyhow::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: KeyValueStore,
    G: Rng,
{
    let mut cursor = Position::Center;

    loop {
        terminal.draw(|f| ui::draw(f, session.renderer(), cursor, session.mode()))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // crossterm reports releases too on some platforms.
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let Some(command) = command_for(key.code) else {
            continue;
        };
        if handle_command(&mut session, &mut cursor, command)? == Flow::Quit {
            return Ok(());
        }
    }
}

/// Applies one command to the session.
///
/// While a dialog is open every key except quit only closes it, like a
/// modal dialog would.
///
/// # Errors
///
/// Returns an error if a preference cannot be saved.
#[instrument(skip(session, cursor))]
pub fn handle_command<S, G>(
    session: &mut GameSession<S, TuiView, G>,
    cursor: &mut Position,
    command: Command,
) -> anyhow::Result<Flow>
where
    S: KeyValueStore,
    G: Rng,
{
    if command == Command::Quit {
        info!("User quit");
        return Ok(Flow::Quit);
    }

    if session.renderer().popup().is_some() {
        session.renderer_mut().dismiss();
        return Ok(Flow::Continue);
    }

    match command {
        Command::Cursor(key) => *cursor = move_cursor(*cursor, key),
        Command::PlaceAtCursor => {
            session.click(cursor.row(), cursor.col())?;
        }
        Command::PlaceAt(pos) => {
            *cursor = pos;
            session.click(pos.row(), pos.col())?;
        }
        Command::ToggleMode => {
            let mode = session.toggle_mode();
            debug!(?mode, "Mode toggled");
        }
        Command::ToggleTheme => {
            session.toggle_theme()?;
        }
        Command::ShowStats => session.show_stats(),
        Command::Dismiss | Command::Quit => {}
    }
    Ok(Flow::Continue)
}

//! Stateless rendering of the game screen.

use noughts_engine::{Cell, GameMode, Mark, Position, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::view::{Popup, TuiView};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    foreground: Color,
    accent: Color,
    grid: Color,
    x: Color,
    o: Color,
    cursor_bg: Color,
    cursor_fg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                grid: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                cursor_bg: Color::Black,
                cursor_fg: Color::White,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                grid: Color::DarkGray,
                x: Color::LightBlue,
                o: Color::LightRed,
                cursor_bg: Color::White,
                cursor_fg: Color::Black,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, view: &TuiView, cursor: Position, mode: GameMode) {
    let palette = Palette::for_theme(view.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic Tac Toe - {}", mode.label()))
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));
    frame.render_widget(title, chunks[0]);

    let cursor = view.popup().is_none().then_some(cursor);
    draw_board(frame, chunks[1], view, cursor, &palette);

    let status = Paragraph::new(view.status())
        .style(palette.base().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/Enter or 1-9: move | b: bot | t: theme | s: stats | q: quit")
        .style(palette.base().fg(palette.grid))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(popup) = view.popup() {
        draw_popup(frame, area, popup, &palette);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TuiView, cursor: Option<Position>, palette: &Palette) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, chunk) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[i * 2], view, cursor, chunk, palette);
        if i < 2 {
            let sep = Paragraph::new("─".repeat(usize::from(board_area.width)))
                .style(palette.base().fg(palette.grid));
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &TuiView,
    cursor: Option<Position>,
    positions: &[Position],
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], view, cursor, *pos, palette);
        if i < 2 {
            let sep = Paragraph::new("│\n│\n│").style(palette.base().fg(palette.grid));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &TuiView,
    cursor: Option<Position>,
    pos: Position,
    palette: &Palette,
) {
    let (symbol, style) = match view.board().get(pos) {
        Cell::Empty => (
            format!(" {} ", pos.to_index() + 1),
            palette.base().fg(palette.grid),
        ),
        Cell::Occupied(Mark::X) => (
            " X ".to_string(),
            palette.base().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            " O ".to_string(),
            palette.base().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        style.bg(palette.cursor_bg).fg(palette.cursor_fg)
    } else {
        style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center)
    .style(palette.base());
    frame.render_widget(paragraph, area);
}

fn draw_popup(frame: &mut Frame, area: Rect, popup: &Popup, palette: &Palette) {
    let lines = popup.message.lines().count() as u16;
    let popup_area = center_rect(area, 34, lines + 4);
    frame.render_widget(Clear, popup_area);

    let mut text: Vec<Line> = popup.message.lines().map(Line::from).collect();
    text.push(Line::default());
    text.push(Line::from(Span::styled(
        "Esc: close",
        palette.base().fg(palette.grid),
    )));

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(popup.title.as_str())
                .style(palette.base().fg(palette.accent)),
        );
    frame.render_widget(dialog, popup_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(view: &TuiView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal
            .draw(|f| draw(f, view, Position::Center, GameMode::HumanVsBot))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_marks_status_and_mode() {
        let mut view = TuiView::new();
        let mut board = noughts_engine::Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        view.render_board(&board, "Player O's turn");

        let text = screen_text(&view);
        assert!(text.contains("Versus bot"));
        assert!(text.contains("Player O's turn"));
        assert!(text.contains(" X "));
    }

    #[test]
    fn test_draws_popup() {
        let mut view = TuiView::new();
        view.apply_theme(Theme::Dark);
        view.show_message("Statistics", "Wins: 3");

        let text = screen_text(&view);
        assert!(text.contains("Statistics"));
        assert!(text.contains("Wins: 3"));
    }
}

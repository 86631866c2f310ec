//! TUI rendering with ratatui

use super::app::{InputMode, TerminalInput};
use super::layout::{board_grid, cell_rect, cell_visible, screen_layout};
use crate::core::CellStatus;
use crate::game::{GameState, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, session: &Session, input: &TerminalInput) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_board(f, session, layout.board);
    render_message(f, session, layout.message);
    render_input(f, session, input, layout.input);
    render_help(f, session, layout.help);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDCLUB")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_style(status: Option<CellStatus>) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match status {
        Some(CellStatus::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(CellStatus::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(CellStatus::Absent) => style.fg(Color::White).bg(Color::DarkGray),
        Some(CellStatus::Win) => style.fg(Color::Black).bg(Color::LightCyan),
        None => style.fg(Color::White),
    }
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let board = session.board();
    let grid = board_grid(area, board.height(), board.width());
    let active = session.active_cell();

    for (r, row) in board.rows().iter().enumerate() {
        for (c, cell) in row.cells().iter().enumerate() {
            let rect = cell_rect(grid, r, c);
            if !cell_visible(grid, rect) {
                continue;
            }

            let (border_style, border_type) = match active {
                Some((ar, ac)) if ar == r && ac == c => (
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    BorderType::Thick,
                ),
                Some((ar, _)) if ar == r => (Style::default().fg(Color::White), BorderType::Plain),
                _ => (Style::default().fg(Color::DarkGray), BorderType::Plain),
            };

            let letter = cell.letter.map(String::from).unwrap_or_default();
            let widget = Paragraph::new(Line::from(letter))
                .alignment(Alignment::Center)
                .style(status_style(cell.status))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border_style),
                );
            f.render_widget(widget, rect);
        }
    }
}

fn render_message(f: &mut Frame, session: &Session, area: Rect) {
    let color = match session.state() {
        GameState::InProgress => Color::White,
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
    };

    let message = Paragraph::new(session.message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Mensaje "));
    f.render_widget(message, area);
}

fn render_input(f: &mut Frame, session: &Session, input: &TerminalInput, area: Rect) {
    let (title, content, color) = if session.is_in_progress() {
        match input.mode() {
            InputMode::Cells => (
                " Celdas | Tab para escribir la palabra completa ",
                input.word_input(),
                Color::DarkGray,
            ),
            InputMode::Word => (
                " Palabra completa | Enter enviar | Tab/Esc volver a las celdas ",
                input.word_input(),
                Color::Yellow,
            ),
        }
    } else {
        (
            " Partida terminada | Ctrl+N nueva partida | q salir ",
            "",
            Color::Green,
        )
    };

    let widget = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame, session: &Session, area: Rect) {
    let help_text = if session.is_in_progress() {
        format!(
            "Intento {}/{} | ←/→ mover | Retroceso borrar | Enter enviar | Ctrl+N nueva | Esc salir",
            session.attempt() + 1,
            session.max_attempts()
        )
    } else {
        "Ctrl+N nueva partida | q/Esc salir".to_string()
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

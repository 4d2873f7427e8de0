//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Board, Player, Square, winning_line};

use super::app::App;

/// Width of one rendered cell, separator included.
const CELL_WIDTH: u16 = 4;

/// Renders title, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let game = app.game();
    let title = Paragraph::new(format!("Strictly Grid - {0}x{0}", game.size()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], game.current_board(), app.cursor());

    let status = match app.message() {
        Some(message) => format!("{}  ({})", game.status(), message),
        None => format!(
            "{}    move {}/{}",
            game.status(),
            game.current_move(),
            game.history().len() - 1
        ),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(help_line(app.opponent_enabled()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn help_line(opponent: bool) -> String {
    let mut help = String::from("arrows move  enter play  +/- size  [/] history  r reset");
    if opponent {
        help.push_str("  a opponent");
    }
    help.push_str("  q quit");
    help
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: usize) {
    let size = board.size();
    let highlighted = winning_line(board).unwrap_or_default();

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        let spans: Vec<Span> = (0..size)
            .map(|col| {
                let pos = row * size + col;
                draw_cell(board, pos, pos == cursor, highlighted.contains(&pos))
            })
            .collect();
        lines.push(Line::from(spans));
        if row + 1 < size {
            lines.push(Line::from(Span::styled(
                "─".repeat(size * CELL_WIDTH as usize - 1),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let width = size as u16 * CELL_WIDTH;
    let height = (size * 2) as u16;
    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, center_rect(area, width, height));
}

fn draw_cell(board: &Board, pos: usize, under_cursor: bool, winning: bool) -> Span<'static> {
    let (symbol, base_style) = match board.get(pos) {
        Some(Square::Occupied(Player::X)) => {
            (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        }
        Some(Square::Occupied(Player::O)) => {
            (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        }
        _ => (" · ", Style::default().fg(Color::DarkGray)),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let last_col = pos % board.size() + 1 == board.size();
    let text = if last_col {
        symbol.to_string()
    } else {
        format!("{}│", symbol)
    };
    Span::styled(text, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

//! Stateless rendering for both screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::time::Duration;

use crate::game::{Mark, Outcome, Square};
use crate::session::Phase;
use crate::theme::Theme;

use super::app::{App, Screen};

/// Renders the active screen.
pub fn draw(frame: &mut Frame, app: &App, time_left: Option<Duration>) {
    let theme = app.theme();
    let area = frame.area();

    // Fill the whole screen with the theme background first.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );

    match app.screen() {
        Screen::SymbolSelect => draw_symbol_select(frame, app, theme),
        Screen::Playing => draw_game(frame, app, theme, time_left),
    }
}

fn draw_symbol_select(frame: &mut Frame, app: &App, theme: Theme) {
    let area = center_rect(frame.area(), 46, 12);

    let opponent = if app.vs_ai() {
        "Minimax AI"
    } else {
        "Second player at the keyboard"
    };

    let lines = vec![
        Line::from("Choose your symbol to start:"),
        Line::from(""),
        Line::from("  [x] play as X        [o] play as O"),
        Line::from(""),
        Line::from(format!("  Opponent: {} ('a' toggles)", opponent)),
        Line::from(format!(
            "  Theme: {} ('t' switches)",
            app.theme_name().label()
        )),
        Line::from(""),
        Line::from("  'q' quits"),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title("Noughts - Tic Tac Toe"),
        );

    frame.render_widget(paragraph, area);
}

fn draw_game(frame: &mut Frame, app: &App, theme: Theme, time_left: Option<Duration>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(11), // Board
            Constraint::Length(4),  // Status
            Constraint::Length(3),  // Scores
            Constraint::Min(4),     // History
            Constraint::Length(1),  // Key hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, theme);
    draw_status(frame, chunks[2], app, theme, time_left);
    draw_scores(frame, chunks[3], app, theme);
    draw_history(frame, chunks[4], app, theme);

    let hints = Paragraph::new(
        "arrows move | enter places | 1-9 jump | r restart | s symbol | t theme | c clear history | q quit",
    )
    .style(Style::default().fg(theme.border))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[5]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
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

    draw_row(frame, rows[0], app, theme, [0, 1, 2]);
    draw_separator(frame, rows[1], theme);
    draw_row(frame, rows[2], app, theme, [3, 4, 5]);
    draw_separator(frame, rows[3], theme);
    draw_row(frame, rows[4], app, theme, [6, 7, 8]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, theme: Theme, indices: [usize; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_square(frame, cols[0], app, theme, indices[0]);
    draw_separator_vertical(frame, cols[1], theme);
    draw_square(frame, cols[2], app, theme, indices[1]);
    draw_separator_vertical(frame, cols[3], theme);
    draw_square(frame, cols[4], app, theme, indices[2]);
}

fn draw_square(frame: &mut Frame, area: Rect, app: &App, theme: Theme, index: usize) {
    let session = app.session();

    let win_line = match session.phase() {
        Phase::Terminated(Outcome::Win { line, .. }) => Some(line),
        _ => None,
    };

    let (symbol, mut style) = match session.board().get(index) {
        Some(Square::Occupied(Mark::X)) => (
            " X ",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            " O ",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        _ => ("   ", Style::default().fg(theme.border)),
    };

    if win_line.is_some_and(|line| line.contains(&index)) {
        style = style.bg(theme.highlight).fg(theme.winner);
    } else if index == app.cursor() && !session.is_over() {
        style = style.bg(theme.border).fg(theme.background);
    }

    let paragraph = Paragraph::new(Line::styled(symbol, style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, theme: Theme, time_left: Option<Duration>) {
    let session = app.session();

    let (headline, color) = match session.phase() {
        Phase::Terminated(Outcome::Win { mark, .. }) => {
            (format!("Winner: {}! Press 'r' to restart.", mark), theme.winner)
        }
        Phase::Terminated(_) => ("It's a Tie! Press 'r' to restart.".to_string(), theme.foreground),
        Phase::AwaitingMove(mark) => {
            let secs = time_left
                .map(|left| left.as_secs())
                .unwrap_or_else(|| *app.config().turn_seconds());
            if session.ai_to_move() {
                (format!("{} is thinking... ({}s left)", mark, secs), theme.foreground)
            } else {
                (format!("Next turn: {} ({}s left)", mark, secs), theme.foreground)
            }
        }
    };

    let mut lines = vec![Line::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !app.status().is_empty() {
        lines.push(Line::styled(
            app.status().to_string(),
            Style::default().fg(theme.winner),
        ));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let scores = app.host().scores();

    let text = format!(
        "X: {} ({}%)  |  O: {} ({}%)  |  Ties: {} ({}%)",
        scores.wins(Mark::X),
        scores.win_percent(Mark::X),
        scores.wins(Mark::O),
        scores.win_percent(Mark::O),
        scores.ties(),
        scores.tie_percent(),
    );

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.foreground))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title("Scores"),
        );
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Result").style(Style::default().add_modifier(Modifier::BOLD)),
    ]);

    // Latest game first.
    let rows: Vec<Row> = app
        .host()
        .history()
        .entries()
        .iter()
        .rev()
        .map(|entry| {
            let date = entry
                .recorded_at()
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            let (label, color) = match entry.result().as_str() {
                "Tie" => ("Tie".to_string(), theme.foreground),
                mark => (format!("Winner: {}", mark), theme.winner),
            };
            Row::new(vec![
                Cell::from(date),
                Cell::from(label).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(22), Constraint::Min(10)];
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title("Game History"),
        );

    frame.render_widget(table, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(theme.border));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("│").style(Style::default().fg(theme.border));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

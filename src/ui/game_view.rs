use super::app::StatusLine;
use crate::game::{Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    status: &StatusLine,
) {
    let board_height = u16::try_from(game_state.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(
        frame,
        game_state.board(),
        &game_state.legal_columns(),
        selected_column,
        status.last_move,
        chunks[1],
    );
    render_message(frame, &status.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (format!("{player} won!"), player_color(player)),
        Some(GameOutcome::Tie) => ("It's a tie!".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (format!("Current Player: {player}"), player_color(player))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    legal_columns: &[usize],
    selected_column: usize,
    last_move: Option<(usize, usize)>,
    area: Rect,
) {
    let mut lines = Vec::new();
    let inner = "═".repeat(3 * board.width() + 1);

    // Column numbers with selection indicator; columns that can't be played are dimmed
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        let mut style = if legal_columns.contains(&col) {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if col == selected_column {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let (symbol, color) = match board.get(row, col) {
                Some(Cell::PlayerOne) => (" ● ", player_color(Player::One)),
                Some(Cell::PlayerTwo) => (" ● ", player_color(Player::Two)),
                Some(Cell::Empty) | None => (" . ", Color::DarkGray),
            };
            let mut style = Style::default().fg(color);
            if last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→ 1-9: Column | Enter: Drop | R: New game | Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

use super::app::SizeChoice;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Board size prompt shown before each game.
pub fn render(
    frame: &mut Frame,
    choices: &[SizeChoice],
    selected: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(choices.len() as u16 + 2), // Choices
            Constraint::Length(3),                     // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Choose a board size")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, chunks[0]);

    render_choices(frame, choices, selected, message, chunks[1]);

    let controls = Paragraph::new(format!(
        "←/→ or 1-{}: Select  |  Enter: Start  |  Q: Quit",
        choices.len()
    ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

fn render_choices(
    frame: &mut Frame,
    choices: &[SizeChoice],
    selected: usize,
    message: &Option<String>,
    area: Rect,
) {
    let mut lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let text = format!(
                "{}. {} ({}x{})",
                i + 1,
                choice.label,
                choice.height,
                choice.width
            );
            if i == selected {
                Line::from(Span::styled(
                    format!("▶ {text}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {text}"))
            }
        })
        .collect();

    if let Some(msg) = message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

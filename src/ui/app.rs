use crate::config::{AppConfig, BoardSize};
use crate::game::{GameDisplay, GameOutcome, GameState, Player, RejectReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// A board size the player can pick on the setup screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeChoice {
    pub label: String,
    pub height: usize,
    pub width: usize,
}

impl SizeChoice {
    fn preset(size: BoardSize) -> Self {
        let (height, width) = size.dimensions();
        SizeChoice {
            label: size.label().to_string(),
            height,
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Playing,
}

/// Message line fed by engine notifications.
#[derive(Debug, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    pub last_move: Option<(usize, usize)>,
}

impl GameDisplay for StatusLine {
    fn piece_placed(&mut self, row: usize, column: usize, _player: Player) {
        self.last_move = Some((row, column));
    }

    fn move_rejected(&mut self, reason: RejectReason) {
        self.message = Some(
            match reason {
                RejectReason::ColumnFull => "Column is full!",
                RejectReason::GameAlreadyOver => "Game over! Press 'r' for a new game.",
            }
            .to_string(),
        );
    }

    fn game_over(&mut self, outcome: GameOutcome) {
        self.message = Some(match outcome {
            GameOutcome::Winner(player) => format!("{player} won!"),
            GameOutcome::Tie => "It's a tie!".to_string(),
        });
    }
}

pub struct App {
    screen: Screen,
    choices: Vec<SizeChoice>,
    selected_choice: usize,
    game_state: GameState,
    selected_column: usize,
    status: StatusLine,
    should_quit: bool,
}

impl App {
    /// Build the app on the setup screen, with the configured size preselected.
    pub fn new(config: &AppConfig) -> Result<Self, crate::error::GameError> {
        let mut choices: Vec<SizeChoice> =
            BoardSize::ALL.iter().map(|&s| SizeChoice::preset(s)).collect();

        let selected_choice = match config.custom_dimensions() {
            Some((height, width)) => {
                choices.push(SizeChoice {
                    label: format!("Custom {height}x{width}"),
                    height,
                    width,
                });
                choices.len() - 1
            }
            None => BoardSize::ALL
                .iter()
                .position(|&s| s == config.game.size)
                .unwrap_or(BoardSize::ALL.len() - 1),
        };

        let (height, width) = config.dimensions();
        Ok(App {
            screen: Screen::Setup,
            choices,
            selected_choice,
            game_state: GameState::new(height, width)?,
            selected_column: width / 2,
            status: StatusLine::default(),
            should_quit: false,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.status.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.selected_choice = self.selected_choice.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                if self.selected_choice + 1 < self.choices.len() {
                    self.selected_choice += 1;
                }
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c).filter(|&i| i < self.choices.len()) {
                    self.selected_choice = index;
                }
            }
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let width = self.game_state.board().width();
        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.screen = Screen::Setup;
                self.status = StatusLine::default();
            }
            KeyCode::Char(c) => {
                if let Some(col) = digit_index(c).filter(|&i| i < width) {
                    self.selected_column = col;
                }
            }
            _ => {}
        }
    }

    /// Start a new game with the selected size
    fn start_game(&mut self) {
        let choice = &self.choices[self.selected_choice];
        match self.game_state.configure(choice.height, choice.width) {
            Ok(()) => {
                self.selected_column = choice.width / 2;
                self.status = StatusLine::default();
                self.screen = Screen::Playing;
            }
            Err(err) => {
                tracing::warn!(%err, "could not start game");
                self.status.message = Some(err.to_string());
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if let Err(err) = self
            .game_state
            .drop_piece_with(self.selected_column, &mut self.status)
        {
            tracing::warn!(%err, "drop failed");
            self.status.message = Some(err.to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Setup => super::setup_view::render(
                frame,
                &self.choices,
                self.selected_choice,
                &self.status.message,
            ),
            Screen::Playing => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_column,
                &self.status,
            ),
        }
    }
}

/// '1'..='9' as a 0-based index.
fn digit_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d) if d >= 1 => Some(d as usize - 1),
        _ => None,
    }
}

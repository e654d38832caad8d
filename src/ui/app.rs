use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::ai::{MinimaxAgent, SearchConfig};
use crate::config::AppConfig;
use crate::game::{Color, GameOutcome, GameState, Move, Pos};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::game_view::{self, Highlights};

pub struct App {
    game_state: GameState,
    human: Color,
    search: SearchConfig,
    cursor: Pos,
    selected: Option<Pos>,
    targets: Vec<Move>,
    /// Reply channel of the search running on a worker thread.
    pending: Option<Receiver<Option<Move>>>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = App {
            game_state: GameState::initial(),
            human: config.game.human,
            search: config.search,
            cursor: Pos::new(1, 1),
            selected: None,
            targets: Vec::new(),
            pending: None,
            should_quit: false,
            message: None,
        };
        app.start_ai();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.poll_ai();
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
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.message = None;
                self.activate();
            }
            KeyCode::Backspace => self.clear_selection(),
            KeyCode::Char('r') => {
                // Any search still running for the old game is abandoned
                self.pending = None;
                self.game_state = GameState::initial();
                self.clear_selection();
                self.message = Some("New game started!".to_string());
                self.start_ai();
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        if let Some(next) = self.cursor.offset(dr, dc) {
            self.cursor = next;
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    /// Select a piece, or play the highlighted destination under the cursor
    fn activate(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.pending.is_some() || self.game_state.to_move() != self.human {
            self.message = Some("Waiting for the AI to move...".to_string());
            return;
        }

        if let Some(mv) = self.targets.iter().find(|m| m.to == self.cursor).copied() {
            self.play(mv);
            return;
        }

        match self.game_state.board().get(self.cursor) {
            Some(piece) if piece.color == self.human => match self.game_state.moves_from(self.cursor) {
                Ok(moves) if moves.is_empty() => {
                    self.clear_selection();
                    self.message = Some(format!("That {} has no moves.", piece.shape.name()));
                }
                Ok(moves) => {
                    self.selected = Some(self.cursor);
                    self.targets = moves;
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            _ => self.clear_selection(),
        }
    }

    fn play(&mut self, mv: Move) {
        match self.game_state.apply_move_mut(&mv) {
            Ok(()) => {
                self.clear_selection();
                if !self.announce_outcome() {
                    self.start_ai();
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Dispatch the search for the AI side onto a worker thread
    fn start_ai(&mut self) {
        if self.game_state.is_terminal() || self.game_state.to_move() == self.human {
            return;
        }

        let board = *self.game_state.board();
        let color = self.game_state.to_move();
        let config = self.search;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let agent = MinimaxAgent::with_config(config);
            // The receiver is gone if the game was restarted meanwhile
            let _ = tx.send(agent.choose_move(&board, color));
        });

        self.pending = Some(rx);
        self.message = Some("AI is thinking...".to_string());
    }

    /// Apply the AI's reply once the worker has delivered it
    fn poll_ai(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(reply) => {
                self.pending = None;
                self.message = None;
                if let Some(mv) = reply {
                    if let Err(err) = self.game_state.apply_move_mut(&mv) {
                        self.message = Some(format!("AI move rejected: {err}"));
                        return;
                    }
                }
                self.announce_outcome();
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.message = Some("AI worker stopped unexpectedly.".to_string());
            }
        }
    }

    /// Report a finished game; returns whether it is over
    fn announce_outcome(&mut self) -> bool {
        let Some(outcome) = self.game_state.outcome() else {
            return false;
        };
        self.message = Some(match outcome {
            GameOutcome::Winner(color) => format!("{} wins the game!", color.name()),
            GameOutcome::Draw => format!(
                "Draw: {} has no legal moves.",
                self.game_state.to_move().name()
            ),
        });
        true
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let highlights = Highlights {
            cursor: self.cursor,
            selected: self.selected,
            targets: &self.targets,
        };
        game_view::render(
            frame,
            &self.game_state,
            &highlights,
            self.human,
            self.pending.is_some(),
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

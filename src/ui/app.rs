//! Main TUI application state and logic

use crate::session::{commands, StructureDelta, VisualizerSession};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The active visualizer session
    pub session: VisualizerSession,

    /// Text currently typed at the command prompt
    pub input: String,

    /// Status message to display
    pub status_message: String,

    /// Whether the last applied command failed
    pub status_is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(session: VisualizerSession) -> Self {
        App {
            session,
            input: String::new(),
            status_message: String::from("Ready"),
            status_is_error: false,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance auto-play between input events
            if self.session.playback_mut().tick(Instant::now())
                && !self.session.playback().is_playing()
            {
                self.status_message = "Playback complete".to_string();
                self.status_is_error = false;
            }

            // Use poll with timeout so play mode keeps ticking while idle
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Structure + steps on top, state + prompt below, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: structure (top) | step state (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: steps (top) | command prompt (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[1]);

        super::panes::render_structure_pane(frame, left_rows[0], &self.session);
        super::panes::render_state_pane(frame, left_rows[1], &self.session);
        super::panes::render_steps_pane(frame, right_rows[0], self.session.playback());
        super::panes::render_prompt_pane(
            frame,
            right_rows[1],
            &self.input,
            commands::help_line(self.session.kind()),
        );
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.status_is_error,
            self.session.playback(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C / Ctrl-Q always quit, regardless of prompt state
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_command(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => {
                self.input.clear();
                self.session.playback_mut().reset();
                self.status_message = "Reset to before the first step".to_string();
                self.status_is_error = false;
            }
            KeyCode::Left => {
                self.session.playback_mut().pause();
                if self.session.playback_mut().step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already before the first step".to_string();
                }
                self.status_is_error = false;
            }
            KeyCode::Right => {
                self.session.playback_mut().pause();
                if self.session.playback_mut().step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
                self.status_is_error = false;
            }
            KeyCode::Char('[') => {
                let speed = self.session.playback().speed().slower();
                self.session.playback_mut().set_speed(speed);
                self.status_message = format!("Speed: {}", speed.label());
                self.status_is_error = false;
            }
            KeyCode::Char(']') => {
                let speed = self.session.playback().speed().faster();
                self.session.playback_mut().set_speed(speed);
                self.status_message = format!("Speed: {}", speed.label());
                self.status_is_error = false;
            }
            // Space toggles play only when nothing is being typed; otherwise
            // it is part of the command text
            KeyCode::Char(' ') if self.input.is_empty() => {
                self.session.playback_mut().toggle();
                self.status_message = if self.session.playback().is_playing() {
                    "Playing".to_string()
                } else {
                    "Paused".to_string()
                };
                self.status_is_error = false;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Parse and apply the typed command, then start playback on success
    fn submit_command(&mut self) {
        let input = std::mem::take(&mut self.input);
        if input.trim().is_empty() {
            return;
        }
        let command = input.trim().to_string();
        match commands::parse_command(self.session.kind(), &command)
            .and_then(|op| self.session.apply(op))
        {
            Ok(outcome) => {
                self.session.playback_mut().play();
                self.status_message = match outcome.delta {
                    StructureDelta::Extracted(value) => format!(
                        "{}: removed {} ({} steps)",
                        command,
                        value,
                        outcome.steps.len()
                    ),
                    _ => format!("{} ({} steps)", command, outcome.steps.len()),
                };
                self.status_is_error = false;
            }
            Err(err) => {
                self.status_message = err.to_string();
                self.status_is_error = true;
            }
        }
    }
}

//! TUI application state and logic

use crate::engine::{Director, DirectorError, GameState, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub director: Director,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(director: Director) -> Self {
        Self {
            director,
            messages: vec![Message {
                text: "Guess the word before all parachute lines are cut.".to_string(),
                style: MessageStyle::Info,
            }],
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.director.is_terminated()
    }

    /// Route one key press according to the current game state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.director.quit();
            return;
        }

        match (self.director.state(), key.code) {
            (GameState::Playing, KeyCode::Char(c)) => self.handle_guess(c),
            (GameState::AwaitingReplay, KeyCode::Char(c)) => self.handle_replay(c),
            _ => {}
        }
    }

    fn handle_guess(&mut self, c: char) {
        match self.director.submit_guess(c.encode_utf8(&mut [0; 4])) {
            Ok(outcome) => {
                let (text, style) = match outcome {
                    GuessOutcome::Hit => (format!("'{c}' is in the word!"), MessageStyle::Success),
                    GuessOutcome::Miss => {
                        (format!("No '{c}'. A line was cut!"), MessageStyle::Error)
                    }
                    GuessOutcome::Repeated => {
                        (format!("Already guessed '{c}'"), MessageStyle::Info)
                    }
                };
                self.add_message(&text, style);
                self.after_guess();
            }
            Err(DirectorError::InvalidGuess(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => debug!("Ignoring key: {err}"),
        }
    }

    fn after_guess(&mut self) {
        let state = self.director.state();
        let word = self.director.session().word().text().to_uppercase();

        match state {
            GameState::Won => {
                self.add_message(&format!("🎉 You solved {word}!"), MessageStyle::Success);
            }
            GameState::Lost => {
                self.add_message(
                    &format!("🪂 Cut away! The word was {word}."),
                    MessageStyle::Error,
                );
            }
            _ => return,
        }

        if self.director.prompt_replay().is_ok() {
            self.add_message("Play again? (y/n)", MessageStyle::Info);
        }
    }

    fn handle_replay(&mut self, c: char) {
        match self.director.answer_replay(c.encode_utf8(&mut [0; 4])) {
            Ok(GameState::Playing) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Ok(_) => {}
            Err(err) => debug!("Ignoring key: {err}"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    while !app.should_quit() {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(app)
}

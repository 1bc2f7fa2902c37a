//! TUI application state and logic

use crate::core::{ALPHABET, Equation};
use crate::engine::{Game, GameConfig, ResultCode};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game,
    pub config: GameConfig,
    pub corpus: &'a [Equation],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess
    Guessing,
    /// Round finished; waiting for new-game or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count; index 0 unused
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Fails when no target can be chosen (empty corpus, no fixed target).
    pub fn new(
        corpus: &'a [Equation],
        config: GameConfig,
        target: Option<Equation>,
    ) -> Result<Self> {
        let mut game = Game::new();
        if let Some(target) = target {
            game.set_target(target);
        }
        game.start_new_game(config, corpus)?;

        let mut app = Self {
            game,
            config,
            corpus,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Guess the hidden equation! Type it and press Enter.",
            MessageStyle::Info,
        );
        app.announce_target();
        Ok(app)
    }

    fn announce_target(&mut self) {
        if self.config.show_target
            && let Some(target) = self.game.target()
        {
            let text = format!("Target is: {}", target.text());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Submit the current input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        if guess.is_empty() {
            return;
        }

        match self.game.process_input(&guess) {
            ResultCode::Accepted => {
                self.input_buffer.clear();

                if self.game.is_game_over() {
                    self.finish_round();
                } else {
                    let remaining = self.game.remaining_attempts();
                    let text = format!(
                        "{remaining} attempt{} left",
                        if remaining == 1 { "" } else { "s" }
                    );
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            code => {
                let text = format!("{code} - try again");
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Record statistics and switch to the game-over mode
    fn finish_round(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if self.game.is_game_won() {
            self.stats.games_won += 1;
            let guess_count = self.game.attempts().len();
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let text = match self.game.target() {
                Some(target) => format!("Out of attempts! The equation was {}", target.text()),
                None => "Out of attempts!".to_string(),
            };
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new round
    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;

        match self.game.start_new_game(self.config, self.corpus) {
            Ok(()) => {
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_target();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.should_quit = true;
            }
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if ALPHABET.contains(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

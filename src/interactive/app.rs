//! TUI application state and logic

use crate::commands::{AssistSession, Feedback, parse_feedback, parse_shape};
use crate::core::{DEFAULT_LIVES, GuessOutcome};
use crate::solver::{Guess, GuessEngine};
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

/// Number of candidate phrases listed in the side panel
pub const SHOWN_CANDIDATES: usize = 8;

/// Application state
pub struct App<'a> {
    pub engine: &'a GuessEngine,
    pub session: Option<AssistSession>,
    pub current_guess: Option<Guess>,
    pub top_candidates: Vec<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the phrase shape for a new game
    Shape,
    /// Typing the positions revealed for the current suggestion
    Feedback,
    /// Game won or lost, waiting for new game or quit
    Finished,
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
    /// Won games by number of misses
    pub miss_distribution: [usize; DEFAULT_LIVES + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: &'a GuessEngine) -> Self {
        Self {
            engine,
            session: None,
            current_guess: None,
            top_candidates: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest letters from airline vocabulary first."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter the phrase shape (e.g., '3 5' or '_ _ _   _ _ _ _ _')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Shape,
        }
    }

    pub fn compute_suggestion(&mut self) {
        let Some(session) = &self.session else {
            self.current_guess = None;
            self.top_candidates.clear();
            return;
        };

        let guess = session.suggest(self.engine);
        self.top_candidates = self
            .engine
            .candidates(guess.tier, session.state())
            .into_iter()
            .take(SHOWN_CANDIDATES)
            .map(str::to_string)
            .collect();
        self.current_guess = Some(guess);
    }

    pub fn handle_shape(&mut self, input: &str) {
        match parse_shape(input) {
            Ok(state) => {
                let words = state.slot_count();
                let letters = state.letter_count();
                self.session = Some(AssistSession::new(state, DEFAULT_LIVES));
                self.input_mode = InputMode::Feedback;
                self.input_buffer.clear();
                self.add_message(
                    &format!("Game started: {words} word(s), {letters} letters"),
                    MessageStyle::Info,
                );
                self.compute_suggestion();
                self.check_finished();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let (Some(session), Some(guess)) = (self.session.as_mut(), self.current_guess) else {
            return;
        };

        let feedback = match parse_feedback(input, session.state().letter_count()) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let message = match session.apply(guess, feedback) {
            Ok(GuessOutcome::Correct) => (
                format!("'{}' is in the phrase", guess.letter),
                MessageStyle::Success,
            ),
            Ok(GuessOutcome::Incorrect) => (
                format!("No '{}', {} lives left", guess.letter, session.lives_remaining()),
                MessageStyle::Info,
            ),
            Ok(GuessOutcome::Repeated) => (
                format!("'{}' was already guessed", guess.letter),
                MessageStyle::Info,
            ),
            Err(err) => (err.to_string(), MessageStyle::Error),
        };

        self.input_buffer.clear();
        self.add_message(&message.0, message.1);
        self.compute_suggestion();
        self.check_finished();
    }

    fn check_finished(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        if session.is_solved() {
            let misses = session.incorrect().len();
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.miss_distribution.get_mut(misses) {
                *slot += 1;
            }
            self.input_mode = InputMode::Finished;

            let celebration = match misses {
                0 => "🏆 FLAWLESS! Not a single miss! 🏆",
                1 => "🔥 MAGNIFICENT! Only one miss! 🔥",
                2 | 3 => "✨ SPLENDID! Phrase solved! ✨",
                _ => "😅 PHEW! Made it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if session.is_lost() {
            self.stats.total_games += 1;
            self.input_mode = InputMode::Finished;
            self.add_message("💀 Out of lives! Press 'u' to undo, 'n' for new game.", MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.session = None;
        self.current_guess = None;
        self.top_candidates.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Shape;
        self.add_message(
            "New game! Enter the phrase shape (e.g., '3 5').",
            MessageStyle::Info,
        );
    }

    pub fn undo_last(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        let was_over = session.is_over();
        let was_won = session.is_solved();
        if let Some(letter) = session.undo() {
            if was_over {
                self.stats.total_games = self.stats.total_games.saturating_sub(1);
                if was_won {
                    self.stats.games_won = self.stats.games_won.saturating_sub(1);
                    let misses = session.incorrect().len();
                    if let Some(slot) = self.stats.miss_distribution.get_mut(misses) {
                        *slot = slot.saturating_sub(1);
                    }
                }
            }
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message(&format!("Undone '{letter}'!"), MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
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

    /// History entries, newest last, as (letter, tier, hit)
    #[must_use]
    pub fn history(&self) -> Vec<(char, String, bool)> {
        self.session
            .as_ref()
            .map(|session| {
                session
                    .turns()
                    .iter()
                    .map(|turn| {
                        (
                            turn.guess.letter,
                            turn.guess.tier.to_string(),
                            matches!(turn.feedback, Feedback::Hit(_)),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                _ if app.should_quit => {}
                InputMode::Finished => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                // Letters are part of a wire state here, so only Esc quits
                InputMode::Shape => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_shape(&input);
                    }
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ' ' | ',' | '-') => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
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

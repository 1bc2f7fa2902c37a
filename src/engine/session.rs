//! Game session state machine
//!
//! [`Game`] is the only surface hosts talk to: it owns the target, the
//! attempt history, the remaining-attempt counter, and the per-character
//! knowledge, and it runs the verify gate on every guess. One session is
//! live at a time; a new game resets everything.

use super::config::GameConfig;
use crate::core::{
    CharKnowledge, CharStatus, EvalError, Equation, evaluate, matches_guess_grammar, score,
};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Maximum guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Outcome of submitting one guess
///
/// These are validation results, not errors; hosts render a message and ask
/// again. The numeric codes are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// Guess accepted and scored
    Accepted,
    /// Guess length does not match the target length
    LengthError,
    /// Guess does not match the equation grammar
    FormatError,
    /// Guess parses but its two sides are not equal
    FalseEquation,
}

impl ResultCode {
    /// Stable numeric code for hosts that speak integers
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Accepted => 1,
            Self::LengthError => 2,
            Self::FormatError => 3,
            Self::FalseEquation => 4,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Accepted => "accepted",
            Self::LengthError => "wrong length",
            Self::FormatError => "not a valid equation",
            Self::FalseEquation => "equation is not true",
        };
        write!(f, "{message}")
    }
}

/// Error starting a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// No target available: the corpus is empty and no fixed target was set
    CorpusUnavailable,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusUnavailable => {
                write!(f, "no target equation available: corpus is empty and no target was set")
            }
        }
    }
}

impl std::error::Error for StartError {}

/// High-level session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game started yet
    NotStarted,
    /// Accepting guesses
    InProgress,
    /// Terminal: the target was guessed
    Won,
    /// Terminal: attempts ran out
    Lost,
}

/// One scored guess, immutable once recorded
#[derive(Debug, Clone)]
pub struct Attempt {
    guess: String,
    statuses: Vec<CharStatus>,
}

impl Attempt {
    /// The raw guess string as submitted
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Per-position feedback, one entry per target position
    #[must_use]
    pub fn statuses(&self) -> &[CharStatus] {
        &self.statuses
    }
}

/// A single game session
///
/// Owns all mutable state; see the module docs. Construct with [`Game::new`],
/// then [`Game::start_new_game`] for each round.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    target: Option<Equation>,
    attempts: Vec<Attempt>,
    remaining: usize,
    knowledge: CharKnowledge,
    state: GameState,
}

impl Game {
    /// Create an idle engine with no target and no game in progress
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            target: None,
            attempts: Vec::new(),
            remaining: MAX_ATTEMPTS,
            knowledge: CharKnowledge::new(),
            state: GameState::NotStarted,
        }
    }

    /// Start a new game
    ///
    /// Picks the target (a random corpus entry in random mode, otherwise the
    /// previously-set one), clears the attempt history and knowledge, and
    /// resets the attempt counter. If the corpus cannot supply a target the
    /// engine falls back to a previously-set one when there is one.
    ///
    /// # Errors
    /// Returns `StartError::CorpusUnavailable` when no target can be chosen
    /// at all.
    pub fn start_new_game(
        &mut self,
        config: GameConfig,
        corpus: &[Equation],
    ) -> Result<(), StartError> {
        let target = if config.random_target {
            corpus
                .choose(&mut rand::rng())
                .cloned()
                .or_else(|| self.target.take())
        } else {
            self.target
                .take()
                .or_else(|| corpus.choose(&mut rand::rng()).cloned())
        };
        let Some(target) = target else {
            return Err(StartError::CorpusUnavailable);
        };

        self.config = config;
        self.target = Some(target);
        self.attempts.clear();
        self.remaining = MAX_ATTEMPTS;
        self.knowledge.reset();
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Set the target directly (fixed-target mode and deterministic tests)
    ///
    /// Taking a validated [`Equation`] keeps "the target is balanced" true
    /// by construction.
    pub fn set_target(&mut self, target: Equation) {
        self.target = Some(target);
    }

    /// Submit one guess
    ///
    /// With verification on, the guess runs the gate first: length, then
    /// grammar, then arithmetic truth. A rejected guess consumes no attempt.
    /// An accepted guess is scored, recorded, and counted — including a
    /// winning one. With verification off any guess is accepted and scored
    /// as-is.
    ///
    /// # Panics
    /// Panics if no game is in progress; hosts gate their loop on
    /// [`Game::is_game_over`].
    pub fn process_input(&mut self, guess: &str) -> ResultCode {
        assert!(
            self.state == GameState::InProgress,
            "process_input called with no game in progress"
        );
        let target = self
            .target
            .as_ref()
            .expect("an in-progress game always has a target")
            .clone();

        if self.config.verify_equation {
            let code = Self::verify(target.text(), guess);
            if code != ResultCode::Accepted {
                return code;
            }
        }

        self.remaining -= 1;
        let statuses = score(target.text(), guess, &mut self.knowledge);
        self.attempts.push(Attempt {
            guess: guess.to_string(),
            statuses,
        });

        if guess == target.text() {
            self.state = GameState::Won;
        } else if self.remaining == 0 {
            self.state = GameState::Lost;
        }
        ResultCode::Accepted
    }

    /// The verify gate: length, grammar, then balance
    fn verify(target: &str, guess: &str) -> ResultCode {
        if guess.chars().count() != target.chars().count() {
            return ResultCode::LengthError;
        }
        if !matches_guess_grammar(guess) {
            return ResultCode::FormatError;
        }

        // Grammar guarantees exactly one '='
        let Some((left, right)) = guess.split_once('=') else {
            return ResultCode::FormatError;
        };
        match (evaluate(left), evaluate(right)) {
            (Ok(l), Ok(r)) if l == r => ResultCode::Accepted,
            (Ok(_), Ok(_)) => ResultCode::FalseEquation,
            // A side that divides by zero can never balance
            (Err(EvalError::DivisionByZero), _) | (_, Err(EvalError::DivisionByZero)) => {
                ResultCode::FalseEquation
            }
            _ => ResultCode::FormatError,
        }
    }

    /// True once the session reached `Won` or `Lost`
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    /// True iff some attempt matched the target exactly
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Guesses left in this game; never negative
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining
    }

    /// The current target, if one has been chosen or set
    #[must_use]
    pub const fn target(&self) -> Option<&Equation> {
        self.target.as_ref()
    }

    /// All recorded attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// What the session has learned about each alphabet character
    #[must_use]
    pub const fn knowledge(&self) -> &CharKnowledge {
        &self.knowledge
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The configuration the current game was started with
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

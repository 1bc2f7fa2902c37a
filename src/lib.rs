//! Numberle
//!
//! A Wordle-style guessing game played against a hidden 7-character
//! arithmetic equation (e.g. `12+3=15`) instead of a word.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::Equation;
//! use numberle::engine::{Game, GameConfig, ResultCode};
//!
//! let mut game = Game::new();
//! game.set_target(Equation::new("12+3=15").unwrap());
//! game.start_new_game(GameConfig::default(), &[]).unwrap();
//!
//! assert_eq!(game.process_input("11+5=16"), ResultCode::Accepted);
//! assert_eq!(game.remaining_attempts(), 5);
//! ```

// Core domain types
pub mod core;

// Random equation generation
pub mod generator;

// Game session engine
pub mod engine;

// Equation corpus
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

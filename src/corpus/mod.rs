//! Equation corpus for random-target games
//!
//! Provides the embedded default corpus compiled into the binary and a
//! loader for external corpus files.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};

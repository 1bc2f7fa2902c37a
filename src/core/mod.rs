//! Core domain types for the equation guessing game
//!
//! Pure, testable building blocks: the arithmetic evaluator, the validated
//! equation type and guess grammar, per-position feedback scoring, and the
//! session-scoped character knowledge table. Nothing in this module touches
//! I/O or randomness.

mod equation;
mod eval;
mod feedback;
mod knowledge;

pub use equation::{ALPHABET, EQUATION_LEN, Equation, EquationError, matches_guess_grammar};
pub use eval::{EvalError, OPERATORS, Op, evaluate};
pub use feedback::{CharStatus, score};
pub use knowledge::{CharClass, CharKnowledge};

//! Single-equation check
//!
//! Evaluates one equation-shaped string and reports what the verify gate
//! would make of it: side values, balance, and grammar verdict.

use crate::core::{EvalError, evaluate, matches_guess_grammar};

/// Everything the check command learned about one input
pub struct CheckReport {
    pub input: String,
    pub grammar_ok: bool,
    pub left: Option<Result<i64, EvalError>>,
    pub right: Option<Result<i64, EvalError>>,
}

impl CheckReport {
    /// True when both sides evaluate to the same value
    #[must_use]
    pub fn balanced(&self) -> bool {
        matches!(
            (&self.left, &self.right),
            (Some(Ok(l)), Some(Ok(r))) if l == r
        )
    }
}

/// Inspect one equation-shaped string
///
/// Inputs without exactly one `=` get `None` sides; everything else reports
/// per-side evaluation results so the caller can show precisely what failed.
#[must_use]
pub fn run_check(input: &str) -> CheckReport {
    let grammar_ok = matches_guess_grammar(input);

    let mut halves = input.split('=');
    let (left, right) = match (halves.next(), halves.next(), halves.next()) {
        (Some(l), Some(r), None) => (Some(evaluate(l)), Some(evaluate(r))),
        _ => (None, None),
    };

    CheckReport {
        input: input.to_string(),
        grammar_ok,
        left,
        right,
    }
}

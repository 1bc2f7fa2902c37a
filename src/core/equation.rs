//! Balanced equation representation
//!
//! An `Equation` is a string over the game alphabet with exactly one `=`
//! whose two sides evaluate to the same integer. The canonical game plays
//! with 7-character equations; the type itself only enforces balance, so
//! hosts may configure longer or shorter targets.

use super::eval::{self, EvalError};
use std::fmt;

/// The fixed game alphabet: every character a guess may contain
pub const ALPHABET: &str = "0123456789+-*/=";

/// Canonical equation length for the standard game
pub const EQUATION_LEN: usize = 7;

/// Error type for invalid equations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationError {
    /// A character outside the game alphabet
    InvalidCharacters,
    /// Not exactly one `=`
    NotAnEquation,
    /// One of the sides failed to evaluate
    Eval(EvalError),
    /// Both sides evaluate but to different values
    Unbalanced { left: i64, right: i64 },
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacters => {
                write!(f, "equation contains characters outside {ALPHABET:?}")
            }
            Self::NotAnEquation => write!(f, "equation must contain exactly one '='"),
            Self::Eval(e) => write!(f, "equation side does not evaluate: {e}"),
            Self::Unbalanced { left, right } => {
                write!(f, "equation is unbalanced: {left} != {right}")
            }
        }
    }
}

impl std::error::Error for EquationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvalError> for EquationError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

/// A validated, balanced equation
///
/// Construction proves the invariant: both sides evaluate and are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    eq_pos: usize,
    value: i64,
}

impl Equation {
    /// Create a new `Equation` from a string
    ///
    /// # Errors
    /// Returns `EquationError` if the string contains characters outside the
    /// game alphabet, does not contain exactly one `=`, has a side that does
    /// not evaluate, or is not balanced.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let eq = Equation::new("12+3=15").unwrap();
    /// assert_eq!(eq.left(), "12+3");
    /// assert_eq!(eq.right(), "15");
    /// assert_eq!(eq.value(), 15);
    ///
    /// assert!(Equation::new("12+3=14").is_err());
    /// assert!(Equation::new("12+3").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        if !text.chars().all(|c| ALPHABET.contains(c)) || text.is_empty() {
            return Err(EquationError::InvalidCharacters);
        }

        if text.chars().filter(|&c| c == '=').count() != 1 {
            return Err(EquationError::NotAnEquation);
        }
        let eq_pos = text.find('=').ok_or(EquationError::NotAnEquation)?;

        let left = eval::evaluate(&text[..eq_pos])?;
        let right = eval::evaluate(&text[eq_pos + 1..])?;
        if left != right {
            return Err(EquationError::Unbalanced { left, right });
        }

        Ok(Self {
            text,
            eq_pos,
            value: left,
        })
    }

    /// The full equation string
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The expression left of `=`
    #[inline]
    #[must_use]
    pub fn left(&self) -> &str {
        &self.text[..self.eq_pos]
    }

    /// The expression right of `=`
    #[inline]
    #[must_use]
    pub fn right(&self) -> &str {
        &self.text[self.eq_pos + 1..]
    }

    /// The common value of both sides
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Length in characters (the alphabet is ASCII, so bytes == characters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Check a guess against the equation grammar used by the verify gate
///
/// A well-formed guess is `<side>=<side>` where each side is one to three
/// numbers of 1–3 digits joined by operators, and only the final number of a
/// side may carry a unary `-`. A bare restatement of a number (`"123=123"`)
/// is rejected. Balance is NOT checked here; that is a separate, later step
/// so the host can distinguish "not an equation" from "a false equation".
///
/// # Examples
/// ```
/// use numberle::core::matches_guess_grammar;
///
/// assert!(matches_guess_grammar("12+3=15"));
/// assert!(matches_guess_grammar("5+15=20"));
/// assert!(!matches_guess_grammar("777=777")); // trivial restatement
/// assert!(!matches_guess_grammar("1234=15")); // number too wide
/// assert!(!matches_guess_grammar("abcdefg"));
/// ```
#[must_use]
pub fn matches_guess_grammar(input: &str) -> bool {
    if !input.is_ascii() {
        return false;
    }
    let mut halves = input.split('=');
    let (Some(left), Some(right), None) = (halves.next(), halves.next(), halves.next()) else {
        return false;
    };

    if !side_matches(left.as_bytes(), 0) || !side_matches(right.as_bytes(), 0) {
        return false;
    }

    // Forbid restating a bare number as itself
    let trivial = left == right && left.len() <= 3 && left.bytes().all(|b| b.is_ascii_digit());
    !trivial
}

/// Match one side: up to two `number operator` pairs, then `-?number`,
/// numbers being 1–3 digits
fn side_matches(side: &[u8], pairs_used: usize) -> bool {
    if final_number_matches(side) {
        return true;
    }
    if pairs_used == 2 {
        return false;
    }

    // Leading digits are maximal, so the pair split point is forced
    let digits = side.iter().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=3).contains(&digits) || digits >= side.len() {
        return false;
    }
    let is_operator = matches!(side[digits], b'+' | b'-' | b'*' | b'/');
    is_operator && side_matches(&side[digits + 1..], pairs_used + 1)
}

/// Match `-?\d{1,3}`
fn final_number_matches(side: &[u8]) -> bool {
    let digits = if side.first() == Some(&b'-') {
        &side[1..]
    } else {
        side
    };
    (1..=3).contains(&digits.len()) && digits.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_creation_valid() {
        let eq = Equation::new("12+3=15").unwrap();
        assert_eq!(eq.text(), "12+3=15");
        assert_eq!(eq.left(), "12+3");
        assert_eq!(eq.right(), "15");
        assert_eq!(eq.value(), 15);
        assert_eq!(eq.len(), 7);
    }

    #[test]
    fn equation_with_precedence() {
        let eq = Equation::new("2*3-6=0").unwrap();
        assert_eq!(eq.value(), 0);

        let eq = Equation::new("2+3*4=14").unwrap();
        assert_eq!(eq.value(), 14);
    }

    #[test]
    fn equation_balanced_on_both_sides() {
        let eq = Equation::new("5*3=8+7").unwrap();
        assert_eq!(eq.value(), 15);
    }

    #[test]
    fn equation_unbalanced_rejected() {
        assert_eq!(
            Equation::new("12+3=14"),
            Err(EquationError::Unbalanced {
                left: 15,
                right: 14
            })
        );
    }

    #[test]
    fn equation_requires_exactly_one_equals() {
        assert_eq!(Equation::new("12+3"), Err(EquationError::NotAnEquation));
        assert_eq!(Equation::new("1=1=1"), Err(EquationError::NotAnEquation));
    }

    #[test]
    fn equation_rejects_foreign_characters() {
        assert_eq!(
            Equation::new("12+a=15"),
            Err(EquationError::InvalidCharacters)
        );
        assert_eq!(Equation::new(""), Err(EquationError::InvalidCharacters));
    }

    #[test]
    fn equation_rejects_empty_side() {
        assert_eq!(
            Equation::new("=15"),
            Err(EquationError::Eval(EvalError::MalformedExpression))
        );
        assert_eq!(
            Equation::new("15="),
            Err(EquationError::Eval(EvalError::MalformedExpression))
        );
    }

    #[test]
    fn equation_division_by_zero_rejected() {
        assert_eq!(
            Equation::new("6/0=1"),
            Err(EquationError::Eval(EvalError::DivisionByZero))
        );
    }

    #[test]
    fn equation_display_and_from_str() {
        let eq: Equation = "12+3=15".parse().unwrap();
        assert_eq!(format!("{eq}"), "12+3=15");
    }

    #[test]
    fn grammar_accepts_plain_equations() {
        for input in ["12+3=15", "5+15=20", "2*3-6=0", "100/1=0", "7=4*2-1", "1=1+0"] {
            assert!(matches_guess_grammar(input), "expected {input:?} to match");
        }
    }

    #[test]
    fn grammar_accepts_trailing_negative_number() {
        assert!(matches_guess_grammar("10-12=-2"));
        assert!(matches_guess_grammar("-2=10-12"));
    }

    #[test]
    fn grammar_rejects_trivial_restatement() {
        assert!(!matches_guess_grammar("777=777"));
        assert!(!matches_guess_grammar("1=1"));
        // Same text on both sides is fine when it is an expression
        assert!(matches_guess_grammar("1+2=1+2"));
    }

    #[test]
    fn grammar_rejects_bad_shapes() {
        for input in [
            "abcdefg",  // letters
            "1234=15",  // number wider than 3 digits
            "10+10",    // no equals
            "1=1=1",    // two equals
            "12+=15",   // missing operand
            "=15",      // empty side
            "1+2+3+4=10", // too many terms
            "",
        ] {
            assert!(!matches_guess_grammar(input), "expected {input:?} to fail");
        }
    }

    #[test]
    fn grammar_rejects_leading_minus_on_first_term() {
        // Only the final number of a side may be negative
        assert!(!matches_guess_grammar("-1+2=1"));
    }

    #[test]
    fn grammar_allows_three_terms_per_side() {
        assert!(matches_guess_grammar("1+2+4=7"));
        assert!(matches_guess_grammar("9=1+2+6"));
    }
}

//! Random equation generation
//!
//! Synthesizes valid equations of exactly [`EQUATION_LEN`] characters by
//! drawing `A op B = R` candidates and repairing near-misses. The generator
//! is a stateless service: every call draws fresh randomness and returns an
//! owned [`Equation`].
//!
//! Operand draws are skewed toward small numbers so candidates render short:
//! 90% of rounds draw both operands from `0..15`, the rest from `0..100`.
//! Division candidates are only kept when the quotient is exact; anything
//! else is rejected and redrawn, so arithmetic errors never escape this
//! module.

mod repair;

use crate::core::{EQUATION_LEN, Equation, OPERATORS, Op};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Largest operand used by the repair searches (one digit)
pub(crate) const OPERAND_MAX: i64 = 9;

/// Candidate rounds before falling back to a constant equation
const MAX_ROUNDS: usize = 10_000;

/// A known-good equation of the canonical length; the round cap makes the
/// fallback unreachable in practice but keeps `generate` total
const FALLBACK: &str = "10+5=15";

/// Generate a random equation of the canonical length
///
/// Never fails: candidates are drawn and repaired until one fits.
///
/// # Examples
/// ```
/// use numberle::generator::generate;
///
/// let equation = generate();
/// assert_eq!(equation.len(), 7);
/// ```
#[must_use]
pub fn generate() -> Equation {
    generate_with(&mut rand::rng())
}

/// Generate a random equation using the supplied RNG
///
/// Identical to [`generate`] but deterministic under a seeded RNG, which is
/// what the tests use.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Equation {
    for _ in 0..MAX_ROUNDS {
        if let Some(equation) = candidate(rng) {
            return equation;
        }
    }
    Equation::new(FALLBACK).expect("fallback equation is valid")
}

/// Draw one candidate and try to shape it to the canonical length
fn candidate<R: Rng + ?Sized>(rng: &mut R) -> Option<Equation> {
    let (a, mut b) = draw_operands(rng);
    let op = *OPERATORS.choose(rng)?;

    if op == Op::Div {
        while b == 0 {
            b = rng.random_range(0..50);
        }
        if a % b != 0 {
            // Inexact quotient: reject the whole candidate
            return None;
        }
    }

    let result = op.apply(a, b).ok()?;
    let rendered = format!("{a}{}{b}={result}", op.as_char());

    match rendered.len() {
        EQUATION_LEN => Equation::new(&rendered).ok(),
        6 => repair::decompose(&rendered, rng).or_else(|| repair::extend(&rendered, rng)),
        5 => repair::repair_short(&rendered, rng),
        n if n > EQUATION_LEN => repair::reduce(&rendered, rng),
        _ => None,
    }
}

/// Draw both operands, usually from the small range
fn draw_operands<R: Rng + ?Sized>(rng: &mut R) -> (i64, i64) {
    if rng.random_range(0..10) == 0 {
        (rng.random_range(0..100), rng.random_range(0..100))
    } else {
        (rng.random_range(0..15), rng.random_range(0..15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn generated_equations_have_canonical_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let equation = generate_with(&mut rng);
            assert_eq!(equation.len(), EQUATION_LEN, "bad: {equation}");
        }
    }

    #[test]
    fn generated_equations_have_one_equals_and_balance() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let equation = generate_with(&mut rng);
            let text = equation.text();
            assert_eq!(text.matches('=').count(), 1, "bad: {text}");

            // Equation construction already proves balance; re-derive it
            // from the raw text to keep the property visible
            let (left, right) = text.split_once('=').unwrap();
            assert_eq!(
                crate::core::evaluate(left).unwrap(),
                crate::core::evaluate(right).unwrap(),
                "bad: {text}"
            );
        }
    }

    #[test]
    fn generated_equations_use_game_alphabet_only() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let equation = generate_with(&mut rng);
            assert!(
                equation
                    .text()
                    .chars()
                    .all(|c| crate::core::ALPHABET.contains(c)),
                "bad: {equation}"
            );
        }
    }

    #[test]
    fn generator_produces_variety() {
        let mut rng = StdRng::seed_from_u64(4);
        let distinct: HashSet<String> = (0..200)
            .map(|_| generate_with(&mut rng).text().to_string())
            .collect();
        assert!(
            distinct.len() > 50,
            "only {} distinct equations",
            distinct.len()
        );
    }

    #[test]
    fn generator_covers_multiple_operators() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..300 {
            let equation = generate_with(&mut rng);
            for ch in equation.text().chars() {
                if matches!(ch, '+' | '-' | '*' | '/') {
                    seen.insert(ch);
                }
            }
        }
        assert!(seen.len() >= 3, "operators seen: {seen:?}");
    }

    #[test]
    fn fallback_is_a_valid_canonical_equation() {
        let equation = Equation::new(FALLBACK).unwrap();
        assert_eq!(equation.len(), EQUATION_LEN);
    }
}

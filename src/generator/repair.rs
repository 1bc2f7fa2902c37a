//! Length repair strategies for generated candidates
//!
//! A freshly drawn `A op B = R` candidate rarely lands on 7 characters.
//! These functions rewrite a near-miss candidate into an exact-length
//! equation, or report that the caller should draw a fresh candidate. All
//! searches are bounded loops; a strategy that runs out of room returns
//! `None` rather than recursing without limit.

use crate::core::{EQUATION_LEN, Equation, OPERATORS, Op};
use rand::Rng;
use rand::prelude::IndexedRandom;

use super::OPERAND_MAX;

/// Attempts per bounded operand walk
const SEARCH_STEPS: usize = 12;

/// Split a candidate at its single `=` into the left expression and the
/// parsed right-hand value
fn split_candidate(candidate: &str) -> Option<(&str, i64)> {
    let (left, right) = candidate.split_once('=')?;
    let value = right.parse().ok()?;
    Some((left, value))
}

fn random_operator<R: Rng + ?Sized>(rng: &mut R) -> Op {
    *OPERATORS.choose(rng).unwrap_or(&Op::Add)
}

fn random_additive<R: Rng + ?Sized>(rng: &mut R) -> Op {
    if rng.random_range(0..2) == 0 {
        Op::Add
    } else {
        Op::Sub
    }
}

/// Wrap a rendered string as an `Equation` when it hit the exact length
fn finish(rendered: &str) -> Option<Equation> {
    if rendered.len() == EQUATION_LEN {
        Equation::new(rendered).ok()
    } else {
        None
    }
}

/// Repair dispatch for 5-character candidates: decompose the result side or
/// extend the left side, at random
pub(super) fn repair_short<R: Rng + ?Sized>(candidate: &str, rng: &mut R) -> Option<Equation> {
    if rng.random_range(0..2) == 0 {
        decompose(candidate, rng)
    } else {
        extend(candidate, rng)
    }
}

/// Split the right-hand side `R` into `R2 op C`
///
/// Picks an operand `C` and operator `op2`, computes `R2 = R op2 C`, and
/// rewrites the candidate as `L = R2 op2⁻¹ C`, which restores `R` exactly.
/// The operand walks through `0..=9` until a rendering of the target length
/// appears: downward when the rendering is the wrong length, upward when an
/// inexact division blocks the pick.
pub(super) fn decompose<R: Rng + ?Sized>(candidate: &str, rng: &mut R) -> Option<Equation> {
    let (left, value) = split_candidate(candidate)?;

    let mut operand: i64 = rng.random_range(0..=OPERAND_MAX);
    let mut op2 = random_operator(rng);

    for _ in 0..SEARCH_STEPS {
        // Zero cannot participate in the multiplicative rewrites
        while operand == 0 && op2.is_multiplicative() {
            operand = rng.random_range(0..=OPERAND_MAX);
            op2 = random_operator(rng);
        }

        if op2 == Op::Div && value % operand != 0 {
            // Inexact division: walk upward looking for a divisor
            if operand < OPERAND_MAX {
                operand += 1;
                continue;
            }
            return None;
        }

        let rewritten = op2.apply(value, operand).ok()?;
        let rendered = format!("{left}={rewritten}{}{operand}", op2.opposite().as_char());
        if let Some(equation) = finish(&rendered) {
            return Some(equation);
        }

        // Wrong length: try a smaller operand
        if operand == 0 {
            return None;
        }
        operand -= 1;
    }
    None
}

/// Grow the left-hand side into a two-term `+`/`-` chain
///
/// Either appends `op2 C` to the left side (adjusting the result to
/// `R op2 C`) or prefixes it with `C +` (result `C + R`). Both shapes stay
/// correct under precedence because only additive operators are introduced.
pub(super) fn extend<R: Rng + ?Sized>(candidate: &str, rng: &mut R) -> Option<Equation> {
    let (left, value) = split_candidate(candidate)?;

    let mut operand: i64 = rng.random_range(0..=OPERAND_MAX);
    let mut op2 = random_additive(rng);

    for _ in 0..SEARCH_STEPS {
        let rendered = if rng.random_range(0..2) == 0 {
            let rewritten = op2.apply(value, operand).ok()?;
            format!("{left}{}{operand}={rewritten}", op2.as_char())
        } else {
            let rewritten = operand + value;
            format!("{operand}+{left}={rewritten}")
        };
        if let Some(equation) = finish(&rendered) {
            return Some(equation);
        }

        if operand == 0 {
            return None;
        }
        operand -= 1;
        op2 = Op::Add;
    }
    None
}

/// Rewrite an over-long `A op B = R` candidate with an additive operator
///
/// Tries the four operator/operand-order combinations in a fixed priority —
/// `A op2 B`, `A op2⁻¹ B`, `B op2 A`, `B op2⁻¹ A` — accepting the first that
/// renders at the target length. If the final combination renders at 5
/// characters the short-candidate strategies get one chance at it.
pub(super) fn reduce<R: Rng + ?Sized>(candidate: &str, rng: &mut R) -> Option<Equation> {
    let (left, _) = split_candidate(candidate)?;
    let (a, b) = split_operands(left)?;

    let op2 = random_additive(rng);
    let combinations = [
        (a, op2, b),
        (a, op2.opposite(), b),
        (b, op2, a),
        (b, op2.opposite(), a),
    ];

    let mut last_rendered = String::new();
    for (x, op, y) in combinations {
        let Ok(result) = op.apply(x, y) else {
            continue;
        };
        let rendered = format!("{x}{}{y}={result}", op.as_char());
        if let Some(equation) = finish(&rendered) {
            return Some(equation);
        }
        last_rendered = rendered;
    }

    if last_rendered.len() == 5 {
        return repair_short(&last_rendered, rng);
    }
    None
}

/// Extract the two operands of a single-operator left side
fn split_operands(left: &str) -> Option<(i64, i64)> {
    let op_pos = left
        .char_indices()
        .skip(1) // a leading '-' belongs to the first operand
        .find(|(_, c)| Op::from_char(*c).is_some())
        .map(|(i, _)| i)?;
    let a = left[..op_pos].parse().ok()?;
    let b = left[op_pos + 1..].parse().ok()?;
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn decompose_fixes_short_candidates() {
        let mut rng = rng();
        let mut fixed = 0;
        for _ in 0..200 {
            if let Some(equation) = decompose("5*3=15", &mut rng) {
                assert_eq!(equation.len(), EQUATION_LEN);
                assert!(equation.text().starts_with("5*3="));
                fixed += 1;
            }
        }
        assert!(fixed > 0, "decompose never produced a 7-character equation");
    }

    #[test]
    fn decompose_gives_up_on_wide_left_sides() {
        // A 4-character left side cannot fit `L=R2 op C` in 7 characters
        let mut rng = rng();
        for _ in 0..20 {
            assert!(decompose("14/2=7", &mut rng).is_none());
        }
    }

    #[test]
    fn extend_fixes_short_candidates() {
        let mut rng = rng();
        let mut fixed = 0;
        for _ in 0..50 {
            if let Some(equation) = extend("1+2=3", &mut rng) {
                assert_eq!(equation.len(), EQUATION_LEN);
                fixed += 1;
            }
        }
        assert!(fixed > 0, "extend never produced a 7-character equation");
    }

    #[test]
    fn repair_short_fixes_minimal_candidates() {
        let mut rng = rng();
        let mut fixed = 0;
        for _ in 0..100 {
            if let Some(equation) = repair_short("1+2=3", &mut rng) {
                assert_eq!(equation.len(), EQUATION_LEN);
                fixed += 1;
            }
        }
        assert!(fixed > 0);
    }

    #[test]
    fn reduce_shrinks_long_candidates() {
        // "12*13=156" is 9 characters; additive rewrites are much shorter
        let mut rng = rng();
        let mut fixed = 0;
        for _ in 0..50 {
            if let Some(equation) = reduce("12*13=156", &mut rng) {
                assert_eq!(equation.len(), EQUATION_LEN);
                fixed += 1;
            }
        }
        assert!(fixed > 0, "reduce never produced a 7-character equation");
    }

    #[test]
    fn repaired_equations_are_balanced() {
        // Equation::new already proves balance; spot-check the text anyway
        let mut rng = rng();
        for _ in 0..50 {
            if let Some(equation) = decompose("5*3=15", &mut rng) {
                let (left, right) = equation.text().split_once('=').unwrap();
                assert_eq!(
                    crate::core::evaluate(left).unwrap(),
                    crate::core::evaluate(right).unwrap()
                );
            }
        }
    }

    #[test]
    fn split_operands_reads_single_operator_sides() {
        assert_eq!(split_operands("12*13"), Some((12, 13)));
        assert_eq!(split_operands("5+3"), Some((5, 3)));
        assert_eq!(split_operands("15"), None);
    }
}

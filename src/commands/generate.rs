//! Batch equation generation
//!
//! Corpus tooling: draws many equations in parallel, verifies the generator
//! contract on every one, and reports throughput and operator usage.

use crate::core::{EQUATION_LEN, Equation};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Result of a batch generation run
pub struct GenerateReport {
    pub requested: usize,
    pub unique: usize,
    pub duration: Duration,
    pub equations_per_second: f64,
    /// How often each operator appears across all generated equations
    pub operator_counts: HashMap<char, usize>,
}

/// Generate a batch of equations in parallel
///
/// The generator is a stateless service, so candidates are drawn across the
/// rayon pool; each worker uses its own thread-local RNG.
///
/// # Panics
///
/// Panics if any generated equation violates the generator contract (wrong
/// length or unbalanced); that would be a bug, not an input problem.
#[must_use]
pub fn run_generate(count: usize) -> (Vec<Equation>, GenerateReport) {
    let progress = ProgressBar::new(count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let equations: Vec<Equation> = (0..count)
        .into_par_iter()
        .map(|_| {
            let equation = crate::generator::generate();
            assert_eq!(equation.len(), EQUATION_LEN, "generator contract broken");
            progress.inc(1);
            equation
        })
        .collect();
    let duration = start.elapsed();
    progress.finish_and_clear();

    let unique: HashSet<&str> = equations.iter().map(Equation::text).collect();
    let mut operator_counts: HashMap<char, usize> = HashMap::new();
    for equation in &equations {
        for ch in equation.text().chars() {
            if matches!(ch, '+' | '-' | '*' | '/') {
                *operator_counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    let report = GenerateReport {
        requested: count,
        unique: unique.len(),
        duration,
        equations_per_second: count as f64 / duration.as_secs_f64(),
        operator_counts,
    };
    (equations, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_count() {
        let (equations, report) = run_generate(25);
        assert_eq!(equations.len(), 25);
        assert_eq!(report.requested, 25);
        assert!(report.unique >= 1);
        assert!(report.unique <= 25);
    }

    #[test]
    fn every_equation_meets_the_contract() {
        let (equations, _) = run_generate(50);
        for equation in &equations {
            assert_eq!(equation.len(), EQUATION_LEN);
            assert_eq!(equation.text().matches('=').count(), 1);
        }
    }

    #[test]
    fn operator_counts_cover_the_batch() {
        let (equations, report) = run_generate(100);
        let total: usize = report.operator_counts.values().sum();
        // Every equation carries at least one operator on some side
        assert!(total >= equations.len() / 2);
    }
}

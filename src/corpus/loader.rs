//! Corpus loading utilities
//!
//! Functions to load candidate target equations from files or from the
//! embedded defaults.

use crate::core::Equation;
use std::fs;
use std::io;
use std::path::Path;

/// Load equations from a newline-delimited file
///
/// Returns a vector of valid [`Equation`] instances, skipping blank lines
/// and any entry that fails to validate.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::corpus::loader::load_from_file;
///
/// let equations = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", equations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;

    let equations = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Equation::new(trimmed).ok()
            }
        })
        .collect();

    Ok(equations)
}

/// Convert an embedded string slice to an `Equation` vector
///
/// # Examples
/// ```
/// use numberle::corpus::loader::equations_from_slice;
/// use numberle::corpus::EQUATIONS;
///
/// let equations = equations_from_slice(EQUATIONS);
/// assert_eq!(equations.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| Equation::new(s).ok()).collect()
}

//! Command implementations

pub mod check;
pub mod generate;
pub mod simple;

pub use check::{CheckReport, run_check};
pub use generate::{GenerateReport, run_generate};
pub use simple::run_simple;

//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt, print_check_report, print_generate_report, print_history, print_knowledge,
};
pub use formatters::{colorize_guess, status_blocks};

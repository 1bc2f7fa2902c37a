//! Display functions for game state and command results

use super::formatters::{colorize_guess, status_blocks};
use crate::commands::{CheckReport, GenerateReport};
use crate::core::{CharClass, CharKnowledge};
use crate::engine::Attempt;
use colored::Colorize;

/// Print one scored attempt as a colored row plus its block summary
pub fn print_attempt(attempt: &Attempt) {
    println!(
        "  {}  {}",
        colorize_guess(attempt.guess(), attempt.statuses()),
        status_blocks(attempt.statuses())
    );
}

/// Print the whole attempt history, oldest first
pub fn print_history(attempts: &[Attempt]) {
    for attempt in attempts {
        print_attempt(attempt);
    }
}

/// Print the four knowledge classes, keyboard-hint style
pub fn print_knowledge(knowledge: &CharKnowledge) {
    let line = |label: &str, class: CharClass| {
        let chars: String = knowledge
            .chars_in(class)
            .into_iter()
            .map(|c| format!("{c} "))
            .collect();
        // ANSI escapes count toward format width; pad first
        (format!("{label:<12}"), chars.trim_end().to_string())
    };

    let (label, chars) = line("Hit", CharClass::Exact);
    println!("  {} {}", label.bright_green(), chars.bright_green().bold());
    let (label, chars) = line("Misplaced", CharClass::WrongPosition);
    println!(
        "  {} {}",
        label.bright_yellow(),
        chars.bright_yellow().bold()
    );
    let (label, chars) = line("Not in it", CharClass::Absent);
    println!("  {} {}", label.bright_black(), chars.bright_black());
    let (label, chars) = line("Untried", CharClass::Unseen);
    println!("  {} {}", label.bright_white(), chars.bright_white());
}

/// Print the result of a batch generation run
pub fn print_generate_report(report: &GenerateReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Batch:".bright_cyan().bold());
    println!("   Equations:        {}", report.requested);
    println!(
        "   Unique:           {}",
        format!("{}", report.unique).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Equations/second: {:.1}", report.equations_per_second);

    println!("\n📈 {}", "Operator usage:".bright_cyan().bold());
    let total: usize = report.operator_counts.values().sum();
    for op in ['+', '-', '*', '/'] {
        let count = report.operator_counts.get(&op).copied().unwrap_or(0);
        let pct = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {op}: {bar} {count:5} ({pct:5.1}%)");
    }
}

/// Print the result of checking one equation
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {}",
        report.input.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let verdict = |ok: bool| {
        if ok {
            "yes".green().bold()
        } else {
            "no".red().bold()
        }
    };

    println!("  Guess grammar:  {}", verdict(report.grammar_ok));
    match (&report.left, &report.right) {
        (Some(left), Some(right)) => {
            print_side("Left side", left);
            print_side("Right side", right);
            println!("  Balanced:       {}", verdict(report.balanced()));
        }
        _ => println!("  {}", "Input needs exactly one '='".red()),
    }
}

fn print_side(label: &str, side: &Result<i64, crate::core::EvalError>) {
    match side {
        Ok(value) => println!("  {label}:      {}", format!("{value}").bright_white()),
        Err(e) => println!("  {label}:      {}", format!("{e}").red()),
    }
}

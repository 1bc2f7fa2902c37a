//! Numberle - CLI
//!
//! Wordle-style equation guessing game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numberle::{
    commands::{run_check, run_generate, run_simple},
    core::Equation,
    corpus::{EQUATIONS, loader},
    engine::GameConfig,
    output::{print_check_report, print_generate_report},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Guess the hidden 7-character equation in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a corpus file of target equations (default: embedded corpus)
    #[arg(short = 'c', long, global = true)]
    corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Fixed target equation instead of a random corpus pick
        #[arg(short, long)]
        target: Option<String>,

        /// Reveal the target when the game starts
        #[arg(long)]
        show_target: bool,

        /// Accept any guess without checking length/grammar/arithmetic
        #[arg(long)]
        no_verify: bool,
    },

    /// Simple console mode (no TUI)
    Simple {
        /// Fixed target equation instead of a random corpus pick
        #[arg(short, long)]
        target: Option<String>,

        /// Reveal the target when the game starts
        #[arg(long)]
        show_target: bool,

        /// Accept any guess without checking length/grammar/arithmetic
        #[arg(long)]
        no_verify: bool,
    },

    /// Generate random equations in bulk
    Generate {
        /// Number of equations to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Write the generated equations to a file, one per line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check one equation: side values, balance, and guess grammar
    Check {
        /// The equation to check, e.g. "12+3=15"
        equation: String,
    },
}

/// Load the corpus from the `-c` flag or fall back to the embedded one
fn load_corpus(path: Option<&PathBuf>) -> Result<Vec<Equation>> {
    match path {
        Some(path) => {
            let equations = loader::load_from_file(path)
                .with_context(|| format!("failed to read corpus {}", path.display()))?;
            anyhow::ensure!(
                !equations.is_empty(),
                "corpus {} contains no valid equations",
                path.display()
            );
            Ok(equations)
        }
        None => Ok(loader::equations_from_slice(EQUATIONS)),
    }
}

/// Build the game configuration shared by the play and simple commands
fn game_setup(
    target: Option<&str>,
    show_target: bool,
    no_verify: bool,
) -> Result<(GameConfig, Option<Equation>)> {
    let target = target
        .map(|t| Equation::new(t).map_err(|e| anyhow::anyhow!("invalid target '{t}': {e}")))
        .transpose()?;

    let config = GameConfig {
        verify_equation: !no_verify,
        show_target,
        random_target: target.is_none(),
    };
    Ok((config, target))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let corpus = load_corpus(cli.corpus.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        target: None,
        show_target: false,
        no_verify: false,
    });

    match command {
        Commands::Play {
            target,
            show_target,
            no_verify,
        } => {
            let (config, target) = game_setup(target.as_deref(), show_target, no_verify)?;
            run_play_command(&corpus, config, target)
        }
        Commands::Simple {
            target,
            show_target,
            no_verify,
        } => {
            let (config, target) = game_setup(target.as_deref(), show_target, no_verify)?;
            run_simple(&corpus, config, target).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Generate { count, output } => run_generate_command(count, output.as_ref()),
        Commands::Check { equation } => {
            let report = run_check(&equation);
            print_check_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(
    corpus: &[Equation],
    config: GameConfig,
    target: Option<Equation>,
) -> Result<()> {
    use numberle::interactive::{App, run_tui};

    let app = App::new(corpus, config, target)?;
    run_tui(app)
}

fn run_generate_command(count: usize, output: Option<&PathBuf>) -> Result<()> {
    println!("Generating {count} equations...");
    let (equations, report) = run_generate(count);
    print_generate_report(&report);

    if let Some(path) = output {
        let content: String = equations
            .iter()
            .map(|equation| format!("{equation}\n"))
            .collect();
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nWrote {} equations to {}", equations.len(), path.display());
    }
    Ok(())
}

//! Simple interactive console mode
//!
//! Text-based game loop without the TUI: one prompt per guess, feedback
//! rows and the knowledge classes printed after every accepted guess.

use crate::core::Equation;
use crate::engine::{Game, GameConfig, MAX_ATTEMPTS, ResultCode};
use crate::output::{print_history, print_knowledge};
use colored::Colorize;
use std::io::{self, Write};

/// Run the console game loop
///
/// `target` pre-seeds a fixed target; with `config.random_target` set the
/// corpus supplies one per game instead.
///
/// # Errors
///
/// Returns an error if no target can be chosen or reading user input fails.
pub fn run_simple(
    corpus: &[Equation],
    config: GameConfig,
    target: Option<Equation>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Numberle - Guess the Equation                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 7-character equation, e.g. 12+3=15");
    println!("You have {MAX_ATTEMPTS} attempts. After each guess:");
    println!("  {} correct position", "green".bright_green().bold());
    println!("  {} in the equation, wrong position", "yellow".bright_yellow().bold());
    println!("  {} not in the equation\n", "gray".bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new();
    if let Some(target) = target {
        game.set_target(target);
    }
    start(&mut game, config, corpus)?;

    loop {
        if game.is_game_over() {
            print_outcome(&game);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    start(&mut game, config, corpus)?;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        let input = get_user_input("Your guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                start(&mut game, config, corpus)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        match game.process_input(&input) {
            ResultCode::Accepted => {
                println!();
                print_history(game.attempts());
                println!();
                print_knowledge(game.knowledge());
                if !game.is_game_over() {
                    println!(
                        "\n{} attempts left\n",
                        game.remaining_attempts().to_string().bright_cyan().bold()
                    );
                }
            }
            code => {
                println!("{}\n", format!("❌ {code}. Try again.").red());
            }
        }
    }
}

/// Start a fresh round and announce it
fn start(game: &mut Game, config: GameConfig, corpus: &[Equation]) -> Result<(), String> {
    game.start_new_game(config, corpus).map_err(|e| e.to_string())?;
    println!(
        "\n🔄 New game! You have {} attempts.",
        MAX_ATTEMPTS.to_string().bright_cyan().bold()
    );
    if config.show_target
        && let Some(target) = game.target()
    {
        println!("Target is: {}", target.text().bright_yellow());
    }
    println!();
    Ok(())
}

/// Win or lose banner with the full history
fn print_outcome(game: &Game) {
    if game.is_game_won() {
        let turns = game.attempts().len();
        println!("\n{}", "═".repeat(70).bright_cyan());
        println!(
            "{}",
            "    🎉 ✨  E Q U A T I O N   S O L V E D !  ✨ 🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(70).bright_cyan());

        let performance = match turns {
            1 => "🏆 First try - incredible!",
            2 => "⭐ Two guesses - excellent!",
            3 => "💫 Three guesses - great!",
            4 => "✨ Four guesses - good!",
            5 => "👍 Five guesses - solved!",
            _ => "✓ Got it on the last chance!",
        };
        println!("\n  {}", performance.bright_yellow().bold());
        println!(
            "\n  Solved in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("\n{}", "═".repeat(70).bright_black());
        println!("{}", "  You LOSE - out of attempts.".red().bold());
        if let Some(target) = game.target() {
            println!(
                "  The equation was: {}",
                target.text().bright_yellow().bold()
            );
        }
        println!("{}", "═".repeat(70).bright_black());
    }

    println!("\n  Guess history:");
    print_history(game.attempts());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

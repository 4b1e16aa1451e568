//! Display functions for command results

use super::formatters::colored_tile;
use crate::commands::ReplayResult;
use crate::core::{GameStatus, row_to_codes};
use colored::Colorize;

/// Print the result of replaying a game
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let tiles: String = step
            .word
            .chars()
            .zip(&step.feedback)
            .map(|(letter, &feedback)| colored_tile(letter, Some(feedback)).to_string())
            .collect();

        if verbose {
            println!("\nTurn {}: {tiles}  {}", i + 1, row_to_codes(&step.feedback));
        } else {
            println!("\nTurn {}: {tiles}", i + 1);
        }
    }

    if !result.unused.is_empty() {
        println!(
            "\n{} {}",
            "Ignored after the game ended:".bright_black(),
            result.unused.join(", ")
        );
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved {}", result.summary).green().bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Not solved {}", result.summary).red().bold()
        ),
        GameStatus::Playing => println!(
            "{}",
            format!("… Still playing ({} used)", result.summary).yellow()
        ),
    }

    println!("\n{}", result.share);
}

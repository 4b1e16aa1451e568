//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line, colored tiles after each row.

use crate::config::TargetPicker;
use crate::core::{GameEngine, GameStatus, Key, Outcome, Word};
use crate::output::formatters::{colored_keyboard, colored_row};
use crate::output::{share_summary, share_text};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// target word can be chosen.
pub fn run_simple(picker: &mut TargetPicker, words: &[Word]) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(picker, words, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a text game from any line source
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word can be chosen.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_lines<R: BufRead, W: Write>(
    picker: &mut TargetPicker,
    words: &[Word],
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    let io_err = |e: io::Error| e.to_string();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗").map_err(io_err)?;
    writeln!(out, "║                    Wordle - Text Mode                        ║").map_err(io_err)?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n").map_err(io_err)?;
    writeln!(out, "Type a guess and press Enter.").map_err(io_err)?;
    writeln!(out, "Commands: ':quit' to exit, ':new' for a new game, ':keys' to show the keyboard\n")
        .map_err(io_err)?;

    let mut game = new_game(picker, words)?;
    writeln!(out, "Guess the {}-letter word in {} tries.\n", game.cols(), game.rows()).map_err(io_err)?;

    loop {
        let (row, _) = game.cursor();
        if game.status().is_over() {
            write!(out, "Command: ").map_err(io_err)?;
        } else {
            write!(out, "Guess {}/{}: ", row + 1, game.rows()).map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!\n").map_err(io_err)?;
            return Ok(());
        }
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => continue,
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n").map_err(io_err)?;
                return Ok(());
            }
            ":new" | ":n" => {
                game = new_game(picker, words)?;
                writeln!(out, "\n🔄 New game started!\n").map_err(io_err)?;
                continue;
            }
            ":keys" | ":k" => {
                for keys in colored_keyboard(&game) {
                    writeln!(out, "  {keys}").map_err(io_err)?;
                }
                continue;
            }
            command if command.starts_with(':') => {
                writeln!(out, "❌ Unknown command '{command}'").map_err(io_err)?;
                continue;
            }
            _ => {}
        }

        if game.status().is_over() {
            writeln!(out, "Game over. Type ':new' to play again or ':quit' to exit.").map_err(io_err)?;
            continue;
        }

        let guess = match Word::new(line.as_str()) {
            Ok(word) if word.len() == game.cols() => word,
            Ok(_) => {
                writeln!(out, "❌ Guess must be exactly {} letters", game.cols()).map_err(io_err)?;
                continue;
            }
            Err(e) => {
                writeln!(out, "❌ {e}").map_err(io_err)?;
                continue;
            }
        };

        let outcome = submit_guess(&mut game, &guess);
        writeln!(out, "  {}", colored_row(&game, row)).map_err(io_err)?;

        if let Outcome::Finished(status) = outcome {
            let banner = match status {
                GameStatus::Won => format!("🎉 Hooray, you won in {}!", share_summary(&game))
                    .bright_green()
                    .bold(),
                _ => format!(
                    "Meh. The word was {}. Try again tomorrow!",
                    game.target().text().to_uppercase()
                )
                .bright_red()
                .bold(),
            };
            writeln!(out, "\n{banner}\n").map_err(io_err)?;
            writeln!(out, "{}\n", share_text(&game)).map_err(io_err)?;
            writeln!(out, "Type ':new' to play again or ':quit' to exit.").map_err(io_err)?;
        }
    }
}

fn new_game(picker: &mut TargetPicker, words: &[Word]) -> Result<GameEngine, String> {
    picker.new_engine(words).map_err(|e| e.to_string())
}

/// Type a whole word and submit it
fn submit_guess(game: &mut GameEngine, guess: &Word) -> Outcome {
    for &letter in guess.chars() {
        game.press(Key::Letter(letter));
    }
    game.press(Key::Submit)
}

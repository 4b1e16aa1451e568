//! Wordle Game - CLI
//!
//! Play Wordle in a terminal UI or a plain text mode, or replay a list of guesses.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use tracing::debug;
use wordle_game::{
    commands::{ReplayConfig, replay_game, run_simple},
    config::GameConfig,
    core::{DEFAULT_ROWS, Word},
    logging,
    output::print_replay_result,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, built-in list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Number of attempts allowed (1-26)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ROWS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=26)
    )]
    rows: usize,

    /// Seed for picking random targets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line)
    Simple,

    /// Replay a list of guesses against a known target
    Replay {
        /// The target word
        word: String,

        /// Guesses, in order
        guesses: Vec<String>,

        /// Show G/Y/- codes next to each row
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            debug!(path, count = words.len(), "loaded custom word list");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let config = GameConfig::new(cli.rows, cli.target, cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &words),
        Commands::Simple => run_simple_command(&config, &words),
        Commands::Replay {
            word,
            guesses,
            verbose,
        } => run_replay_command(word, guesses, verbose, config.rows),
    }
}

fn run_play_command(config: &GameConfig, words: &[Word]) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config.picker(), words)?;
    if let Some(share) = run_tui(app)? {
        println!("{share}");
    }
    Ok(())
}

fn run_simple_command(config: &GameConfig, words: &[Word]) -> Result<()> {
    let mut picker = config.picker();
    run_simple(&mut picker, words).map_err(|e| anyhow::anyhow!(e))
}

fn run_replay_command(
    word: String,
    guesses: Vec<String>,
    verbose: bool,
    rows: usize,
) -> Result<()> {
    let mut replay = ReplayConfig::new(word, guesses);
    replay.max_guesses = rows;
    let result = replay_game(replay).map_err(|e| anyhow::anyhow!(e))?;

    print_replay_result(&result, verbose);
    Ok(())
}

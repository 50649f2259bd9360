//! Daily Wordle - CLI
//!
//! Play today's puzzle in a TUI (default) or a line-oriented mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{reset_day, run_simple, saved_share_message},
    config::{Config, ConfigArgs},
    interactive::{App, run_tui},
    logging,
    output::{ShareSink, StdoutSink},
    session::Session,
    store::FileStore,
    words::WordList,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the daily five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole guesses, no TUI)
    Simple,

    /// Print the share text for today's saved game
    Share,

    /// Forget today's saved game
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_args(cli.config);

    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let words = config.word_list().context("Failed to load word list")?;
    let store = config.open_store().with_context(|| {
        format!(
            "Failed to open save directory: {}",
            config.data_dir.display()
        )
    })?;

    tracing::info!(
        day = %config.day.storage_key(),
        tries = config.tries,
        words = words.len(),
        "starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store, &words, &config),
        Commands::Simple => run_simple_command(store, &words, &config),
        Commands::Share => {
            run_share_command(&store, &words, &config);
            Ok(())
        }
        Commands::Reset => run_reset_command(store, &config),
    }
}

fn run_play_command(store: FileStore, words: &WordList, config: &Config) -> Result<()> {
    let session = Session::start(store, words, config.day, config.tries);
    if let Some(text) = run_tui(App::new(session))? {
        StdoutSink.emit(&text);
    }
    Ok(())
}

fn run_simple_command(store: FileStore, words: &WordList, config: &Config) -> Result<()> {
    let session = Session::start(store, words, config.day, config.tries);
    run_simple(session, io::stdin().lock(), &mut StdoutSink)
}

fn run_share_command(store: &FileStore, words: &WordList, config: &Config) {
    match saved_share_message(store, words, config.day, config.tries) {
        Some(text) => StdoutSink.emit(&text),
        None => println!("Nothing to share yet. Make a guess first!"),
    }
}

fn run_reset_command(mut store: FileStore, config: &Config) -> Result<()> {
    if reset_day(&mut store, config.day).context("Failed to reset saved game")? {
        println!("Today's game has been reset.");
    } else {
        println!("No saved game for today.");
    }
    Ok(())
}

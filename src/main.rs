//! Wordle - CLI
//!
//! Play a game in the terminal, or score one guess against the target.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use wordle_core::{
    commands::{run_play, run_score},
    core::Word,
    game::Game,
    logging::init_tracing,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word for the game
    #[arg(
        short,
        long,
        global = true,
        env = "WORDLE_TARGET",
        default_value = "BUNNY",
        hide_env_values = true
    )]
    target: String,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Score a single guess against the target
    Score {
        /// The guess to score
        guess: String,

        /// Print only the emoji row
        #[arg(short, long)]
        emoji: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let target = Word::new(&cli.target.to_uppercase())
        .with_context(|| format!("invalid target word '{}'", cli.target))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Play => {
            let mut game = Game::new(target);
            run_play(&mut game, io::stdin().lock(), &mut out).context("game aborted")?;
        }
        Commands::Score { guess, emoji } => {
            run_score(&guess, &target, emoji, &mut out)
                .with_context(|| format!("cannot score '{guess}'"))?;
        }
    }

    out.flush()?;
    Ok(())
}

//! Command-line interface for the gess binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gess - play, replay and inspect games of Gess
#[derive(Parser, Debug)]
#[command(name = "gess")]
#[command(about = "Two-player Gess in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, saving after every move
    Play {
        /// Save file to write
        #[arg(long, default_value = "data/game.bin")]
        save: PathBuf,

        /// Continue the game stored in the save file, if there is one
        #[arg(long)]
        resume: bool,
    },

    /// Apply a file of moves (one "sc sr ec er" per line) to a new game
    Replay {
        /// Moves file; '#' starts a comment
        moves: PathBuf,

        /// Save the resulting position here
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print the position stored in a save file
    Show {
        /// Save file to read
        #[arg(default_value = "data/game.bin")]
        save: PathBuf,
    },
}

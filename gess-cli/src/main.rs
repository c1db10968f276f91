//! Gess in the terminal
//!
//! Two players share one keyboard. Moves are typed as four numbers,
//! `start_col start_row end_col end_row`, zero-indexed.

mod cli;
mod save;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gess_core::{Coord, GameState, GessGame};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { save, resume } => play(&save, resume),
        Command::Replay { moves, save } => replay(&moves, save.as_deref()),
        Command::Show { save } => show(&save),
    }
}

/// One line of input while playing.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Move(Coord, Coord),
    Resign,
    Quit,
}

fn parse_input(line: &str) -> Result<Input> {
    let line = line.trim();
    match line {
        "resign" => return Ok(Input::Resign),
        "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let nums = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i8>()
                .with_context(|| format!("not a coordinate: {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    match nums[..] {
        [sc, sr, ec, er] => Ok(Input::Move(Coord::new(sc, sr), Coord::new(ec, er))),
        _ => bail!("expected four numbers, got {}", nums.len()),
    }
}

fn print_position(game: &GessGame) {
    println!("{}", game.board());
    match game.game_state() {
        GameState::InProgress => println!("{} to move", game.current_player()),
        state => {
            if let Some(winner) = state.winner() {
                println!("Game over: {} wins", winner);
            }
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_save(path: &Path, game: &GessGame) -> Result<()> {
    ensure_parent(path)?;
    save::save(path, game).with_context(|| format!("saving to {}", path.display()))?;
    Ok(())
}

fn play(save_path: &Path, resume: bool) -> Result<()> {
    let mut game = if resume && save_path.exists() {
        let game =
            save::load(save_path).with_context(|| format!("loading {}", save_path.display()))?;
        info!(path = %save_path.display(), "resumed saved game");
        game
    } else {
        GessGame::new()
    };

    println!("Gess");
    println!("====");
    println!("Enter moves as: start_col start_row end_col end_row");
    println!("Type 'resign' to concede or 'quit' to leave.\n");
    print_position(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.game_state().is_over() {
        print!("{}> ", game.current_player());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Ok(Input::Move(start, end)) => match game.make_move(start, end) {
                Ok(summary) => {
                    if summary.captured > 0 {
                        println!("Captured {} stone(s)", summary.captured);
                    }
                    write_save(save_path, &game)?;
                    print_position(&game);
                }
                Err(err) => println!("Illegal move: {}. Try again.", err),
            },
            Ok(Input::Resign) => {
                game.resign();
                write_save(save_path, &game)?;
                print_position(&game);
            }
            Ok(Input::Quit) => {
                write_save(save_path, &game)?;
                println!("Game saved to {}", save_path.display());
                return Ok(());
            }
            Err(err) => println!("{:#}", err),
        }
    }

    Ok(())
}

fn replay(moves_path: &Path, save_path: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(moves_path)
        .with_context(|| format!("reading {}", moves_path.display()))?;

    let mut game = GessGame::new();
    let mut applied = 0;
    let mut rejected = 0;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let input =
            parse_input(line).with_context(|| format!("{}:{}", moves_path.display(), lineno + 1))?;
        match input {
            Input::Move(start, end) => match game.make_move(start, end) {
                Ok(_) => applied += 1,
                Err(err) => {
                    rejected += 1;
                    warn!(line = lineno + 1, %start, %end, %err, "move rejected");
                }
            },
            Input::Resign => game.resign(),
            Input::Quit => break,
        }
    }

    info!(applied, rejected, "replay finished");
    print_position(&game);

    if let Some(path) = save_path {
        write_save(path, &game)?;
        println!("Game saved to {}", path.display());
    }
    Ok(())
}

fn show(save_path: &Path) -> Result<()> {
    let game = save::load(save_path).with_context(|| format!("loading {}", save_path.display()))?;
    println!(
        "Black stones: {}  White stones: {}",
        game.black_stones().len(),
        game.white_stones().len()
    );
    print_position(&game);
    Ok(())
}

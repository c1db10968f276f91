//! Serialisable game state.
//!
//! A snapshot holds just enough to resume a game: both stone sets, whose turn
//! it is, and the game state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Registries};
use crate::coord::{Coord, Player};
use crate::error::SnapshotError;
use crate::game::{GameState, GessGame};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub black: Vec<Coord>,
    pub white: Vec<Coord>,
    pub current_player: Player,
    pub state: GameState,
}

impl GessGame {
    /// Capture the current position.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            black: self.black_stones(),
            white: self.white_stones(),
            current_player: self.current_player(),
            state: self.game_state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Stones must lie on the grid and no cell may be listed twice.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<GessGame, SnapshotError> {
        let stones = Registries {
            black: unique(&snapshot.black)?,
            white: unique(&snapshot.white)?,
        };
        let board = Board::from_registries(&stones)?;
        Ok(GessGame::from_parts(
            board,
            snapshot.current_player,
            snapshot.state,
        ))
    }
}

fn unique(coords: &[Coord]) -> Result<BTreeSet<Coord>, SnapshotError> {
    let mut set = BTreeSet::new();
    for &coord in coords {
        if !set.insert(coord) {
            return Err(SnapshotError::Overlap(coord));
        }
    }
    Ok(set)
}

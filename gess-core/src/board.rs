//! Grid occupancy plus one stone registry per player.
//!
//! The grid answers "what is on cell Y", the registries answer "which cells
//! does player X hold". Both are only ever changed together through
//! [`Board::place`] and [`Board::remove`], so they cannot disagree.

use std::collections::BTreeSet;
use std::fmt;

use crate::coord::{Cell, Coord, Player, BOARD_SIZE};
use crate::error::SnapshotError;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Both players' stone sets, detached from any grid.
///
/// Used as the rollback backup during a move and as the payload of a
/// saved game.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Registries {
    pub black: BTreeSet<Coord>,
    pub white: BTreeSet<Coord>,
}

impl Registries {
    /// The stone set of one player.
    pub fn of(&self, player: Player) -> &BTreeSet<Coord> {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }
}

/// Authoritative board state.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Cell; CELLS],
    stones: Registries,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Board {
        Board {
            grid: [Cell::Empty; CELLS],
            stones: Registries::default(),
        }
    }

    /// Build a board from two stone sets.
    ///
    /// Fails if a stone lies off the grid or a cell is claimed by both players.
    pub fn from_registries(stones: &Registries) -> Result<Board, SnapshotError> {
        let mut board = Board::new();
        for player in [Player::Black, Player::White] {
            for &coord in stones.of(player) {
                if !coord.on_board() {
                    return Err(SnapshotError::OutOfBounds(coord));
                }
                if board.cell(coord) != Cell::Empty {
                    return Err(SnapshotError::Overlap(coord));
                }
                board.place(coord, player);
            }
        }
        Ok(board)
    }

    /// What occupies a cell. Off-grid coordinates read as empty.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Cell {
        if coord.on_board() {
            self.grid[coord.index()]
        } else {
            Cell::Empty
        }
    }

    /// Owner of the stone on a cell, if any.
    #[inline]
    pub fn owner(&self, coord: Coord) -> Option<Player> {
        self.cell(coord).owner()
    }

    /// Whether `player` has a stone on `coord`.
    #[inline]
    pub fn owns(&self, player: Player, coord: Coord) -> bool {
        self.stones(player).contains(&coord)
    }

    /// Every stone a player currently has on the board.
    pub fn stones(&self, player: Player) -> &BTreeSet<Coord> {
        self.stones.of(player)
    }

    /// Number of stones a player has on the board.
    pub fn stone_count(&self, player: Player) -> usize {
        self.stones(player).len()
    }

    /// Copy of both registries, for rollback or saving.
    pub fn registries(&self) -> Registries {
        self.stones.clone()
    }

    // ========== Mutation primitives ==========

    /// Put a stone on an empty cell.
    /// Does NOT validate - caller must have cleared the cell.
    pub(crate) fn place(&mut self, coord: Coord, player: Player) {
        debug_assert!(coord.on_board(), "placing off the grid at {coord}");
        debug_assert_eq!(
            self.grid[coord.index()],
            Cell::Empty,
            "cell {coord} occupied"
        );
        self.grid[coord.index()] = player.cell();
        self.registry_mut(player).insert(coord);
    }

    /// Take a player's stone off a cell.
    pub(crate) fn remove(&mut self, coord: Coord, player: Player) {
        let removed = self.registry_mut(player).remove(&coord);
        debug_assert!(removed, "{player} has no stone at {coord}");
        self.grid[coord.index()] = Cell::Empty;
    }

    /// Clear the grid and replay every stone of a backup.
    pub(crate) fn restore(&mut self, backup: &Registries) {
        self.grid = [Cell::Empty; CELLS];
        self.stones = Registries::default();
        for &coord in &backup.black {
            self.place(coord, Player::Black);
        }
        for &coord in &backup.white {
            self.place(coord, Player::White);
        }
    }

    fn registry_mut(&mut self, player: Player) -> &mut BTreeSet<Coord> {
        match player {
            Player::Black => &mut self.stones.black,
            Player::White => &mut self.stones.white,
        }
    }

    /// Check that grid and registries describe the same position.
    pub fn is_consistent(&self) -> bool {
        let registered = self.stones.black.len() + self.stones.white.len();
        let occupied = self.grid.iter().filter(|&&c| c != Cell::Empty).count();
        if registered != occupied {
            return false;
        }
        [Player::Black, Player::White].into_iter().all(|player| {
            self.stones(player)
                .iter()
                .all(|&coord| coord.on_board() && self.grid[coord.index()] == player.cell())
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Rows from 19 down to 0, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cell(Coord::new(col, row)).symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("black", &self.stones.black.len())
            .field("white", &self.stones.white.len())
            .finish()
    }
}

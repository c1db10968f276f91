//! Grid coordinates, players and cell contents.

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 20;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert from u8 (1 or 2) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    /// The cell value this player's stones show on the grid.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "BLACK"),
            Player::White => write!(f, "WHITE"),
        }
    }
}

/// Contents of a single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// Owner of the stone in this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        Player::from_bits(self as u8)
    }

    /// Single-character symbol used when printing the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// Zero-indexed `(column, row)` grid coordinate.
///
/// Row 0 is Black's home edge, row 19 is White's. "Up" means increasing row.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    #[inline]
    pub const fn new(col: i8, row: i8) -> Coord {
        Coord { col, row }
    }

    /// Whether the coordinate names a cell of the 20×20 grid (edge included).
    #[inline]
    pub fn on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.col) && (0..BOARD_SIZE).contains(&self.row)
    }

    /// Whether the coordinate lies strictly inside the outer edge.
    ///
    /// Selection centers must satisfy this, and a moved stone survives only
    /// if its destination does.
    #[inline]
    pub fn in_interior(self) -> bool {
        (1..BOARD_SIZE - 1).contains(&self.col) && (1..BOARD_SIZE - 1).contains(&self.row)
    }

    /// Row-major index into a flat grid. Only meaningful when `on_board()`.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The same column reflected across the horizontal midline.
    #[inline]
    pub const fn mirrored(self) -> Coord {
        Coord::new(self.col, BOARD_SIZE - 1 - self.row)
    }
}

// Coordinate arithmetic saturates at the i8 bounds. Anything that far out is
// off the grid either way.
impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.col.saturating_add(rhs.col), self.row.saturating_add(rhs.row))
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord::new(self.col.saturating_mul(rhs), self.row.saturating_mul(rhs))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_cell_roundtrip() {
        for player in [Player::Black, Player::White] {
            assert_eq!(player.cell().owner(), Some(player));
        }
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_interior_bounds() {
        assert!(Coord::new(1, 1).in_interior());
        assert!(Coord::new(18, 18).in_interior());
        assert!(!Coord::new(0, 5).in_interior());
        assert!(!Coord::new(5, 19).in_interior());
        assert!(!Coord::new(-1, 5).in_interior());
        assert!(Coord::new(0, 19).on_board());
        assert!(!Coord::new(20, 3).on_board());
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Coord::new(2, 6).mirrored(), Coord::new(2, 13));
        assert_eq!(Coord::new(7, 1).mirrored().mirrored(), Coord::new(7, 1));
    }

    #[test]
    fn test_coord_arithmetic() {
        assert_eq!(Coord::new(3, 4) + Coord::new(-1, 1), Coord::new(2, 5));
        assert_eq!(Coord::new(1, -1) * 3, Coord::new(3, -3));
    }

    #[test]
    fn test_coord_arithmetic_saturates() {
        assert_eq!(
            Coord::new(127, -128) + Coord::new(1, -1),
            Coord::new(127, -128)
        );
        assert_eq!(Coord::new(1, -1) * 127 * 2, Coord::new(127, -128));
        assert!(!(Coord::new(120, 0) + Coord::new(100, 0)).on_board());
    }
}

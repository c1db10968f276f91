//! Pieces: a selection together with the mover's stones inside it.
//!
//! # Direction layout
//!
//! ```text
//!   UL  U  UR        (-1,+1) (0,+1) (+1,+1)
//!   L   C  R    =    (-1, 0) (0, 0) (+1, 0)
//!   DL  D  DR        (-1,-1) (0,-1) (+1,-1)
//! ```
//!
//! A stone on a perimeter cell lets the piece move in that direction. A
//! stone on the center cell lifts the three-cell range limit.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::selection::Selection;

/// One of the 9 cells of a footprint, named by its compass position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    DownLeft = 0,
    Left = 1,
    UpLeft = 2,
    Down = 3,
    Center = 4,
    Up = 5,
    DownRight = 6,
    Right = 7,
    UpRight = 8,
}

impl Direction {
    /// All directions in footprint order.
    pub const ALL: [Direction; 9] = [
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::Down,
        Direction::Center,
        Direction::Up,
        Direction::DownRight,
        Direction::Right,
        Direction::UpRight,
    ];

    /// Relative position of this cell from the footprint center.
    pub const fn offset(self) -> Coord {
        match self {
            Direction::DownLeft => Coord::new(-1, -1),
            Direction::Left => Coord::new(-1, 0),
            Direction::UpLeft => Coord::new(-1, 1),
            Direction::Down => Coord::new(0, -1),
            Direction::Center => Coord::new(0, 0),
            Direction::Up => Coord::new(0, 1),
            Direction::DownRight => Coord::new(1, -1),
            Direction::Right => Coord::new(1, 0),
            Direction::UpRight => Coord::new(1, 1),
        }
    }

    /// Inverse of [`Direction::offset`].
    pub fn from_offset(col: i8, row: i8) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.offset() == Coord::new(col, row))
    }

    /// Short compass label (`"UL"`, `"C"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Direction::DownLeft => "DL",
            Direction::Left => "L",
            Direction::UpLeft => "UL",
            Direction::Down => "D",
            Direction::Center => "C",
            Direction::Up => "U",
            Direction::DownRight => "DR",
            Direction::Right => "R",
            Direction::UpRight => "UR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of directions packed into 9 bits (bit i = `Direction::ALL[i]`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u16);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= 1 << dir as u16;
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & (1 << dir as u16) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when the center is the only member.
    #[inline]
    pub fn is_center_only(self) -> bool {
        self.0 == 1 << Direction::Center as u16
    }

    /// Members in footprint order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.contains(dir))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::EMPTY;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Direction::label)).finish()
    }
}

/// A selection specialised to the stones one player holds inside it.
///
/// Built from a snapshot of the mover's registry at move start; it does not
/// track later board changes.
#[derive(Clone, Debug)]
pub struct Piece {
    selection: Selection,
    contained: Vec<Coord>,
    directions: DirectionSet,
}

impl Piece {
    pub fn new(center: Coord, own_stones: &BTreeSet<Coord>) -> Piece {
        let selection = Selection::new(center);
        let mut contained = Vec::with_capacity(9);
        let mut directions = DirectionSet::EMPTY;

        for (dir, coord) in Direction::ALL.into_iter().zip(selection.footprint()) {
            if own_stones.contains(&coord) {
                contained.push(coord);
                directions.insert(dir);
            }
        }

        Piece {
            selection,
            contained,
            directions,
        }
    }

    #[inline]
    pub fn center(&self) -> Coord {
        self.selection.center()
    }

    /// Footprint cells holding one of the mover's stones.
    pub fn contained_stones(&self) -> &[Coord] {
        &self.contained
    }

    /// Whether `coord` is one of the stones that moves with this piece.
    pub fn contains(&self, coord: Coord) -> bool {
        self.contained.contains(&coord)
    }

    /// Directions this piece may move in: those whose footprint cell is
    /// occupied. A present [`Direction::Center`] marks unlimited range.
    #[inline]
    pub fn legal_directions(&self) -> DirectionSet {
        self.directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stones(coords: &[(i8, i8)]) -> BTreeSet<Coord> {
        coords.iter().map(|&(c, r)| Coord::new(c, r)).collect()
    }

    #[test]
    fn test_offsets_cover_the_window() {
        let offsets: BTreeSet<Coord> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets.len(), 9);
        for dir in Direction::ALL {
            let o = dir.offset();
            assert_eq!(Direction::from_offset(o.col, o.row), Some(dir));
        }
        assert_eq!(Direction::from_offset(2, 0), None);
    }

    #[test]
    fn test_direction_set_basics() {
        let mut set = DirectionSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Direction::Up);
        set.insert(Direction::Center);
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.len(), 2);
        assert!(!set.is_center_only());
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Direction::Center, Direction::Up]
        );

        let center: DirectionSet = [Direction::Center].into_iter().collect();
        assert!(center.is_center_only());
    }

    #[test]
    fn test_piece_contained_stones_and_directions() {
        // Stones at U, R and C of a piece centered on (5,5), plus one outside.
        let own = stones(&[(5, 6), (6, 5), (5, 5), (9, 9)]);
        let piece = Piece::new(Coord::new(5, 5), &own);

        assert_eq!(piece.contained_stones().len(), 3);
        assert!(piece.contains(Coord::new(5, 6)));
        assert!(!piece.contains(Coord::new(9, 9)));

        let dirs = piece.legal_directions();
        assert!(dirs.contains(Direction::Up));
        assert!(dirs.contains(Direction::Right));
        assert!(dirs.contains(Direction::Center));
        assert!(!dirs.contains(Direction::Left));
        assert_eq!(dirs.len(), 3);
    }

    #[test]
    fn test_empty_piece_has_no_directions() {
        let own = stones(&[(1, 1)]);
        let piece = Piece::new(Coord::new(10, 10), &own);
        assert!(piece.contained_stones().is_empty());
        assert!(piece.legal_directions().is_empty());
    }

    #[test]
    fn test_direction_labels() {
        let labels: Vec<&str> = Direction::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["DL", "L", "UL", "D", "C", "U", "DR", "R", "UR"]);
    }
}

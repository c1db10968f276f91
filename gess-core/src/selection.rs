//! 3×3 windows of the grid.

use crate::coord::Coord;
use crate::piece::Direction;

/// A 3×3 window identified by its center cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Selection {
    center: Coord,
}

impl Selection {
    #[inline]
    pub fn new(center: Coord) -> Selection {
        Selection { center }
    }

    #[inline]
    pub fn center(self) -> Coord {
        self.center
    }

    /// The 9 cells of the window, in [`Direction::ALL`] order.
    pub fn footprint(self) -> [Coord; 9] {
        Direction::ALL.map(|dir| self.center + dir.offset())
    }

    /// The center must lie strictly inside the edge, so the footprint never
    /// leaves the grid (though it may touch the edge).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.center.in_interior()
    }
}

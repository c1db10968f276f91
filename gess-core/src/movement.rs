//! Direction, range and path checks for a requested move.
//!
//! Everything here is a pure function of the board and the moving piece;
//! nothing is mutated.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece::{Direction, DirectionSet, Piece};
use crate::selection::Selection;

/// Furthest a piece without a center stone may travel.
pub const LIMITED_RANGE: u8 = 3;

/// Range of a piece with a center stone. Larger than any slide on the board.
pub const UNBOUNDED_RANGE: u8 = 99;

/// A straight-line displacement of a selection center.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Slide {
    pub direction: Direction,
    pub distance: u8,
}

impl Slide {
    /// Interpret `end - start` as a slide.
    ///
    /// Returns None for a zero displacement or one that is not purely
    /// horizontal, vertical or exactly diagonal.
    pub fn between(start: Coord, end: Coord) -> Option<Slide> {
        // Widened so any pair of i8 coordinates subtracts without overflow.
        let dc = i16::from(end.col) - i16::from(start.col);
        let dr = i16::from(end.row) - i16::from(start.row);
        if (dc, dr) == (0, 0) {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        let direction = Direction::from_offset(dc.signum() as i8, dr.signum() as i8)?;
        let distance = u8::try_from(dc.unsigned_abs().max(dr.unsigned_abs())).ok()?;
        Some(Slide {
            direction,
            distance,
        })
    }

    /// Center reached after `step` unit moves from `start`.
    #[inline]
    pub fn center_at(self, start: Coord, step: u8) -> Coord {
        start + self.direction.offset() * i8::try_from(step).unwrap_or(i8::MAX)
    }
}

/// How far a piece with these directions may travel.
#[inline]
pub fn max_range(directions: DirectionSet) -> u8 {
    if directions.contains(Direction::Center) {
        UNBOUNDED_RANGE
    } else {
        LIMITED_RANGE
    }
}

/// Check that `piece` may slide from its center to `end`.
///
/// Rejects a lone center stone and any non-line displacement with
/// `NoLegalDirection`, and a direction the piece lacks or a distance beyond
/// its range with `DirectionOrRangeDisallowed`.
pub fn check_direction_range(piece: &Piece, end: Coord) -> Result<Slide, MoveError> {
    let directions = piece.legal_directions();
    if directions.is_center_only() {
        return Err(MoveError::NoLegalDirection);
    }
    let range = max_range(directions);

    let slide = Slide::between(piece.center(), end).ok_or(MoveError::NoLegalDirection)?;
    if !directions.contains(slide.direction) || slide.distance > range {
        return Err(MoveError::DirectionOrRangeDisallowed {
            direction: slide.direction,
            distance: slide.distance,
        });
    }
    Ok(slide)
}

/// First stationary stone met before the piece reaches its destination.
///
/// Every intermediate footprint (steps `1..distance`) is scanned; any stone
/// not travelling with the piece blocks it. The destination footprint itself
/// is never checked, since stones there are captured.
pub fn first_collision(board: &Board, piece: &Piece, slide: Slide) -> Option<Coord> {
    (1..slide.distance)
        .map(|step| Selection::new(slide.center_at(piece.center(), step)))
        .flat_map(|sel| sel.footprint())
        .find(|&cell| board.owner(cell).is_some() && !piece.contains(cell))
}

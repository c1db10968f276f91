//! Rejection reasons.

use thiserror::Error;

use crate::coord::Coord;
use crate::piece::Direction;

/// Why a move attempt was refused.
///
/// Every rejection leaves the game exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameAlreadyOver,

    /// A center outside the playable interior, or a start footprint that
    /// holds an opponent stone or none of the mover's stones.
    #[error("invalid selection at {0}")]
    InvalidSelection(Coord),

    /// Lone center stone, or a displacement that is not a straight or
    /// diagonal line.
    #[error("piece has no legal direction for this move")]
    NoLegalDirection,

    #[error("piece cannot move {distance} toward {direction}")]
    DirectionOrRangeDisallowed { direction: Direction, distance: u8 },

    #[error("path blocked by stone at {0}")]
    PathBlocked(Coord),

    /// The move would leave the mover without a ring; it has been undone.
    #[error("move leaves the mover without a ring")]
    SelfRingLoss,
}

/// Why a saved position could not be turned back into a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("stone at {0} lies off the board")]
    OutOfBounds(Coord),

    #[error("cell {0} is claimed by both players")]
    Overlap(Coord),
}

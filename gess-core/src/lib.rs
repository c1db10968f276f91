//! Gess rules engine.
//!
//! Gess is played on a 20×20 grid with 43 stones per side. A move picks up
//! every stone the mover has inside a 3×3 window (a *piece*) and slides the
//! window in a straight line. Which perimeter cells are occupied decides
//! which way the piece may go; a stone on the center lifts the three-cell
//! range limit. A player with no *ring* (8 stones around an empty center)
//! has lost.
//!
//! # Coordinates
//!
//! ```text
//! row 19  ┌────────────────────┐   White's home edge
//!         │ .................. │
//!         │ .   interior     . │   centers: columns/rows 1..=18
//!         │ .................. │
//! row 0   └────────────────────┘   Black's home edge
//!         col 0            col 19
//! ```
//!
//! Coordinates are zero-indexed `(column, row)` pairs. Textual notation
//! ("c3" and friends) is left to callers.
//!
//! # Engine API
//!
//! [`GessGame`] owns the board and is the only thing that mutates it:
//! [`GessGame::make_move`], [`GessGame::resign`], plus read-only accessors.

pub mod board;
pub mod coord;
pub mod error;
pub mod game;
pub mod layout;
pub mod movement;
pub mod piece;
pub mod ring;
pub mod selection;
pub mod snapshot;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::{Board, Registries};
pub use coord::{Cell, Coord, Player, BOARD_SIZE};
pub use error::{MoveError, SnapshotError};
pub use game::{GameState, GessGame, MoveSummary};
pub use movement::Slide;
pub use piece::{Direction, DirectionSet, Piece};
pub use selection::Selection;
pub use snapshot::GameSnapshot;

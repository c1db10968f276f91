//! The game state machine and the move-attempt protocol.
//!
//! A call to [`GessGame::make_move`] runs to completion in one go:
//!
//! ```text
//! validate ──reject──▶ Err (nothing touched)
//!    │
//!    ▼
//! lift piece, clear destination, drop piece
//!    │
//!    ├─ mover has no ring ──▶ restore backup, Err(SelfRingLoss)
//!    ├─ opponent has no ring ─▶ game over, Ok
//!    └─ otherwise ───────────▶ switch player, Ok
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::coord::{Coord, Player};
use crate::error::MoveError;
use crate::layout;
use crate::movement::{self, Slide};
use crate::piece::Piece;
use crate::ring;
use crate::selection::Selection;

/// Overall game status. Terminal once won.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    BlackWon,
    WhiteWon,
}

impl GameState {
    /// The state in which `player` has won.
    pub fn won_by(player: Player) -> GameState {
        match player {
            Player::Black => GameState::BlackWon,
            Player::White => GameState::WhiteWon,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::InProgress => None,
            GameState::BlackWon => Some(Player::Black),
            GameState::WhiteWon => Some(Player::White),
        }
    }
}

/// What an accepted move did to the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveSummary {
    pub slide: Slide,
    /// Opponent stones removed from the destination footprint.
    pub captured: u8,
    /// The mover's own stationary stones removed from the destination footprint.
    pub cleared_own: u8,
    /// Moving stones that landed on the edge and were destroyed.
    pub lost_off_edge: u8,
    /// Game state after the move.
    pub state: GameState,
}

/// A game of Gess.
#[derive(Clone, Debug)]
pub struct GessGame {
    board: Board,
    current: Player,
    state: GameState,
}

impl GessGame {
    /// A new game in the opening position, Black to move.
    pub fn new() -> GessGame {
        GessGame {
            board: layout::opening_board(),
            current: Player::Black,
            state: GameState::InProgress,
        }
    }

    pub(crate) fn from_parts(board: Board, current: Player, state: GameState) -> GessGame {
        GessGame {
            board,
            current,
            state,
        }
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn black_stones(&self) -> Vec<Coord> {
        self.board.stones(Player::Black).iter().copied().collect()
    }

    pub fn white_stones(&self) -> Vec<Coord> {
        self.board.stones(Player::White).iter().copied().collect()
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn opponent_player(&self) -> Player {
        self.current.opponent()
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// The player to move gives up; the other player wins whatever the
    /// board shows. Has no effect once the game is over.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn resign(&mut self) {
        if self.state.is_over() {
            debug!(state = ?self.state, "resign ignored, game already over");
            return;
        }
        self.state = GameState::won_by(self.current.opponent());
        info!(state = ?self.state, "player resigned");
    }

    /// Move the piece centered on `start` so that it is centered on `end`.
    ///
    /// On `Err` the board, current player and game state are unchanged.
    #[instrument(level = "debug", skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, start: Coord, end: Coord) -> Result<MoveSummary, MoveError> {
        let (piece, slide) = self.validate(start, end).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        let mover = self.current;
        let opponent = mover.opponent();
        let backup = self.board.registries();

        let mut summary = MoveSummary {
            slide,
            captured: 0,
            cleared_own: 0,
            lost_off_edge: 0,
            state: self.state,
        };

        // Lift the piece before clearing the destination: the two
        // footprints overlap on short slides.
        for &stone in piece.contained_stones() {
            self.board.remove(stone, mover);
        }

        for cell in Selection::new(end).footprint() {
            match self.board.owner(cell) {
                Some(owner) if owner == mover => {
                    self.board.remove(cell, mover);
                    summary.cleared_own += 1;
                }
                Some(owner) => {
                    self.board.remove(cell, owner);
                    summary.captured += 1;
                }
                None => {}
            }
        }

        for dir in piece.legal_directions().iter() {
            let target = end + dir.offset();
            if target.in_interior() {
                self.board.place(target, mover);
            } else {
                summary.lost_off_edge += 1;
            }
        }

        if !ring::has_ring(self.board.stones(mover)) {
            self.board.restore(&backup);
            debug!("move would lose the mover's last ring, rolled back");
            return Err(MoveError::SelfRingLoss);
        }

        if !ring::has_ring(self.board.stones(opponent)) {
            self.state = GameState::won_by(mover);
            summary.state = self.state;
            info!(winner = %mover, "opponent has no ring left");
            return Ok(summary);
        }

        self.current = opponent;
        debug!(
            captured = summary.captured,
            lost = summary.lost_off_edge,
            "move accepted"
        );
        Ok(summary)
    }

    /// Run every check that can be made without touching the board.
    fn validate(&self, start: Coord, end: Coord) -> Result<(Piece, Slide), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        for center in [start, end] {
            if !Selection::new(center).is_valid() {
                return Err(MoveError::InvalidSelection(center));
            }
        }

        let opponent = self.current.opponent();
        if Selection::new(start)
            .footprint()
            .iter()
            .any(|&cell| self.board.owns(opponent, cell))
        {
            return Err(MoveError::InvalidSelection(start));
        }

        let piece = Piece::new(start, self.board.stones(self.current));
        if piece.contained_stones().is_empty() {
            return Err(MoveError::InvalidSelection(start));
        }

        let slide = movement::check_direction_range(&piece, end)?;

        if let Some(blocker) = movement::first_collision(&self.board, &piece, slide) {
            return Err(MoveError::PathBlocked(blocker));
        }

        Ok((piece, slide))
    }
}

impl Default for GessGame {
    fn default() -> Self {
        Self::new()
    }
}

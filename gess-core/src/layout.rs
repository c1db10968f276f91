//! Starting position.

use crate::board::Board;
use crate::coord::{Coord, Player};

/// Number of stones each side starts with.
pub const STONES_PER_SIDE: usize = 43;

/// Black's opening stones. White's are these mirrored top to bottom.
///
/// In board notation: b3 c2 c3 c4 c7 d3 e2 e4 f3 f7 g2 g4 h2 h3 h4 i2 i3 i4
/// i7 j2 j3 j4 k2 k3 k4 l2 l4 l7 m2 m3 m4 n2 n4 o3 o7 p2 p4 q3 r2 r3 r4 r7 s3.
const BLACK_OPENING: [Coord; STONES_PER_SIDE] = [
    Coord::new(1, 2),
    Coord::new(2, 1),
    Coord::new(2, 2),
    Coord::new(2, 3),
    Coord::new(2, 6),
    Coord::new(3, 2),
    Coord::new(4, 1),
    Coord::new(4, 3),
    Coord::new(5, 2),
    Coord::new(5, 6),
    Coord::new(6, 1),
    Coord::new(6, 3),
    Coord::new(7, 1),
    Coord::new(7, 2),
    Coord::new(7, 3),
    Coord::new(8, 1),
    Coord::new(8, 2),
    Coord::new(8, 3),
    Coord::new(8, 6),
    Coord::new(9, 1),
    Coord::new(9, 2),
    Coord::new(9, 3),
    Coord::new(10, 1),
    Coord::new(10, 2),
    Coord::new(10, 3),
    Coord::new(11, 1),
    Coord::new(11, 3),
    Coord::new(11, 6),
    Coord::new(12, 1),
    Coord::new(12, 2),
    Coord::new(12, 3),
    Coord::new(13, 1),
    Coord::new(13, 3),
    Coord::new(14, 2),
    Coord::new(14, 6),
    Coord::new(15, 1),
    Coord::new(15, 3),
    Coord::new(16, 2),
    Coord::new(17, 1),
    Coord::new(17, 2),
    Coord::new(17, 3),
    Coord::new(17, 6),
    Coord::new(18, 2),
];

/// A board set up for the start of a game.
pub fn opening_board() -> Board {
    let mut board = Board::new();
    for coord in BLACK_OPENING {
        board.place(coord, Player::Black);
        board.place(coord.mirrored(), Player::White);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Cell;
    use crate::ring;

    #[test]
    fn test_opening_counts() {
        let board = opening_board();
        assert_eq!(board.stone_count(Player::Black), STONES_PER_SIDE);
        assert_eq!(board.stone_count(Player::White), STONES_PER_SIDE);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_opening_sample_cells() {
        let board = opening_board();
        assert_eq!(board.cell(Coord::new(1, 2)), Cell::Black); // b3
        assert_eq!(board.cell(Coord::new(2, 6)), Cell::Black); // c7
        assert_eq!(board.cell(Coord::new(1, 17)), Cell::White); // b18
        assert_eq!(board.cell(Coord::new(2, 13)), Cell::White); // c14
        assert_eq!(board.cell(Coord::new(11, 2)), Cell::Empty); // l3, ring center
        assert_eq!(board.cell(Coord::new(10, 10)), Cell::Empty);
    }

    #[test]
    fn test_opening_stones_inside_interior() {
        let board = opening_board();
        for player in [Player::Black, Player::White] {
            assert!(board.stones(player).iter().all(|c| c.in_interior()));
        }
    }

    #[test]
    fn test_each_side_starts_with_one_ring() {
        let board = opening_board();
        assert_eq!(
            ring::find_ring(board.stones(Player::Black)),
            Some(Coord::new(10, 1))
        );
        assert_eq!(
            ring::find_ring(board.stones(Player::White)),
            Some(Coord::new(10, 16))
        );
    }
}

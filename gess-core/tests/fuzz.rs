//! Random play against the engine's invariants.

use rand::prelude::*;

use gess_core::{Coord, Direction, GameState, GessGame, Player};

/// A move attempt biased toward plausible moves: the start is near one of
/// the mover's stones and the end lies along one of the eight lines.
fn random_attempt(rng: &mut impl Rng, game: &GessGame) -> (Coord, Coord) {
    let stones = match game.current_player() {
        Player::Black => game.black_stones(),
        Player::White => game.white_stones(),
    };
    let anchor = stones[rng.random_range(0..stones.len())];
    let start = anchor + Coord::new(rng.random_range(-1..=1), rng.random_range(-1..=1));

    if rng.random_bool(0.1) {
        // Anything at all, including off-board coordinates.
        let end = Coord::new(rng.random_range(-3..23), rng.random_range(-3..23));
        return (start, end);
    }
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let distance = rng.random_range(1..=8);
    (start, start + direction.offset() * distance)
}

#[test]
fn test_fuzz_invariants() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let mut game = GessGame::new();

        for _ in 0..400 {
            let before = game.clone();
            let (start, end) = random_attempt(&mut rng, &game);

            match game.make_move(start, end) {
                Ok(summary) => {
                    assert_eq!(summary.state, game.game_state());
                    if game.game_state().is_over() {
                        assert_eq!(game.current_player(), before.current_player());
                    } else {
                        assert_eq!(game.current_player(), before.current_player().opponent());
                    }
                }
                Err(_) => {
                    assert_eq!(game.board().registries(), before.board().registries());
                    assert_eq!(game.current_player(), before.current_player());
                    assert_eq!(game.game_state(), before.game_state());
                }
            }

            assert!(game.board().is_consistent());
            assert!(game.black_stones().len() <= 43);
            assert!(game.white_stones().len() <= 43);
            if before.game_state().is_over() {
                assert_eq!(game.game_state(), before.game_state());
            }
            if game.game_state() != GameState::InProgress {
                break;
            }
        }
    }
}

#[test]
fn test_fuzz_snapshot_restores_play() {
    let mut rng = rand::rng();
    let mut game = GessGame::new();

    for _ in 0..200 {
        let (start, end) = random_attempt(&mut rng, &game);
        let _ = game.make_move(start, end);
        if game.game_state().is_over() {
            break;
        }
    }

    let mut restored = GessGame::from_snapshot(&game.snapshot()).unwrap();
    assert_eq!(restored.board().registries(), game.board().registries());

    // Both copies must answer every attempt the same way.
    for _ in 0..200 {
        let (start, end) = random_attempt(&mut rng, &game);
        let a = game.make_move(start, end).map(|s| s.state);
        let b = restored.make_move(start, end).map(|s| s.state);
        assert_eq!(a, b);
        assert_eq!(restored.board().registries(), game.board().registries());
    }
}

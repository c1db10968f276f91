//! Binary save file for a game in progress.
//!
//! Format:
//! - Header (24 bytes):
//!   - Magic: "GESS" (4 bytes)
//!   - Version: u32 LE (4 bytes)
//!   - Black stone count: u16 LE (2 bytes)
//!   - White stone count: u16 LE (2 bytes)
//!   - Player to move: u8, 1 = black, 2 = white
//!   - Game state: u8, 0 = in progress, 1 = black won, 2 = white won
//!   - Reserved: 2 bytes (zeros)
//!   - Checksum: u64 LE xxhash of data section (8 bytes)
//! - Data section ((black + white) × 2 bytes):
//!   - Column: i8, Row: i8
//!
//! Black stones come first, each colour in ascending (column, row) order.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use gess_core::{Coord, GameSnapshot, GameState, GessGame, Player};
use tracing::debug;
use xxhash_rust::xxh64::xxh64;

const MAGIC: &[u8; 4] = b"GESS";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 24;
const STONE_SIZE: usize = 2;

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn state_byte(state: GameState) -> u8 {
    match state {
        GameState::InProgress => 0,
        GameState::BlackWon => 1,
        GameState::WhiteWon => 2,
    }
}

fn state_from_byte(byte: u8) -> Option<GameState> {
    match byte {
        0 => Some(GameState::InProgress),
        1 => Some(GameState::BlackWon),
        2 => Some(GameState::WhiteWon),
        _ => None,
    }
}

/// Write `game` to `path`, replacing any previous save. Returns the number
/// of stones written.
pub fn save(path: &Path, game: &GessGame) -> io::Result<usize> {
    let snapshot = game.snapshot();
    let count = snapshot.black.len() + snapshot.white.len();

    let mut data = Vec::with_capacity(count * STONE_SIZE);
    for stone in snapshot.black.iter().chain(&snapshot.white) {
        data.push(stone.col as u8);
        data.push(stone.row as u8);
    }
    let checksum = xxh64(&data, 0);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(MAGIC)?;
    writer.write_all(&VERSION.to_le_bytes())?;
    writer.write_all(&(snapshot.black.len() as u16).to_le_bytes())?;
    writer.write_all(&(snapshot.white.len() as u16).to_le_bytes())?;
    writer.write_all(&[
        snapshot.current_player as u8,
        state_byte(snapshot.state),
        0,
        0,
    ])?;
    writer.write_all(&checksum.to_le_bytes())?;

    writer.write_all(&data)?;
    writer.flush()?;

    debug!(path = %path.display(), stones = count, "game saved");
    Ok(count)
}

/// Read a game back from `path`.
pub fn load(path: &Path) -> io::Result<GessGame> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    if &header[0..4] != MAGIC {
        return Err(invalid("Invalid save file magic"));
    }

    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if version != VERSION {
        return Err(invalid(format!("Unsupported save file version: {version}")));
    }

    let black_count = u16::from_le_bytes([header[8], header[9]]) as usize;
    let white_count = u16::from_le_bytes([header[10], header[11]]) as usize;
    let current_player = Player::from_bits(header[12])
        .ok_or_else(|| invalid(format!("Invalid player byte: {}", header[12])))?;
    let state = state_from_byte(header[13])
        .ok_or_else(|| invalid(format!("Invalid game state byte: {}", header[13])))?;

    let mut checksum_bytes = [0u8; 8];
    checksum_bytes.copy_from_slice(&header[16..24]);
    let stored_checksum = u64::from_le_bytes(checksum_bytes);

    let mut data = vec![0u8; (black_count + white_count) * STONE_SIZE];
    reader.read_exact(&mut data)?;

    if xxh64(&data, 0) != stored_checksum {
        return Err(invalid("Save file checksum mismatch"));
    }

    let mut stones = data
        .chunks_exact(STONE_SIZE)
        .map(|pair| Coord::new(pair[0] as i8, pair[1] as i8));
    let black: Vec<Coord> = stones.by_ref().take(black_count).collect();
    let white: Vec<Coord> = stones.collect();

    let snapshot = GameSnapshot {
        black,
        white,
        current_player,
        state,
    };
    GessGame::from_snapshot(&snapshot).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gess_{}_{}.bin", name, std::process::id()))
    }

    #[test]
    fn test_save_roundtrip() {
        let path = temp_path("roundtrip");

        let mut game = GessGame::new();
        game.make_move(Coord::new(2, 2), Coord::new(2, 5)).unwrap();
        game.make_move(Coord::new(17, 17), Coord::new(17, 14))
            .unwrap();

        let saved = save(&path, &game).unwrap();
        assert_eq!(saved, 84);

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.snapshot(), game.snapshot());
        assert_eq!(loaded.current_player(), Player::Black);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_finished_game_roundtrip() {
        let path = temp_path("finished");

        let mut game = GessGame::new();
        game.resign();
        save(&path, &game).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.game_state(), GameState::WhiteWon);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_checksum_mismatch_rejected() {
        let path = temp_path("corrupt");
        save(&path, &GessGame::new()).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        std::fs::write(&path, &bytes).unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("checksum"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bad_magic_rejected() {
        let path = temp_path("magic");
        std::fs::write(&path, [0u8; HEADER_SIZE]).unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        std::fs::remove_file(&path).ok();
    }
}

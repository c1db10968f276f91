//! WASM bindings for gess-core
//!
//! Provides a JavaScript-friendly API for the game logic.

use wasm_bindgen::prelude::*;

use crate::{Coord, GameSnapshot, GameState, GessGame, Player};

/// WASM-friendly wrapper around GessGame
#[wasm_bindgen]
pub struct WasmGame {
    inner: GessGame,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game in the opening position
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            inner: GessGame::new(),
        }
    }

    /// Try a move. Returns "ok" or the rejection reason.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, start_col: i8, start_row: i8, end_col: i8, end_row: i8) -> String {
        let start = Coord::new(start_col, start_row);
        let end = Coord::new(end_col, end_row);
        match self.inner.make_move(start, end) {
            Ok(_) => "ok".to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Black stones as an array of [col, row]
    #[wasm_bindgen(js_name = blackStones)]
    pub fn black_stones(&self) -> Result<JsValue, JsValue> {
        stones_to_js(&self.inner.black_stones())
    }

    /// White stones as an array of [col, row]
    #[wasm_bindgen(js_name = whiteStones)]
    pub fn white_stones(&self) -> Result<JsValue, JsValue> {
        stones_to_js(&self.inner.white_stones())
    }

    /// Current player (1 = black, 2 = white)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player() as u8
    }

    /// Game state: "UNFINISHED", "BLACK_WON" or "WHITE_WON"
    #[wasm_bindgen(js_name = gameState)]
    pub fn game_state(&self) -> String {
        match self.inner.game_state() {
            GameState::InProgress => "UNFINISHED".to_string(),
            GameState::BlackWon => "BLACK_WON".to_string(),
            GameState::WhiteWon => "WHITE_WON".to_string(),
        }
    }

    /// Current player resigns
    pub fn resign(&mut self) {
        self.inner.resign();
    }

    /// Serialise the position as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Resume a game from `snapshotJson` output
    #[wasm_bindgen(js_name = fromSnapshotJson)]
    pub fn from_snapshot_json(json: &str) -> Result<WasmGame, JsValue> {
        let snapshot: GameSnapshot =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner =
            GessGame::from_snapshot(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { inner })
    }

    /// Owner of a cell: 0 (empty), 1 (black) or 2 (white)
    #[wasm_bindgen(js_name = cellOwner)]
    pub fn cell_owner(&self, col: i8, row: i8) -> u8 {
        self.inner
            .board()
            .owner(Coord::new(col, row))
            .map_or(0, |p: Player| p as u8)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn stones_to_js(stones: &[Coord]) -> Result<JsValue, JsValue> {
    let pairs: Vec<[i8; 2]> = stones.iter().map(|c| [c.col, c.row]).collect();
    serde_wasm_bindgen::to_value(&pairs).map_err(|e| JsValue::from_str(&e.to_string()))
}

/*
* Copyright (C) 2025-2026  Henrique Almeida
* This file is part of LightsOut-WASM.
*
* LightsOut-WASM is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* LightsOut-WASM is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with LightsOut-WASM.  If not, see <https://www.gnu.org/licenses/>.
*/


//! Lights Out solver and game session, compiled to WebAssembly for the
//! puzzle front end.

pub mod board;
pub mod error;
pub mod game;
pub mod generate;
pub mod solver;
pub mod types;

use crate::board::Board;
use crate::game::LightsGame;
use crate::types::Cell;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Serialises with `null` for `None` and plain objects for structs.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

fn board_from_js(board: JsValue) -> Result<Board, JsError> {
    Ok(serde_wasm_bindgen::from_value(board)?)
}

/// Takes a `boolean[5][5]` grid and returns the next cell to press as
/// `{ row, col }`, or `null` when the board is dark or unsolvable.
#[wasm_bindgen]
pub fn next_light_move(board: JsValue) -> Result<JsValue, JsError> {
    let board = board_from_js(board)?;
    to_js(&solver::next_move(&board))
}

/// Returns every press of the solution for the grid, or `null` when the
/// grid can't be solved.
#[wasm_bindgen]
pub fn solve_lights(board: JsValue) -> Result<JsValue, JsError> {
    let board = board_from_js(board)?;
    let presses = solver::solve(&board).map(|solution| solution.presses().collect::<Vec<Cell>>());
    to_js(&presses)
}

/// A freshly scrambled, solvable `boolean[5][5]` grid.
#[wasm_bindgen]
pub fn scramble_lights() -> Result<JsValue, JsError> {
    to_js(&generate::scramble())
}

/// A Lights Out session owned by the front end.
#[wasm_bindgen]
pub struct LightsOutGame {
    inner: LightsGame,
}

impl Default for LightsOutGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LightsOutGame {
    /// Starts on a scrambled board.
    #[wasm_bindgen(constructor)]
    pub fn new() -> LightsOutGame {
        let mut inner = LightsGame::new();
        inner.scramble();
        LightsOutGame { inner }
    }

    pub fn scramble(&mut self) {
        self.inner.scramble();
    }

    /// Returns `{ solved, hint }`.
    pub fn press(&mut self, row: usize, col: usize) -> Result<JsValue, JsError> {
        let outcome = self.inner.press(row, col)?;
        to_js(&outcome)
    }

    /// Returns `{ kind, cell? }`, see [`game::HintView`].
    #[wasm_bindgen(js_name = toggleHintView)]
    pub fn toggle_hint_view(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.inner.toggle_hint_view())
    }

    pub fn board(&self) -> Result<JsValue, JsError> {
        to_js(self.inner.board())
    }

    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.inner.is_won()
    }

    #[wasm_bindgen(js_name = isShowingHint)]
    pub fn is_showing_hint(&self) -> bool {
        self.inner.is_showing_hint()
    }
}

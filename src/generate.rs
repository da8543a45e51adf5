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


use crate::board::{Board, CELLS};
use crate::types::Cell;
use rand::{Rng, rng};

/// Fewest random presses applied when scrambling.
pub const MIN_SCRAMBLE_PRESSES: usize = 5;
/// Most random presses applied when scrambling.
pub const MAX_SCRAMBLE_PRESSES: usize = 12;

/// Scrambles an all-off board by pressing random cells.
///
/// Only presses are applied, so the result is always solvable. Repeated
/// cells are allowed and cancel out, which means a scramble can come back
/// fully dark.
pub fn scramble_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let presses = rng.random_range(MIN_SCRAMBLE_PRESSES..=MAX_SCRAMBLE_PRESSES);
    let mut board = Board::new();
    for _ in 0..presses {
        board.toggle(Cell::from_index(rng.random_range(0..CELLS)));
    }
    log::debug!("scrambled board {:#09x} with {presses} presses", board.to_mask());
    board
}

/// [`scramble_with`] using the thread-local generator.
pub fn scramble() -> Board {
    scramble_with(&mut rng())
}

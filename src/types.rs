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


use crate::board::{Board, CELLS, SIZE};
use serde::{Deserialize, Serialize};

/// A board coordinate. `(0, 0)` is the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Returns the cell, or `None` if it lies outside the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Cell { row, col })
    }

    /// Row-major position of the cell, `row * SIZE + col`.
    #[inline]
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Inverse of [`Cell::index`]. Panics in debug builds if `index >= CELLS`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELLS, "cell index {index} out of range");
        Cell {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELLS).map(Cell::from_index)
    }

    /// The cell itself followed by its in-bounds orthogonal neighbours.
    pub fn neighborhood(self) -> impl Iterator<Item = Cell> {
        const DIRECTIONS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Cell::new(row, col)
        })
    }
}

/// One bit per cell, set when the cell is part of the press set.
///
/// Bit `i` corresponds to [`Cell::from_index(i)`](Cell::from_index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solution {
    bits: u32,
}

impl Solution {
    pub(crate) fn from_bits(bits: u32) -> Self {
        debug_assert_eq!(bits >> CELLS, 0);
        Solution { bits }
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    pub fn is_pressed(self, cell: Cell) -> bool {
        (self.bits >> cell.index()) & 1 == 1
    }

    /// The first marked cell in row-major order.
    pub fn first(self) -> Option<Cell> {
        (self.bits != 0).then(|| Cell::from_index(self.bits.trailing_zeros() as usize))
    }

    /// Marked cells in row-major order.
    pub fn presses(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&cell| self.is_pressed(cell))
    }

    pub fn press_count(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Press every marked cell on a copy of `board`.
    pub fn apply_to(self, board: &Board) -> Board {
        let mut result = *board;
        for cell in self.presses() {
            result.toggle(cell);
        }
        result
    }
}

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


//! Construction of the augmented GF(2) system for a board.
//!
//! Every row of the system is bit-packed into a `u32`: bit `c` for
//! `c < CELLS` is the coefficient of press `c`, and bit `CELLS` is the
//! right-hand side.

use crate::board::{Board, CELLS, FULL_MASK};
use crate::types::Cell;

/// Position of the right-hand-side bit in a packed row.
pub const RHS_COLUMN: usize = CELLS;
pub(crate) const RHS_BIT: u32 = 1 << RHS_COLUMN;
pub(crate) const COEFFICIENT_MASK: u32 = FULL_MASK;

// The influence relation depends only on the board size, so it is computed
// once and shared by every solve.
lazy_static::lazy_static! {
    /// Row `t` has bit `p` set iff pressing cell `p` flips cell `t`.
    pub(crate) static ref INFLUENCE_ROWS: [u32; CELLS] = {
        let mut rows = [0u32; CELLS];
        for (target, row) in rows.iter_mut().enumerate() {
            for press in Cell::all() {
                if affects(press, Cell::from_index(target)) {
                    *row |= 1 << press.index();
                }
            }
        }
        rows
    };
}

/// `true` if pressing `press` flips `target`: the same cell or an
/// orthogonal neighbour.
pub fn affects(press: Cell, target: Cell) -> bool {
    press.row.abs_diff(target.row) + press.col.abs_diff(target.col) <= 1
}

/// A 25 x 26 augmented matrix over GF(2).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AugmentedMatrix {
    pub(crate) rows: [u32; CELLS],
}

impl AugmentedMatrix {
    /// Builds the system whose solutions are the press sets that turn `board` off.
    ///
    /// Row `targetRow * 5 + targetCol`, column `pressRow * 5 + pressCol`.
    pub fn for_board(board: &Board) -> Self {
        let mut rows = *INFLUENCE_ROWS;
        for cell in Cell::all() {
            if board.is_on(cell) {
                rows[cell.index()] |= RHS_BIT;
            }
        }
        AugmentedMatrix { rows }
    }

    /// Wraps raw packed rows. Bits above the right-hand side are discarded.
    pub fn from_rows(rows: [u32; CELLS]) -> Self {
        AugmentedMatrix {
            rows: rows.map(|row| row & (COEFFICIENT_MASK | RHS_BIT)),
        }
    }

    pub fn rows(&self) -> &[u32; CELLS] {
        &self.rows
    }

    /// Entry at (`row`, `col`), where `col == RHS_COLUMN` reads the right-hand side.
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(col <= RHS_COLUMN);
        (self.rows[row] >> col) & 1 == 1
    }

    #[inline]
    pub(crate) fn coefficients(row: u32) -> u32 {
        row & COEFFICIENT_MASK
    }

    #[inline]
    pub(crate) fn rhs(row: u32) -> bool {
        row & RHS_BIT != 0
    }
}

impl std::fmt::Debug for AugmentedMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for col in 0..CELLS {
                write!(f, "{}", (row >> col) & 1)?;
            }
            writeln!(f, " | {}", u8::from(Self::rhs(*row)))?;
        }
        Ok(())
    }
}

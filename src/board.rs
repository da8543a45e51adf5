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


//! The 5x5 Lights Out board and its toggle operation.

use crate::error::BoardParseError;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const SIZE: usize = 5;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Mask with one bit per cell.
pub(crate) const FULL_MASK: u32 = (1 << CELLS) - 1;

/// A Lights Out board. `true` means the light is on.
///
/// Serialises as a plain `boolean[5][5]` so the front end can hand its grid
/// over unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub cells: [[bool; SIZE]; SIZE],
}

impl Board {
    /// The all-off board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[bool; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Builds a board from a bitmask where bit `row * SIZE + col` is the cell state.
    pub fn from_mask(mask: u32) -> Result<Self, BoardParseError> {
        if mask & !FULL_MASK != 0 {
            return Err(BoardParseError::MaskOutOfRange(mask));
        }
        let mut board = Board::new();
        for cell in Cell::all() {
            board.cells[cell.row][cell.col] = (mask >> cell.index()) & 1 == 1;
        }
        Ok(board)
    }

    pub fn to_mask(&self) -> u32 {
        Cell::all()
            .filter(|&cell| self.is_on(cell))
            .fold(0, |mask, cell| mask | (1 << cell.index()))
    }

    #[inline]
    pub fn is_on(&self, cell: Cell) -> bool {
        self.cells[cell.row][cell.col]
    }

    /// Presses `cell`, flipping it and its orthogonal neighbours.
    ///
    /// Neighbours outside the board are ignored, there is no wraparound.
    pub fn toggle(&mut self, cell: Cell) {
        for target in cell.neighborhood() {
            let light = &mut self.cells[target.row][target.col];
            *light = !*light;
        }
    }

    /// Returns a copy of the board with `cell` pressed.
    pub fn toggled(mut self, cell: Cell) -> Self {
        self.toggle(cell);
        self
    }

    /// `true` when every light is off.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().flatten().all(|&on| !on)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&on| on).count()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `SIZE` whitespace-separated rows of `SIZE` characters each.
    /// `#` or `1` is a lit cell, `.` or `0` is a dark one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.into_iter().enumerate() {
            let len = line.chars().count();
            if len != SIZE {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '#' | '1' => true,
                    '.' | '0' => false,
                    _ => return Err(BoardParseError::InvalidChar { ch, row, col }),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &on in row {
                f.write_str(if on { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

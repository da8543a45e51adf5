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


//! Error types for board input and game commands.

use crate::board::SIZE;

/// Raised when a board can't be built from its text or mask form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, found {0}", expected = SIZE)]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected {expected}", expected = SIZE)]
    RowLength { row: usize, len: usize },
    #[error("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },
    #[error("mask {0:#x} has bits set outside the board")]
    MaskOutOfRange(u32),
}

/// Errors raised by game commands.
#[derive(Debug, thiserror::Error)]
pub enum LightsError {
    #[error("the cell ({row}, {col}) is out of bounds, max: ({max}, {max})", max = SIZE - 1)]
    OutOfBounds { row: usize, col: usize },
}

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


//! Lights Out solver.
//!
//! A board is solved by the set of presses `x` satisfying `A x = b` over
//! GF(2), where `A` is the influence matrix and `b` the lit cells. Presses
//! commute and pressing twice is a no-op, so a solution is just a subset of
//! cells.

pub mod gf2;
pub mod matrix;

use crate::board::Board;
use crate::types::{Cell, Solution};
use matrix::AugmentedMatrix;

/// Computes a press set that turns every light off, or `None` if the board
/// is not reachable from the all-off board.
///
/// Free variables are fixed at 0, so this is the row-reduced particular
/// solution and not necessarily the one with the fewest presses.
pub fn solve(board: &Board) -> Option<Solution> {
    let solution = gf2::solve_system(AugmentedMatrix::for_board(board));
    match solution {
        Some(solution) => log::debug!(
            "solved board {:#09x} with {} presses",
            board.to_mask(),
            solution.press_count()
        ),
        None => log::warn!("board {:#09x} is not solvable", board.to_mask()),
    }
    solution
}

/// The first cell, in row-major order, of the solution for `board`.
///
/// Returns `None` when the board is already dark or has no solution.
pub fn next_move(board: &Board) -> Option<Cell> {
    if board.is_solved() {
        return None;
    }
    solve(board)?.first()
}

/// `true` if some press sequence turns the board off.
pub fn is_solvable(board: &Board) -> bool {
    board.is_solved() || solve(board).is_some()
}

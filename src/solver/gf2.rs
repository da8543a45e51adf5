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


//! Gauss-Jordan elimination over GF(2).
//!
//! Addition in GF(2) is XOR and every coefficient is already 0 or 1, so
//! combining two rows is a single XOR of their packed words.

use super::matrix::AugmentedMatrix;
use crate::board::CELLS;
use crate::types::Solution;

/// Reduces `matrix` in place to reduced row-echelon form and returns the
/// number of pivot rows (the rank of the coefficient part).
///
/// Columns are visited left to right. A column with no candidate row at or
/// below the current pivot row is a free variable and does not advance it.
pub fn reduce(matrix: &mut AugmentedMatrix) -> usize {
    let rows = &mut matrix.rows;
    let mut pivot = 0;

    for col in 0..CELLS {
        if pivot == CELLS {
            break;
        }
        let bit = 1u32 << col;
        let Some(found) = (pivot..CELLS).find(|&r| rows[r] & bit != 0) else {
            continue;
        };
        rows.swap(pivot, found);

        // Clear the column everywhere else, above the pivot as well as below.
        let pivot_row = rows[pivot];
        for (r, row) in rows.iter_mut().enumerate() {
            if r != pivot && *row & bit != 0 {
                *row ^= pivot_row;
            }
        }
        pivot += 1;
    }

    pivot
}

/// `false` if a row past the pivots reads `0 = 1`.
pub fn is_consistent(matrix: &AugmentedMatrix, rank: usize) -> bool {
    matrix.rows[rank..]
        .iter()
        .all(|&row| AugmentedMatrix::coefficients(row) != 0 || !AugmentedMatrix::rhs(row))
}

/// Reads the particular solution off a reduced matrix. Free variables are 0.
pub fn back_substitute(matrix: &AugmentedMatrix, rank: usize) -> Solution {
    let mut bits = 0u32;

    // Bottom-up, so every column right of a pivot is already known.
    for &row in matrix.rows[..rank].iter().rev() {
        let coefficients = AugmentedMatrix::coefficients(row);
        if coefficients == 0 {
            continue;
        }
        let lead = coefficients.trailing_zeros();
        let trailing = coefficients & !(1 << lead);
        let parity = (trailing & bits).count_ones() % 2 == 1;
        if AugmentedMatrix::rhs(row) ^ parity {
            bits |= 1 << lead;
        }
    }

    Solution::from_bits(bits)
}

/// Solves the system, or returns `None` if it is inconsistent.
pub fn solve_system(mut matrix: AugmentedMatrix) -> Option<Solution> {
    let rank = reduce(&mut matrix);
    if !is_consistent(&matrix, rank) {
        log::warn!("inconsistent GF(2) system (rank {rank})");
        return None;
    }
    Some(back_substitute(&matrix, rank))
}

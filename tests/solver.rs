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


use lightsout_wasm::board::{Board, CELLS};
use lightsout_wasm::solver::matrix::{AugmentedMatrix, RHS_COLUMN, affects};
use lightsout_wasm::solver::{self, gf2};
use lightsout_wasm::types::Cell;

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).unwrap()
}

/// Presses the next hinted cell until the solver stops suggesting moves.
fn follow_hints(mut board: Board) -> (Board, usize) {
    let mut moves = 0;
    while let Some(next) = solver::next_move(&board) {
        board.toggle(next);
        moves += 1;
        assert!(moves <= CELLS, "hints did not converge");
    }
    (board, moves)
}

#[test]
fn test_influence_is_symmetric() {
    for a in Cell::all() {
        for b in Cell::all() {
            assert_eq!(affects(a, b), affects(b, a), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn test_influence_matches_toggle() {
    for press in Cell::all() {
        let pressed = Board::new().toggled(press);
        for target in Cell::all() {
            assert_eq!(pressed.is_on(target), affects(press, target));
        }
    }
}

#[test]
fn test_matrix_layout() {
    let board = Board::new().toggled(cell(0, 0));
    let matrix = AugmentedMatrix::for_board(&board);

    // Row for target (0, 0) is affected by (0, 0), (0, 1) and (1, 0).
    let row = cell(0, 0).index();
    let affecting: Vec<usize> = (0..CELLS).filter(|&c| matrix.get(row, c)).collect();
    assert_eq!(affecting, vec![0, 1, 5]);
    assert!(matrix.get(row, RHS_COLUMN));

    // (2, 2) is dark, so only the coefficients are set.
    let row = cell(2, 2).index();
    let affecting: Vec<usize> = (0..CELLS).filter(|&c| matrix.get(row, c)).collect();
    assert_eq!(affecting, vec![7, 11, 12, 13, 17]);
    assert!(!matrix.get(row, RHS_COLUMN));
}

#[test]
fn test_matrix_rhs_follows_board() {
    let board: Board = "#...# ..... ..#.. ..... #...#".parse().unwrap();
    let matrix = AugmentedMatrix::for_board(&board);
    for c in Cell::all() {
        assert_eq!(matrix.get(c.index(), RHS_COLUMN), board.is_on(c));
    }
}

#[test]
fn test_solved_board_has_no_move() {
    assert_eq!(solver::next_move(&Board::new()), None);
    assert_eq!(solver::solve(&Board::new()).map(|s| s.press_count()), Some(0));
}

#[test]
fn test_single_press_is_undone_first() {
    let board = Board::new().toggled(cell(0, 0));
    assert_eq!(solver::next_move(&board), Some(cell(0, 0)));
}

#[test]
fn test_center_light_is_cleared() {
    let board: Board = "..... ..... ..#.. ..... .....".parse().unwrap();
    let solution = solver::solve(&board).expect("center light is solvable");
    assert!(solution.apply_to(&board).is_solved());
}

#[test]
fn test_every_single_press_board_is_solved() {
    for press in Cell::all() {
        let board = Board::new().toggled(press);
        let solution = solver::solve(&board).unwrap();
        assert!(solution.apply_to(&board).is_solved(), "press {press:?}");
        // The last two columns are free, so pressing them is undone another way.
        if press.index() < CELLS - 2 {
            assert_eq!(solution.first(), Some(press));
        }
    }
}

#[test]
fn test_every_double_press_board_is_solved() {
    for a in 0..CELLS {
        for b in a + 1..CELLS {
            let board = Board::new()
                .toggled(Cell::from_index(a))
                .toggled(Cell::from_index(b));
            let solution = solver::solve(&board).unwrap();
            assert!(solution.apply_to(&board).is_solved(), "presses {a} and {b}");
        }
    }
}

#[test]
fn test_free_variables_default_to_zero() {
    let board = [cell(4, 3), cell(4, 4), cell(1, 2), cell(0, 0)]
        .into_iter()
        .fold(Board::new(), |b, c| b.toggled(c));
    let solution = solver::solve(&board).unwrap();
    assert!(!solution.is_pressed(cell(4, 3)));
    assert!(!solution.is_pressed(cell(4, 4)));
}

#[test]
fn test_unreachable_board_has_no_solution() {
    let corner: Board = "#.... ..... ..... ..... .....".parse().unwrap();
    assert_eq!(solver::solve(&corner), None);
    assert_eq!(solver::next_move(&corner), None);
    assert!(!solver::is_solvable(&corner));
}

#[test]
fn test_solving_does_not_mutate_the_board() {
    let board: Board = ".#... ###.. .#... ..... .....".parse().unwrap();
    let copy = board;
    let _ = solver::solve(&board);
    let _ = solver::next_move(&board);
    assert_eq!(board, copy);
}

#[test]
fn test_following_hints_clears_board() {
    let board = [cell(0, 4), cell(1, 1), cell(3, 2), cell(4, 4), cell(2, 0)]
        .into_iter()
        .fold(Board::new(), |b, c| b.toggled(c));
    let expected = solver::solve(&board).unwrap().press_count();

    let (board, moves) = follow_hints(board);
    assert!(board.is_solved());
    assert_eq!(moves, expected);
}

#[test]
fn test_handmade_inconsistent_system() {
    let mut rows = [0u32; CELLS];
    rows[3] = 1 << 3;
    rows[10] = 1 << 3 | 1 << RHS_COLUMN;
    // x3 = 0 and x3 = 1
    assert_eq!(gf2::solve_system(AugmentedMatrix::from_rows(rows)), None);
}

#[test]
fn test_all_on_board() {
    let board: Board = "##### ##### ##### ##### #####".parse().unwrap();
    let solution = solver::solve(&board).expect("all-on is solvable on 5x5");
    assert!(solution.apply_to(&board).is_solved());
    assert_eq!(follow_hints(board).0, Board::new());
}

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


//! A single Lights Out session: the board, the win latch and the hint view.

use crate::board::Board;
use crate::error::LightsError;
use crate::generate;
use crate::solver;
use crate::types::Cell;
use rand::Rng;
use serde::Serialize;

/// What the front end should show after the hint view is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cell", rename_all = "camelCase")]
pub enum HintView {
    /// The hint view was switched off.
    Hidden,
    /// Nothing to hint, the board is already dark. The view stays off.
    AlreadySolved,
    /// The view is on and this cell should be highlighted.
    Highlight(Cell),
    /// The solver had nothing to suggest, so the view switched itself off.
    NoMove,
}

/// Result of a single press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressOutcome {
    /// Every light is off after this press.
    pub solved: bool,
    /// The next highlighted cell while the hint view is on.
    pub hint: Option<Cell>,
}

#[derive(Debug, Clone, Default)]
pub struct LightsGame {
    board: Board,
    won: bool,
    showing_hint: bool,
    hint: Option<Cell>,
}

impl LightsGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on an existing board.
    pub fn with_board(board: Board) -> Self {
        LightsGame {
            board,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `true` once the board has been cleared since the last scramble.
    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_showing_hint(&self) -> bool {
        self.showing_hint
    }

    pub fn hint(&self) -> Option<Cell> {
        self.hint
    }

    pub fn scramble(&mut self) {
        self.scramble_with(&mut rand::rng());
    }

    /// Replaces the board with a fresh scramble and resets the session.
    pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::with_board(generate::scramble_with(rng));
    }

    /// Presses the cell at (`row`, `col`).
    ///
    /// While the hint view is on, the hint is recomputed from the new board.
    /// Clearing the board latches the win and switches the hint view off.
    pub fn press(&mut self, row: usize, col: usize) -> Result<PressOutcome, LightsError> {
        let cell = Cell::new(row, col).ok_or(LightsError::OutOfBounds { row, col })?;
        self.board.toggle(cell);

        if self.showing_hint {
            self.refresh_hint();
        }

        let solved = self.board.is_solved();
        if solved {
            log::debug!("board cleared");
            self.won = true;
            self.hide_hint();
        }

        Ok(PressOutcome {
            solved,
            hint: self.hint,
        })
    }

    /// Switches the hint view on or off.
    pub fn toggle_hint_view(&mut self) -> HintView {
        if self.showing_hint {
            self.hide_hint();
            return HintView::Hidden;
        }
        if self.board.is_solved() {
            return HintView::AlreadySolved;
        }

        self.showing_hint = true;
        self.refresh_hint();
        match self.hint {
            Some(cell) => HintView::Highlight(cell),
            None => HintView::NoMove,
        }
    }

    fn refresh_hint(&mut self) {
        self.hint = solver::next_move(&self.board);
        if self.hint.is_none() {
            self.showing_hint = false;
        }
    }

    fn hide_hint(&mut self) {
        self.showing_hint = false;
        self.hint = None;
    }
}

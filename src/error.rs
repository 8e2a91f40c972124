// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Errors produced while reading, checking or solving a
//! payoff matrix.

use std::io;

use thiserror::Error;

use crate::matrix::Payoff;

/// Everything that can go wrong between reading a payoff
/// matrix and reporting its solution.
#[derive(Debug, Error)]
pub enum GameError {
    /// Empty or ragged input.
    #[error("invalid matrix shape: {0}")]
    InvalidMatrixShape(String),

    /// A cell that is not an integer. Row and column are
    /// 1-based, as the user sees them.
    #[error("row {row}, column {column}: cannot parse {text:?} as an integer")]
    UnparsableCell {
        row: usize,
        column: usize,
        text: String,
    },

    #[error("matrix is {rows}x{columns}: each dimension must be between {min} and {max}")]
    DimensionOutOfRange {
        rows: usize,
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("empty payoff range {low}..={high}")]
    EmptyRange { low: Payoff, high: Payoff },

    #[error("expected a 2x2 matrix, got {rows}x{columns}")]
    NotTwoByTwo { rows: usize, columns: usize },

    /// `a - b - c + d == 0` in the closed-form 2x2 solution.
    #[error("degenerate 2x2 game: a - b - c + d is zero")]
    DegenerateTwoByTwo,

    /// Dominance elimination stopped short of 2x2.
    #[error("cannot reduce the matrix to 2x2: stopped at {rows}x{columns}")]
    ReductionIncomplete { rows: usize, columns: usize },

    #[error("could not read payoff matrix: {0}")]
    Io(#[from] io::Error),
}

// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! The payoff matrix shared by every stage of the solver.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::ops::Index;

use ndarray::prelude::*;
use tabwriter::TabWriter;

use crate::error::GameError;

/// A single payoff to the row player.
pub type Payoff = i32;

/// Payoffs to the row player (the maximizer) for each pair
/// of row and column choices. The column player (the
/// minimizer) receives the negation. A `PayoffMatrix` is
/// never empty and is never changed once built: reducing
/// it produces a new matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffMatrix {
    payoffs: Array2<Payoff>,
}

impl PayoffMatrix {
    /// Take a nested-`Vec` payoff matrix and check that it
    /// is non-empty and rectangular.
    pub fn from_rows(rows: Vec<Vec<Payoff>>) -> Result<Self, GameError> {
        if rows.is_empty() {
            return Err(GameError::InvalidMatrixShape("no rows".into()));
        }
        let ncols = rows[0].len();
        if ncols == 0 {
            return Err(GameError::InvalidMatrixShape("no columns".into()));
        }
        for (r, row) in rows.iter().enumerate().skip(1) {
            if row.len() != ncols {
                let msg = format!(
                    "row {} has {} entries, expected {}",
                    r + 1,
                    row.len(),
                    ncols,
                );
                return Err(GameError::InvalidMatrixShape(msg));
            }
        }
        let payoffs =
            Array2::from_shape_fn((rows.len(), ncols), |(i, j)| rows[i][j]);
        Ok(PayoffMatrix { payoffs })
    }

    /// Wrap an existing array, rejecting zero-sized ones.
    pub fn from_array(payoffs: Array2<Payoff>) -> Result<Self, GameError> {
        let (nr, nc) = payoffs.dim();
        if nr == 0 || nc == 0 {
            let msg = format!("{}x{} matrix is empty", nr, nc);
            return Err(GameError::InvalidMatrixShape(msg));
        }
        Ok(PayoffMatrix { payoffs })
    }

    pub fn rows(&self) -> usize {
        self.payoffs.dim().0
    }

    pub fn columns(&self) -> usize {
        self.payoffs.dim().1
    }

    /// `(rows, columns)`.
    pub fn dim(&self) -> (usize, usize) {
        self.payoffs.dim()
    }

    pub fn is_two_by_two(&self) -> bool {
        self.dim() == (2, 2)
    }

    pub fn payoffs(&self) -> ArrayView2<'_, Payoff> {
        self.payoffs.view()
    }

    /// The smallest payoff in each row: what the row
    /// player is guaranteed by committing to that row.
    pub fn row_minima(&self) -> Vec<Payoff> {
        self.payoffs
            .outer_iter()
            .map(|row| row.iter().cloned().min().unwrap_or(Payoff::MAX))
            .collect()
    }

    /// The largest payoff in each column: the most the
    /// column player can lose by committing to that column.
    pub fn column_maxima(&self) -> Vec<Payoff> {
        self.payoffs
            .axis_iter(Axis(1))
            .map(|col| col.iter().cloned().max().unwrap_or(Payoff::MIN))
            .collect()
    }

    /// Build the submatrix made of the given original rows
    /// and columns, in the order given.
    ///
    /// # Errors
    /// Returns `GameError::InvalidMatrixShape` if `rows` or
    /// `columns` is empty.
    ///
    /// # Panics
    /// Panics if an index is out of range. Callers pass
    /// indices they derived from this matrix.
    pub fn select(&self, rows: &[usize], columns: &[usize]) -> Result<Self, GameError> {
        let payoffs = Array2::from_shape_fn((rows.len(), columns.len()), |(i, j)| {
            self.payoffs[(rows[i], columns[j])]
        });
        PayoffMatrix::from_array(payoffs)
    }
}

impl Index<(usize, usize)> for PayoffMatrix {
    type Output = Payoff;

    fn index(&self, rc: (usize, usize)) -> &Self::Output {
        &self.payoffs[rc]
    }
}

/// Display a `PayoffMatrix` in tabular format, with
/// 1-based strategy numbers along the left and top.
impl Display for PayoffMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let write_table = || -> io::Result<Vec<u8>> {
            let mut tf = TabWriter::new(Vec::new()).padding(1);

            for c in 0..self.columns() {
                write!(tf, "\t{}", c + 1)?;
            }
            writeln!(tf)?;

            for (r, row) in self.payoffs.outer_iter().enumerate() {
                write!(tf, "{}", r + 1)?;
                for v in row {
                    write!(tf, "\t{}", v)?;
                }
                writeln!(tf)?;
            }

            tf.flush()?;
            tf.into_inner()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "table flush failed"))
        };

        let table = write_table().map_err(|_| fmt::Error)?;
        let table = std::str::from_utf8(&table).map_err(|_| fmt::Error)?;
        write!(f, "{}", table)
    }
}

// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Pure-strategy equilibria.

use std::fmt::{self, Display, Formatter};

use crate::matrix::PayoffMatrix;

/// A cell that is both the minimum of its row and the
/// maximum of its column. Indices are 0-based; the
/// `Display` form is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaddlePoint {
    pub row: usize,
    pub column: usize,
}

impl Display for SaddlePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.column + 1)
    }
}

/// Every saddle point of `m`, in row-major order. All of
/// them have the same payoff, which is then both the
/// maximin and the minimax of the game. An empty result
/// means there is no equilibrium in pure strategies.
pub fn saddle_points(m: &PayoffMatrix) -> Vec<SaddlePoint> {
    let row_min = m.row_minima();
    let col_max = m.column_maxima();
    let (nr, nc) = m.dim();
    let mut points = Vec::new();
    for r in 0..nr {
        for c in 0..nc {
            let v = m[(r, c)];
            if v == row_min[r] && v == col_max[c] {
                points.push(SaddlePoint { row: r, column: c });
            }
        }
    }
    points
}

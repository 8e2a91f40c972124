// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Elimination of dominated strategies.
//!
//! Row `i` dominates row `k` when it pays the row player
//! at least as much against every column and strictly more
//! against some column. Column `j` dominates column `l`
//! when it costs the column player no more against every
//! row and strictly less against some row. A dominated
//! strategy is never uniquely optimal and can be dropped
//! without changing the value of the game.

use crate::error::GameError;
use crate::matrix::PayoffMatrix;

/// True iff row `i` dominates row `k`. A row never
/// dominates itself.
pub fn row_dominates(m: &PayoffMatrix, i: usize, k: usize) -> bool {
    let mut strict = false;
    for c in 0..m.columns() {
        let (better, worse) = (m[(i, c)], m[(k, c)]);
        if better < worse {
            return false;
        }
        if better > worse {
            strict = true;
        }
    }
    strict
}

/// True iff column `j` dominates column `l`. A column
/// never dominates itself.
pub fn column_dominates(m: &PayoffMatrix, j: usize, l: usize) -> bool {
    let mut strict = false;
    for r in 0..m.rows() {
        let (better, worse) = (m[(r, j)], m[(r, l)]);
        if better > worse {
            return false;
        }
        if better < worse {
            strict = true;
        }
    }
    strict
}

/// The outcome of dominance elimination: a new, smaller
/// (or equal) matrix together with the original indices
/// of the strategies it kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub matrix: PayoffMatrix,
    /// Original 0-based row of each reduced row.
    pub kept_rows: Vec<usize>,
    /// Original 0-based column of each reduced column.
    pub kept_columns: Vec<usize>,
    /// Elimination passes that removed something.
    pub passes: usize,
}

impl Reduction {
    /// The trivial reduction that keeps everything.
    pub fn identity(m: &PayoffMatrix) -> Self {
        Reduction {
            matrix: m.clone(),
            kept_rows: (0..m.rows()).collect(),
            kept_columns: (0..m.columns()).collect(),
            passes: 0,
        }
    }

    pub fn is_two_by_two(&self) -> bool {
        self.matrix.is_two_by_two()
    }
}

/// Indices of the undominated strategies among `n`, given
/// a domination test on pairs.
fn undominated<F>(n: usize, dominates: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> bool,
{
    let mut dominated = vec![false; n];
    for i in 0..n {
        for k in 0..n {
            if i != k && !dominated[k] && dominates(i, k) {
                dominated[k] = true;
            }
        }
    }
    (0..n).filter(|&k| !dominated[k]).collect()
}

/// One elimination pass. Every domination test looks at
/// `m` as given, so a strategy that only becomes dominated
/// once another is removed survives this pass. Strict
/// domination is a partial order, so at least one row and
/// one column always survive.
pub fn reduce_once(m: &PayoffMatrix) -> Result<Reduction, GameError> {
    let kept_rows = undominated(m.rows(), |i, k| row_dominates(m, i, k));
    let kept_columns =
        undominated(m.columns(), |j, l| column_dominates(m, j, l));
    let matrix = m.select(&kept_rows, &kept_columns)?;
    let passes = if matrix.dim() == m.dim() { 0 } else { 1 };
    log::trace!(
        "dominance pass: {:?} -> {:?}, kept rows {:?} columns {:?}",
        m.dim(),
        matrix.dim(),
        kept_rows,
        kept_columns,
    );
    Ok(Reduction {
        matrix,
        kept_rows,
        kept_columns,
        passes,
    })
}

/// Repeat elimination passes until one removes nothing.
/// Kept indices always refer to `m`.
pub fn reduce_to_fixed_point(m: &PayoffMatrix) -> Result<Reduction, GameError> {
    let mut acc = Reduction::identity(m);
    loop {
        let step = reduce_once(&acc.matrix)?;
        if step.passes == 0 {
            return Ok(acc);
        }
        acc = Reduction {
            kept_rows: step.kept_rows.iter().map(|&r| acc.kept_rows[r]).collect(),
            kept_columns: step
                .kept_columns
                .iter()
                .map(|&c| acc.kept_columns[c])
                .collect(),
            matrix: step.matrix,
            passes: acc.passes + 1,
        };
    }
}

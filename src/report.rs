// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Human-readable rendering of a `Solution`. Strategies
//! are numbered from 1.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use crate::dominance::Reduction;
use crate::solve::Solution;

/// Decimal places used for probabilities unless told
/// otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// A `Solution` together with display settings.
#[derive(Debug)]
pub struct Report<'a> {
    pub solution: &'a Solution,
    /// Decimal places for probabilities and mixed values.
    pub precision: usize,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Report {
            solution,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

fn one_based(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn show_reduction(f: &mut Formatter<'_>, r: &Reduction) -> fmt::Result {
    if r.passes == 0 {
        return Ok(());
    }
    writeln!(
        f,
        "reduced to {}x{} (rows {}; columns {}):",
        r.matrix.rows(),
        r.matrix.columns(),
        one_based(&r.kept_rows),
        one_based(&r.kept_columns),
    )?;
    write!(f, "{}", r.matrix)
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.solution.value();
        writeln!(f, "maximin (lower value) {}", value.maximin)?;
        writeln!(f, "minimax (upper value) {}", value.minimax)?;
        let prec = self.precision;

        match self.solution {
            Solution::Pure { saddle_points, .. } => {
                for p in saddle_points {
                    writeln!(
                        f,
                        "saddle point at row {}, column {}",
                        p.row + 1,
                        p.column + 1,
                    )?;
                }
                writeln!(f, "pure strategies, value {}", value.maximin)?;
                let rows: BTreeSet<usize> =
                    saddle_points.iter().map(|p| p.row).collect();
                let columns: BTreeSet<usize> =
                    saddle_points.iter().map(|p| p.column).collect();
                let rows: Vec<usize> = rows.into_iter().collect();
                let columns: Vec<usize> = columns.into_iter().collect();
                writeln!(f, "player A plays row {}", one_based(&rows))?;
                writeln!(f, "player B plays column {}", one_based(&columns))?;
            }
            Solution::Mixed {
                strategy,
                reduction,
                ..
            } => {
                writeln!(f, "no saddle points")?;
                show_reduction(f, reduction)?;
                let (r1, r2) = (reduction.kept_rows[0], reduction.kept_rows[1]);
                let (c1, c2) =
                    (reduction.kept_columns[0], reduction.kept_columns[1]);
                writeln!(f, "mixed strategies, value {:.*}", prec, strategy.value)?;
                writeln!(
                    f,
                    "player A: p = {:.*} (row {}), 1-p = {:.*} (row {})",
                    prec,
                    strategy.p,
                    r1 + 1,
                    prec,
                    strategy.one_minus_p(),
                    r2 + 1,
                )?;
                writeln!(
                    f,
                    "player B: q = {:.*} (column {}), 1-q = {:.*} (column {})",
                    prec,
                    strategy.q,
                    c1 + 1,
                    prec,
                    strategy.one_minus_q(),
                    c2 + 1,
                )?;
            }
            Solution::Unsolvable {
                reason, reduction, ..
            } => {
                writeln!(f, "no saddle points")?;
                if let Some(r) = reduction {
                    show_reduction(f, r)?;
                }
                writeln!(f, "unsolvable: {}", reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Payoff, PayoffMatrix};
    use crate::solve::solve;

    fn m(rows: Vec<Vec<Payoff>>) -> PayoffMatrix {
        PayoffMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_pure_report() {
        let s = solve(&m(vec![vec![2, 2, 5], vec![1, 0, 3]]));
        let text = Report::new(&s).to_string();
        assert!(text.contains("saddle point at row 1, column 1\n"));
        assert!(text.contains("saddle point at row 1, column 2\n"));
        assert!(text.contains("player A plays row 1\n"));
        assert!(text.contains("player B plays column 1 2\n"));
    }

    #[test]
    fn test_mixed_report() {
        let s = solve(&m(vec![vec![4, 2], vec![1, 3]]));
        let text = Report::new(&s).to_string();
        assert!(text.contains("maximin (lower value) 2\n"));
        assert!(text.contains("minimax (upper value) 3\n"));
        assert!(text.contains("p = 0.25 (row 1), 1-p = 0.75 (row 2)"));
        assert!(text.contains("q = 0.50 (column 1), 1-q = 0.50 (column 2)"));
        assert!(!text.contains("reduced"));

        let text = Report::new(&s).precision(3).to_string();
        assert!(text.contains("p = 0.250"));
    }

    #[test]
    fn test_reduced_report() {
        let s = solve(&m(vec![vec![4, 1, 5], vec![1, 4, 2], vec![3, 0, 4]]));
        let text = Report::new(&s).to_string();
        assert!(text.contains("reduced to 2x2 (rows 1 2; columns 1 2):"));
        assert!(text.contains("p = 0.50"));
    }

    #[test]
    fn test_unsolvable_report() {
        let s = solve(&m(vec![vec![0, -1, 1], vec![1, 0, -1], vec![-1, 1, 0]]));
        let text = Report::new(&s).to_string();
        assert!(text.contains("unsolvable: cannot reduce the matrix to 2x2"));
    }
}

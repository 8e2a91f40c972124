// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Getting a payoff matrix from the outside world: parsing
//! text, checking dimensions, or filling at random.

use std::io::{BufRead, BufReader, Read};
use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::GameError;
use crate::matrix::{Payoff, PayoffMatrix};

/// Read a payoff matrix in textual space-separated form.
/// Blank lines are skipped.
pub fn read_matrix<T: Read>(r: T) -> Result<Vec<Vec<Payoff>>, GameError> {
    let mut rows = Vec::new();
    let r = BufReader::new(r);
    for line in r.lines() {
        let line = line?;
        let row = rows.len() + 1;
        let cols = line
            .split_whitespace()
            .enumerate()
            .map(|(c, text)| {
                text.parse().map_err(|_| GameError::UnparsableCell {
                    row,
                    column: c + 1,
                    text: text.to_string(),
                })
            })
            .collect::<Result<Vec<Payoff>, GameError>>()?;
        if cols.is_empty() {
            continue;
        }
        rows.push(cols);
    }
    if rows.is_empty() {
        return Err(GameError::InvalidMatrixShape("empty matrix".into()));
    }
    let ncols = rows[0].len();
    for (i, r) in rows.iter().enumerate().skip(1) {
        if r.len() != ncols {
            let msg = format!(
                "ragged matrix: row {} has {} entries, expected {}",
                i + 1,
                r.len(),
                ncols,
            );
            return Err(GameError::InvalidMatrixShape(msg));
        }
    }
    Ok(rows)
}

/// Allowed range for each matrix dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: usize,
    pub max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { min: 2, max: 20 }
    }
}

impl Limits {
    pub fn check(&self, rows: usize, columns: usize) -> Result<(), GameError> {
        let ok = |n: usize| self.min <= n && n <= self.max;
        if ok(rows) && ok(columns) {
            Ok(())
        } else {
            Err(GameError::DimensionOutOfRange {
                rows,
                columns,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Default range of random payoffs.
pub const RANDOM_PAYOFFS: RangeInclusive<Payoff> = 2..=10;

/// A `rows` by `columns` matrix of payoffs drawn uniformly
/// from `range`.
pub fn random_matrix<R: Rng>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    range: RangeInclusive<Payoff>,
) -> Result<PayoffMatrix, GameError> {
    let (low, high) = (*range.start(), *range.end());
    if low > high {
        return Err(GameError::EmptyRange { low, high });
    }
    let payoffs = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| rng.gen_range(low..=high))
                .collect::<Vec<Payoff>>()
        })
        .collect();
    PayoffMatrix::from_rows(payoffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_read_matrix() {
        let f = io::Cursor::new(b"  1 2 \n\n-3 4");
        let m = read_matrix(f).unwrap();
        assert_eq!(m, vec![vec![1, 2], vec![-3, 4]]);
    }

    #[test]
    fn test_read_bad_cell() {
        let f = io::Cursor::new(b"1 2\n3 x4\n");
        match read_matrix(f) {
            Err(GameError::UnparsableCell { row, column, text }) => {
                assert_eq!((row, column), (2, 2));
                assert_eq!(text, "x4");
            }
            r => panic!("expected unparsable cell, got {:?}", r),
        }
        let f = io::Cursor::new(b"1.5 2\n");
        assert!(matches!(
            read_matrix(f),
            Err(GameError::UnparsableCell { .. })
        ));
    }

    #[test]
    fn test_read_bad_shape() {
        let f = io::Cursor::new(b"1 2\n3\n");
        assert!(matches!(
            read_matrix(f),
            Err(GameError::InvalidMatrixShape(_))
        ));
        let f = io::Cursor::new(b"\n  \n");
        assert!(matches!(
            read_matrix(f),
            Err(GameError::InvalidMatrixShape(_))
        ));
    }

    #[test]
    fn test_limits() {
        let l = Limits::default();
        assert!(l.check(2, 20).is_ok());
        assert!(matches!(
            l.check(1, 3),
            Err(GameError::DimensionOutOfRange { rows: 1, columns: 3, .. })
        ));
        assert!(l.check(3, 21).is_err());
    }

    #[test]
    fn test_random_matrix() {
        let mut rng = StdRng::seed_from_u64(17);
        let m = random_matrix(&mut rng, 4, 3, RANDOM_PAYOFFS).unwrap();
        assert_eq!(m.dim(), (4, 3));
        assert!(m.payoffs().iter().all(|v| RANDOM_PAYOFFS.contains(v)));

        let mut again = StdRng::seed_from_u64(17);
        assert_eq!(random_matrix(&mut again, 4, 3, RANDOM_PAYOFFS).unwrap(), m);

        assert!(matches!(
            random_matrix(&mut rng, 2, 2, 5..=4),
            Err(GameError::EmptyRange { low: 5, high: 4 })
        ));
    }
}

// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Closed-form mixed-strategy solution of a 2x2 game.

use crate::error::GameError;
use crate::matrix::PayoffMatrix;

/// Optimal mixed strategies of a 2x2 game.
///
/// The probabilities are not clamped: a 2x2 matrix that
/// is not strictly mixed (one with a saddle point, say)
/// can give values outside `[0, 1]`. Use `is_proper()` to
/// check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixedStrategy {
    /// Probability the row player picks row 1.
    pub p: f64,
    /// Probability the column player picks column 1.
    pub q: f64,
    /// Expected payoff to the row player when both players
    /// follow these strategies.
    pub value: f64,
}

impl MixedStrategy {
    pub fn one_minus_p(&self) -> f64 {
        1.0 - self.p
    }

    pub fn one_minus_q(&self) -> f64 {
        1.0 - self.q
    }

    /// True iff both `p` and `q` are probabilities.
    pub fn is_proper(&self) -> bool {
        let unit = |x: f64| (0.0..=1.0).contains(&x);
        unit(self.p) && unit(self.q)
    }
}

/// Solve the 2x2 game
///
/// ```text,no_run
///     a b
///     c d
/// ```
///
/// giving `p = (d - b) / D`, `q = (d - c) / D` and value
/// `(ad - bc) / D` where `D = a - b - c + d`.
pub fn solve_two_by_two(m: &PayoffMatrix) -> Result<MixedStrategy, GameError> {
    if !m.is_two_by_two() {
        let (rows, columns) = m.dim();
        return Err(GameError::NotTwoByTwo { rows, columns });
    }
    let a = i64::from(m[(0, 0)]);
    let b = i64::from(m[(0, 1)]);
    let c = i64::from(m[(1, 0)]);
    let d = i64::from(m[(1, 1)]);
    let denom = a - b - c + d;
    if denom == 0 {
        return Err(GameError::DegenerateTwoByTwo);
    }
    let denom = denom as f64;
    Ok(MixedStrategy {
        p: (d - b) as f64 / denom,
        q: (d - c) as f64 / denom,
        value: (a * d - b * c) as f64 / denom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Payoff;

    fn m(rows: Vec<Vec<Payoff>>) -> PayoffMatrix {
        PayoffMatrix::from_rows(rows).unwrap()
    }

    fn eqish(v1: f64, v2: f64) -> bool {
        (v1 - v2).abs() < 0.00001
    }

    #[test]
    fn test_regression() {
        let s = solve_two_by_two(&m(vec![vec![2, 5], vec![4, 3]])).unwrap();
        assert!(eqish(s.p, 0.5));
        assert!(eqish(s.q, 0.25));
        assert!(eqish(s.one_minus_q(), 0.75));
        assert!(eqish(s.value, 3.5));
        assert!(s.is_proper());
    }

    #[test]
    fn test_degenerate() {
        let r = solve_two_by_two(&m(vec![vec![2, 4], vec![1, 3]]));
        assert!(matches!(r, Err(GameError::DegenerateTwoByTwo)));
    }

    #[test]
    fn test_wrong_size() {
        let r = solve_two_by_two(&m(vec![vec![2, 4, 1], vec![1, 3, 0]]));
        assert!(matches!(
            r,
            Err(GameError::NotTwoByTwo { rows: 2, columns: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_exposed() {
        // Saddle point at (2, 1): the formula overshoots.
        let s = solve_two_by_two(&m(vec![vec![1, 0], vec![3, 5]])).unwrap();
        assert!(eqish(s.p, 5.0 / 3.0));
        assert!(eqish(s.q, 2.0 / 3.0));
        assert!(!s.is_proper());
    }

    #[test]
    fn test_extreme_payoffs() {
        let max = Payoff::MAX;
        let min = Payoff::MIN;
        let s = solve_two_by_two(&m(vec![vec![max, min], vec![min, max]])).unwrap();
        assert!(eqish(s.p, 0.5));
        assert!(eqish(s.q, 0.5));
    }
}

// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! The solver pipeline: bounds, saddle points, dominance,
//! then the 2x2 closed form.

use crate::bounds::{game_value, GameValue};
use crate::dominance::{reduce_once, reduce_to_fixed_point, Reduction};
use crate::error::GameError;
use crate::matrix::PayoffMatrix;
use crate::mixed::{solve_two_by_two, MixedStrategy};
use crate::saddle::{saddle_points, SaddlePoint};

/// How dominated strategies are eliminated before trying
/// the 2x2 solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// A single pass over the input matrix. Games that need
    /// a second pass to reach 2x2 are reported unsolvable.
    #[default]
    SinglePass,
    /// Repeat passes until nothing more is dominated.
    FixedPoint,
}

/// The outcome of solving a game.
#[derive(Debug)]
pub enum Solution {
    /// At least one saddle point: both players should play
    /// a pure strategy.
    Pure {
        value: GameValue,
        saddle_points: Vec<SaddlePoint>,
    },
    /// No saddle point, but the game reduced to 2x2.
    Mixed {
        value: GameValue,
        strategy: MixedStrategy,
        /// The 2x2 game actually solved, and where its
        /// strategies came from in the input.
        reduction: Reduction,
    },
    /// No saddle point, and this method cannot find the
    /// mixed solution.
    Unsolvable {
        value: GameValue,
        reason: GameError,
        /// Where dominance elimination stopped, if it ran.
        reduction: Option<Reduction>,
    },
}

impl Solution {
    /// The pure-strategy bounds, whatever the outcome.
    pub fn value(&self) -> GameValue {
        match self {
            Solution::Pure { value, .. } => *value,
            Solution::Mixed { value, .. } => *value,
            Solution::Unsolvable { value, .. } => *value,
        }
    }

    pub fn is_solved(&self) -> bool {
        !matches!(self, Solution::Unsolvable { .. })
    }
}

/// Matrix game solver, parameterized by dominance
/// elimination policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    pub policy: Policy,
}

impl Solver {
    pub fn new(policy: Policy) -> Self {
        Solver { policy }
    }

    /// Solve the game given by `m`. `m` is not changed;
    /// dominance elimination works on new matrices.
    pub fn solve(&self, m: &PayoffMatrix) -> Solution {
        let value = game_value(m);
        log::debug!("{:?} game: {}", m.dim(), value);

        let saddle_points = saddle_points(m);
        if !saddle_points.is_empty() {
            log::debug!("{} saddle point(s)", saddle_points.len());
            return Solution::Pure {
                value,
                saddle_points,
            };
        }
        log::debug!("no saddle points");

        let reduction = if m.is_two_by_two() {
            Reduction::identity(m)
        } else {
            let reduced = match self.policy {
                Policy::SinglePass => reduce_once(m),
                Policy::FixedPoint => reduce_to_fixed_point(m),
            };
            match reduced {
                Ok(r) => r,
                Err(reason) => {
                    return Solution::Unsolvable {
                        value,
                        reason,
                        reduction: None,
                    }
                }
            }
        };
        log::debug!(
            "reduced {:?} to {:?} in {} pass(es)",
            m.dim(),
            reduction.matrix.dim(),
            reduction.passes,
        );

        if !reduction.is_two_by_two() {
            let (rows, columns) = reduction.matrix.dim();
            log::debug!("cannot reduce to 2x2");
            return Solution::Unsolvable {
                value,
                reason: GameError::ReductionIncomplete { rows, columns },
                reduction: Some(reduction),
            };
        }

        match solve_two_by_two(&reduction.matrix) {
            Ok(strategy) => {
                log::debug!("mixed: p {} q {}", strategy.p, strategy.q);
                Solution::Mixed {
                    value,
                    strategy,
                    reduction,
                }
            }
            Err(reason) => {
                log::debug!("2x2 solution failed: {}", reason);
                Solution::Unsolvable {
                    value,
                    reason,
                    reduction: Some(reduction),
                }
            }
        }
    }
}

/// Solve `m` with the default single-pass elimination.
pub fn solve(m: &PayoffMatrix) -> Solution {
    Solver::default().solve(m)
}

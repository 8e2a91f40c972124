// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Solve a two-player zero-sum game given by an integer
//! payoff matrix. Throughout, the player playing the rows
//! ("player A") is assumed to be the maximizer and the
//! player playing the columns ("player B") is assumed to be
//! the minimizer.
//!
//! The solver proceeds the classical textbook way:
//!
//! 1. Compute the maximin (lower value) and minimax (upper
//!    value) of the game.
//! 2. Look for saddle points: cells that are both the
//!    minimum of their row and the maximum of their
//!    column. If there are any, the game is solved in pure
//!    strategies.
//! 3. Otherwise, strike out dominated rows and columns.
//! 4. If what is left is 2x2, solve it in closed form for
//!    mixed strategies. If not, give up: this crate does
//!    not do general linear programming.
//!
//! By default step 3 is a single elimination pass over the
//! original matrix. `Policy::FixedPoint` repeats passes
//! until nothing more is dominated, which solves some games
//! the single pass cannot.
//!
//! The easiest way to use this code is to build a
//! `PayoffMatrix` with `PayoffMatrix::from_rows()` and
//! then call `solve()`.
//!
//! # Examples
//!
//! The row player has a strategy that is never worth
//! playing, and the column player has one too. Once both
//! are gone the game is a 2x2 with no saddle point:
//!
//! ```
//! use matrix_game::*;
//!
//! let m = PayoffMatrix::from_rows(vec![
//!     vec![4, 1, 5],
//!     vec![1, 4, 2],
//!     vec![3, 0, 4],
//! ]).unwrap();
//! let soln = solve(&m);
//! match &soln {
//!     Solution::Mixed { strategy, reduction, .. } => {
//!         assert_eq!(reduction.kept_rows, vec![0, 1]);
//!         assert!((strategy.p - 0.5).abs() < 0.0001);
//!         assert!((strategy.value - 2.5).abs() < 0.0001);
//!     }
//!     _ => panic!("expected a mixed solution"),
//! }
//! print!("{}", Report::new(&soln));
//! ```
//!
//! The output should look something like this:
//!
//! ```text,no_run
//!     maximin (lower value) 1
//!     minimax (upper value) 4
//!     no saddle points
//!     reduced to 2x2 (rows 1 2; columns 1 2):
//!       1 2
//!     1 4 1
//!     2 1 4
//!     mixed strategies, value 2.50
//!     player A: p = 0.50 (row 1), 1-p = 0.50 (row 2)
//!     player B: q = 0.50 (column 1), 1-q = 0.50 (column 2)
//! ```

pub use ndarray;

pub mod bounds;
pub mod dominance;
pub mod error;
pub mod input;
pub mod matrix;
pub mod mixed;
pub mod report;
pub mod saddle;
pub mod solve;

pub use bounds::{game_value, GameValue};
pub use dominance::{
    column_dominates, reduce_once, reduce_to_fixed_point, row_dominates,
    Reduction,
};
pub use error::GameError;
pub use input::{random_matrix, read_matrix, Limits, RANDOM_PAYOFFS};
pub use matrix::{Payoff, PayoffMatrix};
pub use mixed::{solve_two_by_two, MixedStrategy};
pub use report::{Report, DEFAULT_PRECISION};
pub use saddle::{saddle_points, SaddlePoint};
pub use solve::{solve, Policy, Solution, Solver};

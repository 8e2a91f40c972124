// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Lower and upper values of a game in pure strategies.

use std::fmt::{self, Display, Formatter};

use crate::matrix::{Payoff, PayoffMatrix};

/// The pure-strategy bounds on the value of a game.
/// `maximin <= minimax` always; the game has a solution
/// in pure strategies exactly when they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameValue {
    /// Lower value: the most the row player can guarantee
    /// by committing to one row.
    pub maximin: Payoff,
    /// Upper value: the least the column player can hold
    /// losses to by committing to one column.
    pub minimax: Payoff,
}

impl GameValue {
    pub fn is_pure(&self) -> bool {
        self.maximin == self.minimax
    }
}

impl Display for GameValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "maximin {} minimax {}", self.maximin, self.minimax)
    }
}

/// Compute the maximin and minimax of `m`.
pub fn game_value(m: &PayoffMatrix) -> GameValue {
    let maximin = m.row_minima().into_iter().max();
    let minimax = m.column_maxima().into_iter().min();
    // A `PayoffMatrix` always has a row and a column.
    GameValue {
        maximin: maximin.unwrap_or(Payoff::MIN),
        minimax: minimax.unwrap_or(Payoff::MAX),
    }
}

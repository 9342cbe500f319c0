use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Row;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // Row delta of a pawn step.
    pub fn direction_forward(self) -> i8 {
        match self {
            Force::White => 1,
            Force::Black => -1,
        }
    }

    pub fn home_row(self) -> Row {
        match self {
            Force::White => Row::_1,
            Force::Black => Row::_8,
        }
    }

    // Pawns may advance two squares only from here.
    pub fn pawn_row(self) -> Row {
        match self {
            Force::White => Row::_2,
            Force::Black => Row::_7,
        }
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Force::White => write!(f, "White"),
            Force::Black => write!(f, "Black"),
        }
    }
}

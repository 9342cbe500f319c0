use std::fmt;

use serde::{Deserialize, Serialize};


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// Reasons for a user interaction to be ignored. These never reach the caller of
// `reduce`: the state machine turns them into a selection-clearing no-op.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InteractionError {
    // Square is empty or holds a piece of the side that is not to move.
    InvalidSelection,
    // Destination is not a legal move or capture for the selected piece.
    IllegalDestination,
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionError::InvalidSelection => write!(f, "no piece of the side to move"),
            InteractionError::IllegalDestination => write!(f, "not a legal destination"),
        }
    }
}

impl std::error::Error for InteractionError {}

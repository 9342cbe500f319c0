#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod check;
pub mod coord;
pub mod display;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod legal;
pub mod movegen;
pub mod piece;
pub mod starter;
pub mod test_util;

pub use coord::{Col, Coord, Row};
pub use display::PieceStyle;
pub use error::InteractionError;
pub use force::Force;
pub use game::{ArchiveEntry, CellView, Event, GameState, Phase, initial_state, reduce};
pub use grid::Grid;
pub use piece::{Piece, PieceKind};

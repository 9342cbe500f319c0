// Plain text rendering. Terminal colors are left to the console crate.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceStyle {
    #[default]
    Unicode,
    Ascii,
}

pub fn piece_char(piece: Piece, style: PieceStyle) -> char {
    match style {
        PieceStyle::Unicode => piece.to_pictogram(),
        PieceStyle::Ascii => piece.to_ascii(),
    }
}

pub fn render_pieces(pieces: &[Piece], style: PieceStyle) -> String {
    pieces.iter().map(|&piece| piece_char(piece, style)).join(" ")
}

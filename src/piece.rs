use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// Immutable once placed: moving a piece copies it to the new square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

impl PieceKind {
    pub fn to_ascii(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_ascii(ch: char) -> Option<Self> {
        match ch {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl Piece {
    // FEN convention: uppercase for White, lowercase for Black.
    pub fn to_ascii(self) -> char {
        let ch = self.kind.to_ascii();
        match self.force {
            Force::White => ch,
            Force::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn from_ascii(ch: char) -> Option<Self> {
        let kind = PieceKind::from_ascii(ch.to_ascii_uppercase())?;
        let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
        Some(Piece::new(kind, force))
    }

    pub fn to_pictogram(self) -> char {
        use self::Force::*;
        use self::PieceKind::*;
        match (self.force, self.kind) {
            (White, Pawn) => '♙',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Rook) => '♖',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Rook) => '♜',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}

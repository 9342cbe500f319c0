// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use duel_chess::test_util::parse_grid;
use duel_chess::{Event, Force, GameState, Piece, reduce};


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: duel_chess::PieceKind,
    pub force: Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<Piece> {
    fn is(self, matcher: PieceMatcher) -> bool {
        self.is_some_and(|piece| piece.kind == matcher.kind && piece.force == matcher.force)
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: duel_chess::Force::$force,
            kind: duel_chess::PieceKind::$kind,
        }
    };
}

#[macro_export]
macro_rules! event {
    (@ $square:ident) => {
        duel_chess::Event::Activate { square: duel_chess::Coord::$square }
    };
    ($from:ident -> $to:ident) => {
        duel_chess::Event::Play {
            from: duel_chess::Coord::$from,
            to: duel_chess::Coord::$to,
        }
    };
    (restart) => {
        duel_chess::Event::Restart
    };
}

#[allow(dead_code)]
pub fn parse_state(turn: Force, board_str: &str) -> GameState {
    GameState::new_from_grid(parse_grid(board_str).unwrap(), turn)
}

#[allow(dead_code)]
pub fn replay(state: GameState, events: impl IntoIterator<Item = Event>) -> GameState {
    events.into_iter().fold(state, reduce)
}

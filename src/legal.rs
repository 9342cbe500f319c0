// King-safety filter over pseudo-legal destinations. Simulating each move and testing
// for check is the only mechanism that rejects pinned-piece moves and king walks into
// attacked squares.

use crate::check::is_in_check;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::movegen::{Destinations, pseudo_destinations};
use crate::piece::PieceKind;


pub fn leaves_own_king_in_check(grid: &Grid, from: Coord, to: Coord) -> bool {
    let force = grid[from]
        .unwrap_or_else(|| panic!("{}", internal_error_message!("no piece at {from}")))
        .force;
    let new_grid = grid.with_move(from, to);
    match new_grid.find_king(force) {
        Some(king_pos) => is_in_check(&new_grid, king_pos, force),
        None => false,
    }
}

// Kings are never captured: such a capture could only be offered in a position where
// the side not to move is in check, and it is dropped here rather than ending the game.
fn captures_king(grid: &Grid, to: Coord) -> bool {
    grid[to].is_some_and(|piece| piece.kind == PieceKind::King)
}

pub fn legal_destinations(grid: &Grid, from: Coord) -> Destinations {
    let mut dst = pseudo_destinations(grid, from);
    dst.retain(|to| !captures_king(grid, to) && !leaves_own_king_in_check(grid, from, to));
    dst
}

pub fn legal_moves(grid: &Grid, from: Coord) -> Vec<Coord> {
    legal_destinations(grid, from).moves
}

pub fn legal_captures(grid: &Grid, from: Coord) -> Vec<Coord> {
    legal_destinations(grid, from).captures
}

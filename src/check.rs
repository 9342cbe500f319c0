use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::legal::legal_destinations;
use crate::movegen::pseudo_captures;


// True iff a piece of `by` has `square` among its pseudo-legal captures. Legality of
// the attacking move is deliberately not considered: a pinned piece still gives check.
// Since captures need a target, an empty square is never attacked.
pub fn is_square_attacked(grid: &Grid, square: Coord, by: Force) -> bool {
    grid.pieces_of(by).any(|(from, _)| pseudo_captures(grid, from).contains(&square))
}

pub fn is_in_check(grid: &Grid, king_pos: Coord, king_force: Force) -> bool {
    is_square_attacked(grid, king_pos, king_force.opponent())
}

// Square of `force`'s king if it is in check.
pub fn king_in_check(grid: &Grid, force: Force) -> Option<Coord> {
    grid.find_king(force).filter(|&king_pos| is_in_check(grid, king_pos, force))
}

// True iff `force` has no legal move or capture at all. The king does not have to be
// attacked, so this covers stalemate as well as checkmate.
pub fn is_checkmate(grid: &Grid, force: Force) -> bool {
    grid.pieces_of(force).all(|(from, _)| legal_destinations(grid, from).is_empty())
}

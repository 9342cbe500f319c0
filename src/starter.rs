use crate::coord::{Col, Coord, NUM_ROWS, Row};
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};


pub const STARTING_PIECE_ROW: [PieceKind; 8] = {
    use PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

fn new_white(kind: PieceKind) -> Piece { Piece::new(kind, Force::White) }

fn setup_white_pieces_on_1st_row(grid: &mut Grid) {
    for (col, kind) in Col::all().zip(STARTING_PIECE_ROW) {
        grid[Coord::new(Force::White.home_row(), col)] = Some(new_white(kind));
    }
}

fn setup_white_pawns_on_2nd_row(grid: &mut Grid) {
    for col in Col::all() {
        grid[Coord::new(Force::White.pawn_row(), col)] = Some(new_white(PieceKind::Pawn));
    }
}

fn setup_black_pieces_mirrorlike(grid: &mut Grid) {
    for (coord, piece) in grid.pieces_of(Force::White).collect::<Vec<_>>() {
        let mirror_row = Row::from_zero_based(NUM_ROWS - coord.row.to_zero_based() - 1);
        let mirror_coord = Coord::new(mirror_row, coord.col);
        assert!(grid[mirror_coord].is_none(), "{:?}", grid);
        grid[mirror_coord] = Some(Piece { force: Force::Black, ..piece });
    }
}

pub fn generate_starting_grid() -> Grid {
    let mut grid = Grid::new();
    setup_white_pieces_on_1st_row(&mut grid);
    setup_white_pawns_on_2nd_row(&mut grid);
    setup_black_pieces_mirrorlike(&mut grid);
    grid
}

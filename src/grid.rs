use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::force::Force;
use crate::piece::{Piece, PieceKind};
use crate::starter::generate_starting_grid;


// Every square is always present: an empty square holds `None`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    data: [[Option<Piece>; NUM_COLS as usize]; NUM_ROWS as usize],
}

impl Grid {
    pub fn new() -> Self { Self::default() }

    pub fn starting() -> Self { generate_starting_grid() }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|pos| self[pos].map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, force: Force) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.force == force)
    }

    pub fn find_king(&self, force: Force) -> Option<Coord> {
        self.pieces_of(force)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    // Copy of the grid where the occupant of `from` stands on `to`. Whatever was on
    // `to` is gone: quiet moves and captures are expressed the same way.
    pub fn with_move(&self, from: Coord, to: Coord) -> Self {
        let mut grid = self.clone();
        grid[to] = grid[from].take();
        grid
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output {
        &self.data[pos.row.to_zero_based() as usize][pos.col.to_zero_based() as usize]
    }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[pos.row.to_zero_based() as usize][pos.col.to_zero_based() as usize]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(pos, piece)| (pos.to_algebraic(), piece.to_ascii())))
            .finish()
    }
}

// Test utilities that cannot be moved to the "tests" folder, because unit tests use them.

use itertools::Itertools;
use rand::{Rng, SeedableRng};

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::game::{Event, GameState};
use crate::grid::Grid;
use crate::legal::legal_destinations;
use crate::piece::Piece;


// In theory random tests verify statistical properties that should always hold, but let's fix
// the seed to avoid sporadic failures.
pub fn deterministic_rng() -> impl Rng { rand::rngs::StdRng::from_seed([0; 32]) }

// Parses a diagram with rank 8 on top, one whitespace-separated token per square:
// '.' for an empty square or a FEN piece letter.
pub fn parse_grid(board_str: &str) -> Result<Grid, String> {
    let rows = board_str
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_ascii_whitespace().collect_vec())
        .collect_vec();
    if rows.len() != NUM_ROWS as usize {
        return Err(format!("expected {} rows, got {}", NUM_ROWS, rows.len()));
    }
    let mut grid = Grid::new();
    for (row, tokens) in Row::all().rev().zip(rows) {
        if tokens.len() != NUM_COLS as usize {
            return Err(format!("expected {} squares in row {}", NUM_COLS, row.to_algebraic()));
        }
        for (col, token) in Col::all().zip(tokens) {
            let (ch,) = token
                .chars()
                .collect_tuple()
                .ok_or_else(|| format!("invalid square: {}", token))?;
            grid[Coord::new(row, col)] = match ch {
                '.' => None,
                _ => Some(Piece::from_ascii(ch).ok_or_else(|| format!("invalid piece: {}", ch))?),
            };
        }
    }
    Ok(grid)
}

// Picks a uniformly random legal move for the side to move, or `None` if there is none.
pub fn random_play(state: &GameState, rng: &mut impl Rng) -> Option<Event> {
    let candidates = state
        .board()
        .pieces_of(state.turn())
        .flat_map(|(from, _)| {
            let dst = legal_destinations(state.board(), from);
            dst.moves.into_iter().chain(dst.captures).map(move |to| Event::Play { from, to })
        })
        .collect_vec();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

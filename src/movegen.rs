// Pseudo-legal move generation: piece geometry only. Whether a destination exposes
// the mover's own king is decided in `legal`.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::piece::PieceKind;


const KING_OFFSETS: [(i8, i8); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(2, 1), (2, -1), (-2, 1), (-2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2)];
const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// Destinations of one piece, split by whether the target square is occupied.
// The two lists are disjoint.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Destinations {
    pub moves: Vec<Coord>,
    pub captures: Vec<Coord>,
}

impl Destinations {
    pub fn is_empty(&self) -> bool { self.moves.is_empty() && self.captures.is_empty() }

    pub fn contains(&self, pos: Coord) -> bool {
        self.moves.contains(&pos) || self.captures.contains(&pos)
    }

    pub fn retain(&mut self, mut f: impl FnMut(Coord) -> bool) {
        self.moves.retain(|&pos| f(pos));
        self.captures.retain(|&pos| f(pos));
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Target {
    Empty,
    Opponent,
    Friendly,
}

fn target(grid: &Grid, force: Force, pos: Coord) -> Target {
    match grid[pos] {
        None => Target::Empty,
        Some(piece) if piece.force == force => Target::Friendly,
        Some(_) => Target::Opponent,
    }
}

fn step_destinations(
    grid: &Grid, from: Coord, force: Force, offsets: &[(i8, i8)], dst: &mut Destinations,
) {
    for to in offsets.iter().filter_map(|&offset| from.try_add(offset)) {
        match target(grid, force, to) {
            Target::Empty => dst.moves.push(to),
            Target::Opponent => dst.captures.push(to),
            Target::Friendly => {}
        }
    }
}

// Walks each ray until the edge of the board or the first occupied square. That square
// ends the ray and is a capture iff it holds an opponent piece.
fn ray_destinations(
    grid: &Grid, from: Coord, force: Force, rays: &[(i8, i8)], dst: &mut Destinations,
) {
    for &direction in rays {
        let mut pos = from;
        while let Some(to) = pos.try_add(direction) {
            match target(grid, force, to) {
                Target::Empty => dst.moves.push(to),
                Target::Opponent => {
                    dst.captures.push(to);
                    break;
                }
                Target::Friendly => break,
            }
            pos = to;
        }
    }
}

fn pawn_destinations(grid: &Grid, from: Coord, force: Force, dst: &mut Destinations) {
    let forward = force.direction_forward();
    if let Some(one_step) = from.try_add((forward, 0)) {
        if grid[one_step].is_none() {
            dst.moves.push(one_step);
            if from.row == force.pawn_row() {
                if let Some(two_steps) = from.try_add((forward * 2, 0)) {
                    if grid[two_steps].is_none() {
                        dst.moves.push(two_steps);
                    }
                }
            }
        }
    }
    for d_col in [-1, 1] {
        if let Some(to) = from.try_add((forward, d_col)) {
            if target(grid, force, to) == Target::Opponent {
                dst.captures.push(to);
            }
        }
    }
}

// Panics if `from` is empty: callers only ask about occupied squares.
pub fn pseudo_destinations(grid: &Grid, from: Coord) -> Destinations {
    let piece = grid[from]
        .unwrap_or_else(|| panic!("{}", internal_error_message!("no piece at {from}")));
    let force = piece.force;
    let mut dst = Destinations::default();
    match piece.kind {
        PieceKind::King => step_destinations(grid, from, force, &KING_OFFSETS, &mut dst),
        PieceKind::Knight => step_destinations(grid, from, force, &KNIGHT_OFFSETS, &mut dst),
        PieceKind::Rook => ray_destinations(grid, from, force, &ORTHOGONAL_RAYS, &mut dst),
        PieceKind::Bishop => ray_destinations(grid, from, force, &DIAGONAL_RAYS, &mut dst),
        PieceKind::Queen => {
            ray_destinations(grid, from, force, &ORTHOGONAL_RAYS, &mut dst);
            ray_destinations(grid, from, force, &DIAGONAL_RAYS, &mut dst);
        }
        PieceKind::Pawn => pawn_destinations(grid, from, force, &mut dst),
    }
    dst
}

pub fn pseudo_moves(grid: &Grid, from: Coord) -> Vec<Coord> {
    pseudo_destinations(grid, from).moves
}

pub fn pseudo_captures(grid: &Grid, from: Coord) -> Vec<Coord> {
    pseudo_destinations(grid, from).captures
}

// Game state machine. `GameState` is an immutable snapshot owned by the caller; `reduce`
// turns a snapshot and an event into the next snapshot. Nothing is kept between calls.
//
// Invalid interactions never fail: they clear the selection and leave everything else
// as is. It is up to the presentation layer to stop sending events once the game is over.

use std::collections::BTreeSet;
use std::fmt;

use enum_map::{EnumMap, enum_map};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::check::{is_checkmate, king_in_check};
use crate::coord::Coord;
use crate::error::InteractionError;
use crate::force::Force;
use crate::grid::Grid;
use crate::legal::legal_destinations;
use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    // Select the piece on `square` to see where it can go.
    Activate { square: Coord },
    // Move the piece on `from` to `to`, capturing whatever stands there.
    Play { from: Coord, to: Coord },
    Restart,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub from: Coord,
    pub to: Coord,
}

impl fmt::Display for ArchiveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Selected(Coord),
    Over,
}

// Everything a renderer needs to know about one square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellView {
    pub piece: Option<Piece>,
    pub highlighted: bool,
    pub danger: bool,
    pub moved_from: bool,
    pub moved_to: bool,
    pub king_in_check: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Grid,
    turn: Force,
    selection: Option<Coord>,
    highlighted_moves: BTreeSet<Coord>,
    danger_squares: BTreeSet<Coord>,
    check: bool,
    king_in_check_square: Option<Coord>,
    checkmate: bool,
    // Keyed by the color of the captured piece, not the capturing side.
    captured: EnumMap<Force, Vec<Piece>>,
    move_archive: Vec<ArchiveEntry>,
}

pub fn initial_state() -> GameState { GameState::new_from_grid(Grid::starting(), Force::White) }

impl Default for GameState {
    fn default() -> Self { initial_state() }
}

impl GameState {
    // Starts a game from an arbitrary position. Check and terminal flags are computed
    // for `turn`. The grid must contain exactly one king of each color.
    pub fn new_from_grid(board: Grid, turn: Force) -> Self {
        let king_in_check_square = king_in_check(&board, turn);
        let checkmate = is_checkmate(&board, turn);
        GameState {
            board,
            turn,
            selection: None,
            highlighted_moves: BTreeSet::new(),
            danger_squares: BTreeSet::new(),
            check: king_in_check_square.is_some(),
            king_in_check_square,
            checkmate,
            captured: enum_map! { _ => Vec::new() },
            move_archive: Vec::new(),
        }
    }

    pub fn board(&self) -> &Grid { &self.board }
    pub fn turn(&self) -> Force { self.turn }
    pub fn selection(&self) -> Option<Coord> { self.selection }
    pub fn highlighted_moves(&self) -> &BTreeSet<Coord> { &self.highlighted_moves }
    pub fn danger_squares(&self) -> &BTreeSet<Coord> { &self.danger_squares }
    pub fn is_check(&self) -> bool { self.check }
    pub fn king_in_check_square(&self) -> Option<Coord> { self.king_in_check_square }
    // Also true on stalemate: the side to move has no legal action.
    pub fn is_checkmate(&self) -> bool { self.checkmate }
    // Pieces of color `force` that have been taken off the board.
    pub fn captured(&self, force: Force) -> &[Piece] { &self.captured[force] }
    pub fn move_archive(&self) -> &[ArchiveEntry] { &self.move_archive }
    pub fn last_move(&self) -> Option<ArchiveEntry> { self.move_archive.last().copied() }

    pub fn phase(&self) -> Phase {
        if self.checkmate {
            Phase::Over
        } else if let Some(square) = self.selection {
            Phase::Selected(square)
        } else {
            Phase::Idle
        }
    }

    pub fn cell(&self, square: Coord) -> CellView {
        let last_move = self.last_move();
        CellView {
            piece: self.board[square],
            highlighted: self.highlighted_moves.contains(&square),
            danger: self.danger_squares.contains(&square),
            moved_from: last_move.is_some_and(|mv| mv.from == square),
            moved_to: last_move.is_some_and(|mv| mv.to == square),
            king_in_check: self.king_in_check_square == Some(square),
        }
    }

    fn deselected(self) -> Self {
        GameState {
            selection: None,
            highlighted_moves: BTreeSet::new(),
            danger_squares: BTreeSet::new(),
            ..self
        }
    }

    fn own_piece(&self, square: Coord) -> Result<Piece, InteractionError> {
        self.board[square]
            .filter(|piece| piece.force == self.turn)
            .ok_or(InteractionError::InvalidSelection)
    }

    pub fn try_activate(&self, square: Coord) -> Result<GameState, InteractionError> {
        self.own_piece(square)?;
        let dst = legal_destinations(&self.board, square);
        Ok(GameState {
            selection: Some(square),
            highlighted_moves: dst.moves.into_iter().collect(),
            danger_squares: dst.captures.into_iter().collect(),
            ..self.clone()
        })
    }

    pub fn try_play(&self, from: Coord, to: Coord) -> Result<GameState, InteractionError> {
        if from == to {
            return Err(InteractionError::IllegalDestination);
        }
        let piece = self.own_piece(from)?;
        if !legal_destinations(&self.board, from).contains(to) {
            return Err(InteractionError::IllegalDestination);
        }

        let mut captured = self.captured.clone();
        if let Some(victim) = self.board[to] {
            captured[victim.force].push(victim);
        }
        let board = self.board.with_move(from, to);
        let next_turn = piece.force.opponent();
        let king_in_check_square = king_in_check(&board, next_turn);
        let checkmate = is_checkmate(&board, next_turn);
        let mut move_archive = self.move_archive.clone();
        move_archive.push(ArchiveEntry { from, to });

        info!("Play handled from {from} to {to}");
        if checkmate {
            info!("{next_turn} has no legal moves left");
        } else if let Some(king_pos) = king_in_check_square {
            info!("{next_turn} king on {king_pos} is in check");
        }
        Ok(GameState {
            board,
            turn: next_turn,
            selection: None,
            highlighted_moves: BTreeSet::new(),
            danger_squares: BTreeSet::new(),
            check: king_in_check_square.is_some(),
            king_in_check_square,
            checkmate,
            captured,
            move_archive,
        })
    }
}

pub fn reduce(state: GameState, event: Event) -> GameState {
    match event {
        Event::Activate { square } => match state.try_activate(square) {
            Ok(new_state) => new_state,
            Err(err) => {
                debug!("Activation of {square} ignored: {err}");
                state.deselected()
            }
        },
        Event::Play { from, to } => match state.try_play(from, to) {
            Ok(new_state) => new_state,
            Err(err) => {
                debug!("Play from {from} to {to} ignored: {err}");
                state.deselected()
            }
        },
        Event::Restart => {
            info!("Game restarted");
            initial_state()
        }
    }
}

mod common;

use std::collections::BTreeSet;

use duel_chess::check::is_checkmate;
use duel_chess::{ArchiveEntry, Coord, Force, GameState, Phase, initial_state, reduce};
use pretty_assertions::assert_eq;

use common::{PieceIs, parse_state, replay};


#[test]
fn initial_layout() {
    let state = initial_state();
    assert_eq!(state.turn(), Force::White);
    assert_eq!(state.board().pieces_of(Force::White).count(), 16);
    assert_eq!(state.board().pieces_of(Force::Black).count(), 16);
    assert!(state.board()[Coord::D1].is(piece!(White Queen)));
    assert!(state.board()[Coord::E8].is(piece!(Black King)));
    assert!(state.board()[Coord::H7].is(piece!(Black Pawn)));
    assert_eq!(state.selection(), None);
    assert!(!state.is_check());
    assert!(!state.is_checkmate());
}

#[test]
fn activate_pawn_highlights_both_steps() {
    let state = reduce(initial_state(), event!(@ E2));
    assert_eq!(state.highlighted_moves(), &BTreeSet::from([Coord::E3, Coord::E4]));
    assert_eq!(state.selection(), Some(Coord::E2));
    assert_eq!(state.turn(), Force::White);
}

#[test]
fn play_pawn_double_step() {
    let state = replay(initial_state(), [event!(@ E2), event!(E2 -> E4)]);
    assert_eq!(state.board()[Coord::E2], None);
    assert!(state.board()[Coord::E4].is(piece!(White Pawn)));
    assert_eq!(state.turn(), Force::Black);
    assert_eq!(state.move_archive(), &[ArchiveEntry { from: Coord::E2, to: Coord::E4 }]);
}

#[test]
fn illegal_pawn_leap_only_clears_selection() {
    let selected = reduce(initial_state(), event!(@ E2));
    let state = reduce(selected.clone(), event!(E2 -> E5));
    assert_eq!(state.turn(), Force::White);
    assert_eq!(state.selection(), None);
    assert_eq!(state.board(), selected.board());
    assert!(state.move_archive().is_empty());
    assert_eq!(state, initial_state());
}

#[test]
fn play_without_prior_activation() {
    let state = reduce(initial_state(), event!(G1 -> F3));
    assert!(state.board()[Coord::F3].is(piece!(White Knight)));
    assert_eq!(state.turn(), Force::Black);
}

#[test]
fn queen_and_bishop_mate() {
    let state = parse_state(Force::Black, "
        . . . . k . . .
        . . . . Q . . .
        . . . . . . . .
        . . B . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . K . . .
    ");
    assert!(is_checkmate(state.board(), Force::Black));
    assert!(state.is_checkmate());
    assert_eq!(state.king_in_check_square(), Some(Coord::E8));
    assert_eq!(state.phase(), Phase::Over);

    // Every Black interaction is a no-op.
    let after = replay(state.clone(), [event!(@ E8), event!(E8 -> D8), event!(E8 -> E7)]);
    assert_eq!(after, state);
}

#[test]
fn fools_mate() {
    let state = replay(initial_state(), [
        event!(F2 -> F3),
        event!(E7 -> E5),
        event!(G2 -> G4),
        event!(D8 -> H4),
    ]);
    assert_eq!(state.turn(), Force::White);
    assert!(state.is_check());
    assert!(state.is_checkmate());
    assert_eq!(state.king_in_check_square(), Some(Coord::E1));
    assert_eq!(state.move_archive().len(), 4);
}

#[test]
fn check_must_be_answered() {
    let state = replay(initial_state(), [
        event!(E2 -> E4),
        event!(F7 -> F6),
        event!(D1 -> H5),
    ]);
    assert_eq!(state.king_in_check_square(), Some(Coord::E8));
    assert!(!state.is_checkmate());

    // A move that ignores the check is rejected.
    let ignored = reduce(state.clone(), event!(A7 -> A6));
    assert_eq!(ignored.turn(), Force::Black);
    assert_eq!(ignored.board(), state.board());

    let state = reduce(state, event!(G7 -> G6));
    assert_eq!(state.turn(), Force::White);
    assert!(!state.is_check());
    assert_eq!(state.king_in_check_square(), None);
}

#[test]
fn captured_pieces_are_keyed_by_their_own_color() {
    let state = replay(initial_state(), [
        event!(E2 -> E4),
        event!(D7 -> D5),
        event!(E4 -> D5),
        event!(D8 -> D5),
    ]);
    assert_eq!(state.captured(Force::Black).len(), 1);
    assert!(Some(state.captured(Force::Black)[0]).is(piece!(Black Pawn)));
    assert_eq!(state.captured(Force::White).len(), 1);
    assert!(Some(state.captured(Force::White)[0]).is(piece!(White Pawn)));
    assert!(state.board()[Coord::D5].is(piece!(Black Queen)));
}

#[test]
fn selection_switches_between_own_pieces() {
    let state = replay(initial_state(), [event!(@ E2), event!(@ B1)]);
    assert_eq!(state.selection(), Some(Coord::B1));
    assert_eq!(state.highlighted_moves(), &BTreeSet::from([Coord::A3, Coord::C3]));
}

#[test]
fn restart_resets_everything() {
    let state = replay(initial_state(), [
        event!(E2 -> E4),
        event!(D7 -> D5),
        event!(E4 -> D5),
        event!(@ G8),
        event!(restart),
    ]);
    assert_eq!(state, initial_state());
    assert_eq!(state.last_move(), None);
}

#[test]
fn snapshot_can_be_restored() {
    let state = replay(initial_state(), [event!(E2 -> E4), event!(@ B8)]);
    let serialized = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, state);
    let state = reduce(restored, event!(B8 -> C6));
    assert!(state.board()[Coord::C6].is(piece!(Black Knight)));
}

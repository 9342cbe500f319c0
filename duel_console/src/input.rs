// Turns typed lines into engine events. A single square is a tap; like on a touch
// screen, tapping a piece of the side to move selects it and tapping anything else
// while a piece is selected tries to move there.

use anyhow::{anyhow, bail};
use duel_chess::{Coord, Event, GameState};
use itertools::Itertools;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <square>          tap a square, e.g. \"e2\"
  <from> <to>       move a piece, e.g. \"e2 e4\"
  restart           start a new game
  help              show this message
  quit              exit";

pub fn tap_event(state: &GameState, square: Coord) -> Event {
    let own_piece = state.board()[square].is_some_and(|piece| piece.force == state.turn());
    match state.selection() {
        Some(from) if !own_piece => Event::Play { from, to: square },
        _ => Event::Activate { square },
    }
}

fn parse_square(s: &str) -> anyhow::Result<Coord> {
    Coord::from_algebraic(s).ok_or_else(|| anyhow!("'{s}' is not a square"))
}

pub fn parse_command(state: &GameState, line: &str) -> anyhow::Result<Command> {
    let words = line.split_whitespace().map(|w| w.to_ascii_lowercase()).collect_vec();
    match words.iter().map(String::as_str).collect_vec().as_slice() {
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["restart"] => Ok(Command::Event(Event::Restart)),
        [square] => Ok(Command::Event(tap_event(state, parse_square(square)?))),
        [from, to] => Ok(Command::Event(Event::Play {
            from: parse_square(from)?,
            to: parse_square(to)?,
        })),
        [] => bail!("Empty command. Type \"help\" for the list of commands."),
        _ => bail!("Unknown command: '{}'", line.trim()),
    }
}


#[cfg(test)]
mod tests {
    use duel_chess::{initial_state, reduce};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_tap_activates() {
        let state = initial_state();
        assert_eq!(
            parse_command(&state, "e2").unwrap(),
            Command::Event(Event::Activate { square: Coord::E2 })
        );
    }

    #[test]
    fn second_tap_plays() {
        let state = reduce(initial_state(), Event::Activate { square: Coord::E2 });
        assert_eq!(
            parse_command(&state, "E4").unwrap(),
            Command::Event(Event::Play { from: Coord::E2, to: Coord::E4 })
        );
        // Tapping another own piece switches selection.
        assert_eq!(
            parse_command(&state, "d2").unwrap(),
            Command::Event(Event::Activate { square: Coord::D2 })
        );
    }

    #[test]
    fn explicit_move() {
        let state = initial_state();
        assert_eq!(
            parse_command(&state, " g1  f3 ").unwrap(),
            Command::Event(Event::Play { from: Coord::G1, to: Coord::F3 })
        );
    }

    #[test]
    fn malformed_input() {
        let state = initial_state();
        assert!(parse_command(&state, "").is_err());
        assert!(parse_command(&state, "i9").is_err());
        assert!(parse_command(&state, "e2 e4 e5").is_err());
        assert_eq!(parse_command(&state, "quit").unwrap(), Command::Quit);
    }
}

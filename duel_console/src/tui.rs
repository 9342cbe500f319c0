use console::Style;
use duel_chess::display::{self, render_pieces};
use duel_chess::{CellView, Col, Coord, Force, GameState, PieceStyle, Row};
use itertools::Itertools;

use crate::config::ConsoleConfig;


fn cell_style(cell: CellView, coord: Coord, selected: bool) -> Style {
    let base = Style::new().color256(233);
    if cell.king_in_check {
        base.on_color256(203)
    } else if cell.danger {
        base.on_color256(217)
    } else if cell.highlighted {
        base.on_color256(151)
    } else if selected {
        base.on_color256(117)
    } else if cell.moved_from || cell.moved_to {
        base.on_color256(186)
    } else if (coord.row.to_zero_based() + coord.col.to_zero_based()) % 2 == 0 {
        base.on_color256(222)
    } else {
        base.on_color256(230)
    }
}

// Without colors, highlights are marked by the characters around the square.
fn plain_square(cell: CellView, selected: bool, style: PieceStyle) -> String {
    let ch = match cell.piece {
        Some(piece) => display::piece_char(piece, style),
        None if cell.highlighted => '*',
        None => '.',
    };
    let (left, right) = if selected {
        ('[', ']')
    } else if cell.danger || cell.king_in_check {
        ('<', '>')
    } else if cell.moved_from || cell.moved_to {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    format!("{left}{ch}{right}")
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }

pub fn render_board(state: &GameState, config: &ConsoleConfig) -> String {
    let files = format!(
        "{}{}\n",
        format_square(' '),
        Col::all().map(|col| format_square(col.to_algebraic())).join("")
    );
    let mut ret = files.clone();
    for row in Row::all().rev() {
        ret.push_str(&format_square(row.to_algebraic()));
        for col in Col::all() {
            let coord = Coord::new(row, col);
            let cell = state.cell(coord);
            let selected = state.selection() == Some(coord);
            let square = if config.colored {
                let ch = match cell.piece {
                    Some(piece) => display::piece_char(piece, config.pictograms),
                    None if cell.highlighted => '·',
                    None => ' ',
                };
                cell_style(cell, coord, selected).apply_to(format_square(ch)).to_string()
            } else {
                plain_square(cell, selected, config.pictograms)
            };
            ret.push_str(&square);
        }
        ret.push_str(&format_square(row.to_algebraic()));
        ret.push('\n');
    }
    ret.push_str(&files);
    ret
}

pub fn render_status(state: &GameState) -> String {
    let turn = state.turn();
    if state.is_checkmate() {
        if state.is_check() {
            format!("Checkmate. {} wins.", turn.opponent())
        } else {
            format!("{turn} has no legal moves. Game over.")
        }
    } else if let Some(king_pos) = state.king_in_check_square() {
        format!("{turn} to move. Check to the king on {king_pos}!")
    } else if let Some(square) = state.selection() {
        format!("{turn} to move. Selected {square}.")
    } else {
        format!("{turn} to move.")
    }
}

pub fn render_game(state: &GameState, config: &ConsoleConfig) -> String {
    let mut ret = render_board(state, config);
    for force in [Force::White, Force::Black] {
        let captured = state.captured(force);
        if !captured.is_empty() {
            ret.push_str(&format!(
                "Captured {} pieces: {}\n",
                force.to_string().to_lowercase(),
                render_pieces(captured, config.pictograms)
            ));
        }
    }
    if config.show_archive && !state.move_archive().is_empty() {
        let archive = state
            .move_archive()
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {}", idx + 1, entry))
            .join(", ");
        ret.push_str(&format!("Moves: {archive}\n"));
    }
    ret.push_str(&render_status(state));
    ret.push('\n');
    ret
}


#[cfg(test)]
mod tests {
    use duel_chess::{Event, initial_state, reduce};
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain_config() -> ConsoleConfig {
        ConsoleConfig {
            pictograms: PieceStyle::Ascii,
            colored: false,
            ..ConsoleConfig::default()
        }
    }

    #[test]
    fn status_line() {
        let state = initial_state();
        assert_eq!(render_status(&state), "White to move.");
        let state = reduce(state, Event::Activate { square: Coord::E2 });
        assert_eq!(render_status(&state), "White to move. Selected e2.");
    }

    #[test]
    fn plain_board_marks_selection_and_targets() {
        let state = reduce(initial_state(), Event::Activate { square: Coord::E2 });
        let board = render_board(&state, &plain_config());
        let lines = board.lines().collect_vec();
        assert_eq!(lines[5], " 4  .  .  .  .  *  .  .  .  4 ");
        assert_eq!(lines[7], " 2  P  P  P  P [P] P  P  P  2 ");
    }

    #[test]
    fn plain_starting_board() {
        let board = render_board(&initial_state(), &plain_config());
        let lines = board.lines().collect_vec();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    a  b  c  d  e  f  g  h ");
        assert_eq!(lines[1], " 8  r  n  b  q  k  b  n  r  8 ");
        assert_eq!(lines[8], " 1  R  N  B  Q  K  B  N  R  1 ");
        assert_eq!(lines[9], lines[0]);
    }

    #[test]
    fn archive_and_captures() {
        let mut state = initial_state();
        for (from, to) in [(Coord::E2, Coord::E4), (Coord::D7, Coord::D5), (Coord::E4, Coord::D5)] {
            state = reduce(state, Event::Play { from, to });
        }
        let text = render_game(&state, &plain_config());
        assert!(text.contains("Captured black pieces: p\n"));
        assert!(text.contains("Moves: 1. e2 to e4, 2. d7 to d5, 3. e4 to d5\n"));
        assert!(text.ends_with("Black to move.\n"));
    }
}

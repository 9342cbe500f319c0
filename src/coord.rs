use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


const fn const_char_sub(a: char, b: char) -> u8 {
    let a_idx = a as u32;
    let b_idx = b as u32;
    assert!(a_idx >= b_idx);
    let diff = a_idx - b_idx;
    assert!(diff <= u8::MAX as u32);
    diff as u8
}


// A rank. `idx` is 0-based, so rank '1' is `Row { idx: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Row {
    idx: u8,
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        if (0..NUM_ROWS as i8).contains(&idx) { Some(Self { idx: idx as u8 }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        if ('1'..='8').contains(&ch) { Some(Self::from_algebraic_unchecked(ch)) } else { None }
    }
    const fn from_algebraic_unchecked(ch: char) -> Self {
        Self::from_zero_based(const_char_sub(ch, '1'))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
    pub fn try_add(self, delta: i8) -> Option<Self> {
        Self::try_from_zero_based(self.idx as i8 + delta)
    }
}


// A file. `idx` is 0-based, so file 'a' is `Col { idx: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Col {
    idx: u8,
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        if (0..NUM_COLS as i8).contains(&idx) { Some(Self { idx: idx as u8 }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        if ('a'..='h').contains(&ch) { Some(Self::from_algebraic_unchecked(ch)) } else { None }
    }
    const fn from_algebraic_unchecked(ch: char) -> Self {
        Self::from_zero_based(const_char_sub(ch, 'a'))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
    pub fn try_add(self, delta: i8) -> Option<Self> {
        Self::try_from_zero_based(self.idx as i8 + delta)
    }
}


// A board square. Ordered rank-major, so `a1 < h1 < a2`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    // Parses "e4"-style square names. Anything else, including off-board squares
    // like "i1" or "a9", yields `None`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Coord::new(Row::from_algebraic(row)?, Col::from_algebraic(col)?))
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    pub fn all() -> impl Iterator<Item = Coord> + Clone {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    // Offset is `(d_row, d_col)`. Returns `None` when the result leaves the board:
    // there is no wraparound between files.
    pub fn try_add(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Some(Coord::new(self.row.try_add(d_row)?, self.col.try_add(d_col)?))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({self})")
    }
}


impl Row {
    pub const _1: Row = Row::from_algebraic_unchecked('1');
    pub const _2: Row = Row::from_algebraic_unchecked('2');
    pub const _3: Row = Row::from_algebraic_unchecked('3');
    pub const _4: Row = Row::from_algebraic_unchecked('4');
    pub const _5: Row = Row::from_algebraic_unchecked('5');
    pub const _6: Row = Row::from_algebraic_unchecked('6');
    pub const _7: Row = Row::from_algebraic_unchecked('7');
    pub const _8: Row = Row::from_algebraic_unchecked('8');
}

impl Col {
    pub const A: Col = Col::from_algebraic_unchecked('a');
    pub const B: Col = Col::from_algebraic_unchecked('b');
    pub const C: Col = Col::from_algebraic_unchecked('c');
    pub const D: Col = Col::from_algebraic_unchecked('d');
    pub const E: Col = Col::from_algebraic_unchecked('e');
    pub const F: Col = Col::from_algebraic_unchecked('f');
    pub const G: Col = Col::from_algebraic_unchecked('g');
    pub const H: Col = Col::from_algebraic_unchecked('h');
}

macro_rules! file_squares {
    ($col:ident: $($name:ident @ $row:ident),+ $(,)?) => {
        $(pub const $name: Coord = Coord::new(Row::$row, Col::$col);)+
    };
}

impl Coord {
    file_squares!(A: A1 @ _1, A2 @ _2, A3 @ _3, A4 @ _4, A5 @ _5, A6 @ _6, A7 @ _7, A8 @ _8);
    file_squares!(B: B1 @ _1, B2 @ _2, B3 @ _3, B4 @ _4, B5 @ _5, B6 @ _6, B7 @ _7, B8 @ _8);
    file_squares!(C: C1 @ _1, C2 @ _2, C3 @ _3, C4 @ _4, C5 @ _5, C6 @ _6, C7 @ _7, C8 @ _8);
    file_squares!(D: D1 @ _1, D2 @ _2, D3 @ _3, D4 @ _4, D5 @ _5, D6 @ _6, D7 @ _7, D8 @ _8);
    file_squares!(E: E1 @ _1, E2 @ _2, E3 @ _3, E4 @ _4, E5 @ _5, E6 @ _6, E7 @ _7, E8 @ _8);
    file_squares!(F: F1 @ _1, F2 @ _2, F3 @ _3, F4 @ _4, F5 @ _5, F6 @ _6, F7 @ _7, F8 @ _8);
    file_squares!(G: G1 @ _1, G2 @ _2, G3 @ _3, G4 @ _4, G5 @ _5, G6 @ _6, G7 @ _7, G8 @ _8);
    file_squares!(H: H1 @ _1, H2 @ _2, H3 @ _3, H4 @ _4, H5 @ _5, H6 @ _6, H7 @ _7, H8 @ _8);
}

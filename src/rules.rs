use crate::board::{Board, Cell, Mark};
use std::fmt;
use std::io::{self, Write};

/// Whose move it is, derived from the marks already on the board.
/// X moves whenever it has no more marks than O.
pub fn next_mark(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) { Mark::X } else { Mark::O }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// All eight winning lines in detection order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    Line::Row(0), Line::Row(1), Line::Row(2),
    Line::Column(0), Line::Column(1), Line::Column(2),
    Line::Diagonal, Line::AntiDiagonal,
];

impl Line {
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::Row(r) => {
                let r = r as usize * 3;
                [r, r + 1, r + 2]
            }
            Line::Column(c) => {
                let c = c as usize;
                [c, c + 3, c + 6]
            }
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.cells().map(|i| board.cell(i).unwrap_or(Cell::Empty));
        if a == b && b == c { a.mark() } else { None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win { mark: Mark, line: Line },
    Tie,
}

impl Outcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win { mark, .. } => write!(f, "The game was won by {mark}"),
            Outcome::Tie => write!(f, "The game is a tie!"),
        }
    }
}

/// Terminal state of the board, if any. The first completed line in
/// `LINES` order wins; a full board with no line is a tie.
pub fn outcome(board: &Board) -> Option<Outcome> {
    for line in LINES {
        if let Some(mark) = line.owner(board) {
            return Some(Outcome::Win { mark, line });
        }
    }
    if board.is_full() { Some(Outcome::Tie) } else { None }
}

pub fn is_finished(board: &Board) -> bool {
    outcome(board).is_some()
}

/// Same as `is_finished`, also writing the outcome message when the game is over.
pub fn is_finished_with_message<W: Write>(board: &Board, out: &mut W) -> io::Result<bool> {
    match outcome(board) {
        Some(o) => {
            writeln!(out, "{o}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}

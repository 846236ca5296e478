use serde::{Deserialize, Serialize};
use std::fmt;

pub const CELL_COUNT: usize = 9;

/// One player's symbol. X always moves first on a blank board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single square, serialized as `" "`, `"X"` or `"O"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = " ")]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn symbol(self) -> char {
        self.mark().map_or(' ', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Nine cells in row-major order: `index = row * 3 + col`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// A fresh board with every cell empty.
    pub fn blank() -> Self {
        Self { cells: [Cell::Empty; CELL_COUNT] }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] { &self.cells }

    pub fn cell(&self, index: usize) -> Option<Cell> { self.cells.get(index).copied() }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    /// Puts `mark` at `index` if that cell exists and is empty.
    /// Returns false and leaves the board untouched otherwise.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = mark.into();
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 { writeln!(f, "---+---+---")?; }
            writeln!(f, " {} | {} | {} ", chunk[0].symbol(), chunk[1].symbol(), chunk[2].symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_board_has_nine_empty_cells() {
        let b = Board::blank();
        assert_eq!(b.cells().len(), CELL_COUNT);
        assert!(b.is_blank());
        assert!(!b.is_full());
    }

    #[test]
    fn place_refuses_occupied_and_out_of_range() {
        let mut b = Board::blank();
        assert!(b.place(4, Mark::X));
        assert!(!b.place(4, Mark::O));
        assert_eq!(b.cell(4), Some(Cell::X));
        assert!(!b.place(9, Mark::O));
        assert_eq!(b.count(Mark::X), 1);
        assert_eq!(b.count(Mark::O), 0);
    }

    #[test]
    fn display_renders_grid() {
        let mut b = Board::blank();
        b.place(0, Mark::X);
        b.place(8, Mark::O);
        let s = b.to_string();
        assert_eq!(s, " X |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   | O \n");
    }
}

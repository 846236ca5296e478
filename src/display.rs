use crate::board::{Board, Mark};
use crate::rules::Outcome;
use std::io::{self, Write};

/// Position numbers accepted at the prompt.
pub const LEGEND: &str = " 1 | 2 | 3\n---+---+---\n 4 | 5 | 6\n---+---+---\n 7 | 8 | 9\n";

pub fn write_prompt<W: Write>(out: &mut W, board: &Board, mark: Mark, quit_token: &str) -> io::Result<()> {
    writeln!(out, "Enter '{quit_token}' to suspend your game. Otherwise, enter a number from 1 to 9")?;
    writeln!(out, "where the following numbers correspond to the locations on the grid:")?;
    writeln!(out, "{LEGEND}")?;
    writeln!(out, "The current board is:")?;
    writeln!(out, "{board}")?;
    write!(out, "{mark}> ")?;
    out.flush()
}

pub fn write_final<W: Write>(out: &mut W, board: &Board, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "The final board is:")?;
    writeln!(out, "{board}")?;
    writeln!(out, "{outcome}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_rows_line_up() {
        let rows: Vec<&str> = LEGEND.lines().collect();
        assert_eq!(rows, [" 1 | 2 | 3", "---+---+---", " 4 | 5 | 6", "---+---+---", " 7 | 8 | 9"]);
    }
}

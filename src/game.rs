use crate::board::{Board, Mark};
use crate::display::{write_final, write_prompt};
use crate::input::{parse_command_bytes, Command};
use crate::rules::{next_mark, outcome, Outcome};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    MoveApplied,
    GameOver(Outcome),
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Placed(Mark),
    Occupied,
}

/// Places the mark of whoever is to move. An occupied target leaves the board as is.
pub fn apply_move(board: &mut Board, index: usize) -> Placement {
    let mark = next_mark(board);
    if board.place(index, mark) { Placement::Placed(mark) } else { Placement::Occupied }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    Suspended,
    Finished(Outcome),
}

/// Result of a session: the board to persist and how play stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEnd {
    pub board: Board,
    pub ending: Ending,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
    quit_token: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W, quit_token: &str) -> Self {
        Self { board, input, output, quit_token: quit_token.to_string() }
    }

    pub fn board(&self) -> &Board { &self.board }

    /// Plays until a quit signal, end of input, or a terminal board.
    /// A finished game hands back a blank board; a suspended one hands back the board as played.
    /// On a console error the board in play is still available from `board()`.
    pub fn run(&mut self) -> Result<GameEnd, GameError> {
        // A saved board can already be terminal if the file was edited by hand.
        let mut state = match outcome(&self.board) {
            Some(o) => LoopState::GameOver(o),
            None => LoopState::AwaitingInput,
        };
        loop {
            state = match state {
                LoopState::AwaitingInput => self.await_input()?,
                LoopState::MoveApplied => match outcome(&self.board) {
                    Some(o) => LoopState::GameOver(o),
                    None => LoopState::AwaitingInput,
                },
                LoopState::GameOver(o) => {
                    let last = std::mem::replace(&mut self.board, Board::blank());
                    info!("game over: {o}");
                    write_final(&mut self.output, &last, &o)?;
                    return Ok(GameEnd { board: Board::blank(), ending: Ending::Finished(o) });
                }
                LoopState::Suspended => {
                    info!("game suspended");
                    return Ok(GameEnd { board: self.board.clone(), ending: Ending::Suspended });
                }
            };
        }
    }

    fn await_input(&mut self) -> Result<LoopState, GameError> {
        let mark = next_mark(&self.board);
        write_prompt(&mut self.output, &self.board, mark, &self.quit_token)?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            debug!("input closed while waiting for {mark}");
            return Ok(LoopState::Suspended);
        }
        match parse_command_bytes(&line, &self.quit_token) {
            Ok(Command::Quit) => Ok(LoopState::Suspended),
            Ok(Command::Place(index)) => match apply_move(&mut self.board, index) {
                Placement::Placed(m) => {
                    debug!("{m} takes cell {index}");
                    Ok(LoopState::MoveApplied)
                }
                Placement::Occupied => {
                    debug!("cell {index} is taken, ignoring");
                    Ok(LoopState::AwaitingInput)
                }
            },
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(LoopState::AwaitingInput)
            }
        }
    }
}

use crate::board::Board;
use log::{debug, error, warn};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardFileError {
    #[error("could not open file {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("i/o error on {}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },
    #[error("malformed board in {}: {source}", .path.display())]
    Format { path: PathBuf, #[source] source: serde_json::Error },
}

// Files are written as a flat array; older saves wrapped it as {"board": [...]}.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoardDocument {
    Flat(Board),
    Keyed { board: Board },
}

impl From<BoardDocument> for Board {
    fn from(doc: BoardDocument) -> Self {
        match doc {
            BoardDocument::Flat(b) | BoardDocument::Keyed { board: b } => b,
        }
    }
}

pub fn from_json_str(s: &str) -> Result<Board, serde_json::Error> {
    serde_json::from_str::<BoardDocument>(s).map(Board::from)
}

pub fn to_json_string(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string(board)
}

/// Reads a board, failing on any problem including a missing file.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board, BoardFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BoardFileError::NotFound { path: path.to_path_buf() },
        _ => BoardFileError::Io { path: path.to_path_buf(), source: e },
    })?;
    from_json_str(&text).map_err(|source| BoardFileError::Format { path: path.to_path_buf(), source })
}

pub fn write_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<(), BoardFileError> {
    let path = path.as_ref();
    let text = to_json_string(board)
        .map_err(|source| BoardFileError::Format { path: path.to_path_buf(), source })?;
    fs::write(path, text)
        .map_err(|source| BoardFileError::Io { path: path.to_path_buf(), source })?;
    debug!("saved board to {}", path.display());
    Ok(())
}

/// Reads the saved board, or a blank one when no file exists yet.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Board, BoardFileError> {
    match read_board(&path) {
        Err(e @ BoardFileError::NotFound { .. }) => {
            warn!("{e}; starting a new game");
            Ok(Board::blank())
        }
        other => other,
    }
}

/// Writes the board, logging and swallowing any failure. Returns whether it was saved.
pub fn save<P: AsRef<Path>>(path: P, board: &Board) -> bool {
    match write_board(path, board) {
        Ok(()) => true,
        Err(e) => {
            error!("{e}; the board was not saved");
            false
        }
    }
}

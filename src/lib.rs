// Console tic-tac-toe: board model, rules, persistence and the turn loop
pub mod board;
pub mod config;
pub mod display;
pub mod game;
pub mod input;
pub mod persist;
pub mod rules;

pub use board::{Board, Cell, Mark};
pub use rules::{is_finished, next_mark, outcome, Outcome};

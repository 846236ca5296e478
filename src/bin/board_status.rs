use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe::{next_mark, outcome, persist};

#[derive(Parser, Debug)]
#[command(name = "board_status", about = "Show a saved tic-tac-toe board and its state")]
struct Args {
    #[arg(default_value = "board.json")]
    board: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let board = persist::read_board(&a.board)
        .with_context(|| format!("reading {}", a.board.display()))?;
    println!("{board}");
    match outcome(&board) {
        Some(o) => println!("{o}"),
        None => println!("{} to move", next_mark(&board)),
    }
    Ok(())
}

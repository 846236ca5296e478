use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::io;
use tictactoe::config::GameConfig;
use tictactoe::game::Session;
use tictactoe::{persist, Board};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = GameConfig::parse();

    let board = if config.fresh {
        Board::blank()
    } else {
        // An unreadable save should not keep anyone from playing.
        persist::load(&config.board_path).unwrap_or_else(|e| {
            error!("{e}; starting a new game");
            Board::blank()
        })
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(board, stdin.lock(), stdout.lock(), &config.quit_token);
    let result = session.run();

    // The board is persisted even when the console fails mid-game.
    if config.should_save() {
        let board = match &result {
            Ok(end) => &end.board,
            Err(_) => session.board(),
        };
        persist::save(&config.board_path, board);
    }
    result.context("game loop failed")?;
    Ok(())
}

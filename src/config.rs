use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe", author, version, about = "Two-player tic-tac-toe on the console", long_about = None)]
pub struct GameConfig {
    /// File the board is loaded from and saved to
    #[arg(long = "board", default_value = "board.json")]
    pub board_path: PathBuf,

    /// Input that suspends the game
    #[arg(long = "quit", default_value = "q")]
    pub quit_token: String,

    /// Ignore any saved board and start blank
    #[arg(long)]
    pub fresh: bool,

    /// Do not write the board back on exit
    #[arg(long)]
    pub no_save: bool,
}

impl GameConfig {
    pub fn should_save(&self) -> bool { !self.no_save }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GameConfig::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(c.board_path, PathBuf::from("board.json"));
        assert_eq!(c.quit_token, "q");
        assert!(!c.fresh);
        assert!(c.should_save());
    }

    #[test]
    fn overrides() {
        let c = GameConfig::try_parse_from([
            "tictactoe", "--board", "saves/b.json", "--quit", "exit", "--fresh", "--no-save",
        ]).unwrap();
        assert_eq!(c.board_path, PathBuf::from("saves/b.json"));
        assert_eq!(c.quit_token, "exit");
        assert!(c.fresh);
        assert!(!c.should_save());
    }
}

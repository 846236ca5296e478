use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index, 0..=8.
    Place(usize),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number; enter a number from 1 to 9")]
    NotANumber(String),
    #[error("{0} is out of range; enter a number from 1 to 9")]
    OutOfRange(String),
    #[error("input was not readable text; enter a number from 1 to 9")]
    NotText,
}

/// Parses one line of player input. Positions are 1-based on the console.
pub fn parse_command(line: &str, quit_token: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line == quit_token { return Ok(Command::Quit); }
    let digits = line.strip_prefix('-').unwrap_or(line);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(line.to_string()));
    }
    // Only 1..=9 fit; anything longer than one digit is out of range however large.
    match line.parse::<u8>() {
        Ok(n @ 1..=9) => Ok(Command::Place(n as usize - 1)),
        _ => Err(InputError::OutOfRange(line.to_string())),
    }
}

/// Same as `parse_command` for raw console bytes, which need not be UTF-8.
pub fn parse_command_bytes(line: &[u8], quit_token: &str) -> Result<Command, InputError> {
    let text = std::str::from_utf8(line).map_err(|_| InputError::NotText)?;
    parse_command(text, quit_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions_and_quit() {
        assert_eq!(parse_command("1", "q"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9\n", "q"), Ok(Command::Place(8)));
        assert_eq!(parse_command("q", "q"), Ok(Command::Quit));
        assert_eq!(parse_command("quit", "quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage_and_range() {
        assert_eq!(parse_command("x", "q"), Err(InputError::NotANumber("x".into())));
        assert_eq!(parse_command("", "q"), Err(InputError::NotANumber(String::new())));
        assert_eq!(parse_command("-", "q"), Err(InputError::NotANumber("-".into())));
        assert_eq!(parse_command("0", "q"), Err(InputError::OutOfRange("0".into())));
        assert_eq!(parse_command("10", "q"), Err(InputError::OutOfRange("10".into())));
        assert_eq!(parse_command("-3", "q"), Err(InputError::OutOfRange("-3".into())));
        // quit token is exact
        assert!(parse_command("Q", "q").is_err());
    }

    #[test]
    fn huge_numbers_are_out_of_range() {
        let big = "99999999999999999999";
        assert_eq!(parse_command(big, "q"), Err(InputError::OutOfRange(big.into())));
    }

    #[test]
    fn invalid_utf8_is_not_text() {
        assert_eq!(parse_command_bytes(b"\xff\xfe\n", "q"), Err(InputError::NotText));
        assert_eq!(parse_command_bytes(b"5\n", "q"), Ok(Command::Place(4)));
    }
}

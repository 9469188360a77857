//! Player input: single letters (`l/r/u/d/e`) or the full words.

use std::str::FromStr;

use crate::engine::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("invalid move '{0}', expected one of l/r/u/d/e")]
    InvalidDirection(String),
}

impl FromStr for Move {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Command>()? {
            Command::Move(dir) => Ok(dir),
            Command::Quit => Err(ParseCommandError::InvalidDirection(s.trim().to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// ```
    /// use slide_2048::command::Command;
    /// use slide_2048::engine::Move;
    /// assert_eq!("l".parse::<Command>(), Ok(Command::Move(Move::Left)));
    /// assert_eq!(" Exit\n".parse::<Command>(), Ok(Command::Quit));
    /// assert!("x".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let command = match token.to_ascii_lowercase().as_str() {
            "l" | "left" => Command::Move(Move::Left),
            "r" | "right" => Command::Move(Move::Right),
            "u" | "up" => Command::Move(Move::Up),
            "d" | "down" => Command::Move(Move::Down),
            "e" | "q" | "exit" | "quit" => Command::Quit,
            _ => return Err(ParseCommandError::InvalidDirection(token.to_string())),
        };
        Ok(command)
    }
}

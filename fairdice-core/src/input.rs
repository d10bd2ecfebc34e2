use crate::{GameError, Result};
use std::str::FromStr;

/// A line typed at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Number(u32),
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();

        match line {
            "x" | "X" => return Ok(Command::Exit),
            "?" => return Ok(Command::Help),
            _ => {}
        }

        if line.contains(',') {
            return Err(GameError::input_format(format!(
                "'{}' contains a comma, enter a single number",
                line
            )));
        }

        line.parse::<u32>().map(Command::Number).map_err(|_| {
            GameError::input_format(format!("'{}' is not a non-negative integer", line))
        })
    }
}

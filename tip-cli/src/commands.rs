use std::str::FromStr;

use thiserror::Error;
use tip_core::{PresetRate, UnknownPresetError};

/// Errors produced while reading a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidPreset(#[from] UnknownPresetError),
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the bill amount. The argument may be empty to clear it.
    Amount(String),
    Preset(PresetRate),
    Custom,
    /// Replace the custom rate text.
    Rate(String),
    Pay,
    ToggleHistory,
    Show,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
Commands:
  amount <text>     set the bill amount (empty clears it)
  preset <10|15|25> choose a preset tip rate
  custom            switch to a custom tip rate
  rate <text>       type the custom tip rate
  pay               record the current calculation
  history           show or hide the history
  show              redraw the screen
  help              show this list
  quit              exit";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((line, ""));

        match name.to_ascii_lowercase().as_str() {
            "amount" | "a" => Ok(Self::Amount(arg.to_string())),
            "preset" | "p" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("preset"));
                }
                Ok(Self::Preset(arg.parse()?))
            }
            "custom" | "c" => Ok(Self::Custom),
            "rate" | "r" => Ok(Self::Rate(arg.to_string())),
            "pay" => Ok(Self::Pay),
            "history" | "h" => Ok(Self::ToggleHistory),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

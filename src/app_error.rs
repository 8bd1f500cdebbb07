use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("could not create log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid game settings: {0}")]
    Config(#[from] snek::ConfigError),
    #[error("terminal of {width}x{height} is too small for a game board")]
    TerminalTooSmall { width: u16, height: u16 },
}

pub type Result<T = ()> = std::result::Result<T, AppError>;

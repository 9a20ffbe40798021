use std::io;

use thiserror::Error;

use crate::layer::StateKey;
use crate::player::PlayerId;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("No game state registered under key {0:?}")]
    UnknownStateKey(StateKey),

    #[error("Player {id} not found under key {key:?}")]
    UnknownPlayer { key: StateKey, id: PlayerId },

    #[error("Invalid grid dimensions {columns}x{rows}")]
    InvalidGrid { columns: u32, rows: u32 },

    #[error("Invalid fill style '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidFillStyle(String),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;

//! Errors raised when a host applies an action it has not validated.

use thiserror::Error;

use super::Action;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal action {action} at ply {ply}")]
    IllegalAction { action: Action, ply: u32 },

    #[error("game already over at ply {ply}")]
    GameOver { ply: u32 },
}

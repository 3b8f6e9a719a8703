use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("No players registered")]
    NoPlayers,
    #[error("Player {0} is already registered")]
    DuplicatePlayer(PlayerId),
    #[error("Registration is closed once the first round has started")]
    RegistrationClosed,
    #[error("No player reached the score threshold within {0} rounds")]
    RoundLimit(u32),
    #[error("Failed to write round record: {0}")]
    RoundLog(#[from] std::io::Error),
}

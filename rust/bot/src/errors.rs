use hgm_engine::GameError;
use thiserror::Error;

use crate::session::ParticipantId;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Already playing: {0}")]
    AlreadyPlaying(ParticipantId),
    #[error("No active session: {0}")]
    NoActiveSession(ParticipantId),
    #[error("Subscription not found: {0}")]
    NotFound(ParticipantId),
    #[error("Mail outbox closed")]
    OutboxClosed,
    #[error("Session storage poisoned")]
    StoragePoisoned,
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

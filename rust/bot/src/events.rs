use std::collections::HashMap;
use std::sync::RwLock;

use hgm_engine::{GameStatus, GuessOutcome, Render};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::session::ParticipantId;

pub type RenderSender = mpsc::UnboundedSender<GameEvent>;
pub type RenderReceiver = mpsc::UnboundedReceiver<GameEvent>;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        participant: ParticipantId,
        render: Render,
    },
    GuessResolved {
        participant: ParticipantId,
        outcome: GuessOutcome,
        render: Render,
    },
    GameFinished {
        participant: ParticipantId,
        status: GameStatus,
        render: Render,
    },
}

impl GameEvent {
    pub fn participant(&self) -> &ParticipantId {
        match self {
            GameEvent::GameStarted { participant, .. }
            | GameEvent::GuessResolved { participant, .. }
            | GameEvent::GameFinished { participant, .. } => participant,
        }
    }
}

/// Render sinks for the games in flight, keyed by participant.
///
/// A sink follows one game: after `GameFinished` is delivered the
/// participant's sinks are dropped, which closes their receivers. Display
/// code watching the next game subscribes again.
#[derive(Debug, Default)]
pub struct EventBus {
    sinks: RwLock<HashMap<ParticipantId, Vec<RenderSender>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, participant: ParticipantId) -> RenderReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut guard = self
            .sinks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.entry(participant).or_default().push(tx);
        rx
    }

    /// Delivers `event` to the sinks of its participant.
    pub fn publish(&self, event: GameEvent) {
        let participant = event.participant().clone();
        let finished = matches!(event, GameEvent::GameFinished { .. });

        let mut guard = self
            .sinks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(sinks) = guard.get_mut(&participant) else {
            return;
        };
        sinks.retain(|tx| tx.send(event.clone()).is_ok());

        if finished || sinks.is_empty() {
            guard.remove(&participant);
            tracing::debug!(%participant, finished, "render sinks released");
        }
    }

    pub fn watched_participants(&self) -> usize {
        self.sinks
            .read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }
}

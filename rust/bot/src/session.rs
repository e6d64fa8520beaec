use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use hgm_engine::{GameSession, GuessOutcome, Letter, Render, Word};
use serde::{Deserialize, Serialize};

use crate::errors::BotError;

/// Opaque, stable identifier handed to us by the chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for ParticipantId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

type Slot = Arc<Mutex<GameSession>>;

/// Result of a store-mediated guess.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub outcome: GuessOutcome,
    pub render: Render,
    /// Final state of the session when this guess ended the game. The session
    /// is no longer in the store at this point.
    pub finished: Option<GameSession>,
}

/// At most one live game per participant.
///
/// Each session sits behind its own mutex so guesses for different participants
/// run in parallel while guesses for the same participant are serialized. A
/// session that reaches a terminal status is removed from the map before its
/// mutex is released.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<ParticipantId, Slot>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ParticipantId) -> Result<bool, BotError> {
        let guard = self.sessions.read().map_err(|_| BotError::StoragePoisoned)?;
        Ok(guard.contains_key(id))
    }

    pub fn create_session(
        &self,
        id: &ParticipantId,
        player: &str,
        word: Word,
    ) -> Result<Render, BotError> {
        let mut guard = self.sessions.write().map_err(|_| BotError::StoragePoisoned)?;
        match guard.entry(id.clone()) {
            Entry::Occupied(_) => Err(BotError::AlreadyPlaying(id.clone())),
            Entry::Vacant(vacant) => {
                let session = GameSession::new(player, word);
                let render = Render::of(&session);
                vacant.insert(Arc::new(Mutex::new(session)));
                tracing::info!(participant = %id, "session created");
                Ok(render)
            }
        }
    }

    pub fn get(&self, id: &ParticipantId) -> Result<Render, BotError> {
        let slot = self.slot(id)?;
        let session = slot.lock().map_err(|_| BotError::StoragePoisoned)?;
        if session.status().is_terminal() {
            return Err(BotError::NoActiveSession(id.clone()));
        }
        Ok(Render::of(&session))
    }

    pub fn resolve_guess(&self, id: &ParticipantId, letter: Letter) -> Result<Resolution, BotError> {
        let slot = self.slot(id)?;
        let mut session = slot.lock().map_err(|_| BotError::StoragePoisoned)?;
        // Lost the race against the guess that finished this game.
        if session.status().is_terminal() {
            return Err(BotError::NoActiveSession(id.clone()));
        }

        let (status, outcome) = session.resolve_guess(letter)?;
        let render = Render::of(&session);
        let finished = if status.is_terminal() {
            self.evict(id, &slot)?;
            tracing::info!(participant = %id, ?status, "session finished");
            Some(session.clone())
        } else {
            None
        };

        Ok(Resolution {
            outcome,
            render,
            finished,
        })
    }

    pub fn remove(&self, id: &ParticipantId) -> Result<(), BotError> {
        let mut guard = self.sessions.write().map_err(|_| BotError::StoragePoisoned)?;
        if guard.remove(id).is_some() {
            tracing::debug!(participant = %id, "session removed");
        }
        Ok(())
    }

    pub fn active_participants(&self) -> Vec<ParticipantId> {
        match self.sessions.read() {
            Ok(guard) => guard.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: &ParticipantId) -> Result<Slot, BotError> {
        let guard = self.sessions.read().map_err(|_| BotError::StoragePoisoned)?;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| BotError::NoActiveSession(id.clone()))
    }

    // Only drops the entry if it is still the slot we resolved against.
    fn evict(&self, id: &ParticipantId, slot: &Slot) -> Result<(), BotError> {
        let mut guard = self.sessions.write().map_err(|_| BotError::StoragePoisoned)?;
        if guard.get(id).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            guard.remove(id);
        }
        Ok(())
    }
}

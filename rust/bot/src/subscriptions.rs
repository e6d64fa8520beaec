use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

use crate::errors::BotError;
use crate::session::ParticipantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscribeOutcome {
    Created,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsubscribeOutcome {
    Removed,
    Absent,
}

/// Participant -> notification address. Addresses are stored verbatim.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    entries: RwLock<HashMap<ParticipantId, String>>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        id: &ParticipantId,
        address: impl Into<String>,
    ) -> Result<SubscribeOutcome, BotError> {
        let mut guard = self.entries.write().map_err(|_| BotError::StoragePoisoned)?;
        let outcome = match guard.insert(id.clone(), address.into()) {
            Some(_) => SubscribeOutcome::Replaced,
            None => SubscribeOutcome::Created,
        };
        tracing::info!(participant = %id, ?outcome, "subscription stored");
        Ok(outcome)
    }

    pub fn unsubscribe(&self, id: &ParticipantId) -> Result<UnsubscribeOutcome, BotError> {
        let mut guard = self.entries.write().map_err(|_| BotError::StoragePoisoned)?;
        let outcome = match guard.remove(id) {
            Some(_) => UnsubscribeOutcome::Removed,
            None => UnsubscribeOutcome::Absent,
        };
        tracing::info!(participant = %id, ?outcome, "subscription removed");
        Ok(outcome)
    }

    pub fn lookup(&self, id: &ParticipantId) -> Result<String, BotError> {
        let guard = self.entries.read().map_err(|_| BotError::StoragePoisoned)?;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| BotError::NotFound(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

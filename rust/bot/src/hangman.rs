use std::sync::{Arc, Mutex};

use hgm_engine::logger::{GameLogger, GameRecord};
use hgm_engine::{GameSession, Letter, Render, WordSource};

use crate::errors::BotError;
use crate::events::{EventBus, GameEvent};
use crate::session::{ParticipantId, SessionStore};

/// Start/guess orchestration over a shared [`SessionStore`].
pub struct GameEngine {
    sessions: Arc<SessionStore>,
    words: Arc<dyn WordSource>,
    event_bus: Arc<EventBus>,
    game_log: Option<Mutex<GameLogger>>,
}

impl GameEngine {
    pub fn new(
        sessions: Arc<SessionStore>,
        words: Arc<dyn WordSource>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            sessions,
            words,
            event_bus,
            game_log: None,
        }
    }

    pub fn with_game_log(mut self, logger: GameLogger) -> Self {
        self.game_log = Some(Mutex::new(logger));
        self
    }

    pub fn start_game(&self, id: &ParticipantId, display_name: &str) -> Result<Render, BotError> {
        // Fast path so a busy player never costs a word-list read. The insert
        // below re-checks under the write lock.
        if self.sessions.contains(id)? {
            return Err(BotError::AlreadyPlaying(id.clone()));
        }
        let word = self.words.pick_word()?;
        let render = self.sessions.create_session(id, display_name, word)?;

        self.event_bus.publish(GameEvent::GameStarted {
            participant: id.clone(),
            render: render.clone(),
        });
        Ok(render)
    }

    pub fn guess(&self, id: &ParticipantId, letter: Letter) -> Result<Render, BotError> {
        let resolution = self.sessions.resolve_guess(id, letter)?;
        tracing::debug!(participant = %id, %letter, outcome = ?resolution.outcome, "guess resolved");

        self.event_bus.publish(GameEvent::GuessResolved {
            participant: id.clone(),
            outcome: resolution.outcome,
            render: resolution.render.clone(),
        });

        if let Some(session) = &resolution.finished {
            self.record(id, session);
            self.event_bus.publish(GameEvent::GameFinished {
                participant: id.clone(),
                status: session.status(),
                render: resolution.render.clone(),
            });
        }

        Ok(resolution.render)
    }

    pub fn current(&self, id: &ParticipantId) -> Result<Render, BotError> {
        self.sessions.get(id)
    }

    /// Drops a participant's game without finishing it.
    pub fn abandon(&self, id: &ParticipantId) -> Result<(), BotError> {
        self.sessions.remove(id)
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }

    // A failing game log never fails the guess that finished the game.
    fn record(&self, id: &ParticipantId, session: &GameSession) {
        let Some(log) = &self.game_log else {
            return;
        };
        let mut logger = log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let game_id = logger.next_id();
        if let Some(record) = GameRecord::finished(game_id, id.as_str(), session) {
            if let Err(err) = logger.write(&record) {
                tracing::warn!(participant = %id, error = %err, "failed to append game record");
            }
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("sessions", &self.sessions)
            .field("game_log", &self.game_log)
            .finish_non_exhaustive()
    }
}

use crate::events::EventBus;
use crate::hangman::GameEngine;
use crate::notify::{MailReceiver, MentionNotifier};
use crate::session::SessionStore;
use crate::subscriptions::SubscriptionRegistry;
use hgm_engine::logger::GameLogger;
use hgm_engine::{FixedWords, Word, WordSource};
use std::sync::Arc;

/// Shared components handed to every command handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    engine: Arc<GameEngine>,
    subscriptions: Arc<SubscriptionRegistry>,
    notifier: MentionNotifier,
    event_bus: Arc<EventBus>,
}

impl AppContext {
    /// Builds a context around `words`. The receiver yields mention mails for
    /// the outbound transport.
    pub fn new(words: Arc<dyn WordSource>, game_log: Option<GameLogger>) -> (Self, MailReceiver) {
        let mut engine = GameEngine::new(
            Arc::new(SessionStore::new()),
            words,
            Arc::new(EventBus::new()),
        );
        if let Some(logger) = game_log {
            engine = engine.with_game_log(logger);
        }
        let subscriptions = Arc::new(SubscriptionRegistry::new());
        let (notifier, mail_rx) = MentionNotifier::new(Arc::clone(&subscriptions));
        let ctx = Self::new_with_dependencies(Arc::new(engine), notifier);
        (ctx, mail_rx)
    }

    /// The event bus and subscription registry are taken from `engine` and
    /// `notifier` so the context never exposes a bus the engine does not use.
    pub fn new_with_dependencies(engine: Arc<GameEngine>, notifier: MentionNotifier) -> Self {
        Self {
            event_bus: engine.event_bus(),
            subscriptions: notifier.registry(),
            engine,
            notifier,
        }
    }

    /// Context whose games all use the given words, in order.
    pub fn new_for_tests(words: &[&str]) -> (Self, MailReceiver) {
        let words = words.iter().filter_map(|w| Word::parse(w).ok()).collect();
        Self::new(Arc::new(FixedWords::new(words)), None)
    }

    pub fn engine(&self) -> Arc<GameEngine> {
        Arc::clone(&self.engine)
    }

    pub fn subscriptions(&self) -> Arc<SubscriptionRegistry> {
        Arc::clone(&self.subscriptions)
    }

    pub fn notifier(&self) -> &MentionNotifier {
        &self.notifier
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }
}

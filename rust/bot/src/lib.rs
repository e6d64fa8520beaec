pub mod context;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod hangman;
pub mod notify;
pub mod session;
pub mod subscriptions;

pub use context::AppContext;
pub use errors::BotError;
pub use events::{EventBus, GameEvent};
pub use handlers::{dispatch, ChatMessage, Command, Dispatch};
pub use hangman::GameEngine;
pub use notify::{MailReceiver, MentionNotifier, OutgoingMail};
pub use session::{ParticipantId, Resolution, SessionStore};
pub use subscriptions::{SubscribeOutcome, SubscriptionRegistry, UnsubscribeOutcome};

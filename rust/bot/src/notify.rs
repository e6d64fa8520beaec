use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::errors::BotError;
use crate::session::ParticipantId;
use crate::subscriptions::SubscriptionRegistry;

pub const MENTION_SUBJECT: &str = "New mention just arrived";

pub type MailSender = mpsc::UnboundedSender<OutgoingMail>;
pub type MailReceiver = mpsc::UnboundedReceiver<OutgoingMail>;

/// Mail queued for the outbound transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub id: Uuid,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A chat message as seen by the notifier.
#[derive(Debug, Clone)]
pub struct MentionedMessage {
    pub from_bot: bool,
    pub mentions: Vec<ParticipantId>,
    pub link: String,
}

/// Queues an email for every subscribed participant mentioned in a message.
#[derive(Debug, Clone)]
pub struct MentionNotifier {
    registry: Arc<SubscriptionRegistry>,
    outbox: MailSender,
}

impl MentionNotifier {
    pub fn new(registry: Arc<SubscriptionRegistry>) -> (Self, MailReceiver) {
        let (outbox, rx) = mpsc::unbounded_channel();
        (Self { registry, outbox }, rx)
    }

    /// Returns how many mails were queued.
    pub fn on_message(&self, message: &MentionedMessage) -> Result<usize, BotError> {
        if message.from_bot {
            return Ok(0);
        }

        let mentioned: BTreeSet<&ParticipantId> = message.mentions.iter().collect();
        let mut queued = 0;
        for participant in mentioned {
            let address = match self.registry.lookup(participant) {
                Ok(address) => address,
                Err(BotError::NotFound(_)) => continue,
                Err(err) => return Err(err),
            };
            let mail = OutgoingMail {
                id: Uuid::new_v4(),
                to: address,
                subject: MENTION_SUBJECT.to_string(),
                body: format!("Someone mentioned you in channel {}", message.link),
            };
            self.outbox.send(mail).map_err(|_| BotError::OutboxClosed)?;
            tracing::info!(%participant, "mention mail queued");
            queued += 1;
        }
        Ok(queued)
    }

    pub fn registry(&self) -> Arc<SubscriptionRegistry> {
        Arc::clone(&self.registry)
    }
}

pub mod commands;

use crate::context::AppContext;
use crate::notify::MentionedMessage;
use crate::session::ParticipantId;

pub use commands::{handle_command, Command};

/// An incoming chat message from the transport.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub author: ParticipantId,
    pub author_name: String,
    pub from_bot: bool,
    pub text: String,
    pub mentions: Vec<ParticipantId>,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub reply: Option<String>,
    pub mails_queued: usize,
    /// Set when mention mails could not be queued. The reply is still valid.
    pub mail_error: Option<String>,
}

/// Runs any command in the message, then notifies mentioned subscribers.
///
/// The command has already taken effect by the time mails are queued, so a
/// notifier failure never drops the reply.
pub fn dispatch(ctx: &AppContext, message: &ChatMessage) -> Dispatch {
    if message.from_bot {
        return Dispatch::default();
    }

    let reply = Command::parse(&message.text)
        .map(|cmd| handle_command(ctx, &message.author, &message.author_name, cmd));

    let notified = ctx.notifier().on_message(&MentionedMessage {
        from_bot: message.from_bot,
        mentions: message.mentions.clone(),
        link: message.link.clone(),
    });

    match notified {
        Ok(mails_queued) => Dispatch {
            reply,
            mails_queued,
            mail_error: None,
        },
        Err(err) => {
            tracing::warn!(author = %message.author, error = %err, "mention mails not queued");
            Dispatch {
                reply,
                mails_queued: 0,
                mail_error: Some(err.to_string()),
            }
        }
    }
}

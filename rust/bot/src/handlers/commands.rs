use hgm_engine::Letter;

use crate::context::AppContext;
use crate::errors::BotError;
use crate::session::ParticipantId;
use crate::subscriptions::{SubscribeOutcome, UnsubscribeOutcome};

pub const PREFIX: char = '!';

pub const REPLY_ALREADY_PLAYING: &str = "You are already playing!";
pub const REPLY_NO_GAME: &str = "you have to create a new game first - !play_hangman";
pub const REPLY_BAD_LETTER: &str = "Guess a single letter, e.g. !guess a";
pub const REPLY_SUBSCRIBED: &str = "You were added to subscriber list!";
pub const REPLY_RESUBSCRIBED: &str = "Already in subscriber list, your email was changed!";
pub const REPLY_SUBSCRIBE_USAGE: &str = "Usage: !subscribe <email>";
pub const REPLY_UNSUBSCRIBED: &str = "You were removed from subscriber list!";
pub const REPLY_NOT_SUBSCRIBED: &str = "You are not in subscriber list, nothing changed";
pub const REPLY_UNAVAILABLE: &str = "Hangman is unavailable right now, try again later.";
pub const REPLY_INTERNAL: &str = "Something went wrong, try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PlayHangman,
    Guess(String),
    Subscribe(String),
    Unsubscribe,
    Unknown(String),
}

impl Command {
    /// `None` when `text` is not addressed to the bot.
    pub fn parse(text: &str) -> Option<Self> {
        let body = text.trim().strip_prefix(PREFIX)?;
        let mut parts = body.split_whitespace();
        let name = parts.next()?;
        let arg = parts.next().unwrap_or_default().to_string();
        let cmd = match name.to_ascii_lowercase().as_str() {
            "play_hangman" => Command::PlayHangman,
            "guess" => Command::Guess(arg),
            "subscribe" => Command::Subscribe(arg),
            "unsubscribe" => Command::Unsubscribe,
            _ => Command::Unknown(name.to_string()),
        };
        Some(cmd)
    }
}

/// Runs one command for `author` and returns the text to send back.
pub fn handle_command(
    ctx: &AppContext,
    author: &ParticipantId,
    display_name: &str,
    command: Command,
) -> String {
    match command {
        Command::PlayHangman => match ctx.engine().start_game(author, display_name) {
            Ok(render) => render.to_string(),
            Err(err) => error_reply(err),
        },
        Command::Guess(raw) => {
            let letter = match Letter::parse(&raw) {
                Ok(letter) => letter,
                Err(_) => return REPLY_BAD_LETTER.to_string(),
            };
            match ctx.engine().guess(author, letter) {
                Ok(render) => render.to_string(),
                Err(err) => error_reply(err),
            }
        }
        Command::Subscribe(address) => {
            if address.is_empty() {
                return REPLY_SUBSCRIBE_USAGE.to_string();
            }
            match ctx.subscriptions().subscribe(author, address) {
                Ok(SubscribeOutcome::Created) => REPLY_SUBSCRIBED.to_string(),
                Ok(SubscribeOutcome::Replaced) => REPLY_RESUBSCRIBED.to_string(),
                Err(err) => error_reply(err),
            }
        }
        Command::Unsubscribe => match ctx.subscriptions().unsubscribe(author) {
            Ok(UnsubscribeOutcome::Removed) => REPLY_UNSUBSCRIBED.to_string(),
            Ok(UnsubscribeOutcome::Absent) => REPLY_NOT_SUBSCRIBED.to_string(),
            Err(err) => error_reply(err),
        },
        Command::Unknown(name) => format!("Unknown command: {}", name),
    }
}

fn error_reply(err: BotError) -> String {
    match err {
        BotError::AlreadyPlaying(_) => REPLY_ALREADY_PLAYING.to_string(),
        BotError::NoActiveSession(_) => REPLY_NO_GAME.to_string(),
        BotError::Game(hgm_engine::GameError::SourceUnavailable(reason)) => {
            tracing::error!(%reason, "word source unavailable");
            REPLY_UNAVAILABLE.to_string()
        }
        other => {
            tracing::error!(error = %other, "command failed");
            REPLY_INTERNAL.to_string()
        }
    }
}

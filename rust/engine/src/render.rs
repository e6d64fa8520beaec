use std::fmt;

use serde::Serialize;

use crate::game::{GameSession, GameStatus};
use crate::word::Letter;

/// Display-ready snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Render {
    pub player: String,
    pub guesses: Vec<char>,
    pub lives: u8,
    pub skeleton: String,
    pub message: String,
    pub status: GameStatus,
}

impl Render {
    pub fn of(session: &GameSession) -> Self {
        Self {
            player: session.player().to_string(),
            guesses: session.guessed().iter().copied().map(Letter::as_char).collect(),
            lives: session.lives(),
            skeleton: session.revealed_string(),
            message: session.last_message().to_string(),
            status: session.status(),
        }
    }

    pub fn guess_line(&self) -> String {
        let joined = self
            .guesses
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("Guess: {}", joined)
    }

    pub fn word_line(&self) -> String {
        let spaced = self
            .skeleton
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("Word: {}", spaced)
    }
}

impl fmt::Display for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Hangman**")?;
        writeln!(f, "Player: {}", self.player)?;
        writeln!(f, "{}", self.guess_line())?;
        writeln!(f, "Lives: {}", self.lives)?;
        writeln!(f, "{}", self.word_line())?;
        write!(f, "{}", self.message)
    }
}

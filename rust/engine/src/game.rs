use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::word::{Letter, Word};

pub const STARTING_LIVES: u8 = 7;
pub const HIDDEN: char = '-';

pub const MSG_START: &str = "Good luck!";
pub const MSG_DUPLICATE: &str = "You already guessed that.";
pub const MSG_CORRECT: &str = "Correct guess.";
pub const MSG_WRONG: &str = "Wrong guess.";
pub const MSG_WON: &str = "You won!";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What a single guess did to the session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Duplicate,
    Correct,
    Wrong,
    Won,
    Lost,
}

/// One hangman game for one participant. Pure state; display handles live elsewhere.
#[derive(Debug, Clone)]
pub struct GameSession {
    player: String,
    secret: Word,
    revealed: Vec<char>,
    guessed: Vec<Letter>,
    lives: u8,
    status: GameStatus,
    last_message: String,
}

impl GameSession {
    pub fn new(player: impl Into<String>, secret: Word) -> Self {
        let revealed = vec![HIDDEN; secret.len()];
        Self {
            player: player.into(),
            secret,
            revealed,
            guessed: Vec::new(),
            lives: STARTING_LIVES,
            status: GameStatus::InProgress,
            last_message: MSG_START.to_string(),
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn secret(&self) -> &Word {
        &self.secret
    }
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }
    pub fn lives(&self) -> u8 {
        self.lives
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn revealed_string(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Applies one guess. A correct letter is revealed at every position and can
    /// only win; a wrong letter costs one life and can only lose.
    pub fn resolve_guess(&mut self, letter: Letter) -> Result<(GameStatus, GuessOutcome), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionAlreadyFinished);
        }

        if self.guessed.contains(&letter) {
            self.last_message = MSG_DUPLICATE.to_string();
            return Ok((self.status, GuessOutcome::Duplicate));
        }
        self.guessed.push(letter);

        let outcome = if self.secret.contains(letter) {
            for (slot, secret) in self.revealed.iter_mut().zip(self.secret.letters()) {
                if *secret == letter {
                    *slot = letter.as_char();
                }
            }
            if self.revealed.iter().all(|c| *c != HIDDEN) {
                self.status = GameStatus::Won;
                self.last_message = MSG_WON.to_string();
                GuessOutcome::Won
            } else {
                self.last_message = MSG_CORRECT.to_string();
                GuessOutcome::Correct
            }
        } else {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.status = GameStatus::Lost;
                self.last_message = format!("You lost! The word was: {}", self.secret);
                GuessOutcome::Lost
            } else {
                self.last_message = MSG_WRONG.to_string();
                GuessOutcome::Wrong
            }
        };

        Ok((self.status, outcome))
    }
}

//! hgm-engine: hangman game core

pub mod errors;
pub mod game;
pub mod logger;
pub mod render;
pub mod word;
pub mod words;

pub use errors::GameError;
pub use game::{GameSession, GameStatus, GuessOutcome, STARTING_LIVES};
pub use render::Render;
pub use word::{Letter, Word};
pub use words::{FixedWords, WordFile, WordList, WordSource};

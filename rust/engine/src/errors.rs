use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Word source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),
    #[error("Invalid letter: {0:?}, expected a single letter")]
    InvalidLetter(String),
    #[error("Session already finished")]
    SessionAlreadyFinished,
}

impl GameError {
    pub(crate) fn unreadable(path: &Path, err: &std::io::Error) -> Self {
        GameError::SourceUnavailable(format!("{}: {}", path.display(), err))
    }
}

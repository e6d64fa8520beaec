use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// A single uppercase ASCII letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Parses user input such as `"a"` or `" Q "` into a letter.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| GameError::InvalidLetter(input.to_string())),
            _ => Err(GameError::InvalidLetter(input.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase()))
        } else {
            Err(GameError::InvalidLetter(c.to_string()))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret word: non-empty, uppercase ASCII letters only.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(Vec<Letter>);

impl Word {
    /// Builds a word from one line of a word list, stripping the line terminator
    /// and surrounding whitespace.
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(GameError::InvalidWord(line.to_string()));
        }
        trimmed
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Word)
            .map_err(|_| GameError::InvalidWord(line.to_string()))
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

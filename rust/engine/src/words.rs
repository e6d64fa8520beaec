use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::errors::GameError;
use crate::word::Word;

/// Supplies secret words for new games.
pub trait WordSource: Send + Sync {
    fn pick_word(&self) -> Result<Word, GameError>;
}

/// Line-oriented word list on disk, one word per line, any case.
///
/// The file is re-read on every pick so an operator can swap the list while
/// the bot runs. Blank lines and lines that are not a single word are skipped.
#[derive(Debug)]
pub struct WordFile {
    path: PathBuf,
    rng: Mutex<StdRng>,
}

/// Line counts reported by [`WordFile::inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFileStats {
    pub usable: usize,
    pub skipped: usize,
}

impl WordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_rng(path, StdRng::seed_from_u64(rand::random()))
    }

    pub fn with_seed(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self::with_rng(path, StdRng::seed_from_u64(seed))
    }

    fn with_rng(path: impl Into<PathBuf>, rng: StdRng) -> Self {
        Self {
            path: path.into(),
            rng: Mutex::new(rng),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inspect(&self) -> Result<WordFileStats, GameError> {
        let contents = self.read()?;
        let mut stats = WordFileStats { usable: 0, skipped: 0 };
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match Word::parse(line) {
                Ok(_) => stats.usable += 1,
                Err(_) => stats.skipped += 1,
            }
        }
        Ok(stats)
    }

    fn read(&self) -> Result<String, GameError> {
        fs::read_to_string(&self.path).map_err(|err| GameError::unreadable(&self.path, &err))
    }
}

impl WordSource for WordFile {
    fn pick_word(&self) -> Result<Word, GameError> {
        let contents = self.read()?;
        let words: Vec<Word> = contents
            .lines()
            .filter_map(|line| Word::parse(line).ok())
            .collect();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let word = words.choose(&mut *rng).cloned().ok_or_else(|| {
            GameError::SourceUnavailable(format!("{}: no usable words", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), candidates = words.len(), "picked word");
        Ok(word)
    }
}

/// In-memory word list with uniform random choice.
#[derive(Debug)]
pub struct WordList {
    words: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_seed(words, rand::random())
    }

    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn pick_word(&self) -> Result<Word, GameError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.words
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| GameError::SourceUnavailable("word list is empty".into()))
    }
}

/// Deterministic source that hands out its words in order, wrapping around.
#[derive(Debug)]
pub struct FixedWords {
    words: Vec<Word>,
    next: AtomicUsize,
}

impl FixedWords {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            next: AtomicUsize::new(0),
        }
    }

    pub fn single(word: Word) -> Self {
        Self::new(vec![word])
    }
}

impl WordSource for FixedWords {
    fn pick_word(&self) -> Result<Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::SourceUnavailable("fixed word list is empty".into()));
        }
        let idx = self.next.fetch_add(1, Ordering::AcqRel) % self.words.len();
        Ok(self.words[idx].clone())
    }
}

use serde::{Deserialize, Serialize};

use crate::game::{GameSession, GameStatus};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Won,
    Lost,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub participant: String,
    pub word: String,
    pub guesses: Vec<char>,
    pub lives_left: u8,
    pub result: GameResult,
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Builds a record for a finished session, `None` while it is still running.
    pub fn finished(game_id: String, participant: &str, session: &GameSession) -> Option<Self> {
        let result = match session.status() {
            GameStatus::Won => GameResult::Won,
            GameStatus::Lost => GameResult::Lost,
            GameStatus::InProgress => return None,
        };
        Some(Self {
            game_id,
            participant: participant.to_string(),
            word: session.secret().to_string(),
            guesses: session.guessed().iter().map(|l| l.as_char()).collect(),
            lives_left: session.lives(),
            result,
            ts: None,
        })
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends finished games to a JSONL file.
pub struct GameLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self { writer: None, date: date.to_string(), seq: 0 }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("date", &self.date)
            .field("seq", &self.seq)
            .field("writes", &self.writer.is_some())
            .finish()
    }
}

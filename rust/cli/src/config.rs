use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub words: PathBuf,
    pub seed: Option<u64>,
    pub game_log: Option<PathBuf>,
    pub player: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: PathBuf::from("words.txt"),
            seed: None,
            game_log: None,
            player: "player".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Defaults, then the TOML file named by `HGM_CONFIG`, then `HGM_*` variables.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

pub fn load_from<F>(env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    if let Some(path) = env("HGM_CONFIG").filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.words {
            cfg.words = v;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
        }
        if let Some(v) = f.game_log {
            cfg.game_log = Some(v);
        }
        if let Some(v) = f.player {
            cfg.player = v;
        }
    }

    if let Some(words) = env("HGM_WORDS").filter(|v| !v.is_empty()) {
        cfg.words = PathBuf::from(words);
    }
    if let Some(seed) = env("HGM_SEED").filter(|v| !v.is_empty()) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
    }
    if let Some(log) = env("HGM_GAME_LOG").filter(|v| !v.is_empty()) {
        cfg.game_log = Some(PathBuf::from(log));
    }
    if let Some(player) = env("HGM_PLAYER").filter(|v| !v.is_empty()) {
        cfg.player = player;
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    words: Option<PathBuf>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    game_log: Option<PathBuf>,
    #[serde(default)]
    player: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.words.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: words path must not be empty".into(),
        ));
    }
    if cfg.player.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player name must not be empty".into(),
        ));
    }
    Ok(())
}

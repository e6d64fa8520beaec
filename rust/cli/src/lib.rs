pub mod config;
pub mod ui;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use hgm_bot::{dispatch, AppContext, BotError, ChatMessage, ParticipantId};
use hgm_engine::logger::GameLogger;
use hgm_engine::{GameError, Letter, Word, WordFile, WordList, WordSource};
use thiserror::Error;

use crate::config::{Config, ConfigError};

const LOCAL_PLAYER: &str = "local";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Bot(#[from] BotError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the stderr `tracing` subscriber, filtered by `HGM_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HGM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the CLI with stdin as the input stream.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match HgmCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            let text = e.render().to_string();
            return if e.use_stderr() {
                let _ = write!(err, "{}", text);
                2
            } else {
                let _ = write!(out, "{}", text);
                0
            };
        }
    };

    let result = config::load()
        .map_err(CliError::from)
        .and_then(|cfg| execute(cli.cmd, cfg, input, out));
    match result {
        Ok(code) => code,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hgm", version, about = "Hangman chat bot")]
struct HgmCli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one game on the terminal
    Play {
        /// Pick the secret word from these instead of the word list (repeatable)
        #[arg(long)]
        word: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        words: Option<PathBuf>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Feed `<participant> <message>` lines through the bot
    Chat {
        #[arg(long)]
        words: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        game_log: Option<PathBuf>,
    },
    /// Check a word list
    Words {
        #[arg(long)]
        words: Option<PathBuf>,
    },
    /// Print the effective configuration
    Cfg,
}

fn execute(
    cmd: Commands,
    mut cfg: Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<i32, CliError> {
    match cmd {
        Commands::Cfg => {
            let json = serde_json::to_string_pretty(&cfg).map_err(std::io::Error::from)?;
            writeln!(out, "{}", json)?;
            Ok(0)
        }
        Commands::Words { words } => {
            let path = words.unwrap_or(cfg.words);
            let stats = WordFile::new(&path).inspect()?;
            writeln!(out, "words: {}", path.display())?;
            writeln!(out, "usable: {}", stats.usable)?;
            writeln!(out, "skipped: {}", stats.skipped)?;
            if stats.usable == 0 {
                return Err(GameError::SourceUnavailable(format!(
                    "{}: no usable words",
                    path.display()
                ))
                .into());
            }
            Ok(0)
        }
        Commands::Play {
            word,
            seed,
            words,
            name,
        } => {
            if let Some(v) = words {
                cfg.words = v;
            }
            if let Some(v) = seed {
                cfg.seed = Some(v);
            }
            if let Some(v) = name {
                cfg.player = v;
            }
            config::validate(&cfg)?;
            let source: Arc<dyn WordSource> = if word.is_empty() {
                word_file(&cfg)
            } else {
                let words = word
                    .iter()
                    .map(|w| Word::parse(w))
                    .collect::<Result<Vec<_>, _>>()?;
                match cfg.seed {
                    Some(seed) => Arc::new(WordList::with_seed(words, seed)),
                    None => Arc::new(WordList::new(words)),
                }
            };
            play(source, &cfg, input, out)
        }
        Commands::Chat {
            words,
            seed,
            game_log,
        } => {
            if let Some(v) = words {
                cfg.words = v;
            }
            if let Some(v) = seed {
                cfg.seed = Some(v);
            }
            if let Some(v) = game_log {
                cfg.game_log = Some(v);
            }
            chat(&cfg, input, out)
        }
    }
}

fn word_file(cfg: &Config) -> Arc<dyn WordSource> {
    match cfg.seed {
        Some(seed) => Arc::new(WordFile::with_seed(&cfg.words, seed)),
        None => Arc::new(WordFile::new(&cfg.words)),
    }
}

fn game_log(cfg: &Config) -> Result<Option<GameLogger>, CliError> {
    cfg.game_log
        .as_ref()
        .map(GameLogger::create)
        .transpose()
        .map_err(CliError::from)
}

fn play(
    source: Arc<dyn WordSource>,
    cfg: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<i32, CliError> {
    let (ctx, _mail_rx) = AppContext::new(source, game_log(cfg)?);
    let engine = ctx.engine();
    let id = ParticipantId::from(LOCAL_PLAYER);

    let render = engine.start_game(&id, &cfg.player)?;
    ui::write_block(out, &render.to_string())?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let guess = line.trim();
        if guess.eq_ignore_ascii_case("quit") {
            break;
        }
        let letter = match Letter::parse(guess) {
            Ok(letter) => letter,
            Err(_) => {
                writeln!(out, "Guess a single letter.")?;
                continue;
            }
        };
        let render = engine.guess(&id, letter)?;
        ui::write_block(out, &render.to_string())?;
        if render.status.is_terminal() {
            return Ok(0);
        }
    }

    engine.abandon(&id)?;
    writeln!(out, "Game abandoned.")?;
    Ok(0)
}

fn chat(cfg: &Config, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<i32, CliError> {
    let (ctx, mut mail_rx) = AppContext::new(word_file(cfg), game_log(cfg)?);

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let Some((author, text)) = line.trim().split_once(char::is_whitespace) else {
            continue;
        };
        let message = ChatMessage {
            author: ParticipantId::from(author),
            author_name: author.to_string(),
            from_bot: false,
            text: text.trim().to_string(),
            mentions: parse_mentions(text),
            link: format!("local://chat/{}", lineno + 1),
        };

        tracing::debug!(line = lineno + 1, %author, "dispatching chat line");
        let outcome = dispatch(&ctx, &message);
        if let Some(reply) = outcome.reply {
            ui::write_block(out, &format!("[{}] {}", author, reply))?;
        }
        if let Some(reason) = outcome.mail_error {
            writeln!(out, "mail failed: {}", reason)?;
        }
        while let Ok(mail) = mail_rx.try_recv() {
            writeln!(out, "mail -> {}: {}", mail.to, mail.subject)?;
        }
    }
    Ok(0)
}

/// Extracts every `<@id>` span, wherever it sits in the text.
fn parse_mentions(text: &str) -> Vec<ParticipantId> {
    let mut ids = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("<@") {
        rest = &rest[start + 2..];
        let Some(end) = rest.find('>') else {
            break;
        };
        let id = &rest[..end];
        if !id.is_empty() && !id.contains(char::is_whitespace) && !id.contains("<@") {
            ids.push(ParticipantId::from(id));
            rest = &rest[end + 1..];
        }
    }
    ids
}

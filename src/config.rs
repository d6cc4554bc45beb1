//! Application configuration: environment first, command-line flags on top.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::lexicon::LexiconConfig;

pub const DEFAULT_LOG_PATH: &str = "tile-words.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deck seed; `None` picks one from the clock.
    pub seed: Option<u64>,
    pub log_path: PathBuf,
    pub lexicon: LexiconConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            lexicon: LexiconConfig::default(),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Play(AppConfig),
    Help,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        Self {
            seed: var("TILE_WORDS_SEED").and_then(|s| s.parse().ok()),
            log_path: var("TILE_WORDS_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
            lexicon: LexiconConfig::from_lookup(&get),
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn with_args(mut self, args: &[String]) -> Result<Invocation> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--word-list" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --word-list"))?;
                    self.lexicon.word_list = Some(PathBuf::from(v));
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = PathBuf::from(v);
                }
                "-h" | "--help" => return Ok(Invocation::Help),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Invocation::Play(self))
    }

    /// Seed to deal with, falling back to the clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

pub const USAGE: &str = "\
usage: tile-words [--seed N] [--word-list PATH] [--log PATH]

environment:
  WORDNIK_API_KEY                 validate words against Wordnik
  TILE_WORDS_WORD_LIST            validate words against a local word file
  TILE_WORDS_WORDNIK_URL          Wordnik API base URL
  TILE_WORDS_VALIDATE_TIMEOUT_MS  per-lookup timeout (default 5000)
  TILE_WORDS_SEED                 deck seed
  TILE_WORDS_LOG_PATH             log file (default tile-words.log)
  RUST_LOG                        log filter (default info)";

//! Runtime configuration from environment variables.
//!
//! Unparseable values fall back to defaults rather than failing startup.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `QUIZ_SEED` | time-derived | RNG seed |
//! | `QUIZ_SESSION_LEN` | 5 | Questions per session (must be > 0) |
//! | `QUIZ_BANK` | unset | JSON question bank file |
//! | `QUIZ_SOUND` | `bell` | `tone`, `bell` or `off` |
//! | `QUIZ_FPS` | 60 | Frame cap (1..=240) |
//! | `QUIZ_LOG_FILE` | unset | Log file path |
//! | `QUIZ_LOG` | `warn` | Log filter (read by the binary's `env_logger` setup) |

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::audio::SoundMode;
use crate::core::{BankError, QuestionBank};
use crate::types::{SESSION_LEN, TARGET_FPS};

const MAX_FPS: u32 = 240;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question bank {path}: {source}")]
    Bank {
        path: PathBuf,
        #[source]
        source: BankError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub session_len: usize,
    pub bank_path: Option<PathBuf>,
    pub sound: SoundMode,
    pub fps: u32,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            session_len: SESSION_LEN,
            bank_path: None,
            sound: SoundMode::Bell,
            fps: TARGET_FPS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("QUIZ_SEED").and_then(|s| s.parse().ok());

        let session_len = non_empty("QUIZ_SESSION_LEN")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.session_len);

        let bank_path = non_empty("QUIZ_BANK").map(PathBuf::from);

        let sound = non_empty("QUIZ_SOUND")
            .and_then(|s| SoundMode::from_str(&s))
            .unwrap_or(defaults.sound);

        let fps = non_empty("QUIZ_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|f| f.clamp(1, MAX_FPS))
            .unwrap_or(defaults.fps);

        let log_path = non_empty("QUIZ_LOG_FILE");

        Self {
            seed,
            session_len,
            bank_path,
            sound,
            fps,
            log_path,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }

    /// The configured bank, or the built-in one when `QUIZ_BANK` is unset.
    pub fn load_bank(&self) -> Result<QuestionBank, ConfigError> {
        match &self.bank_path {
            None => Ok(QuestionBank::builtin()),
            Some(path) => load_bank_file(path),
        }
    }
}

pub fn load_bank_file(path: &Path) -> Result<QuestionBank, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    QuestionBank::from_json_str(&json).map_err(|source| ConfigError::Bank {
        path: path.to_path_buf(),
        source,
    })
}

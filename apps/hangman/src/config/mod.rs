//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

pub const HOST_VAR: &str = "HANGMAN_HOST";
pub const PORT_VAR: &str = "HANGMAN_PORT";
pub const LEADERBOARD_PATH_VAR: &str = "HANGMAN_LEADERBOARD_PATH";
pub const LOG_FORMAT_VAR: &str = "HANGMAN_LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LEADERBOARD_PATH: &str = "scores.json";

/// Shape of the log lines written by the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub leaderboard_path: PathBuf,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("{PORT_VAR} must be a valid port number, got '{raw}': {e}"))
            })?,
            None => DEFAULT_PORT,
        };
        let leaderboard_path = read(LEADERBOARD_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEADERBOARD_PATH));
        let log_format = match read(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            leaderboard_path,
            log_format,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_PATH),
            log_format: LogFormat::Json,
        }
    }
}

//! File-backed, append-only leaderboard.
//!
//! The whole sequence lives in memory and is rewritten to a pretty-printed
//! JSON array after every append. Writes go to a sibling temporary file that
//! is then renamed over the target, so a crash mid-write leaves the previous
//! file intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};


/// One finished session: who played and what they had scored when they lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub nickname: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(nickname: impl Into<String>, score: u32) -> Self {
        Self {
            nickname: nickname.into(),
            score,
        }
    }
}

/// Errors surfaced by leaderboard persistence.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupted leaderboard file {path}: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Insertion-ordered leaderboard, optionally backed by a JSON file.
#[derive(Debug)]
pub struct LeaderboardStore {
    path: Option<PathBuf>,
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl LeaderboardStore {
    /// Load the leaderboard stored at `path`.
    ///
    /// A missing file is a fresh install and yields an empty leaderboard. An
    /// unreadable or corrupt file is logged and also treated as empty; the
    /// next append overwrites it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => {
                debug!(path = %path.display(), count = entries.len(), "leaderboard_loaded");
                entries
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "leaderboard_unreadable_starting_empty");
                Vec::new()
            }
        };
        Self {
            path: Some(path),
            entries: Mutex::new(entries),
        }
    }

    /// Leaderboard with no durable storage.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append an entry and rewrite the backing file.
    ///
    /// The in-memory append always succeeds; the returned error only reports
    /// that the file could not be rewritten.
    pub fn append(&self, entry: LeaderboardEntry) -> Result<(), LeaderboardError> {
        let mut entries = self.entries.lock();
        entries.push(entry);
        match &self.path {
            Some(path) => write_entries(path, &entries),
            None => Ok(()),
        }
    }

    /// All entries in insertion order.
    pub fn all(&self) -> Vec<LeaderboardEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

fn read_entries(path: &Path) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(LeaderboardError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&bytes).map_err(|source| LeaderboardError::Corrupted {
        path: path.to_path_buf(),
        source,
    })
}

fn write_entries(path: &Path, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
    let io_err = |source: std::io::Error| LeaderboardError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let bytes = serde_json::to_vec_pretty(entries)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, bytes).map_err(io_err)?;
    fs::rename(&temp_path, path).map_err(io_err)?;

    debug!(path = %path.display(), count = entries.len(), "leaderboard_saved");
    Ok(())
}

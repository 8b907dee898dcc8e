//! Durable storage.

pub mod leaderboard;

pub use leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardStore};

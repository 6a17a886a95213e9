use chrono::Utc;
use itertools::Itertools;
use thiserror::Error;

use crate::model::{LeaderboardEntry, SessionSummary};

/// Rows shown on the welcome screen.
pub const LEADERBOARD_VISIBLE: usize = 5;
pub const ANONYMOUS_NAME: &str = "Anonim";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("only sessions with at least one correct answer can be saved")]
    ZeroScore,
}

/// Best first: higher score, then faster time. Ties keep insertion order.
pub fn ranked(entries: &[LeaderboardEntry], limit: usize) -> Vec<&LeaderboardEntry> {
    entries
        .iter()
        .sorted_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.elapsed_seconds.cmp(&b.elapsed_seconds))
        })
        .take(limit)
        .collect()
}

/// Builds the row for a finished session. Blank names become `Anonim`.
pub fn entry_for(name: &str, summary: &SessionSummary) -> Result<LeaderboardEntry, LeaderboardError> {
    if !summary.qualifies_for_leaderboard() {
        return Err(LeaderboardError::ZeroScore);
    }
    let name = name.trim();
    let name = if name.is_empty() { ANONYMOUS_NAME } else { name };

    Ok(LeaderboardEntry {
        name: Some(name.to_string()),
        score: summary.score,
        elapsed_seconds: summary.elapsed_seconds,
        timestamp: Some(Utc::now()),
        playthrough_id: Some(summary.playthrough_id),
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Difficulty, QuizMode, RoundRecord};
use crate::helpers::format_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub playthrough_id: Uuid,
    pub mode: QuizMode,
    pub difficulty: Difficulty,
    pub score: u32,
    pub total_questions: usize,
    pub elapsed_seconds: u64,
    pub history: Vec<RoundRecord>,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// "7 / 10"
    pub fn score_display(&self) -> String {
        format!("{} / {}", self.score, self.total_questions)
    }

    pub fn elapsed_display(&self) -> String {
        format_time(self.elapsed_seconds)
    }

    /// Only sessions with at least one correct answer may be saved.
    pub fn qualifies_for_leaderboard(&self) -> bool {
        self.score > 0
    }

    pub fn report_lines(&self) -> Vec<String> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, record)| record.report_line(i + 1))
            .collect()
    }
}

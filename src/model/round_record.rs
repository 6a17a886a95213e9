use serde::{Deserialize, Serialize};

use super::Answer;

/// Outcome handed back to the caller of `submit_answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub was_correct: bool,
    pub correct_value: Answer,
}

/// One answered question, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub question: String,
    pub correct: Answer,
    pub user_answer: Answer,
    pub was_correct: bool,
}

impl RoundRecord {
    pub fn result(&self) -> RoundResult {
        RoundResult {
            was_correct: self.was_correct,
            correct_value: self.correct.clone(),
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.was_correct {
            "✔"
        } else {
            "✘"
        }
    }

    /// Results-screen line, numbered from `ordinal`.
    pub fn report_line(&self, ordinal: usize) -> String {
        format!(
            "{}. {} = {} (Tu: {}) {}",
            ordinal,
            self.question,
            self.correct,
            self.user_answer,
            self.status_icon()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line() {
        let record = RoundRecord {
            question: "3 + 2".to_string(),
            correct: Answer::Number(5),
            user_answer: Answer::Number(4),
            was_correct: false,
        };
        assert_eq!(record.report_line(1), "1. 3 + 2 = 5 (Tu: 4) ✘");
        assert_eq!(
            record.result(),
            RoundResult {
                was_correct: false,
                correct_value: Answer::Number(5),
            }
        );
    }
}

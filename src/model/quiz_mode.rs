use serde::{Deserialize, Serialize};

/// Question family. Chosen by the player as a mode, and stamped on every
/// generated question as the generator it actually came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuizMode {
    Arithmetic,
    Series,
    Neighbors,
    Signs,
}

impl Default for QuizMode {
    fn default() -> Self {
        QuizMode::Arithmetic
    }
}

impl QuizMode {
    pub fn all() -> Vec<QuizMode> {
        vec![
            QuizMode::Arithmetic,
            QuizMode::Series,
            QuizMode::Neighbors,
            QuizMode::Signs,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuizMode::Arithmetic => "Arithmetic",
            QuizMode::Series => "Series",
            QuizMode::Neighbors => "Neighbors",
            QuizMode::Signs => "Signs",
        }
    }
}

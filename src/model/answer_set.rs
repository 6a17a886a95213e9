use serde::{Deserialize, Serialize};

use super::Answer;

pub const ANSWER_SET_SIZE: usize = 3;

/// The shuffled candidates offered for one question. Holds exactly
/// `ANSWER_SET_SIZE` distinct answers, one of which is the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub(crate) fn from_shuffled(answers: Vec<Answer>) -> Self {
        debug_assert_eq!(answers.len(), ANSWER_SET_SIZE);
        Self { answers }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn contains(&self, answer: &Answer) -> bool {
        self.answers.contains(answer)
    }

    pub fn position_of(&self, answer: &Answer) -> Option<usize> {
        self.answers.iter().position(|a| a == answer)
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    /// Text answers get a smaller button font.
    pub fn is_text(&self) -> bool {
        self.answers.first().is_some_and(|a| !a.is_numeric())
    }
}

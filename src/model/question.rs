use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::QuizMode;

/// Separator between the two numbers of a neighbors answer ("4 și 6").
pub const NEIGHBOR_SEPARATOR: &str = " și ";

/// A candidate answer. Numeric questions compare by value, text questions
/// by exact string, and the two never compare equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn neighbors(center: i64) -> Self {
        Answer::Text(format!("{}{}{}", center - 1, NEIGHBOR_SEPARATOR, center + 1))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Number(_) => None,
            Answer::Text(s) => Some(s.as_str()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Answer::Number(_))
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Number(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
        }
    }

    pub fn opposite(&self) -> Operator {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
        }
    }
}

/// Pictogram shown under easy arithmetic: `left` apples, the operator,
/// `right` bananas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualAid {
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
}

impl VisualAid {
    pub const LEFT_GLYPH: &'static str = "🍎";
    pub const RIGHT_GLYPH: &'static str = "🍌";

    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            Self::LEFT_GLYPH.repeat(self.left.max(0) as usize),
            self.operator.symbol(),
            Self::RIGHT_GLYPH.repeat(self.right.max(0) as usize)
        )
    }
}

/// One quiz item. Fields are public for reading; construction goes through
/// the constructors below so `correct` always matches `kind`.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub correct: Answer,
    pub kind: QuizMode,
    /// `text` already contains the `=` and the unknown.
    pub is_formatted_equation: bool,
    pub visual_aid: Option<VisualAid>,
}

impl Question {
    pub fn new(kind: QuizMode, text: impl Into<String>, correct: Answer) -> Self {
        Self {
            text: text.into(),
            correct,
            kind,
            is_formatted_equation: false,
            visual_aid: None,
        }
    }

    pub fn formatted_equation(mut self) -> Self {
        self.is_formatted_equation = true;
        self
    }

    pub fn with_visual_aid(mut self, visual_aid: VisualAid) -> Self {
        self.visual_aid = Some(visual_aid);
        self
    }

    /// Text as shown to the player. Plain prompts get `" = ?"` appended;
    /// formatted equations and signs prompts already carry their unknown.
    pub fn display_text(&self) -> String {
        if self.is_formatted_equation || self.kind == QuizMode::Signs {
            self.text.clone()
        } else {
            format!("{} = ?", self.text)
        }
    }

    pub fn is_correct(&self, answer: &Answer) -> bool {
        self.correct == *answer
    }
}

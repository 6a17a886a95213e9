use serde::{Deserialize, Serialize};

/// Numeric bounds for a plain `a ± b` question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticRange {
    pub max_num: i64,
    pub max_move: i64,
}

/// Bounds for an arithmetic progression: first term and common step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRange {
    pub max_start: i64,
    pub step_max: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Expert,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Expert]
    }

    /// 1-based ordinal used by the level picker.
    pub fn ordinal(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Expert => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Difficulty {
        match ordinal {
            2 => Difficulty::Medium,
            3 => Difficulty::Expert,
            _ => Difficulty::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn arithmetic_range(&self) -> ArithmeticRange {
        match self {
            Difficulty::Easy => ArithmeticRange {
                max_num: 10,
                max_move: 2,
            },
            Difficulty::Medium => ArithmeticRange {
                max_num: 20,
                max_move: 5,
            },
            Difficulty::Expert => ArithmeticRange {
                max_num: 50,
                max_move: 10,
            },
        }
    }

    pub fn series_range(&self) -> SeriesRange {
        match self {
            Difficulty::Easy => SeriesRange {
                max_start: 10,
                step_max: 1,
            },
            Difficulty::Medium => SeriesRange {
                max_start: 20,
                step_max: 2,
            },
            Difficulty::Expert => SeriesRange {
                max_start: 50,
                step_max: 5,
            },
        }
    }

    /// Exclusive upper bound for the center of a neighbors question.
    pub fn neighbors_max_center(&self) -> i64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 30,
            Difficulty::Expert => 100,
        }
    }

    /// Largest step of a "find the rule" signs question. Easy asks for an
    /// operator instead, so it has no rule step.
    pub fn signs_step_max(&self) -> Option<i64> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Expert => Some(4),
        }
    }

    /// Expert arithmetic may hide an operand instead of the result.
    pub fn hides_operands(&self) -> bool {
        *self == Difficulty::Expert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        for difficulty in Difficulty::all() {
            assert_eq!(Difficulty::from_ordinal(difficulty.ordinal()), difficulty);
        }
        assert_eq!(Difficulty::from_ordinal(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_ordinal(9), Difficulty::Easy);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Expert);
    }

    #[test]
    fn test_ranges_grow_with_level() {
        let easy = Difficulty::Easy.arithmetic_range();
        let expert = Difficulty::Expert.arithmetic_range();
        assert_eq!((easy.max_num, easy.max_move), (10, 2));
        assert_eq!((expert.max_num, expert.max_move), (50, 10));
        assert_eq!(Difficulty::Medium.series_range().step_max, 2);
        assert_eq!(Difficulty::Expert.neighbors_max_center(), 100);
        assert_eq!(Difficulty::Easy.signs_step_max(), None);
    }
}

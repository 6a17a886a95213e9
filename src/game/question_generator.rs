use log::{trace, warn};

use super::random::RandomSource;
use crate::model::{Answer, Difficulty, Operator, Question, QuizMode, VisualAid};

/// Rejection sampling for subtraction gives up after this many draws and
/// turns the last draw into an addition. Each draw is an addition with
/// probability 1/2, so the bound is never reached in practice.
const MAX_ARITHMETIC_ATTEMPTS: usize = 64;

/// Which generator serves a question, keyed by (mode, level). Each entry is
/// `(kind, upper)`: a uniform draw `r` selects the first entry with
/// `r < upper`. The bounds are the cumulative thresholds themselves, so the
/// walk matches the 0.2 / 0.4 / 0.6 cascade draw for draw.
pub fn dispatch_table(mode: QuizMode, difficulty: Difficulty) -> &'static [(QuizMode, f64)] {
    match (mode, difficulty) {
        (QuizMode::Arithmetic, Difficulty::Easy) => &[(QuizMode::Arithmetic, 1.0)],
        (QuizMode::Arithmetic, Difficulty::Medium) => &[
            (QuizMode::Series, 0.2),
            (QuizMode::Neighbors, 0.4),
            (QuizMode::Arithmetic, 1.0),
        ],
        (QuizMode::Arithmetic, Difficulty::Expert) => &[
            (QuizMode::Series, 0.2),
            (QuizMode::Neighbors, 0.4),
            (QuizMode::Signs, 0.6),
            (QuizMode::Arithmetic, 1.0),
        ],
        (QuizMode::Series, _) => &[(QuizMode::Series, 1.0)],
        (QuizMode::Neighbors, _) => &[(QuizMode::Neighbors, 1.0)],
        (QuizMode::Signs, _) => &[(QuizMode::Signs, 1.0)],
    }
}

/// Probability that `mode` at `difficulty` yields a question of `kind`.
pub fn kind_probability(mode: QuizMode, difficulty: Difficulty, kind: QuizMode) -> f64 {
    let mut lower = 0.0;
    let mut probability = 0.0;
    for &(entry_kind, upper) in dispatch_table(mode, difficulty) {
        if entry_kind == kind {
            probability += upper - lower;
        }
        lower = upper;
    }
    probability
}

/// Picks the generator. Consumes a real draw only when there is a choice.
pub fn pick_kind(mode: QuizMode, difficulty: Difficulty, rng: &mut impl RandomSource) -> QuizMode {
    let table = dispatch_table(mode, difficulty);
    if let [(only, _)] = table {
        return *only;
    }

    let roll = rng.uniform_real();
    let kind = table
        .iter()
        .find(|(_, upper)| roll < *upper)
        .map(|(kind, _)| *kind)
        .unwrap_or(mode);
    trace!(target: "question_generator", "Roll {:.3} picked {:?}", roll, kind);
    kind
}

pub fn generate_question(
    mode: QuizMode,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Question {
    let question = match pick_kind(mode, difficulty, rng) {
        QuizMode::Arithmetic => generate_arithmetic(difficulty, rng),
        QuizMode::Series => generate_series(difficulty, rng),
        QuizMode::Neighbors => generate_neighbors(difficulty, rng),
        QuizMode::Signs => generate_signs(difficulty, rng),
    };
    trace!(target: "question_generator", "Generated question: {:?}", question);
    question
}

/// Draws (num1, num2, operator) until a subtraction would not go negative.
fn draw_operands(difficulty: Difficulty, rng: &mut impl RandomSource) -> (i64, Operator, i64) {
    let range = difficulty.arithmetic_range();
    let mut last = (1, 1);
    for _ in 0..MAX_ARITHMETIC_ATTEMPTS {
        let num1 = rng.uniform_int(1, range.max_num);
        let num2 = rng.uniform_int(1, range.max_move);
        let operator = if rng.uniform_real() > 0.5 {
            Operator::Add
        } else {
            Operator::Subtract
        };

        if operator == Operator::Add || num1 - num2 >= 0 {
            return (num1, operator, num2);
        }
        last = (num1, num2);
    }

    warn!(
        target: "question_generator",
        "No valid subtraction after {} draws; using addition", MAX_ARITHMETIC_ATTEMPTS
    );
    (last.0, Operator::Add, last.1)
}

pub fn generate_arithmetic(difficulty: Difficulty, rng: &mut impl RandomSource) -> Question {
    let (num1, operator, num2) = draw_operands(difficulty, rng);
    let result = operator.apply(num1, num2);
    let symbol = operator.symbol();

    if difficulty.hides_operands() {
        return match rng.uniform_int(0, 2) {
            1 => Question::new(
                QuizMode::Arithmetic,
                format!("? {} {} = {}", symbol, num2, result),
                Answer::Number(num1),
            )
            .formatted_equation(),
            2 => Question::new(
                QuizMode::Arithmetic,
                format!("{} {} ? = {}", num1, symbol, result),
                Answer::Number(num2),
            )
            .formatted_equation(),
            _ => Question::new(
                QuizMode::Arithmetic,
                format!("{} {} {}", num1, symbol, num2),
                Answer::Number(result),
            ),
        };
    }

    Question::new(
        QuizMode::Arithmetic,
        format!("{} {} {}", num1, symbol, num2),
        Answer::Number(result),
    )
    .with_visual_aid(VisualAid {
        left: num1,
        operator,
        right: num2,
    })
}

pub fn generate_series(difficulty: Difficulty, rng: &mut impl RandomSource) -> Question {
    let range = difficulty.series_range();
    let start = rng.uniform_int(1, range.max_start);
    let step = rng.uniform_int(1, range.step_max);

    Question::new(
        QuizMode::Series,
        format!("{}, {}, {}, ?", start, start + step, start + step * 2),
        Answer::Number(start + step * 3),
    )
}

pub fn generate_neighbors(difficulty: Difficulty, rng: &mut impl RandomSource) -> Question {
    // at least 2 so the left neighbor is 1 or more
    let center = rng.uniform_int(2, difficulty.neighbors_max_center() - 1);

    Question::new(
        QuizMode::Neighbors,
        format!("_ {} _", center),
        Answer::neighbors(center),
    )
}

pub fn generate_signs(difficulty: Difficulty, rng: &mut impl RandomSource) -> Question {
    let Some(step_max) = difficulty.signs_step_max() else {
        let num1 = rng.uniform_int(2, 9);
        let num2 = rng.uniform_int(1, 2);
        let operator = if rng.uniform_real() > 0.5 {
            Operator::Add
        } else {
            Operator::Subtract
        };
        let result = operator.apply(num1, num2);
        let correct = if num1 + num2 == result {
            Operator::Add
        } else {
            Operator::Subtract
        };

        return Question::new(
            QuizMode::Signs,
            format!("{} [ ? ] {} = {}", num1, num2, result),
            Answer::text(correct.symbol()),
        );
    };

    let start = rng.uniform_int(1, 10);
    let step = rng.uniform_int(1, step_max);

    Question::new(
        QuizMode::Signs,
        format!("{} ➡ {} ➡ {}", start, start + step, start + step * 2),
        Answer::text(format!("+{}", step)),
    )
}

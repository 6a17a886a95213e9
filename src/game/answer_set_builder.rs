use log::{error, trace, warn};

use super::random::RandomSource;
use crate::model::{Answer, AnswerSet, Operator, ANSWER_SET_SIZE, NEIGHBOR_SEPARATOR};

/// Random distractor draws before falling back to a deterministic scan.
/// Numbers have at least two distinct distractors among the four offsets,
/// and neighbor answers at least eight among the nine valid centers, so a
/// fallback means the random source is misbehaving.
const MAX_DISTRACTOR_DRAWS: usize = 256;

const NUMERIC_OFFSETS: [i64; 4] = [1, 2, -1, -2];
const NEIGHBOR_CENTER_MAX: i64 = 10;
const FILLER_ANSWERS: [&str; 3] = ["=", "?", "…"];

/// Adds `candidate` unless the set is full or already holds it.
fn insert(answers: &mut Vec<Answer>, candidate: Answer) {
    if answers.len() < ANSWER_SET_SIZE && !answers.contains(&candidate) {
        answers.push(candidate);
    }
}

fn is_full(answers: &[Answer]) -> bool {
    answers.len() >= ANSWER_SET_SIZE
}

/// Builds the three shuffled candidates for `correct`.
pub fn build_answer_set(correct: &Answer, rng: &mut impl RandomSource) -> AnswerSet {
    let mut answers = vec![correct.clone()];
    match correct {
        Answer::Number(value) => add_numeric_distractors(*value, &mut answers, rng),
        Answer::Text(text) => add_text_distractors(text, &mut answers, rng),
    }

    rng.shuffle(&mut answers);
    trace!(target: "answer_set", "Answers for {}: {:?}", correct, answers);
    AnswerSet::from_shuffled(answers)
}

/// `value + offset` for a nonzero offset in -2..=2; a negative candidate is
/// reflected to `value + |offset|`.
fn numeric_candidate(value: i64, offset: i64) -> i64 {
    let candidate = value + offset;
    if candidate >= 0 {
        candidate
    } else {
        value + offset.abs()
    }
}

fn add_numeric_distractors(value: i64, answers: &mut Vec<Answer>, rng: &mut impl RandomSource) {
    for _ in 0..MAX_DISTRACTOR_DRAWS {
        if is_full(answers) {
            return;
        }
        let offset = rng.uniform_int(-2, 2);
        if offset == 0 {
            continue;
        }
        insert(answers, Answer::Number(numeric_candidate(value, offset)));
    }

    warn!(target: "answer_set", "Random distractors exhausted for {}; scanning offsets", value);
    for offset in NUMERIC_OFFSETS {
        insert(answers, Answer::Number(numeric_candidate(value, offset)));
    }
}

fn add_text_distractors(text: &str, answers: &mut Vec<Answer>, rng: &mut impl RandomSource) {
    if let Some(operator) = Operator::from_symbol(text) {
        insert(answers, Answer::text(operator.opposite().symbol()));
        insert(answers, Answer::text("="));
        return;
    }

    if let Some(step) = text.strip_prefix('+').and_then(|s| s.parse::<i64>().ok()) {
        // +n+1 and +n+2 always fit, so -n is never reached
        for candidate in [
            format!("+{}", step + 1),
            format!("+{}", step + 2),
            format!("-{}", step),
        ] {
            insert(answers, Answer::Text(candidate));
        }
        return;
    }

    if text.contains(NEIGHBOR_SEPARATOR) {
        add_neighbor_distractors(text, answers, rng);
        return;
    }

    error!(target: "answer_set", "Unrecognized text answer {:?}; padding with fillers", text);
    for filler in FILLER_ANSWERS {
        insert(answers, Answer::text(filler));
    }
}

fn add_neighbor_distractors(text: &str, answers: &mut Vec<Answer>, rng: &mut impl RandomSource) {
    let correct = Answer::text(text);
    for _ in 0..MAX_DISTRACTOR_DRAWS {
        if is_full(answers) {
            return;
        }
        let center = rng.uniform_int(1, NEIGHBOR_CENTER_MAX);
        let fake = Answer::neighbors(center);
        if fake != correct && center > 1 {
            insert(answers, fake);
        }
    }

    warn!(target: "answer_set", "Random neighbors exhausted for {:?}; scanning centers", text);
    for center in 2..=NEIGHBOR_CENTER_MAX {
        insert(answers, Answer::neighbors(center));
    }
}

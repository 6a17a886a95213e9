use uuid::Uuid;

use super::{
    AnswerSet, Difficulty, MascotMood, Question, QuizMode, RoundRecord, SessionSummary, SoundCue,
};

#[derive(Debug, Clone)]
pub enum QuizEvent {
    SessionStarted {
        mode: QuizMode,
        difficulty: Difficulty,
        playthrough_id: Uuid,
    },
    QuestionPresented {
        question: Question,
        answers: AnswerSet,
        index: usize,
        total: usize,
    },
    MascotChanged(MascotMood),
    SoundRequested(SoundCue),
    RoundResolved(RoundRecord),
    CoinsChanged(u32),
    SessionCompleted(SessionSummary),
}

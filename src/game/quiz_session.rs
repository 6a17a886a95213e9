use std::time::SystemTime;

use chrono::Utc;
use log::{debug, info, trace};
use thiserror::Error;
use uuid::Uuid;

use super::answer_set_builder::build_answer_set;
use super::profile_store::ProfileStore;
use super::question_generator::generate_question;
use super::random::{RandomSource, StdRandom};
use super::settings::Settings;
use crate::events::EventEmitter;
use crate::model::{
    Answer, AnswerSet, Difficulty, MascotMood, Question, QuizEvent, QuizMode, RoundRecord,
    RoundResult, SessionSummary, SoundCue, TimerState,
};

pub const QUESTIONS_PER_SESSION: usize = 10;

/// Coins granted for every correct answer, at the moment it is given.
pub const COINS_PER_CORRECT_ANSWER: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no session is in progress")]
    NotStarted,
    #[error("the session is already complete")]
    AlreadyCompleted,
}

#[derive(Debug)]
struct CurrentRound {
    question: Question,
    answers: AnswerSet,
}

/// Runs one playthrough of `QUESTIONS_PER_SESSION` questions. Mode and
/// level are fixed at start; coins go to the profile as they are earned.
pub struct QuizSession<R: RandomSource> {
    rng: R,
    phase: SessionPhase,
    mode: QuizMode,
    difficulty: Difficulty,
    index: usize,
    score: u32,
    history: Vec<RoundRecord>,
    timer_state: TimerState,
    playthrough_id: Uuid,
    current_round: Option<CurrentRound>,
    summary: Option<SessionSummary>,
    muted: bool,
    debug_mode: bool,
    event_emitter: EventEmitter<QuizEvent>,
}

impl QuizSession<StdRandom> {
    /// Seeded from `SEED` when set; sound cues follow the mute setting.
    pub fn from_settings(settings: &Settings, event_emitter: EventEmitter<QuizEvent>) -> Self {
        let mut session = Self::new(StdRandom::from_env(), event_emitter);
        session.set_muted(settings.muted);
        session
    }
}

impl<R: RandomSource> QuizSession<R> {
    pub fn new(rng: R, event_emitter: EventEmitter<QuizEvent>) -> Self {
        Self {
            rng,
            phase: SessionPhase::NotStarted,
            mode: QuizMode::default(),
            difficulty: Difficulty::default(),
            index: 0,
            score: 0,
            history: Vec::new(),
            timer_state: TimerState::default(),
            playthrough_id: Uuid::new_v4(),
            current_round: None,
            summary: None,
            muted: false,
            debug_mode: Settings::is_debug_mode(),
            event_emitter,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Starts with the mode and level the player picked last time.
    pub fn start_from_settings(&mut self, settings: &Settings) {
        self.set_muted(settings.muted);
        self.start_session(settings.mode, settings.difficulty);
    }

    /// Starts a fresh playthrough, discarding any previous one, and
    /// presents the first question.
    pub fn start_session(&mut self, mode: QuizMode, difficulty: Difficulty) {
        self.phase = SessionPhase::InProgress;
        self.mode = mode;
        self.difficulty = difficulty;
        self.index = 0;
        self.score = 0;
        self.history.clear();
        self.timer_state = TimerState::started_at(SystemTime::now());
        self.playthrough_id = Uuid::new_v4();
        self.current_round = None;
        self.summary = None;
        self.debug_mode = Settings::is_debug_mode();
        info!(
            target: "quiz_session",
            "New session; mode: {}; difficulty: {}; id: {}",
            mode.label(),
            difficulty.label(),
            self.playthrough_id
        );

        self.event_emitter.emit(QuizEvent::SessionStarted {
            mode,
            difficulty,
            playthrough_id: self.playthrough_id,
        });
        self.event_emitter
            .emit(QuizEvent::MascotChanged(MascotMood::Idle));
        self.present_next_round();
    }

    fn present_next_round(&mut self) {
        let question = generate_question(self.mode, self.difficulty, &mut self.rng);
        let answers = build_answer_set(&question.correct, &mut self.rng);
        debug!(
            target: "quiz_session",
            "Question {}/{}: {} (answer {})",
            self.index + 1,
            QUESTIONS_PER_SESSION,
            question.display_text(),
            question.correct
        );

        if self.debug_mode {
            info!(target: "quiz_session", "Answer: {}", question.correct);
        }

        self.event_emitter
            .emit(QuizEvent::MascotChanged(MascotMood::Thinking));
        self.event_emitter.emit(QuizEvent::QuestionPresented {
            question: question.clone(),
            answers: answers.clone(),
            index: self.index,
            total: QUESTIONS_PER_SESSION,
        });
        self.current_round = Some(CurrentRound { question, answers });
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_round.as_ref().map(|round| &round.question)
    }

    pub fn current_answer_set(&self) -> Option<&AnswerSet> {
        self.current_round.as_ref().map(|round| &round.answers)
    }

    /// Judges `answer` against the current question by exact equality,
    /// records the round, pays out on a correct answer, and moves on to the
    /// next question or to completion.
    pub fn submit_answer(
        &mut self,
        answer: Answer,
        profile: &mut ProfileStore,
    ) -> Result<RoundResult, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Completed => return Err(SessionError::AlreadyCompleted),
            SessionPhase::InProgress => (),
        }
        let round = self.current_round.take().ok_or(SessionError::NotStarted)?;

        let was_correct = round.question.is_correct(&answer);
        let record = RoundRecord {
            question: round.question.text.clone(),
            correct: round.question.correct.clone(),
            user_answer: answer,
            was_correct,
        };
        trace!(target: "quiz_session", "Round resolved: {:?}", record);

        if was_correct {
            self.score += 1;
            let balance = profile.grant_coins(COINS_PER_CORRECT_ANSWER);
            self.event_emitter.emit(QuizEvent::CoinsChanged(balance));
        }
        self.play(SoundCue::for_outcome(was_correct));
        self.event_emitter
            .emit(QuizEvent::MascotChanged(MascotMood::for_outcome(was_correct)));
        self.event_emitter
            .emit(QuizEvent::RoundResolved(record.clone()));

        let result = record.result();
        self.history.push(record);
        self.index += 1;

        if self.index >= QUESTIONS_PER_SESSION {
            self.complete();
        } else {
            self.present_next_round();
        }
        Ok(result)
    }

    /// Submits the answer shown at `position` in the current answer set.
    pub fn submit_choice(
        &mut self,
        position: usize,
        profile: &mut ProfileStore,
    ) -> Result<Option<RoundResult>, SessionError> {
        let Some(answer) = self
            .current_answer_set()
            .and_then(|answers| answers.get(position))
            .cloned()
        else {
            return match self.phase {
                SessionPhase::InProgress => Ok(None),
                SessionPhase::NotStarted => Err(SessionError::NotStarted),
                SessionPhase::Completed => Err(SessionError::AlreadyCompleted),
            };
        };
        self.submit_answer(answer, profile).map(Some)
    }

    fn complete(&mut self) {
        self.timer_state = self.timer_state.ended(SystemTime::now());
        self.phase = SessionPhase::Completed;
        self.current_round = None;

        let summary = SessionSummary {
            playthrough_id: self.playthrough_id,
            mode: self.mode,
            difficulty: self.difficulty,
            score: self.score,
            total_questions: QUESTIONS_PER_SESSION,
            elapsed_seconds: self.timer_state.elapsed_seconds(),
            history: self.history.clone(),
            completed_at: Utc::now(),
        };
        info!(
            target: "quiz_session",
            "Session complete; score: {}; time: {}", summary.score_display(), summary.elapsed_display()
        );

        if summary.score > 0 {
            self.play(SoundCue::Win);
        }
        self.event_emitter
            .emit(QuizEvent::SessionCompleted(summary.clone()));
        self.summary = Some(summary);
    }

    fn play(&self, cue: SoundCue) {
        if !self.muted {
            self.event_emitter.emit(QuizEvent::SoundRequested(cue));
        }
    }

    /// Drops the playthrough. Coins already granted stay granted.
    pub fn abandon(&mut self) {
        if self.phase == SessionPhase::InProgress {
            info!(target: "quiz_session", "Session {} abandoned at question {}", self.playthrough_id, self.index + 1);
        }
        self.phase = SessionPhase::NotStarted;
        self.index = 0;
        self.score = 0;
        self.history.clear();
        self.current_round = None;
        self.summary = None;
    }

    pub fn is_session_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    pub fn session_summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Fraction of the session answered so far, for the progress bar.
    pub fn progress(&self) -> f32 {
        self.index as f32 / QUESTIONS_PER_SESSION as f32
    }

    pub fn playthrough_id(&self) -> Uuid {
        self.playthrough_id
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serial_test::serial;
    use test_context::test_context;

    use super::*;
    use crate::events::{Channel, EventRecorder};
    use crate::game::random::ScriptedRandom;
    use crate::tests::UsingLogger;

    fn new_session(seed: u64) -> (QuizSession<StdRandom>, Rc<RefCell<EventRecorder<QuizEvent>>>) {
        let (emitter, observer) = Channel::<QuizEvent>::new();
        let recorder = Rc::new(RefCell::new(EventRecorder::default()));
        observer.attach(recorder.clone());
        (QuizSession::new(StdRandom::from_seed(seed), emitter), recorder)
    }

    fn wrong_answer(session: &QuizSession<impl RandomSource>) -> Answer {
        let question = session.current_question().unwrap();
        session
            .current_answer_set()
            .unwrap()
            .iter()
            .find(|a| !question.is_correct(a))
            .cloned()
            .unwrap()
    }

    fn right_answer(session: &QuizSession<impl RandomSource>) -> Answer {
        session.current_question().unwrap().correct.clone()
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_seven_of_ten_grants_seven_coins(_: &mut UsingLogger) {
        let (mut session, recorder) = new_session(17);
        let mut profile = ProfileStore::in_memory();

        session.start_session(QuizMode::Arithmetic, Difficulty::Medium);
        for round in 0..QUESTIONS_PER_SESSION {
            assert!(!session.is_session_complete());
            assert_eq!(session.index(), round);
            let answer = if round < 7 {
                right_answer(&session)
            } else {
                wrong_answer(&session)
            };
            let result = session.submit_answer(answer, &mut profile).unwrap();
            assert_eq!(result.was_correct, round < 7);
        }

        assert!(session.is_session_complete());
        assert_eq!(profile.coins(), 7);
        let summary = session.session_summary().unwrap();
        assert_eq!(summary.score, 7);
        assert_eq!(summary.history.len(), QUESTIONS_PER_SESSION);
        assert_eq!(summary.history.iter().filter(|r| r.was_correct).count(), 7);
        assert_eq!(summary.score_display(), "7 / 10");
        assert!(session.current_question().is_none());

        let events = recorder.borrow();
        let completed = events
            .events()
            .iter()
            .filter(|e| matches!(e, QuizEvent::SessionCompleted(_)))
            .count();
        let resolved = events
            .events()
            .iter()
            .filter(|e| matches!(e, QuizEvent::RoundResolved(_)))
            .count();
        assert_eq!(completed, 1);
        assert_eq!(resolved, QUESTIONS_PER_SESSION);
        assert!(matches!(
            events.events().last(),
            Some(QuizEvent::SessionCompleted(s)) if s.score == 7
        ));
    }

    #[test]
    fn test_coins_are_granted_immediately() {
        let (mut session, recorder) = new_session(3);
        let mut profile = ProfileStore::in_memory();
        profile.grant_coins(4);

        session.start_session(QuizMode::Series, Difficulty::Easy);
        let answer = right_answer(&session);
        session.submit_answer(answer, &mut profile).unwrap();
        assert_eq!(profile.coins(), 5);
        assert!(recorder
            .borrow()
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::CoinsChanged(5))));

        // abandoning keeps what was earned
        session.abandon();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(profile.coins(), 5);
    }

    #[test]
    fn test_text_answers_need_exact_match() {
        let (emitter, _observer) = Channel::<QuizEvent>::new();
        // signs at medium: start 3, step 2 -> "+2"
        let rng = ScriptedRandom::new([3, 2], []);
        let mut session = QuizSession::new(rng, emitter);
        let mut profile = ProfileStore::in_memory();

        session.start_session(QuizMode::Signs, Difficulty::Medium);
        assert_eq!(session.current_question().unwrap().correct, Answer::text("+2"));

        let result = session.submit_answer(Answer::Number(2), &mut profile).unwrap();
        assert!(!result.was_correct);
        assert_eq!(result.correct_value, Answer::text("+2"));
        assert_eq!(profile.coins(), 0);

        let answer = right_answer(&session);
        let result = session.submit_answer(answer, &mut profile).unwrap();
        assert!(result.was_correct);
        assert_eq!(session.history()[0].user_answer, Answer::Number(2));
    }

    #[test]
    fn test_submit_outside_session() {
        let (mut session, _recorder) = new_session(1);
        let mut profile = ProfileStore::in_memory();
        assert_eq!(
            session.submit_answer(Answer::Number(1), &mut profile),
            Err(SessionError::NotStarted)
        );

        session.start_session(QuizMode::Neighbors, Difficulty::Easy);
        for _ in 0..QUESTIONS_PER_SESSION {
            session.submit_choice(0, &mut profile).unwrap().unwrap();
        }
        assert!(session.is_session_complete());
        assert_eq!(
            session.submit_answer(Answer::Number(1), &mut profile),
            Err(SessionError::AlreadyCompleted)
        );
        assert_eq!(
            session.submit_choice(0, &mut profile),
            Err(SessionError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_choice_out_of_range_is_ignored() {
        let (mut session, _recorder) = new_session(2);
        let mut profile = ProfileStore::in_memory();
        session.start_session(QuizMode::Arithmetic, Difficulty::Easy);
        assert_eq!(session.submit_choice(3, &mut profile), Ok(None));
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_restart_resets_state() {
        let (mut session, _recorder) = new_session(5);
        let mut profile = ProfileStore::in_memory();
        session.start_session(QuizMode::Arithmetic, Difficulty::Expert);
        let answer = right_answer(&session);
        session.submit_answer(answer, &mut profile).unwrap();
        let first_id = session.playthrough_id();
        assert!((session.progress() - 0.1).abs() < f32::EPSILON);

        session.start_session(QuizMode::Series, Difficulty::Easy);
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.history().is_empty());
        assert_ne!(session.playthrough_id(), first_id);
        assert_eq!(session.mode(), QuizMode::Series);
        assert_eq!(session.current_question().unwrap().kind, QuizMode::Series);
    }

    #[test]
    fn test_presented_question_matches_current() {
        let (mut session, recorder) = new_session(8);
        session.start_session(QuizMode::Arithmetic, Difficulty::Easy);

        let events = recorder.borrow();
        let Some(QuizEvent::QuestionPresented {
            question,
            answers,
            index,
            total,
        }) = events.events().last()
        else {
            panic!("last event should present a question: {:?}", events.events());
        };
        assert_eq!(Some(question), session.current_question());
        assert_eq!(Some(answers), session.current_answer_set());
        assert_eq!((*index, *total), (0, QUESTIONS_PER_SESSION));
        assert!(answers.contains(&question.correct));
    }

    #[test]
    fn test_sound_cues_follow_mute() {
        let (mut session, recorder) = new_session(4);
        let mut profile = ProfileStore::in_memory();
        session.start_session(QuizMode::Arithmetic, Difficulty::Easy);
        let answer = right_answer(&session);
        session.submit_answer(answer, &mut profile).unwrap();
        assert!(recorder
            .borrow()
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::SoundRequested(SoundCue::Correct))));

        recorder.borrow_mut().take();
        session.set_muted(true);
        let answer = wrong_answer(&session);
        session.submit_answer(answer, &mut profile).unwrap();
        let events = recorder.borrow();
        assert!(!events
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::SoundRequested(_))));
        assert!(events
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::MascotChanged(MascotMood::Sad))));
    }

    #[test]
    fn test_last_pick_survives_restart() {
        let path = std::env::temp_dir()
            .join(format!("mathbear-session-{}", Uuid::new_v4()))
            .join("settings.json");
        let mut settings = Settings::load_from(&path);
        settings.muted = true;
        settings
            .remember_at(&path, QuizMode::Signs, Difficulty::Expert)
            .unwrap();

        let reloaded = Settings::load_from(&path);
        let (mut session, recorder) = new_session(12);
        session.start_from_settings(&reloaded);
        assert_eq!(session.mode(), QuizMode::Signs);
        assert_eq!(session.difficulty(), Difficulty::Expert);
        assert_eq!(session.current_question().unwrap().kind, QuizMode::Signs);

        let mut profile = ProfileStore::in_memory();
        let answer = right_answer(&session);
        session.submit_answer(answer, &mut profile).unwrap();
        assert!(!recorder
            .borrow()
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::SoundRequested(_))));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    #[serial]
    fn test_debug_mode_is_read_at_start() {
        let (mut session, _recorder) = new_session(9);
        std::env::set_var("DEBUG", "1");
        session.start_session(QuizMode::Arithmetic, Difficulty::Easy);
        assert!(session.is_debug_mode());

        std::env::remove_var("DEBUG");
        session.start_session(QuizMode::Arithmetic, Difficulty::Easy);
        assert!(!session.is_debug_mode());
    }

    #[test]
    fn test_zero_score_has_no_fanfare() {
        let (mut session, recorder) = new_session(6);
        let mut profile = ProfileStore::in_memory();
        session.start_session(QuizMode::Neighbors, Difficulty::Medium);
        for _ in 0..QUESTIONS_PER_SESSION {
            let answer = wrong_answer(&session);
            session.submit_answer(answer, &mut profile).unwrap();
        }
        let summary = session.session_summary().unwrap();
        assert_eq!(summary.score, 0);
        assert!(!summary.qualifies_for_leaderboard());
        assert_eq!(summary.report_lines().len(), QUESTIONS_PER_SESSION);
        assert!(summary.report_lines()[0].ends_with('✘'));
        assert!(!recorder
            .borrow()
            .events()
            .iter()
            .any(|e| matches!(e, QuizEvent::SoundRequested(SoundCue::Win))));
    }
}

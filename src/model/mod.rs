mod answer_set;
mod difficulty;
mod feedback;
mod player_profile;
mod question;
mod quiz_event;
mod quiz_mode;
mod round_record;
mod session_summary;
mod store_item;
mod timer_state;

pub use answer_set::{AnswerSet, ANSWER_SET_SIZE};
pub use difficulty::{ArithmeticRange, Difficulty, SeriesRange};
pub use feedback::{MascotMood, SoundCue, Tone, Waveform, TONE_GAIN};
pub use player_profile::{LeaderboardEntry, PlayerProfile, DEFAULT_PLAYER_NAME};
pub use question::{Answer, Operator, Question, VisualAid, NEIGHBOR_SEPARATOR};
pub use quiz_event::QuizEvent;
pub use quiz_mode::QuizMode;
pub use round_record::{RoundRecord, RoundResult};
pub use session_summary::SessionSummary;
pub use store_item::{StoreItem, STORE_ITEMS};
pub use timer_state::TimerState;

pub mod answer_set_builder;
pub mod leaderboard;
pub mod profile_store;
pub mod question_generator;
pub mod quiz_session;
pub mod random;
pub mod settings;
pub mod store;

pub use answer_set_builder::build_answer_set;
pub use leaderboard::LeaderboardError;
pub use profile_store::{FileStorage, MemoryStorage, ProfileStorage, ProfileStore, StoreError};
pub use question_generator::generate_question;
pub use quiz_session::{QuizSession, SessionError, SessionPhase, QUESTIONS_PER_SESSION};
pub use random::{RandomSource, StdRandom};
pub use settings::Settings;
pub use store::{ItemStatus, StoreActionError};

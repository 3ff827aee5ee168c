pub mod bank;
mod builder;
mod hint;
mod question;
mod score;
mod session;
mod settings;

pub use builder::{BuildError, QuestionsBuilder};
pub use hint::Hint;
pub use question::{ANSWERS_PER_QUESTION, AnswerOption, Question, QuestionError};
pub use score::ScoreRecord;
pub use session::{GameSession, SessionError};
pub use settings::{Difficulty, GameSettings, QuestionOrder};

pub mod difficulty;
pub mod quiz_question;

pub use difficulty::Difficulty;
pub use quiz_question::QuizQuestion;

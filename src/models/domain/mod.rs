pub mod game;
pub mod game_score;
pub mod grading;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_listing;
pub mod quiz_question;
pub mod timestamp;

pub use game::Game;
pub use game_score::{ScoreRecord, ScoreUpdate};
pub use grading::{AnswerResult, Grade, GradingResult, UserAnswers};
pub use quiz::{Difficulty, Quiz};
pub use quiz_attempt::QuizAttempt;
pub use quiz_listing::QuizListing;
pub use quiz_question::Question;

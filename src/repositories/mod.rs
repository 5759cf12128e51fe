pub mod game_repository;
pub mod game_score_repository;
pub mod memory;
pub mod quiz_attempt_repository;
pub mod quiz_repository;

pub use game_repository::{GameRepository, MongoGameRepository};
pub use game_score_repository::{GameScoreRepository, MongoGameScoreRepository};
pub use memory::{
    InMemoryGameRepository, InMemoryGameScoreRepository, InMemoryQuizAttemptRepository,
    InMemoryQuizRepository,
};
pub use quiz_attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};

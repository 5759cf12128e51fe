pub mod answer_grader;
pub mod game_service;
pub mod model_service;
pub mod quiz_generation_service;
pub mod quiz_service;
pub mod quiz_synthesizer;
pub mod score_ledger;

pub use answer_grader::AnswerGrader;
pub use game_service::GameService;
pub use model_service::{OfflineModelService, OpenAiModelService, TextCompletion};
pub use quiz_generation_service::QuizGenerationService;
pub use quiz_service::QuizService;
pub use quiz_synthesizer::QuizSynthesizer;
pub use score_ledger::ScoreLedger;

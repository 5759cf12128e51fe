use rand::Rng;

use crate::models::domain::{quiz_question::OPTIONS_PER_QUESTION, Difficulty, Question, Quiz};

const OPTION_LABELS: [char; OPTIONS_PER_QUESTION] = ['A', 'B', 'C', 'D'];

/// Builds templated quizzes without consulting the model.
///
/// The shape is fixed; only the correct option of each question is random.
pub struct QuizSynthesizer;

impl QuizSynthesizer {
    pub fn synthesize(topic: &str, difficulty: Difficulty, question_count: u32) -> Quiz {
        Self::synthesize_with_rng(topic, difficulty, question_count, &mut rand::thread_rng())
    }

    /// Same as [`QuizSynthesizer::synthesize`] with a caller-provided RNG;
    /// a seeded RNG makes the output reproducible.
    pub fn synthesize_with_rng<R: Rng + ?Sized>(
        topic: &str,
        difficulty: Difficulty,
        question_count: u32,
        rng: &mut R,
    ) -> Quiz {
        let questions = (1..=question_count)
            .map(|number| Self::question(topic, number, rng))
            .collect();

        Quiz::annotated(
            format!("{} Quiz", topic),
            format!("A {} level quiz about {}", difficulty, topic),
            questions,
            difficulty,
            question_count,
        )
    }

    fn question<R: Rng + ?Sized>(topic: &str, number: u32, rng: &mut R) -> Question {
        Question {
            text: format!("Question {} about {}?", number, topic),
            options: OPTION_LABELS
                .iter()
                .map(|label| format!("Answer {} for question {}", label, number))
                .collect(),
            correct_option_index: rng.gen_range(0..OPTIONS_PER_QUESTION as u32),
            explanation: format!(
                "This is the explanation for question {} about {}.",
                number, topic
            ),
        }
    }
}

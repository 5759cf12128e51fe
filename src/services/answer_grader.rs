use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerResult, Grade, GradingResult, Quiz, UserAnswers},
};

/// Scores submitted answers against a quiz definition.
pub struct AnswerGrader;

impl AnswerGrader {
    pub fn grade(quiz: &Quiz, answers: Option<&UserAnswers>) -> AppResult<GradingResult> {
        if quiz.questions.is_empty() {
            return Err(AppError::InvalidInput(
                "Quiz must contain at least one question".to_string(),
            ));
        }
        let answers = answers
            .ok_or_else(|| AppError::InvalidInput("Answers are required".to_string()))?;
        if quiz.passing_score_percent > 100 {
            return Err(AppError::InvalidInput(format!(
                "Passing score must be between 0 and 100, got {}",
                quiz.passing_score_percent
            )));
        }

        let per_question: Vec<AnswerResult> = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let user_answer = answers.get(index);
                AnswerResult {
                    question_index: index as u32,
                    user_answer,
                    correct_answer: question.correct_option_index,
                    is_correct: user_answer == Some(i64::from(question.correct_option_index)),
                }
            })
            .collect();

        let total_questions = per_question.len() as u32;
        let correct_answers = per_question.iter().filter(|r| r.is_correct).count() as u32;
        let percentage = rounded_percentage(correct_answers, total_questions);

        Ok(GradingResult {
            total_questions,
            correct_answers,
            percentage,
            passed: percentage >= quiz.passing_score_percent,
            grade: Grade::from_percentage(percentage),
            per_question,
        })
    }
}

/// `correct / total * 100`, rounded half up. `total` must be non-zero.
fn rounded_percentage(correct: u32, total: u32) -> u32 {
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((200 * correct + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Difficulty, services::quiz_synthesizer::QuizSynthesizer,
        test_utils::fixtures::quiz_with_answers,
    };

    fn quiz_with(question_count: u32) -> Quiz {
        QuizSynthesizer::synthesize("Access Control", Difficulty::Medium, question_count)
    }

    fn answering_correctly(quiz: &Quiz, how_many: usize) -> UserAnswers {
        quiz.questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let correct = i64::from(q.correct_option_index);
                let answer = if i < how_many { correct } else { (correct + 1) % 4 };
                (i, answer)
            })
            .collect()
    }

    #[test]
    fn all_correct_answers_score_excellent() {
        let quiz = quiz_with(6);
        let answers = answering_correctly(&quiz, 6);

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();

        assert_eq!(result.percentage, 100);
        assert_eq!(result.correct_answers, 6);
        assert!(result.passed);
        assert_eq!(result.grade, Grade::Excellent);
        assert!(result.per_question.iter().all(|r| r.is_correct));
    }

    #[test]
    fn seven_of_ten_passes_at_seventy_but_not_seventy_one() {
        let mut quiz = quiz_with(10);
        let answers = answering_correctly(&quiz, 7);

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();
        assert_eq!(result.percentage, 70);
        assert_eq!(result.grade, Grade::Good);
        assert!(result.passed);

        quiz.passing_score_percent = 71;
        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();
        assert_eq!(result.percentage, 70);
        assert!(!result.passed);
    }

    #[test]
    fn empty_quiz_is_invalid_input() {
        let quiz = quiz_with(0);

        let result = AnswerGrader::grade(&quiz, Some(&UserAnswers::default()));

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn absent_answers_are_invalid_input() {
        let quiz = quiz_with(3);

        let result = AnswerGrader::grade(&quiz, None);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn passing_score_above_hundred_is_invalid_input() {
        let mut quiz = quiz_with(3);
        quiz.passing_score_percent = 150;

        let result = AnswerGrader::grade(&quiz, Some(&UserAnswers::default()));

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn missing_entries_count_as_incorrect() {
        let quiz = quiz_with(4);
        let first = i64::from(quiz.questions[0].correct_option_index);
        let answers: UserAnswers = [(0, first)].into_iter().collect();

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();

        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.percentage, 25);
        assert_eq!(result.grade, Grade::NeedsImprovement);
        assert_eq!(result.per_question[2].user_answer, None);
        assert!(!result.per_question[2].is_correct);
    }

    #[test]
    fn out_of_range_answers_are_incorrect_not_errors() {
        let quiz = quiz_with(2);
        let answers: UserAnswers = [(0, -1), (1, 9)].into_iter().collect();

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();

        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.per_question[1].user_answer, Some(9));
    }

    #[test]
    fn per_question_results_follow_quiz_order() {
        let quiz = quiz_with(3);
        let answers = answering_correctly(&quiz, 3);

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();

        for (i, item) in result.per_question.iter().enumerate() {
            assert_eq!(item.question_index, i as u32);
            assert_eq!(item.correct_answer, quiz.questions[i].correct_option_index);
        }
    }

    #[test]
    fn ordered_answers_grade_against_fixed_quiz() {
        let quiz = quiz_with_answers(&[0, 3, 1, 2, 2, 0, 1, 3]);
        let answers = UserAnswers::from_ordered(vec![
            Some(0),
            Some(3),
            None,
            Some(2),
            Some(1),
            Some(0),
            Some(1),
            None,
        ]);

        let result = AnswerGrader::grade(&quiz, Some(&answers)).unwrap();

        assert_eq!(result.correct_answers, 5);
        assert_eq!(result.percentage, 63);
        assert_eq!(result.grade, Grade::Satisfactory);
        assert!(!result.passed);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(0, 5), 0);
        assert_eq!(rounded_percentage(5, 5), 100);
    }
}

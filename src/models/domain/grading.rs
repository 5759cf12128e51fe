use std::collections::BTreeMap;

use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
pub enum Grade {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Satisfactory,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Grade {
    /// Maps a percentage onto its band; bands are checked highest first.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Grade::Excellent
        } else if percentage >= 80 {
            Grade::VeryGood
        } else if percentage >= 70 {
            Grade::Good
        } else if percentage >= 60 {
            Grade::Satisfactory
        } else {
            Grade::NeedsImprovement
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub question_index: u32,
    pub user_answer: Option<i64>,
    pub correct_answer: u32,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub percentage: u32,
    pub passed: bool,
    pub grade: Grade,
    pub per_question: Vec<AnswerResult>,
}

/// Selected option per question index.
///
/// On the wire this is either an object keyed by the decimal question index
/// (`{"0": 2, "3": 1}`) or an ordered array where `null` marks an unanswered
/// question (`[2, null, 1]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "UserAnswersRepr")]
pub struct UserAnswers(BTreeMap<usize, i64>);

impl UserAnswers {
    pub fn get(&self, question_index: usize) -> Option<i64> {
        self.0.get(&question_index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_ordered(answers: Vec<Option<i64>>) -> Self {
        answers
            .into_iter()
            .enumerate()
            .filter_map(|(index, answer)| answer.map(|a| (index, a)))
            .collect()
    }
}

impl FromIterator<(usize, i64)> for UserAnswers {
    fn from_iter<I: IntoIterator<Item = (usize, i64)>>(iter: I) -> Self {
        UserAnswers(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserAnswersRepr {
    Ordered(Vec<Option<i64>>),
    Indexed(BTreeMap<String, Option<i64>>),
}

impl TryFrom<UserAnswersRepr> for UserAnswers {
    type Error = String;

    fn try_from(repr: UserAnswersRepr) -> Result<Self, Self::Error> {
        match repr {
            UserAnswersRepr::Ordered(answers) => Ok(UserAnswers::from_ordered(answers)),
            UserAnswersRepr::Indexed(answers) => {
                let mut parsed = BTreeMap::new();
                for (key, answer) in answers {
                    let index = key
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| format!("invalid question index '{}'", key))?;
                    if let Some(answer) = answer {
                        parsed.insert(index, answer);
                    }
                }
                Ok(UserAnswers(parsed))
            }
        }
    }
}

use std::collections::HashSet;

use async_graphql::{InputObject, SimpleObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(
    Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject, JsonSchema,
)]
#[graphql(input_name = "QuestionInput")]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "question")]
    pub text: String,
    pub options: Vec<String>, // presentation order is significant
    #[serde(alias = "correctAnswer")]
    pub correct_option_index: u32,
    #[serde(default)]
    #[graphql(default)]
    pub explanation: String,
}

impl Question {
    /// Checks the shape every generated question must have: non-empty text,
    /// exactly four distinct options and a correct index pointing at one of them.
    pub fn shape_error(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            return Some("question text is empty".to_string());
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Some(format!(
                "expected {} options, found {}",
                OPTIONS_PER_QUESTION,
                self.options.len()
            ));
        }

        let distinct: HashSet<&str> = self.options.iter().map(|o| o.trim()).collect();
        if distinct.len() != self.options.len() {
            return Some("options are not distinct".to_string());
        }

        if self.correct_option_index as usize >= OPTIONS_PER_QUESTION {
            return Some(format!(
                "correct option index {} is out of range",
                self.correct_option_index
            ));
        }

        None
    }
}

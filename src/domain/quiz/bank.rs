//! Question bank input types.
//!
//! The bank is an external collaborator: the quiz product ships it, this
//! crate only reads it to quote questions and options back to the user.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::Driver;

/// One selectable option on a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub driver: Driver,
}

/// One quiz question with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// The ordered question bank for one quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank(Vec<Question>);

impl QuestionBank {
    /// Creates a bank from an ordered question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    /// Returns the number of questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the question at an index, if present.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    /// Returns a specific option record, if both indices resolve.
    pub fn option(&self, question_index: usize, option_index: usize) -> Option<&AnswerOption> {
        self.question(question_index)
            .and_then(|q| q.options.get(option_index))
    }
}

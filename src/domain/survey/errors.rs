//! Error types for the survey aggregate.

use thiserror::Error;

use crate::domain::foundation::{QuestionId, SurveyId, ValidationError};

/// Errors that can occur during survey operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("Question belongs to survey {actual}, not {expected}")]
    ForeignQuestion {
        expected: SurveyId,
        actual: SurveyId,
    },

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Question number {number} is out of range (survey has {count} questions)")]
    InvalidQuestionNumber { number: u32, count: usize },

    #[error("Question {0} is already part of the survey")]
    DuplicateQuestion(QuestionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

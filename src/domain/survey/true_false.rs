//! True/false question and answer.

use crate::domain::foundation::{QuestionId, QuestionType, SurveyId, ValidationError};

use super::{AnswerBase, QuestionBase};

/// A yes/no question. Carries no fields beyond the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseQuestion {
    base: QuestionBase,
}

crate::impl_question!(TrueFalseQuestion, QuestionType::TrueFalse);

impl TrueFalseQuestion {
    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: QuestionBase::new(survey_id, text)?,
        })
    }

    pub(crate) fn reconstitute(base: QuestionBase) -> Self {
        Self { base }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()
    }
}

/// Answer to a true/false question.
///
/// `None` means unanswered, which is distinct from `Some(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseAnswer {
    base: AnswerBase,
    value: Option<bool>,
}

crate::impl_answer!(TrueFalseAnswer, QuestionType::TrueFalse);

impl TrueFalseAnswer {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            base: AnswerBase::new(question_id),
            value: None,
        }
    }

    pub(crate) fn reconstitute(base: AnswerBase, value: Option<bool>) -> Self {
        Self { base, value }
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<bool>) {
        self.value = value;
    }

    pub fn is_answered(&self) -> bool {
        self.value.is_some()
    }
}

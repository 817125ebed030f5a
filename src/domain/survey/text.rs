//! Free-text question and answer.

use std::num::NonZeroU32;

use crate::domain::foundation::{QuestionId, QuestionType, SurveyId, ValidationError};

use super::{AnswerBase, QuestionBase};

/// A question answered with free text up to `max_length` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuestion {
    base: QuestionBase,
    max_length: NonZeroU32,
}

crate::impl_question!(TextQuestion, QuestionType::Text);

impl TextQuestion {
    /// Length limit applied when none is given.
    pub const DEFAULT_MAX_LENGTH: NonZeroU32 = match NonZeroU32::new(1000) {
        Some(v) => v,
        None => panic!("default max length must be positive"),
    };

    /// Creates a text question with the default length limit.
    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: QuestionBase::new(survey_id, text)?,
            max_length: Self::DEFAULT_MAX_LENGTH,
        })
    }

    /// Creates a text question with an explicit length limit.
    pub fn with_max_length(
        survey_id: SurveyId,
        text: impl Into<String>,
        max_length: u32,
    ) -> Result<Self, ValidationError> {
        let mut question = Self::new(survey_id, text)?;
        question.set_max_length(max_length)?;
        Ok(question)
    }

    pub(crate) fn reconstitute(base: QuestionBase, max_length: NonZeroU32) -> Self {
        Self { base, max_length }
    }

    pub fn max_length(&self) -> NonZeroU32 {
        self.max_length
    }

    /// Sets the length limit, which must be positive.
    pub fn set_max_length(&mut self, max_length: u32) -> Result<(), ValidationError> {
        self.max_length = NonZeroU32::new(max_length).ok_or_else(|| {
            ValidationError::out_of_range("maxLength", 1, u32::MAX as i64, max_length as i64)
        })?;
        self.base.touch();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()
    }
}

/// Free-text answer; `None` until submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnswer {
    base: AnswerBase,
    text: Option<String>,
}

crate::impl_answer!(TextAnswer, QuestionType::Text);

impl TextAnswer {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            base: AnswerBase::new(question_id),
            text: None,
        }
    }

    pub(crate) fn reconstitute(base: AnswerBase, text: Option<String>) -> Self {
        Self { base, text }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Whitespace-only text counts as unanswered.
    pub fn is_answered(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

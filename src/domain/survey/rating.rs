//! Rating question on a fixed 1-10 scale.

use std::ops::RangeInclusive;

use crate::domain::foundation::{OptionId, QuestionId, QuestionType, SurveyId, ValidationError};

use super::{AnswerBase, QuestionBase};

/// A rating question. The scale is fixed, so no extra fields are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating1To10Question {
    base: QuestionBase,
}

crate::impl_question!(Rating1To10Question, QuestionType::Rating1To10);

impl Rating1To10Question {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: QuestionBase::new(survey_id, text)?,
        })
    }

    pub(crate) fn reconstitute(base: QuestionBase) -> Self {
        Self { base }
    }

    /// The points of the scale, which act as this question's options.
    pub fn scale() -> RangeInclusive<i64> {
        Self::MIN..=Self::MAX
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()
    }
}

/// Answer to a rating question.
///
/// `selected_option_id` holds the chosen scale point, or `None` when unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating1To10Answer {
    base: AnswerBase,
    selected_option_id: Option<OptionId>,
}

crate::impl_answer!(Rating1To10Answer, QuestionType::Rating1To10);

impl Rating1To10Answer {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            base: AnswerBase::new(question_id),
            selected_option_id: None,
        }
    }

    pub(crate) fn reconstitute(base: AnswerBase, selected_option_id: Option<OptionId>) -> Self {
        Self {
            base,
            selected_option_id,
        }
    }

    pub fn selected_option_id(&self) -> Option<OptionId> {
        self.selected_option_id
    }

    /// Selects a scale point, rejecting values outside 1-10.
    pub fn rate(&mut self, rating: i64) -> Result<(), ValidationError> {
        if !Rating1To10Question::scale().contains(&rating) {
            return Err(ValidationError::out_of_range(
                "rating",
                Rating1To10Question::MIN,
                Rating1To10Question::MAX,
                rating,
            ));
        }
        self.selected_option_id = Some(OptionId::new(rating));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected_option_id = None;
    }

    /// Returns the chosen rating.
    pub fn rating(&self) -> Option<i64> {
        self.selected_option_id.map(|id| id.value())
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option_id.is_some()
    }
}

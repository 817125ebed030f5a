//! Answer - sum type over all answer shapes.

use crate::delegate_to_variant;
use crate::domain::foundation::{AnswerId, QuestionId, QuestionType, ValidationError};

use super::{
    AnswerBase, MultipleChoiceAnswer, Rating1To10Answer, SelectAllThatApplyAnswer, TextAnswer,
    TrueFalseAnswer,
};

/// Sum type for all answer shapes.
///
/// Each variant pairs with the `Question` variant of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(TextAnswer),
    TrueFalse(TrueFalseAnswer),
    MultipleChoice(MultipleChoiceAnswer),
    Rating1To10(Rating1To10Answer),
    SelectAllThatApply(SelectAllThatApplyAnswer),
}

impl Answer {
    /// Creates an unanswered answer of the given type for a question.
    pub fn new(question_type: QuestionType, question_id: QuestionId) -> Self {
        match question_type {
            QuestionType::Text => TextAnswer::new(question_id).into(),
            QuestionType::TrueFalse => TrueFalseAnswer::new(question_id).into(),
            QuestionType::MultipleChoice => MultipleChoiceAnswer::new(question_id).into(),
            QuestionType::Rating1To10 => Rating1To10Answer::new(question_id).into(),
            QuestionType::SelectAllThatApply => SelectAllThatApplyAnswer::new(question_id).into(),
        }
    }

    /// Returns the tag of the runtime variant.
    pub fn question_type(&self) -> QuestionType {
        delegate_to_variant!(Answer, self, question_type)
    }

    pub fn base(&self) -> &AnswerBase {
        delegate_to_variant!(Answer, self, base)
    }

    pub fn id(&self) -> AnswerId {
        self.base().id()
    }

    pub fn question_id(&self) -> QuestionId {
        self.base().question_id()
    }

    pub fn assign_id(&mut self, id: AnswerId) -> Result<(), ValidationError> {
        delegate_to_variant!(Answer, self, assign_id, id)
    }

    /// Returns true once a value has been given.
    pub fn is_answered(&self) -> bool {
        delegate_to_variant!(Answer, self, is_answered)
    }

    pub fn as_text(&self) -> Option<&TextAnswer> {
        match self {
            Answer::Text(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_true_false(&self) -> Option<&TrueFalseAnswer> {
        match self {
            Answer::TrueFalse(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_multiple_choice(&self) -> Option<&MultipleChoiceAnswer> {
        match self {
            Answer::MultipleChoice(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<&Rating1To10Answer> {
        match self {
            Answer::Rating1To10(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_select_all(&self) -> Option<&SelectAllThatApplyAnswer> {
        match self {
            Answer::SelectAllThatApply(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_select_all_mut(&mut self) -> Option<&mut SelectAllThatApplyAnswer> {
        match self {
            Answer::SelectAllThatApply(a) => Some(a),
            _ => None,
        }
    }
}

impl From<TextAnswer> for Answer {
    fn from(a: TextAnswer) -> Self {
        Answer::Text(a)
    }
}

impl From<TrueFalseAnswer> for Answer {
    fn from(a: TrueFalseAnswer) -> Self {
        Answer::TrueFalse(a)
    }
}

impl From<MultipleChoiceAnswer> for Answer {
    fn from(a: MultipleChoiceAnswer) -> Self {
        Answer::MultipleChoice(a)
    }
}

impl From<Rating1To10Answer> for Answer {
    fn from(a: Rating1To10Answer) -> Self {
        Answer::Rating1To10(a)
    }
}

impl From<SelectAllThatApplyAnswer> for Answer {
    fn from(a: SelectAllThatApplyAnswer) -> Self {
        Answer::SelectAllThatApply(a)
    }
}

//! Question - sum type over all question shapes.

use crate::delegate_to_variant;
use crate::domain::foundation::{
    AnswerId, QuestionId, QuestionType, SurveyId, Timestamp, ValidationError,
};

use super::{
    Answer, ChoiceOptions, MultipleChoiceAnswer, MultipleChoiceQuestion, QuestionBase,
    Rating1To10Answer, Rating1To10Question, SelectAllThatApplyAnswer, SelectAllThatApplyQuestion,
    TextAnswer, TextQuestion, TrueFalseAnswer, TrueFalseQuestion,
};

/// Sum type for all question shapes, one variant per [`QuestionType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Text(TextQuestion),
    TrueFalse(TrueFalseQuestion),
    MultipleChoice(MultipleChoiceQuestion),
    Rating1To10(Rating1To10Question),
    SelectAllThatApply(SelectAllThatApplyQuestion),
}

impl Question {
    /// Creates a question of the given type with default variant fields.
    pub fn new(
        question_type: QuestionType,
        survey_id: SurveyId,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(match question_type {
            QuestionType::Text => TextQuestion::new(survey_id, text)?.into(),
            QuestionType::TrueFalse => TrueFalseQuestion::new(survey_id, text)?.into(),
            QuestionType::MultipleChoice => MultipleChoiceQuestion::new(survey_id, text)?.into(),
            QuestionType::Rating1To10 => Rating1To10Question::new(survey_id, text)?.into(),
            QuestionType::SelectAllThatApply => {
                SelectAllThatApplyQuestion::new(survey_id, text)?.into()
            }
        })
    }

    /// Returns the tag of the runtime variant.
    pub fn question_type(&self) -> QuestionType {
        delegate_to_variant!(Question, self, question_type)
    }

    pub fn base(&self) -> &QuestionBase {
        delegate_to_variant!(Question, self, base)
    }

    pub(crate) fn base_mut(&mut self) -> &mut QuestionBase {
        delegate_to_variant!(Question, self, base_mut)
    }

    pub fn id(&self) -> QuestionId {
        self.base().id()
    }

    pub fn survey_id(&self) -> SurveyId {
        self.base().survey_id()
    }

    pub fn text(&self) -> &str {
        self.base().text()
    }

    pub fn question_number(&self) -> u32 {
        self.base().question_number()
    }

    pub fn created_at(&self) -> Timestamp {
        self.base().created_at()
    }

    pub fn updated_at(&self) -> Timestamp {
        self.base().updated_at()
    }

    pub fn assign_id(&mut self, id: QuestionId) -> Result<(), ValidationError> {
        self.base_mut().assign_id(id)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        self.base_mut().set_text(text)
    }

    /// The option set, for choice-bearing variants.
    pub fn options(&self) -> Option<&ChoiceOptions> {
        match self {
            Question::MultipleChoice(q) => Some(q.options()),
            Question::SelectAllThatApply(q) => Some(q.options()),
            Question::Text(_) | Question::TrueFalse(_) | Question::Rating1To10(_) => None,
        }
    }

    /// Checks the base and variant invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        delegate_to_variant!(Question, self, validate)
    }

    /// Builds the unanswered answer of the matching variant.
    pub fn blank_answer(&self) -> Answer {
        let question_id = self.id();
        match self {
            Question::Text(_) => TextAnswer::new(question_id).into(),
            Question::TrueFalse(_) => TrueFalseAnswer::new(question_id).into(),
            Question::MultipleChoice(_) => MultipleChoiceAnswer::new(question_id).into(),
            Question::Rating1To10(_) => Rating1To10Answer::new(question_id).into(),
            Question::SelectAllThatApply(q) => {
                let mut answer = SelectAllThatApplyAnswer::new(question_id);
                answer.options_for(q);
                answer.into()
            }
        }
    }

    /// Same as [`Self::blank_answer`] with a known answer id.
    pub fn blank_answer_with_id(&self, id: AnswerId) -> Result<Answer, ValidationError> {
        let mut answer = self.blank_answer();
        answer.assign_id(id)?;
        Ok(answer)
    }

    pub fn as_text(&self) -> Option<&TextQuestion> {
        match self {
            Question::Text(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_true_false(&self) -> Option<&TrueFalseQuestion> {
        match self {
            Question::TrueFalse(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_multiple_choice(&self) -> Option<&MultipleChoiceQuestion> {
        match self {
            Question::MultipleChoice(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_multiple_choice_mut(&mut self) -> Option<&mut MultipleChoiceQuestion> {
        match self {
            Question::MultipleChoice(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<&Rating1To10Question> {
        match self {
            Question::Rating1To10(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_select_all(&self) -> Option<&SelectAllThatApplyQuestion> {
        match self {
            Question::SelectAllThatApply(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_select_all_mut(&mut self) -> Option<&mut SelectAllThatApplyQuestion> {
        match self {
            Question::SelectAllThatApply(q) => Some(q),
            _ => None,
        }
    }
}

impl From<TextQuestion> for Question {
    fn from(q: TextQuestion) -> Self {
        Question::Text(q)
    }
}

impl From<TrueFalseQuestion> for Question {
    fn from(q: TrueFalseQuestion) -> Self {
        Question::TrueFalse(q)
    }
}

impl From<MultipleChoiceQuestion> for Question {
    fn from(q: MultipleChoiceQuestion) -> Self {
        Question::MultipleChoice(q)
    }
}

impl From<Rating1To10Question> for Question {
    fn from(q: Rating1To10Question) -> Self {
        Question::Rating1To10(q)
    }
}

impl From<SelectAllThatApplyQuestion> for Question {
    fn from(q: SelectAllThatApplyQuestion) -> Self {
        Question::SelectAllThatApply(q)
    }
}

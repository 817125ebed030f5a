//! Multiple-choice question (exactly one option may be selected).

use crate::domain::foundation::{OptionId, QuestionId, QuestionType, SurveyId, ValidationError};

use super::{AnswerBase, ChoiceOption, ChoiceOptions, QuestionBase};

/// A question answered by picking one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceQuestion {
    base: QuestionBase,
    options: ChoiceOptions,
}

crate::impl_question!(MultipleChoiceQuestion, QuestionType::MultipleChoice);

impl MultipleChoiceQuestion {
    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base: QuestionBase::new(survey_id, text)?,
            options: ChoiceOptions::new(),
        })
    }

    pub(crate) fn reconstitute(base: QuestionBase, options: ChoiceOptions) -> Self {
        Self { base, options }
    }

    pub fn options(&self) -> &ChoiceOptions {
        &self.options
    }

    pub fn add_option(&mut self, option: ChoiceOption) -> Result<(), ValidationError> {
        self.options.add(option)?;
        self.base.touch();
        Ok(())
    }

    pub fn remove_option(&mut self, id: OptionId) -> Option<ChoiceOption> {
        let removed = self.options.remove(id);
        if removed.is_some() {
            self.base.touch();
        }
        removed
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()?;
        self.options.validate()
    }
}

/// Answer to a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceAnswer {
    base: AnswerBase,
    selected_option_id: Option<OptionId>,
}

crate::impl_answer!(MultipleChoiceAnswer, QuestionType::MultipleChoice);

impl MultipleChoiceAnswer {
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

    /// Selects an option, which must exist on the paired question.
    pub fn select(
        &mut self,
        question: &MultipleChoiceQuestion,
        option_id: OptionId,
    ) -> Result<(), ValidationError> {
        if !question.options().contains(option_id) {
            return Err(ValidationError::UnknownOption(option_id.value()));
        }
        self.selected_option_id = Some(option_id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected_option_id = None;
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option_id.is_some()
    }
}

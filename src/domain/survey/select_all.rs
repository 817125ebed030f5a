//! Select-all-that-apply question (any subset of options may be selected).

use crate::domain::foundation::{OptionId, QuestionId, QuestionType, SurveyId, ValidationError};

use super::{AnswerBase, ChoiceOption, ChoiceOptions, QuestionBase};

/// A question answered by ticking any number of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllThatApplyQuestion {
    base: QuestionBase,
    options: ChoiceOptions,
}

crate::impl_question!(SelectAllThatApplyQuestion, QuestionType::SelectAllThatApply);

impl SelectAllThatApplyQuestion {
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

/// One row of a select-all answer: a mirrored option plus its tick state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub option_id: OptionId,
    pub option_text: String,
    pub order: i32,
    pub is_selected: bool,
}

impl From<&ChoiceOption> for SelectedOption {
    fn from(option: &ChoiceOption) -> Self {
        Self {
            option_id: option.id,
            option_text: option.option_text.clone(),
            order: option.order,
            is_selected: false,
        }
    }
}

/// Answer to a select-all question.
///
/// The rows mirror the question's options and are populated from the
/// question on first access when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllThatApplyAnswer {
    base: AnswerBase,
    options: Vec<SelectedOption>,
}

crate::impl_answer!(SelectAllThatApplyAnswer, QuestionType::SelectAllThatApply);

impl SelectAllThatApplyAnswer {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            base: AnswerBase::new(question_id),
            options: Vec::new(),
        }
    }

    pub(crate) fn reconstitute(base: AnswerBase, options: Vec<SelectedOption>) -> Self {
        Self { base, options }
    }

    /// Rows as currently stored, without populating.
    pub fn options(&self) -> &[SelectedOption] {
        &self.options
    }

    /// Rows for the paired question, mirroring its options when still empty.
    pub fn options_for(&mut self, question: &SelectAllThatApplyQuestion) -> &[SelectedOption] {
        if self.options.is_empty() {
            self.options = question.options().iter().map(SelectedOption::from).collect();
        }
        &self.options
    }

    /// Ticks or clears one option of the paired question.
    pub fn set_selected(
        &mut self,
        question: &SelectAllThatApplyQuestion,
        option_id: OptionId,
        selected: bool,
    ) -> Result<(), ValidationError> {
        self.options_for(question);
        let row = self
            .options
            .iter_mut()
            .find(|row| row.option_id == option_id)
            .ok_or(ValidationError::UnknownOption(option_id.value()))?;
        row.is_selected = selected;
        Ok(())
    }

    /// Ids of the ticked options, in order.
    pub fn selected_ids(&self) -> Vec<OptionId> {
        self.options
            .iter()
            .filter(|row| row.is_selected)
            .map(|row| row.option_id)
            .collect()
    }

    pub fn is_answered(&self) -> bool {
        self.options.iter().any(|row| row.is_selected)
    }
}

//! Multi-select answers.

use crate::domain::foundation::{QuestionType, ValidationError};
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

use super::wrong_variant;

/// Every answer row must name an option of the question. No selected row
/// means unanswered.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectAllThatApplyHandler;

impl QuestionHandler for SelectAllThatApplyHandler {
    fn question_type(&self) -> QuestionType {
        QuestionType::SelectAllThatApply
    }

    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError> {
        let (Question::SelectAllThatApply(question), Answer::SelectAllThatApply(answer)) =
            (question, answer)
        else {
            return Err(wrong_variant(QuestionType::SelectAllThatApply, question, answer));
        };

        if let Some(row) = answer
            .options()
            .iter()
            .find(|row| !question.options().contains(row.option_id))
        {
            return Err(ValidationError::UnknownOption(row.option_id.value()).into());
        }

        let selected = answer.selected_ids();
        if selected.is_empty() {
            return Ok(AnswerValue::Unanswered);
        }
        Ok(AnswerValue::Choices(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OptionId, QuestionId, SurveyId};
    use crate::domain::survey::{
        AnswerBase, ChoiceOption, SelectAllThatApplyAnswer, SelectAllThatApplyQuestion,
        SelectedOption,
    };

    fn question() -> SelectAllThatApplyQuestion {
        let mut question = SelectAllThatApplyQuestion::new(SurveyId::new(1), "Pick any").unwrap();
        for (id, text) in [(1, "Tea"), (2, "Coffee"), (3, "Juice")] {
            question
                .add_option(ChoiceOption::new(OptionId::new(id), text, id as i32).unwrap())
                .unwrap();
        }
        question
    }

    #[test]
    fn normalizes_selected_ids_in_option_order() {
        let question = question();
        let mut answer = SelectAllThatApplyAnswer::new(QuestionId::UNASSIGNED);
        answer.set_selected(&question, OptionId::new(3), true).unwrap();
        answer.set_selected(&question, OptionId::new(1), true).unwrap();

        let value = SelectAllThatApplyHandler
            .normalize(&question.into(), &answer.into())
            .unwrap();
        assert_eq!(
            value,
            AnswerValue::Choices(vec![OptionId::new(1), OptionId::new(3)])
        );
    }

    #[test]
    fn nothing_selected_is_unanswered() {
        let question: Question = question().into();
        let answer = question.blank_answer();
        assert_eq!(
            SelectAllThatApplyHandler.normalize(&question, &answer).unwrap(),
            AnswerValue::Unanswered
        );
    }

    #[test]
    fn rejects_rows_for_unknown_options() {
        let base = AnswerBase::reconstitute(Default::default(), QuestionId::UNASSIGNED);
        let answer = SelectAllThatApplyAnswer::reconstitute(
            base,
            vec![SelectedOption {
                option_id: OptionId::new(42),
                option_text: "Soda".to_string(),
                order: 4,
                is_selected: false,
            }],
        );

        let err = SelectAllThatApplyHandler
            .normalize(&question().into(), &answer.into())
            .unwrap_err();
        assert_eq!(err, AnswerError::Invalid(ValidationError::UnknownOption(42)));
    }
}

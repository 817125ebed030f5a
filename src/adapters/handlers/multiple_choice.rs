//! Single-choice answers.

use crate::domain::foundation::{QuestionType, ValidationError};
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

use super::wrong_variant;

/// The selected option must be one of the question's options.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultipleChoiceHandler;

impl QuestionHandler for MultipleChoiceHandler {
    fn question_type(&self) -> QuestionType {
        QuestionType::MultipleChoice
    }

    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError> {
        let (Question::MultipleChoice(question), Answer::MultipleChoice(answer)) = (question, answer)
        else {
            return Err(wrong_variant(QuestionType::MultipleChoice, question, answer));
        };

        match answer.selected_option_id() {
            None => Ok(AnswerValue::Unanswered),
            Some(id) if question.options().contains(id) => Ok(AnswerValue::Choice(id)),
            Some(id) => Err(ValidationError::UnknownOption(id.value()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OptionId, QuestionId, SurveyId};
    use crate::domain::survey::{
        AnswerBase, ChoiceOption, MultipleChoiceAnswer, MultipleChoiceQuestion,
    };

    fn question() -> MultipleChoiceQuestion {
        let mut question = MultipleChoiceQuestion::new(SurveyId::new(1), "Pick one").unwrap();
        question
            .add_option(ChoiceOption::new(OptionId::new(1), "Red", 1).unwrap())
            .unwrap();
        question
            .add_option(ChoiceOption::new(OptionId::new(2), "Blue", 2).unwrap())
            .unwrap();
        question
    }

    #[test]
    fn normalizes_selected_option() {
        let question = question();
        let mut answer = MultipleChoiceAnswer::new(QuestionId::UNASSIGNED);
        answer.select(&question, OptionId::new(2)).unwrap();

        let value = MultipleChoiceHandler
            .normalize(&question.into(), &answer.into())
            .unwrap();
        assert_eq!(value, AnswerValue::Choice(OptionId::new(2)));
    }

    #[test]
    fn rejects_option_outside_question() {
        let base = AnswerBase::reconstitute(Default::default(), QuestionId::UNASSIGNED);
        let answer = MultipleChoiceAnswer::reconstitute(base, Some(OptionId::new(9)));

        let err = MultipleChoiceHandler
            .normalize(&question().into(), &answer.into())
            .unwrap_err();
        assert_eq!(err, AnswerError::Invalid(ValidationError::UnknownOption(9)));
    }

    #[test]
    fn choice_is_unscored() {
        let question = question();
        let mut answer = MultipleChoiceAnswer::new(QuestionId::UNASSIGNED);
        answer.select(&question, OptionId::new(1)).unwrap();

        let score = MultipleChoiceHandler
            .score(&question.into(), &answer.into())
            .unwrap();
        assert_eq!(score, None);
    }
}

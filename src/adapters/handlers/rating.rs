//! Rating answers on the fixed 1..=10 scale.

use crate::domain::foundation::{QuestionType, ValidationError};
use crate::domain::survey::{Answer, Question, Rating1To10Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

use super::wrong_variant;

#[derive(Debug, Default, Clone, Copy)]
pub struct RatingHandler;

impl QuestionHandler for RatingHandler {
    fn question_type(&self) -> QuestionType {
        QuestionType::Rating1To10
    }

    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError> {
        let (Question::Rating1To10(_), Answer::Rating1To10(answer)) = (question, answer) else {
            return Err(wrong_variant(QuestionType::Rating1To10, question, answer));
        };

        match answer.rating() {
            None => Ok(AnswerValue::Unanswered),
            Some(point) if Rating1To10Question::scale().contains(&point) => {
                Ok(AnswerValue::Rating(point))
            }
            Some(point) => Err(ValidationError::out_of_range(
                "selectedOptionId",
                Rating1To10Question::MIN,
                Rating1To10Question::MAX,
                point,
            )
            .into()),
        }
    }
}

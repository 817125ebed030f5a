//! Yes/no answers.

use crate::domain::foundation::QuestionType;
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

use super::wrong_variant;

#[derive(Debug, Default, Clone, Copy)]
pub struct TrueFalseHandler;

impl QuestionHandler for TrueFalseHandler {
    fn question_type(&self) -> QuestionType {
        QuestionType::TrueFalse
    }

    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError> {
        let (Question::TrueFalse(_), Answer::TrueFalse(answer)) = (question, answer) else {
            return Err(wrong_variant(QuestionType::TrueFalse, question, answer));
        };
        Ok(answer
            .value()
            .map(AnswerValue::Boolean)
            .unwrap_or(AnswerValue::Unanswered))
    }
}

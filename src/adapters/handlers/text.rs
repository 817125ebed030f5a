//! Free-text answers.

use crate::domain::foundation::{QuestionType, ValidationError};
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

use super::wrong_variant;

/// Trims the response; blank text counts as unanswered. The trimmed text
/// must fit the question's `max_length`, counted in characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextHandler;

impl QuestionHandler for TextHandler {
    fn question_type(&self) -> QuestionType {
        QuestionType::Text
    }

    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError> {
        let (Question::Text(question), Answer::Text(answer)) = (question, answer) else {
            return Err(wrong_variant(QuestionType::Text, question, answer));
        };

        let Some(text) = answer.text().map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(AnswerValue::Unanswered);
        };

        let length = text.chars().count() as i64;
        let max = i64::from(question.max_length().get());
        if length > max {
            return Err(ValidationError::out_of_range("text", 0, max, length).into());
        }
        Ok(AnswerValue::Text(text.to_string()))
    }
}

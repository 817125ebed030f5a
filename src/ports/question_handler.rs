//! Question Handler Port - per-type answer behaviour.
//!
//! Each `QuestionType` owns exactly one handler that knows how to validate,
//! normalize and score an answer against its question. Handlers are looked
//! up through the `HandlerRegistry`, never by matching on tags at call sites.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{OptionId, QuestionId, QuestionType, RegistryError, ValidationError};
use crate::domain::survey::{Answer, Question};

/// Port for the behaviour bound to one question type.
///
/// # Contract
///
/// Implementations must:
/// - Report the single tag they own from `question_type`
/// - Reject question/answer variants of any other tag with `WrongHandler`
/// - Return `Invalid` for answers that break the question's constraints
///
/// `validate` and `score` default to readings of `normalize`; `score_value`
/// scores a value that has already been normalized.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = registry.get_handler(question.question_type())?;
/// let value = handler.normalize(&question, &answer)?;
/// ```
pub trait QuestionHandler: Send + Sync {
    /// The tag this handler owns.
    fn question_type(&self) -> QuestionType;

    /// Reduces an answer to its canonical value.
    fn normalize(&self, question: &Question, answer: &Answer) -> Result<AnswerValue, AnswerError>;

    /// Success, or the reason the answer is invalid.
    fn validate(&self, question: &Question, answer: &Answer) -> Result<(), AnswerError> {
        self.normalize(question, answer).map(|_| ())
    }

    /// Numeric score where the answer has one.
    fn score(&self, question: &Question, answer: &Answer) -> Result<Option<f64>, AnswerError> {
        let value = self.normalize(question, answer)?;
        Ok(self.score_value(&value))
    }

    /// Scores an already normalized value.
    ///
    /// Booleans score 1 or 0 and ratings score their point; text and choices
    /// are unscored.
    fn score_value(&self, value: &AnswerValue) -> Option<f64> {
        match value {
            AnswerValue::Boolean(value) => Some(if *value { 1.0 } else { 0.0 }),
            AnswerValue::Rating(point) => Some(*point as f64),
            AnswerValue::Unanswered
            | AnswerValue::Text(_)
            | AnswerValue::Choice(_)
            | AnswerValue::Choices(_) => None,
        }
    }
}

/// Canonical value of an answer after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Unanswered,
    Text(String),
    Boolean(bool),
    Rating(i64),
    Choice(OptionId),
    Choices(Vec<OptionId>),
}

impl AnswerValue {
    pub fn is_answered(&self) -> bool {
        !matches!(self, AnswerValue::Unanswered)
    }
}

/// Errors raised while handling an answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("Answer of type {answer} cannot answer a {question} question")]
    TagMismatch {
        question: QuestionType,
        answer: QuestionType,
    },

    #[error("Answer belongs to question {answer_question}, not {question}")]
    WrongQuestion {
        question: QuestionId,
        answer_question: QuestionId,
    },

    #[error("Handler for {expected} was given a {actual} value")]
    WrongHandler {
        expected: QuestionType,
        actual: QuestionType,
    },

    #[error("Invalid answer: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Unsupported(#[from] RegistryError),
}

impl AnswerError {
    pub fn wrong_handler(expected: QuestionType, actual: QuestionType) -> Self {
        AnswerError::WrongHandler { expected, actual }
    }

    /// True when the answer itself is at fault rather than the wiring.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AnswerError::TagMismatch { .. }
                | AnswerError::WrongQuestion { .. }
                | AnswerError::Invalid(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SurveyId;

    struct EchoHandler(AnswerValue);

    impl QuestionHandler for EchoHandler {
        fn question_type(&self) -> QuestionType {
            QuestionType::TrueFalse
        }

        fn normalize(&self, _: &Question, _: &Answer) -> Result<AnswerValue, AnswerError> {
            Ok(self.0.clone())
        }
    }

    fn pair() -> (Question, Answer) {
        let question = Question::new(QuestionType::TrueFalse, SurveyId::new(1), "Yes?").unwrap();
        let answer = question.blank_answer();
        (question, answer)
    }

    #[test]
    fn default_score_reads_booleans_and_ratings() {
        let (question, answer) = pair();

        let yes = EchoHandler(AnswerValue::Boolean(true));
        assert_eq!(yes.score(&question, &answer).unwrap(), Some(1.0));

        let seven = EchoHandler(AnswerValue::Rating(7));
        assert_eq!(seven.score(&question, &answer).unwrap(), Some(7.0));

        let text = EchoHandler(AnswerValue::Text("hi".to_string()));
        assert_eq!(text.score(&question, &answer).unwrap(), None);
    }

    #[test]
    fn default_validate_follows_normalize() {
        let (question, answer) = pair();
        let handler = EchoHandler(AnswerValue::Unanswered);
        assert!(handler.validate(&question, &answer).is_ok());
    }

    #[test]
    fn answer_value_serializes_with_kind() {
        let value = serde_json::to_value(AnswerValue::Choices(vec![OptionId::new(1), OptionId::new(3)])).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "choices", "value": [1, 3] }));

        let blank = serde_json::to_value(AnswerValue::Unanswered).unwrap();
        assert_eq!(blank, serde_json::json!({ "kind": "unanswered" }));
    }

    #[test]
    fn rejection_classification() {
        assert!(AnswerError::Invalid(ValidationError::UnknownOption(4)).is_rejection());
        assert!(AnswerError::TagMismatch {
            question: QuestionType::Text,
            answer: QuestionType::Rating1To10,
        }
        .is_rejection());
        assert!(!AnswerError::wrong_handler(QuestionType::Text, QuestionType::TrueFalse).is_rejection());
    }

    #[test]
    fn tag_mismatch_displays_both_tags() {
        let err = AnswerError::TagMismatch {
            question: QuestionType::Text,
            answer: QuestionType::Rating1To10,
        };
        assert_eq!(
            format!("{}", err),
            "Answer of type Rating (1-10) cannot answer a Text question"
        );
    }
}

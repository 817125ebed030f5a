//! Question handlers - one `QuestionHandler` implementation per question type.

mod multiple_choice;
mod rating;
mod select_all;
mod text;
mod true_false;

pub use multiple_choice::MultipleChoiceHandler;
pub use rating::RatingHandler;
pub use select_all::SelectAllThatApplyHandler;
pub use text::TextHandler;
pub use true_false::TrueFalseHandler;

use std::sync::Arc;

use crate::domain::foundation::QuestionType;
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, QuestionHandler};

/// The full handler set, one per [`QuestionType`].
pub fn standard_handlers() -> Vec<Arc<dyn QuestionHandler>> {
    vec![
        Arc::new(TextHandler),
        Arc::new(TrueFalseHandler),
        Arc::new(MultipleChoiceHandler),
        Arc::new(RatingHandler),
        Arc::new(SelectAllThatApplyHandler),
    ]
}

/// Error for a question/answer pair that is not the handler's own variant.
fn wrong_variant(expected: QuestionType, question: &Question, answer: &Answer) -> AnswerError {
    let actual = if question.question_type() != expected {
        question.question_type()
    } else {
        answer.question_type()
    };
    AnswerError::wrong_handler(expected, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SurveyId;

    #[test]
    fn standard_handlers_cover_each_type_once() {
        let tags: Vec<_> = standard_handlers().iter().map(|h| h.question_type()).collect();
        assert_eq!(tags, QuestionType::all().to_vec());
    }

    #[test]
    fn every_handler_refuses_foreign_variants() {
        for handler in standard_handlers() {
            let other = QuestionType::all()
                .iter()
                .copied()
                .find(|t| *t != handler.question_type())
                .unwrap();
            let question = Question::new(other, SurveyId::new(1), "Q").unwrap();
            let answer = question.blank_answer();

            assert_eq!(
                handler.normalize(&question, &answer).unwrap_err(),
                AnswerError::wrong_handler(handler.question_type(), other)
            );
        }
    }
}

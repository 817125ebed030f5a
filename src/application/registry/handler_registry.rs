//! HandlerRegistry - binds each question type to its `QuestionHandler`.

use std::fmt;
use std::sync::Arc;

use crate::adapters::handlers::standard_handlers;
use crate::domain::foundation::{QuestionType, RegistryError, TagTable};
use crate::domain::survey::{Answer, Question};
use crate::ports::{AnswerError, AnswerValue, QuestionHandler};

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct HandledAnswer {
    pub value: AnswerValue,
    pub score: Option<f64>,
}

/// Immutable tag -> handler table, built once at start-up.
///
/// Lookups that must succeed (`get_handler`, `dispatch`) fail with
/// `NotSupported`; `has_handler` only ever answers yes or no.
#[derive(Clone)]
pub struct HandlerRegistry {
    table: TagTable<Arc<dyn QuestionHandler>>,
}

impl HandlerRegistry {
    /// Indexes the handlers by the tag each declares.
    ///
    /// Two handlers claiming one tag fail with `DuplicateRegistration`.
    pub fn new(handlers: Vec<Arc<dyn QuestionHandler>>) -> Result<Self, RegistryError> {
        let table = TagTable::build("handler", handlers, |h| h.question_type())?;
        Ok(Self { table })
    }

    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(standard_handlers())
    }

    pub fn get_handler(&self, tag: impl Into<i64>) -> Result<&dyn QuestionHandler, RegistryError> {
        self.table.require(tag.into()).map(|h| h.as_ref())
    }

    pub fn has_handler(&self, tag: impl Into<i64>) -> bool {
        self.table.contains(tag.into())
    }

    /// One handler per registered tag, in tag order.
    pub fn get_all_handlers(&self) -> Vec<&dyn QuestionHandler> {
        self.table.values().map(|h| h.as_ref()).collect()
    }

    pub fn question_types(&self) -> Vec<QuestionType> {
        self.table.tags().collect()
    }

    /// Normalizes and scores an answer with the handler for its question.
    ///
    /// The pair must share a tag and the answer must point at the question.
    pub fn dispatch(&self, question: &Question, answer: &Answer) -> Result<HandledAnswer, AnswerError> {
        if question.question_type() != answer.question_type() {
            return Err(AnswerError::TagMismatch {
                question: question.question_type(),
                answer: answer.question_type(),
            });
        }
        if answer.question_id() != question.id() {
            return Err(AnswerError::WrongQuestion {
                question: question.id(),
                answer_question: answer.question_id(),
            });
        }

        let handler = self.get_handler(question.question_type())?;
        let value = handler.normalize(question, answer)?;
        let score = handler.score_value(&value);

        tracing::debug!(
            question_id = %question.id(),
            question_type = question.question_type().name(),
            answered = value.is_answered(),
            "Dispatched answer"
        );

        Ok(HandledAnswer { value, score })
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("question_types", &self.question_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::handlers::{RatingHandler, TextHandler};
    use crate::domain::foundation::{QuestionId, SurveyId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> HandlerRegistry {
        HandlerRegistry::standard().unwrap()
    }

    fn question(question_type: QuestionType, id: i64) -> Question {
        let mut question = Question::new(question_type, SurveyId::new(1), "Q").unwrap();
        question.assign_id(QuestionId::new(id)).unwrap();
        question
    }

    #[test]
    fn get_handler_matches_tag() {
        let registry = registry();
        for qt in QuestionType::all() {
            assert_eq!(registry.get_handler(*qt).unwrap().question_type(), *qt);
        }
    }

    #[test]
    fn unknown_tags_are_not_supported() {
        let registry = registry();
        for raw in [0, 6, 999] {
            assert!(!registry.has_handler(raw));
            let err = registry.get_handler(raw).err().unwrap();
            assert_eq!(
                err,
                RegistryError::NotSupported {
                    registry: "handler",
                    raw: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn duplicate_handlers_fail_at_construction() {
        let result = HandlerRegistry::new(vec![Arc::new(TextHandler), Arc::new(TextHandler)]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateRegistration {
                question_type: QuestionType::Text,
                ..
            })
        ));
    }

    #[test]
    fn get_all_handlers_returns_one_per_tag() {
        let registry = registry();
        let tags: Vec<_> = registry
            .get_all_handlers()
            .iter()
            .map(|h| h.question_type())
            .collect();
        assert_eq!(tags, QuestionType::all().to_vec());
    }

    #[test]
    fn partial_registry_reports_missing_tag() {
        let registry = HandlerRegistry::new(vec![Arc::new(RatingHandler)]).unwrap();
        assert!(registry.has_handler(QuestionType::Rating1To10));
        assert!(!registry.has_handler(QuestionType::Text));

        let question = question(QuestionType::Text, 1);
        let answer = question.blank_answer();
        assert!(matches!(
            registry.dispatch(&question, &answer),
            Err(AnswerError::Unsupported(RegistryError::NotSupported { .. }))
        ));
    }

    #[test]
    fn dispatch_refuses_tag_mismatch() {
        let text = question(QuestionType::Text, 1);
        let rating_answer = question(QuestionType::Rating1To10, 1).blank_answer();

        assert_eq!(
            registry().dispatch(&text, &rating_answer).unwrap_err(),
            AnswerError::TagMismatch {
                question: QuestionType::Text,
                answer: QuestionType::Rating1To10,
            }
        );
    }

    #[test]
    fn dispatch_refuses_answer_for_other_question() {
        let first = question(QuestionType::TrueFalse, 1);
        let second = question(QuestionType::TrueFalse, 2);

        assert_eq!(
            registry().dispatch(&first, &second.blank_answer()).unwrap_err(),
            AnswerError::WrongQuestion {
                question: QuestionId::new(1),
                answer_question: QuestionId::new(2),
            }
        );
    }

    #[test]
    fn dispatch_returns_value_and_score() {
        let question = question(QuestionType::Rating1To10, 3);
        let mut answer = question.blank_answer();
        if let Answer::Rating1To10(a) = &mut answer {
            a.rate(6).unwrap();
        }

        let handled = registry().dispatch(&question, &answer).unwrap();
        assert_eq!(handled.value, AnswerValue::Rating(6));
        assert_eq!(handled.score, Some(6.0));
    }

    /// Flips between two verdicts on every call.
    struct AlternatingHandler {
        calls: Arc<AtomicUsize>,
    }

    impl QuestionHandler for AlternatingHandler {
        fn question_type(&self) -> QuestionType {
            QuestionType::TrueFalse
        }

        fn normalize(&self, _: &Question, _: &Answer) -> Result<AnswerValue, AnswerError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AnswerValue::Boolean(call % 2 == 0))
        }
    }

    #[test]
    fn dispatch_normalizes_once_and_scores_that_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = HandlerRegistry::new(vec![Arc::new(AlternatingHandler {
            calls: Arc::clone(&calls),
        })])
        .unwrap();
        let question = question(QuestionType::TrueFalse, 4);

        let handled = registry.dispatch(&question, &question.blank_answer()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handled.value, AnswerValue::Boolean(true));
        assert_eq!(handled.score, Some(1.0));
    }
}

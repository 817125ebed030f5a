//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the question-type tag and error types
//! that form the vocabulary of the survey domain.

mod errors;
mod ids;
mod question_type;
mod tag_table;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{AnswerId, OptionId, QuestionId, SurveyId};
pub use question_type::{QuestionType, UnknownQuestionType};
pub use tag_table::{RegistryError, TagTable};
pub use timestamp::Timestamp;

//! Survey module - the question/answer variant model.
//!
//! This module defines:
//! - `QuestionBase` / `AnswerBase` with the fields every variant shares
//! - One question struct and one answer struct per `QuestionType`
//! - The `Question` and `Answer` sum types for exhaustive matching
//! - The `Survey` aggregate owning an ordered set of questions

pub mod macros;

mod aggregate;
mod answer;
mod base;
mod choice_option;
mod errors;
mod multiple_choice;
mod question;
mod rating;
mod select_all;
mod text;
mod true_false;

pub use aggregate::Survey;
pub use answer::Answer;
pub use base::{AnswerBase, QuestionBase};
pub use choice_option::{ChoiceOption, ChoiceOptions};
pub use errors::SurveyError;
pub use multiple_choice::{MultipleChoiceAnswer, MultipleChoiceQuestion};
pub use question::Question;
pub use rating::{Rating1To10Answer, Rating1To10Question};
pub use select_all::{SelectAllThatApplyAnswer, SelectAllThatApplyQuestion, SelectedOption};
pub use text::{TextAnswer, TextQuestion};
pub use true_false::{TrueFalseAnswer, TrueFalseQuestion};

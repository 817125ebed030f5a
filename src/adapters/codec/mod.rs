//! Codec adapter - tagged JSON wire format for questions, answers and surveys.
//!
//! - `TypeRegistry` resolves a `questionType` tag to its variant constructors
//! - `SurveyCodec` encodes and decodes through that registry
//! - `Payload` gives case-insensitive, typed access to one JSON object

mod error;
mod payload;
mod survey_codec;
mod type_registry;

pub mod wire;

pub use error::CodecError;
pub use payload::Payload;
pub use survey_codec::SurveyCodec;
pub use type_registry::{AnswerConstructor, QuestionConstructor, TypeRegistry, VariantConstructor};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `codec` - Tagged JSON wire format and the type registry behind it
//! - `handlers` - One `QuestionHandler` per question type

pub mod codec;
pub mod handlers;

pub use codec::{CodecError, SurveyCodec, TypeRegistry, VariantConstructor};
pub use handlers::standard_handlers;

//! Application layer - Registries, command handlers and runtime wiring.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod registry;
pub mod runtime;

pub use handlers::{
    AnswerOutcome, OutcomeStatus, ProcessSubmissionCommand, ProcessSubmissionHandler,
    SubmissionError, SubmissionReport,
};
pub use registry::{
    ComponentName, HandledAnswer, HandlerRegistry, RenderProps, RendererEntry, RendererRegistry,
};
pub use runtime::{RuntimeError, SurveyRuntime};

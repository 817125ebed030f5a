//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Answer Ports
//!
//! - `QuestionHandler` - Per-type validation, normalization and scoring

mod question_handler;

pub use question_handler::{AnswerError, AnswerValue, QuestionHandler};

//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod survey;

pub use survey::{
    AnswerOutcome, OutcomeStatus, ProcessSubmissionCommand, ProcessSubmissionHandler,
    SubmissionError, SubmissionReport,
};

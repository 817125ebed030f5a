//! Survey command handlers.

mod process_submission;

pub use process_submission::{
    AnswerOutcome, OutcomeStatus, ProcessSubmissionCommand, ProcessSubmissionHandler,
    SubmissionError, SubmissionReport,
};

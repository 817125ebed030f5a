//! ProcessSubmissionHandler - Command handler for answer submissions.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::adapters::codec::{CodecError, SurveyCodec};
use crate::application::registry::HandlerRegistry;
use crate::domain::foundation::{QuestionId, QuestionType, SurveyId};
use crate::domain::survey::{Survey, SurveyError};
use crate::ports::{AnswerError, AnswerValue};

/// Command to process one respondent's answers to a survey.
#[derive(Debug, Clone)]
pub struct ProcessSubmissionCommand {
    /// JSON array of tagged answers.
    pub answers: Value,
}

/// Per-answer verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Accepted {
        value: AnswerValue,
        score: Option<f64>,
    },
    Rejected {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub question_id: QuestionId,
    pub question_number: u32,
    pub question_type: QuestionType,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl AnswerOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, OutcomeStatus::Accepted { .. })
    }

    fn counts_as_answered(&self) -> bool {
        matches!(&self.status, OutcomeStatus::Accepted { value, .. } if value.is_answered())
    }
}

/// Result of processing a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub survey_id: SurveyId,
    /// Outcomes in question order.
    pub outcomes: Vec<AnswerOutcome>,
    /// Questions with no accepted, non-blank answer.
    pub unanswered: usize,
    /// Sum of the scores of accepted answers, when any are scored.
    pub total_score: Option<f64>,
}

impl SubmissionReport {
    pub fn rejected(&self) -> impl Iterator<Item = &AnswerOutcome> {
        self.outcomes.iter().filter(|o| !o.is_accepted())
    }

    pub fn is_complete(&self) -> bool {
        self.unanswered == 0 && self.rejected().next().is_none()
    }
}

/// Errors that abort a whole submission.
///
/// Individual invalid answers do not raise; they are reported as
/// `OutcomeStatus::Rejected`.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Could not decode submission: {0}")]
    Codec(#[from] CodecError),

    #[error("Survey is invalid: {0}")]
    Survey(#[from] SurveyError),

    #[error("Answer refers to unknown question {0}")]
    UnknownQuestion(QuestionId),

    #[error("Answer does not name a question")]
    MissingQuestionId,

    #[error("Question {0} was answered more than once")]
    DuplicateAnswer(QuestionId),

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Handler for processing answer submissions.
pub struct ProcessSubmissionHandler {
    codec: Arc<SurveyCodec>,
    handlers: Arc<HandlerRegistry>,
}

impl ProcessSubmissionHandler {
    pub fn new(codec: Arc<SurveyCodec>, handlers: Arc<HandlerRegistry>) -> Self {
        Self { codec, handlers }
    }

    pub fn handle(
        &self,
        survey: &Survey,
        cmd: ProcessSubmissionCommand,
    ) -> Result<SubmissionReport, SubmissionError> {
        // 1. The survey itself must hold together
        survey.validate()?;

        // 2. Decode the answers
        let answers = self.codec.decode_answers(&cmd.answers).map_err(|e| {
            tracing::warn!(survey_id = %survey.id(), error = %e, "Submission could not be decoded");
            e
        })?;

        // 3. Pair each answer with its question and dispatch
        let mut seen = HashSet::new();
        let mut outcomes = Vec::with_capacity(answers.len());
        for answer in &answers {
            let question_id = answer.question_id();
            if !question_id.is_assigned() {
                return Err(SubmissionError::MissingQuestionId);
            }
            let question = survey
                .question(question_id)
                .ok_or(SubmissionError::UnknownQuestion(question_id))?;
            if !seen.insert(question_id) {
                return Err(SubmissionError::DuplicateAnswer(question_id));
            }

            let status = match self.handlers.dispatch(question, answer) {
                Ok(handled) => OutcomeStatus::Accepted {
                    value: handled.value,
                    score: handled.score,
                },
                Err(e) if e.is_rejection() => {
                    tracing::warn!(
                        survey_id = %survey.id(),
                        question_id = %question_id,
                        reason = %e,
                        "Answer rejected"
                    );
                    OutcomeStatus::Rejected {
                        reason: e.to_string(),
                    }
                }
                Err(e) => return Err(e.into()),
            };

            outcomes.push(AnswerOutcome {
                question_id,
                question_number: question.question_number(),
                question_type: question.question_type(),
                status,
            });
        }
        outcomes.sort_by_key(|o| o.question_number);

        // 4. Summarise
        let answered = outcomes.iter().filter(|o| o.counts_as_answered()).count();
        let scores: Vec<f64> = outcomes
            .iter()
            .filter_map(|o| match o.status {
                OutcomeStatus::Accepted { score, .. } => score,
                OutcomeStatus::Rejected { .. } => None,
            })
            .collect();
        let total_score = (!scores.is_empty()).then(|| scores.iter().sum());

        tracing::debug!(
            survey_id = %survey.id(),
            answers = outcomes.len(),
            answered,
            "Processed submission"
        );

        Ok(SubmissionReport {
            survey_id: survey.id(),
            outcomes,
            unanswered: survey.len() - answered,
            total_score,
        })
    }
}

//! SurveyRuntime - start-up wiring of the codec and registries.
//!
//! Built once, then shared. Construction refuses registries that disagree
//! on the set of question types: a tag that can be decoded must also be
//! handled and rendered.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::adapters::codec::{CodecError, SurveyCodec, TypeRegistry};
use crate::config::AppConfig;
use crate::domain::foundation::{QuestionType, RegistryError};
use crate::domain::survey::Survey;

use super::handlers::{
    ProcessSubmissionCommand, ProcessSubmissionHandler, SubmissionError, SubmissionReport,
};
use super::registry::{HandlerRegistry, RendererRegistry};

/// Errors raised while assembling the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Registry misconfigured: {0}")]
    Registry(#[from] RegistryError),

    #[error("Codec misconfigured: {0}")]
    Codec(#[from] CodecError),
}

/// The codec plus both registries, checked against each other.
#[derive(Debug, Clone)]
pub struct SurveyRuntime {
    codec: Arc<SurveyCodec>,
    handlers: Arc<HandlerRegistry>,
    renderers: Arc<RendererRegistry>,
}

impl SurveyRuntime {
    /// Wires the given parts, failing with `NotSupported` (or
    /// `UnsupportedQuestionType` for the codec) on the first tag one of them
    /// is missing.
    pub fn new(
        codec: SurveyCodec,
        handlers: HandlerRegistry,
        renderers: RendererRegistry,
    ) -> Result<Self, RuntimeError> {
        let tags: BTreeSet<QuestionType> = codec
            .registry()
            .supported_types()
            .into_iter()
            .chain(handlers.question_types())
            .chain(renderers.question_types())
            .collect();

        for tag in &tags {
            codec.registry().resolve_type(*tag)?;
            handlers.get_handler(*tag)?;
            renderers.get_renderer_component(*tag)?;
        }

        tracing::debug!(question_types = tags.len(), "Survey runtime ready");

        Ok(Self {
            codec: Arc::new(codec),
            handlers: Arc::new(handlers),
            renderers: Arc::new(renderers),
        })
    }

    /// Standard tables with default codec settings.
    pub fn standard() -> Result<Self, RuntimeError> {
        Self::from_config(&AppConfig::default())
    }

    /// Standard tables with the configured codec settings.
    pub fn from_config(config: &AppConfig) -> Result<Self, RuntimeError> {
        let codec = SurveyCodec::new(TypeRegistry::standard()?, &config.codec);
        Self::new(codec, HandlerRegistry::standard()?, RendererRegistry::standard()?)
    }

    pub fn codec(&self) -> &SurveyCodec {
        &self.codec
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    pub fn submission_handler(&self) -> ProcessSubmissionHandler {
        ProcessSubmissionHandler::new(Arc::clone(&self.codec), Arc::clone(&self.handlers))
    }

    /// Decodes and validates a survey document.
    pub fn load_survey(&self, value: &Value) -> Result<Survey, SubmissionError> {
        let survey = self.codec.decode_survey(value)?;
        survey.validate()?;
        Ok(survey)
    }

    pub fn process_submission(
        &self,
        survey: &Survey,
        answers: Value,
    ) -> Result<SubmissionReport, SubmissionError> {
        self.submission_handler()
            .handle(survey, ProcessSubmissionCommand { answers })
    }
}

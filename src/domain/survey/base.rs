//! Base fields shared by every question and answer variant.

use crate::domain::foundation::{AnswerId, QuestionId, SurveyId, Timestamp, ValidationError};

/// Base fields shared by all questions.
///
/// The question-type tag is deliberately absent: it is derived from the
/// variant that owns this base and can never drift from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBase {
    id: QuestionId,
    survey_id: SurveyId,
    text: String,
    question_number: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl QuestionBase {
    /// Creates a base for a new, not yet persisted question.
    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: QuestionId::UNASSIGNED,
            survey_id,
            text,
            question_number: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a base from persisted or decoded data without checks.
    pub(crate) fn reconstitute(
        id: QuestionId,
        survey_id: SurveyId,
        text: String,
        question_number: u32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            survey_id,
            text,
            question_number,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn survey_id(&self) -> SurveyId {
        self.survey_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Records the server-assigned id. Ids are immutable once assigned.
    pub fn assign_id(&mut self, id: QuestionId) -> Result<(), ValidationError> {
        if self.id.is_assigned() {
            return Err(ValidationError::IdAlreadyAssigned(self.id.value()));
        }
        self.id = id;
        self.touch();
        Ok(())
    }

    /// Replaces the question text, rejecting blank text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        self.text = text;
        self.touch();
        Ok(())
    }

    /// Survey membership is fixed at creation; only the owning survey may
    /// stamp it while the question is still unattached.
    pub(crate) fn attach_to(&mut self, survey_id: SurveyId) {
        self.survey_id = survey_id;
        self.touch();
    }

    /// Ordering is owned by the survey aggregate.
    pub(crate) fn set_question_number(&mut self, number: u32) {
        if self.question_number != number {
            self.question_number = number;
            self.touch();
        }
    }

    /// Checks the base invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(())
    }

    /// Updates the timestamp to now.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

/// Base fields shared by all answers.
///
/// The owning question is fixed at creation and has no setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerBase {
    id: AnswerId,
    question_id: QuestionId,
}

impl AnswerBase {
    /// Creates a base for a new answer to the given question.
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            id: AnswerId::UNASSIGNED,
            question_id,
        }
    }

    pub(crate) fn reconstitute(id: AnswerId, question_id: QuestionId) -> Self {
        Self { id, question_id }
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// Records the server-assigned id. Ids are immutable once assigned.
    pub fn assign_id(&mut self, id: AnswerId) -> Result<(), ValidationError> {
        if self.id.is_assigned() {
            return Err(ValidationError::IdAlreadyAssigned(self.id.value()));
        }
        self.id = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn question_base_new_creates_with_defaults() {
        let base = QuestionBase::new(SurveyId::new(3), "How are you?").unwrap();

        assert_eq!(base.id(), QuestionId::UNASSIGNED);
        assert_eq!(base.survey_id(), SurveyId::new(3));
        assert_eq!(base.text(), "How are you?");
        assert_eq!(base.question_number(), 0);
        assert_eq!(base.created_at(), base.updated_at());
    }

    #[test]
    fn question_base_new_rejects_blank_text() {
        let result = QuestionBase::new(SurveyId::new(1), "  ");
        assert_eq!(result, Err(ValidationError::empty_field("text")));
    }

    #[test]
    fn assign_id_only_once() {
        let mut base = QuestionBase::new(SurveyId::new(1), "Q").unwrap();
        base.assign_id(QuestionId::new(10)).unwrap();

        let result = base.assign_id(QuestionId::new(11));
        assert_eq!(result, Err(ValidationError::IdAlreadyAssigned(10)));
        assert_eq!(base.id(), QuestionId::new(10));
    }

    #[test]
    fn set_text_updates_timestamp() {
        let mut base = QuestionBase::new(SurveyId::new(1), "Q").unwrap();
        let initial = base.updated_at();
        sleep(Duration::from_millis(10));

        base.set_text("Better question").unwrap();
        assert_eq!(base.text(), "Better question");
        assert!(base.updated_at().is_after(&initial));
    }

    #[test]
    fn set_text_rejects_blank_and_keeps_old_text() {
        let mut base = QuestionBase::new(SurveyId::new(1), "Q").unwrap();
        assert!(base.set_text("").is_err());
        assert_eq!(base.text(), "Q");
    }

    #[test]
    fn validate_catches_reconstituted_blank_text() {
        let now = Timestamp::now();
        let base = QuestionBase::reconstitute(
            QuestionId::new(1),
            SurveyId::new(1),
            String::new(),
            1,
            now,
            now,
        );
        assert!(base.validate().is_err());
    }

    #[test]
    fn answer_base_assign_id_only_once() {
        let mut base = AnswerBase::new(QuestionId::new(4));
        base.assign_id(AnswerId::new(1)).unwrap();
        assert!(base.assign_id(AnswerId::new(2)).is_err());
        assert_eq!(base.question_id(), QuestionId::new(4));
    }
}

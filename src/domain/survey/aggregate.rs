//! Survey aggregate - owns an ordered collection of questions.
//!
//! Questions are kept sorted by `question_number`, which stays unique and
//! contiguous from 1. Dropping a survey drops its questions; answers live in
//! submissions keyed by question id and never point back into the survey.

use std::collections::HashSet;

use crate::domain::foundation::{QuestionId, SurveyId, Timestamp, ValidationError};

use super::{Question, SurveyError};

/// A survey and its questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    id: SurveyId,
    title: String,
    questions: Vec<Question>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Survey {
    /// Creates an empty survey.
    pub fn new(id: SurveyId, title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a survey from stored or decoded data.
    ///
    /// Questions are sorted by their stored number; call [`Self::validate`]
    /// to check that numbering is intact.
    pub(crate) fn reconstitute(
        id: SurveyId,
        title: String,
        mut questions: Vec<Question>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        questions.sort_by_key(|q| q.question_number());
        Self {
            id,
            title,
            questions,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> SurveyId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Questions in `question_number` order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Mutable access to one question; the survey is touched only on a hit.
    pub fn question_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        let index = self.questions.iter().position(|q| q.id() == id)?;
        self.updated_at = Timestamp::now();
        self.questions.get_mut(index)
    }

    pub fn question_by_number(&self, number: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.question_number() == number)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        self.title = title;
        self.touch();
        Ok(())
    }

    /// Appends a question and returns the number it was given.
    ///
    /// Questions not yet attached to a survey are stamped with this survey's
    /// id; questions attached elsewhere are refused.
    pub fn add_question(&mut self, mut question: Question) -> Result<u32, SurveyError> {
        let owner = question.survey_id();
        if owner.is_assigned() && owner != self.id {
            return Err(SurveyError::ForeignQuestion {
                expected: self.id,
                actual: owner,
            });
        }
        question.validate()?;
        if question.id().is_assigned() && self.question(question.id()).is_some() {
            return Err(SurveyError::DuplicateQuestion(question.id()));
        }

        if owner != self.id {
            question.base_mut().attach_to(self.id);
        }
        let number = self.questions.len() as u32 + 1;
        question.base_mut().set_question_number(number);
        self.questions.push(question);
        self.touch();
        Ok(number)
    }

    /// Removes a question and closes the gap in numbering.
    pub fn remove_question(&mut self, id: QuestionId) -> Result<Question, SurveyError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or(SurveyError::QuestionNotFound(id))?;
        let removed = self.questions.remove(index);
        self.renumber();
        self.touch();
        Ok(removed)
    }

    /// Moves a question to a new 1-based position, shifting the others.
    pub fn move_question(&mut self, id: QuestionId, number: u32) -> Result<(), SurveyError> {
        let count = self.questions.len();
        if number == 0 || number as usize > count {
            return Err(SurveyError::InvalidQuestionNumber { number, count });
        }
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or(SurveyError::QuestionNotFound(id))?;
        let question = self.questions.remove(index);
        self.questions.insert(number as usize - 1, question);
        self.renumber();
        self.touch();
        Ok(())
    }

    /// Checks every question plus numbering, ownership and id uniqueness.
    pub fn validate(&self) -> Result<(), SurveyError> {
        let mut seen_ids = HashSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            question.validate()?;
            if question.id().is_assigned() && !seen_ids.insert(question.id()) {
                return Err(SurveyError::DuplicateQuestion(question.id()));
            }
            if question.survey_id() != self.id {
                return Err(SurveyError::ForeignQuestion {
                    expected: self.id,
                    actual: question.survey_id(),
                });
            }
            let expected = index as u32 + 1;
            if question.question_number() != expected {
                return Err(SurveyError::InvalidQuestionNumber {
                    number: question.question_number(),
                    count: self.questions.len(),
                });
            }
        }
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            question.base_mut().set_question_number(index as u32 + 1);
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

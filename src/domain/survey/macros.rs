//! DRY macros for question and answer variants.
//!
//! - **`impl_question!`** - fixed tag plus base-field accessors for a question struct
//! - **`impl_answer!`** - fixed tag plus base-field accessors for an answer struct
//! - **`delegate_to_variant!`** - 5-arm match blocks for `Question` / `Answer` delegation
//!
//! # Usage
//!
//! ```ignore
//! impl_question!(TextQuestion, QuestionType::Text);
//! impl_answer!(TextAnswer, QuestionType::Text);
//!
//! delegate_to_variant!(Question, self, id)
//! delegate_to_variant!(Answer, self, question_id)
//! ```

/// Implements the fixed tag and base accessors for a struct with a
/// `base: QuestionBase` field.
///
/// The tag is an associated constant, so no instance can ever report a tag
/// other than the one its type was declared with.
#[macro_export]
macro_rules! impl_question {
    ($name:ident, $question_type:expr) => {
        impl $name {
            /// The tag owned by this question shape.
            pub const QUESTION_TYPE: $crate::domain::foundation::QuestionType = $question_type;

            /// Returns the tag of this question.
            pub fn question_type(&self) -> $crate::domain::foundation::QuestionType {
                Self::QUESTION_TYPE
            }

            /// Returns the shared base fields.
            pub fn base(&self) -> &$crate::domain::survey::QuestionBase {
                &self.base
            }

            pub(crate) fn base_mut(&mut self) -> &mut $crate::domain::survey::QuestionBase {
                &mut self.base
            }

            pub fn id(&self) -> $crate::domain::foundation::QuestionId {
                self.base.id()
            }

            pub fn survey_id(&self) -> $crate::domain::foundation::SurveyId {
                self.base.survey_id()
            }

            pub fn text(&self) -> &str {
                self.base.text()
            }

            pub fn question_number(&self) -> u32 {
                self.base.question_number()
            }

            pub fn created_at(&self) -> $crate::domain::foundation::Timestamp {
                self.base.created_at()
            }

            pub fn updated_at(&self) -> $crate::domain::foundation::Timestamp {
                self.base.updated_at()
            }

            /// Records the server-assigned id.
            pub fn assign_id(
                &mut self,
                id: $crate::domain::foundation::QuestionId,
            ) -> Result<(), $crate::domain::foundation::ValidationError> {
                self.base.assign_id(id)
            }

            /// Replaces the question text.
            pub fn set_text(
                &mut self,
                text: impl Into<String>,
            ) -> Result<(), $crate::domain::foundation::ValidationError> {
                self.base.set_text(text)
            }
        }
    };
}

/// Implements the fixed tag and base accessors for a struct with a
/// `base: AnswerBase` field.
#[macro_export]
macro_rules! impl_answer {
    ($name:ident, $question_type:expr) => {
        impl $name {
            /// The tag of the question shape this answer pairs with.
            pub const QUESTION_TYPE: $crate::domain::foundation::QuestionType = $question_type;

            /// Returns the tag of this answer.
            pub fn question_type(&self) -> $crate::domain::foundation::QuestionType {
                Self::QUESTION_TYPE
            }

            /// Returns the shared base fields.
            pub fn base(&self) -> &$crate::domain::survey::AnswerBase {
                &self.base
            }

            pub fn id(&self) -> $crate::domain::foundation::AnswerId {
                self.base.id()
            }

            pub fn question_id(&self) -> $crate::domain::foundation::QuestionId {
                self.base.question_id()
            }

            /// Records the server-assigned id.
            pub fn assign_id(
                &mut self,
                id: $crate::domain::foundation::AnswerId,
            ) -> Result<(), $crate::domain::foundation::ValidationError> {
                self.base.assign_id(id)
            }
        }
    };
}

/// Delegates a method call to every variant of `Question` or `Answer`.
///
/// Both sum types share variant names, so one macro serves both:
///
/// ```ignore
/// match self {
///     Question::Text(q) => q.method(),
///     Question::TrueFalse(q) => q.method(),
///     // ... 3 more arms
/// }
/// ```
#[macro_export]
macro_rules! delegate_to_variant {
    ($enum:ident, $self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            $enum::Text(v) => v.$method($($arg),*),
            $enum::TrueFalse(v) => v.$method($($arg),*),
            $enum::MultipleChoice(v) => v.$method($($arg),*),
            $enum::Rating1To10(v) => v.$method($($arg),*),
            $enum::SelectAllThatApply(v) => v.$method($($arg),*),
        }
    };
}

pub use delegate_to_variant;
pub use impl_answer;
pub use impl_question;

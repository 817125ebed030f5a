//! Type Registry - maps a question-type tag to the constructors of its
//! concrete question and answer variants.
//!
//! The table is fixed: [`TypeRegistry::standard`] lists one constructor pair
//! per tag, and nothing can be registered or removed once it is built.

use std::fmt;
use std::num::NonZeroU32;

use crate::domain::foundation::{OptionId, QuestionType, RegistryError, TagTable};
use crate::domain::survey::{
    Answer, AnswerBase, ChoiceOption, ChoiceOptions, MultipleChoiceAnswer, MultipleChoiceQuestion,
    Question, QuestionBase, Rating1To10Answer, Rating1To10Question, SelectAllThatApplyAnswer,
    SelectAllThatApplyQuestion, SelectedOption, TextAnswer, TextQuestion, TrueFalseAnswer,
    TrueFalseQuestion,
};

use super::{wire, CodecError, Payload};

/// Builds a question variant from its decoded base and the remaining payload.
pub type QuestionConstructor = fn(QuestionBase, &Payload<'_>) -> Result<Question, CodecError>;

/// Builds an answer variant from its decoded base and the remaining payload.
pub type AnswerConstructor = fn(AnswerBase, &Payload<'_>) -> Result<Answer, CodecError>;

/// Constructor pair for one tag.
#[derive(Clone, Copy)]
pub struct VariantConstructor {
    question_type: QuestionType,
    question: QuestionConstructor,
    answer: AnswerConstructor,
}

impl VariantConstructor {
    pub const fn new(
        question_type: QuestionType,
        question: QuestionConstructor,
        answer: AnswerConstructor,
    ) -> Self {
        Self {
            question_type,
            question,
            answer,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn construct_question(
        &self,
        base: QuestionBase,
        payload: &Payload<'_>,
    ) -> Result<Question, CodecError> {
        (self.question)(base, payload)
    }

    pub fn construct_answer(
        &self,
        base: AnswerBase,
        payload: &Payload<'_>,
    ) -> Result<Answer, CodecError> {
        (self.answer)(base, payload)
    }
}

impl fmt::Debug for VariantConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantConstructor")
            .field("question_type", &self.question_type)
            .finish_non_exhaustive()
    }
}

const STANDARD_CONSTRUCTORS: [VariantConstructor; 5] = [
    VariantConstructor::new(QuestionType::Text, text_question, text_answer),
    VariantConstructor::new(QuestionType::TrueFalse, true_false_question, true_false_answer),
    VariantConstructor::new(
        QuestionType::MultipleChoice,
        multiple_choice_question,
        multiple_choice_answer,
    ),
    VariantConstructor::new(QuestionType::Rating1To10, rating_question, rating_answer),
    VariantConstructor::new(
        QuestionType::SelectAllThatApply,
        select_all_question,
        select_all_answer,
    ),
];

/// Immutable tag -> constructor table used by the codec.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    table: TagTable<VariantConstructor>,
}

impl TypeRegistry {
    /// Builds a registry from an explicit constructor list.
    pub fn new(
        constructors: impl IntoIterator<Item = VariantConstructor>,
    ) -> Result<Self, RegistryError> {
        let table = TagTable::build("variant constructor", constructors, |c| c.question_type)?;
        Ok(Self { table })
    }

    /// The registry covering every [`QuestionType`].
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(STANDARD_CONSTRUCTORS)
    }

    /// Resolves the constructor pair for a raw tag value.
    pub fn resolve(&self, raw: i64) -> Result<&VariantConstructor, RegistryError> {
        self.table
            .get(raw)
            .ok_or_else(|| RegistryError::UnsupportedQuestionType {
                raw: raw.to_string(),
            })
    }

    pub fn resolve_type(
        &self,
        question_type: QuestionType,
    ) -> Result<&VariantConstructor, RegistryError> {
        self.resolve(question_type.value())
    }

    /// Tags this registry can construct, in tag order.
    pub fn supported_types(&self) -> Vec<QuestionType> {
        self.table.tags().collect()
    }
}

// ============================================
// Question constructors
// ============================================

fn text_question(base: QuestionBase, payload: &Payload<'_>) -> Result<Question, CodecError> {
    let max_length = match payload.optional_i64(wire::MAX_LENGTH)? {
        None => TextQuestion::DEFAULT_MAX_LENGTH,
        Some(raw) => u32::try_from(raw)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| CodecError::malformed(wire::MAX_LENGTH, "must be a positive integer"))?,
    };
    Ok(TextQuestion::reconstitute(base, max_length).into())
}

fn true_false_question(base: QuestionBase, _: &Payload<'_>) -> Result<Question, CodecError> {
    Ok(TrueFalseQuestion::reconstitute(base).into())
}

fn rating_question(base: QuestionBase, _: &Payload<'_>) -> Result<Question, CodecError> {
    Ok(Rating1To10Question::reconstitute(base).into())
}

fn multiple_choice_question(
    base: QuestionBase,
    payload: &Payload<'_>,
) -> Result<Question, CodecError> {
    let options = choice_options(payload)?;
    Ok(MultipleChoiceQuestion::reconstitute(base, options).into())
}

fn select_all_question(base: QuestionBase, payload: &Payload<'_>) -> Result<Question, CodecError> {
    let options = choice_options(payload)?;
    Ok(SelectAllThatApplyQuestion::reconstitute(base, options).into())
}

/// Absent `options` decode to an empty set; a missing `order` falls back to
/// the 1-based position in the array.
fn choice_options(payload: &Payload<'_>) -> Result<ChoiceOptions, CodecError> {
    let mut options = Vec::new();
    for (index, item) in payload.array_or_empty(wire::OPTIONS)?.iter().enumerate() {
        let option = Payload::from_value(item, &format!("{}[{}]", wire::OPTIONS, index))?;
        options.push(ChoiceOption {
            id: option.optional_i64(wire::ID)?.map(OptionId::new).unwrap_or_default(),
            option_text: option.required_str(wire::OPTION_TEXT)?,
            order: option
                .optional_int::<i32>(wire::ORDER)?
                .unwrap_or(index as i32 + 1),
        });
    }
    Ok(ChoiceOptions::reconstitute(options))
}

// ============================================
// Answer constructors
// ============================================

fn text_answer(base: AnswerBase, payload: &Payload<'_>) -> Result<Answer, CodecError> {
    let text = payload.optional_str(wire::TEXT)?;
    Ok(TextAnswer::reconstitute(base, text).into())
}

fn true_false_answer(base: AnswerBase, payload: &Payload<'_>) -> Result<Answer, CodecError> {
    let value = payload.optional_bool(wire::VALUE)?;
    Ok(TrueFalseAnswer::reconstitute(base, value).into())
}

fn multiple_choice_answer(base: AnswerBase, payload: &Payload<'_>) -> Result<Answer, CodecError> {
    let selected = payload
        .optional_i64(wire::SELECTED_OPTION_ID)?
        .map(OptionId::new);
    Ok(MultipleChoiceAnswer::reconstitute(base, selected).into())
}

fn rating_answer(base: AnswerBase, payload: &Payload<'_>) -> Result<Answer, CodecError> {
    let selected = payload
        .optional_i64(wire::SELECTED_OPTION_ID)?
        .map(OptionId::new);
    Ok(Rating1To10Answer::reconstitute(base, selected).into())
}

fn select_all_answer(base: AnswerBase, payload: &Payload<'_>) -> Result<Answer, CodecError> {
    let mut rows = Vec::new();
    for (index, item) in payload.array_or_empty(wire::OPTIONS)?.iter().enumerate() {
        let row = Payload::from_value(item, &format!("{}[{}]", wire::OPTIONS, index))?;
        rows.push(SelectedOption {
            option_id: row.optional_i64(wire::ID)?.map(OptionId::new).unwrap_or_default(),
            option_text: row.optional_str(wire::OPTION_TEXT)?.unwrap_or_default(),
            order: row
                .optional_int::<i32>(wire::ORDER)?
                .unwrap_or(index as i32 + 1),
            is_selected: row.optional_bool(wire::IS_SELECTED)?.unwrap_or(false),
        });
    }
    Ok(SelectAllThatApplyAnswer::reconstitute(base, rows).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuestionId, SurveyId};
    use serde_json::json;

    fn base() -> QuestionBase {
        QuestionBase::new(SurveyId::new(1), "Question").unwrap()
    }

    #[test]
    fn standard_covers_every_type() {
        let registry = TypeRegistry::standard().unwrap();
        assert_eq!(registry.supported_types(), QuestionType::all().to_vec());
    }

    #[test]
    fn resolve_returns_constructor_for_same_tag() {
        let registry = TypeRegistry::standard().unwrap();
        let empty = json!({});
        let payload = Payload::from_value(&empty, "question").unwrap();

        for qt in QuestionType::all() {
            let ctor = registry.resolve(qt.value()).unwrap();
            assert_eq!(ctor.question_type(), *qt);

            let question = ctor.construct_question(base(), &payload).unwrap();
            assert_eq!(question.question_type(), *qt);

            let answer = ctor
                .construct_answer(AnswerBase::new(QuestionId::new(1)), &payload)
                .unwrap();
            assert_eq!(answer.question_type(), *qt);
        }
    }

    #[test]
    fn resolve_rejects_tags_outside_enumeration() {
        let registry = TypeRegistry::standard().unwrap();
        for raw in [0, 6, 999] {
            assert_eq!(
                registry.resolve(raw).unwrap_err(),
                RegistryError::UnsupportedQuestionType {
                    raw: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn partial_registry_rejects_unregistered_tag() {
        let registry = TypeRegistry::new([STANDARD_CONSTRUCTORS[0]]).unwrap();
        assert!(registry.resolve_type(QuestionType::Text).is_ok());
        assert!(registry.resolve_type(QuestionType::TrueFalse).is_err());
    }

    #[test]
    fn new_rejects_duplicate_constructors() {
        let result = TypeRegistry::new([STANDARD_CONSTRUCTORS[1], STANDARD_CONSTRUCTORS[1]]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateRegistration {
                question_type: QuestionType::TrueFalse,
                ..
            })
        ));
    }

    #[test]
    fn text_constructor_rejects_non_positive_max_length() {
        let value = json!({ "maxLength": 0 });
        let payload = Payload::from_value(&value, "question").unwrap();
        let result = text_question(base(), &payload);
        assert!(matches!(
            result,
            Err(CodecError::MalformedPayload { ref field, .. }) if field == "maxLength"
        ));
    }

    #[test]
    fn choice_option_without_text_is_malformed() {
        let value = json!({ "options": [{ "id": 1, "order": 1 }] });
        let payload = Payload::from_value(&value, "question").unwrap();
        assert!(multiple_choice_question(base(), &payload).is_err());
    }

    #[test]
    fn choice_option_order_defaults_to_position() {
        let value = json!({ "options": [{ "optionText": "A" }, { "optionText": "B" }] });
        let payload = Payload::from_value(&value, "question").unwrap();
        let question = select_all_question(base(), &payload).unwrap();

        let orders: Vec<_> = question.options().unwrap().iter().map(|o| o.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }
}

//! SurveyCodec - converts questions, answers and surveys to and from the
//! tagged JSON wire representation.
//!
//! Decoding reads the `questionType` discriminator first, resolves the
//! variant through the [`TypeRegistry`], then fills the shared base fields and
//! hands the rest of the payload to the variant constructor. Encoding always
//! derives the discriminator from the runtime variant.
//!
//! The codec is structural: it checks shapes, not domain invariants. Call
//! `validate()` on the decoded value for those.

use serde_json::{json, Map, Value};

use crate::config::{CodecConfig, TagFormat};
use crate::domain::foundation::{
    AnswerId, QuestionId, QuestionType, SurveyId, Timestamp,
};
use crate::domain::survey::{Answer, AnswerBase, ChoiceOptions, Question, QuestionBase, Survey};

use super::{wire, CodecError, Payload, TypeRegistry};

/// Tagged JSON codec for the variant model.
#[derive(Debug, Clone)]
pub struct SurveyCodec {
    registry: TypeRegistry,
    tag_format: TagFormat,
    pretty: bool,
}

impl SurveyCodec {
    pub fn new(registry: TypeRegistry, config: &CodecConfig) -> Self {
        Self {
            registry,
            tag_format: config.tag_format,
            pretty: config.pretty,
        }
    }

    /// Codec over the standard type registry with default settings.
    pub fn standard() -> Result<Self, CodecError> {
        Ok(Self::new(TypeRegistry::standard()?, &CodecConfig::default()))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn tag_format(&self) -> TagFormat {
        self.tag_format
    }

    // ============================================
    // Encoding
    // ============================================

    pub fn encode_question(&self, question: &Question) -> Value {
        let base = question.base();
        let mut object = Map::new();
        object.insert(wire::ID.into(), json!(base.id().value()));
        object.insert(wire::SURVEY_ID.into(), json!(base.survey_id().value()));
        object.insert(wire::TEXT.into(), json!(base.text()));
        object.insert(wire::QUESTION_NUMBER.into(), json!(base.question_number()));
        object.insert(wire::CREATED_DATE.into(), json!(base.created_at().to_rfc3339()));
        object.insert(wire::UPDATED_DATE.into(), json!(base.updated_at().to_rfc3339()));
        object.insert(wire::QUESTION_TYPE.into(), self.encode_tag(question.question_type()));

        match question {
            Question::Text(q) => {
                object.insert(wire::MAX_LENGTH.into(), json!(q.max_length().get()));
            }
            Question::MultipleChoice(q) => {
                object.insert(wire::OPTIONS.into(), encode_choice_options(q.options()));
            }
            Question::SelectAllThatApply(q) => {
                object.insert(wire::OPTIONS.into(), encode_choice_options(q.options()));
            }
            Question::TrueFalse(_) | Question::Rating1To10(_) => {}
        }

        Value::Object(object)
    }

    pub fn encode_answer(&self, answer: &Answer) -> Value {
        let mut object = Map::new();
        object.insert(wire::ID.into(), json!(answer.id().value()));
        object.insert(wire::QUESTION_ID.into(), json!(answer.question_id().value()));
        object.insert(wire::QUESTION_TYPE.into(), self.encode_tag(answer.question_type()));

        match answer {
            Answer::Text(a) => {
                object.insert(wire::TEXT.into(), json!(a.text()));
            }
            Answer::TrueFalse(a) => {
                object.insert(wire::VALUE.into(), json!(a.value()));
            }
            Answer::MultipleChoice(a) => {
                let selected = a.selected_option_id().map(|id| id.value());
                object.insert(wire::SELECTED_OPTION_ID.into(), json!(selected));
            }
            Answer::Rating1To10(a) => {
                let selected = a.selected_option_id().map(|id| id.value());
                object.insert(wire::SELECTED_OPTION_ID.into(), json!(selected));
            }
            Answer::SelectAllThatApply(a) => {
                let rows: Vec<Value> = a
                    .options()
                    .iter()
                    .map(|row| {
                        json!({
                            (wire::ID): row.option_id.value(),
                            (wire::OPTION_TEXT): row.option_text,
                            (wire::ORDER): row.order,
                            (wire::IS_SELECTED): row.is_selected,
                        })
                    })
                    .collect();
                object.insert(wire::OPTIONS.into(), Value::Array(rows));
            }
        }

        Value::Object(object)
    }

    pub fn encode_survey(&self, survey: &Survey) -> Value {
        let questions: Vec<Value> = survey
            .questions()
            .iter()
            .map(|q| self.encode_question(q))
            .collect();
        json!({
            (wire::ID): survey.id().value(),
            (wire::TITLE): survey.title(),
            (wire::CREATED_DATE): survey.created_at().to_rfc3339(),
            (wire::UPDATED_DATE): survey.updated_at().to_rfc3339(),
            (wire::QUESTIONS): questions,
        })
    }

    pub fn encode_questions(&self, questions: &[Question]) -> Value {
        Value::Array(questions.iter().map(|q| self.encode_question(q)).collect())
    }

    pub fn encode_answers(&self, answers: &[Answer]) -> Value {
        Value::Array(answers.iter().map(|a| self.encode_answer(a)).collect())
    }

    /// Renders an encoded value as JSON text, honouring the `pretty` setting.
    pub fn to_string(&self, value: &Value) -> Result<String, CodecError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    pub fn encode_question_str(&self, question: &Question) -> Result<String, CodecError> {
        self.to_string(&self.encode_question(question))
    }

    pub fn encode_answer_str(&self, answer: &Answer) -> Result<String, CodecError> {
        self.to_string(&self.encode_answer(answer))
    }

    pub fn encode_survey_str(&self, survey: &Survey) -> Result<String, CodecError> {
        self.to_string(&self.encode_survey(survey))
    }

    pub fn encode_questions_str(&self, questions: &[Question]) -> Result<String, CodecError> {
        self.to_string(&self.encode_questions(questions))
    }

    pub fn encode_answers_str(&self, answers: &[Answer]) -> Result<String, CodecError> {
        self.to_string(&self.encode_answers(answers))
    }

    fn encode_tag(&self, question_type: QuestionType) -> Value {
        match self.tag_format {
            TagFormat::Numeric => json!(question_type.value()),
            TagFormat::Name => json!(question_type.name()),
        }
    }

    // ============================================
    // Decoding
    // ============================================

    pub fn decode_question(&self, value: &Value) -> Result<Question, CodecError> {
        self.decode_question_in(value, SurveyId::UNASSIGNED, "question")
    }

    pub fn decode_answer(&self, value: &Value) -> Result<Answer, CodecError> {
        let payload = Payload::from_value(value, "answer")?;
        let constructor = self.registry.resolve(read_tag(&payload)?)?;

        let base = AnswerBase::reconstitute(
            payload
                .optional_i64(wire::ID)?
                .map(AnswerId::new)
                .unwrap_or_default(),
            payload
                .optional_i64(wire::QUESTION_ID)?
                .map(QuestionId::new)
                .unwrap_or_default(),
        );
        constructor.construct_answer(base, &payload)
    }

    /// Decodes a survey document. Nested questions without a `surveyId`
    /// inherit the survey's id.
    pub fn decode_survey(&self, value: &Value) -> Result<Survey, CodecError> {
        let payload = Payload::from_value(value, "survey")?;
        let id = payload
            .optional_i64(wire::ID)?
            .map(SurveyId::new)
            .unwrap_or_default();
        let title = payload.required_str(wire::TITLE)?;
        let (created_at, updated_at) = read_timestamps(&payload)?;

        let mut questions = Vec::new();
        for (index, item) in payload.array_or_empty(wire::QUESTIONS)?.iter().enumerate() {
            let what = format!("{}[{}]", wire::QUESTIONS, index);
            questions.push(self.decode_question_in(item, id, &what)?);
        }

        Ok(Survey::reconstitute(id, title, questions, created_at, updated_at))
    }

    /// Decodes a JSON array of questions; the first failure aborts the batch.
    pub fn decode_questions(&self, value: &Value) -> Result<Vec<Question>, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::malformed(wire::QUESTIONS, "must be an array"))?;
        items.iter().map(|item| self.decode_question(item)).collect()
    }

    /// Decodes a JSON array of answers; the first failure aborts the batch.
    pub fn decode_answers(&self, value: &Value) -> Result<Vec<Answer>, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::malformed("answers", "must be an array"))?;
        items.iter().map(|item| self.decode_answer(item)).collect()
    }

    pub fn decode_question_str(&self, text: &str) -> Result<Question, CodecError> {
        self.decode_question(&serde_json::from_str(text)?)
    }

    pub fn decode_answer_str(&self, text: &str) -> Result<Answer, CodecError> {
        self.decode_answer(&serde_json::from_str(text)?)
    }

    pub fn decode_survey_str(&self, text: &str) -> Result<Survey, CodecError> {
        self.decode_survey(&serde_json::from_str(text)?)
    }

    pub fn decode_questions_str(&self, text: &str) -> Result<Vec<Question>, CodecError> {
        self.decode_questions(&serde_json::from_str(text)?)
    }

    pub fn decode_answers_str(&self, text: &str) -> Result<Vec<Answer>, CodecError> {
        self.decode_answers(&serde_json::from_str(text)?)
    }

    fn decode_question_in(
        &self,
        value: &Value,
        default_survey_id: SurveyId,
        what: &str,
    ) -> Result<Question, CodecError> {
        let payload = Payload::from_value(value, what)?;
        let constructor = self.registry.resolve(read_tag(&payload)?)?;

        let (created_at, updated_at) = read_timestamps(&payload)?;
        let base = QuestionBase::reconstitute(
            payload
                .optional_i64(wire::ID)?
                .map(QuestionId::new)
                .unwrap_or_default(),
            payload
                .optional_i64(wire::SURVEY_ID)?
                .map(SurveyId::new)
                .unwrap_or(default_survey_id),
            payload.required_str(wire::TEXT)?,
            payload.optional_int::<u32>(wire::QUESTION_NUMBER)?.unwrap_or(0),
            created_at,
            updated_at,
        );
        constructor.construct_question(base, &payload)
    }
}

/// Reads the discriminator as a raw tag value.
///
/// Integers pass through untouched so the registry can report the exact
/// value; strings may hold a number or a type name in any case.
fn read_tag(payload: &Payload<'_>) -> Result<i64, CodecError> {
    match payload.get(wire::QUESTION_TYPE) {
        None => Err(CodecError::unsupported("missing")),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| CodecError::unsupported(n.to_string())),
        Some(Value::String(s)) => Ok(s.parse::<QuestionType>()?.value()),
        Some(other) => Err(CodecError::unsupported(other.to_string())),
    }
}

/// Missing `createdDate` defaults to now; missing `updatedDate` to the
/// created time.
fn read_timestamps(payload: &Payload<'_>) -> Result<(Timestamp, Timestamp), CodecError> {
    let created_at = payload
        .optional_timestamp(wire::CREATED_DATE)?
        .unwrap_or_else(Timestamp::now);
    let updated_at = payload
        .optional_timestamp(wire::UPDATED_DATE)?
        .unwrap_or(created_at);
    Ok((created_at, updated_at))
}

fn encode_choice_options(options: &ChoiceOptions) -> Value {
    Value::Array(
        options
            .iter()
            .map(|option| {
                json!({
                    (wire::ID): option.id.value(),
                    (wire::OPTION_TEXT): option.option_text,
                    (wire::ORDER): option.order,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OptionId;
    use crate::domain::survey::{ChoiceOption, TextQuestion};

    fn codec() -> SurveyCodec {
        SurveyCodec::standard().unwrap()
    }

    #[test]
    fn decode_select_all_keeps_options_in_order() {
        let value = json!({
            "id": 1,
            "text": "Select all that apply:",
            "questionType": 5,
            "options": [
                { "id": 1, "optionText": "Option 1", "order": 1 },
                { "id": 2, "optionText": "Option 2", "order": 2 }
            ]
        });

        let question = codec().decode_question(&value).unwrap();
        let sata = question.as_select_all().unwrap();
        let texts: Vec<_> = sata.options().iter().map(|o| o.option_text.as_str()).collect();
        assert_eq!(texts, vec!["Option 1", "Option 2"]);
    }

    #[test]
    fn decode_rating_without_options() {
        let value = json!({ "id": 1, "text": "Rate from 1 to 10:", "questionType": 4 });
        let question = codec().decode_question(&value).unwrap();
        assert_eq!(question.question_type(), QuestionType::Rating1To10);
        assert_eq!(question.id(), QuestionId::new(1));
    }

    #[test]
    fn decode_select_all_without_options_is_empty() {
        let value = json!({ "text": "Pick", "questionType": 5 });
        let question = codec().decode_question(&value).unwrap();
        assert!(question.options().unwrap().is_empty());
    }

    #[test]
    fn decode_reports_missing_tag() {
        let value = json!({ "id": 1, "text": "No tag" });
        let err = codec().decode_question(&value).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported question type: missing");
    }

    #[test]
    fn decode_reports_raw_out_of_range_tag() {
        for raw in [json!(0), json!(6), json!(999), json!("999"), json!("Essay")] {
            let value = json!({ "text": "Q", "questionType": raw.clone() });
            let err = codec().decode_question(&value).unwrap_err();
            let expected = raw.as_str().map(str::to_string).unwrap_or_else(|| raw.to_string());
            assert!(
                matches!(err, CodecError::UnsupportedQuestionType { raw: ref r } if *r == expected),
                "unexpected error {:?}",
                err
            );
        }
    }

    #[test]
    fn decode_rejects_non_scalar_tag() {
        let value = json!({ "text": "Q", "questionType": [4] });
        assert!(matches!(
            codec().decode_question(&value),
            Err(CodecError::UnsupportedQuestionType { .. })
        ));
    }

    #[test]
    fn decode_accepts_tag_names_and_any_field_case() {
        let value = json!({ "QUESTIONTYPE": "multiplechoice", "Text": "Pick one", "ID": 3 });
        let question = codec().decode_question(&value).unwrap();
        assert_eq!(question.question_type(), QuestionType::MultipleChoice);
        assert_eq!(question.id(), QuestionId::new(3));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let value = json!({ "text": "Q", "questionType": 2, "colour": "blue" });
        assert!(codec().decode_question(&value).is_ok());
    }

    #[test]
    fn decode_requires_text() {
        let value = json!({ "questionType": 1 });
        let err = codec().decode_question(&value).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload { ref field, .. } if field == "text"));
    }

    #[test]
    fn decode_text_defaults_max_length() {
        let value = json!({ "text": "Tell us", "questionType": 1 });
        let question = codec().decode_question(&value).unwrap();
        assert_eq!(
            question.as_text().unwrap().max_length(),
            TextQuestion::DEFAULT_MAX_LENGTH
        );
    }

    #[test]
    fn encode_tag_follows_runtime_variant() {
        let question = Question::new(QuestionType::TrueFalse, SurveyId::new(1), "Yes?").unwrap();
        let value = codec().encode_question(&question);
        assert_eq!(value["questionType"], json!(2));
    }

    #[test]
    fn encode_tag_by_name_when_configured() {
        let config = CodecConfig {
            tag_format: TagFormat::Name,
            ..Default::default()
        };
        let codec = SurveyCodec::new(TypeRegistry::standard().unwrap(), &config);
        let question = Question::new(QuestionType::Rating1To10, SurveyId::new(1), "Rate").unwrap();

        let value = codec.encode_question(&question);
        assert_eq!(value["questionType"], json!("Rating1To10"));
        assert_eq!(codec.decode_question(&value).unwrap(), question);
    }

    #[test]
    fn question_round_trip_preserves_every_field() {
        let mut question = Question::new(QuestionType::MultipleChoice, SurveyId::new(7), "Pick").unwrap();
        question.assign_id(QuestionId::new(11)).unwrap();
        let mc = question.as_multiple_choice_mut().unwrap();
        mc.add_option(ChoiceOption::new(OptionId::new(1), "A", 1).unwrap()).unwrap();
        mc.add_option(ChoiceOption::new(OptionId::new(2), "B", 2).unwrap()).unwrap();

        let codec = codec();
        let decoded = codec.decode_question(&codec.encode_question(&question)).unwrap();
        assert_eq!(decoded, question);
    }

    #[test]
    fn answer_round_trip_for_every_blank_variant() {
        let codec = codec();
        for qt in QuestionType::all() {
            let mut question = Question::new(*qt, SurveyId::new(1), "Q").unwrap();
            question.assign_id(QuestionId::new(9)).unwrap();
            let answer = question.blank_answer_with_id(AnswerId::new(3)).unwrap();

            let decoded = codec.decode_answer(&codec.encode_answer(&answer)).unwrap();
            assert_eq!(decoded, answer);
        }
    }

    #[test]
    fn decode_survey_inherits_survey_id() {
        let value = json!({
            "id": 4,
            "title": "Feedback",
            "questions": [
                { "text": "Name?", "questionType": 1, "questionNumber": 2 },
                { "text": "Happy?", "questionType": 2, "questionNumber": 1 }
            ]
        });

        let survey = codec().decode_survey(&value).unwrap();
        assert_eq!(survey.len(), 2);
        assert_eq!(survey.questions()[0].text(), "Happy?");
        assert!(survey.questions().iter().all(|q| q.survey_id() == SurveyId::new(4)));
        assert!(survey.validate().is_ok());
    }

    #[test]
    fn decode_survey_names_failing_question() {
        let value = json!({ "title": "Broken", "questions": [42] });
        let err = codec().decode_survey(&value).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload { ref field, .. } if field == "questions[0]"));
    }

    #[test]
    fn decode_answers_requires_array() {
        let err = codec().decode_answers(&json!({})).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload { .. }));
    }

    #[test]
    fn text_companions_round_trip_batches() {
        let codec = codec();
        let questions = vec![
            Question::new(QuestionType::Text, SurveyId::new(2), "Name?").unwrap(),
            Question::new(QuestionType::Rating1To10, SurveyId::new(2), "Rate").unwrap(),
        ];

        let text = codec.encode_questions_str(&questions).unwrap();
        assert!(text.starts_with('['));
        assert_eq!(codec.decode_questions_str(&text).unwrap(), questions);

        let answers: Vec<Answer> = questions.iter().map(Question::blank_answer).collect();
        let text = codec.encode_answers_str(&answers).unwrap();
        assert_eq!(codec.decode_answers_str(&text).unwrap(), answers);
    }

    #[test]
    fn decode_str_reports_invalid_json() {
        let err = codec().decode_question_str("{ not json").unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }
}

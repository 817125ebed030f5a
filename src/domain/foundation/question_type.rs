//! QuestionType enum - the discriminator tag shared by questions and answers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a raw value does not name one of the supported question types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown question type: {raw}")]
pub struct UnknownQuestionType {
    /// The offending raw tag, rendered as it was received.
    pub raw: String,
}

/// The closed set of question types.
///
/// Each tag owns exactly one question shape, one answer shape, one handler
/// and one renderer component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionType {
    Text = 1,
    TrueFalse = 2,
    MultipleChoice = 3,
    Rating1To10 = 4,
    SelectAllThatApply = 5,
}

impl QuestionType {
    /// Returns all question types in tag order.
    pub fn all() -> &'static [QuestionType] {
        &[
            QuestionType::Text,
            QuestionType::TrueFalse,
            QuestionType::MultipleChoice,
            QuestionType::Rating1To10,
            QuestionType::SelectAllThatApply,
        ]
    }

    /// Returns the numeric wire value of this tag.
    pub const fn value(&self) -> i64 {
        *self as i64
    }

    /// Looks up a tag by its numeric value.
    pub fn from_value(value: i64) -> Option<QuestionType> {
        Self::all().iter().copied().find(|t| t.value() == value)
    }

    /// Returns the canonical name used when tags are written as strings.
    pub fn name(&self) -> &'static str {
        match self {
            QuestionType::Text => "Text",
            QuestionType::TrueFalse => "TrueFalse",
            QuestionType::MultipleChoice => "MultipleChoice",
            QuestionType::Rating1To10 => "Rating1To10",
            QuestionType::SelectAllThatApply => "SelectAllThatApply",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionType::Text => "Text",
            QuestionType::TrueFalse => "True / False",
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::Rating1To10 => "Rating (1-10)",
            QuestionType::SelectAllThatApply => "Select All That Apply",
        }
    }

    /// Returns true for types whose questions carry a set of choice options.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::SelectAllThatApply
        )
    }
}

impl From<QuestionType> for i64 {
    fn from(tag: QuestionType) -> Self {
        tag.value()
    }
}

impl TryFrom<i64> for QuestionType {
    type Error = UnknownQuestionType;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| UnknownQuestionType {
            raw: value.to_string(),
        })
    }
}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    /// Accepts either the numeric value (`"4"`) or the name in any case
    /// (`"Rating1To10"`, `"rating1to10"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::from_value(value).ok_or_else(|| UnknownQuestionType { raw: s.to_string() });
        }
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownQuestionType { raw: s.to_string() })
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for QuestionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTag {
            Num(i64),
            Str(String),
        }

        match RawTag::deserialize(deserializer)? {
            RawTag::Num(n) => QuestionType::try_from(n).map_err(serde::de::Error::custom),
            RawTag::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

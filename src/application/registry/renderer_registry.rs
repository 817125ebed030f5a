//! RendererRegistry - binds each question type to a UI component name.
//!
//! The presentation layer owns the components; this table only names them,
//! with the same one-entry-per-tag discipline as the handler table.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::domain::foundation::{QuestionType, RegistryError, TagTable};
use crate::domain::survey::Question;

/// Identifier of a presentation-layer component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentName(Cow<'static, str>);

impl ComponentName {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the renderer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererEntry {
    pub question_type: QuestionType,
    pub component: ComponentName,
}

impl RendererEntry {
    pub const fn new(question_type: QuestionType, component: &'static str) -> Self {
        Self {
            question_type,
            component: ComponentName::from_static(component),
        }
    }
}

const STANDARD_RENDERERS: [RendererEntry; 5] = [
    RendererEntry::new(QuestionType::Text, "TextQuestion"),
    RendererEntry::new(QuestionType::TrueFalse, "TrueFalseQuestion"),
    RendererEntry::new(QuestionType::MultipleChoice, "MultipleChoiceQuestion"),
    RendererEntry::new(QuestionType::Rating1To10, "RatingQuestion"),
    RendererEntry::new(QuestionType::SelectAllThatApply, "SelectAllThatApplyQuestion"),
];

/// What the presentation layer needs to mount a question.
///
/// Change callbacks are wired by the presentation layer itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderProps<'a> {
    pub component: &'a ComponentName,
    pub question: &'a Question,
    pub disabled: bool,
}

/// Immutable tag -> component table.
#[derive(Debug, Clone)]
pub struct RendererRegistry {
    table: TagTable<RendererEntry>,
}

impl RendererRegistry {
    pub fn new(entries: impl IntoIterator<Item = RendererEntry>) -> Result<Self, RegistryError> {
        let table = TagTable::build("renderer", entries, |e| e.question_type)?;
        Ok(Self { table })
    }

    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(STANDARD_RENDERERS)
    }

    pub fn get_renderer_component(
        &self,
        tag: impl Into<i64>,
    ) -> Result<&ComponentName, RegistryError> {
        self.table.require(tag.into()).map(|e| &e.component)
    }

    pub fn has_renderer(&self, tag: impl Into<i64>) -> bool {
        self.table.contains(tag.into())
    }

    /// Entries in tag order.
    pub fn entries(&self) -> impl Iterator<Item = &RendererEntry> {
        self.table.values()
    }

    pub fn question_types(&self) -> Vec<QuestionType> {
        self.table.tags().collect()
    }

    pub fn render_props<'a>(
        &'a self,
        question: &'a Question,
        disabled: bool,
    ) -> Result<RenderProps<'a>, RegistryError> {
        let component = self.get_renderer_component(question.question_type())?;
        Ok(RenderProps {
            component,
            question,
            disabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SurveyId;

    #[test]
    fn every_tag_has_a_component() {
        let registry = RendererRegistry::standard().unwrap();
        for qt in QuestionType::all() {
            assert!(registry.has_renderer(*qt));
            assert!(registry.get_renderer_component(*qt).is_ok());
        }
        assert_eq!(
            registry.get_renderer_component(QuestionType::Rating1To10).unwrap().as_str(),
            "RatingQuestion"
        );
    }

    #[test]
    fn unknown_tags_are_not_supported() {
        let registry = RendererRegistry::standard().unwrap();
        for raw in [0, 6, 999] {
            assert!(!registry.has_renderer(raw));
            assert_eq!(
                registry.get_renderer_component(raw).unwrap_err(),
                RegistryError::NotSupported {
                    registry: "renderer",
                    raw: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn duplicate_components_fail_at_construction() {
        let result = RendererRegistry::new([
            RendererEntry::new(QuestionType::Text, "A"),
            RendererEntry::new(QuestionType::Text, "B"),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateRegistration { .. })));
    }

    #[test]
    fn render_props_carry_question_and_flag() {
        let registry = RendererRegistry::standard().unwrap();
        let question = Question::new(QuestionType::TrueFalse, SurveyId::new(1), "Agree?").unwrap();

        let props = registry.render_props(&question, true).unwrap();
        assert_eq!(props.component.as_str(), "TrueFalseQuestion");
        assert_eq!(props.question, &question);
        assert!(props.disabled);
    }

    #[test]
    fn component_name_serializes_as_string() {
        let name = ComponentName::new("Custom");
        assert_eq!(serde_json::to_value(&name).unwrap(), serde_json::json!("Custom"));
        assert_eq!(name.to_string(), "Custom");
    }
}

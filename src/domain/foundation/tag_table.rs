//! TagTable - immutable, fail-fast lookup from question-type tag to a resource.
//!
//! Every registry in the crate (variant constructors, handlers, renderer
//! components) is a `TagTable` underneath, so they share one construction
//! discipline: one entry per tag, duplicates rejected at build time, no
//! registration or removal afterwards.

use std::collections::BTreeMap;

use thiserror::Error;

use super::QuestionType;

/// Errors raised while building or querying a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Raised by variant resolution when a tag is absent or outside the enumeration.
    #[error("Unsupported question type: {raw}")]
    UnsupportedQuestionType { raw: String },

    /// Raised by behaviour/UI lookups when nothing is registered for a tag.
    #[error("No {registry} registered for question type {raw}")]
    NotSupported { registry: &'static str, raw: String },

    /// Raised at construction when two entries claim the same tag.
    #[error("Duplicate {registry} registration for question type {question_type}")]
    DuplicateRegistration {
        registry: &'static str,
        question_type: QuestionType,
    },
}

impl RegistryError {
    /// The raw tag carried by lookup failures.
    pub fn raw_tag(&self) -> Option<&str> {
        match self {
            RegistryError::UnsupportedQuestionType { raw } => Some(raw),
            RegistryError::NotSupported { raw, .. } => Some(raw),
            RegistryError::DuplicateRegistration { .. } => None,
        }
    }
}

/// Read-only map from tag to entry, iterated in tag order.
#[derive(Debug, Clone)]
pub struct TagTable<T> {
    registry: &'static str,
    entries: BTreeMap<QuestionType, T>,
}

impl<T> TagTable<T> {
    /// Indexes `items` by the tag each one declares.
    ///
    /// Fails with `DuplicateRegistration` on the first tag claimed twice.
    pub fn build<I, F>(registry: &'static str, items: I, tag_of: F) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> QuestionType,
    {
        let mut entries = BTreeMap::new();
        for item in items {
            let question_type = tag_of(&item);
            if entries.insert(question_type, item).is_some() {
                return Err(RegistryError::DuplicateRegistration {
                    registry,
                    question_type,
                });
            }
        }
        tracing::debug!(
            registry,
            entries = entries.len(),
            "Built question type registry"
        );
        Ok(Self { registry, entries })
    }

    /// Name used in error messages.
    pub fn registry(&self) -> &'static str {
        self.registry
    }

    /// Looks up an entry by raw tag value. Values outside the enumeration
    /// simply find nothing.
    pub fn get(&self, raw: i64) -> Option<&T> {
        QuestionType::from_value(raw).and_then(|t| self.entries.get(&t))
    }

    /// Looks up an entry, failing with `NotSupported` when absent.
    pub fn require(&self, raw: i64) -> Result<&T, RegistryError> {
        self.get(raw).ok_or_else(|| RegistryError::NotSupported {
            registry: self.registry,
            raw: raw.to_string(),
        })
    }

    /// Never fails; false for unregistered or invalid tags.
    pub fn contains(&self, raw: i64) -> bool {
        self.get(raw).is_some()
    }

    /// Registered tags in tag order.
    pub fn tags(&self) -> impl Iterator<Item = QuestionType> + '_ {
        self.entries.keys().copied()
    }

    /// Registered entries in tag order, one per tag.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(items: Vec<(QuestionType, &'static str)>) -> Result<TagTable<(QuestionType, &'static str)>, RegistryError> {
        TagTable::build("widget", items, |(t, _)| *t)
    }

    #[test]
    fn build_indexes_by_declared_tag() {
        let table = table(vec![
            (QuestionType::Rating1To10, "rating"),
            (QuestionType::Text, "text"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().1, "text");
        assert_eq!(table.get(4).unwrap().1, "rating");
    }

    #[test]
    fn build_rejects_duplicate_tags() {
        let result = table(vec![(QuestionType::Text, "a"), (QuestionType::Text, "b")]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateRegistration {
                registry: "widget",
                question_type: QuestionType::Text,
            }
        );
    }

    #[test]
    fn require_fails_for_unknown_and_unregistered_tags() {
        let table = table(vec![(QuestionType::Text, "text")]).unwrap();

        for raw in [0, 2, 6, 999] {
            let err = table.require(raw).unwrap_err();
            assert_eq!(err.raw_tag(), Some(raw.to_string().as_str()));
            assert!(!table.contains(raw));
        }
    }

    #[test]
    fn values_are_in_tag_order() {
        let table = table(vec![
            (QuestionType::SelectAllThatApply, "e"),
            (QuestionType::Text, "a"),
            (QuestionType::MultipleChoice, "c"),
        ])
        .unwrap();

        let names: Vec<_> = table.values().map(|(_, n)| *n).collect();
        assert_eq!(names, vec!["a", "c", "e"]);
        let tags: Vec<_> = table.tags().collect();
        assert_eq!(
            tags,
            vec![
                QuestionType::Text,
                QuestionType::MultipleChoice,
                QuestionType::SelectAllThatApply
            ]
        );
    }

    #[test]
    fn errors_display_raw_tag() {
        let err = RegistryError::NotSupported {
            registry: "handler",
            raw: "999".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "No handler registered for question type 999"
        );
    }
}

//! Choice options carried by multiple-choice and select-all questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, ValidationError};

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: OptionId,
    pub option_text: String,
    /// Render and selection sequence within the owning question.
    pub order: i32,
}

impl ChoiceOption {
    /// Creates an option, rejecting blank text.
    pub fn new(
        id: OptionId,
        option_text: impl Into<String>,
        order: i32,
    ) -> Result<Self, ValidationError> {
        let option_text = option_text.into();
        if option_text.trim().is_empty() {
            return Err(ValidationError::empty_field("optionText"));
        }
        Ok(Self {
            id,
            option_text,
            order,
        })
    }
}

/// Ordered set of options, kept sorted by `order`.
///
/// `order` values are unique within the set, as are assigned option ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceOptions {
    options: Vec<ChoiceOption>,
}

impl ChoiceOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a list of options, validating every invariant.
    pub fn from_options(
        options: impl IntoIterator<Item = ChoiceOption>,
    ) -> Result<Self, ValidationError> {
        let mut set = Self::new();
        for option in options {
            set.add(option)?;
        }
        Ok(set)
    }

    /// Builds a set without checks. Used when reconstituting stored or
    /// decoded data, which is validated separately via [`Self::validate`].
    pub(crate) fn reconstitute(mut options: Vec<ChoiceOption>) -> Self {
        options.sort_by_key(|o| o.order);
        Self { options }
    }

    /// Inserts an option at the position given by its `order`.
    pub fn add(&mut self, option: ChoiceOption) -> Result<(), ValidationError> {
        if option.option_text.trim().is_empty() {
            return Err(ValidationError::empty_field("optionText"));
        }
        if self.options.iter().any(|o| o.order == option.order) {
            return Err(ValidationError::duplicate("order", option.order));
        }
        if option.id.is_assigned() && self.get(option.id).is_some() {
            return Err(ValidationError::duplicate("id", option.id));
        }
        let position = self.options.partition_point(|o| o.order < option.order);
        self.options.insert(position, option);
        Ok(())
    }

    /// Removes the option with the given id, returning it if present.
    pub fn remove(&mut self, id: OptionId) -> Option<ChoiceOption> {
        let index = self.options.iter().position(|o| o.id == id)?;
        Some(self.options.remove(index))
    }

    /// Looks up an option by id.
    pub fn get(&self, id: OptionId) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Returns true if an option with this id exists.
    pub fn contains(&self, id: OptionId) -> bool {
        self.get(id).is_some()
    }

    /// Options in `order` sequence.
    pub fn as_slice(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChoiceOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Re-checks every invariant of the set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen_orders = std::collections::HashSet::new();
        let mut seen_ids = std::collections::HashSet::new();
        for option in &self.options {
            if option.option_text.trim().is_empty() {
                return Err(ValidationError::empty_field("optionText"));
            }
            if !seen_orders.insert(option.order) {
                return Err(ValidationError::duplicate("order", option.order));
            }
            if option.id.is_assigned() && !seen_ids.insert(option.id) {
                return Err(ValidationError::duplicate("id", option.id));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ChoiceOptions {
    type Item = &'a ChoiceOption;
    type IntoIter = std::slice::Iter<'a, ChoiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when a value object or entity would break an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has duplicate value {value}")]
    Duplicate { field: String, value: String },

    #[error("Identifier already assigned: {0}")]
    IdAlreadyAssigned(i64),

    #[error("Option {0} does not belong to the question")]
    UnknownOption(i64),
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("text");
        assert_eq!(format!("{}", err), "Field 'text' cannot be empty");
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("rating", 1, 10, 11);
        assert_eq!(
            format!("{}", err),
            "Field 'rating' must be between 1 and 10, got 11"
        );
    }

    #[test]
    fn duplicate_displays_correctly() {
        let err = ValidationError::duplicate("order", 2);
        assert_eq!(format!("{}", err), "Field 'order' has duplicate value 2");
    }

    #[test]
    fn unknown_option_displays_correctly() {
        let err = ValidationError::UnknownOption(9);
        assert_eq!(format!("{}", err), "Option 9 does not belong to the question");
    }

    #[test]
    fn id_already_assigned_displays_correctly() {
        let err = ValidationError::IdAlreadyAssigned(5);
        assert_eq!(format!("{}", err), "Identifier already assigned: 5");
    }
}

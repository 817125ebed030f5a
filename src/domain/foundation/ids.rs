//! Strongly-typed identifier value objects.
//!
//! Identifiers are server-assigned integers. The value `0` is reserved for
//! "not yet assigned" so that freshly built values can travel to the server
//! before persistence hands out a real key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Placeholder for identifiers the server has not handed out yet.
            pub const UNASSIGNED: Self = Self(0);

            /// Wraps a raw integer key.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer key.
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns true once the server has assigned a real key.
            pub const fn is_assigned(&self) -> bool {
                self.0 != 0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

integer_id!(
    /// Identifier of a survey.
    SurveyId
);

integer_id!(
    /// Identifier of a question within a survey.
    QuestionId
);

integer_id!(
    /// Identifier of an answer to a single question.
    AnswerId
);

integer_id!(
    /// Identifier of a choice option on a choice-bearing question.
    OptionId
);

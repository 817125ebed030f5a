//! Payload - case-insensitive, typed view over one JSON object.
//!
//! Keys are folded to ASCII lowercase on construction, so `questionType`,
//! `QuestionType` and `questiontype` all address the same field. An object
//! carrying two of those spellings is malformed. A JSON `null` reads the
//! same as an absent field.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;

use crate::domain::foundation::Timestamp;

use super::CodecError;

/// Typed, case-insensitive accessors over a JSON object.
#[derive(Debug)]
pub struct Payload<'a> {
    fields: HashMap<String, &'a Value>,
}

impl<'a> Payload<'a> {
    /// Wraps an object; `what` names the value in the error if it is not one.
    pub fn from_value(value: &'a Value, what: &str) -> Result<Self, CodecError> {
        let object = value
            .as_object()
            .ok_or_else(|| CodecError::malformed(what, "must be a JSON object"))?;
        let mut fields = HashMap::with_capacity(object.len());
        for (key, value) in object {
            match fields.entry(key.to_ascii_lowercase()) {
                Entry::Occupied(_) => {
                    return Err(CodecError::malformed(
                        key.as_str(),
                        "is given more than once in different cases",
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
        Ok(Self { fields })
    }

    /// Returns a field by name, ignoring case; `null` counts as absent.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .copied()
            .filter(|v| !v.is_null())
    }

    pub fn required_str(&self, name: &str) -> Result<String, CodecError> {
        self.optional_str(name)?
            .ok_or_else(|| CodecError::malformed(name, "is required"))
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<String>, CodecError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(CodecError::malformed(name, "must be a string")),
        }
    }

    pub fn optional_i64(&self, name: &str) -> Result<Option<i64>, CodecError> {
        match self.get(name) {
            None => Ok(None),
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or_else(|| CodecError::malformed(name, "must be an integer")),
        }
    }

    /// Integer field that must fit the target type, e.g. `u32` or `i32`.
    pub fn optional_int<T: TryFrom<i64>>(&self, name: &str) -> Result<Option<T>, CodecError> {
        match self.optional_i64(name)? {
            None => Ok(None),
            Some(v) => T::try_from(v)
                .map(Some)
                .map_err(|_| CodecError::malformed(name, format!("is out of range: {}", v))),
        }
    }

    pub fn optional_bool(&self, name: &str) -> Result<Option<bool>, CodecError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(CodecError::malformed(name, "must be a boolean")),
        }
    }

    pub fn optional_timestamp(&self, name: &str) -> Result<Option<Timestamp>, CodecError> {
        match self.optional_str(name)? {
            None => Ok(None),
            Some(s) => Timestamp::parse_rfc3339(&s)
                .map(Some)
                .map_err(|e| CodecError::malformed(name, format!("is not an RFC 3339 timestamp: {}", e))),
        }
    }

    /// Array field; absence reads as an empty slice.
    pub fn array_or_empty(&self, name: &str) -> Result<&'a [Value], CodecError> {
        match self.get(name) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(CodecError::malformed(name, "must be an array")),
        }
    }
}

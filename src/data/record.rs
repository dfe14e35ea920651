//! Record Module
//! Typed decode of one pasted JSON element into a chartable record.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("element is not an object ({0})")]
    NotAnObject(&'static str),
    #[error("missing or non-text `name`")]
    InvalidName,
    #[error("missing or non-numeric `value`")]
    InvalidValue,
}

/// One data point: a text label, a numeric magnitude and any extra fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub value: f64,
    /// Every other field of the element, in input order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Decode a parsed JSON element.
    pub fn from_json(element: &Value) -> Result<Self, RecordError> {
        let Value::Object(fields) = element else {
            return Err(RecordError::NotAnObject(json_kind(element)));
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .ok_or(RecordError::InvalidName)?
            .to_string();
        let value = fields
            .get("value")
            .and_then(Value::as_f64)
            .ok_or(RecordError::InvalidValue)?;

        let extra = fields
            .iter()
            .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "value")
            .map(|(key, val)| (key.clone(), val.clone()))
            .collect();

        Ok(Self { name, value, extra })
    }

    /// Whether the element carried a field with this key.
    pub fn has_field(&self, key: &str) -> bool {
        matches!(key, "name" | "value") || self.extra.contains_key(key)
    }

    /// Numeric value of a field, `None` when absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match key {
            "value" => Some(self.value),
            _ => self.extra.get(key).and_then(Value::as_f64),
        }
    }
}

/// Short JSON type name used in decode diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Ordered, validated records. Input order drives axis and angular order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Representative record used for optional-field detection.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Category labels in input order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

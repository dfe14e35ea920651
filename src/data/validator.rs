//! Input Validator Module
//! Turns pasted text into a validated record set plus a diagnostic trace.

use crate::data::record::{json_kind, Record, RecordSet};
use log::{debug, info};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("input must be an array literal delimited by square brackets")]
    Structural,
    #[error("invalid JSON syntax")]
    Syntax(#[source] serde_json::Error),
    #[error("input must be an array of objects")]
    NotArray,
    #[error("array must not be empty")]
    EmptyArray,
    #[error("each element must have a text `name` and a numeric `value`")]
    Schema { index: usize },
}

impl ValidationError {
    /// Taxonomy name of the failure.
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::Structural => "StructuralError",
            ValidationError::Syntax(_) => "SyntaxError",
            ValidationError::NotArray | ValidationError::EmptyArray => "TypeError",
            ValidationError::Schema { .. } => "SchemaError",
        }
    }
}

/// Human-readable log of one validation run. Advisory only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    lines: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!(target: "validator", "{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined for a preformatted panel.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Outcome of one validation call together with its own trace.
#[derive(Debug)]
pub struct Validation {
    pub result: Result<RecordSet, ValidationError>,
    pub trace: Trace,
}

/// Validate pasted text. Never panics; every failure becomes an `Err`.
pub fn validate(input: &str) -> Validation {
    let mut trace = Trace::new();
    let result = run_checks(input, &mut trace);

    match &result {
        Ok(records) => trace.push(format!(
            "Validation succeeded, {} records ready for charting",
            records.len()
        )),
        Err(e) => trace.push(format!("Final error: {}", e)),
    }

    Validation { result, trace }
}

/// Strips surrounding whitespace and byte-order marks.
fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn run_checks(input: &str, trace: &mut Trace) -> Result<RecordSet, ValidationError> {
    trace.push(format!("Input received: {}", input));

    let trimmed = trim_input(input);
    trace.push(format!("Trimmed input: {}", trimmed));

    if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
        return Err(ValidationError::Structural);
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            trace.push(format!("JSON parse error: {}", e));
            return Err(ValidationError::Syntax(e));
        }
    };
    trace.push("Parsed successfully");
    trace.push(format!("Parsed type: {}", json_kind(&parsed)));
    trace.push(format!("Is array: {}", parsed.is_array()));
    trace.push(format!(
        "Content: {}",
        serde_json::to_string_pretty(&parsed).unwrap_or_default()
    ));

    let Value::Array(elements) = parsed else {
        trace.push("Parsed value is not an array");
        return Err(ValidationError::NotArray);
    };

    if elements.is_empty() {
        trace.push("Array is empty");
        return Err(ValidationError::EmptyArray);
    }

    let mut records = Vec::with_capacity(elements.len());
    let mut first_rejected = None;

    for (index, element) in elements.iter().enumerate() {
        match Record::from_json(element) {
            Ok(record) => records.push(record),
            Err(e) => {
                trace.push(format!(
                    "Element {} rejected ({}): {}",
                    index,
                    e,
                    serde_json::to_string(element).unwrap_or_default()
                ));
                first_rejected.get_or_insert(index);
            }
        }
    }

    if let Some(index) = first_rejected {
        return Err(ValidationError::Schema { index });
    }

    Ok(RecordSet::new(records))
}

/// Kind of the input state, for transition logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Empty,
    Valid,
    Invalid,
}

/// Per-edit state of the text input.
#[derive(Debug, Default)]
pub enum InputState {
    #[default]
    Empty,
    Valid {
        records: RecordSet,
        trace: Trace,
    },
    Invalid {
        error: ValidationError,
        trace: Trace,
    },
}

impl InputState {
    /// Recompute the state from the full input text.
    pub fn evaluate(input: &str) -> Self {
        if trim_input(input).is_empty() {
            return InputState::Empty;
        }

        let Validation { result, trace } = validate(input);
        match result {
            Ok(records) => InputState::Valid { records, trace },
            Err(error) => InputState::Invalid { error, trace },
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            InputState::Empty => StateKind::Empty,
            InputState::Valid { .. } => StateKind::Valid,
            InputState::Invalid { .. } => StateKind::Invalid,
        }
    }

    pub fn records(&self) -> Option<&RecordSet> {
        match self {
            InputState::Valid { records, .. } => Some(records),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            InputState::Invalid { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Trace of the last run; `None` once the input has been emptied.
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            InputState::Empty => None,
            InputState::Valid { trace, .. } | InputState::Invalid { trace, .. } => Some(trace),
        }
    }

    /// Replace `self` with the state for `input`, logging kind changes.
    pub fn update(&mut self, input: &str) {
        let previous = self.kind();
        *self = Self::evaluate(input);
        let current = self.kind();
        if previous != current {
            info!("Input state {:?} -> {:?}", previous, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> String {
        match validate(input).result {
            Ok(_) => panic!("expected invalid input: {}", input),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_empty_state() {
        let state = InputState::evaluate("");
        assert_eq!(state.kind(), StateKind::Empty);
        assert!(state.error().is_none());
        assert!(state.trace().is_none());

        assert_eq!(InputState::evaluate("  \n\t ").kind(), StateKind::Empty);
    }

    #[test]
    fn test_object_literal_fails_bracket_check() {
        let validation = validate("{not an array}");
        assert!(matches!(
            validation.result,
            Err(ValidationError::Structural)
        ));
        assert_eq!(
            reason("{not an array}"),
            "input must be an array literal delimited by square brackets"
        );
    }

    #[test]
    fn test_primitive_elements_fail_schema() {
        let validation = validate("[1, 2, 3]");
        assert!(matches!(
            validation.result,
            Err(ValidationError::Schema { index: 0 })
        ));
        let rejected = validation
            .trace
            .lines()
            .iter()
            .filter(|l| l.starts_with("Element "))
            .count();
        assert_eq!(rejected, 3);
    }

    #[test]
    fn test_two_months_are_valid_in_order() {
        let validation =
            validate(r#"[{"name":"Jan","value":100},{"name":"Feb","value":120}]"#);
        let records = validation.result.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records.names(), vec!["Jan", "Feb"]);
        assert_eq!(records.as_slice()[0].value, 100.0);
        assert_eq!(records.as_slice()[1].value, 120.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let validation = validate("\n   [{\"name\":\"A\",\"value\":1}]  \n");
        assert!(validation.result.is_ok());
        assert_eq!(validation.trace.lines()[1], "Trimmed input: [{\"name\":\"A\",\"value\":1}]");
    }

    #[test]
    fn test_syntax_error_has_stable_message_and_source() {
        let validation = validate("[{name: 1}]");
        let error = validation.result.unwrap_err();

        assert_eq!(error.to_string(), "invalid JSON syntax");
        assert_eq!(error.category(), "SyntaxError");
        assert!(std::error::Error::source(&error).is_some());
        assert!(validation
            .trace
            .lines()
            .iter()
            .any(|l| l.starts_with("JSON parse error: ")));
    }

    #[test]
    fn test_out_of_range_number_is_syntax_error() {
        assert_eq!(reason(r#"[{"name":"A","value":1e400}]"#), "invalid JSON syntax");
        assert!(validate(r#"[{"name":"A","value":1e308}]"#).result.is_ok());
    }

    #[test]
    fn test_leading_byte_order_mark_is_trimmed() {
        let validation = validate("\u{feff}[{\"name\":\"A\",\"value\":1}]");
        assert_eq!(validation.result.map(|r| r.len()).ok(), Some(1));
        assert_eq!(validation.trace.lines()[1], "Trimmed input: [{\"name\":\"A\",\"value\":1}]");

        assert_eq!(InputState::evaluate("\u{feff}  ").kind(), StateKind::Empty);
    }

    #[test]
    fn test_bracketed_but_mismatched_is_syntax_error() {
        assert_eq!(reason("[1, 2]]"), "invalid JSON syntax");
        assert_eq!(reason("[ ] ]"), "invalid JSON syntax");
    }

    #[test]
    fn test_empty_array_is_type_error() {
        let error = validate("[]").result.unwrap_err();
        assert!(matches!(error, ValidationError::EmptyArray));
        assert_eq!(error.category(), "TypeError");
        assert_eq!(error.to_string(), "array must not be empty");
    }

    #[test]
    fn test_one_bad_element_invalidates_all() {
        let validation = validate(
            r#"[{"name":"A","value":1},{"name":"B","value":"2"},{"name":"C","value":3}]"#,
        );
        assert!(matches!(
            validation.result,
            Err(ValidationError::Schema { index: 1 })
        ));
        assert_eq!(
            reason(r#"[{"name":"A","value":1},null]"#),
            "each element must have a text `name` and a numeric `value`"
        );
        assert_eq!(
            reason(r#"[["A", 1]]"#),
            "each element must have a text `name` and a numeric `value`"
        );
    }

    #[test]
    fn test_radar_input_keeps_full_mark() {
        let records = validate(r#"[{"name":"Str","value":80,"fullMark":100}]"#)
            .result
            .unwrap();
        let first = records.first().unwrap();
        assert_eq!(first.number("fullMark"), Some(100.0));
    }

    #[test]
    fn test_validation_is_idempotent_with_fresh_trace() {
        let input = r#"[{"name":"A","value":1}, 5]"#;
        let first = validate(input);
        let second = validate(input);

        assert_eq!(
            first.result.as_ref().unwrap_err().to_string(),
            second.result.as_ref().unwrap_err().to_string()
        );
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.trace.lines()[0], format!("Input received: {}", input));
    }

    #[test]
    fn test_trace_records_steps() {
        let validation = validate(r#"[{"name":"A","value":1}]"#);
        let lines = validation.trace.lines();

        assert!(lines.contains(&"Parsed successfully".to_string()));
        assert!(lines.contains(&"Parsed type: array".to_string()));
        assert!(lines.contains(&"Is array: true".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("Content: [")));
        assert_eq!(
            lines.last().unwrap(),
            "Validation succeeded, 1 records ready for charting"
        );
    }

    #[test]
    fn test_state_machine_cycles() {
        let mut state = InputState::default();
        assert_eq!(state.kind(), StateKind::Empty);

        state.update(r#"[{"name":"A","value":1}]"#);
        assert_eq!(state.kind(), StateKind::Valid);
        assert_eq!(state.records().map(RecordSet::len), Some(1));

        state.update(r#"[{"name":"A","value":1}"#);
        assert_eq!(state.kind(), StateKind::Invalid);
        assert!(state.records().is_none());
        assert_eq!(state.error().map(|e| e.category()), Some("SyntaxError"));
        assert!(state.trace().is_some());

        state.update("");
        assert_eq!(state.kind(), StateKind::Empty);
        assert!(state.trace().is_none());
    }

    #[test]
    fn test_valid_inputs_match_parsed_json() {
        let inputs = [
            r#"[{"name":"a","value":0}]"#,
            r#"[{"name":"a","value":-1.5},{"name":"b","value":1e3,"extra":true}]"#,
            r#"[{"value":7,"name":"z"},{"name":"y","value":8},{"name":"x","value":9}]"#,
        ];
        for input in inputs {
            let parsed: Vec<serde_json::Value> = serde_json::from_str(input).unwrap();
            let records = validate(input).result.unwrap();

            assert_eq!(records.len(), parsed.len());
            for (record, element) in records.iter().zip(&parsed) {
                assert_eq!(record.name, element["name"].as_str().unwrap());
                assert_eq!(record.value, element["value"].as_f64().unwrap());
                assert_eq!(serde_json::to_value(record).unwrap().as_object().unwrap().len(),
                    element.as_object().unwrap().len());
            }
        }
    }
}

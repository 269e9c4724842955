use crate::core::field_validator::RequestField;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single field-level constraint failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Violation {
    /// Field that failed validation
    pub field: RequestField,

    /// Offending value exactly as supplied by the caller
    pub value: Value,

    /// Human-readable constraint description
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value '{}' at '{}' failed to satisfy constraint: Member must {}",
            render_value(&self.value),
            self.field,
            self.message
        )
    }
}

/// Aggregated validation failure for one API request.
///
/// Raised only when at least one field violated its constraint; the
/// violations keep the order in which the fields were supplied so the
/// rendered message is deterministic.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an aggregated error from the collected violations. Only the
    /// validator constructs these, and only with a non-empty list.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// All violations, in input field order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{} validation error{} detected: ", count, plural)?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Strings render bare in error messages; everything else renders as JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

//! Validation rules for driver payloads and standings positions.
//!
//! # Responsibilities
//! - Check shape and bounds of create/update payloads
//! - Check a raw position segment against the current collection size
//! - Normalize accepted payloads into typed values
//!
//! # Design Decisions
//! - Pure functions: no side effects, deterministic for a given input
//! - Returns all violations, not just the first
//! - JSON types are strict: `"12"` is not a number, `12.5` is not an integer

use serde::Serialize;
use serde_json::{Map, Value};

use crate::standings::driver::{
    DriverPatch, NewDriver, POINTS_MAX, POINTS_MIN, TEXT_MAX_CHARS, TEXT_MIN_CHARS,
};

const FIELDS: [&str; 3] = ["name", "time", "points"];

/// Field name used when the violation concerns the whole value.
const ROOT: &str = "value";

/// The rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    #[serde(rename = "any.required")]
    Required,
    #[serde(rename = "string.base")]
    StringBase,
    #[serde(rename = "string.empty")]
    StringEmpty,
    #[serde(rename = "string.min")]
    StringMin,
    #[serde(rename = "string.max")]
    StringMax,
    #[serde(rename = "number.base")]
    NumberBase,
    #[serde(rename = "number.integer")]
    NumberInteger,
    #[serde(rename = "number.min")]
    NumberMin,
    #[serde(rename = "number.max")]
    NumberMax,
    #[serde(rename = "object.base")]
    ObjectBase,
    #[serde(rename = "object.unknown")]
    ObjectUnknown,
    #[serde(rename = "object.min")]
    ObjectMin,
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub details: Vec<Violation>,
}

impl ValidationFailure {
    /// Build a failure from a single violation.
    pub fn single(field: &str, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            details: vec![Violation {
                field: field.to_string(),
                rule,
                message: message.into(),
            }],
        }
    }

    /// True if some violation references `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.details.iter().any(|v| v.field == field)
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.details.iter().enumerate() {
            if i > 0 {
                write!(f, ". ")?;
            }
            write!(f, "{}", v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Accumulates violations across a payload.
#[derive(Default)]
struct Violations(Vec<Violation>);

impl Violations {
    fn push(&mut self, field: &str, rule: Rule, message: String) {
        self.0.push(Violation {
            field: field.to_string(),
            rule,
            message,
        });
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationFailure> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ValidationFailure { details: self.0 })
        }
    }

    /// Check a bounded text field. Returns the text only if it passed.
    fn text(&mut self, obj: &Map<String, Value>, field: &str, required: bool) -> Option<String> {
        match obj.get(field) {
            None => {
                if required {
                    self.push(field, Rule::Required, format!("\"{}\" is required", field));
                }
                None
            }
            Some(Value::String(s)) => {
                let chars = s.chars().count();
                if s.is_empty() {
                    self.push(
                        field,
                        Rule::StringEmpty,
                        format!("\"{}\" is not allowed to be empty", field),
                    );
                    None
                } else if chars < TEXT_MIN_CHARS {
                    self.push(
                        field,
                        Rule::StringMin,
                        format!(
                            "\"{}\" length must be at least {} characters long",
                            field, TEXT_MIN_CHARS
                        ),
                    );
                    None
                } else if chars > TEXT_MAX_CHARS {
                    self.push(
                        field,
                        Rule::StringMax,
                        format!(
                            "\"{}\" length must be less than or equal to {} characters long",
                            field, TEXT_MAX_CHARS
                        ),
                    );
                    None
                } else {
                    Some(s.clone())
                }
            }
            Some(_) => {
                self.push(field, Rule::StringBase, format!("\"{}\" must be a string", field));
                None
            }
        }
    }

    /// Check `points` if present. Returns the value only if it passed.
    fn points(&mut self, obj: &Map<String, Value>) -> Option<u32> {
        let value = obj.get("points")?;
        let Some(n) = value.as_f64() else {
            self.push("points", Rule::NumberBase, "\"points\" must be a number".to_string());
            return None;
        };
        self.integer_in_range("points", n, POINTS_MIN as f64, POINTS_MAX as f64)
            .map(|p| p as u32)
    }

    fn integer_in_range(&mut self, field: &str, n: f64, min: f64, max: f64) -> Option<i64> {
        let before = self.0.len();
        if n.fract() != 0.0 {
            self.push(field, Rule::NumberInteger, format!("\"{}\" must be an integer", field));
        }
        if n < min {
            self.push(
                field,
                Rule::NumberMin,
                format!("\"{}\" must be greater than or equal to {}", field, min),
            );
        }
        if n > max {
            self.push(
                field,
                Rule::NumberMax,
                format!("\"{}\" must be less than or equal to {}", field, max),
            );
        }
        (self.0.len() == before).then_some(n as i64)
    }

    fn unknown_keys(&mut self, obj: &Map<String, Value>) {
        for key in obj.keys().filter(|k| !FIELDS.contains(&k.as_str())) {
            self.push(key, Rule::ObjectUnknown, format!("\"{}\" is not allowed", key));
        }
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationFailure> {
    payload.as_object().ok_or_else(|| {
        ValidationFailure::single(
            ROOT,
            Rule::ObjectBase,
            format!("\"{}\" must be of type object", ROOT),
        )
    })
}

/// Validate a creation payload.
///
/// `name` and `time` are required; `points` defaults to 0.
pub fn validate_create(payload: &Value) -> Result<NewDriver, ValidationFailure> {
    let obj = as_object(payload)?;
    let mut violations = Violations::default();

    let name = violations.text(obj, "name", true);
    let time = violations.text(obj, "time", true);
    let points = violations.points(obj);
    violations.unknown_keys(obj);

    match (name, time) {
        (Some(name), Some(time)) => violations.finish(NewDriver {
            name,
            time,
            points: points.unwrap_or(0),
        }),
        // A missing required field always left a violation behind.
        _ => Err(ValidationFailure { details: violations.0 }),
    }
}

/// Validate a partial update payload. At least one known field must be present.
pub fn validate_update(payload: &Value) -> Result<DriverPatch, ValidationFailure> {
    let obj = as_object(payload)?;
    let mut violations = Violations::default();

    if !FIELDS.iter().any(|f| obj.contains_key(*f)) {
        violations.push(
            ROOT,
            Rule::ObjectMin,
            format!("\"{}\" must contain at least one of [name, time, points]", ROOT),
        );
    }

    let patch = DriverPatch {
        name: violations.text(obj, "name", false),
        time: violations.text(obj, "time", false),
        points: violations.points(obj),
    };
    violations.unknown_keys(obj);

    violations.finish(patch)
}

/// Validate a raw 1-based position against a collection of `size` items.
pub fn validate_position(raw: &str, size: usize) -> Result<usize, ValidationFailure> {
    let mut violations = Violations::default();

    let n = match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            return Err(ValidationFailure::single(
                ROOT,
                Rule::NumberBase,
                format!("\"{}\" must be a number", ROOT),
            ))
        }
    };

    let position = violations.integer_in_range(ROOT, n, 1.0, size as f64);
    match position {
        Some(p) => violations.finish(p as usize),
        None => Err(ValidationFailure { details: violations.0 }),
    }
}

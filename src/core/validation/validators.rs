//! Reusable field validators
//!
//! Each validator receives the wire field name and its value (`null` when the
//! field is absent) and returns a human-readable message on rejection.

use crate::core::date::{DateInput, parse_date};
use serde_json::Value;

/// Validator: field is present and not null
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: field is present and, if a string, not blank
pub fn not_blank() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("'{}' is required", field)),
        Value::String(s) if s.trim().is_empty() => Err(format!("'{}' must not be blank", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match number(value) {
        Some(num) if num <= 0.0 => Err(format!("'{}' must be positive (value: {})", field, num)),
        _ => Ok(()),
    }
}

/// Validator: number must be zero or more
pub fn non_negative() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match number(value) {
        Some(num) if num < 0.0 => Err(format!(
            "'{}' must not be negative (value: {})",
            field, num
        )),
        _ => Ok(()),
    }
}

/// Validator: present values must be numeric (numbers or numeric strings)
pub fn numeric() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null | Value::Number(_) => Ok(()),
        Value::String(_) if number(value).is_some() => Ok(()),
        other => Err(format!("'{}' must be a number (value: {})", field, other)),
    }
}

/// Validator: string value must be one of `allowed`
pub fn in_list(
    allowed: &'static [&'static str],
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value.as_str() {
        Some(s) if !allowed.contains(&s) => Err(format!(
            "'{}' must be one of {:?} (value: {})",
            field, allowed, s
        )),
        _ => Ok(()),
    }
}

/// Validator: present, non-empty values must normalize to a valid date
pub fn date() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() || value.as_str().is_some_and(str::is_empty) {
            return Ok(());
        }
        if parse_date(&DateInput::from(value)).is_valid() {
            Ok(())
        } else {
            Err(format!("'{}' is not a valid date (value: {})", field, value))
        }
    }
}

/// Numbers and numeric strings as `f64`; form inputs post numbers as text
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

//! Reusable field filters
//!
//! These filters normalize incoming field values before validation

use serde_json::{Value, json};

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_str() {
        Some(s) => Value::String(s.trim().to_string()),
        None => value,
    }
}

/// Filter: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_str() {
        Some(s) => Value::String(s.to_lowercase()),
        None => value,
    }
}

/// Filter: parse numeric strings (`"12.5"` → `12.5`); empty strings become null
pub fn to_number() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match &value {
        Value::String(s) if s.trim().is_empty() => Value::Null,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(num) => json!(num),
            Err(_) => value,
        },
        _ => value,
    }
}

/// Filter: empty strings become null (optional selects and date inputs)
pub fn empty_as_null() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_str() {
        Some(s) if s.trim().is_empty() => Value::Null,
        _ => value,
    }
}

/// Filter: round number to specified decimal places
pub fn round_decimals(decimals: u32) -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    move |_: &str, value: Value| match value.as_f64() {
        Some(num) => {
            let factor = 10_f64.powi(decimals as i32);
            json!((num * factor).round() / factor)
        }
        None => value,
    }
}

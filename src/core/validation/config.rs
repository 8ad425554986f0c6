//! Per-record validation configuration

use crate::core::entity::Fields;
use crate::core::error::{FieldValidationError, ValidationError};
use serde_json::Value;
use std::sync::Arc;

type FilterFn = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;
type ValidatorFn = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Filters and validators applied to a field map before it reaches a store.
///
/// Filters run first, in registration order, on fields that are present.
/// Validators then run on every configured field; absent fields are seen as
/// `null` unless the config is [`partial`](Self::partial), in which case only
/// present fields are checked (updates send just the changed fields).
#[derive(Clone)]
pub struct RecordValidationConfig {
    pub entity_type: String,
    partial: bool,
    filters: Vec<(String, FilterFn)>,
    validators: Vec<(String, ValidatorFn)>,
}

impl RecordValidationConfig {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            partial: false,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Only validate fields present in the payload
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    pub fn filter<F>(mut self, field: &str, filter: F) -> Self
    where
        F: Fn(&str, Value) -> Value + Send + Sync + 'static,
    {
        self.filters.push((field.to_string(), Arc::new(filter)));
        self
    }

    pub fn validate<V>(mut self, field: &str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.push((field.to_string(), Arc::new(validator)));
        self
    }

    /// Apply filters, then validators, returning the filtered field map
    pub fn validate_and_filter(&self, mut fields: Fields) -> Result<Fields, ValidationError> {
        for (field, filter) in &self.filters {
            if let Some(value) = fields.remove(field) {
                fields.insert(field.clone(), filter(field, value));
            }
        }

        let mut errors = Vec::new();
        for (field, validator) in &self.validators {
            let value = match fields.get(field) {
                Some(value) => value,
                None if self.partial => continue,
                None => &Value::Null,
            };
            if let Err(message) = validator(field, value) {
                errors.push(FieldValidationError {
                    field: field.clone(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::FieldErrors {
                entity_type: self.entity_type.clone(),
                errors,
            })
        }
    }
}

impl std::fmt::Debug for RecordValidationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordValidationConfig")
            .field("entity_type", &self.entity_type)
            .field("partial", &self.partial)
            .field("filters", &self.filters.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .field(
                "validators",
                &self.validators.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

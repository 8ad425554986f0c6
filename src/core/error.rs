//! Typed error handling for farmdesk
//!
//! Store and configuration failures are grouped into categories so the
//! dashboard can show a human-readable message while callers still match on
//! the specific failure.
//!
//! # Error Categories
//!
//! - [`RecordError`]: record lookups and (de)serialization at the store boundary
//! - [`ValidationError`]: field rules rejected a create/update payload
//! - [`StorageError`]: the backing store itself failed
//! - [`ConfigError`]: configuration or seed fixture loading failed
//!
//! Projection and date normalization never fail and have no error type.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.create(fields).await {
//!     Ok(Some(task)) => println!("created #{}", task.id),
//!     Ok(None) => println!("store declined the record"),
//!     Err(FarmError::Validation(e)) => toast(e.to_string()),
//!     Err(e) => eprintln!("{}", e.to_response().message),
//! }
//! ```

use crate::core::entity::RecordId;
use serde::Serialize;
use thiserror::Error;

/// Result alias used by every fallible farmdesk API
pub type Result<T, E = FarmError> = std::result::Result<T, E>;

/// The main error type for farmdesk
#[derive(Debug, Error)]
pub enum FarmError {
    /// Record-level errors (lookup, serialization)
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Field validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backing store errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Opaque failure from a custom store or provider implementation
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error payload handed to the UI error state
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl FarmError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FarmError::Record(e) => e.error_code(),
            FarmError::Validation(_) => "VALIDATION_ERROR",
            FarmError::Storage(_) => "STORAGE_ERROR",
            FarmError::Config(_) => "CONFIG_ERROR",
            FarmError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            FarmError::Record(RecordError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            FarmError::Validation(ValidationError::FieldErrors { errors, .. }) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: RecordId },

    /// Field map could not be turned into a record (or back)
    #[error("Failed to serialize/deserialize {entity_type}: {message}")]
    Serialization {
        entity_type: String,
        message: String,
    },
}

impl RecordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::Serialization { .. } => "RECORD_SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors raised by field rules before a record reaches the store
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields were rejected
    #[error("Invalid {entity_type}: {}", summarize(.errors))]
    FieldErrors {
        entity_type: String,
        errors: Vec<FieldValidationError>,
    },
}

fn summarize(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a backing store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Lock on shared state was poisoned
    #[error("{backend} store lock poisoned: {message}")]
    Poisoned { backend: String, message: String },

    /// Backend could not be reached
    #[error("{backend} store unavailable: {message}")]
    Unavailable { backend: String, message: String },

    /// No id left above the current maximum
    #[error("{backend} store has no {entity_type} id left after {max_id}")]
    IdsExhausted {
        backend: String,
        entity_type: String,
        max_id: RecordId,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration or fixtures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration or fixture file
    #[error("Failed to parse {}: {message}", file_label(.file))]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// File could not be read
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    /// A value is present but unusable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

fn file_label(file: &Option<String>) -> &str {
    file.as_deref().unwrap_or("configuration")
}

impl From<serde_yaml::Error> for FarmError {
    fn from(err: serde_yaml::Error) -> Self {
        FarmError::Config(ConfigError::Parse {
            file: None,
            message: err.to_string(),
        })
    }
}

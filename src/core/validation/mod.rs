//! Validation and filtering system
//!
//! Records declare their field rules through
//! [`Record::validation_config`](crate::core::Record::validation_config); stores
//! run them on every create/update payload before touching their collection.

pub mod config;
pub mod filters;
pub mod validators;

pub use config::RecordValidationConfig;

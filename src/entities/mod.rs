//! Farm record types
//!
//! Each record maps the backend's wire names (`Id`, `*_c` custom fields) onto
//! plain Rust fields and implements [`Record`](crate::core::Record) through
//! [`impl_record!`](crate::impl_record).

pub mod crop;
pub mod equipment;
pub mod farm;
pub mod macros;
pub mod task;
pub mod transaction;

pub use crop::{Crop, CropStatus};
pub use equipment::Equipment;
pub use farm::Farm;
pub use task::{Priority, Task};
pub use transaction::{Transaction, TransactionType};

use crate::core::entity::Fields;
use chrono::Utc;
use serde_json::Value;

/// Stamp `created_at_c` with the current time, overwriting any caller value
pub(crate) fn stamp_created_at(fields: &mut Fields) {
    fields.insert(
        "created_at_c".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
}

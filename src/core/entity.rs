//! Record trait defining the core abstraction for all farm entities

use crate::core::field::FieldValue;
use crate::core::validation::RecordValidationConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Unique integer identifier carried by every record (`Id` on the wire)
pub type RecordId = i64;

/// Wire field map handed to `create`/`update` (e.g. `{"title_c": "Irrigate"}`)
pub type Fields = Map<String, Value>;

/// Wire name of the identifier field
pub const ID_FIELD: &str = "Id";

/// Base trait for all records handled by a [`RecordStore`](crate::core::RecordStore).
///
/// A record is a plain snapshot keyed by an integer `Id`. Its serde
/// representation is the backend's wire format (custom attributes suffixed
/// with `_c`), which is what lets stores merge partial field maps into it.
pub trait Record:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The plural resource name (e.g., "tasks", "crops")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "task", "crop")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> RecordId;

    /// Wire names of the fields matched by free-text [`search`](crate::core::RecordStore::search)
    fn searchable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Fill in values the store owns on creation (timestamps, flags).
    ///
    /// Called before validation with the caller's fields. Values set here
    /// replace whatever the caller sent.
    fn apply_create_defaults(_fields: &mut Fields) {}

    /// Field rules and filters for a store operation (`"create"` or `"update"`)
    fn validation_config(_operation: &str) -> RecordValidationConfig {
        RecordValidationConfig::new(Self::resource_name_singular())
    }

    /// Get the value of a wire field by name
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let Ok(Value::Object(map)) = serde_json::to_value(self) else {
            return None;
        };
        map.get(field).map(FieldValue::from)
    }
}

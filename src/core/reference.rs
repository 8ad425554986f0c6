//! Reference fields pointing at another record
//!
//! The backend hands out references either as a bare id (`"farm_c": 3`), as
//! a numeric string coming from a form select (`"crop_c": "3"`), or expanded
//! into a lookup object (`"farm_c": {"Id": 3, "Name": "Green Acres"}`).
//! Records keep only `Option<RecordId>`; resolving the referenced record is an
//! explicit store lookup.
//!
//! ```rust,ignore
//! #[serde(rename = "farm_c", default, deserialize_with = "reference::deserialize")]
//! pub farm_id: Option<RecordId>,
//! ```

use crate::core::entity::{ID_FIELD, RecordId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Serde adapter normalizing any reference shape to `Option<RecordId>`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(reference_id(&value))
}

/// Extract the referenced id, or `None` for empty or unusable values
pub fn reference_id(value: &Value) -> Option<RecordId> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<RecordId>().ok(),
        Value::Object(map) => map.get(ID_FIELD).and_then(reference_id),
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    };
    id.filter(|id| *id > 0)
}

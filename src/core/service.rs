//! Store trait for record CRUD operations

use crate::core::entity::{Fields, Record, RecordId};
use crate::core::error::{RecordError, Result};
use crate::core::field::FieldValue;
use crate::entities::Task;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

/// Wire name of the farm reference shared by crops, tasks and transactions
pub const FARM_FIELD: &str = "farm_c";

/// Service trait for managing one record type
///
/// Implementations own the collection and hand out snapshots; callers never
/// hold references into the store. The dashboard is agnostic to whether the
/// records live in memory or behind a remote API.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// List all records in storage order
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Get a record by id
    async fn get_by_id(&self, id: RecordId) -> Result<Option<T>>;

    /// Create a record from a wire field map
    ///
    /// The store assigns the id and applies the record's create defaults and
    /// validation. `Ok(None)` means the backend accepted the call but
    /// returned no record.
    async fn create(&self, fields: Fields) -> Result<Option<T>>;

    /// Shallow-merge `fields` into an existing record
    ///
    /// Returns `Ok(None)` when no record has this id.
    async fn update(&self, id: RecordId, fields: Fields) -> Result<Option<T>>;

    /// Delete a record, returning whether it existed
    async fn delete(&self, id: RecordId) -> Result<bool>;

    /// Get a record by id, treating a missing id as an error
    async fn require(&self, id: RecordId) -> Result<T> {
        self.get_by_id(id).await?.ok_or_else(|| {
            RecordError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id,
            }
            .into()
        })
    }

    /// Records whose wire field `field` equals `value`
    async fn find_by(&self, field: &str, value: &FieldValue) -> Result<Vec<T>> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|record| {
                record
                    .field_value(field)
                    .is_some_and(|v| v.loosely_equals(value))
            })
            .collect())
    }

    /// Records attached to a farm
    async fn get_by_farm(&self, farm_id: RecordId) -> Result<Vec<T>> {
        self.find_by(FARM_FIELD, &FieldValue::Integer(farm_id)).await
    }

    /// Case-insensitive substring search over the record's searchable fields
    ///
    /// A blank query returns every record.
    async fn search(&self, query: &str) -> Result<Vec<T>> {
        let needle = query.trim();
        let records = self.get_all().await?;
        if needle.is_empty() {
            return Ok(records);
        }

        Ok(records
            .into_iter()
            .filter(|record| {
                T::searchable_fields().iter().any(|field| {
                    record
                        .field_value(field)
                        .is_some_and(|v| v.contains_text(needle))
                })
            })
            .collect())
    }
}

/// Task-only store operations
#[async_trait]
pub trait TaskStoreExt: RecordStore<Task> {
    /// Flip a task's completion, stamping or clearing `completed_at`
    ///
    /// Returns `Ok(None)` when no task has this id.
    async fn toggle_complete(&self, id: RecordId) -> Result<Option<Task>> {
        let Some(task) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let completed = !task.completed;
        let completed_at = if completed {
            Value::String(Utc::now().to_rfc3339())
        } else {
            Value::Null
        };

        let mut fields = Fields::new();
        fields.insert("completed_c".to_string(), Value::Bool(completed));
        fields.insert("completed_at_c".to_string(), completed_at);

        tracing::debug!(id, completed, "toggling task completion");
        self.update(id, fields).await
    }
}

impl<S: RecordStore<Task> + ?Sized> TaskStoreExt for S {}

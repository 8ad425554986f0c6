//! In-memory implementation of RecordStore for the dashboard and tests

use crate::core::entity::{Fields, ID_FIELD, Record, RecordId};
use crate::core::error::{ConfigError, RecordError, Result, StorageError};
use crate::core::RecordStore;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const BACKEND: &str = "in-memory";

/// In-memory record store
///
/// Records are kept ordered by id behind an `RwLock`; clones share the same
/// collection. Ids are assigned as `max(Id) + 1` under the write lock, so
/// concurrent creates never collide.
#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    records: Arc<RwLock<BTreeMap<RecordId, T>>>,
}

impl<T> Clone for InMemoryRecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> InMemoryRecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store seeded with existing records
    ///
    /// A later record with a duplicate id replaces the earlier one.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Seed from a JSON array of wire records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<T> = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            file: None,
            message: format!("{} fixture: {}", T::resource_name(), e),
        })?;
        tracing::debug!(
            entity = %T::resource_name_singular(),
            count = records.len(),
            "seeded in-memory store"
        );
        Ok(Self::with_records(records))
    }

    /// Seed from a JSON fixture file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            crate::core::FarmError::Config(ConfigError::Parse { message, .. }) => {
                ConfigError::Parse {
                    file: Some(path.display().to_string()),
                    message,
                }
                .into()
            }
            other => other,
        })
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<RecordId, T>>> {
        self.records.read().map_err(|e| {
            StorageError::Poisoned {
                backend: BACKEND.to_string(),
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<RecordId, T>>> {
        self.records.write().map_err(|e| {
            StorageError::Poisoned {
                backend: BACKEND.to_string(),
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_fields<T: Record>(record: &T) -> Result<Fields> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RecordError::Serialization {
            entity_type: T::resource_name_singular().to_string(),
            message: "record did not serialize to an object".to_string(),
        }
        .into()),
        Err(e) => Err(RecordError::Serialization {
            entity_type: T::resource_name_singular().to_string(),
            message: e.to_string(),
        }
        .into()),
    }
}

fn from_fields<T: Record>(fields: Fields) -> Result<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        RecordError::Serialization {
            entity_type: T::resource_name_singular().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn next_id<T: Record>(records: &BTreeMap<RecordId, T>) -> Result<RecordId> {
    match records.keys().next_back() {
        None => Ok(1),
        Some(&max) => max.checked_add(1).ok_or_else(|| {
            StorageError::IdsExhausted {
                backend: BACKEND.to_string(),
                entity_type: T::resource_name_singular().to_string(),
                max_id: max,
            }
            .into()
        }),
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<T>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn create(&self, mut fields: Fields) -> Result<Option<T>> {
        fields.remove(ID_FIELD);
        T::apply_create_defaults(&mut fields);
        let mut fields = T::validation_config("create").validate_and_filter(fields)?;

        let mut records = self.write()?;
        let id = next_id::<T>(&records)?;
        fields.insert(ID_FIELD.to_string(), Value::from(id));

        let record: T = from_fields(fields)?;
        records.insert(id, record.clone());

        tracing::debug!(entity = %T::resource_name_singular(), id, "created record");
        Ok(Some(record))
    }

    async fn update(&self, id: RecordId, fields: Fields) -> Result<Option<T>> {
        let mut fields = fields;
        fields.remove(ID_FIELD);
        let changes = T::validation_config("update").validate_and_filter(fields)?;

        let mut records = self.write()?;
        let Some(existing) = records.get(&id) else {
            tracing::debug!(entity = %T::resource_name_singular(), id, "update of unknown record");
            return Ok(None);
        };

        let mut merged = to_fields(existing)?;
        merged.extend(changes);
        merged.insert(ID_FIELD.to_string(), Value::from(id));

        let record: T = from_fields(merged)?;
        records.insert(id, record.clone());

        tracing::debug!(entity = %T::resource_name_singular(), id, "updated record");
        Ok(Some(record))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let removed = self.write()?.remove(&id).is_some();
        tracing::debug!(entity = %T::resource_name_singular(), id, removed, "deleted record");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FarmError;
    use crate::core::TaskStoreExt;
    use crate::entities::{Crop, CropStatus, Priority, Task};
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let store = InMemoryRecordStore::with_records(vec![
            Task::new(3, "a", Priority::Low, None::<&str>),
            Task::new(7, "b", Priority::Low, None::<&str>),
        ]);

        let created = store
            .create(fields(json!({"title_c": "Mulch", "priority_c": "High"})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(created.priority, Priority::High);
        assert!(!created.completed);
        assert!(created.created_at.normalize().is_valid());
    }

    #[tokio::test]
    async fn test_create_after_max_id_fails_cleanly() {
        let store = InMemoryRecordStore::with_records(vec![Task::new(
            RecordId::MAX,
            "x",
            Priority::Low,
            None::<&str>,
        )]);

        let err = store
            .create(fields(json!({"title_c": "y", "priority_c": "low"})))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FarmError::Storage(StorageError::IdsExhausted { max_id, .. }) if max_id == RecordId::MAX
        ));
        assert_eq!(err.error_code(), "STORAGE_ERROR");

        // the store stays usable
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.delete(RecordId::MAX).await.unwrap());
        let created = store
            .create(fields(json!({"title_c": "y", "priority_c": "low"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_in_empty_store_starts_at_one() {
        let store = InMemoryRecordStore::<Crop>::new();
        let crop = store
            .create(fields(json!({"name_c": "Corn"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(crop.id, 1);
        assert_eq!(crop.status, CropStatus::Planted);
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let store = InMemoryRecordStore::<Crop>::new();
        let crop = store
            .create(fields(json!({"Id": 99, "name_c": "Beans"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(crop.id, 1);
    }

    #[tokio::test]
    async fn test_update_merges_shallowly() {
        let mut task = Task::new(1, "Irrigate", Priority::High, "2024-05-01");
        task.description = Some("north field".to_string());
        let store = InMemoryRecordStore::with_records(vec![task]);

        let updated = store
            .update(1, fields(json!({"title_c": "Irrigate twice"})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Irrigate twice");
        assert_eq!(updated.description.as_deref(), Some("north field"));
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(store.get_by_id(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_an_error() {
        let store = InMemoryRecordStore::<Task>::new();
        assert!(store.update(4, Fields::new()).await.unwrap().is_none());
        assert!(!store.delete(4).await.unwrap());
        assert!(store.get_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_validation_failure_stores_nothing() {
        let store = InMemoryRecordStore::<Task>::new();
        let err = store
            .create(fields(json!({"title_c": "  ", "priority_c": "urgent"})))
            .await
            .unwrap_err();

        assert!(matches!(err, FarmError::Validation(_)));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_toggle_complete_round_trip() {
        let store = InMemoryRecordStore::with_records(vec![Task::new(
            1,
            "Weed",
            Priority::Low,
            None::<&str>,
        )]);

        let done = store.toggle_complete(1).await.unwrap().unwrap();
        assert!(done.completed);
        assert!(done.completed_at.normalize().is_valid());

        let undone = store.toggle_complete(1).await.unwrap().unwrap();
        assert!(!undone.completed);
        assert!(undone.completed_at.is_absent());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryRecordStore::<Crop>::new();
        let other = store.clone();
        store
            .create(fields(json!({"name_c": "Squash"})))
            .await
            .unwrap();
        assert_eq!(other.len().unwrap(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_bad_fixture() {
        let err = InMemoryRecordStore::<Crop>::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FarmError::Config(ConfigError::Parse { .. })));
    }
}

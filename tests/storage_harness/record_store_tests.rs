//! Macro-generated test suite for `RecordStore<Task>` contract validation.
//!
//! The `record_store_tests!` macro generates a test module that validates any
//! `RecordStore<Task>` implementation against the store contract: CRUD, id
//! assignment, create defaults, shallow-merge updates, unknown ids, reference
//! normalization, validation failures, derived lookups and concurrent creates.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use farmdesk::storage::InMemoryRecordStore;
//!
//! record_store_tests!(InMemoryRecordStore::<Task>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify fields and defaults
//! - `test_ids_are_max_plus_one`: ids count up from 1 and follow the current max
//! - `test_create_ignores_caller_id_and_flags`: store owns `Id`, `completed_c`
//! - `test_get_nonexistent`: unknown id returns None
//! - `test_get_all_empty` / `test_get_all_multiple`
//! - `test_update_merges_shallowly`: untouched fields survive
//! - `test_update_nonexistent`: unknown id returns `Ok(None)`
//! - `test_delete_existing` / `test_delete_nonexistent`
//!
//! ## Boundary
//! - `test_reference_normalization`: raw, string and expanded references
//! - `test_validation_failure`: rejected payload stores nothing
//! - `test_update_validation_failure`: rejected change leaves record intact
//!
//! ## Lookups
//! - `test_toggle_complete`, `test_search`, `test_get_by_farm`, `test_find_by`
//!
//! ## Concurrency
//! - `test_concurrent_creates`: parallel creates get distinct ids

/// Generate a full `RecordStore<Task>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an empty store
/// implementing `RecordStore<Task> + Clone + 'static`. It is re-evaluated for
/// each test to ensure isolation; clones must share state.
#[macro_export]
macro_rules! record_store_tests {
    ($factory:expr) => {
        mod record_store_contract_tests {
            use super::*;
            use farmdesk::core::error::FarmError;
            use farmdesk::core::field::FieldValue;
            use farmdesk::core::{RecordStore, TaskStoreExt};
            use farmdesk::entities::Priority;
            use serde_json::json;

            // ==================================================================
            // CRUD: create and get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let store = $factory;
                let created = store
                    .create(task_fields("  Irrigate north field ", "HIGH", Some("2024-05-01")))
                    .await
                    .unwrap()
                    .expect("store should return the created task");

                assert_eq!(created.id, 1);
                assert_eq!(created.title, "Irrigate north field");
                assert_eq!(created.priority, Priority::High);
                assert!(!created.completed);
                assert!(created.completed_at.is_absent());
                assert!(created.created_at.normalize().is_valid());
                assert!(created.due().is_valid());

                let retrieved = store.get_by_id(1).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_ids_are_max_plus_one() {
                let store = $factory;
                for title in ["a", "b", "c"] {
                    store.create(task_fields(title, "low", None)).await.unwrap();
                }
                let ids = task_ids(&store.get_all().await.unwrap());
                assert_eq!(ids, vec![1, 2, 3]);

                assert!(store.delete(2).await.unwrap());
                let next = store.create(task_fields("d", "low", None)).await.unwrap().unwrap();
                assert_eq!(next.id, 4);

                assert!(store.delete(4).await.unwrap());
                let reused = store.create(task_fields("e", "low", None)).await.unwrap().unwrap();
                assert_eq!(reused.id, 4);
            }

            #[tokio::test]
            async fn test_create_ignores_caller_id_and_flags() {
                let store = $factory;
                let mut payload = task_fields("Weed", "medium", None);
                payload.insert("Id".to_string(), json!(42));
                payload.insert("completed_c".to_string(), json!(true));
                payload.insert("completed_at_c".to_string(), json!("2024-01-01"));

                let created = store.create(payload).await.unwrap().unwrap();
                assert_eq!(created.id, 1);
                assert!(!created.completed);
                assert!(created.completed_at.is_absent());
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get_by_id(999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_get_all_empty() {
                let store = $factory;
                assert!(store.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_get_all_multiple() {
                let store = $factory;
                for i in 0..5 {
                    store
                        .create(task_fields(&format!("task {}", i), "medium", None))
                        .await
                        .unwrap();
                }
                assert_count(&store.get_all().await.unwrap(), 5);
            }

            // ==================================================================
            // CRUD: update and delete
            // ==================================================================

            #[tokio::test]
            async fn test_update_merges_shallowly() {
                let store = $factory;
                let mut payload = task_fields("Irrigate", "high", Some("2024-05-01"));
                payload.insert("description_c".to_string(), json!("north field"));
                store.create(payload).await.unwrap();

                let updated = store
                    .update(1, fields(json!({"priority_c": "low", "Id": 77})))
                    .await
                    .unwrap()
                    .expect("task 1 exists");

                assert_eq!(updated.id, 1);
                assert_eq!(updated.priority, Priority::Low);
                assert_eq!(updated.title, "Irrigate");
                assert_eq!(updated.description.as_deref(), Some("north field"));
                assert!(updated.due().is_valid());

                assert!(store.get_by_id(77).await.unwrap().is_none());
                assert_eq!(store.get_by_id(1).await.unwrap(), Some(updated));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let result = store
                    .update(5, fields(json!({"title_c": "ghost"})))
                    .await
                    .unwrap();
                assert!(result.is_none());
                assert!(store.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                store.create(task_fields("Prune", "low", None)).await.unwrap();

                assert!(store.delete(1).await.unwrap());
                assert!(store.get_by_id(1).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                assert!(!store.delete(1).await.unwrap());
            }

            // ==================================================================
            // Boundary
            // ==================================================================

            #[tokio::test]
            async fn test_reference_normalization() {
                let store = $factory;
                let mut expanded = task_fields("a", "low", None);
                expanded.insert("farm_c".to_string(), json!({"Id": 4, "Name": "Hilltop"}));
                expanded.insert("crop_c".to_string(), json!("9"));
                let a = store.create(expanded).await.unwrap().unwrap();
                assert_eq!(a.farm_id, Some(4));
                assert_eq!(a.crop_id, Some(9));

                let mut empty = task_fields("b", "low", None);
                empty.insert("farm_c".to_string(), json!(""));
                let b = store.create(empty).await.unwrap().unwrap();
                assert_eq!(b.farm_id, None);
                assert_eq!(b.crop_id, None);
            }

            #[tokio::test]
            async fn test_validation_failure() {
                let store = $factory;
                let err = store
                    .create(task_fields("   ", "urgent", Some("whenever")))
                    .await
                    .unwrap_err();

                match &err {
                    FarmError::Validation(e) => {
                        let message = e.to_string();
                        assert!(message.starts_with("Invalid task: "), "{}", message);
                    }
                    other => panic!("expected a validation error, got {:?}", other),
                }
                assert_eq!(err.to_response().code, "VALIDATION_ERROR");
                assert!(store.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_update_validation_failure() {
                let store = $factory;
                store.create(task_fields("Mow", "low", None)).await.unwrap();

                let result = store.update(1, fields(json!({"priority_c": "asap"}))).await;
                assert!(matches!(result, Err(FarmError::Validation(_))));
                let task = store.get_by_id(1).await.unwrap().unwrap();
                assert_eq!(task.priority, Priority::Low);
            }

            // ==================================================================
            // Lookups
            // ==================================================================

            #[tokio::test]
            async fn test_toggle_complete() {
                let store = $factory;
                store.create(task_fields("Harvest", "high", None)).await.unwrap();

                let done = store.toggle_complete(1).await.unwrap().unwrap();
                assert!(done.completed);
                assert!(done.completed_at.normalize().is_valid());

                let reopened = store.toggle_complete(1).await.unwrap().unwrap();
                assert!(!reopened.completed);
                assert!(reopened.completed_at.is_absent());

                assert!(store.toggle_complete(2).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_search() {
                let store = $factory;
                store.create(task_fields("Spray tomatoes", "high", None)).await.unwrap();
                let mut payload = task_fields("Walk rows", "low", None);
                payload.insert("description_c".to_string(), json!("check TOMATO blight"));
                store.create(payload).await.unwrap();
                store.create(task_fields("Fix pump", "low", None)).await.unwrap();

                let hits = store.search("tomato").await.unwrap();
                assert_eq!(task_ids(&hits), vec![1, 2]);
                assert!(store.search("barley").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_get_by_farm() {
                let store = $factory;
                for (title, farm) in [("a", json!(1)), ("b", json!({"Id": 2})), ("c", json!("1"))] {
                    let mut payload = task_fields(title, "low", None);
                    payload.insert("farm_c".to_string(), farm);
                    store.create(payload).await.unwrap();
                }

                assert_eq!(task_ids(&store.get_by_farm(1).await.unwrap()), vec![1, 3]);
                assert_eq!(task_ids(&store.get_by_farm(2).await.unwrap()), vec![2]);
                assert!(store.get_by_farm(3).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_find_by() {
                let store = $factory;
                store.create(task_fields("a", "high", None)).await.unwrap();
                store.create(task_fields("b", "low", None)).await.unwrap();

                let high = store
                    .find_by("priority_c", &FieldValue::from("high"))
                    .await
                    .unwrap();
                assert_eq!(task_ids(&high), vec![1]);

                let unknown = store
                    .find_by("no_such_field", &FieldValue::from("x"))
                    .await
                    .unwrap();
                assert!(unknown.is_empty());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            /// Requires the store to be `Clone + Send + 'static` with clones
            /// sharing the backing collection.
            #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
            async fn test_concurrent_creates() {
                let store = $factory;
                let mut handles = Vec::new();
                for i in 0..20 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .create(task_fields(&format!("task {}", i), "medium", None))
                            .await
                    }));
                }
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let mut ids = task_ids(&store.get_all().await.unwrap());
                ids.sort();
                assert_eq!(ids, (1..=20).collect::<Vec<_>>());
            }
        }
    };
}

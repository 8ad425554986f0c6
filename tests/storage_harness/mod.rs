//! Shared test harness for record store testing
//!
//! Provides field-map builders for the wire format, fixture records matching
//! the dashboard's list scenarios, and assertion helpers.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod record_store_tests;

use farmdesk::core::entity::{Fields, RecordId};
use farmdesk::entities::{Priority, Task, Transaction, TransactionType};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Field maps for what a form or API client sends to create/update
// ---------------------------------------------------------------------------

/// Unwrap a `json!` object into a field map
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Fields for a new task; `due` of `None` sends an explicit null
pub fn task_fields(title: &str, priority: &str, due: Option<&str>) -> Fields {
    fields(json!({
        "title_c": title,
        "priority_c": priority,
        "duedate_c": due,
    }))
}

/// Fields for a new transaction
pub fn transaction_fields(kind: &str, amount: f64, date: &str, category: &str) -> Fields {
    fields(json!({
        "type_c": kind,
        "amount_c": amount,
        "date_c": date,
        "category_c": category,
    }))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Tasks as the backend returns them: mixed date shapes, expanded references
pub const TASKS_FIXTURE: &str = r#"[
    {"Id": 1, "title_c": "Irrigate north field", "priority_c": "high",
     "duedate_c": "2024-05-01", "completed_c": false, "farm_c": {"Id": 1, "Name": "Green Acres"}},
    {"Id": 2, "title_c": "Order seed", "priority_c": "low",
     "duedate_c": "2024-01-01T08:30:00Z", "completed_c": true, "farm_c": 1},
    {"Id": 3, "title_c": "Fix fence", "priority_c": "medium",
     "duedate_c": null, "completed_c": false, "farm_c": "2"},
    {"Id": 4, "title_c": "Spray tomatoes", "priority_c": "high",
     "duedate_c": 1711929600000, "completed_c": false, "crop_c": {"Id": 5}},
    {"Id": 5, "title_c": "Calibrate sprayer", "priority_c": "medium",
     "duedate_c": "someday", "completed_c": false}
]"#;

/// Transactions with one malformed and one missing date
pub const TRANSACTIONS_FIXTURE: &str = r#"[
    {"Id": 1, "type_c": "income", "amount_c": 100.0, "date_c": "2024-02-01", "category_c": "Sales"},
    {"Id": 2, "type_c": "expense", "amount_c": 40.0, "date_c": "2024-03-01", "category_c": "Seeds"},
    {"Id": 3, "type_c": "expense", "amount_c": 12.5, "date_c": "not a date", "category_c": "Labor"},
    {"Id": 4, "type_c": "income", "amount_c": 7.25, "category_c": "Grants"},
    {"Id": 5, "type_c": "expense", "amount_c": 0.1, "date_c": "03/15/2024", "category_c": "Utilities"}
]"#;

/// The three-task list scenario: pending dated, completed dated, pending undated
pub fn scenario_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Irrigate", Priority::High, "2024-05-01"),
        Task::new(2, "Order seed", Priority::Low, "2024-01-01").mark_completed(),
        Task::new(3, "Fix fence", Priority::Medium, None::<&str>),
    ]
}

/// The two-transaction totals scenario
pub fn scenario_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(1, TransactionType::Income, 100.0, "2024-02-01", "Sales"),
        Transaction::new(2, TransactionType::Expense, 40.0, "2024-03-01", "Seeds"),
    ]
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Ids of a task list, in order
pub fn task_ids(tasks: &[Task]) -> Vec<RecordId> {
    tasks.iter().map(|t| t.id).collect()
}

/// Ids of a transaction list, in order
pub fn transaction_ids(transactions: &[Transaction]) -> Vec<RecordId> {
    transactions.iter().map(|t| t.id).collect()
}

/// Assert that a list contains exactly `n` records.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

//! Core module containing fundamental traits and types for farmdesk

pub mod date;
pub mod entity;
pub mod error;
pub mod field;
pub mod money;
pub mod projection;
pub mod query;
pub mod reference;
pub mod service;
pub mod validation;

pub use date::{DateInput, NormalizedDate, format_date, parse_date};
pub use entity::{Fields, ID_FIELD, Record, RecordId};
pub use error::{FarmError, Result};
pub use field::FieldValue;
pub use money::Money;
pub use projection::{
    CropView, TaskView, TransactionTotals, TransactionView, ViewProjector, project_tasks,
    project_transactions,
};
pub use query::{
    CropQuery, CropStatusFilter, PriorityFilter, SortDirection, StatusFilter, TaskQuery,
    TransactionQuery, TypeFilter,
};
pub use service::{RecordStore, TaskStoreExt};

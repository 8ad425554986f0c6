//! # farmdesk
//!
//! Core of a farm-management dashboard: typed records, swappable record
//! stores and the derived list views the dashboard shows.
//!
//! ## Features
//!
//! - **Typed records**: farms, crops, tasks, transactions and equipment mapped
//!   onto the backend's wire names with serde
//! - **Record stores**: one async CRUD trait per record type, with an
//!   in-memory implementation seeded from JSON fixtures
//! - **Projections**: filter and sort task and transaction lists; invalid or
//!   missing dates always sort last
//! - **Safe dates**: every date representation normalizes to a valid
//!   timestamp or an invalid sentinel, and formatting never panics
//! - **Exact totals**: currency sums in integer cents
//! - **Configuration**: display, dashboard and seed settings from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use farmdesk::prelude::*;
//!
//! let backend = Backend::in_memory();
//! let task = backend
//!     .tasks
//!     .create(fields)
//!     .await?;
//!
//! let tasks = backend.tasks.get_all().await?;
//! let pending = project_tasks(&tasks, &TaskQuery::new(StatusFilter::Pending, PriorityFilter::All));
//! for task in pending {
//!     println!("{} due {}", task.title, task.due_date.display());
//! }
//! ```

pub mod backend;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod entities;
pub mod storage;
pub mod weather;

pub use crate::core::error::{FarmError, Result};

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        Fields, Record, RecordId, RecordStore, TaskStoreExt, ViewProjector,
        date::{DateInput, NormalizedDate, format_date, parse_date},
        error::{ErrorResponse, FarmError, Result},
        field::FieldValue,
        money::Money,
    };

    // === Projections ===
    pub use crate::core::projection::{
        CropView, TaskView, TransactionTotals, TransactionView, project_tasks,
        project_transactions,
    };
    pub use crate::core::query::{
        CropQuery, CropStatusFilter, PriorityFilter, SortDirection, StatusFilter, TaskQuery,
        TransactionQuery, TypeFilter,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Records ===
    pub use crate::entities::{
        Crop, CropStatus, Equipment, Farm, Priority, Task, Transaction, TransactionType,
    };

    // === Storage ===
    pub use crate::backend::{Backend, BackendBuilder};
    pub use crate::storage::InMemoryRecordStore;

    // === Dashboard ===
    pub use crate::dashboard::{Dashboard, DashboardSnapshot, DashboardSummary};
    pub use crate::weather::{StaticWeatherProvider, WeatherProvider, WeatherReport};

    // === Config ===
    pub use crate::config::DashboardConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}

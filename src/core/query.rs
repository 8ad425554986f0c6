//! View parameters for list projections
//!
//! These mirror the filter buttons of the dashboard lists. Every filter has an
//! `all` variant that passes everything and is the default, so
//! `TaskQuery::default()` shows the whole list.
//!
//! # Example
//! ```rust,ignore
//! let query: TaskQuery = serde_json::from_str(r#"{"status": "pending"}"#)?;
//! let query = TaskQuery::new("completed".parse()?, "high".parse()?);
//! ```

use crate::entities::{CropStatus, Priority, TransactionType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unknown filter keyword
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseFilterError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! keyword_enum {
    ($type:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $type {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($type::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $type {
            type Err = ParseFilterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($type::$variant),)+
                    _ => Err(ParseFilterError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Task completion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

keyword_enum!(StatusFilter, "status filter", {
    All => "all",
    Completed => "completed",
    Pending => "pending",
});

impl StatusFilter {
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

/// Task priority filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

keyword_enum!(PriorityFilter, "priority filter", {
    All => "all",
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::High => priority == Priority::High,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::Low => priority == Priority::Low,
        }
    }
}

/// Transaction type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

keyword_enum!(TypeFilter, "type filter", {
    All => "all",
    Income => "income",
    Expense => "expense",
});

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }
}

/// Crop lifecycle filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatusFilter {
    #[default]
    All,
    Planted,
    Growing,
    Ready,
    Harvested,
}

keyword_enum!(CropStatusFilter, "crop status filter", {
    All => "all",
    Planted => "planted",
    Growing => "growing",
    Ready => "ready",
    Harvested => "harvested",
});

impl CropStatusFilter {
    pub fn matches(&self, status: CropStatus) -> bool {
        match self {
            CropStatusFilter::All => true,
            CropStatusFilter::Planted => status == CropStatus::Planted,
            CropStatusFilter::Growing => status == CropStatus::Growing,
            CropStatusFilter::Ready => status == CropStatus::Ready,
            CropStatusFilter::Harvested => status == CropStatus::Harvested,
        }
    }
}

/// Date sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

keyword_enum!(SortDirection, "sort direction", {
    Ascending => "asc",
    Descending => "desc",
});

/// Parameters of the task list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskQuery {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl TaskQuery {
    pub fn new(status: StatusFilter, priority: PriorityFilter) -> Self {
        Self { status, priority }
    }
}

/// Parameters of the transaction list view (most recent first by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionQuery {
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    pub direction: SortDirection,
}

impl TransactionQuery {
    pub fn new(kind: TypeFilter) -> Self {
        Self {
            kind,
            direction: SortDirection::Descending,
        }
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Parameters of the crop grid view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CropQuery {
    pub status: CropStatusFilter,
}

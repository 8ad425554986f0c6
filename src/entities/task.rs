//! Farm tasks

use crate::core::date::{DateInput, NormalizedDate};
use crate::core::entity::{Fields, RecordId};
use crate::core::reference;
use crate::core::validation::{RecordValidationConfig, filters, validators};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [&'static str; 3] = ["high", "medium", "low"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A unit of farm work, optionally tied to a farm and a crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "title_c", default)]
    pub title: String,

    #[serde(rename = "description_c", default)]
    pub description: Option<String>,

    #[serde(rename = "duedate_c", default)]
    pub due_date: DateInput,

    #[serde(rename = "priority_c", default)]
    pub priority: Priority,

    #[serde(rename = "completed_c", default)]
    pub completed: bool,

    #[serde(rename = "completed_at_c", default)]
    pub completed_at: DateInput,

    #[serde(rename = "created_at_c", default)]
    pub created_at: DateInput,

    #[serde(rename = "farm_c", default, deserialize_with = "reference::deserialize")]
    pub farm_id: Option<RecordId>,

    #[serde(rename = "crop_c", default, deserialize_with = "reference::deserialize")]
    pub crop_id: Option<RecordId>,
}

impl Task {
    /// A pending task with no farm or crop attached
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        priority: Priority,
        due_date: impl Into<DateInput>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: due_date.into(),
            priority,
            completed: false,
            completed_at: DateInput::Absent,
            created_at: DateInput::Absent,
            farm_id: None,
            crop_id: None,
        }
    }

    /// Mark the snapshot completed (builder style, used by fixtures)
    pub fn mark_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn due(&self) -> NormalizedDate {
        self.due_date.normalize()
    }

    /// Pending with a valid due date strictly before `now`
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due().as_datetime().is_some_and(|due| due < now)
    }
}

impl_record!(Task, "task", "tasks", ["title_c", "description_c"], {
    fn apply_create_defaults(fields: &mut Fields) {
        fields.insert("completed_c".to_string(), Value::Bool(false));
        fields.insert("completed_at_c".to_string(), Value::Null);
        super::stamp_created_at(fields);
    }

    fn validation_config(operation: &str) -> RecordValidationConfig {
        let config = RecordValidationConfig::new("task")
            .filter("title_c", filters::trim())
            .filter("priority_c", filters::lowercase())
            .filter("duedate_c", filters::empty_as_null())
            .filter("farm_c", filters::empty_as_null())
            .filter("crop_c", filters::empty_as_null())
            .validate("title_c", validators::not_blank())
            .validate("priority_c", validators::required())
            .validate("priority_c", validators::in_list(&Priority::ALL))
            .validate("duedate_c", validators::date());

        if operation == "update" {
            config.partial()
        } else {
            config
        }
    }
});

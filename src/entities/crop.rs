//! Crops planted on a farm plot

use crate::core::date::DateInput;
use crate::core::entity::{Fields, RecordId};
use crate::core::reference;
use crate::core::validation::{RecordValidationConfig, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    #[default]
    Planted,
    Growing,
    Ready,
    Harvested,
}

impl CropStatus {
    pub const ALL: [&'static str; 4] = ["planted", "growing", "ready", "harvested"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropStatus::Planted => "planted",
            CropStatus::Growing => "growing",
            CropStatus::Ready => "ready",
            CropStatus::Harvested => "harvested",
        }
    }

    /// Still in the ground and not yet ready
    pub fn is_active(&self) -> bool {
        matches!(self, CropStatus::Planted | CropStatus::Growing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "name_c", default)]
    pub name: String,

    #[serde(rename = "variety_c", default)]
    pub variety: Option<String>,

    #[serde(rename = "plotfield_c", default)]
    pub plot_field: Option<String>,

    #[serde(rename = "plantingdate_c", default)]
    pub planting_date: DateInput,

    #[serde(rename = "expectedharvestdate_c", default)]
    pub expected_harvest_date: DateInput,

    #[serde(rename = "status_c", default)]
    pub status: CropStatus,

    #[serde(rename = "notes_c", default)]
    pub notes: Option<String>,

    #[serde(rename = "created_at_c", default)]
    pub created_at: DateInput,

    #[serde(rename = "farm_c", default, deserialize_with = "reference::deserialize")]
    pub farm_id: Option<RecordId>,
}

impl Crop {
    pub fn new(id: RecordId, name: impl Into<String>, status: CropStatus) -> Self {
        Self {
            id,
            name: name.into(),
            variety: None,
            plot_field: None,
            planting_date: DateInput::Absent,
            expected_harvest_date: DateInput::Absent,
            status,
            notes: None,
            created_at: DateInput::Absent,
            farm_id: None,
        }
    }

    /// "Tomato (Plot A)" style label used next to tasks
    pub fn label(&self) -> String {
        match self.plot_field.as_deref() {
            Some(plot) if !plot.is_empty() => format!("{} ({})", self.name, plot),
            _ => self.name.clone(),
        }
    }
}

impl_record!(Crop, "crop", "crops", ["name_c", "variety_c", "plotfield_c"], {
    fn apply_create_defaults(fields: &mut Fields) {
        fields
            .entry("status_c")
            .or_insert_with(|| CropStatus::Planted.as_str().into());
        super::stamp_created_at(fields);
    }

    fn validation_config(operation: &str) -> RecordValidationConfig {
        let config = RecordValidationConfig::new("crop")
            .filter("name_c", filters::trim())
            .filter("status_c", filters::lowercase())
            .filter("plantingdate_c", filters::empty_as_null())
            .filter("expectedharvestdate_c", filters::empty_as_null())
            .filter("farm_c", filters::empty_as_null())
            .validate("name_c", validators::not_blank())
            .validate("status_c", validators::in_list(&CropStatus::ALL))
            .validate("plantingdate_c", validators::date())
            .validate("expectedharvestdate_c", validators::date());

        if operation == "update" {
            config.partial()
        } else {
            config
        }
    }
});

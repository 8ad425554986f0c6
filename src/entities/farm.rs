//! Farms owning crops, tasks and transactions

use crate::core::date::DateInput;
use crate::core::entity::{Fields, RecordId};
use crate::core::validation::{RecordValidationConfig, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "name_c", default)]
    pub name: String,

    #[serde(rename = "location_c", default)]
    pub location: String,

    /// Area in acres
    #[serde(rename = "size_c", default)]
    pub size: f64,

    #[serde(rename = "soil_type_c", default)]
    pub soil_type: Option<String>,

    #[serde(rename = "farm_type_c", default)]
    pub farm_type: Option<String>,

    #[serde(rename = "weather_summary_c", default)]
    pub weather_summary: Option<String>,

    #[serde(rename = "created_at_c", default)]
    pub created_at: DateInput,
}

impl Farm {
    pub fn new(id: RecordId, name: impl Into<String>, location: impl Into<String>, size: f64) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            size,
            soil_type: None,
            farm_type: None,
            weather_summary: None,
            created_at: DateInput::Absent,
        }
    }
}

const REQUIRED_TEXT: [&str; 5] = [
    "name_c",
    "location_c",
    "soil_type_c",
    "farm_type_c",
    "weather_summary_c",
];

impl_record!(Farm, "farm", "farms", ["name_c", "location_c", "farm_type_c"], {
    fn apply_create_defaults(fields: &mut Fields) {
        super::stamp_created_at(fields);
    }

    fn validation_config(operation: &str) -> RecordValidationConfig {
        let mut config = RecordValidationConfig::new("farm")
            .filter("size_c", filters::to_number())
            .validate("size_c", validators::required())
            .validate("size_c", validators::numeric())
            .validate("size_c", validators::positive());

        for field in REQUIRED_TEXT {
            config = config
                .filter(field, filters::trim())
                .validate(field, validators::not_blank());
        }

        if operation == "update" {
            config.partial()
        } else {
            config
        }
    }
});

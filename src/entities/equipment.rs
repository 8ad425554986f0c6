//! Farm equipment inventory

use crate::core::date::DateInput;
use crate::core::entity::RecordId;
use crate::core::validation::{RecordValidationConfig, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "name_c", default)]
    pub name: String,

    #[serde(rename = "type_c", default)]
    pub equipment_type: String,

    #[serde(rename = "purchase_date_c", default)]
    pub purchase_date: DateInput,

    #[serde(rename = "cost_c", default)]
    pub cost: Option<f64>,
}

impl Equipment {
    pub fn new(id: RecordId, name: impl Into<String>, equipment_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            equipment_type: equipment_type.into(),
            purchase_date: DateInput::Absent,
            cost: None,
        }
    }
}

impl_record!(Equipment, "equipment", "equipment", ["name_c", "type_c"], {
    fn validation_config(operation: &str) -> RecordValidationConfig {
        let config = RecordValidationConfig::new("equipment")
            .filter("name_c", filters::trim())
            .filter("type_c", filters::trim())
            .filter("purchase_date_c", filters::empty_as_null())
            .filter("cost_c", filters::to_number())
            .filter("cost_c", filters::round_decimals(2))
            .validate("name_c", validators::not_blank())
            .validate("type_c", validators::not_blank())
            .validate("purchase_date_c", validators::date())
            .validate("cost_c", validators::numeric())
            .validate("cost_c", validators::non_negative());

        if operation == "update" {
            config.partial()
        } else {
            config
        }
    }
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{Fields, Record};
    use crate::core::field::FieldValue;
    use serde_json::json;

    #[test]
    fn test_field_value_for_search() {
        let mut tractor = Equipment::new(1, "John Deere 5075E", "Tractor");
        tractor.cost = Some(45_000.0);

        assert_eq!(
            tractor.field_value("type_c"),
            Some(FieldValue::String("Tractor".to_string()))
        );
        assert_eq!(tractor.field_value("cost_c"), Some(FieldValue::Float(45_000.0)));
        assert_eq!(Equipment::searchable_fields(), &["name_c", "type_c"]);
    }

    #[test]
    fn test_empty_cost_is_allowed() {
        let mut fields = Fields::new();
        fields.insert("name_c".to_string(), json!("Sprayer"));
        fields.insert("type_c".to_string(), json!("Implement"));
        fields.insert("cost_c".to_string(), json!(""));

        let out = Equipment::validation_config("create")
            .validate_and_filter(fields)
            .unwrap();
        assert_eq!(out["cost_c"], json!(null));
    }
}

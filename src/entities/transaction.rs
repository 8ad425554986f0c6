//! Income and expense transactions

use crate::core::date::{DateInput, NormalizedDate};
use crate::core::entity::{Fields, RecordId};
use crate::core::money::Money;
use crate::core::reference;
use crate::core::validation::{RecordValidationConfig, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};

/// Direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [&'static str; 2] = ["income", "expense"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Categories offered by the entry form for this type
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => &["Sales", "Grants", "Subsidies", "Other"],
            TransactionType::Expense => &[
                "Seeds",
                "Equipment",
                "Fertilizer",
                "Labor",
                "Utilities",
                "Maintenance",
                "Other",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "type_c")]
    pub kind: TransactionType,

    #[serde(rename = "amount_c", default)]
    pub amount: f64,

    #[serde(rename = "date_c", default)]
    pub date: DateInput,

    #[serde(rename = "category_c", default)]
    pub category: String,

    #[serde(rename = "description_c", default)]
    pub description: Option<String>,

    #[serde(rename = "created_at_c", default)]
    pub created_at: DateInput,

    #[serde(rename = "farm_c", default, deserialize_with = "reference::deserialize")]
    pub farm_id: Option<RecordId>,
}

impl Transaction {
    pub fn new(
        id: RecordId,
        kind: TransactionType,
        amount: f64,
        date: impl Into<DateInput>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            date: date.into(),
            category: category.into(),
            description: None,
            created_at: DateInput::Absent,
            farm_id: None,
        }
    }

    pub fn normalized_date(&self) -> NormalizedDate {
        self.date.normalize()
    }

    /// Amount rounded to cents
    pub fn money(&self) -> Money {
        Money::from_amount(self.amount)
    }

    /// Amount as a balance movement: positive for income, negative for expense
    pub fn signed_money(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.money(),
            TransactionType::Expense => -self.money(),
        }
    }
}

impl_record!(Transaction, "transaction", "transactions", ["category_c", "description_c"], {
    fn apply_create_defaults(fields: &mut Fields) {
        super::stamp_created_at(fields);
    }

    fn validation_config(operation: &str) -> RecordValidationConfig {
        let config = RecordValidationConfig::new("transaction")
            .filter("type_c", filters::lowercase())
            .filter("amount_c", filters::to_number())
            .filter("amount_c", filters::round_decimals(2))
            .filter("category_c", filters::trim())
            .filter("farm_c", filters::empty_as_null())
            .validate("type_c", validators::required())
            .validate("type_c", validators::in_list(&TransactionType::ALL))
            .validate("amount_c", validators::required())
            .validate("amount_c", validators::numeric())
            .validate("amount_c", validators::non_negative())
            .validate("date_c", validators::required())
            .validate("date_c", validators::date())
            .validate("category_c", validators::not_blank());

        if operation == "update" {
            config.partial()
        } else {
            config
        }
    }
});

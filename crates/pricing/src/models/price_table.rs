use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::NominationCategory;

/// Per-nomination price row of an event's price table.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Nomination name must be between 1 and 255 characters"
    ))]
    pub nomination: String,

    pub price_per_participant: Decimal,

    pub price_per_federation_participant: Option<Decimal>,
}

impl PriceRow {
    pub fn regular_unit_price(&self) -> Decimal {
        self.price_per_participant
    }

    /// Events without a separate federation rate charge the regular rate.
    pub fn federation_unit_price(&self) -> Decimal {
        self.price_per_federation_participant
            .unwrap_or(self.price_per_participant)
    }
}

/// An event's full price table, looked up by resolved nomination category.
#[derive(Debug, Clone, Default)]
pub struct EventPriceTable {
    rows: Vec<PriceRow>,
}

impl EventPriceTable {
    pub fn new(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row whose nomination name matches the category exactly, else the
    /// first configured row. The fallback mirrors how misconfigured events
    /// have always been priced; it is a policy, not an error. Returns `None`
    /// only when the table has no rows at all.
    pub fn row_for(&self, category: NominationCategory) -> Option<&PriceRow> {
        self.rows
            .iter()
            .find(|row| row.nomination == category.name())
            .or_else(|| self.rows.first())
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{PricingError, Result};
use crate::models::{DiscountSchedule, DiscountTier, EventPriceTable, PriceRow};

/// Everything an event configures that pricing depends on: per-nomination
/// price rows, diploma/medal unit prices, and the volume-discount tiers.
///
/// A missing diploma or medal price means the item is not offered at the
/// event; the corresponding count is then priced at zero, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPricingConfig {
    pub price_per_diploma: Option<Decimal>,

    pub price_per_medal: Option<Decimal>,

    #[serde(default)]
    #[validate(nested)]
    pub prices: Vec<PriceRow>,

    #[serde(default)]
    pub discount_tiers: Vec<DiscountTier>,
}

impl EventPricingConfig {
    pub fn price_table(&self) -> EventPriceTable {
        EventPriceTable::new(self.prices.clone())
    }

    /// Parses the raw tier list into a validated schedule. This is the
    /// write-time boundary: malformed tiers are rejected here rather than
    /// silently tolerated during calculation.
    pub fn discount_schedule(&self) -> Result<DiscountSchedule> {
        DiscountSchedule::new(self.discount_tiers.clone())
    }

    /// Rejects negative unit prices. Zero is fine (a free nomination or
    /// free diplomas are legitimate configurations).
    pub fn check_amounts(&self) -> Result<()> {
        if self.price_per_diploma.is_some_and(|p| p < Decimal::ZERO) {
            return Err(PricingError::InvalidInput(
                "pricePerDiploma must not be negative".to_string(),
            ));
        }
        if self.price_per_medal.is_some_and(|p| p < Decimal::ZERO) {
            return Err(PricingError::InvalidInput(
                "pricePerMedal must not be negative".to_string(),
            ));
        }
        for row in &self.prices {
            if row.price_per_participant < Decimal::ZERO
                || row
                    .price_per_federation_participant
                    .is_some_and(|p| p < Decimal::ZERO)
            {
                return Err(PricingError::InvalidInput(format!(
                    "prices for nomination {} must not be negative",
                    row.nomination
                )));
            }
        }
        Ok(())
    }
}

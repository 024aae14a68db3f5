use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::config::EventPricingConfig;

/// Request payload for pricing a single performance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[validate(range(min = 1, message = "participantsCount must be at least 1"))]
    pub participants_count: u32,

    #[serde(default)]
    pub federation_participants_count: u32,

    #[serde(default)]
    pub diplomas_count: u32,

    #[serde(default)]
    pub medals_count: u32,

    #[validate(nested)]
    pub pricing: EventPricingConfig,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub performance_price: Decimal,
    pub diplomas_price: Decimal,
    pub medals_price: Decimal,
    pub total_price: Decimal,
    pub breakdown: CalculationBreakdown,
}

/// Line-by-line detail of a single-performance calculation, in the shape
/// the public calculator has always returned.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBreakdown {
    pub regular_participants: u32,
    pub regular_price: Decimal,
    pub price_per_regular_participant: Decimal,
    pub federation_participants: u32,
    pub federation_price: Decimal,
    pub price_per_federation_participant: Decimal,
    pub diplomas_count: u32,
    pub diplomas_price: Decimal,
    pub price_per_diploma: Decimal,
    pub medals_count: u32,
    pub medals_price: Decimal,
    pub price_per_medal: Decimal,
    pub nomination_name: String,
    pub total_participants: u32,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::config::EventPricingConfig;

/// One registration selected for a combined checkout, with the counts the
/// accountant may have edited transiently before paying.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEntry {
    pub registration_id: i64,

    pub dance_name: Option<String>,

    pub collective_name: Option<String>,

    #[validate(range(min = 1, message = "participantsCount must be at least 1"))]
    pub participants_count: u32,

    #[serde(default)]
    pub federation_participants_count: u32,

    #[serde(default)]
    pub diplomas_count: u32,

    #[serde(default)]
    pub medals_count: u32,

    /// Newline-separated diploma recipients. When present, its line count
    /// overrides `diplomas_count`.
    pub diplomas_list: Option<String>,

    /// Manually agreed performance price that replaces the computed one.
    pub custom_performance_price: Option<Decimal>,

    #[serde(default)]
    pub components: ComponentToggles,
}

/// Per-registration switches for which charge components this checkout
/// covers. All on by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentToggles {
    pub pay_performance: bool,
    pub pay_diplomas: bool,
    pub pay_medals: bool,
}

impl Default for ComponentToggles {
    fn default() -> Self {
        Self {
            pay_performance: true,
            pay_diplomas: true,
            pay_medals: true,
        }
    }
}

/// Request payload for pricing a set of registrations as one checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCalculateRequest {
    #[validate(length(min = 1, message = "At least one registration is required"))]
    #[validate(nested)]
    pub registrations: Vec<RegistrationEntry>,

    #[validate(nested)]
    pub pricing: EventPricingConfig,

    #[serde(default = "default_true")]
    pub paying_performance: bool,

    #[serde(default = "default_true")]
    pub paying_diplomas_and_medals: bool,

    #[serde(default)]
    pub apply_discount: bool,
}

pub(crate) fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedCalculateResponse {
    /// Grand total owed for this checkout, discount already deducted.
    pub total_price: Decimal,
    /// Performance subtotal net of the discount.
    pub performance_price: Decimal,
    /// Diplomas and medals subtotal. Never discounted.
    pub diplomas_and_medals_price: Decimal,
    pub discount_amount: Decimal,
    pub discount_percent: Decimal,
    pub breakdown: Vec<RegistrationBreakdown>,
}

/// Per-registration slice of a combined calculation. The aggregate discount
/// is redistributed proportionally over these lines for display; charging
/// always uses the aggregate figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBreakdown {
    pub registration_id: i64,
    pub dance_name: Option<String>,
    pub collective_name: Option<String>,
    pub nomination_name: Option<String>,
    /// Gross performance price counted towards this checkout (zero when the
    /// performance component is not being paid).
    pub performance_price: Decimal,
    /// This registration's proportional share of the aggregate discount.
    pub discount_amount: Decimal,
    pub diplomas_price: Decimal,
    pub medals_price: Decimal,
    pub diplomas_count: u32,
    pub medals_count: u32,
    /// Net amount owed for this registration within the checkout.
    pub total: Decimal,
}

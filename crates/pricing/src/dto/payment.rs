use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::combined::{RegistrationEntry, default_true};
use super::config::EventPricingConfig;
use crate::models::{AccountingLine, MethodAmounts, PaymentStatus};

/// Request payload for checking declared method amounts against a total.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAllocationRequest {
    pub payments_by_method: MethodAmounts,
    pub required_total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAllocationResponse {
    pub valid: bool,
    pub total_declared: Decimal,
    pub required_total: Decimal,
}

/// Request payload for turning a combined checkout into accounting lines.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanRequest {
    #[validate(length(min = 1, message = "At least one registration is required"))]
    #[validate(nested)]
    pub registrations: Vec<RegistrationEntry>,

    #[validate(nested)]
    pub pricing: EventPricingConfig,

    pub payments_by_method: MethodAmounts,

    #[serde(default = "default_true")]
    pub paying_performance: bool,

    #[serde(default = "default_true")]
    pub paying_diplomas_and_medals: bool,

    #[serde(default)]
    pub apply_discount: bool,

    pub payment_group_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanResponse {
    pub entries: Vec<AccountingLine>,
    pub total_paid: Decimal,
    pub total_to_pay: Decimal,
    pub discount: Decimal,
    pub statuses: Vec<RegistrationStatus>,
}

/// Payment status a registration reaches once the plan is recorded.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub registration_id: i64,
    pub payment_status: PaymentStatus,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

/// What a recorded amount pays for. Diplomas and medals share one bucket
/// in accounting even though they are priced separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentComponent {
    Performance,
    DiplomasMedals,
}

/// Payment status of a registration. Transitions are owned by the caller
/// that records payments; the engine only derives the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    PerformancePaid,
    DiplomasPaid,
    Paid,
}

/// Amounts declared per payment method for one checkout operation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodAmounts {
    pub cash: Decimal,
    pub card: Decimal,
    pub transfer: Decimal,
}

impl MethodAmounts {
    pub fn total(&self) -> Decimal {
        self.cash + self.card + self.transfer
    }
}

/// One accounting line of a payment plan: a single method's share of a
/// single registration's performance or diplomas/medals charge.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountingLine {
    pub registration_id: i64,
    pub amount: Decimal,
    pub discount_amount: Decimal,
    pub discount_percent: Decimal,
    pub method: PaymentMethod,
    pub paid_for: PaymentComponent,
    pub payment_group_id: Option<Uuid>,
    pub payment_group_name: Option<String>,
}

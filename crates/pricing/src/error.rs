use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payment amount mismatch: declared {declared}, required {required}")]
    AllocationMismatch { declared: Decimal, required: Decimal },

    #[error("Invalid discount tiers: {0}")]
    InvalidTierConfiguration(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn is_allocation_mismatch(&self) -> bool {
        matches!(self, PricingError::AllocationMismatch { .. })
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{PricingError, Result};

/// One volume-discount bracket: amounts in `minAmount..=maxAmount` earn
/// `percentage` off the performance subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub percentage: Decimal,
}

impl DiscountTier {
    pub fn contains(&self, amount: Decimal) -> bool {
        self.min_amount <= amount && amount <= self.max_amount
    }
}

/// A validated, sorted set of non-overlapping discount tiers.
///
/// Validation happens here, when the tiers are written, so that calculation
/// never has to deal with malformed configuration.
#[derive(Debug, Clone, Default)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Builds a schedule from raw tiers, sorting them ascending by
    /// `min_amount` and rejecting inverted ranges, percentages outside
    /// 0..=100, and overlapping brackets.
    pub fn new(mut tiers: Vec<DiscountTier>) -> Result<Self> {
        for tier in &tiers {
            if tier.min_amount > tier.max_amount {
                return Err(PricingError::InvalidTierConfiguration(format!(
                    "tier {}..{} has minAmount greater than maxAmount",
                    tier.min_amount, tier.max_amount
                )));
            }
            if tier.percentage < Decimal::ZERO || tier.percentage > Decimal::ONE_HUNDRED {
                return Err(PricingError::InvalidTierConfiguration(format!(
                    "percentage {} is outside 0..=100",
                    tier.percentage
                )));
            }
        }

        tiers.sort_by(|a, b| a.min_amount.cmp(&b.min_amount));

        for pair in tiers.windows(2) {
            if pair[1].min_amount <= pair[0].max_amount {
                return Err(PricingError::InvalidTierConfiguration(format!(
                    "tier {}..{} overlaps tier {}..{}",
                    pair[0].min_amount, pair[0].max_amount, pair[1].min_amount, pair[1].max_amount
                )));
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(min: u32, max: u32, percentage: u32) -> DiscountTier {
        DiscountTier {
            min_amount: Decimal::from(min),
            max_amount: Decimal::from(max),
            percentage: Decimal::from(percentage),
        }
    }

    #[test]
    fn test_sorts_tiers_by_min_amount() {
        let schedule =
            DiscountSchedule::new(vec![tier(10000, 30999, 10), tier(0, 9999, 0)]).unwrap();
        assert_eq!(schedule.tiers()[0].min_amount, Decimal::ZERO);
        assert_eq!(schedule.tiers()[1].min_amount, Decimal::from(10000));
    }

    #[test]
    fn test_rejects_overlapping_tiers() {
        let result = DiscountSchedule::new(vec![tier(0, 10000, 5), tier(10000, 20000, 10)]);
        assert!(matches!(
            result,
            Err(crate::error::PricingError::InvalidTierConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = DiscountSchedule::new(vec![tier(5000, 1000, 5)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_percentage_above_100() {
        let result = DiscountSchedule::new(vec![tier(0, 1000, 101)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_gap_between_tiers() {
        let schedule = DiscountSchedule::new(vec![tier(0, 4999, 0), tier(10000, 30999, 10)]);
        assert!(schedule.is_ok());
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        assert!(DiscountSchedule::new(Vec::new()).unwrap().is_empty());
    }
}

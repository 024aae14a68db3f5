use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::DiscountTier;

/// Rounds a money amount to whole currency units, half up. Applied
/// everywhere a discount or a method split produces a fraction.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage of the tier containing `amount`, or zero when no tier does.
///
/// An amount above all tiers or inside an unconfigured gap earns no
/// discount rather than an error; accountants rely on that when events
/// configure partial schedules. If overlapping tiers ever reach this point
/// (the schedule normally rejects them at write time), the tier with the
/// lowest `min_amount` wins, deterministically.
pub fn resolve_discount_tier(amount: Decimal, tiers: &[DiscountTier]) -> Decimal {
    tiers
        .iter()
        .filter(|tier| tier.contains(amount))
        .min_by(|a, b| a.min_amount.cmp(&b.min_amount))
        .map(|tier| tier.percentage)
        .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount {
    pub discount_amount: Decimal,
    pub net_amount: Decimal,
}

/// Applies a percentage discount to an amount, rounding the discount to a
/// whole currency unit.
pub fn apply_discount(amount: Decimal, percentage: Decimal) -> Discount {
    let discount_amount = round_money(amount * percentage / Decimal::ONE_HUNDRED);
    Discount {
        discount_amount,
        net_amount: amount - discount_amount,
    }
}

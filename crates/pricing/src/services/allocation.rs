use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::combined::{CombinedCalculateRequest, ComponentToggles};
use crate::dto::payment::{PaymentPlanRequest, PaymentPlanResponse, RegistrationStatus};
use crate::error::{PricingError, Result};
use crate::models::{AccountingLine, MethodAmounts, PaymentComponent, PaymentMethod, PaymentStatus};
use crate::services::calculation::compute_combined_total;
use crate::services::discount::round_money;

/// Absolute tolerance for matching a declared payment against the computed
/// total. One currency unit absorbs discount rounding.
const ALLOCATION_TOLERANCE_UNITS: u32 = 1;

/// Checks that the declared method amounts sum to the required total within
/// one currency unit. A mismatch is a user error to adjust, never silently
/// corrected.
pub fn validate_payment_allocation(declared: &MethodAmounts, required: Decimal) -> Result<()> {
    let total = declared.total();
    if (total - required).abs() > Decimal::from(ALLOCATION_TOLERANCE_UNITS) {
        return Err(PricingError::AllocationMismatch {
            declared: total,
            required,
        });
    }
    Ok(())
}

/// Derives a registration's payment status from paid and required amounts
/// per component. The engine never mutates status anywhere; it only hands
/// the caller the value a successful recording leads to.
pub fn derive_payment_status(
    performance_paid: Decimal,
    diplomas_and_medals_paid: Decimal,
    performance_required: Decimal,
    diplomas_and_medals_required: Decimal,
) -> PaymentStatus {
    let tolerance = Decimal::new(1, 2);
    let performance_covered = (performance_paid - performance_required).abs() < tolerance;
    let diplomas_covered =
        (diplomas_and_medals_paid - diplomas_and_medals_required).abs() < tolerance;

    match (performance_covered, diplomas_covered) {
        (true, true) => PaymentStatus::Paid,
        (true, false) => PaymentStatus::PerformancePaid,
        (false, true) => PaymentStatus::DiplomasPaid,
        (false, false) => PaymentStatus::Unpaid,
    }
}

/// Turns a combined checkout into per-registration, per-method accounting
/// lines.
///
/// Validation first: the declared cash/card/transfer amounts must match the
/// computed total. Each registration's performance and diplomas/medals
/// charges are then split across methods proportionally; cash and card
/// shares are rounded to whole units and transfer takes the exact remainder
/// so every component reconciles. Zero lines are omitted. Paying several
/// registrations together mints a shared payment group id.
pub fn build_payment_plan(req: &PaymentPlanRequest) -> Result<PaymentPlanResponse> {
    let combined = compute_combined_total(&CombinedCalculateRequest {
        registrations: req.registrations.clone(),
        pricing: req.pricing.clone(),
        paying_performance: req.paying_performance,
        paying_diplomas_and_medals: req.paying_diplomas_and_medals,
        apply_discount: req.apply_discount,
    })?;

    let required = combined.total_price;
    validate_payment_allocation(&req.payments_by_method, required)?;

    // Full requirements with every flag and toggle on, so statuses reflect
    // what each registration owes overall, not just this checkout.
    let full = compute_combined_total(&CombinedCalculateRequest {
        registrations: req
            .registrations
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.components = ComponentToggles::default();
                entry
            })
            .collect(),
        pricing: req.pricing.clone(),
        paying_performance: true,
        paying_diplomas_and_medals: true,
        apply_discount: req.apply_discount,
    })?;

    let payment_group_id = (req.registrations.len() > 1).then(Uuid::new_v4);
    let cash = req.payments_by_method.cash;
    let card = req.payments_by_method.card;

    let mut entries = Vec::new();
    let mut statuses = Vec::with_capacity(combined.breakdown.len());

    for (line, full_line) in combined.breakdown.iter().zip(&full.breakdown) {
        let reg_required = line.total;
        let reg_proportion = if required > Decimal::ZERO {
            reg_required / required
        } else {
            Decimal::ZERO
        };

        let net_performance = line.performance_price - line.discount_amount;
        let discount_percent = if line.discount_amount > Decimal::ZERO {
            (line.discount_amount / line.performance_price * Decimal::ONE_HUNDRED)
                .round_dp(2)
                .normalize()
        } else {
            Decimal::ZERO
        };

        if net_performance > Decimal::ZERO {
            let share = reg_proportion * (net_performance / reg_required);
            let cash_amount = round_money(cash * share);
            let card_amount = round_money(card * share);
            let transfer_amount = net_performance - cash_amount - card_amount;

            for (method, amount) in [
                (PaymentMethod::Cash, cash_amount),
                (PaymentMethod::Card, card_amount),
                (PaymentMethod::Transfer, transfer_amount),
            ] {
                if amount > Decimal::ZERO {
                    entries.push(AccountingLine {
                        registration_id: line.registration_id,
                        amount,
                        discount_amount: (line.discount_amount * amount / net_performance)
                            .round_dp(2),
                        discount_percent,
                        method,
                        paid_for: PaymentComponent::Performance,
                        payment_group_id,
                        payment_group_name: req.payment_group_name.clone(),
                    });
                }
            }
        }

        for component_amount in [line.diplomas_price, line.medals_price] {
            if component_amount > Decimal::ZERO {
                let share = reg_proportion * (component_amount / reg_required);
                let cash_amount = round_money(cash * share);
                let card_amount = round_money(card * share);
                let transfer_amount = component_amount - cash_amount - card_amount;

                for (method, amount) in [
                    (PaymentMethod::Cash, cash_amount),
                    (PaymentMethod::Card, card_amount),
                    (PaymentMethod::Transfer, transfer_amount),
                ] {
                    if amount > Decimal::ZERO {
                        entries.push(AccountingLine {
                            registration_id: line.registration_id,
                            amount,
                            discount_amount: Decimal::ZERO,
                            discount_percent: Decimal::ZERO,
                            method,
                            paid_for: PaymentComponent::DiplomasMedals,
                            payment_group_id,
                            payment_group_name: req.payment_group_name.clone(),
                        });
                    }
                }
            }
        }

        statuses.push(RegistrationStatus {
            registration_id: line.registration_id,
            payment_status: derive_payment_status(
                net_performance,
                line.diplomas_price + line.medals_price,
                full_line.performance_price - full_line.discount_amount,
                full_line.diplomas_price + full_line.medals_price,
            ),
        });
    }

    Ok(PaymentPlanResponse {
        entries,
        total_paid: req.payments_by_method.total(),
        total_to_pay: required,
        discount: combined.discount_amount,
        statuses,
    })
}

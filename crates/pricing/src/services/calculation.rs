use rust_decimal::Decimal;

use crate::dto::calculation::{CalculateRequest, CalculateResponse, CalculationBreakdown};
use crate::dto::combined::{
    CombinedCalculateRequest, CombinedCalculateResponse, RegistrationBreakdown,
};
use crate::error::{PricingError, Result};
use crate::models::{NominationCategory, PriceRow};
use crate::services::discount::{apply_discount, resolve_discount_tier, round_money};
use crate::services::roster;

/// Resolves the nomination category for a participant count.
pub fn resolve_nomination(participants_count: u32) -> Result<NominationCategory> {
    NominationCategory::from_participants_count(participants_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformancePrice {
    pub regular_price: Decimal,
    pub federation_price: Decimal,
    pub total: Decimal,
}

/// Prices one performance from its participant counts and the applicable
/// price row. Federation members pay the federation rate, everyone else the
/// regular rate. No discount is applied at this stage.
pub fn compute_performance_price(
    participants_count: u32,
    federation_participants_count: u32,
    row: &PriceRow,
) -> Result<PerformancePrice> {
    if participants_count < 1 {
        return Err(PricingError::InvalidInput(
            "participantsCount must be at least 1".to_string(),
        ));
    }
    if federation_participants_count > participants_count {
        return Err(PricingError::InvalidInput(format!(
            "federationParticipantsCount {} exceeds participantsCount {}",
            federation_participants_count, participants_count
        )));
    }

    let regular_count = participants_count - federation_participants_count;
    let regular_price = Decimal::from(regular_count) * row.regular_unit_price();
    let federation_price =
        Decimal::from(federation_participants_count) * row.federation_unit_price();

    Ok(PerformancePrice {
        regular_price,
        federation_price,
        total: regular_price + federation_price,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiplomasAndMedalsPrice {
    pub diplomas_price: Decimal,
    pub medals_price: Decimal,
    pub total: Decimal,
}

/// Prices diplomas and medals. A missing unit price means the item is not
/// offered at the event and the count is priced at zero.
pub fn compute_diplomas_and_medals_price(
    diplomas_count: u32,
    medals_count: u32,
    price_per_diploma: Option<Decimal>,
    price_per_medal: Option<Decimal>,
) -> DiplomasAndMedalsPrice {
    let diplomas_price = price_per_diploma.unwrap_or(Decimal::ZERO) * Decimal::from(diplomas_count);
    let medals_price = price_per_medal.unwrap_or(Decimal::ZERO) * Decimal::from(medals_count);
    DiplomasAndMedalsPrice {
        diplomas_price,
        medals_price,
        total: diplomas_price + medals_price,
    }
}

/// Prices a single performance together with its diplomas and medals for
/// the public calculator. Requires at least one configured price row.
pub fn calculate(req: &CalculateRequest) -> Result<CalculateResponse> {
    req.pricing.check_amounts()?;

    let category = resolve_nomination(req.participants_count)?;
    let table = req.pricing.price_table();
    let row = table.row_for(category).ok_or_else(|| {
        PricingError::InvalidInput("no price rows configured for this event".to_string())
    })?;

    let performance =
        compute_performance_price(req.participants_count, req.federation_participants_count, row)?;
    let extras = compute_diplomas_and_medals_price(
        req.diplomas_count,
        req.medals_count,
        req.pricing.price_per_diploma,
        req.pricing.price_per_medal,
    );

    Ok(CalculateResponse {
        performance_price: performance.total,
        diplomas_price: extras.diplomas_price,
        medals_price: extras.medals_price,
        total_price: performance.total + extras.total,
        breakdown: CalculationBreakdown {
            regular_participants: req.participants_count - req.federation_participants_count,
            regular_price: performance.regular_price,
            price_per_regular_participant: row.regular_unit_price(),
            federation_participants: req.federation_participants_count,
            federation_price: performance.federation_price,
            price_per_federation_participant: row.federation_unit_price(),
            diplomas_count: req.diplomas_count,
            diplomas_price: extras.diplomas_price,
            price_per_diploma: req.pricing.price_per_diploma.unwrap_or(Decimal::ZERO),
            medals_count: req.medals_count,
            medals_price: extras.medals_price,
            price_per_medal: req.pricing.price_per_medal.unwrap_or(Decimal::ZERO),
            nomination_name: row.nomination.clone(),
            total_participants: req.participants_count,
        },
    })
}

/// Prices a set of registrations as one checkout.
///
/// Performance prices are summed across the selection and the discount tier
/// is resolved ONCE against that aggregate, not per registration. Diplomas
/// and medals are never discounted. The per-registration breakdown carries
/// the discount redistributed proportionally for display; the aggregate
/// figures are what gets charged.
pub fn compute_combined_total(req: &CombinedCalculateRequest) -> Result<CombinedCalculateResponse> {
    req.pricing.check_amounts()?;
    let schedule = req.pricing.discount_schedule()?;
    let table = req.pricing.price_table();

    let mut sum_performance = Decimal::ZERO;
    let mut sum_diplomas_and_medals = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(req.registrations.len());

    for entry in &req.registrations {
        let diplomas_count = match entry.diplomas_list.as_deref() {
            Some(list) => roster::count_names(list),
            None => entry.diplomas_count,
        };

        let (gross_performance, nomination_name) =
            if let Some(custom) = entry.custom_performance_price {
                if custom < Decimal::ZERO {
                    return Err(PricingError::InvalidInput(format!(
                        "customPerformancePrice for registration {} must not be negative",
                        entry.registration_id
                    )));
                }
                (custom, None)
            } else {
                let category = resolve_nomination(entry.participants_count)?;
                match table.row_for(category) {
                    Some(row) => {
                        let price = compute_performance_price(
                            entry.participants_count,
                            entry.federation_participants_count,
                            row,
                        )?;
                        (price.total, Some(row.nomination.clone()))
                    }
                    // Nothing configured to charge against.
                    None => (Decimal::ZERO, Some(category.name().to_string())),
                }
            };

        let extras = compute_diplomas_and_medals_price(
            diplomas_count,
            entry.medals_count,
            req.pricing.price_per_diploma,
            req.pricing.price_per_medal,
        );

        let toggles = entry.components;
        let performance_price = if req.paying_performance && toggles.pay_performance {
            gross_performance
        } else {
            Decimal::ZERO
        };
        let diplomas_price = if req.paying_diplomas_and_medals && toggles.pay_diplomas {
            extras.diplomas_price
        } else {
            Decimal::ZERO
        };
        let medals_price = if req.paying_diplomas_and_medals && toggles.pay_medals {
            extras.medals_price
        } else {
            Decimal::ZERO
        };

        sum_performance += performance_price;
        sum_diplomas_and_medals += diplomas_price + medals_price;

        breakdown.push(RegistrationBreakdown {
            registration_id: entry.registration_id,
            dance_name: entry.dance_name.clone(),
            collective_name: entry.collective_name.clone(),
            nomination_name,
            performance_price,
            discount_amount: Decimal::ZERO,
            diplomas_price,
            medals_price,
            diplomas_count,
            medals_count: entry.medals_count,
            total: Decimal::ZERO,
        });
    }

    let (discount_amount, discount_percent) = if req.apply_discount && req.paying_performance {
        let percent = resolve_discount_tier(sum_performance, schedule.tiers());
        (apply_discount(sum_performance, percent).discount_amount, percent)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    for line in &mut breakdown {
        if discount_amount > Decimal::ZERO && line.performance_price > Decimal::ZERO {
            line.discount_amount =
                round_money(discount_amount * line.performance_price / sum_performance);
        }
        line.total = line.performance_price - line.discount_amount
            + line.diplomas_price
            + line.medals_price;
    }

    let performance_net = sum_performance - discount_amount;

    Ok(CombinedCalculateResponse {
        total_price: performance_net + sum_diplomas_and_medals,
        performance_price: performance_net,
        diplomas_and_medals_price: sum_diplomas_and_medals,
        discount_amount,
        discount_percent,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::combined::{ComponentToggles, RegistrationEntry};
    use crate::dto::config::EventPricingConfig;
    use crate::models::DiscountTier;

    fn row(nomination: &str, regular: u32, federation: Option<u32>) -> PriceRow {
        PriceRow {
            nomination: nomination.to_string(),
            price_per_participant: Decimal::from(regular),
            price_per_federation_participant: federation.map(Decimal::from),
        }
    }

    fn tier(min: u32, max: u32, percentage: u32) -> DiscountTier {
        DiscountTier {
            min_amount: Decimal::from(min),
            max_amount: Decimal::from(max),
            percentage: Decimal::from(percentage),
        }
    }

    fn entry(id: i64, participants: u32) -> RegistrationEntry {
        RegistrationEntry {
            registration_id: id,
            dance_name: None,
            collective_name: None,
            participants_count: participants,
            federation_participants_count: 0,
            diplomas_count: 0,
            medals_count: 0,
            diplomas_list: None,
            custom_performance_price: None,
            components: ComponentToggles::default(),
        }
    }

    fn config(prices: Vec<PriceRow>, tiers: Vec<DiscountTier>) -> EventPricingConfig {
        EventPricingConfig {
            price_per_diploma: Some(Decimal::from(100)),
            price_per_medal: Some(Decimal::from(50)),
            prices,
            discount_tiers: tiers,
        }
    }

    #[test]
    fn test_performance_price_with_federation_members() {
        // 10 dancers, 2 of them federation members, 500/400 rates.
        let row = row("Formation", 500, Some(400));
        let price = compute_performance_price(10, 2, &row).unwrap();
        assert_eq!(price.regular_price, Decimal::from(4000));
        assert_eq!(price.federation_price, Decimal::from(800));
        assert_eq!(price.total, Decimal::from(4800));
    }

    #[test]
    fn test_performance_price_rejects_zero_participants() {
        let row = row("Solo", 500, None);
        assert!(compute_performance_price(0, 0, &row).is_err());
    }

    #[test]
    fn test_performance_price_rejects_federation_excess() {
        let row = row("Duet", 500, None);
        let result = compute_performance_price(2, 3, &row);
        assert!(matches!(result, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_diplomas_and_medals_price() {
        let extras = compute_diplomas_and_medals_price(
            5,
            3,
            Some(Decimal::from(100)),
            Some(Decimal::from(50)),
        );
        assert_eq!(extras.diplomas_price, Decimal::from(500));
        assert_eq!(extras.medals_price, Decimal::from(150));
        assert_eq!(extras.total, Decimal::from(650));
    }

    #[test]
    fn test_missing_unit_price_means_free() {
        let extras = compute_diplomas_and_medals_price(5, 3, None, None);
        assert_eq!(extras.total, Decimal::ZERO);
    }

    #[test]
    fn test_calculate_uses_resolved_nomination() {
        let req = CalculateRequest {
            participants_count: 10,
            federation_participants_count: 2,
            diplomas_count: 0,
            medals_count: 0,
            pricing: config(
                vec![row("Solo", 700, None), row("Formation", 500, Some(400))],
                Vec::new(),
            ),
        };
        let response = calculate(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::from(4800));
        assert_eq!(response.breakdown.nomination_name, "Formation");
        assert_eq!(response.breakdown.regular_participants, 8);
    }

    #[test]
    fn test_calculate_falls_back_to_first_row() {
        let req = CalculateRequest {
            participants_count: 30,
            federation_participants_count: 0,
            diplomas_count: 0,
            medals_count: 0,
            pricing: config(vec![row("Solo", 700, None)], Vec::new()),
        };
        // No "Production" row configured; the first row is used instead of
        // erroring. Regression guard for the documented fallback policy.
        let response = calculate(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::from(21000));
        assert_eq!(response.breakdown.nomination_name, "Solo");
    }

    #[test]
    fn test_calculate_empty_price_table_is_an_error() {
        let req = CalculateRequest {
            participants_count: 1,
            federation_participants_count: 0,
            diplomas_count: 0,
            medals_count: 0,
            pricing: config(Vec::new(), Vec::new()),
        };
        assert!(calculate(&req).is_err());
    }

    #[test]
    fn test_combined_discount_resolved_once_on_aggregate() {
        // 3000 + 2000 = 5000 lands in the 5% tier even though neither
        // registration reaches it alone.
        let req = CombinedCalculateRequest {
            registrations: vec![entry(1, 6), entry(2, 4)],
            pricing: config(
                vec![row("Small Group", 500, None)],
                vec![tier(0, 4999, 0), tier(5000, 9999, 5)],
            ),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: true,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.discount_percent, Decimal::from(5));
        assert_eq!(response.discount_amount, Decimal::from(250));
        assert_eq!(response.performance_price, Decimal::from(4750));
        assert_eq!(response.total_price, Decimal::from(4750));
        assert_eq!(response.breakdown[0].discount_amount, Decimal::from(150));
        assert_eq!(response.breakdown[1].discount_amount, Decimal::from(100));
    }

    #[test]
    fn test_discount_never_touches_diplomas_and_medals() {
        let mut reg = entry(1, 10);
        reg.diplomas_count = 5;
        reg.medals_count = 3;
        let pricing = config(
            vec![row("Formation", 2000, None)],
            vec![tier(0, 999999, 10)],
        );

        let mut req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing,
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let without = compute_combined_total(&req).unwrap();
        req.apply_discount = true;
        let with = compute_combined_total(&req).unwrap();

        assert_eq!(
            without.diplomas_and_medals_price,
            with.diplomas_and_medals_price
        );
        assert_eq!(with.diplomas_and_medals_price, Decimal::from(650));
        assert!(with.discount_amount > Decimal::ZERO);
        assert_eq!(with.breakdown[0].diplomas_price, Decimal::from(500));
        assert_eq!(with.breakdown[0].medals_price, Decimal::from(150));
    }

    #[test]
    fn test_flags_gate_the_subtotals() {
        let mut reg = entry(1, 2);
        reg.diplomas_count = 2;
        let pricing = config(vec![row("Duet", 600, None)], Vec::new());

        let req = CombinedCalculateRequest {
            registrations: vec![reg.clone()],
            pricing: pricing.clone(),
            paying_performance: false,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::ZERO);
        assert_eq!(response.total_price, Decimal::from(200));

        let req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing,
            paying_performance: true,
            paying_diplomas_and_medals: false,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.total_price, Decimal::from(1200));
        assert_eq!(response.diplomas_and_medals_price, Decimal::ZERO);
    }

    #[test]
    fn test_custom_performance_price_override() {
        let mut reg = entry(1, 10);
        reg.custom_performance_price = Some(Decimal::from(3333));
        let req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing: config(vec![row("Formation", 500, None)], Vec::new()),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::from(3333));
    }

    #[test]
    fn test_negative_custom_performance_price_rejected() {
        let mut reg = entry(1, 10);
        reg.custom_performance_price = Some(Decimal::from(-100));
        let req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing: config(vec![row("Formation", 500, None)], Vec::new()),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let err = compute_combined_total(&req).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_diplomas_list_overrides_count() {
        let mut reg = entry(1, 1);
        reg.diplomas_count = 10;
        reg.diplomas_list = Some("1. Ivanova\n2. Petrov\n\n3. Sidorova".to_string());
        let req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing: config(vec![row("Solo", 700, None)], Vec::new()),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.breakdown[0].diplomas_count, 3);
        assert_eq!(response.breakdown[0].diplomas_price, Decimal::from(300));
    }

    #[test]
    fn test_component_toggles_exclude_single_registration() {
        let mut excluded = entry(1, 2);
        excluded.components = ComponentToggles {
            pay_performance: false,
            pay_diplomas: true,
            pay_medals: true,
        };
        let included = entry(2, 2);
        let req = CombinedCalculateRequest {
            registrations: vec![excluded, included],
            pricing: config(vec![row("Duet", 600, None)], Vec::new()),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::from(1200));
        assert_eq!(response.breakdown[0].performance_price, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_totals_reconcile_with_aggregate() {
        // Awkward proportions so the redistributed discount must round.
        let registrations = vec![entry(1, 3), entry(2, 4), entry(3, 5)];
        let req = CombinedCalculateRequest {
            registrations,
            pricing: config(
                vec![row("Small Group", 333, None)],
                vec![tier(0, 999999, 7)],
            ),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: true,
        };
        let response = compute_combined_total(&req).unwrap();
        let breakdown_sum: Decimal = response.breakdown.iter().map(|line| line.total).sum();
        let tolerance = Decimal::from(response.breakdown.len() as u32);
        assert!((breakdown_sum - response.total_price).abs() <= tolerance);
    }

    #[test]
    fn test_combined_empty_price_table_charges_nothing_for_performance() {
        let mut reg = entry(1, 2);
        reg.diplomas_count = 1;
        let req = CombinedCalculateRequest {
            registrations: vec![reg],
            pricing: config(Vec::new(), Vec::new()),
            paying_performance: true,
            paying_diplomas_and_medals: true,
            apply_discount: false,
        };
        let response = compute_combined_total(&req).unwrap();
        assert_eq!(response.performance_price, Decimal::ZERO);
        assert_eq!(response.total_price, Decimal::from(100));
    }
}

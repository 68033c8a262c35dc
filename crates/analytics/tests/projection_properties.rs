//! Property-based tests for the projection engine.
//!
//! Covers: the closed-form identities between inputs and outputs, the
//! degenerate-input guard and the payback sentinel.

use analytics::format::round_half_up;
use analytics::{PaybackPeriod, ProjectionEngine};
use core_types::CalculatorInputs;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn inputs_strategy() -> impl Strategy<Value = CalculatorInputs> {
    (
        0u32..2_000_000,
        0u32..=1000,
        0u32..200_000,
        0u32..200_000,
        0u32..=100,
    )
        .prop_map(|(visitors, conversion_tenths, aov, cac, youth)| CalculatorInputs {
            monthly_visitors: Decimal::from(visitors),
            current_conversion: Decimal::new(conversion_tenths as i64, 1),
            avg_order_value: Decimal::from(aov),
            current_cac: Decimal::from(cac),
            youth_percentage: Decimal::from(youth),
        })
}

fn projectable_strategy() -> impl Strategy<Value = CalculatorInputs> {
    inputs_strategy()
        .prop_filter("conversion and order value must be non-zero", |i| {
            !i.current_conversion.is_zero() && !i.avg_order_value.is_zero()
        })
}

// ── Closed-Form Identities ───────────────────────────────────────────

proptest! {
    /// New customers are exactly visitors x conversion x 2.5 before rounding.
    #[test]
    fn new_customers_follow_the_conversion_uplift(inputs in projectable_strategy()) {
        let report = ProjectionEngine::default().project(&inputs).unwrap();
        let expected = inputs.monthly_visitors * (inputs.current_conversion / dec!(100)) * dec!(2.5);

        prop_assert_eq!(report.new_customers, round_half_up(expected));
    }

    /// New acquisition spend uses the CAC reduced to 65%.
    #[test]
    fn acquisition_cost_uses_the_reduced_cac(inputs in projectable_strategy()) {
        let report = ProjectionEngine::default().project(&inputs).unwrap();
        let new_customers = inputs.monthly_visitors * (inputs.current_conversion / dec!(100)) * dec!(2.5);
        let expected = new_customers * (inputs.current_cac * dec!(0.65));

        prop_assert_eq!(report.new_acquisition_cost, round_half_up(expected));
    }

    /// Additional customers are the difference of new and current customers,
    /// and never negative with a 2.5x uplift.
    #[test]
    fn additional_customers_are_the_difference(inputs in projectable_strategy()) {
        let report = ProjectionEngine::default().project(&inputs).unwrap();
        let difference = report.new_customers - report.current_customers;

        prop_assert!(report.additional_customers >= Decimal::ZERO);
        // Each side is rounded independently.
        prop_assert!((report.additional_customers - difference).abs() <= Decimal::ONE);
    }

    /// The monthly impact is additional revenue plus cost savings.
    #[test]
    fn total_impact_is_revenue_plus_savings(inputs in projectable_strategy()) {
        let report = ProjectionEngine::default().project(&inputs).unwrap();
        let sum = report.additional_revenue + report.cost_savings;

        prop_assert!((report.total_monthly_impact - sum).abs() <= Decimal::ONE);
    }

    /// A non-positive impact never pays back and has a zero ROI multiple;
    /// a positive one always has a finite payback.
    #[test]
    fn payback_sentinel_tracks_the_sign_of_the_impact(inputs in projectable_strategy()) {
        let report = ProjectionEngine::default().project(&inputs).unwrap();

        match report.payback_period {
            PaybackPeriod::Never => {
                prop_assert_eq!(report.roi_multiple.as_str(), "0.0");
                prop_assert!(report.total_monthly_impact <= Decimal::ZERO);
            }
            PaybackPeriod::Months(_) => {
                prop_assert!(report.total_monthly_impact >= Decimal::ZERO);
            }
        }
    }

    /// Zero conversion or zero order value never yields a projection.
    #[test]
    fn degenerate_inputs_are_skipped(mut inputs in inputs_strategy(), zero_aov in any::<bool>()) {
        if zero_aov {
            inputs.avg_order_value = Decimal::ZERO;
        } else {
            inputs.current_conversion = Decimal::ZERO;
        }

        prop_assert_eq!(ProjectionEngine::default().project(&inputs), None);
    }

    /// The engine is deterministic.
    #[test]
    fn projection_is_deterministic(inputs in inputs_strategy()) {
        let engine = ProjectionEngine::default();
        prop_assert_eq!(engine.project(&inputs), engine.project(&inputs));
    }
}

use crate::format::round_half_up;
use crate::report::ProjectionReport;
use core_types::{Assumptions, CalculatorInputs};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// The "what you're missing" figures shown next to the inputs.
///
/// They compare the visitor's youth segment against brands that already
/// convert youth traffic at the benchmark rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakageInsights {
    pub youth_visitors: Decimal,
    /// Youth customers lost against the benchmark conversion rate.
    pub lost_youth_customers: Decimal,
    pub monthly_revenue_leakage: Decimal,
    pub current_cac: Decimal,
    /// Acquisition cost after the CAC reduction.
    pub achievable_cac: Decimal,
    /// Additional revenue as a whole-number percentage of current revenue.
    pub revenue_increase_pct: Decimal,
    /// The benchmark the leakage was measured against, in percent.
    pub benchmark_conversion_pct: Decimal,
}

impl LeakageInsights {
    /// Derives the insights from the inputs and the latest projection.
    ///
    /// Works on the rounded figures of the report, so the numbers agree with
    /// what is displayed. Returns `None` when there is no projection yet or an
    /// amount overflows.
    pub fn derive(
        inputs: &CalculatorInputs,
        report: Option<&ProjectionReport>,
        assumptions: &Assumptions,
    ) -> Option<Self> {
        let report = report?;
        let benchmark = assumptions.youth_benchmark_conversion_pct.checked_div(dec!(100))?;

        let lost_youth_customers = if report.youth_visitors.is_zero() {
            Decimal::ZERO
        } else {
            round_half_up(
                report
                    .youth_visitors
                    .checked_mul(benchmark)?
                    .checked_sub(report.youth_customers)?,
            )
        };
        let monthly_revenue_leakage = lost_youth_customers.checked_mul(inputs.avg_order_value)?;
        let achievable_cac = round_half_up(inputs.current_cac.checked_mul(assumptions.cac_multiplier)?);

        // An empty current revenue is treated as 1 so the ratio stays defined.
        let base_revenue = if report.current_revenue.is_zero() {
            Decimal::ONE
        } else {
            report.current_revenue
        };
        let revenue_increase_pct = report
            .additional_revenue
            .checked_div(base_revenue)?
            .checked_mul(dec!(100))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Some(Self {
            youth_visitors: report.youth_visitors,
            lost_youth_customers,
            monthly_revenue_leakage,
            current_cac: inputs.current_cac,
            achievable_cac,
            revenue_increase_pct,
            benchmark_conversion_pct: assumptions.youth_benchmark_conversion_pct,
        })
    }
}

use crate::error::AnalyticsError;
use crate::format::{round_half_up, to_fixed};
use crate::report::{PaybackPeriod, ProjectionReport};
use core_types::{Assumptions, CalculatorInputs};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// A stateless calculator that turns the five business metrics into a
/// revenue-impact projection.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Creates a new engine, validating the assumptions it will project with.
    pub fn new(assumptions: Assumptions) -> Result<Self, AnalyticsError> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// The main entry point for projecting the impact of the engagement.
    ///
    /// # Returns
    ///
    /// `None` when the conversion rate or the average order value is zero.
    /// The caller is expected to keep whatever snapshot it already had in
    /// that case rather than reset it. `None` is also returned if an amount
    /// is too large to be represented.
    pub fn project(&self, inputs: &CalculatorInputs) -> Option<ProjectionReport> {
        if inputs.current_conversion.is_zero() || inputs.avg_order_value.is_zero() {
            tracing::debug!(
                conversion = %inputs.current_conversion,
                avg_order_value = %inputs.avg_order_value,
                "Degenerate inputs, projection skipped."
            );
            return None;
        }

        let report = self.calculate(inputs);
        if report.is_none() {
            tracing::warn!(?inputs, "Projection overflowed, keeping the previous snapshot.");
        }
        report
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Option<ProjectionReport> {
        let a = &self.assumptions;
        let visitors = inputs.monthly_visitors;
        let conversion = inputs.current_conversion.checked_div(PERCENT)?;
        let aov = inputs.avg_order_value;
        let cac = inputs.current_cac;
        let youth_share = inputs.youth_percentage.checked_div(PERCENT)?;

        // --- 1. Current State ---
        let current_customers = visitors.checked_mul(conversion)?;
        let current_revenue = current_customers.checked_mul(aov)?;
        let current_acquisition_cost = current_customers.checked_mul(cac)?;

        // --- 2. Youth Segment ---
        let youth_visitors = visitors.checked_mul(youth_share)?;
        let youth_customers = current_customers.checked_mul(youth_share)?;
        let youth_revenue = youth_customers.checked_mul(aov)?;

        // --- 3. After Implementation ---
        let improved_conversion = conversion.checked_mul(a.conversion_multiplier)?;
        let reduced_cac = cac.checked_mul(a.cac_multiplier)?;

        let new_customers = visitors.checked_mul(improved_conversion)?;
        let new_revenue = new_customers.checked_mul(aov)?;
        let new_acquisition_cost = new_customers.checked_mul(reduced_cac)?;

        // --- 4. Gains ---
        let additional_customers = new_customers.checked_sub(current_customers)?;
        let additional_revenue = new_revenue.checked_sub(current_revenue)?;
        let cost_savings = current_acquisition_cost.checked_sub(new_acquisition_cost)?;
        let total_impact = additional_revenue.checked_add(cost_savings)?;
        let annual_impact = total_impact.checked_mul(MONTHS_PER_YEAR)?;

        // --- 5. Return on Investment ---
        // `investment` is validated to be positive, and the payback branch
        // only divides by a positive impact.
        let (roi_multiple, payback_period) = if total_impact > Decimal::ZERO {
            let roi = annual_impact.checked_div(a.investment)?;
            let mut months = a
                .investment
                .checked_div(total_impact)?
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            months.rescale(1);
            (roi, PaybackPeriod::Months(months))
        } else {
            (Decimal::ZERO, PaybackPeriod::Never)
        };

        Some(ProjectionReport {
            current_customers: round_half_up(current_customers),
            current_revenue: round_half_up(current_revenue),
            current_acquisition_cost: round_half_up(current_acquisition_cost),
            youth_visitors: round_half_up(youth_visitors),
            youth_customers: round_half_up(youth_customers),
            youth_revenue: round_half_up(youth_revenue),
            new_customers: round_half_up(new_customers),
            new_revenue: round_half_up(new_revenue),
            new_acquisition_cost: round_half_up(new_acquisition_cost),
            additional_customers: round_half_up(additional_customers),
            additional_revenue: round_half_up(additional_revenue),
            cost_savings: round_half_up(cost_savings),
            total_monthly_impact: round_half_up(total_impact),
            annual_impact: round_half_up(annual_impact),
            roi_multiple: to_fixed(roi_multiple, 1),
            payback_period,
        })
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel shown when the engagement never pays for itself.
pub const INFINITE_PAYBACK: &str = "∞";

/// The complete revenue-impact projection derived from one set of inputs.
///
/// This struct is the final output of the `ProjectionEngine`. It is always
/// produced in one piece and replaced wholesale on every recompute; nothing
/// mutates individual fields after the engine returns it.
///
/// All amounts are rounded to whole units. The two ratios are carried in
/// their display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    // I. Current State
    pub current_customers: Decimal,
    pub current_revenue: Decimal,
    pub current_acquisition_cost: Decimal,

    // II. Youth Segment
    pub youth_visitors: Decimal,
    pub youth_customers: Decimal,
    pub youth_revenue: Decimal,

    // III. After Implementation
    pub new_customers: Decimal,
    pub new_revenue: Decimal,
    pub new_acquisition_cost: Decimal,

    // IV. Gains
    pub additional_customers: Decimal,
    pub additional_revenue: Decimal,
    pub cost_savings: Decimal,
    pub total_monthly_impact: Decimal,
    pub annual_impact: Decimal,

    // V. Return on Investment
    /// Annual impact over the investment, one decimal place.
    pub roi_multiple: String,
    pub payback_period: PaybackPeriod,
}

/// Months until the monthly impact has repaid the investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PaybackPeriod {
    /// Payback in months, already rounded to one decimal place.
    Months(Decimal),
    /// The monthly impact is not positive, so the investment is never repaid.
    Never,
}

impl PaybackPeriod {
    pub fn is_never(&self) -> bool {
        matches!(self, PaybackPeriod::Never)
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Months(months) => write!(f, "{}", months),
            PaybackPeriod::Never => f.write_str(INFINITE_PAYBACK),
        }
    }
}

impl From<PaybackPeriod> for String {
    fn from(period: PaybackPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for PaybackPeriod {
    type Error = rust_decimal::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == INFINITE_PAYBACK {
            return Ok(PaybackPeriod::Never);
        }
        Decimal::from_str(&value).map(PaybackPeriod::Months)
    }
}

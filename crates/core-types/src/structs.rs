use crate::enums::InputField;
use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five business metrics a visitor enters into the calculator.
///
/// Every field is a finite, non-negative amount. Percentages are stored as
/// entered (0-100) and normalised to fractions by the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    pub monthly_visitors: Decimal,
    /// Conversion rate in percent.
    pub current_conversion: Decimal,
    pub avg_order_value: Decimal,
    pub current_cac: Decimal,
    /// Share of traffic in the 18-28 band, in percent.
    pub youth_percentage: Decimal,
}

impl CalculatorInputs {
    /// Returns the current value of a single field.
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::MonthlyVisitors => self.monthly_visitors,
            InputField::CurrentConversion => self.current_conversion,
            InputField::AvgOrderValue => self.avg_order_value,
            InputField::CurrentCac => self.current_cac,
            InputField::YouthPercentage => self.youth_percentage,
        }
    }

    /// Overwrites a single field. Negative amounts are clamped to zero so the
    /// non-negative invariant holds no matter where the value came from.
    pub fn set(&mut self, field: InputField, value: Decimal) {
        let value = value.max(Decimal::ZERO);
        match field {
            InputField::MonthlyVisitors => self.monthly_visitors = value,
            InputField::CurrentConversion => self.current_conversion = value,
            InputField::AvgOrderValue => self.avg_order_value = value,
            InputField::CurrentCac => self.current_cac = value,
            InputField::YouthPercentage => self.youth_percentage = value,
        }
    }

    /// Coerces raw user text and stores it in `field`.
    pub fn set_raw(&mut self, field: InputField, raw: &str) {
        self.set(field, coerce_amount(raw));
    }

    /// Returns a copy with every field clamped to be non-negative.
    pub fn clamped(mut self) -> Self {
        for field in InputField::ALL {
            let value = self.get(field);
            self.set(field, value);
        }
        self
    }
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            monthly_visitors: dec!(10000),
            current_conversion: dec!(2),
            avg_order_value: dec!(5000),
            current_cac: dec!(3000),
            youth_percentage: dec!(60),
        }
    }
}

/// Turns raw user text into an input amount.
///
/// Anything that does not parse as a number becomes zero, and negative numbers
/// are clamped to zero. No error is ever surfaced to the user.
pub fn coerce_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|_| {
            tracing::debug!(raw = trimmed, "Non-numeric input coerced to zero.");
            Decimal::ZERO
        });

    parsed.max(Decimal::ZERO)
}

/// The improvement assumptions behind the projection.
///
/// The defaults are the fixed constants of the Y.U.V.A. engagement model: a
/// 2.5x conversion uplift, a 35% reduction in acquisition cost, a ₹3L
/// engagement investment and a 4% youth conversion benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub conversion_multiplier: Decimal,
    pub cac_multiplier: Decimal,
    pub investment: Decimal,
    /// Conversion rate, in percent, that youth-optimised brands achieve.
    pub youth_benchmark_conversion_pct: Decimal,
}

impl Assumptions {
    /// Checks that the assumptions describe a computable projection.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.investment <= Decimal::ZERO {
            return Err(CoreError::InvalidAssumption(
                "investment".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        if self.conversion_multiplier < Decimal::ZERO {
            return Err(CoreError::InvalidAssumption(
                "conversion_multiplier".to_string(),
                "must not be negative".to_string(),
            ));
        }
        if self.cac_multiplier < Decimal::ZERO {
            return Err(CoreError::InvalidAssumption(
                "cac_multiplier".to_string(),
                "must not be negative".to_string(),
            ));
        }
        if self.youth_benchmark_conversion_pct < Decimal::ZERO
            || self.youth_benchmark_conversion_pct > dec!(100)
        {
            return Err(CoreError::InvalidAssumption(
                "youth_benchmark_conversion_pct".to_string(),
                "must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            conversion_multiplier: dec!(2.5),
            cac_multiplier: dec!(0.65),
            investment: dec!(300000),
            youth_benchmark_conversion_pct: dec!(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_the_seeded_form() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.monthly_visitors, dec!(10000));
        assert_eq!(inputs.current_conversion, dec!(2));
        assert_eq!(inputs.avg_order_value, dec!(5000));
        assert_eq!(inputs.current_cac, dec!(3000));
        assert_eq!(inputs.youth_percentage, dec!(60));
    }

    #[test]
    fn malformed_text_coerces_to_zero() {
        assert_eq!(coerce_amount("abc"), Decimal::ZERO);
        assert_eq!(coerce_amount(""), Decimal::ZERO);
        assert_eq!(coerce_amount("   "), Decimal::ZERO);
        assert_eq!(coerce_amount("12abc"), Decimal::ZERO);
        assert_eq!(coerce_amount("-40"), Decimal::ZERO);
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(coerce_amount(" 2500 "), dec!(2500));
        assert_eq!(coerce_amount("2.5"), dec!(2.5));
        assert_eq!(coerce_amount("1e4"), dec!(10000));
    }

    #[test]
    fn set_raw_updates_only_the_named_field() {
        let mut inputs = CalculatorInputs::default();
        inputs.set_raw(InputField::CurrentCac, "4200");
        assert_eq!(inputs.current_cac, dec!(4200));
        assert_eq!(inputs.avg_order_value, dec!(5000));
    }

    #[test]
    fn default_assumptions_are_valid() {
        assert!(Assumptions::default().validate().is_ok());
    }

    #[test]
    fn zero_investment_is_rejected() {
        let assumptions = Assumptions {
            investment: Decimal::ZERO,
            ..Assumptions::default()
        };
        assert!(matches!(
            assumptions.validate(),
            Err(CoreError::InvalidAssumption(name, _)) if name == "investment"
        ));
    }

    proptest! {
        #[test]
        fn coerced_amounts_are_never_negative(raw in "[0-9a-df-z .,-]{0,16}") {
            prop_assert!(coerce_amount(&raw) >= Decimal::ZERO);
        }

        #[test]
        fn integers_survive_coercion(n in 0u32..10_000_000) {
            prop_assert_eq!(coerce_amount(&n.to_string()), Decimal::from(n));
        }
    }
}

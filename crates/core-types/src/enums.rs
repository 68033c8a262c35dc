use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five editable inputs of the calculator.
///
/// The shell edits inputs one field at a time, so every edit is addressed by
/// one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    MonthlyVisitors,
    CurrentConversion,
    AvgOrderValue,
    CurrentCac,
    YouthPercentage,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::MonthlyVisitors,
        InputField::CurrentConversion,
        InputField::AvgOrderValue,
        InputField::CurrentCac,
        InputField::YouthPercentage,
    ];

    /// The human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::MonthlyVisitors => "Monthly Website Visitors",
            InputField::CurrentConversion => "Current Conversion Rate",
            InputField::AvgOrderValue => "Average Order Value",
            InputField::CurrentCac => "Customer Acquisition Cost",
            InputField::YouthPercentage => "% of Traffic That's Youth (18-28)",
        }
    }

    /// The unit suffix rendered after the value, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            InputField::MonthlyVisitors => None,
            InputField::CurrentConversion | InputField::YouthPercentage => Some("%"),
            InputField::AvgOrderValue | InputField::CurrentCac => Some("₹"),
        }
    }

    /// The short key used on the command line and in the interactive session.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::MonthlyVisitors => "visitors",
            InputField::CurrentConversion => "conversion",
            InputField::AvgOrderValue => "order-value",
            InputField::CurrentCac => "cac",
            InputField::YouthPercentage => "youth",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "visitors" | "monthly-visitors" => Ok(InputField::MonthlyVisitors),
            "conversion" | "current-conversion" => Ok(InputField::CurrentConversion),
            "order-value" | "aov" | "avg-order-value" => Ok(InputField::AvgOrderValue),
            "cac" | "current-cac" => Ok(InputField::CurrentCac),
            "youth" | "youth-percentage" => Ok(InputField::YouthPercentage),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

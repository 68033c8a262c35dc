//! Plain-text renderings of a projection: the downloadable report and the
//! one-sentence share summary.

use crate::format::group_digits;
use crate::report::ProjectionReport;
use core_types::CalculatorInputs;
use std::fmt;

/// Renders the downloadable "Revenue Impact Report".
pub fn render_text_report(inputs: &CalculatorInputs, report: &ProjectionReport) -> String {
    TextReport { inputs, report }.to_string()
}

struct TextReport<'a> {
    inputs: &'a CalculatorInputs,
    report: &'a ProjectionReport,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TextReport { inputs, report } = self;
        writeln!(out, "GenX Marketing - Y.U.V.A. Revenue Impact Report")?;
        writeln!(out, "===============================================")?;
        writeln!(out)?;
        writeln!(out, "Your Current Metrics:")?;
        writeln!(out, "- Monthly Website Visitors: {}", group_digits(inputs.monthly_visitors))?;
        writeln!(out, "- Current Conversion Rate: {}%", inputs.current_conversion.normalize())?;
        writeln!(out, "- Average Order Value: ₹{}", group_digits(inputs.avg_order_value))?;
        writeln!(out, "- Customer Acquisition Cost: ₹{}", group_digits(inputs.current_cac))?;
        writeln!(out, "- Youth Traffic (18-28): {}%", inputs.youth_percentage.normalize())?;
        writeln!(out)?;
        writeln!(out, "Current Performance:")?;
        writeln!(out, "- Monthly Customers: {}", group_digits(report.current_customers))?;
        writeln!(out, "- Monthly Revenue: ₹{}", group_digits(report.current_revenue))?;
        writeln!(out, "- Total Acquisition Cost: ₹{}", group_digits(report.current_acquisition_cost))?;
        writeln!(out)?;
        writeln!(out, "After Y.U.V.A. Implementation (90 Days):")?;
        writeln!(out, "- Additional Customers/Month: +{}", group_digits(report.additional_customers))?;
        writeln!(out, "- Additional Revenue/Month: ₹{}", group_digits(report.additional_revenue))?;
        writeln!(out, "- CAC Savings/Month: ₹{}", group_digits(report.cost_savings))?;
        writeln!(out, "- Total Monthly Impact: ₹{}", group_digits(report.total_monthly_impact))?;
        writeln!(out, "- Annual Impact: ₹{}", group_digits(report.annual_impact))?;
        writeln!(out, "- ROI Multiple: {}x", report.roi_multiple)?;
        writeln!(out, "- Payback Period: {} months", report.payback_period)?;
        writeln!(out)?;
        writeln!(out, "Generated by GenX Marketing")?;
        write!(out, "Your Partner in Youth-First Growth Strategy")
    }
}

/// The sentence handed to the share action.
pub fn share_summary(report: &ProjectionReport) -> String {
    format!(
        "I just calculated my Y.U.V.A. Revenue Impact with GenX Marketing! \
         My business could gain ₹{} monthly through youth-first growth strategy.",
        group_digits(report.total_monthly_impact)
    )
}

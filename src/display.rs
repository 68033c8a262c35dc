use analytics::{format_currency, group_digits, LeakageInsights, ProjectionReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use core_types::{CalculatorInputs, InputField};
use engine::CalculatorSession;
use rust_decimal::Decimal;

fn new_table(header: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new(header), Cell::new("")]);
    table
}

fn input_value(inputs: &CalculatorInputs, field: InputField) -> String {
    let value = group_digits(inputs.get(field));
    match field.suffix() {
        Some("₹") => format!("₹{}", value),
        Some(suffix) => format!("{}{}", value, suffix),
        None => value,
    }
}

/// "Your Current Metrics".
pub fn inputs_table(inputs: &CalculatorInputs) -> Table {
    let mut table = new_table("Your Current Metrics");
    for field in InputField::ALL {
        table.add_row(vec![field.label().to_string(), input_value(inputs, field)]);
    }
    table
}

/// "What You're Missing".
pub fn insights_table(insights: &LeakageInsights) -> Table {
    let mut table = new_table("What You're Missing");
    table
        .add_row(vec![
            "Youth visitors per month".to_string(),
            group_digits(insights.youth_visitors),
        ])
        .add_row(vec![
            format!(
                "Lost youth customers ({}% benchmark)",
                insights.benchmark_conversion_pct.normalize()
            ),
            format!("~{}", group_digits(insights.lost_youth_customers)),
        ])
        .add_row(vec![
            "Monthly revenue leakage".to_string(),
            format_currency(insights.monthly_revenue_leakage),
        ])
        .add_row(vec![
            "Your CAC -> Achievable".to_string(),
            format!(
                "₹{} -> ₹{}",
                group_digits(insights.current_cac),
                group_digits(insights.achievable_cac)
            ),
        ]);
    table
}

/// "After Y.U.V.A. Implementation (90 Days)".
pub fn projection_table(report: &ProjectionReport, insights: Option<&LeakageInsights>, investment: Decimal) -> Table {
    let increase = insights
        .map(|i| format!(" ({}% increase)", i.revenue_increase_pct))
        .unwrap_or_default();

    let mut table = new_table("After Y.U.V.A. Implementation (90 Days)");
    table
        .add_row(vec![
            "Additional Customers/Month".to_string(),
            format!(
                "+{} (from {} to {})",
                group_digits(report.additional_customers),
                group_digits(report.current_customers),
                group_digits(report.new_customers)
            ),
        ])
        .add_row(vec![
            "Additional Revenue/Month".to_string(),
            format!("{}{}", format_currency(report.additional_revenue), increase),
        ])
        .add_row(vec![
            "CAC Savings/Month".to_string(),
            format_currency(report.cost_savings),
        ])
        .add_row(vec![
            "Total Monthly Impact".to_string(),
            format_currency(report.total_monthly_impact),
        ])
        .add_row(vec![
            "Annual Impact".to_string(),
            format_currency(report.annual_impact),
        ])
        .add_row(vec!["ROI Multiple".to_string(), format!("{}x", report.roi_multiple)])
        .add_row(vec![
            "Payback Period".to_string(),
            format!("{} months", report.payback_period),
        ])
        .add_row(vec!["Investment".to_string(), format_currency(investment)]);
    table
}

/// Prints the whole calculator view for the session.
pub fn print_session(session: &CalculatorSession) {
    println!("{}", inputs_table(session.inputs()));

    let Some(report) = session.results() else {
        println!("No projection yet: conversion rate and average order value must be non-zero.");
        return;
    };

    let insights = session.insights();
    if let Some(insights) = &insights {
        println!("{}", insights_table(insights));
    }
    println!(
        "{}",
        projection_table(report, insights.as_ref(), session.engine().assumptions().investment)
    );
}

/// One-line summary printed after each edit in the interactive session.
pub fn summary_line(report: &ProjectionReport) -> String {
    format!(
        "Total monthly impact: {} | Annual: {} | ROI: {}x | Payback: {} months",
        format_currency(report.total_monthly_impact),
        format_currency(report.annual_impact),
        report.roi_multiple,
        report.payback_period
    )
}

/// Shows the share text when no native share capability could take it.
pub fn alert(text: &str) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80)
        .add_row(vec![Cell::new(text)]);
    println!("{}", table);
}

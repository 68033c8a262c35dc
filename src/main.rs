use alerter::{share_results, ShareOutcome, TelegramShare};
use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use configuration::{init_logging, load_config, AssumptionOverrides, Config};
use core_types::{CalculatorInputs, InputField};
use engine::CalculatorSession;
use serde_json::json;
use std::path::PathBuf;

mod display;
mod shell;

/// The main entry point for the Y.U.V.A. revenue impact calculator.
#[tokio::main]
async fn main() {
    // The .env file is optional; it usually only carries the share credentials.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to read .env file: {}", e);
        }
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Y.U.V.A. Revenue Impact Calculator: see what youth-first growth is worth to your business.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    inputs: InputArgs,

    #[command(flatten)]
    assumptions: AssumptionOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the projection for the given metrics.
    Calculate {
        /// Print the inputs, projection and insights as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Download the plain-text impact report.
    Export {
        /// Directory to save the report into (defaults to the configured one).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Share the monthly impact, or show it as an alert if sharing is unavailable.
    Share,
    /// Request the strategy guide for an email address.
    Lead {
        #[arg(long)]
        email: String,
    },
    /// Edit the metrics one at a time and watch the projection update.
    Interactive,
}

/// The five business metrics. Values are taken as typed; anything that is
/// not a number counts as zero.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Monthly website visitors.
    #[arg(long, global = true, value_name = "COUNT", allow_hyphen_values = true)]
    visitors: Option<String>,

    /// Current conversion rate in percent.
    #[arg(long, global = true, value_name = "PERCENT", allow_hyphen_values = true)]
    conversion: Option<String>,

    /// Average order value in rupees.
    #[arg(long = "order-value", global = true, value_name = "RUPEES", allow_hyphen_values = true)]
    order_value: Option<String>,

    /// Customer acquisition cost in rupees.
    #[arg(long, global = true, value_name = "RUPEES", allow_hyphen_values = true)]
    cac: Option<String>,

    /// Share of traffic aged 18-28, in percent.
    #[arg(long, global = true, value_name = "PERCENT", allow_hyphen_values = true)]
    youth: Option<String>,
}

impl InputArgs {
    /// Writes every supplied value over `inputs`.
    fn apply_to(&self, inputs: &mut CalculatorInputs) {
        let supplied = [
            (InputField::MonthlyVisitors, &self.visitors),
            (InputField::CurrentConversion, &self.conversion),
            (InputField::AvgOrderValue, &self.order_value),
            (InputField::CurrentCac, &self.cac),
            (InputField::YouthPercentage, &self.youth),
        ];
        for (field, raw) in supplied {
            if let Some(raw) = raw {
                inputs.set_raw(field, raw);
            }
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging)?;

    cli.assumptions.apply_to(&mut config.assumptions);
    cli.inputs.apply_to(&mut config.inputs);

    let session = CalculatorSession::from_config(&config).context("Failed to start the calculator")?;
    tracing::debug!(inputs = ?session.inputs(), "Session started.");

    match cli.command {
        Commands::Calculate { json } => handle_calculate(&session, json),
        Commands::Export { output } => handle_export(&session, &config, output),
        Commands::Share => handle_share(&session, &config).await,
        Commands::Lead { email } => handle_lead(session, &email),
        Commands::Interactive => {
            let native = TelegramShare::new(&config.share.telegram);
            shell::run_interactive(session, native.as_ref(), &config.report.output_dir).await
        }
    }
}

fn handle_calculate(session: &CalculatorSession, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let document = json!({
            "inputs": session.inputs(),
            "results": session.results(),
            "insights": session.insights(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        display::print_session(session);
    }
    Ok(())
}

fn handle_export(session: &CalculatorSession, config: &Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    let report = session.export_report()?;
    let dir = output.unwrap_or_else(|| config.report.output_dir.clone());
    let path = report
        .write_to(&dir)
        .with_context(|| format!("Failed to save report into {}", dir.display()))?;
    println!("Report saved to {}", path.display());
    Ok(())
}

async fn handle_share(session: &CalculatorSession, config: &Config) -> anyhow::Result<()> {
    let payload = session.share_payload()?;
    let native = TelegramShare::new(&config.share.telegram);

    match share_results(native.as_ref(), &payload).await {
        ShareOutcome::Shared => println!("Shared: {}", payload.text),
        ShareOutcome::Alerted(text) => display::alert(&text),
    }
    Ok(())
}

fn handle_lead(mut session: CalculatorSession, email: &str) -> anyhow::Result<()> {
    session.toggle_lead_form();
    session.set_lead_email(email);
    session.submit_lead(Utc::now())?;
    println!("{}", session.lead_form().button_label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_inputs_override_only_what_was_given() {
        let cli = Cli::parse_from(["yuva", "--visitors", "20000", "--cac", "oops", "calculate"]);
        let mut inputs = CalculatorInputs::default();
        cli.inputs.apply_to(&mut inputs);

        assert_eq!(inputs.monthly_visitors, dec!(20000));
        assert_eq!(inputs.current_cac, dec!(0));
        assert_eq!(inputs.avg_order_value, dec!(5000));
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from(["yuva", "export", "--conversion", "3", "--investment", "450000"]);
        assert_eq!(cli.inputs.conversion.as_deref(), Some("3"));
        assert_eq!(cli.assumptions.investment, Some(dec!(450000)));
        assert!(matches!(cli.command, Commands::Export { output: None }));
    }

    #[test]
    fn export_writes_the_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let session = CalculatorSession::from_config(&config).unwrap();

        handle_export(&session, &config, Some(dir.path().to_path_buf())).unwrap();

        let written = std::fs::read_to_string(dir.path().join("YUVA_ROI_Report.txt")).unwrap();
        assert!(written.starts_with("GenX Marketing - Y.U.V.A. Revenue Impact Report"));
        assert!(written.contains("- ROI Multiple: 45.0x"));
    }

    #[test]
    fn lead_is_acknowledged_without_a_projection() {
        let mut config = Config::default();
        config.inputs.current_conversion = dec!(0);
        let session = CalculatorSession::from_config(&config).unwrap();
        assert!(session.results().is_none());

        assert!(handle_lead(session, "founder@example.in").is_ok());
    }

    #[test]
    fn lead_without_an_email_is_an_error() {
        let session = CalculatorSession::from_config(&Config::default()).unwrap();
        assert!(handle_lead(session, "   ").is_err());
    }
}

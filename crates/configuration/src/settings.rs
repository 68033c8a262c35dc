use core_types::{Assumptions, CalculatorInputs};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing `config.toml` yields the stock
/// calculator with the fixed Y.U.V.A. assumptions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Values the form is seeded with at session start.
    pub inputs: CalculatorInputs,
    pub assumptions: Assumptions,
    pub report: ReportConfig,
    pub share: ShareConfig,
    pub lead: LeadConfig,
    pub logging: LoggingConfig,
}

/// Where and under which name the text report is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub filename: String,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            filename: "YUVA_ROI_Report.txt".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Settings for the share action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Title attached to the shared summary.
    pub title: String,
    /// The native share channel. Leaving it empty makes the shell fall back
    /// to an on-screen alert.
    pub telegram: TelegramConfig,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "Y.U.V.A. Revenue Impact Calculator".to_string(),
            telegram: TelegramConfig::default(),
        }
    }
}

/// Credentials for the Telegram bot used as the native share capability.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

/// Settings for the lead-capture form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    /// Seconds the "sent" acknowledgement stays up before the form resets.
    pub reset_after_secs: i64,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self { reset_after_secs: 3 }
    }
}

/// Logging output. `RUST_LOG` takes precedence over `level` when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are additionally written to a daily rolling file here.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            directory: None,
            file_prefix: "yuva.log".to_string(),
        }
    }
}

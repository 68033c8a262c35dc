use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod overrides;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use overrides::AssumptionOverrides;
pub use settings::{Config, LeadConfig, LoggingConfig, ReportConfig, ShareConfig, TelegramConfig};

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "YUVA";
/// Upper bound for the lead-form acknowledgement delay (one hour).
const MAX_LEAD_RESET_SECS: i64 = 3600;

/// Loads the application configuration.
///
/// Reads `path` when given (it must then exist), otherwise an optional
/// `config.toml` in the working directory. Environment variables of the form
/// `YUVA__SECTION__KEY` override file values. The assumptions are validated
/// before the configuration is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_environment(path, environment())
}

/// The `YUVA__SECTION__KEY` environment source.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

fn load_with_environment(
    path: Option<&Path>,
    environment: config::Environment,
) -> Result<Config, ConfigError> {
    let file_source = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file_source)
        .add_source(environment)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    config
        .assumptions
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    if config.report.filename.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.filename must not be empty".to_string(),
        ));
    }

    if !(0..=MAX_LEAD_RESET_SECS).contains(&config.lead.reset_after_secs) {
        return Err(ConfigError::ValidationError(format!(
            "lead.reset_after_secs must be between 0 and {}",
            MAX_LEAD_RESET_SECS
        )));
    }

    Ok(config)
}

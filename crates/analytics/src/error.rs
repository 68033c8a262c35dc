use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid projection assumptions: {0}")]
    InvalidAssumptions(#[from] core_types::CoreError),
}

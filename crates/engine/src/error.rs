use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No projection is available yet. Enter a non-zero conversion rate and order value.")]
    NoProjection,

    #[error("The lead form is not open.")]
    LeadFormClosed,

    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),

    #[error("Projection engine error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Hand-off payload error: {0}")]
    Events(#[from] events::EventsError),
}

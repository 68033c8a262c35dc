use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Failed to serialize hand-off payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

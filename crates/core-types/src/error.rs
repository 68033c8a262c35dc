use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown input field '{0}'. Expected one of: visitors, conversion, order-value, cac, youth")]
    UnknownField(String),

    #[error("Invalid assumption {0}: {1}")]
    InvalidAssumption(String, String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChanakyaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

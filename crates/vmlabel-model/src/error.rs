use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid ip address: {0}")]
    InvalidAddress(String),

    #[error("failed to decode interface query result: {0}")]
    Decode(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

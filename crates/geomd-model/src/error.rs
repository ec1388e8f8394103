use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown obligation level: {0}")]
    UnknownObligation(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

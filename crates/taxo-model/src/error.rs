use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

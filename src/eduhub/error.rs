use crate::model::ResourceId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EduhubError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EduhubError>;

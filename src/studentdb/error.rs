use crate::model::Roll;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentDbError {
    #[error("Roll already exists: {0}")]
    DuplicateKey(Roll),

    #[error("Student not found: {0}")]
    NotFound(Roll),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Input closed")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StudentDbError>;

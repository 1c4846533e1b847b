use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidanceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskdeckError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Input(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskdeckError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid indicator rows: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

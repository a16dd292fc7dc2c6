use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

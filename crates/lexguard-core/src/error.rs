use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("entity recognizer failed: {0}")]
    Recognizer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

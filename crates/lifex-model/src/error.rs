use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),
    #[error("output frame: {0}")]
    Frame(String),
}

pub type Result<T> = std::result::Result<T, CleanError>;

use thiserror::Error;

/// Failures of the staged session driver.
///
/// The graph operations themselves never fail.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid compression budget: {line:?}")]
    InvalidBudget { line: String },
}

pub type SessionResult<T> = Result<T, SessionError>;

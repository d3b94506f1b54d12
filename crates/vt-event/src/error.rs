use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;

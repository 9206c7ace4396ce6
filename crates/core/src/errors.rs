use thiserror::Error;

/// Failures that can reach the edge of a slot request.
///
/// Timestamp formatting problems and malformed request parameters are absorbed
/// where they happen and never show up here.
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type SlotResult<T> = Result<T, SlotError>;

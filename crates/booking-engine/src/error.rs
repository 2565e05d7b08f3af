//! Error types for booking-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid block size: {0} minutes")]
    InvalidBlockSize(i64),
}

pub type Result<T> = std::result::Result<T, EngineError>;

use thiserror::Error;

use crate::domain::InvalidOperation;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error(transparent)]
    Rejected(#[from] InvalidOperation),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown operation: {0} (expected deposit or withdrawal)")]
    UnknownOperation(String),
}

#![forbid(unsafe_code)]

//! Application errors.

use thiserror::Error;

use lunchwheel_core::ItemError;
use lunchwheel_store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// A user-facing argument problem (unknown name, duplicate, empty).
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        AppError::InvalidArgument {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

//! # Console Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console Session                    │
//! │                                                                         │
//! │  operator text ──► InputError ──────────┐                              │
//! │                                         ├──► printed, session goes on  │
//! │  Cart::add_item ──► CoreError ──────────┘                              │
//! │                                                                         │
//! │  stdin/stdout failure ──► AppError::Io ──► logged, non-zero exit       │
//! │  bad SHOPFRONT_* var ───► ConfigError ──► logged, defaults used        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use shopfront_core::CoreError;
use thiserror::Error;

/// Operator input that could not be turned into a cart request.
///
/// The `Display` text is the exact diagnostic printed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No catalog entry matches the typed name.
    #[error("Invalid product name.")]
    UnknownProduct(String),

    /// The quantity line did not parse as an integer.
    #[error("Invalid input. Quantity should be an integer.")]
    NotAnInteger(String),
}

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The built-in seed table was rejected by the catalog.
    #[error("Seed catalog is invalid: {0}")]
    Seed(#[from] CoreError),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::UnknownProduct("tablet".to_string()).to_string(),
            "Invalid product name."
        );
        assert_eq!(
            InputError::NotAnInteger("three".to_string()).to_string(),
            "Invalid input. Quantity should be an integer."
        );
    }

    #[test]
    fn test_app_error_from_core() {
        let err: AppError = CoreError::ProductNotFound("#3".to_string()).into();
        assert!(matches!(err, AppError::Seed(_)));
        assert_eq!(err.to_string(), "Seed catalog is invalid: Product not found: #3");
    }
}

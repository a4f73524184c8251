//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog / cart rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-console errors (app crate)                                  │
//! │  ├── InputError       - Unparseable operator input                     │
//! │  └── AppError         - I/O and seed failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed diagnostic                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable. The console prints the `Display`
//! text and carries on with the session, so the messages are the exact
//! lines the operator sees.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product is stored under the given identifier or name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The cart refused a line because live stock is below the request.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (Laptop, qty: 999)
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Laptop", available: 10, requested: 999 }
    ///      │
    ///      ▼
    /// Console: "Quantity limit exceeded for Laptop. Available stock: 10"
    /// ```
    #[error("Quantity limit exceeded for {product}. Available stock: {available}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// `Product::reduce_stock` was asked for more than it holds.
    ///
    /// The cart checks stock before reducing it, so in a single-actor
    /// session this only fires if that check is bypassed.
    #[error("Not enough stock for {product}!")]
    StockShortfall {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two products folding to the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message() {
        let err = CoreError::InsufficientStock {
            product: "Laptop".to_string(),
            available: 10,
            requested: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity limit exceeded for Laptop. Available stock: 10"
        );
    }

    #[test]
    fn test_stock_shortfall_message() {
        let err = CoreError::StockShortfall {
            product: "Shoe".to_string(),
            available: 1,
            requested: 2,
        };
        assert_eq!(err.to_string(), "Not enough stock for Shoe!");
    }

    #[test]
    fn test_validation_passes_message_through() {
        let err: CoreError = ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Quantity must be positive");
    }

    #[test]
    fn test_duplicate_message() {
        let err = ValidationError::Duplicate {
            field: "product name".to_string(),
            value: "laptop".to_string(),
        };
        assert_eq!(err.to_string(), "product name 'laptop' already exists");
    }
}

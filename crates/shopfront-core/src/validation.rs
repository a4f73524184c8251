//! # Validation Module
//!
//! Input validation for catalog seed data and cart requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console boundary (shopfront-console)                         │
//! │  └── Parse operator text into an integer (InputError)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantity must be positive                                         │
//! │  └── Seed rows: name present, price non-negative                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / Cart rules                                         │
//! │  ├── Unique folded names                                               │
//! │  └── Stock sufficiency                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the catalog accepts.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ```rust
/// use shopfront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Washing Machine").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "product name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// Only positivity is checked here. The upper bound is whatever is in
/// stock, which the cart checks against the live product.
///
/// ```rust
/// use shopfront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert_eq!(
///     validate_quantity(0).unwrap_err().to_string(),
///     "Quantity must be positive"
/// );
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points (0% to 100%).
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

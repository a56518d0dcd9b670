//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vendo-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog/cart boundary errors                    │
//! │  └── ValidationError  - Admin input validation failures                 │
//! │                                                                         │
//! │  The pricing engine itself never errors: it is total over               │
//! │  well-typed inputs and clamps out-of-range values. Errors only          │
//! │  arise where state is mutated (catalog, cart session) or where          │
//! │  raw admin input is parsed (form drafts).                               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (UI)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, coupon code, ...)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart boundary errors.
///
/// These represent business rule violations; they should be caught and
/// translated to user-facing messages by the UI layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog (or cart).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Coupon code does not exist in the catalog.
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),

    /// Product has no remaining stock to add to the cart.
    #[error("Out of stock for {product_id}: stock {stock} already in cart")]
    OutOfStock { product_id: String, stock: u32 },

    /// A product with this id already exists in the catalog.
    #[error("Product id '{0}' already exists")]
    DuplicateProductId(String),

    /// A coupon with this code already exists in the catalog.
    #[error("Coupon code '{0}' already exists")]
    DuplicateCouponCode(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Admin input validation errors.
///
/// These occur when form input doesn't meet requirements. Used for
/// early validation before data reaches the catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// A form field could not be parsed as a number.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    InvalidChoice { field: String, allowed: Vec<String> },
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
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            product_id: "p1".to_string(),
            stock: 20,
        };
        assert_eq!(
            err.to_string(),
            "Out of stock for p1: stock 20 already in cart"
        );

        let err = CoreError::DuplicateCouponCode("PERCENT10".to_string());
        assert_eq!(err.to_string(), "Coupon code 'PERCENT10' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a valid number: 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

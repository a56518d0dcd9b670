//! # Validation Module
//!
//! Input validation for admin-entered data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form drafts (vendo-store::forms)                             │
//! │  ├── Typed parsing of raw field strings                                │
//! │  └── Immediate feedback per keystroke                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation on build()            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog (vendo-store::catalog)                               │
//! │  └── Uniqueness of product ids and coupon codes                        │
//! │                                                                         │
//! │  The pricing engine itself does NOT validate: it is total over         │
//! │  well-typed inputs and clamps at runtime. Data that passed these       │
//! │  layers cannot put the engine into an undefined region.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{DiscountType, Rate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon display name.
pub fn validate_coupon_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon code.
///
/// ## Rules
/// - Must not be empty; the code is the coupon's identity
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in whole currency units.
///
/// ## Rules
/// - Must be non-negative (zero allowed: free items)
pub fn validate_price(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tier discount rate.
///
/// ## Rules
/// - Must be a fraction within [0, 1]
///
/// ## Example
/// ```rust
/// use vendo_core::types::Rate;
/// use vendo_core::validation::validate_discount_rate;
///
/// assert!(validate_discount_rate(Rate::from_fraction(0.2)).is_ok());
/// assert!(validate_discount_rate(Rate::from_fraction(1.5)).is_err());
/// ```
pub fn validate_discount_rate(rate: Rate) -> ValidationResult<()> {
    let f = rate.fraction();
    if !(0.0..=1.0).contains(&f) || f.is_nan() {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0,
            max: 1,
        });
    }

    Ok(())
}

/// Validates a coupon's discount value against its type.
///
/// ## Rules
/// - `Amount`: must be non-negative
/// - `Percentage`: must be within [0, 100]
pub fn validate_coupon_value(discount_type: DiscountType, value: i64) -> ValidationResult<()> {
    match discount_type {
        DiscountType::Amount => {
            if value < 0 {
                return Err(ValidationError::MustBeNonNegative {
                    field: "discountValue".to_string(),
                });
            }
        }
        DiscountType::Percentage => {
            if !(0..=100).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: "discountValue".to_string(),
                    min: 0,
                    max: 100,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Keyboard").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("PERCENT10").is_ok());
        assert!(validate_coupon_code("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(10_000).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_discount_rate() {
        assert!(validate_discount_rate(Rate::ZERO).is_ok());
        assert!(validate_discount_rate(Rate::from_fraction(1.0)).is_ok());
        assert!(validate_discount_rate(Rate::from_fraction(-0.1)).is_err());
        assert!(validate_discount_rate(Rate::from_fraction(1.01)).is_err());
        assert!(validate_discount_rate(Rate::from_fraction(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_coupon_value() {
        assert!(validate_coupon_value(DiscountType::Amount, 5000).is_ok());
        assert!(validate_coupon_value(DiscountType::Amount, 0).is_ok());
        assert!(validate_coupon_value(DiscountType::Amount, -1).is_err());

        assert!(validate_coupon_value(DiscountType::Percentage, 10).is_ok());
        assert!(validate_coupon_value(DiscountType::Percentage, 100).is_ok());
        assert!(validate_coupon_value(DiscountType::Percentage, 101).is_err());
        assert!(validate_coupon_value(DiscountType::Percentage, -1).is_err());
    }
}

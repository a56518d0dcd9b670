//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Units                                            │
//! │    Catalog prices and all displayed totals are whole currency           │
//! │    units (i64). Discount math necessarily passes through f64            │
//! │    (rates are fractions), but every value that leaves the engine        │
//! │    is rounded back into Money exactly once.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog currency has no minor unit, so one `Money` unit is one
//! display unit. (Contrast with cent-based systems; if a minor unit is
//! ever needed, only this module changes.)
//!
//! ## Usage
//! ```rust
//! use vendo_core::money::Money;
//!
//! let price = Money::from_units(10_000);
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.units(), 30_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (a discount is a
///   subtraction), even though every engine output is non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let price = Money::from_units(10_000);
    /// assert_eq!(price.units(), 10_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Rounds a floating-point amount to the nearest whole unit.
    ///
    /// This is the single rounding point of the pricing engine: tier
    /// and coupon arithmetic happens in f64, and each published total
    /// is rounded here independently of the others.
    ///
    /// Rounds half away from zero. Engine totals are non-negative, so
    /// this matches round-half-up on every value we produce.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// assert_eq!(Money::from_f64_rounded(49.5).units(), 50);
    /// assert_eq!(Money::from_f64_rounded(49.4).units(), 49);
    /// ```
    #[inline]
    pub fn from_f64_rounded(amount: f64) -> Self {
        Money(amount.round() as i64)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns the value as f64 for fractional discount math.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let unit_price = Money::from_units(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.units(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with thousands separators.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual
/// UI display to handle localization (currency symbol, position).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "{}{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by u32 (cart quantities are u32).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

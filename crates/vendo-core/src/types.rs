//! # Domain Types
//!
//! Core domain types used throughout Vendo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  product (snap) │   │  code (unique)  │       │
//! │  │  name           │   │  quantity       │   │  discount_type  │       │
//! │  │  price (Money)  │   └─────────────────┘   │  discount_value │       │
//! │  │  stock          │                          └─────────────────┘       │
//! │  │  discounts[]    │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │    Discount     │   │   CartTotals    │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  quantity (min) │   │  before / after │       │
//! │                        │  rate (Rate)    │   │  / discount     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `CartItem` embeds a full copy of the `Product` at the moment it was
//! added. The cart keeps displaying consistent data even if the admin
//! edits the catalog afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A discount rate as a fraction in `[0.0, 1.0]`.
///
/// ## Why a fraction, not basis points?
/// Tier rates come straight from the admin form ("10%" → 0.1) and feed
/// multiplicative discount math (`price * quantity * (1 - rate)`).
/// Keeping the fraction preserves the engine's arithmetic exactly;
/// there is no integer accumulation that would benefit from bps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(f64);

impl Rate {
    /// The zero rate (no discount).
    pub const ZERO: Rate = Rate(0.0);

    /// Creates a rate from a fraction (0.1 = 10%).
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        Rate(fraction)
    }

    /// Creates a rate from a percentage (10.0 = 10%).
    #[inline]
    pub fn from_percent(percent: f64) -> Self {
        Rate(percent / 100.0)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the larger of two rates. Used by the tier scan.
    #[inline]
    pub fn max(self, other: Rate) -> Rate {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// A quantity-discount tier attached to a product.
///
/// `quantity` is the minimum number of units that must be in the cart
/// for the tier to qualify. Tiers carry no ordering requirement; the
/// engine scans all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    /// Minimum units to qualify.
    pub quantity: u32,

    /// Discount rate granted at or above the threshold.
    pub rate: Rate,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Read-only from the pricing engine's perspective; only admin
/// add/update operations (in the store layer) mutate products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in whole currency units. Non-negative.
    pub price: Money,

    /// Units available. Cart quantities are clamped to this.
    pub stock: u32,

    /// Quantity-discount tiers, in no particular order.
    pub discounts: Vec<Discount>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart: a product snapshot plus a quantity.
///
/// ## Invariants (maintained by the store layer and the engine)
/// - At most one entry per product id in a cart
/// - `quantity` is positive; a clamp to zero removes the item instead
/// - `quantity` never exceeds `product.stock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot frozen at add time.
    pub product: Product,

    /// Units of the product in the cart.
    pub quantity: u32,
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Subtract a fixed currency amount from the cart total.
    Amount,
    /// Subtract a percentage (0-100) of the cart total.
    Percentage,
}

/// A cart-level coupon. At most one coupon is selected per cart.
///
/// Coupon discounts stack on top of per-item tier discounts: they
/// apply to the post-tier-discount total, never the raw total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Display name.
    pub name: String,

    /// Unique identifier used for selection.
    pub code: String,

    /// Amount or percentage semantics.
    pub discount_type: DiscountType,

    /// Currency units for `Amount`, whole percent (0-100) for
    /// `Percentage`.
    pub discount_value: i64,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Computed cart totals, each rounded to the nearest whole unit.
///
/// The three fields are rounded independently of each other (the
/// discount is computed in f64 and then rounded, not derived from the
/// two rounded totals). On half-unit intermediates this can disagree
/// with `before - after` by one unit; see the rounding test in
/// [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of `price * quantity` over all items.
    pub total_before_discount: Money,

    /// Total after tier discounts and the selected coupon.
    pub total_after_discount: Money,

    /// Total discount granted (tiers plus coupon).
    pub total_discount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_percent() {
        let rate = Rate::from_percent(10.0);
        assert_eq!(rate.fraction(), 0.1);
        assert!((rate.percent() - 10.0).abs() < 1e-9); // f64, display only
    }

    #[test]
    fn test_rate_max() {
        let a = Rate::from_fraction(0.1);
        let b = Rate::from_fraction(0.2);
        assert_eq!(a.max(b), b);
        assert_eq!(b.max(a), b);
        assert_eq!(Rate::ZERO.max(Rate::ZERO), Rate::ZERO);
    }

    #[test]
    fn test_discount_type_serde_shape() {
        // Wire shape must match the frontend: "amount" | "percentage"
        assert_eq!(
            serde_json::to_string(&DiscountType::Amount).unwrap(),
            "\"amount\""
        );
        assert_eq!(
            serde_json::to_string(&DiscountType::Percentage).unwrap(),
            "\"percentage\""
        );
    }

    #[test]
    fn test_coupon_serde_camel_case() {
        let coupon = Coupon {
            name: "10% off".to_string(),
            code: "PERCENT10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        };
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["discountType"], "percentage");
        assert_eq!(json["discountValue"], 10);
    }
}

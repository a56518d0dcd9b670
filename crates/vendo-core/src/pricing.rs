//! # Pricing Engine
//!
//! Pure cart-pricing and stock-reconciliation functions.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Total Pipeline                                │
//! │                                                                         │
//! │  For each item:                                                         │
//! │    price × quantity ─────────────────► total_before_discount           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    best qualifying tier (max rate among tiers with                      │
//! │    threshold ≤ quantity)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    price × quantity × (1 - rate) ────► total_after_discount            │
//! │                                                                         │
//! │  Then, if a coupon is selected:                                         │
//! │    amount:     after = max(0, after - value)                            │
//! │    percentage: after = after × (1 - value/100)                          │
//! │                                                                         │
//! │  Coupons stack AFTER tier discounts, on the post-tier total.            │
//! │  All three outputs are rounded to whole units independently.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure and referentially transparent: inputs
//! are immutable snapshots, outputs are freshly constructed values.
//! Out-of-range runtime values are clamped, never rejected.

use crate::money::Money;
use crate::types::{CartItem, CartTotals, Coupon, DiscountType, Product, Rate};

// =============================================================================
// Tier Selection
// =============================================================================

/// Returns the best discount rate the item qualifies for.
///
/// ## Rule
/// Among all tiers on the item's product, take the maximum `rate`
/// whose `quantity` threshold is at or below the item's quantity.
/// Returns [`Rate::ZERO`] when no tier qualifies (including an empty
/// tier list).
///
/// Best-available-tier semantics: a low-threshold tier with a high
/// rate beats a high-threshold tier with a low rate. Thresholds are
/// not cumulative.
///
/// ## Example
/// ```rust
/// use vendo_core::money::Money;
/// use vendo_core::pricing::max_applicable_discount;
/// use vendo_core::types::{CartItem, Discount, Product, Rate};
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Keyboard".to_string(),
///     price: Money::from_units(100),
///     stock: 10,
///     discounts: vec![
///         Discount { quantity: 1, rate: Rate::from_fraction(0.1) },
///         Discount { quantity: 5, rate: Rate::from_fraction(0.2) },
///     ],
/// };
///
/// let item = CartItem { product, quantity: 5 };
/// assert_eq!(max_applicable_discount(&item).fraction(), 0.2);
/// ```
pub fn max_applicable_discount(item: &CartItem) -> Rate {
    item.product
        .discounts
        .iter()
        .fold(Rate::ZERO, |best, tier| {
            if item.quantity >= tier.quantity {
                best.max(tier.rate)
            } else {
                best
            }
        })
}

// =============================================================================
// Item Total
// =============================================================================

/// Computes one line item's total after its best tier discount.
///
/// Returns the raw f64 value, unrounded: line totals are intermediate
/// quantities, and rounding happens exactly once per published total
/// in [`cart_total`].
pub fn item_total(item: &CartItem) -> f64 {
    let rate = max_applicable_discount(item);
    item.product.price.as_f64() * item.quantity as f64 * (1.0 - rate.fraction())
}

// =============================================================================
// Cart Total
// =============================================================================

/// Computes whole-cart totals with optional coupon application.
///
/// ## Algorithm
/// 1. Accumulate `price × quantity` into the before-discount total
/// 2. Accumulate each item's tier-discounted line into the
///    after-discount total
/// 3. If a coupon is selected, apply it to the after-discount total:
///    - `Amount`: subtract, clamped at zero
///    - `Percentage`: multiply by `1 - value/100`
/// 4. Round the three outputs to whole units independently
///
/// The discount total is recomputed after coupon application, so it
/// reflects tiers plus coupon. Without a coupon the totals from steps
/// 1-2 are published as-is.
///
/// ## Rounding
/// Each output is rounded separately from the others. On a half-unit
/// intermediate, `total_discount` can differ from
/// `total_before_discount - total_after_discount` by one unit. This
/// mirrors the shipped behavior the frontend was built against; see
/// `rounding_is_independent_per_total` below.
pub fn cart_total(cart: &[CartItem], coupon: Option<&Coupon>) -> CartTotals {
    let mut total_before = 0.0;
    let mut total_after = 0.0;

    for item in cart {
        let line = item.product.price.as_f64() * item.quantity as f64;
        total_before += line;
        total_after += line * (1.0 - max_applicable_discount(item).fraction());
    }

    let mut total_discount = total_before - total_after;

    if let Some(coupon) = coupon {
        match coupon.discount_type {
            DiscountType::Amount => {
                total_after = (total_after - coupon.discount_value as f64).max(0.0);
            }
            DiscountType::Percentage => {
                total_after *= 1.0 - coupon.discount_value as f64 / 100.0;
            }
        }
        total_discount = total_before - total_after;
    }

    CartTotals {
        total_before_discount: Money::from_f64_rounded(total_before),
        total_after_discount: Money::from_f64_rounded(total_after),
        total_discount: Money::from_f64_rounded(total_discount),
    }
}

// =============================================================================
// Quantity Update
// =============================================================================

/// Returns a new cart with one item's quantity replaced.
///
/// ## Behavior
/// - `new_quantity` is clamped to `[0, product.stock]`
/// - A clamp to zero removes the item from the returned cart
/// - Items with other product ids pass through unchanged
/// - An unknown `product_id` returns the cart unchanged; this function
///   never inserts
///
/// The input cart is not mutated. Callers hold the returned `Vec` as
/// their next state.
pub fn update_item_quantity(
    cart: &[CartItem],
    product_id: &str,
    new_quantity: i64,
) -> Vec<CartItem> {
    cart.iter()
        .filter_map(|item| {
            if item.product.id == product_id {
                let clamped = new_quantity.clamp(0, item.product.stock as i64) as u32;
                (clamped > 0).then(|| CartItem {
                    product: item.product.clone(),
                    quantity: clamped,
                })
            } else {
                Some(item.clone())
            }
        })
        .collect()
}

// =============================================================================
// Remaining Stock
// =============================================================================

/// Returns how many units of a product can still be added to the cart.
///
/// `stock - quantity_in_cart`, with zero contribution when the product
/// is not in the cart. Not clamped below zero here: the cart's
/// quantity never exceeds stock as long as it is maintained through
/// [`update_item_quantity`], so a negative result indicates a caller
/// that bypassed the clamp.
pub fn remaining_stock(product: &Product, cart: &[CartItem]) -> i64 {
    let in_cart = cart
        .iter()
        .find(|item| item.product.id == product.id)
        .map_or(0, |item| item.quantity as i64);

    product.stock as i64 - in_cart
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Discount;

    /// price 100, stock 10, tiers 1→10% and 5→20%
    fn tiered_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Keyboard".to_string(),
            price: Money::from_units(100),
            stock: 10,
            discounts: vec![
                Discount {
                    quantity: 1,
                    rate: Rate::from_fraction(0.1),
                },
                Discount {
                    quantity: 5,
                    rate: Rate::from_fraction(0.2),
                },
            ],
        }
    }

    fn item(quantity: u32) -> CartItem {
        CartItem {
            product: tiered_product(),
            quantity,
        }
    }

    fn amount_coupon(value: i64) -> Coupon {
        Coupon {
            name: format!("{} off", value),
            code: "AMOUNT".to_string(),
            discount_type: DiscountType::Amount,
            discount_value: value,
        }
    }

    fn percentage_coupon(value: i64) -> Coupon {
        Coupon {
            name: format!("{}% off", value),
            code: "PERCENT".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: value,
        }
    }

    #[test]
    fn tier_selection_picks_best_qualifying_rate() {
        assert_eq!(max_applicable_discount(&item(5)).fraction(), 0.2);
        assert_eq!(max_applicable_discount(&item(1)).fraction(), 0.1);
        assert_eq!(max_applicable_discount(&item(0)), Rate::ZERO);
    }

    #[test]
    fn tier_selection_with_no_tiers_is_zero() {
        let mut no_tiers = item(5);
        no_tiers.product.discounts.clear();
        assert_eq!(max_applicable_discount(&no_tiers), Rate::ZERO);
    }

    #[test]
    fn lower_threshold_tier_with_higher_rate_wins() {
        // Best-available semantics: the 30% @ 2 tier beats 15% @ 5
        // even at quantity 5.
        let mut product = tiered_product();
        product.discounts = vec![
            Discount {
                quantity: 2,
                rate: Rate::from_fraction(0.3),
            },
            Discount {
                quantity: 5,
                rate: Rate::from_fraction(0.15),
            },
        ];
        let item = CartItem {
            product,
            quantity: 5,
        };
        assert_eq!(max_applicable_discount(&item).fraction(), 0.3);
    }

    #[test]
    fn item_total_applies_best_tier() {
        // 100 × 5 × (1 - 0.2) = 400
        assert_eq!(item_total(&item(5)), 400.0);
        // 100 × 1 × (1 - 0.1) = 90
        assert_eq!(item_total(&item(1)), 90.0);
    }

    #[test]
    fn cart_total_without_coupon() {
        let totals = cart_total(&[item(5)], None);
        assert_eq!(totals.total_before_discount.units(), 500);
        assert_eq!(totals.total_after_discount.units(), 400);
        assert_eq!(totals.total_discount.units(), 100);
    }

    #[test]
    fn cart_total_with_amount_coupon() {
        let totals = cart_total(&[item(5)], Some(&amount_coupon(20)));
        assert_eq!(totals.total_after_discount.units(), 380);
        assert_eq!(totals.total_discount.units(), 120);
        assert_eq!(totals.total_before_discount.units(), 500);
    }

    #[test]
    fn cart_total_with_percentage_coupon() {
        let totals = cart_total(&[item(5)], Some(&percentage_coupon(10)));
        assert_eq!(totals.total_after_discount.units(), 360);
        assert_eq!(totals.total_discount.units(), 140);
    }

    #[test]
    fn amount_coupon_clamps_at_zero() {
        // Coupon bigger than the cart: total floors at 0 and the
        // discount equals the full pre-discount total.
        let totals = cart_total(&[item(1)], Some(&amount_coupon(10_000)));
        assert_eq!(totals.total_after_discount.units(), 0);
        assert_eq!(totals.total_discount.units(), 100);
    }

    #[test]
    fn coupon_applies_after_tier_discounts() {
        // 10% coupon on the post-tier total (400), not the raw 500.
        let totals = cart_total(&[item(5)], Some(&percentage_coupon(10)));
        assert_eq!(totals.total_after_discount.units(), 360); // not 450-100
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = cart_total(&[], None);
        assert_eq!(totals.total_before_discount, Money::zero());
        assert_eq!(totals.total_after_discount, Money::zero());
        assert_eq!(totals.total_discount, Money::zero());

        // Even an amount coupon cannot push the total negative.
        let totals = cart_total(&[], Some(&amount_coupon(5000)));
        assert_eq!(totals.total_after_discount, Money::zero());
    }

    #[test]
    fn rounding_is_independent_per_total() {
        // price 10, qty 1, 5% tier → after = 9.5, discount = 0.5.
        // Each rounds on its own: after → 10, discount → 1. The
        // identity before - after == discount does NOT survive the
        // rounding; this is the shipped contract.
        let product = Product {
            id: "p1".to_string(),
            name: "Pencil".to_string(),
            price: Money::from_units(10),
            stock: 10,
            discounts: vec![Discount {
                quantity: 1,
                rate: Rate::from_fraction(0.05),
            }],
        };
        let cart = vec![CartItem {
            product,
            quantity: 1,
        }];

        let totals = cart_total(&cart, None);
        assert_eq!(totals.total_before_discount.units(), 10);
        assert_eq!(totals.total_after_discount.units(), 10);
        assert_eq!(totals.total_discount.units(), 1);
    }

    #[test]
    fn update_quantity_replaces_within_stock() {
        let cart = vec![item(5)];
        let updated = update_item_quantity(&cart, "p1", 7);
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].quantity, 7);
    }

    #[test]
    fn update_quantity_clamps_to_stock() {
        let cart = vec![item(5)];
        let updated = update_item_quantity(&cart, "p1", 20);
        assert_eq!(updated[0].quantity, 10); // stock is 10
    }

    #[test]
    fn update_quantity_zero_removes_item() {
        let cart = vec![item(5)];
        let updated = update_item_quantity(&cart, "p1", 0);
        assert!(updated.is_empty());
    }

    #[test]
    fn update_quantity_negative_clamps_to_removal() {
        let cart = vec![item(5)];
        let updated = update_item_quantity(&cart, "p1", -3);
        assert!(updated.is_empty());
    }

    #[test]
    fn update_quantity_unknown_id_is_noop() {
        let cart = vec![item(5)];
        let updated = update_item_quantity(&cart, "nonexistent", 3);
        assert_eq!(updated, cart); // no insertion, nothing changed
    }

    #[test]
    fn update_quantity_passes_other_items_through() {
        let mut other = tiered_product();
        other.id = "p2".to_string();
        let cart = vec![
            item(5),
            CartItem {
                product: other,
                quantity: 2,
            },
        ];

        let updated = update_item_quantity(&cart, "p1", 3);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].quantity, 3);
        assert_eq!(updated[1].quantity, 2);
    }

    #[test]
    fn update_quantity_does_not_mutate_input() {
        let cart = vec![item(5)];
        let _ = update_item_quantity(&cart, "p1", 9);
        assert_eq!(cart[0].quantity, 5); // original untouched
    }

    #[test]
    fn remaining_stock_subtracts_cart_quantity() {
        let product = tiered_product();
        let cart = vec![item(5)];
        assert_eq!(remaining_stock(&product, &cart), 5);
    }

    #[test]
    fn remaining_stock_of_absent_product_is_full_stock() {
        let product = tiered_product();
        assert_eq!(remaining_stock(&product, &[]), 10);
    }

    #[test]
    fn cart_total_is_idempotent() {
        let cart = vec![item(5)];
        let coupon = percentage_coupon(10);
        let first = cart_total(&cart, Some(&coupon));
        let second = cart_total(&cart, Some(&coupon));
        assert_eq!(first, second);
    }

    #[test]
    fn mixed_cart_with_coupon() {
        // p1: 100 × 5 @ 20% = 400, p2 (no tiers): 50 × 2 = 100
        let mut plain = tiered_product();
        plain.id = "p2".to_string();
        plain.price = Money::from_units(50);
        plain.discounts.clear();

        let cart = vec![
            item(5),
            CartItem {
                product: plain,
                quantity: 2,
            },
        ];

        let totals = cart_total(&cart, Some(&amount_coupon(50)));
        assert_eq!(totals.total_before_discount.units(), 600);
        assert_eq!(totals.total_after_discount.units(), 450); // 500 - 50
        assert_eq!(totals.total_discount.units(), 150);
    }
}

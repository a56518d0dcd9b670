//! # Cart Session
//!
//! Owns the current cart and the selected coupon, and funnels every
//! change through the pure engine in `vendo_core::pricing`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  User Action               Session Method          Engine Call          │
//! │  ───────────               ──────────────          ───────────          │
//! │                                                                         │
//! │  Click "Add to cart" ────► add_product() ────────► remaining_stock +    │
//! │                                                    update_item_quantity │
//! │                                                                         │
//! │  Quantity +/- ───────────► update_quantity() ────► update_item_quantity │
//! │                                                                         │
//! │  Click "Remove" ─────────► remove_product() ─────► update_item_quantity │
//! │                                                    (quantity 0)         │
//! │                                                                         │
//! │  Select coupon ──────────► apply_coupon()                               │
//! │                                                                         │
//! │  Render totals ──────────► totals() ─────────────► cart_total           │
//! │                                                                         │
//! │  The session never edits items in place: it swaps in the fresh          │
//! │  Vec the engine returns, the same next-state pattern the UI uses.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use vendo_core::pricing::{cart_total, remaining_stock, update_item_quantity};
use vendo_core::{CartItem, CartTotals, CoreError, CoreResult, Coupon, Product};

// =============================================================================
// Cart Session
// =============================================================================

/// The current shopping cart plus the selected coupon, if any.
///
/// ## Invariants
/// - At most one cart item per product id
/// - No zero-quantity items (removal instead)
/// - Item quantities never exceed the snapshot's stock
/// - At most one coupon selected at a time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSession {
    items: Vec<CartItem>,
    selected_coupon: Option<Coupon>,
}

impl CartSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        CartSession::default()
    }

    /// Current cart items, in add order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Currently selected coupon.
    pub fn selected_coupon(&self) -> Option<&Coupon> {
        self.selected_coupon.as_ref()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - No remaining stock: `OutOfStock` error, cart unchanged
    /// - Already in cart: quantity incremented (engine-clamped to
    ///   stock)
    /// - Not in cart: pushed as a snapshot with quantity 1
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        debug!(product_id = %product.id, "cart add_product");

        if remaining_stock(product, &self.items) <= 0 {
            return Err(CoreError::OutOfStock {
                product_id: product.id.clone(),
                stock: product.stock,
            });
        }

        match self.items.iter().find(|i| i.product.id == product.id) {
            Some(existing) => {
                let next_quantity = existing.quantity as i64 + 1;
                self.items = update_item_quantity(&self.items, &product.id, next_quantity);
            }
            None => {
                self.items.push(CartItem {
                    product: product.clone(),
                    quantity: 1,
                });
            }
        }
        Ok(())
    }

    /// Sets an item's quantity via the engine.
    ///
    /// Engine semantics apply: the value is clamped to `[0, stock]`,
    /// a clamp to zero removes the item, and an unknown id is a
    /// no-op.
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) {
        debug!(product_id = %product_id, new_quantity, "cart update_quantity");
        self.items = update_item_quantity(&self.items, product_id, new_quantity);
    }

    /// Removes a product from the cart.
    ///
    /// Unlike the engine's pass-through, a miss here is a caller bug
    /// (the UI rendered a remove button for an item it doesn't have),
    /// so it surfaces as `ProductNotFound`.
    pub fn remove_product(&mut self, product_id: &str) -> CoreResult<()> {
        debug!(product_id = %product_id, "cart remove_product");

        if !self.items.iter().any(|i| i.product.id == product_id) {
            return Err(CoreError::ProductNotFound(product_id.to_string()));
        }
        self.items = update_item_quantity(&self.items, product_id, 0);
        Ok(())
    }

    /// Selects a coupon, replacing any previous selection.
    pub fn apply_coupon(&mut self, coupon: Coupon) {
        debug!(code = %coupon.code, "cart apply_coupon");
        self.selected_coupon = Some(coupon);
    }

    /// Clears the coupon selection.
    pub fn clear_coupon(&mut self) {
        debug!("cart clear_coupon");
        self.selected_coupon = None;
    }

    /// Clears the whole session (items and coupon).
    pub fn clear(&mut self) {
        debug!("cart clear");
        self.items.clear();
        self.selected_coupon = None;
    }

    /// Computes the cart totals with the selected coupon applied.
    pub fn totals(&self) -> CartTotals {
        cart_total(&self.items, self.selected_coupon.as_ref())
    }

    /// How many more units of a product this cart can take.
    pub fn remaining_stock(&self, product: &Product) -> i64 {
        remaining_stock(product, &self.items)
    }
}

// =============================================================================
// Shared Cart State
// =============================================================================

/// Thread-safe cart session wrapper.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CartSession>>`:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: only one caller mutates the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write. A RwLock would
/// add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<CartSession>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_product(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

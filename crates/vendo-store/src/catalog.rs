//! # Catalog State
//!
//! The product and coupon catalog, with the admin operations that
//! mutate it.
//!
//! ## Admin Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  Admin Action              Operation               Catalog Change       │
//! │  ────────────              ─────────               ──────────────       │
//! │                                                                         │
//! │  Submit product form ────► add_product() ────────► products.push(..)   │
//! │                                                                         │
//! │  Finish editing ─────────► update_product() ─────► products[i] = p     │
//! │                                                                         │
//! │  Add discount tier ──────► add_discount() ───────► p.discounts.push    │
//! │                                                                         │
//! │  Delete discount tier ───► remove_discount() ────► p.discounts.remove  │
//! │                                                                         │
//! │  Submit coupon form ─────► add_coupon() ─────────► coupons.push(..)    │
//! │                                                                         │
//! │  Uniqueness is enforced here: product ids and coupon codes must         │
//! │  be unique after every add.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use vendo_core::validation::{
    validate_coupon_code, validate_coupon_name, validate_coupon_value, validate_discount_rate,
    validate_price, validate_product_name,
};
use vendo_core::{CoreError, CoreResult, Coupon, Discount, Money, Product};

// =============================================================================
// New Product Input
// =============================================================================

/// Input for adding a product: everything but the id, which the
/// catalog assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub discounts: Vec<Discount>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The product and coupon catalog.
///
/// ## Invariants
/// - Product ids are unique
/// - Coupon codes are unique
/// - Every stored product/coupon has passed boundary validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All products, in insertion order.
    pub products: Vec<Product>,

    /// All coupons, in insertion order.
    pub coupons: Vec<Coupon>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Creates a catalog pre-populated with products and coupons.
    ///
    /// Seed data is trusted as-is; validation applies to the admin
    /// paths below.
    pub fn with_seed(products: Vec<Product>, coupons: Vec<Coupon>) -> Self {
        Catalog { products, coupons }
    }

    /// Adds a new product, assigning it a fresh UUID v4 id.
    ///
    /// ## Returns
    /// The stored product (with its generated id) on success.
    pub fn add_product(&mut self, input: NewProduct) -> CoreResult<Product> {
        validate_product_name(&input.name)?;
        validate_price(input.price.units())?;
        for tier in &input.discounts {
            validate_discount_rate(tier.rate)?;
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price: input.price,
            stock: input.stock,
            discounts: input.discounts,
        };
        debug!(product_id = %product.id, name = %product.name, "add_product");

        // UUID v4 collisions are not a practical concern, but the
        // invariant is "unique after an add", so check anyway.
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(CoreError::DuplicateProductId(product.id));
        }

        self.products.push(product.clone());
        Ok(product)
    }

    /// Replaces a product wholesale, matched by id.
    ///
    /// Used by the admin edit flow: the caller edits a copy and hands
    /// the finished product back.
    pub fn update_product(&mut self, updated: Product) -> CoreResult<()> {
        validate_product_name(&updated.name)?;
        validate_price(updated.price.units())?;
        for tier in &updated.discounts {
            validate_discount_rate(tier.rate)?;
        }

        debug!(product_id = %updated.id, "update_product");

        match self.products.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(CoreError::ProductNotFound(updated.id)),
        }
    }

    /// Appends a discount tier to a product.
    pub fn add_discount(&mut self, product_id: &str, tier: Discount) -> CoreResult<()> {
        validate_discount_rate(tier.rate)?;

        debug!(product_id = %product_id, threshold = tier.quantity, "add_discount");

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        product.discounts.push(tier);
        Ok(())
    }

    /// Removes a discount tier by position.
    ///
    /// An out-of-range index leaves the product unchanged; the admin
    /// UI only ever hands back indices it rendered.
    pub fn remove_discount(&mut self, product_id: &str, index: usize) -> CoreResult<()> {
        debug!(product_id = %product_id, index, "remove_discount");

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        if index < product.discounts.len() {
            product.discounts.remove(index);
        }
        Ok(())
    }

    /// Adds a coupon. Codes must be unique.
    pub fn add_coupon(&mut self, coupon: Coupon) -> CoreResult<()> {
        validate_coupon_name(&coupon.name)?;
        validate_coupon_code(&coupon.code)?;
        validate_coupon_value(coupon.discount_type, coupon.discount_value)?;

        if self.coupons.iter().any(|c| c.code == coupon.code) {
            return Err(CoreError::DuplicateCouponCode(coupon.code));
        }

        debug!(code = %coupon.code, "add_coupon");
        self.coupons.push(coupon);
        Ok(())
    }

    /// Looks up a product by id.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Looks up a coupon by code.
    pub fn coupon_by_code(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }
}

// =============================================================================
// Shared Catalog State
// =============================================================================

/// Thread-safe catalog wrapper.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Catalog>>`:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one writer at a time; admin edits are rare and quick
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Creates an empty catalog state.
    pub fn new() -> Self {
        CatalogState::default()
    }

    /// Creates a catalog state from a seeded catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vendo_core::{DiscountType, Rate};

    fn new_product(name: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Money::from_units(price),
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: Rate::from_fraction(0.1),
            }],
        }
    }

    fn coupon(code: &str) -> Coupon {
        Coupon {
            name: "5,000 off".to_string(),
            code: code.to_string(),
            discount_type: DiscountType::Amount,
            discount_value: 5000,
        }
    }

    #[test]
    fn add_product_assigns_unique_ids() {
        let mut catalog = Catalog::new();
        let a = catalog.add_product(new_product("Product 1", 10_000)).unwrap();
        let b = catalog.add_product(new_product("Product 2", 20_000)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(catalog.products.len(), 2);
        assert!(catalog.product(&a.id).is_some());
    }

    #[test]
    fn add_product_rejects_invalid_input() {
        let mut catalog = Catalog::new();
        let err = catalog.add_product(new_product("", 10_000)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let mut bad_rate = new_product("Product 1", 10_000);
        bad_rate.discounts[0].rate = Rate::from_fraction(1.5);
        assert!(catalog.add_product(bad_rate).is_err());
    }

    #[test]
    fn update_product_replaces_by_id() {
        let mut catalog = Catalog::new();
        let stored = catalog.add_product(new_product("Product 1", 10_000)).unwrap();

        let mut edited = stored.clone();
        edited.name = "Product 1 (renamed)".to_string();
        edited.stock = 30;
        catalog.update_product(edited).unwrap();

        let current = catalog.product(&stored.id).unwrap();
        assert_eq!(current.name, "Product 1 (renamed)");
        assert_eq!(current.stock, 30);
    }

    #[test]
    fn update_unknown_product_errors() {
        let mut catalog = Catalog::new();
        let ghost = Product {
            id: "nope".to_string(),
            name: "Ghost".to_string(),
            price: Money::from_units(1),
            stock: 1,
            discounts: vec![],
        };
        assert!(matches!(
            catalog.update_product(ghost),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn discount_tiers_can_be_added_and_removed() {
        let mut catalog = Catalog::new();
        let stored = catalog.add_product(new_product("Product 1", 10_000)).unwrap();

        catalog
            .add_discount(
                &stored.id,
                Discount {
                    quantity: 20,
                    rate: Rate::from_fraction(0.2),
                },
            )
            .unwrap();
        assert_eq!(catalog.product(&stored.id).unwrap().discounts.len(), 2);

        catalog.remove_discount(&stored.id, 0).unwrap();
        let tiers = &catalog.product(&stored.id).unwrap().discounts;
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].quantity, 20);

        // Out-of-range index is a no-op, not a panic.
        catalog.remove_discount(&stored.id, 99).unwrap();
        assert_eq!(catalog.product(&stored.id).unwrap().discounts.len(), 1);
    }

    #[test]
    fn coupon_codes_are_unique() {
        let mut catalog = Catalog::new();
        catalog.add_coupon(coupon("AMOUNT5000")).unwrap();

        let err = catalog.add_coupon(coupon("AMOUNT5000")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCouponCode(_)));
        assert_eq!(catalog.coupons.len(), 1);
    }

    #[test]
    fn add_coupon_validates_value_against_type() {
        let mut catalog = Catalog::new();
        let mut bad = coupon("PERCENT200");
        bad.discount_type = DiscountType::Percentage;
        bad.discount_value = 200;
        assert!(catalog.add_coupon(bad).is_err());
    }

    #[test]
    fn catalog_state_wrappers() {
        let state = CatalogState::new();
        state.with_catalog_mut(|c| c.add_product(new_product("Product 1", 10_000)).map(|_| ()))
            .unwrap();
        let count = state.with_catalog(|c| c.products.len());
        assert_eq!(count, 1);
    }
}

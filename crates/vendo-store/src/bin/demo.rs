//! # Demo Walk-Through
//!
//! Seeds the catalog with sample data and runs a shopping session
//! against the pricing engine, logging each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p vendo-store --bin demo
//!
//! # With verbose engine logs
//! RUST_LOG=debug cargo run -p vendo-store --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use vendo_core::{Coupon, Discount, DiscountType, Money, Product, Rate};
use vendo_store::{CartState, Catalog, CatalogState};

fn seed_catalog() -> Catalog {
    let products = vec![
        Product {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: Money::from_units(10_000),
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: Rate::from_fraction(0.1),
            }],
        },
        Product {
            id: "p2".to_string(),
            name: "Product 2".to_string(),
            price: Money::from_units(20_000),
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: Rate::from_fraction(0.15),
            }],
        },
        Product {
            id: "p3".to_string(),
            name: "Product 3".to_string(),
            price: Money::from_units(30_000),
            stock: 20,
            discounts: vec![Discount {
                quantity: 10,
                rate: Rate::from_fraction(0.2),
            }],
        },
    ];

    let coupons = vec![
        Coupon {
            name: "5,000 off".to_string(),
            code: "AMOUNT5000".to_string(),
            discount_type: DiscountType::Amount,
            discount_value: 5000,
        },
        Coupon {
            name: "10% off".to_string(),
            code: "PERCENT10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        },
    ];

    Catalog::with_seed(products, coupons)
}

fn main() {
    init_tracing();

    info!("Seeding catalog");
    let catalog = CatalogState::from_catalog(seed_catalog());
    let cart = CartState::new();

    // Shop: ten of Product 1 (crosses its tier threshold) and one of
    // Product 2.
    catalog.with_catalog(|c| {
        let p1 = c.product("p1").expect("seeded");
        let p2 = c.product("p2").expect("seeded");

        cart.with_cart_mut(|session| {
            session.add_product(p1)?;
            session.update_quantity("p1", 10);
            session.add_product(p2)
        })
    })
    .expect("cart operations on seeded products");

    let totals = cart.with_cart(|session| session.totals());
    info!(
        before = %totals.total_before_discount,
        after = %totals.total_after_discount,
        discount = %totals.total_discount,
        "Totals with tier discounts"
    );

    // Apply the 10% coupon on top of the tier discounts.
    let coupon = catalog
        .with_catalog(|c| c.coupon_by_code("PERCENT10").cloned())
        .expect("seeded");
    cart.with_cart_mut(|session| session.apply_coupon(coupon));

    let totals = cart.with_cart(|session| session.totals());
    info!(
        before = %totals.total_before_discount,
        after = %totals.total_after_discount,
        discount = %totals.total_discount,
        "Totals with PERCENT10 applied"
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

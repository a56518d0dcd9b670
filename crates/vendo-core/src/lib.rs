//! # vendo-core: Pure Pricing Engine for Vendo
//!
//! This crate is the **heart** of Vendo. It contains the cart pricing
//! and stock-reconciliation logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Shop UI ──► Cart UI ──► Coupon UI ──► Admin UI              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vendo-store (State Layer)                    │   │
//! │  │    Catalog, CartSession, admin form drafts                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vendo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ cart math │  │   rules   │  │   │
//! │  │   │  Coupon   │  │   Rate    │  │ tier scan │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Discount, Coupon, CartItem, ...)
//! - [`money`] - Money type for whole-unit currency amounts
//! - [`pricing`] - The pricing engine: item totals, cart totals,
//!   quantity updates, remaining stock
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation for admin input
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every engine function is deterministic -
//!    same cart and coupon in, same totals out
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Clamp, don't reject**: out-of-range runtime values (quantity
//!    beyond stock, coupon larger than the cart) are clamped; only
//!    admin *input* is rejected, in [`validation`]
//! 4. **Explicit Errors**: boundary errors are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::money::Money;
//! use vendo_core::pricing::cart_total;
//! use vendo_core::types::{CartItem, Discount, Product, Rate};
//!
//! let product = Product {
//!     id: "p1".to_string(),
//!     name: "Keyboard".to_string(),
//!     price: Money::from_units(100),
//!     stock: 10,
//!     discounts: vec![Discount { quantity: 5, rate: Rate::from_fraction(0.2) }],
//! };
//! let cart = vec![CartItem { product, quantity: 5 }];
//!
//! let totals = cart_total(&cart, None);
//! assert_eq!(totals.total_before_discount, Money::from_units(500));
//! assert_eq!(totals.total_after_discount, Money::from_units(400));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

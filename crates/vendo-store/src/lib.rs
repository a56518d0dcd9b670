//! # vendo-store: State Containers for Vendo
//!
//! The pricing engine in `vendo-core` is pure; something still has to
//! own the catalog, the cart, and the half-typed admin form input.
//! That something is this crate.
//!
//! ## Module Organization
//! ```text
//! vendo_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── catalog.rs      ◄─── Product/coupon catalog + CatalogState
//! ├── cart.rs         ◄─── Cart session + CartState
//! ├── forms.rs        ◄─── Typed admin form drafts
//! └── bin/
//!     └── demo.rs     ◄─── Seeded walk-through binary
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused
//! state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vendo State Management                             │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │    CatalogState      │        │      CartState       │              │
//! │  │                      │        │                      │              │
//! │  │  • Products          │        │  • Cart items        │              │
//! │  │  • Coupons           │        │  • Selected coupon   │              │
//! │  │  • Admin add/update  │        │  • Totals (computed) │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  WHY: Each caller only locks the state it needs.                       │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All mutations funnel through the pure functions in
//! `vendo_core::pricing`, so the state here is only ever replaced with
//! engine output, never computed ad hoc.

pub mod cart;
pub mod catalog;
pub mod forms;

pub use cart::{CartSession, CartState};
pub use catalog::{Catalog, CatalogState, NewProduct};
pub use forms::{CouponDraft, DiscountDraft, ProductDraft};

//! # Admin Form Drafts
//!
//! Typed draft structs for the admin's product, discount-tier, and
//! coupon forms.
//!
//! ## Why typed drafts?
//! The original UI dispatched on field *names* ("price" → int parse,
//! "rate" → percent/100, everything else → string). That stringly-
//! typed switch is replaced by one draft struct per entity with an
//! explicit parsing setter per field:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Draft Flow                                      │
//! │                                                                         │
//! │  keystroke "12000" ──► ProductDraft::set_price("12000")                 │
//! │                            │  integer parse, typed error on junk        │
//! │                            ▼                                            │
//! │  keystroke "15"    ──► DiscountDraft::set_rate_percent("15")            │
//! │                            │  percent ÷ 100 → Rate(0.15)                │
//! │                            ▼                                            │
//! │  submit            ──► draft.build()                                    │
//! │                            │  business-rule validation                  │
//! │                            ▼                                            │
//! │  Catalog::add_product(new_product)  /  Catalog::add_coupon(coupon)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Setters fail fast on unparseable input; `build()` re-checks the
//! business rules so a draft can never smuggle bad data past the
//! catalog.

use vendo_core::validation::{
    validate_coupon_code, validate_coupon_name, validate_coupon_value, validate_discount_rate,
    validate_price, validate_product_name, ValidationResult,
};
use vendo_core::{Coupon, Discount, DiscountType, Money, Rate, ValidationError};

use crate::catalog::NewProduct;

// =============================================================================
// Field Parsing
// =============================================================================

/// Parses a raw form field as an integer, with the field name carried
/// into the error.
fn parse_int_field(field: &str, raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses a raw form field as a non-negative count (stock, quantity).
fn parse_count_field(field: &str, raw: &str) -> ValidationResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

// =============================================================================
// Discount Tier Draft
// =============================================================================

/// Draft for one quantity-discount tier.
///
/// The rate field is entered as a whole percent ("15" → 0.15), the
/// one field in the admin forms that isn't a plain integer.
#[derive(Debug, Clone, Default)]
pub struct DiscountDraft {
    quantity: u32,
    rate: Rate,
}

impl DiscountDraft {
    /// Creates an empty draft (threshold 0, rate 0).
    pub fn new() -> Self {
        DiscountDraft::default()
    }

    /// Sets the minimum-quantity threshold from raw input.
    pub fn set_quantity(&mut self, raw: &str) -> ValidationResult<()> {
        self.quantity = parse_count_field("quantity", raw)?;
        Ok(())
    }

    /// Sets the rate from a whole-percent string ("15" → 0.15).
    pub fn set_rate_percent(&mut self, raw: &str) -> ValidationResult<()> {
        let percent = parse_int_field("rate", raw)?;
        self.rate = Rate::from_percent(percent as f64);
        Ok(())
    }

    /// Clears the draft back to its initial state.
    pub fn reset(&mut self) {
        *self = DiscountDraft::default();
    }

    /// Validates and produces the tier.
    pub fn build(&self) -> ValidationResult<Discount> {
        validate_discount_rate(self.rate)?;
        Ok(Discount {
            quantity: self.quantity,
            rate: self.rate,
        })
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Draft for the "new product" admin form.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    name: String,
    price: i64,
    stock: u32,
    discounts: Vec<Discount>,
}

impl ProductDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        ProductDraft::default()
    }

    /// Sets the product name (free-form text, validated on build).
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_string();
    }

    /// Sets the price from raw input.
    pub fn set_price(&mut self, raw: &str) -> ValidationResult<()> {
        self.price = parse_int_field("price", raw)?;
        Ok(())
    }

    /// Sets the stock from raw input.
    pub fn set_stock(&mut self, raw: &str) -> ValidationResult<()> {
        self.stock = parse_count_field("stock", raw)?;
        Ok(())
    }

    /// Appends a finished tier to the draft.
    pub fn add_discount(&mut self, tier: Discount) {
        self.discounts.push(tier);
    }

    /// Removes a tier by position; out-of-range is a no-op.
    pub fn remove_discount(&mut self, index: usize) {
        if index < self.discounts.len() {
            self.discounts.remove(index);
        }
    }

    /// Clears the draft back to its initial state.
    pub fn reset(&mut self) {
        *self = ProductDraft::default();
    }

    /// Validates and produces the catalog input.
    pub fn build(&self) -> ValidationResult<NewProduct> {
        validate_product_name(&self.name)?;
        validate_price(self.price)?;
        for tier in &self.discounts {
            validate_discount_rate(tier.rate)?;
        }

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            price: Money::from_units(self.price),
            stock: self.stock,
            discounts: self.discounts.clone(),
        })
    }
}

// =============================================================================
// Coupon Draft
// =============================================================================

/// Draft for the "new coupon" admin form.
#[derive(Debug, Clone)]
pub struct CouponDraft {
    name: String,
    code: String,
    discount_type: DiscountType,
    discount_value: i64,
}

impl Default for CouponDraft {
    fn default() -> Self {
        // The form's select defaults to the percentage option.
        CouponDraft {
            name: String::new(),
            code: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 0,
        }
    }
}

impl CouponDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        CouponDraft::default()
    }

    /// Sets the display name.
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_string();
    }

    /// Sets the coupon code.
    pub fn set_code(&mut self, raw: &str) {
        self.code = raw.to_string();
    }

    /// Sets the discount type from the select's raw value.
    ///
    /// Accepts exactly the wire values `"amount"` and `"percentage"`.
    pub fn set_discount_type(&mut self, raw: &str) -> ValidationResult<()> {
        self.discount_type = match raw {
            "amount" => DiscountType::Amount,
            "percentage" => DiscountType::Percentage,
            _ => {
                return Err(ValidationError::InvalidChoice {
                    field: "discountType".to_string(),
                    allowed: vec!["amount".to_string(), "percentage".to_string()],
                })
            }
        };
        Ok(())
    }

    /// Sets the discount value from raw input.
    pub fn set_discount_value(&mut self, raw: &str) -> ValidationResult<()> {
        self.discount_value = parse_int_field("discountValue", raw)?;
        Ok(())
    }

    /// Clears the draft back to its initial state.
    pub fn reset(&mut self) {
        *self = CouponDraft::default();
    }

    /// Validates and produces the coupon.
    pub fn build(&self) -> ValidationResult<Coupon> {
        validate_coupon_name(&self.name)?;
        validate_coupon_code(&self.code)?;
        validate_coupon_value(self.discount_type, self.discount_value)?;

        Ok(Coupon {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            discount_type: self.discount_type,
            discount_value: self.discount_value,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_draft_parses_percent_to_fraction() {
        let mut draft = DiscountDraft::new();
        draft.set_quantity("10").unwrap();
        draft.set_rate_percent("15").unwrap();

        let tier = draft.build().unwrap();
        assert_eq!(tier.quantity, 10);
        assert_eq!(tier.rate.fraction(), 0.15);
    }

    #[test]
    fn discount_draft_rejects_junk_numbers() {
        let mut draft = DiscountDraft::new();
        assert!(matches!(
            draft.set_quantity("ten"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(draft.set_rate_percent("").is_err());
    }

    #[test]
    fn discount_draft_rejects_rate_above_100_percent() {
        let mut draft = DiscountDraft::new();
        draft.set_rate_percent("150").unwrap(); // parses fine
        assert!(draft.build().is_err()); // but fails the rate rule
    }

    #[test]
    fn product_draft_builds_catalog_input() {
        let mut draft = ProductDraft::new();
        draft.set_name("Product 4");
        draft.set_price("15000").unwrap();
        draft.set_stock("30").unwrap();

        let mut tier = DiscountDraft::new();
        tier.set_quantity("10").unwrap();
        tier.set_rate_percent("10").unwrap();
        draft.add_discount(tier.build().unwrap());

        let input = draft.build().unwrap();
        assert_eq!(input.name, "Product 4");
        assert_eq!(input.price.units(), 15_000);
        assert_eq!(input.stock, 30);
        assert_eq!(input.discounts.len(), 1);
    }

    #[test]
    fn product_draft_requires_a_name() {
        let mut draft = ProductDraft::new();
        draft.set_price("1000").unwrap();
        assert!(matches!(
            draft.build(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn product_draft_reset_clears_fields() {
        let mut draft = ProductDraft::new();
        draft.set_name("Product 4");
        draft.set_price("15000").unwrap();
        draft.reset();

        assert!(draft.build().is_err()); // name gone again
    }

    #[test]
    fn coupon_draft_roundtrip() {
        let mut draft = CouponDraft::new();
        draft.set_name("5,000 off");
        draft.set_code("AMOUNT5000");
        draft.set_discount_type("amount").unwrap();
        draft.set_discount_value("5000").unwrap();

        let coupon = draft.build().unwrap();
        assert_eq!(coupon.code, "AMOUNT5000");
        assert_eq!(coupon.discount_type, DiscountType::Amount);
        assert_eq!(coupon.discount_value, 5000);
    }

    #[test]
    fn coupon_draft_rejects_unknown_type() {
        let mut draft = CouponDraft::new();
        assert!(matches!(
            draft.set_discount_type("bogus"),
            Err(ValidationError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn coupon_draft_validates_percentage_range() {
        let mut draft = CouponDraft::new();
        draft.set_name("Too generous");
        draft.set_code("PERCENT200");
        draft.set_discount_type("percentage").unwrap();
        draft.set_discount_value("200").unwrap();

        assert!(matches!(
            draft.build(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}

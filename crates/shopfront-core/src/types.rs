//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  Electronics    │──►│  bps (u32)      │       │
//! │  │  unit_price     │   │  Clothing       │   │  1000 = 10%     │       │
//! │  │  stock_quantity │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │          ▲             │   ProductId     │  arena index into Catalog   │
//! │          └─────────────│  (usize)        │  held by carts, never a     │
//! │                        └─────────────────┘  mutable alias              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Each variant carries exactly one discount rule.
///
/// Adding a category means adding a variant here and its arm in
/// [`Category::discount_rate`]; nothing else in the crate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 10% off at checkout.
    Electronics,
    /// 20% off at checkout.
    Clothing,
}

impl Category {
    /// The checkout discount for this category.
    pub const fn discount_rate(&self) -> DiscountRate {
        match self {
            Category::Electronics => DiscountRate::from_bps(1000),
            Category::Clothing => DiscountRate::from_bps(2000),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Electronics => f.write_str("Electronics"),
            Category::Clothing => f.write_str("Clothing"),
        }
    }
}

// =============================================================================
// Product Id
// =============================================================================

/// Stable handle to a product stored in a [`Catalog`](crate::catalog::Catalog).
///
/// Only the catalog hands these out, and products are never removed, so an
/// id stays valid for the life of the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub(crate) usize);

impl ProductId {
    /// Position of the product in its catalog.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item.
///
/// `name`, `unit_price` and `category` are fixed at construction. Stock only
/// moves through [`Product::reduce_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    unit_price: Money,
    stock_quantity: i64,
    category: Category,
}

impl Product {
    /// Creates a product. A negative `stock_quantity` is a caller error.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
        category: Category,
    ) -> Self {
        Product {
            name: name.into(),
            unit_price,
            stock_quantity,
            category,
        }
    }

    /// Display name, as seeded.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List price before any discount.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units currently available.
    #[inline]
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Checks whether `quantity` units are available right now.
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        self.stock_quantity >= quantity
    }

    /// Price after the category discount.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::{Category, Product};
    ///
    /// let shoe = Product::new("Shoe", Money::from_major(1000), 30, Category::Clothing);
    /// assert_eq!(shoe.discounted_price(), Money::from_major(800));
    /// ```
    pub fn discounted_price(&self) -> Money {
        self.unit_price.apply_discount(self.category.discount_rate())
    }

    /// Removes `quantity` units from stock.
    ///
    /// Leaves stock untouched and returns [`CoreError::StockShortfall`] if
    /// there are not enough units. Stock can never go negative.
    pub fn reduce_stock(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.can_fulfil(quantity) {
            return Err(CoreError::StockShortfall {
                product: self.name.clone(),
                available: self.stock_quantity,
                requested: quantity,
            });
        }

        self.stock_quantity -= quantity;
        Ok(())
    }

    /// `"<name> - $<price> (Stock: <stock>)"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Stock: {})",
            self.name, self.unit_price, self.stock_quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("Laptop", Money::from_major(100_000), 10, Category::Electronics)
    }

    #[test]
    fn test_category_rates() {
        assert_eq!(Category::Electronics.discount_rate().bps(), 1000);
        assert_eq!(Category::Clothing.discount_rate().bps(), 2000);
    }

    #[test]
    fn test_electronics_discount_is_ninety_percent() {
        for cents in [0, 1, 999, 1_000, 3_500_000, 10_000_000] {
            let p = Product::new("X", Money::from_cents(cents), 1, Category::Electronics);
            // cents × 0.9, rounded to the nearest cent
            let expected = cents - (cents * 1000 + 5000) / 10000;
            assert_eq!(p.discounted_price().cents(), expected);
        }
        assert_eq!(laptop().discounted_price(), Money::from_major(90_000));
    }

    #[test]
    fn test_clothing_discount_is_eighty_percent() {
        let watch = Product::new("Watch", Money::from_major(10_000), 40, Category::Clothing);
        assert_eq!(watch.discounted_price(), Money::from_major(8_000));
    }

    #[test]
    fn test_reduce_stock() {
        let mut p = laptop();
        p.reduce_stock(3).unwrap();
        assert_eq!(p.stock_quantity(), 7);

        p.reduce_stock(7).unwrap();
        assert_eq!(p.stock_quantity(), 0);
    }

    #[test]
    fn test_reduce_stock_shortfall_leaves_stock() {
        let mut p = laptop();
        let err = p.reduce_stock(11).unwrap_err();
        assert!(matches!(
            err,
            CoreError::StockShortfall { available: 10, requested: 11, .. }
        ));
        assert_eq!(p.stock_quantity(), 10);
    }

    #[test]
    fn test_describe() {
        assert_eq!(laptop().describe(), "Laptop - $100000.00 (Stock: 10)");
    }
}

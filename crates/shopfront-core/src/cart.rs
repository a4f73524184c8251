//! # Shopping Cart
//!
//! Accumulates purchase intent against a [`Catalog`] and turns it into a
//! [`Receipt`] at checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_item   ┌──────────┐  checkout   ┌──────────────┐     │
//! │  │  Empty   │────────────►│ In Cart  │────────────►│   Receipt    │     │
//! │  │  Cart    │             │          │             │ (cart empty) │     │
//! │  └──────────┘             └──────────┘             └──────────────┘     │
//! │       ▲                        │ add_item                  │            │
//! │       │                        └─────────┘                 │            │
//! │       └────────────────────────────────────────────────────┘            │
//! │                                                                         │
//! │  Stock is taken from the catalog at add time. Checkout only prices the  │
//! │  lines and clears them; it never touches stock again.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::checkout::{Checkout, Receipt, ReceiptLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductId;
use crate::validation::validate_quantity;

/// One product and how many of it the cart holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Outcome of a successful [`ShoppingCart::add_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddition {
    pub product_id: ProductId,
    pub product_name: String,
    /// Quantity added by this call.
    pub quantity: i64,
    /// Quantity held by the cart for this product after the call.
    pub line_quantity: i64,
    /// Catalog stock after the decrement.
    pub remaining_stock: i64,
    /// Set when the line was recorded but the stock decrement fell short.
    #[serde(skip)]
    pub shortfall: Option<CoreError>,
}

impl fmt::Display for CartAddition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} of {} to cart.", self.quantity, self.product_name)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product (adding the same product again grows its line)
/// - Every line quantity is >= 1
/// - Lines keep the order in which products were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Adds `quantity` of a product and takes that much stock from the catalog.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: rejected with `Quantity must be positive`
    /// - stock below `quantity`: rejected with [`CoreError::InsufficientStock`]
    /// - otherwise the line grows first, then stock is reduced
    ///
    /// Rejections leave both the cart and the catalog untouched.
    ///
    /// The line is recorded before the stock decrement. If the decrement
    /// still falls short (stock changed between the check and the reduction),
    /// the line keeps the full quantity, stock is left as it was, and the
    /// addition still succeeds with the [`CoreError::StockShortfall`] carried
    /// in [`CartAddition::shortfall`]. With a single `&mut` owner that window
    /// cannot open; a shared cart would need the check, the decrement and the
    /// line update under one lock.
    ///
    /// ```rust
    /// use shopfront_core::{Catalog, Category, Money, Product, ShoppingCart};
    ///
    /// let mut catalog = Catalog::new();
    /// let laptop = catalog
    ///     .insert(Product::new("Laptop", Money::from_major(100_000), 10, Category::Electronics))
    ///     .unwrap();
    ///
    /// let mut cart = ShoppingCart::new();
    /// let added = cart.add_item(&mut catalog, laptop, 3).unwrap();
    /// assert_eq!(added.to_string(), "Added 3 of Laptop to cart.");
    /// assert_eq!(catalog.get(laptop).unwrap().stock_quantity(), 7);
    /// ```
    pub fn add_item(
        &mut self,
        catalog: &mut Catalog,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<CartAddition> {
        validate_quantity(quantity)?;

        let product = catalog.require(product_id)?;
        if !product.can_fulfil(quantity) {
            return Err(CoreError::InsufficientStock {
                product: product.name().to_string(),
                available: product.stock_quantity(),
                requested: quantity,
            });
        }
        let product_name = product.name().to_string();

        self.commit(catalog, product_id, product_name, quantity)
    }

    /// Records the line, then takes the stock. No sufficiency check here.
    fn commit(
        &mut self,
        catalog: &mut Catalog,
        product_id: ProductId,
        product_name: String,
        quantity: i64,
    ) -> CoreResult<CartAddition> {
        let line_quantity = self.record(product_id, quantity);
        let shortfall = match catalog.reduce_stock(product_id, quantity) {
            Ok(()) => None,
            Err(err @ CoreError::StockShortfall { .. }) => Some(err),
            Err(err) => return Err(err),
        };

        Ok(CartAddition {
            product_id,
            product_name,
            quantity,
            line_quantity,
            remaining_stock: catalog.require(product_id)?.stock_quantity(),
            shortfall,
        })
    }

    /// Grows the line for `product_id` (creating it at 0) and returns the new quantity.
    fn record(&mut self, product_id: ProductId, quantity: i64) -> i64 {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity += quantity;
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    product_id,
                    quantity,
                });
                quantity
            }
        }
    }

    /// Prices every line, builds a receipt and empties the cart.
    ///
    /// ## Behavior
    /// - Empty cart: [`Checkout::Empty`]
    /// - Otherwise, per line in cart order:
    ///   `subtotal = discounted_price × quantity`, summed into the total
    ///
    /// Stock was taken at add time and is not touched here. Lines whose
    /// product cannot be resolved are left off the receipt and their ids
    /// listed in [`Receipt::unpriced`]; the catalog never removes products,
    /// so that only happens with a cart built against another catalog.
    pub fn checkout(&mut self, catalog: &Catalog) -> Checkout {
        if self.is_empty() {
            return Checkout::Empty;
        }

        let mut lines = Vec::with_capacity(self.lines.len());
        let mut unpriced = Vec::new();
        for line in &self.lines {
            match catalog.get(line.product_id) {
                Some(product) => {
                    let unit_price = product.discounted_price();
                    lines.push(ReceiptLine {
                        name: product.name().to_string(),
                        quantity: line.quantity,
                        unit_price,
                        subtotal: unit_price * line.quantity,
                    });
                }
                None => unpriced.push(line.product_id),
            }
        }

        let receipt = Receipt::new(lines).with_unpriced(unpriced);
        self.clear();
        Checkout::Completed(receipt)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity held for `product_id`, 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Discounted total the cart would check out at right now.
    pub fn preview_total(&self, catalog: &Catalog) -> Money {
        self.lines
            .iter()
            .filter_map(|l| catalog.get(l.product_id).map(|p| p.discounted_price() * l.quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops every line. Stock is not returned to the catalog.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A shopper. Owns exactly one cart for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    cart: ShoppingCart,
}

impl Customer {
    /// Creates a customer with an empty cart.
    pub fn new() -> Self {
        Customer::default()
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

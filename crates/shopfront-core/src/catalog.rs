//! # Catalog
//!
//! Name-indexed product directory. The catalog is also the single owner of
//! every [`Product`]: products live in an arena and everything else refers to
//! them through a [`ProductId`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  index: HashMap<folded name, ProductId>                      │
//! │     "laptop" ──► #0      "smarttv" ──► #4                    │
//! │                   │                      │                   │
//! │  products: Vec<Product>                  │                   │
//! │     [0] Laptop  ◄─┘   ...   [4] SmartTV ◄┘                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{
    validate_discount_bps, validate_price_cents, validate_product_name, validate_stock,
};

/// Folds a product name into its lookup key.
///
/// Lookups trim surrounding whitespace so `"  laptop\n"` finds `Laptop`.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One row of the stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLine {
    pub name: String,
    pub stock_quantity: i64,
    pub unit_price: Money,
}

impl From<&Product> for StockLine {
    fn from(product: &Product) -> Self {
        StockLine {
            name: product.name().to_string(),
            stock_quantity: product.stock_quantity(),
            unit_price: product.unit_price(),
        }
    }
}

/// The product directory.
///
/// ## Invariants
/// - Every key in `index` equals `normalize_name` of the product it points at
/// - Keys are unique; products are never removed
/// - Iteration and reports follow insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, ProductId>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds a product and returns its id.
    ///
    /// ## Errors
    /// - Any [`ValidationError`] from the seed-row validators
    /// - [`ValidationError::Duplicate`] if the folded name is already taken
    pub fn insert(&mut self, product: Product) -> Result<ProductId, ValidationError> {
        validate_product_name(product.name())?;
        validate_price_cents(product.unit_price().cents())?;
        validate_stock(product.stock_quantity())?;
        validate_discount_bps(product.category().discount_rate().bps())?;

        let key = normalize_name(product.name());
        if self.index.contains_key(&key) {
            return Err(ValidationError::Duplicate {
                field: "product name".to_string(),
                value: key,
            });
        }

        let id = ProductId(self.products.len());
        self.products.push(product);
        self.index.insert(key, id);
        Ok(id)
    }

    /// Case-insensitive exact match on the product name.
    ///
    /// `None` is a normal outcome, not a failure.
    ///
    /// ```rust
    /// use shopfront_core::catalog::Catalog;
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::{Category, Product};
    ///
    /// let mut catalog = Catalog::new();
    /// let id = catalog
    ///     .insert(Product::new("Laptop", Money::from_major(100_000), 10, Category::Electronics))
    ///     .unwrap();
    ///
    /// assert_eq!(catalog.lookup("LAPTOP"), Some(id));
    /// assert_eq!(catalog.lookup("laptop"), Some(id));
    /// assert_eq!(catalog.lookup("nonexistent"), None);
    /// ```
    pub fn lookup(&self, name: &str) -> Option<ProductId> {
        self.index.get(&normalize_name(name)).copied()
    }

    /// Like [`Catalog::lookup`] but returns the product itself.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    /// Mutable access is crate-internal: stock only moves through the cart.
    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(id.0)
    }

    /// Resolves an id or fails with [`CoreError::ProductNotFound`].
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Reduces stock on the product behind `id`.
    pub(crate) fn reduce_stock(&mut self, id: ProductId, quantity: i64) -> CoreResult<()> {
        self.get_mut(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?
            .reduce_stock(quantity)
    }

    /// Products with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| (ProductId(i), p))
    }

    /// Stock report: name, stock and list price for every product.
    pub fn report(&self) -> Vec<StockLine> {
        self.products.iter().map(StockLine::from).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new("Laptop", Money::from_major(100_000), 10, Category::Electronics))
            .unwrap();
        catalog
            .insert(Product::new("Washing Machine", Money::from_major(25_000), 12, Category::Electronics))
            .unwrap();
        catalog
            .insert(Product::new("Shoe", Money::from_major(1_000), 30, Category::Clothing))
            .unwrap();
        catalog
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("LAPTOP"), catalog.lookup("laptop"));
        assert!(catalog.lookup("LaPtOp").is_some());
        assert_eq!(catalog.find("washing machine").unwrap().name(), "Washing Machine");
    }

    #[test]
    fn test_lookup_trims_input() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("  shoe \n"), catalog.lookup("Shoe"));
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("nonexistent"), None);
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_keys_match_product_names() {
        let catalog = catalog();
        for (id, product) in catalog.iter() {
            assert_eq!(catalog.lookup(product.name()), Some(id));
        }
    }

    #[test]
    fn test_duplicate_folded_name_rejected() {
        let mut catalog = catalog();
        let err = catalog
            .insert(Product::new("LAPTOP", Money::from_major(1), 1, Category::Electronics))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_invalid_rows_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog
            .insert(Product::new(" ", Money::from_major(1), 1, Category::Clothing))
            .is_err());
        assert!(catalog
            .insert(Product::new("Hat", Money::from_cents(-1), 1, Category::Clothing))
            .is_err());
        assert!(catalog
            .insert(Product::new("Hat", Money::from_cents(1), -1, Category::Clothing))
            .is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_report_in_insertion_order() {
        let report = catalog().report();
        let names: Vec<_> = report.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Washing Machine", "Shoe"]);
        assert_eq!(report[0].stock_quantity, 10);
        assert_eq!(report[0].unit_price, Money::from_major(100_000));
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = catalog();
        let err = catalog.require(ProductId(42)).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }
}

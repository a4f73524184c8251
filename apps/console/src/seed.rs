//! # Seed Catalog
//!
//! The fixed product range the console session starts with.
//!
//! | Product         | Price   | Stock | Category    |
//! |-----------------|---------|-------|-------------|
//! | Laptop          | 100000  | 10    | Electronics |
//! | Phone           | 50000   | 30    | Electronics |
//! | Shoe            | 1000    | 30    | Clothing    |
//! | Watch           | 10000   | 40    | Clothing    |
//! | SmartTV         | 60000   | 15    | Electronics |
//! | Speakers        | 15000   | 15    | Electronics |
//! | AC              | 35000   | 8     | Electronics |
//! | Washing Machine | 25000   | 12    | Electronics |
//! | Vacuum Cleaner  | 8000    | 12    | Electronics |
//! | Earpods         | 3000    | 25    | Electronics |

use shopfront_core::{Catalog, Category, CoreResult, Money, Product};
use tracing::debug;

/// (name, price in whole units, stock, category)
pub const SEED_PRODUCTS: &[(&str, i64, i64, Category)] = &[
    ("Laptop", 100_000, 10, Category::Electronics),
    ("Phone", 50_000, 30, Category::Electronics),
    ("Shoe", 1_000, 30, Category::Clothing),
    ("Watch", 10_000, 40, Category::Clothing),
    ("SmartTV", 60_000, 15, Category::Electronics),
    ("Speakers", 15_000, 15, Category::Electronics),
    ("AC", 35_000, 8, Category::Electronics),
    ("Washing Machine", 25_000, 12, Category::Electronics),
    ("Vacuum Cleaner", 8_000, 12, Category::Electronics),
    ("Earpods", 3_000, 25, Category::Electronics),
];

/// Builds the starting catalog from [`SEED_PRODUCTS`].
pub fn seed_catalog() -> CoreResult<Catalog> {
    let mut catalog = Catalog::new();

    for &(name, price, stock, category) in SEED_PRODUCTS {
        let id = catalog.insert(Product::new(name, Money::from_major(price), stock, category))?;
        debug!(product = name, %id, %category, "Seeded product");
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_has_every_row() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.len(), SEED_PRODUCTS.len());

        for &(name, price, stock, category) in SEED_PRODUCTS {
            let product = catalog.find(&name.to_uppercase()).unwrap();
            assert_eq!(product.unit_price(), Money::from_major(price));
            assert_eq!(product.stock_quantity(), stock);
            assert_eq!(product.category(), category);
        }
    }

    #[test]
    fn test_seed_clothing_rows() {
        let catalog = seed_catalog().unwrap();
        let clothing: Vec<_> = catalog
            .iter()
            .filter(|(_, p)| p.category() == Category::Clothing)
            .map(|(_, p)| p.name())
            .collect();
        assert_eq!(clothing, ["Shoe", "Watch"]);
    }
}

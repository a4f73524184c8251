//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! Products, the catalog, the shopping cart and checkout pricing, as pure
//! Rust with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                shopfront-console (apps/console)                 │   │
//! │  │   stock table ──► prompts ──► add to cart ──► receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopfront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │  Catalog  │  │   Cart    │  │  Receipt  │  │   │
//! │  │   │  Category │  │ StockLine │  │ Customer  │  │ Checkout  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO ENVIRONMENT                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Category, DiscountRate, ProductId
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Name-indexed product arena
//! - [`cart`] - ShoppingCart and Customer
//! - [`checkout`] - Receipt types
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Catalog, Category, Customer, Money, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .insert(Product::new("Laptop", Money::from_major(100_000), 10, Category::Electronics))
//!     .unwrap();
//!
//! let mut customer = Customer::new();
//! let laptop = catalog.lookup("LAPTOP").unwrap();
//! customer.cart_mut().add_item(&mut catalog, laptop, 3).unwrap();
//!
//! let checkout = customer.cart_mut().checkout(&catalog);
//! assert_eq!(checkout.total().to_decimal_string(), "270000.00");
//! assert!(customer.cart().is_empty());
//! assert_eq!(catalog.get(laptop).unwrap().stock_quantity(), 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAddition, CartLine, Customer, ShoppingCart};
pub use catalog::{Catalog, StockLine};
pub use checkout::{Checkout, Receipt, ReceiptLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

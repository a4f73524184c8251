//! # Console Session
//!
//! Drives the fixed single-order scenario over any `BufRead` / `Write` pair.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Stock table                                                         │
//! │  2. "Enter the product name to add to the cart :"                      │
//! │       ├── unknown ──► "Invalid product name." ───────────────┐          │
//! │       └── found ──► "Enter quantity:"                        │          │
//! │              ├── not an integer ──► diagnostic ──────────────┤          │
//! │              └── add_item ──► confirmation or diagnostic ────┤          │
//! │  3. "Enter your name for the order:"  ◄──────────────────────┘          │
//! │  4. Order banner                                                        │
//! │  5. Checkout receipt (or "Your cart is empty.")                        │
//! │  6. Stock table again                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operator mistake is printed and the session carries on. Only a
//! failing reader or writer ends it early.

use std::io::{BufRead, Write};

use shopfront_core::{CartAddition, Catalog, Checkout, CoreError, Customer, ProductId};
use tracing::{debug, info, warn};

use crate::config::ShopConfig;
use crate::error::{AppResult, InputError};
use crate::render;

pub const PRODUCT_PROMPT: &str = "Enter the product name to add to the cart :";
pub const QUANTITY_PROMPT: &str = "Enter quantity:";
pub const NAME_PROMPT: &str = "Enter your name for the order:";

/// What happened during a completed session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The line added to the cart, if the order request was accepted.
    pub added: Option<CartAddition>,
    /// Display name typed at the last prompt. Used only for the banner.
    pub customer_name: String,
    pub checkout: Checkout,
}

/// One operator, one customer, one catalog.
pub struct Session<R, W> {
    catalog: Catalog,
    customer: Customer,
    rule_width: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, config: &ShopConfig, input: R, output: W) -> Self {
        Session {
            catalog,
            customer: Customer::new(),
            rule_width: config.rule_width,
            input,
            output,
        }
    }

    /// Runs the whole scenario once.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        self.show_stock()?;

        let added = self.take_order()?;

        // the name is echoed as typed, surrounding spaces included
        let customer_name = self.prompt(NAME_PROMPT)?;
        render::write_order_banner(&mut self.output, self.rule_width, &customer_name)?;

        let checkout = self.customer.cart_mut().checkout(&self.catalog);
        match &checkout {
            Checkout::Empty => info!("Checkout requested on an empty cart"),
            Checkout::Completed(receipt) => {
                if !receipt.unpriced.is_empty() {
                    warn!(
                        receipt_id = %receipt.id,
                        unpriced = ?receipt.unpriced,
                        "Cart lines left off the receipt"
                    );
                }
                info!(
                    receipt_id = %receipt.id,
                    lines = receipt.lines.len(),
                    total = %receipt.total,
                    "Checkout complete"
                );
            }
        }
        render::write_checkout(&mut self.output, self.rule_width, &checkout)?;

        self.show_stock()?;
        self.output.flush()?;

        Ok(SessionOutcome {
            added,
            customer_name,
            checkout,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    fn show_stock(&mut self) -> AppResult<()> {
        let report = self.catalog.report();
        render::write_stock_table(&mut self.output, self.rule_width, &report)?;
        Ok(())
    }

    /// Steps 2 and the quantity sub-step. `None` means nothing was added.
    fn take_order(&mut self) -> AppResult<Option<CartAddition>> {
        let name = self.prompt(PRODUCT_PROMPT)?;
        let product_id = match self.resolve_product(&name) {
            Ok(id) => id,
            Err(err) => {
                warn!(input = %name, "Unknown product requested");
                self.say(&err)?;
                return Ok(None);
            }
        };

        let raw = self.prompt(QUANTITY_PROMPT)?;
        let raw = raw.trim();
        let quantity = match parse_quantity(raw) {
            Ok(qty) => qty,
            Err(err) => {
                warn!(input = %raw, "Quantity is not an integer");
                self.say(&err)?;
                return Ok(None);
            }
        };

        match self
            .customer
            .cart_mut()
            .add_item(&mut self.catalog, product_id, quantity)
        {
            Ok(added) => {
                if let Some(shortfall) = &added.shortfall {
                    warn!(%product_id, quantity, error = %shortfall, "Stock fell short after the line was recorded");
                    self.say(shortfall)?;
                }
                info!(
                    product = %added.product_name,
                    quantity,
                    remaining_stock = added.remaining_stock,
                    "Added to cart"
                );
                self.say(&added)?;
                Ok(Some(added))
            }
            Err(err) => {
                warn!(%product_id, quantity, error = %err, "Cart rejected item");
                self.say(&diagnostic(&err))?;
                Ok(None)
            }
        }
    }

    fn resolve_product(&self, name: &str) -> Result<ProductId, InputError> {
        let found = self.catalog.lookup(name);
        debug!(input = %name, found = found.is_some(), "Catalog lookup");
        found.ok_or_else(|| InputError::UnknownProduct(name.to_string()))
    }

    /// Prints `text` on its own line and reads one answer line.
    ///
    /// Only the line terminator is stripped. End of input reads as an empty
    /// answer, and bytes that are not UTF-8 are replaced rather than failing
    /// the session.
    fn prompt(&mut self, text: &str) -> AppResult<String> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn say(&mut self, message: &dyn std::fmt::Display) -> AppResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Parses the quantity line as a signed integer.
///
/// Sign and range are the cart's business; this only rejects non-numbers.
pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| InputError::NotAnInteger(raw.to_string()))
}

/// Console text for a cart rejection.
fn diagnostic(err: &CoreError) -> String {
    match err {
        CoreError::Validation(inner) => format!("{}.", inner),
        other => other.to_string(),
    }
}

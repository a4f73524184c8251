//! # Checkout
//!
//! Receipt types produced by [`ShoppingCart::checkout`](crate::cart::ShoppingCart::checkout).
//!
//! Prices on a receipt are frozen copies: the discounted unit price and
//! subtotal are computed once at checkout and never re-read from the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::types::ProductId;

/// One priced line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// Product name at checkout (frozen).
    pub name: String,
    pub quantity: i64,
    /// Unit price after the category discount.
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

/// A completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub lines: Vec<ReceiptLine>,
    /// Sum of every line subtotal.
    pub total: Money,
    pub created_at: DateTime<Utc>,
    /// Cart lines that could not be priced and are not in `lines` or `total`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unpriced: Vec<ProductId>,
}

impl Receipt {
    /// Builds a receipt, summing the line subtotals into the total.
    pub fn new(lines: Vec<ReceiptLine>) -> Self {
        let total = lines.iter().map(|l| l.subtotal).sum();
        Receipt {
            id: Uuid::new_v4().to_string(),
            lines,
            total,
            created_at: Utc::now(),
            unpriced: Vec::new(),
        }
    }

    /// Records cart lines that were dropped for lack of a product.
    pub fn with_unpriced(mut self, unpriced: Vec<ProductId>) -> Self {
        self.unpriced = unpriced;
        self
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// The cart had no lines; nothing was priced.
    Empty,
    /// The cart was priced and cleared.
    Completed(Receipt),
}

impl Checkout {
    pub fn is_empty(&self) -> bool {
        matches!(self, Checkout::Empty)
    }

    /// Receipt total, zero for an empty cart.
    pub fn total(&self) -> Money {
        match self {
            Checkout::Empty => Money::zero(),
            Checkout::Completed(receipt) => receipt.total,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Checkout::Empty => None,
            Checkout::Completed(receipt) => Some(receipt),
        }
    }

    pub fn into_receipt(self) -> Option<Receipt> {
        match self {
            Checkout::Empty => None,
            Checkout::Completed(receipt) => Some(receipt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: i64, unit_cents: i64) -> ReceiptLine {
        let unit_price = Money::from_cents(unit_cents);
        ReceiptLine {
            name: name.to_string(),
            quantity,
            unit_price,
            subtotal: unit_price * quantity,
        }
    }

    #[test]
    fn test_receipt_totals() {
        let receipt = Receipt::new(vec![line("Shoe", 2, 80_000), line("Earpods", 1, 270_000)]);
        assert_eq!(receipt.total, Money::from_cents(430_000));
        assert_eq!(receipt.total_quantity(), 3);
        assert!(uuid::Uuid::parse_str(&receipt.id).is_ok());
    }

    #[test]
    fn test_empty_checkout_total_is_zero() {
        assert_eq!(Checkout::Empty.total(), Money::zero());
        assert!(Checkout::Empty.receipt().is_none());
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = Receipt::new(vec![line("Laptop", 3, 9_000_000)]);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["total"], 27_000_000);
        assert_eq!(json["lines"][0]["unitPrice"], 9_000_000);
        assert_eq!(json["lines"][0]["subtotal"], 27_000_000);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("unpriced").is_none());
    }
}

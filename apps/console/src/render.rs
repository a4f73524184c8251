//! # Console Rendering
//!
//! Formats the stock table, the order banner and the checkout receipt into
//! any `io::Write`. Nothing here reads input or touches the catalog's state.
//!
//! ## Receipt Layout (width 50)
//! ```text
//! **************************************************
//!                    Checkout Summary
//! **************************************************
//! Product              Quantity   Price      Subtotal
//! --------------------------------------------------
//! Laptop               3          $90000.00   $270000.00
//! --------------------------------------------------
//! Total Amount: $270000.00
//! **************************************************
//! Thank you for shopping with us!
//! **************************************************
//! ```

use std::io::{self, Write};

use shopfront_core::{Checkout, Receipt, StockLine};

/// The receipt title sits at a fixed indent, right of center on a 50 rule.
const CHECKOUT_TITLE_INDENT: usize = 19;

/// A line of `*` across the configured width.
pub fn write_rule<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "*".repeat(width))
}

/// Rule, centered title, rule.
pub fn write_banner<W: Write>(out: &mut W, width: usize, title: &str) -> io::Result<()> {
    write_rule(out, width)?;
    writeln!(out, "{:^width$}", title, width = width)?;
    write_rule(out, width)
}

/// Stock table: `<name> - <stock> units - <price>$ (1)` per product.
pub fn write_stock_table<W: Write>(
    out: &mut W,
    width: usize,
    report: &[StockLine],
) -> io::Result<()> {
    write_banner(out, width, "Current Stock Levels")?;
    for line in report {
        writeln!(
            out,
            "{} - {} units - {}$ (1)",
            line.name,
            line.stock_quantity,
            line.unit_price.to_decimal_string()
        )?;
    }
    write_rule(out, width)
}

/// Banner announcing the order for `customer_name`.
pub fn write_order_banner<W: Write>(
    out: &mut W,
    width: usize,
    customer_name: &str,
) -> io::Result<()> {
    write_rule(out, width)?;
    writeln!(out, "         Order successfully placed by {}!", customer_name)?;
    write_rule(out, width)
}

/// Receipt for a completed checkout, or the empty-cart notice.
pub fn write_checkout<W: Write>(out: &mut W, width: usize, checkout: &Checkout) -> io::Result<()> {
    match checkout {
        Checkout::Empty => writeln!(out, "Your cart is empty."),
        Checkout::Completed(receipt) => write_receipt(out, width, receipt),
    }
}

fn write_receipt<W: Write>(out: &mut W, width: usize, receipt: &Receipt) -> io::Result<()> {
    let separator = "-".repeat(width);

    write_rule(out, width)?;
    writeln!(out, "{:indent$}Checkout Summary", "", indent = CHECKOUT_TITLE_INDENT)?;
    write_rule(out, width)?;
    writeln!(
        out,
        "{:<20} {:<10} {:<10} {:<10}",
        "Product", "Quantity", "Price", "Subtotal"
    )?;
    writeln!(out, "{}", separator)?;

    for line in &receipt.lines {
        writeln!(
            out,
            "{:<20} {:<10} ${:<10} ${:<10}",
            line.name,
            line.quantity,
            line.unit_price.to_decimal_string(),
            line.subtotal.to_decimal_string()
        )?;
    }

    writeln!(out, "{}", separator)?;
    writeln!(out, "Total Amount: ${:<10}", receipt.total.to_decimal_string())?;
    write_rule(out, width)?;
    writeln!(out, "Thank you for shopping with us!")?;
    write_rule(out, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, ReceiptLine};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn trimmed_lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim_end).collect()
    }

    #[test]
    fn test_stock_table() {
        let report = vec![
            StockLine {
                name: "Laptop".to_string(),
                stock_quantity: 10,
                unit_price: Money::from_major(100_000),
            },
            StockLine {
                name: "Shoe".to_string(),
                stock_quantity: 30,
                unit_price: Money::from_major(1_000),
            },
        ];
        let text = render(|out| write_stock_table(out, 50, &report));

        assert_eq!(
            trimmed_lines(&text),
            [
                "*".repeat(50).as_str(),
                "               Current Stock Levels",
                "*".repeat(50).as_str(),
                "Laptop - 10 units - 100000.00$ (1)",
                "Shoe - 30 units - 1000.00$ (1)",
                "*".repeat(50).as_str(),
            ]
        );
    }

    #[test]
    fn test_order_banner() {
        let text = render(|out| write_order_banner(out, 20, "Asha"));
        assert_eq!(
            trimmed_lines(&text),
            [
                "*".repeat(20).as_str(),
                "         Order successfully placed by Asha!",
                "*".repeat(20).as_str(),
            ]
        );
    }

    #[test]
    fn test_empty_checkout() {
        let text = render(|out| write_checkout(out, 50, &Checkout::Empty));
        assert_eq!(text, "Your cart is empty.\n");
    }

    #[test]
    fn test_receipt_layout() {
        let unit_price = Money::from_major(90_000);
        let receipt = Receipt::new(vec![ReceiptLine {
            name: "Laptop".to_string(),
            quantity: 3,
            unit_price,
            subtotal: unit_price * 3,
        }]);
        let text = render(|out| write_checkout(out, 50, &Checkout::Completed(receipt)));
        let lines = trimmed_lines(&text);

        assert_eq!(lines[1], "                   Checkout Summary");
        assert_eq!(lines[3], "Product              Quantity   Price      Subtotal");
        assert_eq!(lines[4], "-".repeat(50));
        assert_eq!(lines[5], "Laptop               3          $90000.00   $270000.00");
        assert_eq!(lines[7], "Total Amount: $270000.00");
        assert_eq!(lines[9], "Thank you for shopping with us!");
        assert_eq!(lines.len(), 11);
    }
}

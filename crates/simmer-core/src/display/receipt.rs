//! Markdown report for a scanned receipt.

use std::fmt;

use crate::{models::GroceryItem, receipt::ReceiptScan};

/// Lists accepted items grouped by nothing but receipt order, followed by
/// the rejected entries and why.
pub struct ReceiptReport<'a>(pub &'a ReceiptScan);

impl fmt::Display for ReceiptReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scan = self.0;
        writeln!(f, "# Receipt Items")?;
        writeln!(f)?;

        if scan.items.is_empty() {
            writeln!(f, "No grocery items found.")?;
        } else {
            for item in &scan.items {
                write_item(f, item)?;
            }
        }

        if !scan.rejected.is_empty() {
            writeln!(f, "\n## Rejected ({})", scan.rejected.len())?;
            writeln!(f)?;
            for rejected in &scan.rejected {
                writeln!(f, "- {}: `{}`", rejected.reason, rejected.raw)?;
            }
        }
        Ok(())
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &GroceryItem) -> fmt::Result {
    write!(f, "- **{}** [{}]", item.name, item.category.as_str())?;
    match (item.quantity, &item.unit) {
        (Some(quantity), Some(unit)) => write!(f, " {quantity} {unit}")?,
        (Some(quantity), None) => write!(f, " x{quantity}")?,
        _ => {}
    }
    writeln!(f, ", expires {}", item.expiry_date.strftime("%Y-%m-%d"))
}

//! Receipt scanning: turning a vision model's answer into pantry items.
//!
//! The model is asked for a JSON array of `{name, quantity?, unit?,
//! category}` objects, but its output is not trusted. The response is
//! repaired where possible (markdown fences, surrounding prose) and every
//! entry is validated on its own, so one malformed line does not discard
//! the whole receipt.
//!
//! ```rust
//! use jiff::Timestamp;
//! use simmer_core::receipt::parse_response;
//!
//! let response = r#"Here is what I found:
//! [
//!   {"name": "Tomato", "quantity": 4, "category": "Vegetables"},
//!   {"name": "", "category": "Other"}
//! ]"#;
//!
//! let scan = parse_response(response, Timestamp::UNIX_EPOCH, 7).unwrap();
//! assert_eq!(scan.items.len(), 1);
//! assert_eq!(scan.rejected[0].reason, "Missing item name");
//! ```

use jiff::{SignedDuration, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Result, SimmerError},
    models::GroceryItem,
};

pub mod parse;
mod validate;

pub use parse::extract_items;

/// Rows per insert request accepted by the inventory backend.
pub const BACKEND_BATCH_SIZE: usize = 50;

/// An entry the model produced that could not be used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rejected {
    /// The entry exactly as the model returned it
    pub raw: Value,
    pub reason: String,
}

/// Outcome of scanning one receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReceiptScan {
    pub items: Vec<GroceryItem>,
    pub rejected: Vec<Rejected>,
}

/// Repair, parse and validate a model response.
///
/// Items get `created_at = scanned_at` and an expiry `shelf_life_days`
/// later.
///
/// # Errors
///
/// Returns `SimmerError::ReceiptFormat` when no item array can be recovered.
pub fn parse_response(text: &str, scanned_at: Timestamp, shelf_life_days: u32) -> Result<ReceiptScan> {
    let raw = extract_items(text)?;
    validate_items(raw, scanned_at, shelf_life_days)
}

/// Validate raw entries, splitting them into usable items and rejections.
pub fn validate_items(
    raw: Vec<Value>,
    scanned_at: Timestamp,
    shelf_life_days: u32,
) -> Result<ReceiptScan> {
    let shelf_life = SignedDuration::from_hours(i64::from(shelf_life_days) * 24);
    let expiry_date = scanned_at
        .checked_add(shelf_life)
        .map_err(|e| SimmerError::Configuration {
            message: format!("Shelf life of {shelf_life_days} days is out of range: {e}"),
        })?;

    let mut scan = ReceiptScan::default();
    for entry in raw {
        match validate::validate_item(&entry, scanned_at, expiry_date) {
            Ok(item) => scan.items.push(item),
            Err(reason) => {
                debug!("Rejected receipt entry {entry}: {reason}");
                scan.rejected.push(Rejected {
                    raw: entry,
                    reason: reason.to_string(),
                });
            }
        }
    }
    Ok(scan)
}

/// Split items into backend-sized insert batches. A zero size is treated
/// as one.
pub fn batches(items: &[GroceryItem], size: usize) -> std::slice::Chunks<'_, GroceryItem> {
    items.chunks(size.max(1))
}

//! Per-item validation and normalization of receipt entries.

use std::str::FromStr;

use jiff::Timestamp;
use serde_json::Value;

use crate::models::{Category, GroceryItem};

pub(crate) const MISSING_NAME: &str = "Missing item name";
pub(crate) const INVALID_CATEGORY: &str = "Invalid category";
pub(crate) const INVALID_QUANTITY: &str = "Invalid quantity";
pub(crate) const INVALID_UNIT: &str = "Invalid unit";
pub(crate) const NOT_AN_OBJECT: &str = "Not an item object";

/// Turn one raw entry into a [`GroceryItem`], or the reason it was rejected.
pub(crate) fn validate_item(
    raw: &Value,
    created_at: Timestamp,
    expiry_date: Timestamp,
) -> Result<GroceryItem, &'static str> {
    let Some(fields) = raw.as_object() else {
        return Err(NOT_AN_OBJECT);
    };

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(MISSING_NAME)?;

    let category = fields
        .get("category")
        .and_then(Value::as_str)
        .and_then(|category| Category::from_str(category).ok())
        .ok_or(INVALID_CATEGORY)?;

    let quantity = match fields.get("quantity") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().ok_or(INVALID_QUANTITY)?),
        Some(Value::String(s)) => Some(s.trim().parse::<f64>().map_err(|_| INVALID_QUANTITY)?),
        Some(_) => return Err(INVALID_QUANTITY),
    };
    if quantity.is_some_and(|q| !q.is_finite() || q <= 0.0) {
        return Err(INVALID_QUANTITY);
    }

    let unit = match fields.get("unit") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim()).filter(|s| !s.is_empty()).map(String::from),
        Some(_) => return Err(INVALID_UNIT),
    };

    Ok(GroceryItem {
        name: name.to_string(),
        quantity,
        unit,
        category,
        expiry_date,
        created_at,
    })
}

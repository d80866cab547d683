//! Grocery items extracted from receipts and their categories.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of pantry categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Fruits,
    Vegetables,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    /// Anything that fits no other category
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Meat,
        Category::Seafood,
        Category::Dairy,
        Category::Bakery,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Meat => "Meat",
            Category::Seafood => "Seafood",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Invalid category: {s}"))
    }
}

/// A validated pantry item ready to be handed to the inventory backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    /// Normalized item name ("Tomato")
    pub name: String,

    /// Amount bought, always positive when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Unit for `quantity` ("kg", "pcs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub category: Category,

    /// Estimated expiry (UTC)
    pub expiry_date: Timestamp,

    /// When the receipt was scanned (UTC)
    pub created_at: Timestamp,
}

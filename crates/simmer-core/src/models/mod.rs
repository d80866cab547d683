//! Data models for recipes, cooking progress and pantry items.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep data structures apart from presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use simmer_core::models::{Recipe, Step};
//!
//! let recipe = Recipe {
//!     title: "Creamy Garlic Pasta".to_string(),
//!     description: None,
//!     servings: Some(4),
//!     ingredients: vec!["400g spaghetti".to_string()],
//!     steps: vec![
//!         Step::new(1, "Boil pasta").with_timer(600),
//!         Step::new(2, "Sauté garlic").with_tip("Keep the heat low"),
//!     ],
//! };
//! assert!(recipe.validate().is_ok());
//! assert_eq!(recipe.total_timer_seconds(), 600);
//! ```

pub mod event;
pub mod grocery;
pub mod progress;
pub mod recipe;
pub mod step;
pub mod voice;


pub use event::GuideEvent;
pub use grocery::{Category, GroceryItem};
pub use progress::Progress;
pub use recipe::Recipe;
pub use step::Step;
pub use voice::VoiceAction;

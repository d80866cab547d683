//! Core library for the Simmer cooking companion.
//!
//! This crate provides the guided-cooking controller (step progress plus a
//! single shared countdown), voice command interpretation, receipt scan
//! parsing, and the settings and error types shared with the CLI.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Plain data, loaded from JSON
//! - **Controllers** ([`guide`], [`assistant`]): Synchronous state machines
//!   that report through an [`EventSink`]
//! - **Display Views** ([`display`]): Newtype wrappers rendering markdown
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use simmer_core::{CookingAssistant, EventLog, GuideEvent, Reply, Step};
//!
//! let steps = vec![
//!     Step::new(1, "Boil pasta").with_timer(3),
//!     Step::new(2, "Drain and toss"),
//! ];
//! let mut assistant = CookingAssistant::new(steps, EventLog::new());
//!
//! let reply = assistant.handle_transcript("start the timer").unwrap();
//! assert_eq!(reply.to_string(), "Timer started for step 1: 0:03\n");
//!
//! for _ in 0..3 {
//!     assistant.tick();
//! }
//! assert_eq!(
//!     assistant.guide().sink().events(),
//!     &[GuideEvent::TimerCompleted { step_index: 0 }]
//! );
//!
//! assert!(matches!(
//!     assistant.handle_transcript("next step").unwrap(),
//!     Reply::Instruction { step_number: 2, .. }
//! ));
//! ```

pub mod assistant;
pub mod display;
pub mod error;
pub mod guide;
pub mod models;
pub mod receipt;
pub mod settings;
pub mod voice;

// Re-export commonly used types
pub use assistant::{CookingAssistant, Reply};
pub use display::{Clock, GuideView, Notice, ProgressLine, ReceiptReport, RecipeOverview};
pub use error::{Result, SimmerError};
pub use guide::{drive_countdown, CookingGuide, EventLog, EventSink, Tick, TimerPhase};
pub use models::{Category, GroceryItem, GuideEvent, Progress, Recipe, Step, VoiceAction};
pub use receipt::{parse_response, ReceiptScan, Rejected};
pub use settings::{Settings, SettingsBuilder};
pub use voice::{classify, ListenHandle, ListeningSession};

//! Display wrappers for recipes, guides, receipts and session messages.
//!
//! Domain types stay free of presentation logic. Each view here is a newtype
//! borrowing the data it formats, and every view renders markdown so the CLI
//! can pass it straight to its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Display Views  │    │    Markdown     │
//! │ (Recipe, Guide) │───▶│   (newtypes)    │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`clock`]: `m:ss` countdown formatting
//! - [`guide`]: Recipe cards, live guide views and progress lines
//! - [`receipt`]: Scanned receipt reports
//! - [`status`]: Notices, assistant replies and countdown lines
//!
//! ## Usage
//!
//! ```rust
//! use simmer_core::display::{Clock, Notice};
//!
//! assert_eq!(Clock(125).to_string(), "2:05");
//!
//! let notice = Notice::alert("Timer finished for step 1");
//! assert_eq!(notice.to_string(), "Alert: Timer finished for step 1\n");
//! ```

pub mod clock;
pub mod guide;
pub mod receipt;
pub mod status;

pub use clock::Clock;
pub use guide::{GuideView, ProgressLine, RecipeOverview};
pub use receipt::ReceiptReport;
pub use status::{CountdownLine, Notice, NoticeKind};

//! Voice control: transcript classification and listening sessions.
//!
//! Speech recognition and text-to-speech are provided by the platform;
//! this module only interprets what was heard.

pub mod classifier;
pub mod session;

pub use classifier::{available_commands, classify, AVAILABLE_COMMANDS};
pub use session::{ListenHandle, ListeningSession, DEFAULT_LISTEN_TIMEOUT};

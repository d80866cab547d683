//! Notifications raised by the cooking guide.

use serde::{Deserialize, Serialize};

/// Completion notification delivered to an [`EventSink`](crate::guide::EventSink).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuideEvent {
    /// A step number was marked done for the first time
    StepCompleted { step_number: u32 },
    /// The countdown bound to `step_index` reached zero
    TimerCompleted { step_index: usize },
}

//! Completion progress for a cooking guide.

use serde::{Deserialize, Serialize};

/// Number of completed steps out of the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Progress {
    /// Steps marked complete
    pub completed: usize,
    /// Steps in the guide
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// `(completed, total)` pair.
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.completed, self.total)
    }

    /// Completed share in `0.0..=1.0`, or `None` for an empty guide.
    ///
    /// An empty guide has no progress to show; callers should hide the
    /// progress bar rather than treat it as an error.
    pub fn fraction(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.completed as f64 / self.total as f64)
        }
    }

    /// True once every step is complete. An empty guide is never finished.
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

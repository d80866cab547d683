//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

/// One instruction in a recipe's procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Display and completion-tracking identity, unique within a recipe
    pub number: u32,

    /// Human-readable instruction text
    pub instruction: String,

    /// Countdown length in seconds, if the step is timed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<u32>,

    /// Short advisory notes shown alongside the instruction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

impl Step {
    /// Create an untimed step without tips.
    pub fn new(number: u32, instruction: impl Into<String>) -> Self {
        Self {
            number,
            instruction: instruction.into(),
            timer: None,
            tips: Vec::new(),
        }
    }

    /// Attach a countdown of `seconds` to the step.
    pub fn with_timer(mut self, seconds: u32) -> Self {
        self.timer = Some(seconds);
        self
    }

    /// Append an advisory tip.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

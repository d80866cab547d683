//! Actions recognised in spoken cooking commands.

use serde::{Deserialize, Serialize};

/// What a voice command asks the cooking assistant to do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum VoiceAction {
    NextStep,
    PreviousStep,
    StartTimer,
    StopTimer,
    TimeRemaining,
    NextInstruction,
    RepeatInstruction,
    /// Ask for a replacement ingredient; `None` when none was named
    Substitute { ingredient: Option<String> },
    Help,
}

impl VoiceAction {
    /// Stable identifier, as used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            VoiceAction::NextStep => "next_step",
            VoiceAction::PreviousStep => "previous_step",
            VoiceAction::StartTimer => "start_timer",
            VoiceAction::StopTimer => "stop_timer",
            VoiceAction::TimeRemaining => "time_remaining",
            VoiceAction::NextInstruction => "next_instruction",
            VoiceAction::RepeatInstruction => "repeat_instruction",
            VoiceAction::Substitute { .. } => "substitute",
            VoiceAction::Help => "help",
        }
    }
}

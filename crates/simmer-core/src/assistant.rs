//! Hands-free cooking: voice actions applied to a guide.
//!
//! [`CookingAssistant`] keeps a focus cursor (the step being read aloud)
//! next to the guide's timer binding, and answers every action with a
//! [`Reply`] the front end can print or speak.

use log::debug;
use serde::Serialize;

use crate::{
    error::Result,
    guide::{CookingGuide, EventSink, Tick},
    models::{Step, VoiceAction},
    voice::{available_commands, classify},
};

/// Answer to a voice action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// The focused step, after moving or repeating
    Instruction { step_number: u32, text: String },
    /// The step after the focused one, without moving
    Upcoming { step_number: u32, text: String },
    /// Focus is already on the last step
    EndOfRecipe,
    /// The recipe has no steps at all
    NoSteps,
    TimerStarted { step_number: u32, remaining: String },
    TimerStopped { remaining: String },
    TimeRemaining { remaining: String, running: bool },
    /// The focused step has no countdown
    NoTimer { step_number: u32 },
    /// Nothing to stop or report
    NoTimerRunning,
    /// Substitution lookup is delegated to the AI collaborator
    Substitution { ingredient: Option<String> },
    Help { commands: Vec<String> },
}

/// A guide plus the step currently in focus.
#[derive(Debug)]
pub struct CookingAssistant<S> {
    guide: CookingGuide<S>,
    focus: usize,
}

impl<S: EventSink> CookingAssistant<S> {
    pub fn new(steps: Vec<Step>, sink: S) -> Self {
        Self {
            guide: CookingGuide::new(steps, sink),
            focus: 0,
        }
    }

    /// Classify a transcript and apply it.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::UnrecognizedCommand` for unknown phrases.
    pub fn handle_transcript(&mut self, transcript: &str) -> Result<Reply> {
        let action = classify(transcript)?;
        Ok(self.apply(&action))
    }

    /// Apply one action to the guide.
    pub fn apply(&mut self, action: &VoiceAction) -> Reply {
        debug!("Applying {} with focus on index {}", action.name(), self.focus);
        match action {
            VoiceAction::NextStep => {
                if self.guide.steps().is_empty() {
                    Reply::NoSteps
                } else if self.focus + 1 < self.guide.steps().len() {
                    self.focus += 1;
                    self.focused_instruction()
                } else {
                    Reply::EndOfRecipe
                }
            }
            VoiceAction::PreviousStep => {
                self.focus = self.focus.saturating_sub(1);
                self.focused_instruction()
            }
            VoiceAction::RepeatInstruction => self.focused_instruction(),
            VoiceAction::NextInstruction => match self.guide.step(self.focus + 1) {
                Some(step) => Reply::Upcoming {
                    step_number: step.number,
                    text: step.instruction.clone(),
                },
                None if self.guide.steps().is_empty() => Reply::NoSteps,
                None => Reply::EndOfRecipe,
            },
            VoiceAction::StartTimer => self.start_focused_timer(),
            VoiceAction::StopTimer => {
                if self.guide.is_timer_running() {
                    self.guide.stop_timer();
                    Reply::TimerStopped {
                        remaining: self.guide.format_remaining(),
                    }
                } else {
                    Reply::NoTimerRunning
                }
            }
            VoiceAction::TimeRemaining => {
                if self.guide.is_timer_running() || self.guide.time_remaining() > 0 {
                    Reply::TimeRemaining {
                        remaining: self.guide.format_remaining(),
                        running: self.guide.is_timer_running(),
                    }
                } else {
                    Reply::NoTimerRunning
                }
            }
            VoiceAction::Substitute { ingredient } => Reply::Substitution {
                ingredient: ingredient.clone(),
            },
            VoiceAction::Help => Reply::Help {
                commands: available_commands()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
        }
    }

    /// Mark the focused step complete. Returns `false` if it already was or
    /// the recipe has no steps.
    pub fn complete_focused(&mut self) -> bool {
        match self.guide.step(self.focus).map(|step| step.number) {
            Some(number) => self.guide.mark_step_complete(number),
            None => false,
        }
    }

    /// Advance the guide's countdown by one second.
    pub fn tick(&mut self) -> Tick {
        self.guide.tick()
    }

    pub fn guide_mut(&mut self) -> &mut CookingGuide<S> {
        &mut self.guide
    }

    fn start_focused_timer(&mut self) -> Reply {
        let Some(step) = self.guide.step(self.focus) else {
            return Reply::NoSteps;
        };
        let step_number = step.number;
        if self.guide.start_step_timer(self.focus) {
            Reply::TimerStarted {
                step_number,
                remaining: self.guide.format_remaining(),
            }
        } else {
            Reply::NoTimer { step_number }
        }
    }

    fn focused_instruction(&self) -> Reply {
        match self.guide.step(self.focus) {
            Some(step) => Reply::Instruction {
                step_number: step.number,
                text: step.instruction.clone(),
            },
            None => Reply::NoSteps,
        }
    }
}

impl<S> CookingAssistant<S> {
    pub fn guide(&self) -> &CookingGuide<S> {
        &self.guide
    }

    /// Index of the step in focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_step(&self) -> Option<&Step> {
        self.guide.step(self.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        guide::EventLog,
        models::GuideEvent,
        SimmerError,
    };

    fn assistant() -> CookingAssistant<EventLog> {
        CookingAssistant::new(
            vec![
                Step::new(1, "Boil pasta").with_timer(600),
                Step::new(2, "Sauté garlic").with_timer(120),
                Step::new(3, "Toss and serve"),
            ],
            EventLog::new(),
        )
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut assistant = assistant();
        assert_eq!(
            assistant.apply(&VoiceAction::PreviousStep),
            Reply::Instruction {
                step_number: 1,
                text: "Boil pasta".to_string()
            }
        );
        assistant.apply(&VoiceAction::NextStep);
        assistant.apply(&VoiceAction::NextStep);
        assert_eq!(assistant.focus(), 2);
        assert_eq!(assistant.apply(&VoiceAction::NextStep), Reply::EndOfRecipe);
        assert_eq!(assistant.apply(&VoiceAction::NextInstruction), Reply::EndOfRecipe);
        assert_eq!(assistant.focus(), 2);
    }

    #[test]
    fn test_next_instruction_does_not_move() {
        let mut assistant = assistant();
        assert_eq!(
            assistant.apply(&VoiceAction::NextInstruction),
            Reply::Upcoming {
                step_number: 2,
                text: "Sauté garlic".to_string()
            }
        );
        assert_eq!(assistant.focus(), 0);
    }

    #[test]
    fn test_timer_follows_focus() {
        let mut assistant = assistant();
        assert_eq!(
            assistant.handle_transcript("start timer").unwrap(),
            Reply::TimerStarted {
                step_number: 1,
                remaining: "10:00".to_string()
            }
        );
        assistant.tick();
        assert_eq!(
            assistant.handle_transcript("how long").unwrap(),
            Reply::TimeRemaining {
                remaining: "9:59".to_string(),
                running: true
            }
        );
        assert_eq!(
            assistant.handle_transcript("pause timer").unwrap(),
            Reply::TimerStopped {
                remaining: "9:59".to_string()
            }
        );
        assert_eq!(
            assistant.handle_transcript("stop timer").unwrap(),
            Reply::NoTimerRunning
        );

        assistant.apply(&VoiceAction::NextStep);
        assistant.apply(&VoiceAction::NextStep);
        assert_eq!(
            assistant.apply(&VoiceAction::StartTimer),
            Reply::NoTimer { step_number: 3 }
        );
    }

    #[test]
    fn test_complete_focused_once() {
        let mut assistant = assistant();
        assistant.apply(&VoiceAction::NextStep);
        assert!(assistant.complete_focused());
        assert!(!assistant.complete_focused());
        assert_eq!(
            assistant.guide().sink().events(),
            &[GuideEvent::StepCompleted { step_number: 2 }]
        );
    }

    #[test]
    fn test_empty_recipe() {
        let mut assistant = CookingAssistant::new(Vec::new(), EventLog::new());
        assert_eq!(assistant.apply(&VoiceAction::NextStep), Reply::NoSteps);
        assert_eq!(assistant.apply(&VoiceAction::RepeatInstruction), Reply::NoSteps);
        assert_eq!(assistant.apply(&VoiceAction::StartTimer), Reply::NoSteps);
        assert_eq!(assistant.apply(&VoiceAction::NextInstruction), Reply::NoSteps);
        assert!(!assistant.complete_focused());
    }

    #[test]
    fn test_help_and_substitution() {
        let mut assistant = assistant();
        match assistant.handle_transcript("help").unwrap() {
            Reply::Help { commands } => assert!(commands.contains(&"Repeat".to_string())),
            other => panic!("unexpected reply: {other:?}"),
        }
        assert_eq!(
            assistant.handle_transcript("alternative for cream").unwrap(),
            Reply::Substitution {
                ingredient: Some("cream".to_string())
            }
        );
        assert!(matches!(
            assistant.handle_transcript("dance"),
            Err(SimmerError::UnrecognizedCommand { .. })
        ));
    }
}

//! One-line notices and assistant replies.

use std::fmt;

use super::Clock;
use crate::{assistant::Reply, guide::CookingGuide, models::GuideEvent};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Done,
    Alert,
    Error,
}

/// Wrapper type for displaying short session messages.
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Done,
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Alert,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Describe a guide event using step numbers from `guide`.
    pub fn for_event<S>(event: &GuideEvent, guide: &CookingGuide<S>) -> Self {
        match *event {
            GuideEvent::StepCompleted { step_number } => {
                let progress = guide.progress();
                Notice::done(format!(
                    "Step {step_number} complete ({} / {})",
                    progress.completed, progress.total
                ))
            }
            GuideEvent::TimerCompleted { step_index } => match guide.step(step_index) {
                Some(step) => Notice::alert(format!("Timer finished for step {}", step.number)),
                None => Notice::alert("Timer finished"),
            },
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            NoticeKind::Done => "Done:",
            NoticeKind::Alert => "Alert:",
            NoticeKind::Error => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Instruction { step_number, text } => writeln!(f, "Step {step_number}: {text}"),
            Reply::Upcoming { step_number, text } => writeln!(f, "Next up, step {step_number}: {text}"),
            Reply::EndOfRecipe => writeln!(f, "That was the last step."),
            Reply::NoSteps => writeln!(f, "This recipe has no steps."),
            Reply::TimerStarted {
                step_number,
                remaining,
            } => writeln!(f, "Timer started for step {step_number}: {remaining}"),
            Reply::TimerStopped { remaining } => writeln!(f, "Timer paused at {remaining}"),
            Reply::TimeRemaining { remaining, running } => {
                if *running {
                    writeln!(f, "{remaining} left")
                } else {
                    writeln!(f, "{remaining} left (paused)")
                }
            }
            Reply::NoTimer { step_number } => writeln!(f, "Step {step_number} has no timer."),
            Reply::NoTimerRunning => writeln!(f, "No timer is running."),
            Reply::Substitution {
                ingredient: Some(ingredient),
            } => writeln!(f, "Looking for a substitute for {ingredient}."),
            Reply::Substitution { ingredient: None } => {
                writeln!(f, "Which ingredient should be replaced?")
            }
            Reply::Help { commands } => {
                writeln!(f, "You can say:")?;
                for command in commands {
                    writeln!(f, "- {command}")?;
                }
                Ok(())
            }
        }
    }
}

/// Single countdown line, as printed by a standalone timer.
pub struct CountdownLine(pub u32);

impl fmt::Display for CountdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            writeln!(f, "⏰ {} time's up!", Clock(0))
        } else {
            writeln!(f, "⏱ {}", Clock(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guide::EventLog, models::Step};

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::done("ok").to_string(), "Done: ok\n");
        assert_eq!(Notice::error("bad").to_string(), "Error: bad\n");
    }

    #[test]
    fn test_notice_for_event_uses_step_number() {
        let mut guide = CookingGuide::new(
            vec![Step::new(10, "Boil").with_timer(5), Step::new(20, "Drain")],
            EventLog::new(),
        );
        guide.mark_step_complete(20);

        let timer = Notice::for_event(&GuideEvent::TimerCompleted { step_index: 0 }, &guide);
        assert_eq!(timer.to_string(), "Alert: Timer finished for step 10\n");

        let step = Notice::for_event(&GuideEvent::StepCompleted { step_number: 20 }, &guide);
        assert_eq!(step.to_string(), "Done: Step 20 complete (1 / 2)\n");
    }

    #[test]
    fn test_reply_display() {
        let reply = Reply::TimeRemaining {
            remaining: "1:05".to_string(),
            running: false,
        };
        assert_eq!(reply.to_string(), "1:05 left (paused)\n");
        assert_eq!(
            Reply::Substitution { ingredient: None }.to_string(),
            "Which ingredient should be replaced?\n"
        );
    }

    #[test]
    fn test_countdown_line() {
        assert_eq!(CountdownLine(61).to_string(), "⏱ 1:01\n");
        assert_eq!(CountdownLine(0).to_string(), "⏰ 0:00 time's up!\n");
    }
}

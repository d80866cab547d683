//! Notification sinks for guide events.

use crate::models::GuideEvent;

/// Receiver for the guide's completion notifications.
///
/// Any `FnMut(GuideEvent)` closure is a sink, so callers can forward events
/// to a channel or a UI without a wrapper type.
pub trait EventSink {
    fn notify(&mut self, event: GuideEvent);
}

impl<F> EventSink for F
where
    F: FnMut(GuideEvent),
{
    fn notify(&mut self, event: GuideEvent) {
        self(event)
    }
}

/// Sink that records every event in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GuideEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> &[GuideEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GuideEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of timer-completion events recorded.
    pub fn timer_completions(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GuideEvent::TimerCompleted { .. }))
            .count()
    }

    /// Number of step-completion events recorded.
    pub fn step_completions(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GuideEvent::StepCompleted { .. }))
            .count()
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: GuideEvent) {
        self.events.push(event);
    }
}

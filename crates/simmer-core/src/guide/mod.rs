//! Guided cooking: step progress and the shared countdown.
//!
//! [`CookingGuide`] tracks which steps of a recipe are done and owns a single
//! countdown bound to one step at a time. It performs no I/O and never
//! fails; its only side effect is notifying an [`EventSink`].
//!
//! # Timer lifecycle
//!
//! ```text
//!            start_timer(i, d > 0)            tick() reaches 0
//!   ┌──────┐ ────────────────────▶ ┌─────────┐ ───────────────▶ ┌─────────┐
//!   │ Idle │                       │ Running │                  │ Expired │──▶ Idle
//!   └──────┘ ◀──────────────────── └─────────┘                  └─────────┘
//!                  stop_timer()        │  ▲     fires TimerCompleted { i }
//!                                      └──┘
//!                         start_timer(j, d') replaces the run silently
//! ```
//!
//! The caller owns the one-second cadence: tick only while
//! [`CookingGuide::is_timer_running`] is true. [`drive_countdown`] does
//! this on a tokio interval.
//!
//! # Example
//!
//! ```rust
//! use simmer_core::{guide::{CookingGuide, EventLog}, models::Step};
//!
//! let steps = vec![
//!     Step::new(1, "Boil pasta").with_timer(2),
//!     Step::new(2, "Drain"),
//! ];
//! let mut guide = CookingGuide::new(steps, EventLog::new());
//!
//! guide.start_timer(0, 2);
//! guide.tick();
//! assert_eq!(guide.format_remaining(), "0:01");
//! guide.tick();
//! assert!(!guide.is_timer_running());
//!
//! guide.mark_step_complete(2);
//! assert_eq!(guide.progress().as_tuple(), (1, 2));
//! assert_eq!(guide.sink().len(), 2);
//! ```

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::{
    display::Clock,
    models::{GuideEvent, Progress, Step},
};

pub mod driver;
pub mod sink;
pub mod timer;


pub use driver::drive_countdown;
pub use sink::{EventLog, EventSink};
pub use timer::{Countdown, Tick, TimerPhase};

/// Progress and countdown state for one cooking session.
#[derive(Debug)]
pub struct CookingGuide<S = EventLog> {
    steps: Vec<Step>,
    active_index: usize,
    countdown: Countdown,
    completed: BTreeSet<u32>,
    sink: S,
}

impl<S: EventSink> CookingGuide<S> {
    /// Start a session over `steps`. An empty list is legal and reports
    /// `0/0` progress.
    pub fn new(steps: Vec<Step>, sink: S) -> Self {
        debug!("Starting cooking guide with {} steps", steps.len());
        Self {
            steps,
            active_index: 0,
            countdown: Countdown::new(),
            completed: BTreeSet::new(),
            sink,
        }
    }

    /// Bind the countdown to `step_index` and start it.
    ///
    /// A running countdown is replaced without firing its completion. A zero
    /// duration completes at once and notifies synchronously.
    pub fn start_timer(&mut self, step_index: usize, duration_seconds: u32) {
        if self.countdown.is_running() {
            debug!(
                "Replacing running timer for step index {} ({}s left)",
                self.active_index,
                self.countdown.remaining()
            );
        }

        self.active_index = step_index;
        if self.countdown.start(duration_seconds) == Tick::Expired {
            self.fire_timer_completed();
        } else {
            debug!("Timer started for step index {step_index}: {duration_seconds}s");
        }
    }

    /// Start the countdown configured on the step at `step_index`.
    ///
    /// Returns `false` when the index is out of range or the step is untimed.
    pub fn start_step_timer(&mut self, step_index: usize) -> bool {
        match self.steps.get(step_index).and_then(|step| step.timer) {
            Some(seconds) => {
                self.start_timer(step_index, seconds);
                true
            }
            None => false,
        }
    }

    /// Pause the countdown. Keeps the remaining time and never notifies.
    pub fn stop_timer(&mut self) {
        if self.countdown.is_running() {
            debug!(
                "Timer stopped for step index {} with {}s left",
                self.active_index,
                self.countdown.remaining()
            );
        }
        self.countdown.stop();
    }

    /// Advance the countdown by one second.
    ///
    /// Fires exactly one [`GuideEvent::TimerCompleted`] on the tick that
    /// reaches zero; ticks on a stopped countdown are ignored.
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick == Tick::Expired {
            self.fire_timer_completed();
        }
        tick
    }

    /// Mark `step_number` as done.
    ///
    /// Returns `true` and notifies only the first time a known step number is
    /// completed. Unknown numbers are ignored.
    pub fn mark_step_complete(&mut self, step_number: u32) -> bool {
        if !self.steps.iter().any(|step| step.number == step_number) {
            warn!("Ignoring completion of unknown step number {step_number}");
            return false;
        }
        if !self.completed.insert(step_number) {
            return false;
        }

        debug!("Step {step_number} completed");
        self.sink.notify(GuideEvent::StepCompleted { step_number });
        true
    }

    fn fire_timer_completed(&mut self) {
        debug!("Timer completed for step index {}", self.active_index);
        self.sink.notify(GuideEvent::TimerCompleted {
            step_index: self.active_index,
        });
    }
}

impl<S> CookingGuide<S> {
    /// Completed steps out of the total.
    pub fn progress(&self) -> Progress {
        Progress::new(self.completed.len(), self.steps.len())
    }

    /// Remaining countdown time as `m:ss`.
    pub fn format_remaining(&self) -> String {
        Clock(self.countdown.remaining()).to_string()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the step the countdown is bound to.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Identifies the current countdown run. Changes whenever a timer is
    /// started, including when a running timer is replaced.
    pub fn timer_run(&self) -> u64 {
        self.countdown.run()
    }

    pub fn phase(&self) -> TimerPhase {
        self.countdown.phase()
    }

    pub fn is_step_complete(&self, step_number: u32) -> bool {
        self.completed.contains(&step_number)
    }

    /// Completed step numbers in ascending order.
    pub fn completed_steps(&self) -> impl Iterator<Item = u32> + '_ {
        self.completed.iter().copied()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session and hand back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

//! The single countdown slot shared by every step of a guide.

use serde::{Deserialize, Serialize};

/// Observable lifecycle of the countdown.
///
/// Expiry is a transition rather than a resting state: a countdown that
/// reaches zero reports [`Tick::Expired`] once and settles back to `Idle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
}

/// Result of advancing the countdown by one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown was not running; nothing changed
    Ignored,
    /// Still running with this many seconds left
    Counting { remaining: u32 },
    /// Reached zero on this tick and stopped
    Expired,
}

/// Seconds-resolution countdown with explicit replace semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
    run: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `seconds` into the slot and start counting, discarding whatever
    /// was running before.
    ///
    /// A zero-length countdown expires immediately and returns
    /// [`Tick::Expired`] without ever entering the running phase.
    pub fn start(&mut self, seconds: u32) -> Tick {
        self.run = self.run.wrapping_add(1);
        self.remaining = seconds;
        if seconds == 0 {
            self.running = false;
            Tick::Expired
        } else {
            self.running = true;
            Tick::Counting { remaining: seconds }
        }
    }

    /// Pause without resetting the remaining time. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Counting {
                remaining: self.remaining,
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Counter bumped by every [`Countdown::start`], so a cadence can tell a
    /// replaced run from the one it was started for.
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.start(2), Tick::Counting { remaining: 2 });
        assert_eq!(countdown.tick(), Tick::Counting { remaining: 1 });
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.phase(), TimerPhase::Idle);
        assert_eq!(countdown.tick(), Tick::Ignored);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_zero_length_expires_immediately() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.start(0), Tick::Expired);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Ignored);
    }

    #[test]
    fn test_every_start_is_a_new_run() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.run(), 0);
        countdown.start(10);
        countdown.tick();
        assert_eq!(countdown.run(), 1);
        countdown.start(10);
        assert_eq!(countdown.run(), 2);
        countdown.stop();
        assert_eq!(countdown.run(), 2);
    }

    #[test]
    fn test_stop_keeps_remaining() {
        let mut countdown = Countdown::new();
        countdown.start(30);
        countdown.tick();
        countdown.stop();
        countdown.stop();
        assert_eq!(countdown.remaining(), 29);
        assert_eq!(countdown.tick(), Tick::Ignored);
        assert_eq!(countdown.remaining(), 29);
    }
}

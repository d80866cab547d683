//! Async cadence that ticks a guide's countdown until it stops.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use super::{CookingGuide, EventSink, Tick};

/// Tick `guide` once per `period` while its countdown runs.
///
/// The interval only exists for the lifetime of the run, so an idle guide
/// costs no wake-ups. `on_tick` receives the remaining seconds after every
/// tick, including the final `0`.
///
/// Returns the step index whose countdown expired, or `None` if the guide
/// was not running when called.
pub async fn drive_countdown<S, F>(
    guide: &mut CookingGuide<S>,
    period: Duration,
    mut on_tick: F,
) -> Option<usize>
where
    S: EventSink,
    F: FnMut(u32),
{
    if !guide.is_timer_running() {
        return None;
    }

    let period = period.max(Duration::from_millis(1));
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match guide.tick() {
            Tick::Counting { remaining } => on_tick(remaining),
            Tick::Expired => {
                on_tick(0);
                return Some(guide.active_index());
            }
            Tick::Ignored => return None,
        }
    }
}

//! Countdown clock formatting.

use std::fmt;

/// Seconds displayed as `m:ss`, with seconds zero-padded and minutes
/// unbounded (`3600` → `60:00`).
///
/// ```rust
/// use simmer_core::display::Clock;
///
/// assert_eq!(Clock(125).to_string(), "2:05");
/// assert_eq!(Clock(5).to_string(), "0:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_format() {
        assert_eq!(Clock(65).to_string(), "1:05");
        assert_eq!(Clock(0).to_string(), "0:00");
        assert_eq!(Clock(59).to_string(), "0:59");
        assert_eq!(Clock(600).to_string(), "10:00");
        assert_eq!(Clock(3661).to_string(), "61:01");
    }
}

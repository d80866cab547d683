//! Explicit listening session for speech input.

use std::time::{Duration, Instant};

use log::debug;

use super::classify;
use crate::{
    error::{Result, SimmerError},
    models::VoiceAction,
};

/// Default time a listening session stays open.
pub const DEFAULT_LISTEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Proof of an open listening session. Stale handles are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenHandle {
    id: u64,
    deadline: Instant,
}

impl ListenHandle {
    /// When the session closes on its own.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// At most one open listening window, owned by the caller.
///
/// The recogniser itself is external; transcripts it produces are fed back
/// through [`ListeningSession::deliver`] with the handle they belong to.
#[derive(Debug)]
pub struct ListeningSession {
    timeout: Duration,
    active: Option<ListenHandle>,
    next_id: u64,
}

impl ListeningSession {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            active: None,
            next_id: 0,
        }
    }

    /// Open a listening window lasting the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::AlreadyListening` if a window is still open and
    /// `SimmerError::Configuration` if the timeout overflows the clock.
    pub fn start(&mut self, now: Instant) -> Result<ListenHandle> {
        if self.is_listening(now) {
            return Err(SimmerError::AlreadyListening);
        }
        let deadline = now
            .checked_add(self.timeout)
            .ok_or_else(|| SimmerError::Configuration {
                message: format!("Listen timeout of {:?} is out of range", self.timeout),
            })?;

        self.next_id += 1;
        let handle = ListenHandle {
            id: self.next_id,
            deadline,
        };
        self.active = Some(handle);
        debug!("Listening session {} opened", handle.id);
        Ok(handle)
    }

    /// Close the window `handle` refers to. Returns `false` for stale
    /// handles, which leave any newer session untouched.
    pub fn stop(&mut self, handle: ListenHandle) -> bool {
        if self.active.is_some_and(|active| active.id == handle.id) {
            debug!("Listening session {} closed", handle.id);
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Whether a window is open and not yet past its deadline.
    pub fn is_listening(&self, now: Instant) -> bool {
        self.active.is_some_and(|active| now < active.deadline)
    }

    /// Classify a transcript produced during the window of `handle`.
    ///
    /// Transcripts for stale or expired handles are dropped (`Ok(None)`);
    /// an expired handle also closes its window.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::UnrecognizedCommand` for a current handle whose
    /// transcript matches no command.
    pub fn deliver(
        &mut self,
        handle: ListenHandle,
        transcript: &str,
        now: Instant,
    ) -> Result<Option<VoiceAction>> {
        if !self.active.is_some_and(|active| active.id == handle.id) {
            debug!("Dropping transcript for stale session {}", handle.id);
            return Ok(None);
        }
        if now >= handle.deadline {
            debug!("Listening session {} timed out", handle.id);
            self.active = None;
            return Ok(None);
        }
        classify(transcript).map(Some)
    }
}

impl Default for ListeningSession {
    fn default() -> Self {
        Self::new(DEFAULT_LISTEN_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_start_is_rejected() {
        let now = Instant::now();
        let mut session = ListeningSession::default();
        session.start(now).unwrap();
        assert!(matches!(
            session.start(now),
            Err(SimmerError::AlreadyListening)
        ));
    }

    #[test]
    fn test_start_after_timeout_opens_new_window() {
        let now = Instant::now();
        let mut session = ListeningSession::new(Duration::from_secs(5));
        let first = session.start(now).unwrap();
        let second = session.start(now + Duration::from_secs(5)).unwrap();
        assert_ne!(first, second);
        assert!(!session.stop(first));
        assert!(session.stop(second));
    }

    #[test]
    fn test_deliver_classifies_for_current_handle() {
        let now = Instant::now();
        let mut session = ListeningSession::default();
        let handle = session.start(now).unwrap();

        let action = session
            .deliver(handle, "next step", now + Duration::from_secs(2))
            .unwrap();
        assert_eq!(action, Some(VoiceAction::NextStep));
        assert!(session.is_listening(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_deliver_after_stop_is_dropped() {
        let now = Instant::now();
        let mut session = ListeningSession::default();
        let handle = session.start(now).unwrap();
        assert!(session.stop(handle));
        assert!(!session.stop(handle));

        assert_eq!(session.deliver(handle, "next step", now).unwrap(), None);
    }

    #[test]
    fn test_deliver_after_deadline_closes_session() {
        let now = Instant::now();
        let mut session = ListeningSession::new(Duration::from_secs(10));
        let handle = session.start(now).unwrap();

        let late = now + Duration::from_secs(11);
        assert_eq!(session.deliver(handle, "next step", late).unwrap(), None);
        assert!(!session.is_listening(now));
        assert!(session.start(late).is_ok());
    }

    #[test]
    fn test_oversized_timeout_is_an_error() {
        let now = Instant::now();
        let mut session = ListeningSession::new(Duration::from_secs(u64::MAX));
        assert!(matches!(
            session.start(now),
            Err(SimmerError::Configuration { .. })
        ));
        assert!(!session.is_listening(now));
    }

    #[test]
    fn test_unrecognized_transcript_is_an_error() {
        let now = Instant::now();
        let mut session = ListeningSession::default();
        let handle = session.start(now).unwrap();
        assert!(matches!(
            session.deliver(handle, "la la la", now),
            Err(SimmerError::UnrecognizedCommand { .. })
        ));
    }
}

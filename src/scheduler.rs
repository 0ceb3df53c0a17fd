//! Frame scheduling for the real-time game loop.
//!
//! The flappy session advances one tick per display frame. `FrameScheduler`
//! holds at most one pending tick deadline at a time: the loop requests the
//! next tick after finishing one, and cancels on session teardown. A
//! cancelled tick never fires, and cancelling twice is harmless.

use std::time::{Duration, Instant};

/// Tick interval for real-time play (~60 Hz).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Event-poll timeout while nothing is scheduled (menus, board games).
pub const IDLE_POLL_MS: u64 = 50;

#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    pending: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Arm the next tick, one interval from `now`. A no-op while a tick is
    /// already pending: at most one tick is ever scheduled.
    pub fn request(&mut self, now: Instant) {
        if self.pending.is_none() {
            self.pending = Some(now + self.interval);
        }
    }

    /// Drop the pending tick, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending tick if its deadline has arrived. Returns true at
    /// most once per request.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// How long the event poll may sleep without missing the deadline. Falls
    /// back to the idle interval when nothing is pending.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.pending {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::from_millis(IDLE_POLL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> FrameScheduler {
        FrameScheduler::new(Duration::from_millis(FRAME_INTERVAL_MS))
    }

    #[test]
    fn test_request_arms_a_single_tick() {
        let mut sched = scheduler();
        let t0 = Instant::now();
        assert!(!sched.is_pending());

        sched.request(t0);
        assert!(sched.is_pending());

        // A second request while pending keeps the original deadline.
        sched.request(t0 + Duration::from_millis(10));
        assert!(sched.due(t0 + Duration::from_millis(16)));
        assert!(!sched.is_pending());
    }

    #[test]
    fn test_due_waits_for_the_deadline() {
        let mut sched = scheduler();
        let t0 = Instant::now();
        sched.request(t0);

        assert!(!sched.due(t0));
        assert!(!sched.due(t0 + Duration::from_millis(15)));
        assert!(sched.due(t0 + Duration::from_millis(16)));
        // Consumed: it does not fire twice.
        assert!(!sched.due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_cancelled_tick_never_fires() {
        let mut sched = scheduler();
        let t0 = Instant::now();
        sched.request(t0);
        sched.cancel();
        sched.cancel();
        assert!(!sched.is_pending());
        assert!(!sched.due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_poll_timeout_tracks_the_deadline() {
        let mut sched = scheduler();
        let t0 = Instant::now();
        assert_eq!(
            sched.poll_timeout(t0),
            Duration::from_millis(IDLE_POLL_MS)
        );

        sched.request(t0);
        assert_eq!(
            sched.poll_timeout(t0 + Duration::from_millis(10)),
            Duration::from_millis(6)
        );
        // Past the deadline the poll must not sleep.
        assert_eq!(
            sched.poll_timeout(t0 + Duration::from_millis(30)),
            Duration::ZERO
        );
    }
}

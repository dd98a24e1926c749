//! Tick timing
//!
//! The sim is driven by one logical timer. Level-up rescheduling and
//! game-over restarts replace the timer wholesale through [`schedule`];
//! handles from a replaced timer go stale, so a deadline armed before the
//! replacement can never fire a tick afterwards.
//!
//! [`schedule`]: TickScheduler::schedule

use std::time::{Duration, Instant};

/// Handle to a scheduled timer. Stale once the scheduler re-arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
}

/// Single-timer scheduler for a cooperative host loop. The host supplies
/// the clock, so tests can drive it with synthetic instants.
#[derive(Debug)]
pub struct TickScheduler {
    generation: u64,
    interval: Duration,
    deadline: Instant,
    armed: bool,
}

impl TickScheduler {
    pub fn new(now: Instant) -> Self {
        Self {
            generation: 0,
            interval: Duration::ZERO,
            deadline: now,
            armed: false,
        }
    }

    /// Arm the timer at `interval` from `now`, cancelling any previous
    /// schedule. The returned handle is the only one [`poll`] will fire.
    ///
    /// [`poll`]: TickScheduler::poll
    pub fn schedule(&mut self, interval: Duration, now: Instant) -> TimerHandle {
        self.generation += 1;
        self.interval = interval;
        self.deadline = now + interval;
        self.armed = true;
        TimerHandle {
            generation: self.generation,
        }
    }

    /// Disarm the timer if `handle` is current; stale handles are a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if handle.generation == self.generation {
            self.armed = false;
        }
    }

    /// True while `handle` refers to the live, armed timer
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.armed && handle.generation == self.generation
    }

    /// Next fire time, if armed. Hosts sleep or poll input until this.
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.then_some(self.deadline)
    }

    /// Fire at most one tick. Returns false for stale handles and before
    /// the deadline. Re-arms from the old deadline so cadence does not
    /// drift with poll jitter; if the host stalled past a whole interval,
    /// the backlog is dropped rather than fired in a burst.
    pub fn poll(&mut self, handle: TimerHandle, now: Instant) -> bool {
        if !self.is_current(handle) || now < self.deadline {
            return false;
        }
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_on_deadline_only() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(t0);
        let handle = sched.schedule(100 * MS, t0);

        assert!(!sched.poll(handle, t0 + 99 * MS));
        assert!(sched.poll(handle, t0 + 100 * MS));
        // One firing per elapsed interval
        assert!(!sched.poll(handle, t0 + 150 * MS));
        assert!(sched.poll(handle, t0 + 200 * MS));
    }

    #[test]
    fn test_reschedule_invalidates_old_handle() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(t0);
        let old = sched.schedule(100 * MS, t0);
        let new = sched.schedule(90 * MS, t0);

        assert!(!sched.is_current(old));
        // The old deadline passing must be a no-op
        assert!(!sched.poll(old, t0 + 100 * MS));
        assert!(sched.poll(new, t0 + 90 * MS));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(t0);
        let handle = sched.schedule(50 * MS, t0);
        sched.cancel(handle);

        assert!(!sched.is_current(handle));
        assert_eq!(sched.deadline(), None);
        assert!(!sched.poll(handle, t0 + 60 * MS));
    }

    #[test]
    fn test_stale_cancel_is_noop() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(t0);
        let old = sched.schedule(50 * MS, t0);
        let new = sched.schedule(50 * MS, t0);

        sched.cancel(old);
        assert!(sched.is_current(new));
        assert!(sched.poll(new, t0 + 50 * MS));
    }

    #[test]
    fn test_stall_drops_backlog() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(t0);
        let handle = sched.schedule(10 * MS, t0);

        // Host went away for 10 intervals: exactly one firing, then the
        // timer is re-armed one interval out
        assert!(sched.poll(handle, t0 + 100 * MS));
        assert!(!sched.poll(handle, t0 + 105 * MS));
        assert!(sched.poll(handle, t0 + 110 * MS));
    }
}

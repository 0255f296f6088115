// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-based auto-scroll scheduling.
//!
//! No timer thread: the host ticks the engine and the scheduler reports when
//! a cadence deadline has elapsed. User intent overrides automation through a
//! one-way `suspended` latch that only a viewport reset clears.

/// Periodic advance-command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScroll {
    interval_ms: u64,
    next_due: Option<u64>,
    suspended: bool,
}

impl AutoScroll {
    /// Creates a stopped scheduler with the given cadence.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due: None,
            suspended: false,
        }
    }

    /// Arms the next deadline, unless the suspension latch is set.
    pub fn start(&mut self, now: u64) {
        if !self.suspended {
            self.next_due = Some(now + self.interval_ms);
        }
    }

    /// Cancels the pending deadline. Idempotent.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Sets the one-way suspension latch and cancels the pending deadline.
    ///
    /// Every user gesture lands here; automation stays off for the rest of
    /// the component's life, until a reset.
    pub fn suspend(&mut self) {
        if !self.suspended {
            self.suspended = true;
            self.next_due = None;
            log::debug!("auto-scroll suspended by user input");
        }
    }

    /// Clears the suspension latch and re-arms the cadence. Reset path only.
    pub fn reset(&mut self, now: u64) {
        self.suspended = false;
        self.start(now);
    }

    /// Whether the suspension latch is set.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// The pending deadline, if armed.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Consumes an elapsed deadline, re-arming from `now`.
    ///
    /// Returns `true` at most once per call; if the host fell several
    /// intervals behind, the missed ticks are dropped rather than replayed.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AutoScroll;

    #[test]
    fn fires_on_cadence() {
        let mut auto = AutoScroll::new(1500);
        auto.start(0);
        assert!(!auto.poll(1499));
        assert!(auto.poll(1500));
        assert_eq!(auto.next_due(), Some(3000));
        assert!(!auto.poll(2000));
        assert!(auto.poll(3000));
    }

    #[test]
    fn missed_intervals_collapse_into_one_tick() {
        let mut auto = AutoScroll::new(1000);
        auto.start(0);
        assert!(auto.poll(5500));
        assert_eq!(auto.next_due(), Some(6500));
        assert!(!auto.poll(5600));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut auto = AutoScroll::new(1000);
        auto.start(0);
        auto.stop();
        auto.stop();
        assert!(!auto.poll(10_000));
        // Not suspended: a restart re-arms.
        auto.start(10_000);
        assert!(auto.poll(11_000));
    }

    #[test]
    fn suspension_is_a_one_way_latch() {
        let mut auto = AutoScroll::new(1000);
        auto.start(0);
        auto.suspend();
        assert!(auto.is_suspended());
        assert!(!auto.poll(10_000));
        // start() does not override user intent.
        auto.start(10_000);
        assert!(!auto.poll(20_000));
        // Only the reset path clears the latch.
        auto.reset(20_000);
        assert!(!auto.is_suspended());
        assert!(auto.poll(21_000));
    }
}

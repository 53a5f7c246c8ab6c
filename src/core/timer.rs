//! Deferred callbacks.
//!
//! Behaviors never sleep; they hand a callback to a [`Scheduler`] and keep (or
//! detach) the returned [`PendingTimer`]. Dropping a pending timer cancels it,
//! which is what lets [`crate::core::Debouncer`] re-arm by simply replacing its
//! handle.
//!
//! The browser implementation wraps `gloo_timers`. Tests use
//! `manual::ManualScheduler`, a virtual clock that only moves when told to.

use std::time::Duration;

/// Handle to a scheduled callback. Dropping it cancels the callback.
pub trait PendingTimer {
    /// Let the callback run even though the handle goes away
    fn detach(self);
}

/// Source of deferred callbacks on a single-threaded event loop.
pub trait Scheduler: Clone + 'static {
    type Timer: PendingTimer;

    /// Run `callback` once after `delay`
    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Timer
    where
        F: FnOnce() + 'static;

    /// Fire-and-forget variant of [`Scheduler::schedule`]
    fn defer<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.schedule(delay, callback).detach();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{PendingTimer, Scheduler};

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct ManualClock {
        now: Duration,
        next_id: u64,
        /// Ordered by due time, then by scheduling order
        pending: BTreeMap<(Duration, u64), Callback>,
    }

    /// Deterministic scheduler driven by [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<ManualClock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current virtual time
        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        /// Number of callbacks still waiting to fire
        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, firing every callback that falls due in order.
        ///
        /// Callbacks scheduled by other callbacks fire in the same call when their
        /// due time is reached.
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = match clock.pending.keys().next() {
                        Some(&key) if key.0 <= target => key,
                        _ => break,
                    };
                    clock.now = due.0;
                    clock.pending.remove(&due)
                };
                if let Some(callback) = next {
                    callback();
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Timer = ManualTimer;

        fn schedule<F>(&self, delay: Duration, callback: F) -> ManualTimer
        where
            F: FnOnce() + 'static,
        {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now + delay, clock.next_id);
            clock.next_id += 1;
            clock.pending.insert(key, Box::new(callback));
            ManualTimer {
                key,
                clock: Rc::downgrade(&self.clock),
                detached: false,
            }
        }
    }

    /// Pending callback on a [`ManualScheduler`].
    pub(crate) struct ManualTimer {
        key: (Duration, u64),
        clock: Weak<RefCell<ManualClock>>,
        detached: bool,
    }

    impl PendingTimer for ManualTimer {
        fn detach(mut self) {
            self.detached = true;
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            if self.detached {
                return;
            }
            if let Some(clock) = self.clock.upgrade() {
                // Take the callback out before dropping it so its captures can
                // touch the clock again.
                let removed = clock.borrow_mut().pending.remove(&self.key);
                drop(removed);
            }
        }
    }
}

//! Trailing-edge debounce for bursty events (scroll)
//!
//! Each [`Debouncer::call`] replaces the pending timer, so only the last call
//! of a burst runs the handler, `wait` after that call.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::timer::Scheduler;

/// Wraps a handler so bursts of calls collapse into one trailing invocation.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait: Duration,
    handler: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Timer>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new<F>(scheduler: S, wait: Duration, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            scheduler,
            wait,
            handler: Rc::new(handler),
            pending: RefCell::new(None),
        }
    }

    /// Re-arm the timer; the handler runs once `wait` passes without another call
    pub fn call(&self) {
        let handler = self.handler.clone();
        let timer = self.scheduler.schedule(self.wait, move || handler());
        // Replacing the previous timer cancels it.
        let previous = self.pending.replace(Some(timer));
        drop(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::manual::ManualScheduler;
    use std::cell::Cell;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn counting_debouncer(
        scheduler: &ManualScheduler,
        wait: u64,
    ) -> (Debouncer<ManualScheduler>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let debouncer = Debouncer::new(scheduler.clone(), ms(wait), move || {
            counter.set(counter.get() + 1)
        });
        (debouncer, calls)
    }

    #[test]
    fn test_burst_collapses_into_one_trailing_call() {
        let scheduler = ManualScheduler::new();
        let (debouncer, calls) = counting_debouncer(&scheduler, 10);

        debouncer.call();
        scheduler.advance(ms(5));
        debouncer.call();
        scheduler.advance(ms(3));
        debouncer.call();

        // 8ms in: last call was at 8ms, so nothing until 18ms
        scheduler.advance(ms(9));
        assert_eq!(calls.get(), 0);
        scheduler.advance(ms(1));
        assert_eq!(calls.get(), 1);

        scheduler.advance(ms(100));
        assert_eq!(calls.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_spaced_calls_each_run() {
        let scheduler = ManualScheduler::new();
        let (debouncer, calls) = counting_debouncer(&scheduler, 50);

        for _ in 0..3 {
            debouncer.call();
            scheduler.advance(ms(60));
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_drop_discards_pending_call() {
        let scheduler = ManualScheduler::new();
        let (debouncer, calls) = counting_debouncer(&scheduler, 10);

        debouncer.call();
        drop(debouncer);
        scheduler.advance(ms(20));
        assert_eq!(calls.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }
}

//! `setTimeout`-backed [`Scheduler`].

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::core::{PendingTimer, Scheduler};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl PendingTimer for Timeout {
    fn detach(self) {
        let _ = self.forget();
    }
}

impl Scheduler for BrowserScheduler {
    type Timer = Timeout;

    fn schedule<F>(&self, delay: Duration, callback: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

//! browser timers behind the debounce scheduler

use gloo_timers::callback::Timeout;
use shared::Scheduler;

/// schedules on `setTimeout`; dropping the `Timeout` clears it
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

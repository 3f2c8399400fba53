//! cancel-and-reschedule debouncing over a pluggable timer

/// source of one-shot timers
///
/// dropping a returned handle must cancel its task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// keeps at most one scheduled task alive
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// cancels the outstanding task, if any, and schedules `task`
    pub fn trigger<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        // drop cancels
        self.pending.take();
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::ManualScheduler;
    use super::*;

    #[test]
    fn test_burst_runs_only_last_task() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 400);
        let fired = Rc::new(RefCell::new(Vec::new()));

        for text in ["l", "la", "lau", "laun"] {
            let fired = fired.clone();
            debouncer.trigger(move || fired.borrow_mut().push(text));
            assert_eq!(scheduler.live_tasks(), 1);
            scheduler.advance(100);
        }
        assert!(fired.borrow().is_empty());

        scheduler.advance(300);
        assert_eq!(*fired.borrow(), vec!["laun"]);
        assert_eq!(scheduler.live_tasks(), 0);
    }

    #[test]
    fn test_spaced_triggers_each_run() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 400);
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let count = count.clone();
            debouncer.trigger(move || *count.borrow_mut() += 1);
            scheduler.advance(400);
        }
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 400);
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        debouncer.trigger(move || *c.borrow_mut() += 1);
        debouncer.cancel();
        scheduler.advance(1000);
        assert_eq!(*count.borrow(), 0);
    }
}

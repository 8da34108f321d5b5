use std::time::Duration;

/// Quiet period after the last keystroke before the search runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A scheduled one-shot timer that can be called off.
pub trait CancelTimer {
    fn cancel(self);
}

impl CancelTimer for leptos::prelude::TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Holds at most one pending timer. Arming a new one cancels the previous.
#[derive(Debug)]
pub struct Debounce<H: CancelTimer> {
    pending: Option<H>,
}

impl<H: CancelTimer> Default for Debounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: CancelTimer> Debounce<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    /// Forgets the pending handle once its timer has fired.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelTimer for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn arming_cancels_the_previous_timer() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let mut debounce = Debounce::new();
        for id in 1..=3 {
            debounce.arm(FakeTimer {
                id,
                cancelled: cancelled.clone(),
            });
        }
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(debounce.is_pending());
    }

    #[test]
    fn settled_timer_is_not_cancelled_later() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let mut debounce = Debounce::new();
        debounce.arm(FakeTimer {
            id: 7,
            cancelled: cancelled.clone(),
        });
        debounce.settle();
        debounce.cancel();
        assert!(cancelled.borrow().is_empty());
        assert!(!debounce.is_pending());
    }

    #[test]
    fn cancel_clears_pending() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let mut debounce = Debounce::new();
        debounce.arm(FakeTimer {
            id: 1,
            cancelled: cancelled.clone(),
        });
        debounce.cancel();
        assert_eq!(*cancelled.borrow(), vec![1]);
        assert!(!debounce.is_pending());
    }
}

//! Timer queue driven by a manually advanced clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::feed::CancelTimer;

struct Queue<T> {
    now: Duration,
    timers: Vec<(u32, Duration, T)>,
    next_id: u32,
}

pub struct ManualClock<T>(Rc<RefCell<Queue<T>>>);

impl<T> Clone for ManualClock<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

pub struct Handle<T> {
    id: u32,
    clock: ManualClock<T>,
}

impl<T> CancelTimer for Handle<T> {
    fn cancel(self) {
        self.clock
            .0
            .borrow_mut()
            .timers
            .retain(|(id, _, _)| *id != self.id);
    }
}

impl<T> ManualClock<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Queue {
            now: Duration::ZERO,
            timers: vec![],
            next_id: 0,
        })))
    }

    pub fn now(&self) -> Duration {
        self.0.borrow().now
    }

    /// Queues `payload` to fire once `after` has elapsed from now.
    pub fn schedule(&self, after: Duration, payload: T) -> Handle<T> {
        let mut q = self.0.borrow_mut();
        q.next_id += 1;
        let id = q.next_id;
        let due = q.now + after;
        q.timers.push((id, due, payload));
        Handle {
            id,
            clock: self.clone(),
        }
    }

    /// Moves time forward and returns the payloads that fell due, earliest first.
    pub fn advance(&self, by: Duration) -> Vec<T> {
        let mut q = self.0.borrow_mut();
        q.now += by;
        let now = q.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            q.timers.drain(..).partition(|(_, at, _)| *at <= now);
        q.timers = pending;
        due.sort_by_key(|(_, at, _)| *at);
        due.into_iter().map(|(_, _, payload)| payload).collect()
    }
}

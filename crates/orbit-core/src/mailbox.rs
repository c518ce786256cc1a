use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Serial delivery queue.
///
/// Side effects applied while handling one event can synchronously raise
/// another (a `focus()` call firing `focusout`, for instance). Such nested
/// posts are queued and delivered after the current event returns, so the
/// handler never runs re-entrantly and state stays behind a single borrow.
#[derive(Debug)]
pub struct Mailbox<E> {
    queue: RefCell<VecDeque<E>>,
    draining: Cell<bool>,
}

impl<E> Default for Mailbox<E> {
    fn default() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }
}

impl<E> Mailbox<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `event`. The outermost caller drains the queue through `deliver`;
    /// nested callers only enqueue.
    pub fn post(&self, event: E, mut deliver: impl FnMut(E)) {
        self.queue.borrow_mut().push_back(event);
        if self.draining.replace(true) {
            return;
        }
        loop {
            // borrow released before delivery so `deliver` may post again
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(ev) => deliver(ev),
                None => break,
            }
        }
        self.draining.set(false);
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

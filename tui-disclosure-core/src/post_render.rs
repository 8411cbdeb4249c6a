//! Work deferred until the current frame has been drawn
//!
//! Some side effects only make sense once a render has committed: focusing
//! a menu item requires the item to exist in the frame that was just drawn.
//! Handlers push such work onto a [`PostRenderQueue`]; the main loop calls
//! [`PostRenderQueue::flush`] right after `terminal.draw(..)` and before it
//! reads the next input event.
//!
//! ```text
//! event -> dispatch -> queue.defer(..) -> draw -> queue.flush(..) -> next event
//! ```

use std::collections::VecDeque;

/// FIFO queue of requests that run after the next render pass
///
/// There is no cancellation: once deferred, a request runs at the next
/// flush. Requests deferred while a flush is in progress wait for the
/// following flush, so a request can never observe a frame older than the
/// one it was queued after.
#[derive(Debug, Clone)]
pub struct PostRenderQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for PostRenderQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PostRenderQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedule `request` for the next flush
    pub fn defer(&mut self, request: T) {
        self.pending.push_back(request);
    }

    /// Schedule several requests, keeping their order
    pub fn defer_all<I: IntoIterator<Item = T>>(&mut self, requests: I) {
        self.pending.extend(requests);
    }

    /// Number of pending requests
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, oldest first
    ///
    /// Use this when the handler needs to borrow the owner of the queue.
    pub fn take(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }

    /// Run `apply` on every request queued so far, oldest first
    ///
    /// Returns how many requests ran.
    pub fn flush(&mut self, mut apply: impl FnMut(T)) -> usize {
        let batch = self.take();
        let count = batch.len();
        for request in batch {
            apply(request);
        }
        if count > 0 {
            tracing::trace!(count, "Flushed post-render queue");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_runs_in_fifo_order() {
        let mut queue = PostRenderQueue::new();
        queue.defer("first");
        queue.defer_all(["second", "third"]);
        assert_eq!(queue.len(), 3);

        let mut seen = Vec::new();
        let ran = queue.flush(|r| seen.push(r));

        assert_eq!(ran, 3);
        assert_eq!(seen, vec!["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_nothing_runs_before_flush() {
        let mut queue = PostRenderQueue::new();
        let mut ran = false;
        queue.defer(());

        assert!(!ran);
        queue.flush(|_| ran = true);
        assert!(ran);
    }

    #[test]
    fn test_take_leaves_queue_empty() {
        let mut queue = PostRenderQueue::new();
        queue.defer(1);
        queue.defer(2);

        assert_eq!(queue.take(), vec![1, 2]);
        assert_eq!(queue.flush(|_| panic!("queue should be empty")), 0);
    }
}

//! Outbound notification queue

use heapless::Deque;
use pomo_protocol::Message;

/// Non-blocking sink for notifications
///
/// Sending never waits. A message that cannot be queued is dropped and
/// `try_send` returns `false`.
pub trait Outbox {
    fn try_send(&mut self, message: Message) -> bool;
}

/// Outbox used when no transport is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutbox;

impl Outbox for NullOutbox {
    fn try_send(&mut self, _message: Message) -> bool {
        false
    }
}

/// Fixed-capacity FIFO outbox
#[derive(Debug, Default)]
pub struct BoundedOutbox<const N: usize> {
    queue: Deque<Message, N>,
}

impl<const N: usize> BoundedOutbox<N> {
    pub const fn new() -> Self {
        Self { queue: Deque::new() }
    }

    /// Take the oldest queued message
    pub fn pop(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<const N: usize> Outbox for BoundedOutbox<N> {
    fn try_send(&mut self, message: Message) -> bool {
        self.queue.push_back(message).is_ok()
    }
}

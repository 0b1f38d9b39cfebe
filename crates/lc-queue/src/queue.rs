use lc_core::{CollectionError, Result};
use lc_stack::Stack;
use tracing::debug;

/// FIFO queue over two stacks.
#[derive(Clone, Debug)]
pub struct StackQueue<T> {
    inbound: Stack<T>,
    outbound: Stack<T>,
}

impl<T> StackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbound: Stack::new(),
            outbound: Stack::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbound.push(value);
    }

    /// Remove and return the oldest value.
    pub fn dequeue(&mut self) -> Result<T> {
        self.refill();
        self.outbound.pop().map_err(|_| CollectionError::EmptyQueue)
    }

    /// The oldest value, without removing it.
    ///
    /// Takes `&mut self` because it may have to move values between the
    /// stacks to expose the front.
    pub fn front(&mut self) -> Result<&T> {
        self.refill();
        self.outbound.peek().map_err(|_| CollectionError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.inbound.len() + self.outbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbound.is_empty() && self.outbound.is_empty()
    }

    fn refill(&mut self) {
        if !self.outbound.is_empty() {
            return;
        }

        let mut moved = 0usize;
        while let Ok(value) = self.inbound.pop() {
            self.outbound.push(value);
            moved += 1;
        }
        if moved > 0 {
            debug!(moved, "queue outbound stack refilled");
        }
    }
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for StackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = StackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue = StackQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.dequeue(), Ok("a"));

        // "c" lands on the inbound stack behind "b" on the outbound stack
        queue.enqueue("c");
        assert_eq!(queue.front(), Ok(&"b"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: StackQueue<i32> = StackQueue::new();
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyQueue));
        assert_eq!(queue.front(), Err(CollectionError::EmptyQueue));
    }

    #[test]
    fn test_from_iterator() {
        let mut queue: StackQueue<i32> = (1..=3).collect();
        assert_eq!(queue.front(), Ok(&1));
        assert_eq!(queue.len(), 3);
    }
}
